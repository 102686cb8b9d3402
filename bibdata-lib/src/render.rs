//! Rendering of a [`Catalog`] as a YAML-like listing on any writer.
//!
//! The output is meant for manual copy into per-category data files of a
//! static site, so each category is introduced by a banner naming the
//! suggested file under `data/`.

use std::io::{self, Write};

use crate::ast::{Catalog, Paper};

/// The line printed when the bibliography contains no entries at all.
pub const NO_ENTRIES_MESSAGE: &str = "No entries found in the .bib file.";

const BANNER_WIDTH: usize = 50;

/// Write the category listing for `catalog` to `out`.
///
/// An empty catalog writes [`NO_ENTRIES_MESSAGE`] and nothing else.
///
/// # Errors
///
/// Returns [`Err`] when writing to `out` fails.
pub fn render<W: Write>(catalog: &Catalog, out: &mut W) -> io::Result<()> {
    if catalog.is_empty() {
        return writeln!(out, "{NO_ENTRIES_MESSAGE}");
    }

    let rule = "=".repeat(BANNER_WIDTH);
    for (category, papers) in catalog.iter() {
        writeln!(out)?;
        writeln!(out, "{rule}")?;
        writeln!(out, "CATEGORY: {category}")?;
        writeln!(out, "SUGGESTED FILE: data/{}", data_file_name(category))?;
        writeln!(out, "{rule}")?;

        for paper in papers {
            render_paper(paper, out)?;
        }
    }

    Ok(())
}

fn render_paper<W: Write>(paper: &Paper, out: &mut W) -> io::Result<()> {
    writeln!(out, "- title: \"{}\"", paper.title)?;
    writeln!(out, "  year: {}", paper.year)?;

    if let Some(authors) = &paper.authors {
        writeln!(out, "  authors: \"{authors}\"")?;
    }
    if let Some(journal) = &paper.journal {
        writeln!(out, "  journal: '{journal}'")?;
    }

    writeln!(out, "  url: \"{}\"", paper.url)?;

    // The block literal keeps quotes and backslashes inside notes from
    // breaking the structure, so it is used even for a single line.
    if let Some(notes) = &paper.notes {
        writeln!(out, "  notes: |")?;
        for line in notes.lines() {
            writeln!(out, "    {}", line.trim())?;
        }
    }

    writeln!(out)
}

fn data_file_name(category: &str) -> String {
    format!("{}.yml", category.replace(' ', "_").to_lowercase())
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::ast::{Entry, Year};

    fn rendered(catalog: &Catalog) -> String {
        let mut out = Vec::new();
        render(catalog, &mut out).expect("write to a Vec cannot fail");
        String::from_utf8(out).expect("rendered output is valid UTF-8")
    }

    fn paper(title: &str) -> Paper {
        Paper {
            title: title.to_owned(),
            year: Year::Number(2012),
            url: "#".to_owned(),
            authors: None,
            journal: None,
            notes: None,
        }
    }

    #[test]
    fn an_empty_catalog_renders_the_no_entries_message() {
        let catalog = Catalog::default();

        assert_eq!("No entries found in the .bib file.\n", rendered(&catalog));
    }

    #[test]
    fn banner_names_the_category_and_suggested_file() {
        let mut catalog = Catalog::default();
        catalog.insert("General Physics".to_owned(), paper("A title"));

        let output = rendered(&catalog);

        assert!(output.contains("CATEGORY: General Physics\n"));
        assert!(output.contains("SUGGESTED FILE: data/general_physics.yml\n"));
        assert!(output.contains(&"=".repeat(50)));
    }

    #[test]
    fn minimal_paper_renders_title_year_and_url_only() {
        let mut catalog = Catalog::default();
        catalog.insert("General Physics".to_owned(), paper("A title"));

        let output = rendered(&catalog);

        assert!(output.contains("- title: \"A title\"\n  year: 2012\n  url: \"#\"\n\n"));
        assert!(!output.contains("authors:"));
        assert!(!output.contains("journal:"));
        assert!(!output.contains("notes:"));
    }

    #[test]
    fn year_text_renders_unquoted() {
        let mut catalog = Catalog::default();
        let mut paper = paper("A title");
        paper.year = Year::Text("in press".to_owned());
        catalog.insert("General Physics".to_owned(), paper);

        assert!(rendered(&catalog).contains("  year: in press\n"));
    }

    #[test]
    fn authors_and_journal_lines_use_their_quoting_styles() {
        let mut catalog = Catalog::default();
        let mut paper = paper("A title");
        paper.authors = Some("John Smith et al.".to_owned());
        paper.journal = Some("<i>JHEP</i> <b>07</b> (2014) 079".to_owned());
        catalog.insert("Colliders".to_owned(), paper);

        let output = rendered(&catalog);

        assert!(output.contains("  authors: \"John Smith et al.\"\n"));
        assert!(output.contains("  journal: '<i>JHEP</i> <b>07</b> (2014) 079'\n"));
    }

    #[test]
    fn notes_render_as_a_block_literal_keeping_every_line() {
        let mut catalog = Catalog::default();
        let mut paper = paper("A title");
        paper.notes = Some("First point\n  Second point".to_owned());
        catalog.insert("General Physics".to_owned(), paper);

        let output = rendered(&catalog);

        assert!(output.contains("  notes: |\n    First point\n    Second point\n"));
    }

    #[test]
    fn single_line_notes_still_render_as_a_block_literal() {
        let mut catalog = Catalog::default();
        let mut paper = paper("A title");
        paper.notes = Some("Only one line".to_owned());
        catalog.insert("General Physics".to_owned(), paper);

        assert!(rendered(&catalog).contains("  notes: |\n    Only one line\n"));
    }

    #[test]
    fn categories_render_in_catalog_order() {
        let mut one = Entry::new("one");
        one.set_field("category", "Colliders");
        let mut two = Entry::new("two");
        two.set_field("category", "Dark Matter");

        let catalog = Catalog::from_entries(&[one, two]);
        let output = rendered(&catalog);

        let colliders = output.find("CATEGORY: Colliders").unwrap();
        let dark_matter = output.find("CATEGORY: Dark Matter").unwrap();
        assert!(colliders < dark_matter);
    }

    #[test]
    fn full_block_renders_in_field_order() {
        let mut catalog = Catalog::default();
        let mut paper = paper("A title");
        paper.authors = Some("ATLAS Collaboration".to_owned());
        paper.journal = Some("arXiv:1207.7214 [hep-ex]".to_owned());
        paper.url = "https://arxiv.org/abs/1207.7214".to_owned();
        paper.notes = Some("Discovery paper".to_owned());
        catalog.insert("Colliders".to_owned(), paper);

        let expected = "\n\
==================================================\n\
CATEGORY: Colliders\n\
SUGGESTED FILE: data/colliders.yml\n\
==================================================\n\
- title: \"A title\"\n\
  year: 2012\n\
  authors: \"ATLAS Collaboration\"\n\
  journal: 'arXiv:1207.7214 [hep-ex]'\n\
  url: \"https://arxiv.org/abs/1207.7214\"\n\
  notes: |\n\
    Discovery paper\n\
\n";

        assert_eq!(expected, rendered(&catalog));
    }
}
