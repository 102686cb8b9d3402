use std::fmt;

use super::Entry;

/// A normalized paper record, ready for rendering.
///
/// Built once per [`Entry`] by [`Paper::from_entry`] and never mutated
/// afterwards. Optional fields are `None` when the entry had nothing usable
/// for them, and the rendered block omits those lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Paper {
    /// Display title with braces stripped and double quotes normalized.
    pub title: String,
    /// Publication year.
    pub year: Year,
    /// Link for the paper, falling back to `#` when the entry has none.
    pub url: String,
    /// Formatted author line or collaboration name.
    pub authors: Option<String>,
    /// JHEP-style publication string.
    pub journal: Option<String>,
    /// Free-form notes, internal newlines preserved.
    pub notes: Option<String>,
}

/// A year field value.
///
/// An all-digit year is kept as a number so that it renders unquoted as an
/// integer; anything else is preserved verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Year {
    /// The year string was entirely ASCII digits.
    Number(i64),
    /// Any other year string, kept as found (possibly empty).
    Text(String),
}

impl Year {
    fn from_raw(raw: &str) -> Self {
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            raw.parse()
                .map_or_else(|_| Self::Text(raw.to_owned()), Self::Number)
        } else {
            Self::Text(raw.to_owned())
        }
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(year) => write!(f, "{year}"),
            Self::Text(year) => f.write_str(year),
        }
    }
}

impl Paper {
    /// Normalize a parsed entry into a `Paper`.
    ///
    /// A pure function of the entry's fields; the rules for each field are
    /// documented on the private helpers below.
    #[must_use]
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            title: display_title(entry),
            year: Year::from_raw(entry.field("year").unwrap_or_default()),
            url: resolve_url(entry),
            authors: author_line(entry),
            journal: publication(entry),
            notes: notes(entry),
        }
    }
}

/// Strip literal braces and turn double quotes into single quotes so the
/// value can sit inside a double-quoted scalar.
fn strip_delims(value: &str) -> String {
    value.replace('{', "").replace('}', "").replace('"', "'")
}

/// A field value with braces/quotes stripped and surrounding whitespace
/// trimmed, or empty when the field is absent.
fn stripped_field(entry: &Entry, name: &str) -> String {
    strip_delims(entry.field(name).unwrap_or_default())
        .trim()
        .to_owned()
}

fn display_title(entry: &Entry) -> String {
    strip_delims(entry.field("title").unwrap_or("Untitled"))
}

/// The author line: a collaboration name when one is present, otherwise the
/// formatted author list.
///
/// Collaborations get a literal " Collaboration" suffix unless the word
/// already occurs in the name. Author lists are split on " and ", each
/// "Last, First" name reordered to "First Last", a trailing "others" token
/// becomes "et al." appended without a comma, and any literal backslash is
/// doubled to survive the double-quoted output line.
fn author_line(entry: &Entry) -> Option<String> {
    let collaboration = stripped_field(entry, "collaboration");

    let line = if collaboration.is_empty() {
        format_author_list(entry.field("author").unwrap_or_default())
    } else if collaboration.to_lowercase().contains("collaboration") {
        collaboration
    } else {
        format!("{collaboration} Collaboration")
    };

    if line.is_empty() {
        None
    } else {
        Some(line)
    }
}

fn format_author_list(raw: &str) -> String {
    let raw = strip_delims(raw).replace('\n', " ");
    let names = raw
        .trim()
        .split(" and ")
        .map(format_name)
        .collect::<Vec<_>>();

    let line = match names.split_last() {
        Some((last, rest)) if last == "et al." => format!("{} et al.", rest.join(", ")),
        _ => names.join(", "),
    };

    line.replace('\\', "\\\\")
}

fn format_name(name: &str) -> String {
    let name = name.trim();
    if name.eq_ignore_ascii_case("others") {
        "et al.".to_owned()
    } else if let Some((last, first)) = name.split_once(',') {
        // "Last, First" format -> convert to "First Last"
        format!("{} {}", first.trim(), last.trim())
    } else {
        name.to_owned()
    }
}

/// The JHEP-style publication string: `<i>Journal</i> <b>Volume</b> (Year)
/// Pages`, falling back to the booktitle and then to the eprint reference.
fn publication(entry: &Entry) -> Option<String> {
    let journal = stripped_field(entry, "journal");
    let booktitle = stripped_field(entry, "booktitle");
    let eprint = entry.field("eprint").unwrap_or_default().trim();
    let year = entry.field("year").unwrap_or_default();
    let pages = pages(entry);

    let mut composed = String::new();
    if !journal.is_empty() {
        composed.push_str(&format!("<i>{journal}</i>"));
        let volume = entry.field("volume").unwrap_or_default().trim();
        if !volume.is_empty() {
            composed.push_str(&format!(" <b>{volume}</b>"));
        }
        if !year.is_empty() {
            composed.push_str(&format!(" ({year})"));
        }
        if !pages.is_empty() {
            composed.push_str(&format!(" {pages}"));
        }
    } else if !booktitle.is_empty() {
        composed.push_str(&format!("<i>{booktitle}</i>"));
        if !year.is_empty() {
            composed.push_str(&format!(" ({year})"));
        }
        if !pages.is_empty() {
            composed.push_str(&format!(" {pages}"));
        }
    } else if !eprint.is_empty() {
        let archive = entry.field("archiveprefix").unwrap_or("arXiv").trim();
        composed.push_str(&format!("{archive}:{eprint}"));
        let primary = entry.field("primaryclass").unwrap_or_default().trim();
        if !primary.is_empty() {
            composed.push_str(&format!(" [{primary}]"));
        }
    }

    if composed.is_empty() {
        None
    } else {
        Some(composed)
    }
}

/// Page reference with "--" collapsed to "-"; the electronic identifier
/// (eid) or issue number stands in when the entry has no pages.
fn pages(entry: &Entry) -> String {
    let pages = entry.field("pages").unwrap_or_default().replace("--", "-");
    let pages = pages.trim();

    if pages.is_empty() {
        entry
            .field("eid")
            .or_else(|| entry.field("number"))
            .unwrap_or_default()
            .trim()
            .to_owned()
    } else {
        pages.to_owned()
    }
}

/// Link priority: arXiv abstract page for an eprint, then the DOI resolver,
/// then the raw url field, then the `#` placeholder.
fn resolve_url(entry: &Entry) -> String {
    if let Some(eprint) = entry.field("eprint") {
        format!("https://arxiv.org/abs/{eprint}")
    } else if let Some(doi) = entry.field("doi") {
        format!("https://doi.org/{doi}")
    } else {
        entry.field("url").unwrap_or("#").to_owned()
    }
}

fn notes(entry: &Entry) -> Option<String> {
    let notes = entry.field("note").or_else(|| entry.field("annote"))?;
    let notes = notes.replace('"', "'");
    let notes = notes.trim();

    if notes.is_empty() {
        None
    } else {
        Some(notes.to_owned())
    }
}
