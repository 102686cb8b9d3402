use crate::{ast::Entry, Error, ErrorKind};

use super::Format;

use biblatex::Bibliography;

/// A type wrapper around [`String`] to represent a `BibTex` format string.
#[derive(Debug)]
pub struct BibTex(String);

impl Format for BibTex {
    fn new(val: String) -> Self {
        Self(val)
    }

    fn parse(self) -> Result<Vec<Entry>, Error> {
        if self.0.trim().is_empty() {
            // Zero entries is a reportable state of the tool, not a parse
            // error, so an empty input short-circuits here.
            return Ok(Vec::new());
        }

        let biblio = Bibliography::parse(&self.0).ok_or_else(|| {
            Error::new(ErrorKind::Deserialize, "Unable to parse string as BibTeX")
        })?;

        Ok(biblio.into_iter().map(Entry::from).collect())
    }

    fn raw(self) -> String {
        self.0
    }

    fn name() -> &'static str {
        "BibTex"
    }

    fn ext() -> &'static str {
        "bib"
    }
}

impl From<biblatex::Entry> for Entry {
    fn from(entry: biblatex::Entry) -> Self {
        // Deconstruct to avoid cloning
        let biblatex::Entry {
            key: cite,
            entry_type: _,
            mut fields,
        } = entry;

        let mut converted = Self::new(cite);
        for (name, value) in fields.drain() {
            converted.set_field(&name, flatten_chunks(value));
        }

        converted
    }
}

/// Flatten a chunk list to its plain text.
///
/// biblatex splits a field value into normal and verbatim (brace-protected)
/// chunks. The pipeline strips braces from every value anyway, so both chunk
/// kinds contribute their text and the grouping is dropped.
fn flatten_chunks(chunks: biblatex::Chunks) -> String {
    use biblatex::Chunk::{Normal, Verbatim};

    let mut value = String::new();
    for chunk in chunks {
        match chunk {
            Normal(s) | Verbatim(s) => value.push_str(&s),
        }
    }
    value
}
