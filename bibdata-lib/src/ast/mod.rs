//! The intermediate representation of a bibliography which is not tied to the
//! BibTeX source format.
//!
//! [`Entry`] is what the parser produces: a cite key and a bag of named
//! fields. [`Paper`] is the normalized record derived from one entry, and
//! [`Catalog`] groups papers by their display category.

use std::collections::HashMap;

mod catalog;
mod paper;

pub use catalog::Catalog;
pub use paper::{Paper, Year};

/// The category used when an entry carries neither a `category` nor a
/// `keywords` field.
pub const DEFAULT_CATEGORY: &str = "General Physics";

/// A single parsed bibliography entry.
///
/// Field names are lowercase and field values are plain text with any brace
/// groups from the source already flattened. An `Entry` keeps fields with
/// empty values, so "field present but empty" and "field absent" remain
/// distinguishable — several normalization rules depend on the difference.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Entry {
    cite: String,
    fields: HashMap<String, String>,
}

impl Entry {
    /// Create an entry with no fields.
    #[must_use]
    pub fn new<S: Into<String>>(cite: S) -> Self {
        Self {
            cite: cite.into(),
            fields: HashMap::new(),
        }
    }

    /// The cite key of this entry.
    #[must_use]
    pub fn cite(&self) -> &str {
        &self.cite
    }

    /// Set a field value, replacing any existing value of that field.
    pub fn set_field<S: Into<String>>(&mut self, name: &str, value: S) {
        self.fields.insert(name.to_lowercase(), value.into());
    }

    /// The value of a field, when the field is present.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// The display category this entry is grouped under.
    ///
    /// Reads the `category` field, falling back to `keywords`, falling back
    /// to [`DEFAULT_CATEGORY`], and takes the first comma-separated token,
    /// trimmed.
    #[must_use]
    pub fn category(&self) -> String {
        let raw = self
            .field("category")
            .or_else(|| self.field("keywords"))
            .unwrap_or(DEFAULT_CATEGORY);

        raw.split(',').next().unwrap_or(raw).trim().to_owned()
    }
}
