use indexmap::IndexMap;

use super::{Entry, Paper};

/// Papers grouped by display category.
///
/// Categories keep their first-seen order and papers keep their encounter
/// order within a category, so the rendered listing follows the source file.
#[derive(Debug, Default)]
pub struct Catalog {
    groups: IndexMap<String, Vec<Paper>>,
}

impl Catalog {
    /// Normalize and group a sequence of parsed entries.
    ///
    /// Every entry contributes exactly one [`Paper`] to exactly one
    /// category.
    #[must_use]
    pub fn from_entries(entries: &[Entry]) -> Self {
        let mut catalog = Self::default();
        for entry in entries {
            catalog.insert(entry.category(), Paper::from_entry(entry));
        }
        catalog
    }

    /// Append a paper to a category group, creating the group on first use.
    pub fn insert(&mut self, category: String, paper: Paper) {
        self.groups.entry(category).or_default().push(paper);
    }

    /// `true` when no entry was grouped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate the category groups in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Paper])> {
        self.groups
            .iter()
            .map(|(category, papers)| (category.as_str(), papers.as_slice()))
    }
}
