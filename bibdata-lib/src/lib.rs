#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![warn(missing_docs, rust_2018_idioms)]
#![allow(clippy::module_name_repetitions)]
#![doc = include_str!("../README.md")]

pub mod ast;
mod error;
pub mod format;
pub mod render;

use ast::Catalog;
pub use error::{Error, ErrorKind};

use format::{BibTex, Format};
use log::trace;

/// Convert raw BibTeX text into the rendered category listing.
///
/// This is the whole pipeline in one call: parse `raw` as BibTeX, normalize
/// every entry, group the results by category, and write the listing to
/// `out`. An input with zero entries writes the no-entries message and
/// nothing else.
///
/// # Errors
///
/// An `Err` of [`ErrorKind::Deserialize`] is returned when `raw` cannot be
/// parsed as BibTeX.
/// An `Err` of [`ErrorKind::IO`] is returned when writing to `out` fails.
pub fn generate<W: std::io::Write>(raw: String, out: &mut W) -> Result<(), Error> {
    trace!("Parsing {} bytes of bibliography input", raw.len());
    let entries = BibTex::new(raw).parse()?;

    trace!("Grouping {} entries by category", entries.len());
    let catalog = Catalog::from_entries(&entries);

    render::render(&catalog, out)
        .map_err(|e| Error::wrap_with(ErrorKind::IO, e, "Cannot write the rendered listing"))
}
