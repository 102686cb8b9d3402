//! Contains traits and implementations of the [`Format`] and [`Reader`]
//! traits.

use std::marker::PhantomData;

mod bibtex;

use crate::{ast::Entry, Error};
pub use bibtex::BibTex;

/// A textual representation that can be parsed into a sequence of entries.
///
/// Formats are promises at the type level about what a [`String`] (or
/// similar) represents. Parsing is the only direction supported: this tool
/// reads bibliographies, it never composes them back.
pub trait Format {
    /// Construct a new type using a [`String`] input.
    ///
    /// This function should not panic or fail as creating a [`Format`] is a
    /// type promise about what the [`String`] represents.
    fn new(val: String) -> Self;

    /// Parses this [`Format`] into an ordered sequence of entries.
    ///
    /// The order of the returned entries is the order they occur in the
    /// input.
    ///
    /// # Errors
    ///
    /// Will return [`Err`] if it's not possible to parse this [`Format`]
    /// into entries.
    fn parse(self) -> Result<Vec<Entry>, Error>;

    /// The current [`Format`] in a raw [`String`].
    ///
    /// Most [`Format`]s are likely to be type wrappers around [`String`] so
    /// this is a method to consume self and get that raw [`String`].
    fn raw(self) -> String;

    /// The display name of the format.
    fn name() -> &'static str;

    /// The file extension associated with this format.
    fn ext() -> &'static str;
}

/// The [`Reader`] trait allows for reading a [`Format`] from a source.
///
/// Readers are defined by implementing the [`Reader::read`] method which
/// reads a format from this given reader, and have a default implementation
/// of [`Reader::read_entries`] built on it.
pub trait Reader {
    /// The format associated with the reader.
    type Format: Format;

    /// Pull text from this reader in order to produce a [`Reader::Format`]
    /// instance.
    ///
    /// # Errors
    /// If this method encounters any form of error making it unable to read
    /// the text in order to create the format.
    fn read(&mut self) -> Result<Self::Format, Error>;

    /// Read from this reader using [`Reader::read`] and then parse using
    /// [`Format::parse`] with the associated [`Reader::Format`] type.
    ///
    /// # Errors
    /// This will return [`Err`] if there is an error from [`Reader::read`]
    /// or an error when parsing using [`Format::parse`].
    fn read_entries(&mut self) -> Result<Vec<Entry>, Error> {
        let format = self.read()?;
        format.parse()
    }
}

/// A [`String`] wrapper that includes type information of the format the
/// wrapped [`String`] represents.
#[derive(PartialEq)]
pub struct FormatString<F: Format> {
    inner: String,
    _format: PhantomData<F>,
}

impl<F: Format> Default for FormatString<F> {
    fn default() -> Self {
        Self {
            inner: String::default(),
            _format: PhantomData,
        }
    }
}

impl<F: Format> FormatString<F> {
    /// Construct a new instance by wrapping an existing [`String`].
    #[must_use]
    pub const fn new(val: String) -> Self {
        Self {
            inner: val,
            _format: PhantomData,
        }
    }
}

impl<F: Format> From<FormatString<F>> for String {
    fn from(val: FormatString<F>) -> Self {
        val.inner
    }
}

impl<F: Format> Reader for FormatString<F> {
    type Format = F;

    fn read(&mut self) -> Result<Self::Format, Error> {
        Ok(F::new(self.inner.clone()))
    }
}
