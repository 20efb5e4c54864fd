//! Gettext `.po` catalog model, parser and writer.
//!
//! The model keeps just enough structure to rewrite translated values and
//! write the catalog back: comment lines are carried verbatim, and fields
//! are stored unescaped.

mod error;
mod parse;
mod write;

pub use error::ParseError;
pub use parse::parse_catalog;
pub use write::write_catalog;

/// A parsed translation catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Entries in file order. The header, if present, is the first entry
    /// with an empty `msgid`.
    pub entries: Vec<Entry>,
    /// Comment lines after the last entry, usually obsolete (`#~`) entries.
    pub trailing_comments: Vec<String>,
}

impl Catalog {
    /// Create a catalog from a list of entries.
    pub fn new(entries: Vec<Entry>) -> Self {
        Self {
            entries,
            trailing_comments: Vec::new(),
        }
    }

    /// Find the first entry with the given context.
    pub fn find_by_context(&self, context: &str) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|entry| entry.context() == Some(context))
    }
}

/// One catalog record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Raw `#` lines preceding the entry, including the leading `#`.
    pub comments: Vec<String>,
    /// `msgctxt`, which doubles as the entry's key.
    pub context: Option<String>,
    /// `msgid`.
    pub id: String,
    /// `msgid_plural`.
    pub id_plural: Option<String>,
    /// `msgstr` or `msgstr[n]`.
    pub translation: Translation,
}

/// The translated side of an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    /// A single `msgstr`.
    Singular(String),
    /// Indexed `msgstr[n]` forms, in index order.
    Plural(Vec<String>),
}

impl Entry {
    /// Create an entry with a singular translation and no context.
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            comments: Vec::new(),
            context: None,
            id: id.into(),
            id_plural: None,
            translation: Translation::Singular(value.into()),
        }
    }

    /// Set the entry's context.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    /// The singular translated value, or `None` for plural-form entries.
    pub fn value(&self) -> Option<&str> {
        match &self.translation {
            Translation::Singular(value) => Some(value),
            Translation::Plural(_) => None,
        }
    }
}
