//! Token types for the placeholder mini-language embedded in catalog values.

use std::fmt;

/// Characters that may immediately precede a name token to request the
/// full, unsplit name.
pub const PREFIX_CHARS: [char; 5] = ['?', ':', '#', '*', '%'];

/// A scanned piece of a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a, T> {
    /// Text copied through unchanged.
    Literal(&'a str),
    /// A recognised token.
    Token(T),
}

/// Which name table a token reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Number {
    /// `name`, `Name`, `NAME`: the `STRINGS.NAMES.` table.
    Singular,
    /// `name_multiple`, `Name_multiple`, `NAME_MULTIPLE`: the
    /// `STRINGS.NAMES_PLURAL.` table.
    Plural,
}

/// Case transform selected by the spelling of the namespace word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
    Lower,
    AsStored,
    Upper,
}

impl Case {
    /// Apply the transform using full Unicode case mapping.
    pub fn apply(self, text: &str) -> String {
        match self {
            Case::Lower => text.to_lowercase(),
            Case::AsStored => text.to_string(),
            Case::Upper => text.to_uppercase(),
        }
    }
}

/// A name reference such as `{Name.hero}` or `#{NAME_MULTIPLE.wolf}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameToken {
    /// Optional character from [`PREFIX_CHARS`] written before the `{`.
    pub prefix: Option<char>,
    pub case: Case,
    pub number: Number,
    /// Lookup key, matching `[_a-z0-9]+`.
    pub key: String,
}

impl NameToken {
    /// The namespace word as written in the source, e.g. `Name_multiple`.
    pub fn namespace(&self) -> &'static str {
        match (self.case, self.number) {
            (Case::Lower, Number::Singular) => "name",
            (Case::AsStored, Number::Singular) => "Name",
            (Case::Upper, Number::Singular) => "NAME",
            (Case::Lower, Number::Plural) => "name_multiple",
            (Case::AsStored, Number::Plural) => "Name_multiple",
            (Case::Upper, Number::Plural) => "NAME_MULTIPLE",
        }
    }
}

impl fmt::Display for NameToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = self.prefix {
            write!(f, "{prefix}")?;
        }
        write!(f, "{{{}.{}}}", self.namespace(), self.key)
    }
}

/// A plurality selector such as `{2:item|items}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralityToken {
    /// One-based option index. Indices too large to represent saturate,
    /// which always selects the last option.
    pub index: u64,
    /// The `|`-separated options; never empty when produced by the scanner.
    pub options: Vec<String>,
}

impl PluralityToken {
    /// Zero-based position of the option `index` refers to, if in range.
    pub fn position(&self) -> Option<usize> {
        self.index
            .checked_sub(1)
            .and_then(|position| usize::try_from(position).ok())
            .filter(|&position| position < self.options.len())
    }

    /// The chosen option, falling back to the last one when `index` is out of range.
    pub fn select(&self) -> &str {
        let chosen = match self.position() {
            Some(position) => self.options.get(position),
            None => self.options.last(),
        };
        chosen.map_or("", String::as_str)
    }
}

impl fmt::Display for PluralityToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}:{}}}", self.index, self.options.join("|"))
    }
}
