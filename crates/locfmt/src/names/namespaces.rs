use bon::Builder;

use crate::template::Number;

/// Context prefix marking a singular name definition.
pub const SINGULAR_PREFIX: &str = "STRINGS.NAMES.";

/// Context prefix marking a plural name definition.
pub const PLURAL_PREFIX: &str = "STRINGS.NAMES_PLURAL.";

/// The pair of reserved context prefixes that mark name definitions.
///
/// Matching is a case-sensitive `starts_with`. The singular prefix is
/// checked first.
///
/// # Example
///
/// ```
/// use locfmt::Namespaces;
/// use locfmt::template::Number;
///
/// let namespaces = Namespaces::default();
/// assert_eq!(
///     namespaces.classify("STRINGS.NAMES_PLURAL.CREATURES.wolf"),
///     Some((Number::Plural, "wolf"))
/// );
/// assert_eq!(namespaces.classify("STRINGS.UI.title"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(on(String, into))]
pub struct Namespaces {
    #[builder(default = SINGULAR_PREFIX.to_string())]
    singular: String,

    #[builder(default = PLURAL_PREFIX.to_string())]
    plural: String,
}

impl Default for Namespaces {
    fn default() -> Self {
        Namespaces::builder().build()
    }
}

impl Namespaces {
    pub fn singular(&self) -> &str {
        &self.singular
    }

    pub fn plural(&self) -> &str {
        &self.plural
    }

    /// Whether an entry with this context defines a singular name, in which
    /// case its own value is reduced to its canonical form.
    pub fn is_name_definition(&self, context: Option<&str>) -> bool {
        context.is_some_and(|context| context.starts_with(&self.singular))
    }

    /// Classify a context as a singular or plural name definition and
    /// extract its table key: the text after the final `.`.
    pub fn classify<'a>(&self, context: &'a str) -> Option<(Number, &'a str)> {
        let number = if context.starts_with(&self.singular) {
            Number::Singular
        } else if context.starts_with(&self.plural) {
            Number::Plural
        } else {
            return None;
        };
        let key = context.rsplit_once('.').map_or(context, |(_, key)| key);
        Some((number, key))
    }
}
