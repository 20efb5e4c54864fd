use std::collections::HashMap;
use std::mem;

use tracing::debug;

use crate::catalog::Entry;
use crate::names::Namespaces;
use crate::template::Number;

/// An insertion-ordered map from name key to display name.
///
/// Iteration follows first-insertion order; inserting an existing key
/// replaces its value in place, so the last definition in catalog order
/// wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameTable {
    names: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl NameTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a name, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, name: impl Into<String>) -> Option<String> {
        let key = key.into();
        let name = name.into();
        match self.index.get(&key) {
            Some(&position) => Some(mem::replace(&mut self.names[position].1, name)),
            None => {
                self.index.insert(key.clone(), self.names.len());
                self.names.push((key, name));
                None
            }
        }
    }

    /// Get the display name for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&position| self.names[position].1.as_str())
    }

    /// Get the display name for a key, or the key itself when undefined.
    pub fn resolve<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key).unwrap_or(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over `(key, name)` pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names
            .iter()
            .map(|(key, name)| (key.as_str(), name.as_str()))
    }

    /// Iterate over keys in first-insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|(key, _)| key.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for NameTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = NameTable::new();
        for (key, name) in iter {
            table.insert(key, name);
        }
        table
    }
}

/// The singular and plural name tables for one catalog.
///
/// Built once per run and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameTables {
    pub singular: NameTable,
    pub plural: NameTable,
}

impl NameTables {
    pub fn new(singular: NameTable, plural: NameTable) -> Self {
        Self { singular, plural }
    }

    /// Build tables from catalog entries.
    ///
    /// An entry contributes when its context starts with one of the
    /// namespace prefixes and it has a singular value. Entries are visited
    /// in order, so a later duplicate key overwrites an earlier one.
    pub fn from_entries<'a>(
        entries: impl IntoIterator<Item = &'a Entry>,
        namespaces: &Namespaces,
    ) -> Self {
        let mut tables = NameTables::default();
        for entry in entries {
            let (Some(context), Some(value)) = (entry.context(), entry.value()) else {
                continue;
            };
            if let Some((number, key)) = namespaces.classify(context) {
                if let Some(previous) = tables.table_mut(number).insert(key, value) {
                    debug!(key, previous = %previous, replacement = value, "name redefined");
                }
            }
        }
        debug!(
            singular = tables.singular.len(),
            plural = tables.plural.len(),
            "built name tables"
        );
        tables
    }

    /// The table a token of the given number reads from.
    pub fn table(&self, number: Number) -> &NameTable {
        match number {
            Number::Singular => &self.singular,
            Number::Plural => &self.plural,
        }
    }

    fn table_mut(&mut self, number: Number) -> &mut NameTable {
        match number {
            Number::Singular => &mut self.singular,
            Number::Plural => &mut self.plural,
        }
    }
}
