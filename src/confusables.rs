use crate::{
    ascii,
    diff::Diff,
    loader::{self, LoadError},
    parse::{ConfusableEntry, Description},
    skeleton,
    store::{MappingStore, MappingTable},
};
use std::{borrow::Cow, io::BufRead};

/// Confusable detection over an owned mapping store.
///
/// Not synchronized: readers and writers need `&self` and `&mut self`
/// respectively. Share one across threads through
/// [`SyncConfusables`](crate::SyncConfusables).
#[derive(Debug, Clone)]
pub struct Confusables<S: MappingStore = MappingTable> {
    store: S,
}

impl Default for Confusables {
    fn default() -> Self {
        Self::new()
    }
}

impl Confusables {
    /// Engine over the shipped baseline table.
    pub fn new() -> Self {
        Self::with_store(MappingTable::baseline())
    }

    pub fn builder() -> ConfusablesBuilder {
        ConfusablesBuilder::default()
    }
}

impl<S: MappingStore> Confusables<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    #[inline]
    pub fn lookup(&self, r: char) -> Option<&str> {
        self.store.lookup(r)
    }

    #[inline]
    pub fn describe(&self, key: &str) -> Option<&str> {
        self.store.describe(key)
    }

    /// See [`skeleton::confusable`].
    pub fn is_confusable(&self, a: &str, b: &str) -> bool {
        skeleton::confusable(&self.store, a, b)
    }

    pub fn to_skeleton(&self, text: &str) -> String {
        skeleton::skeleton(&self.store, text)
    }

    pub fn to_skeleton_diff(&self, text: &str) -> Vec<Diff> {
        skeleton::skeleton_diff(&self.store, text)
    }

    pub fn to_ascii<'a>(&self, text: &'a str) -> Cow<'a, str> {
        ascii::ascii(&self.store, text)
    }

    pub fn to_ascii_diff<'a>(&self, text: &'a str) -> (Cow<'a, str>, Vec<Diff>) {
        ascii::ascii_diff(&self.store, text)
    }

    pub fn to_number(&self, text: &str) -> String {
        ascii::number(&self.store, text)
    }

    /// Map `r` to `confusable`, replacing any earlier mapping.
    pub fn add_mapping(&mut self, r: char, confusable: &str) {
        self.store.add(r, confusable);
    }

    pub fn add_mapping_with_description(
        &mut self,
        r: char,
        confusable: &str,
        from: &str,
        to: &str,
    ) {
        self.store.add_with_description(r, confusable, from, to);
    }

    /// Apply every entry of a mapping file, in order. Later lines override
    /// earlier ones for the same code point.
    pub fn load_mappings<R: BufRead>(&mut self, reader: R) -> Result<usize, LoadError> {
        loader::load_mappings(reader, |entry| self.store.insert(entry))
    }
}

enum Override {
    Plain(char, String),
    Described(ConfusableEntry),
}

/// Builds a [`Confusables`] over a [`MappingTable`].
pub struct ConfusablesBuilder {
    baseline: bool,
    overrides: Vec<Override>,
}

impl Default for ConfusablesBuilder {
    fn default() -> Self {
        Self {
            baseline: true,
            overrides: Vec::new(),
        }
    }
}

impl ConfusablesBuilder {
    /// Start from an empty table instead of the baseline.
    pub fn empty(mut self) -> Self {
        self.baseline = false;
        self
    }

    pub fn mapping(mut self, r: char, confusable: impl Into<String>) -> Self {
        self.overrides.push(Override::Plain(r, confusable.into()));
        self
    }

    pub fn mapping_with_description(
        mut self,
        r: char,
        confusable: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        self.overrides.push(Override::Described(ConfusableEntry {
            source: r,
            target: confusable.into(),
            description: Description::new(from, to),
        }));
        self
    }

    pub fn build(self) -> Confusables {
        let mut store = if self.baseline {
            MappingTable::baseline()
        } else {
            MappingTable::new()
        };
        for o in self.overrides {
            match o {
                Override::Plain(r, confusable) => store.add(r, &confusable),
                Override::Described(entry) => store.insert(entry),
            }
        }
        Confusables::with_store(store)
    }
}
