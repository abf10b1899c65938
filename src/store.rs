//! Mapping store: code point → confusable string, text → description.
//!
//! Writes are last-write-wins for both tables. There is no removal.

use crate::parse::ConfusableEntry;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

mod generated {
    include!(concat!(env!("OUT_DIR"), "/tables_gen.rs"));
}

/// Capability shared by every store the algorithms can run against.
///
/// Reads take `&self` and writes take `&mut self`, so an implementation is
/// only safe for concurrent read + write when wrapped by
/// [`SyncConfusables`](crate::SyncConfusables).
pub trait MappingStore: Send + Sync {
    /// Confusable string for `r`, if one is mapped.
    fn lookup(&self, r: char) -> Option<&str>;

    /// Character name(s) for a literal code point or a mapped target string.
    fn describe(&self, key: &str) -> Option<&str>;

    /// Map `r` to `confusable`, replacing any previous mapping.
    fn add(&mut self, r: char, confusable: &str);

    /// Like [`add`](Self::add), and record names for both sides.
    fn add_with_description(&mut self, r: char, confusable: &str, from: &str, to: &str);

    /// Number of mapped code points.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert a parsed mapping-file entry.
    fn insert(&mut self, entry: ConfusableEntry) {
        self.add_with_description(
            entry.source,
            &entry.target,
            &entry.description.from,
            &entry.description.to,
        );
    }
}

static BASELINE: LazyLock<MappingTable> = LazyLock::new(|| {
    let mut table = MappingTable {
        confusables: HashMap::with_capacity(generated::CONFUSABLES.len()),
        descriptions: HashMap::with_capacity(generated::DESCRIPTIONS.len()),
    };
    table.confusables.extend(
        generated::CONFUSABLES
            .iter()
            .map(|&(r, c)| (r, c.to_owned())),
    );
    table.descriptions.extend(
        generated::DESCRIPTIONS
            .iter()
            .map(|&(k, v)| (k.to_owned(), v.to_owned())),
    );
    debug!(
        mappings = table.confusables.len(),
        descriptions = table.descriptions.len(),
        "Baseline confusables table built"
    );
    table
});

/// Unsynchronized, hash-map backed store.
#[derive(Debug, Clone, Default)]
pub struct MappingTable {
    confusables: HashMap<char, String>,
    descriptions: HashMap<String, String>,
}

impl MappingTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh copy of the table generated from the shipped data files.
    pub fn baseline() -> Self {
        BASELINE.clone()
    }
}

impl MappingStore for MappingTable {
    #[inline]
    fn lookup(&self, r: char) -> Option<&str> {
        self.confusables.get(&r).map(String::as_str)
    }

    #[inline]
    fn describe(&self, key: &str) -> Option<&str> {
        self.descriptions.get(key).map(String::as_str)
    }

    fn add(&mut self, r: char, confusable: &str) {
        self.confusables.insert(r, confusable.to_owned());
    }

    fn add_with_description(&mut self, r: char, confusable: &str, from: &str, to: &str) {
        self.descriptions.insert(r.to_string(), from.to_owned());
        self.descriptions
            .insert(confusable.to_owned(), to.to_owned());
        self.add(r, confusable);
    }

    #[inline]
    fn len(&self) -> usize {
        self.confusables.len()
    }
}
