//! Thread-safe wrapper.
//!
//! A single mutex serializes every operation, reads included. There is no
//! reader-writer split.

use crate::{
    confusables::Confusables,
    diff::Diff,
    loader::{self, LoadError},
    store::{MappingStore, MappingTable},
};
use parking_lot::Mutex;
use std::{borrow::Cow, io::BufRead};

#[derive(Debug)]
pub struct SyncConfusables<S: MappingStore = MappingTable> {
    inner: Mutex<Confusables<S>>,
}

impl Default for SyncConfusables {
    fn default() -> Self {
        Confusables::new().into()
    }
}

impl<S: MappingStore> From<Confusables<S>> for SyncConfusables<S> {
    fn from(inner: Confusables<S>) -> Self {
        Self {
            inner: Mutex::new(inner),
        }
    }
}

impl<S: MappingStore> SyncConfusables<S> {
    pub fn new(inner: Confusables<S>) -> Self {
        inner.into()
    }

    pub fn into_inner(self) -> Confusables<S> {
        self.inner.into_inner()
    }

    /// Run `f` with the lock held.
    pub fn with<R>(&self, f: impl FnOnce(&Confusables<S>) -> R) -> R {
        f(&self.inner.lock())
    }

    pub fn is_confusable(&self, a: &str, b: &str) -> bool {
        self.inner.lock().is_confusable(a, b)
    }

    pub fn to_skeleton(&self, text: &str) -> String {
        self.inner.lock().to_skeleton(text)
    }

    pub fn to_skeleton_diff(&self, text: &str) -> Vec<Diff> {
        self.inner.lock().to_skeleton_diff(text)
    }

    pub fn to_ascii<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.inner.lock().to_ascii(text)
    }

    pub fn to_ascii_diff<'a>(&self, text: &'a str) -> (Cow<'a, str>, Vec<Diff>) {
        self.inner.lock().to_ascii_diff(text)
    }

    pub fn to_number(&self, text: &str) -> String {
        self.inner.lock().to_number(text)
    }

    pub fn add_mapping(&self, r: char, confusable: &str) {
        self.inner.lock().add_mapping(r, confusable);
    }

    pub fn add_mapping_with_description(&self, r: char, confusable: &str, from: &str, to: &str) {
        self.inner
            .lock()
            .add_mapping_with_description(r, confusable, from, to);
    }

    /// Reads and parses without the lock; takes it once per entry.
    pub fn load_mappings<R: BufRead>(&self, reader: R) -> Result<usize, LoadError> {
        loader::load_mappings(reader, |entry| {
            self.inner.lock().store_mut().insert(entry);
        })
    }
}
