//! Unicode skeletons (UTS #39 section 4).

use crate::{
    diff::Diff,
    stage::{NFD, Stage},
    store::MappingStore,
};
use std::borrow::Cow;

/// Decompose `text` canonically, then replace every mapped code point.
pub fn skeleton<S: MappingStore + ?Sized>(store: &S, text: &str) -> String {
    let decomposed = NFD.run(Cow::Borrowed(text));
    let mut out = String::with_capacity(decomposed.len());
    for c in decomposed.chars() {
        match store.lookup(c) {
            Some(confusable) => out.push_str(confusable),
            None => out.push(c),
        }
    }
    out
}

/// One [`Diff`] per code point of the canonically decomposed input.
pub fn skeleton_diff<S: MappingStore + ?Sized>(store: &S, text: &str) -> Vec<Diff> {
    if text.is_empty() {
        return Vec::new();
    }
    let decomposed = NFD.run(Cow::Borrowed(text));
    decomposed
        .chars()
        .map(|c| match store.lookup(c) {
            Some(confusable) => Diff::substituted(store, c, confusable.to_owned()),
            None => Diff::unchanged(c),
        })
        .collect()
}

/// `true` when both strings have the same skeleton.
///
/// The empty string only matches itself, even against input whose skeleton
/// happens to collapse to nothing.
pub fn confusable<S: MappingStore + ?Sized>(store: &S, a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return a.is_empty() && b.is_empty();
    }
    a == b || skeleton(store, a) == skeleton(store, b)
}
