//! Per-character change records.

use crate::{
    parse::Description,
    stage::{NFD, Stage},
    store::MappingStore,
};
use smallvec::SmallVec;
use std::borrow::Cow;

/// One input code point and what, if anything, replaced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diff {
    pub rune: char,
    /// Set only when a substitution happened.
    pub confusable: Option<String>,
    /// Set only when both sides have known names. Never guessed.
    pub description: Option<Description>,
}

impl Diff {
    /// A code point that was kept as-is.
    #[inline]
    pub fn unchanged(rune: char) -> Self {
        Self {
            rune,
            confusable: None,
            description: None,
        }
    }

    pub(crate) fn substituted<S: MappingStore + ?Sized>(
        store: &S,
        rune: char,
        confusable: String,
    ) -> Self {
        let description = resolve_description(store, rune, &confusable);
        Self {
            rune,
            confusable: Some(confusable),
            description,
        }
    }

    #[inline]
    pub fn is_substitution(&self) -> bool {
        self.confusable.is_some()
    }

    /// The text this entry contributes to the folded output.
    pub fn output(&self) -> Cow<'_, str> {
        match &self.confusable {
            Some(c) => Cow::Borrowed(c),
            None => Cow::Owned(self.rune.to_string()),
        }
    }
}

/// Names for `rune → confusable`, or `None` if either side is unknown.
pub(crate) fn resolve_description<S: MappingStore + ?Sized>(
    store: &S,
    rune: char,
    confusable: &str,
) -> Option<Description> {
    let from = describe_rune(store, rune)?;
    let to = store.describe(confusable)?;
    Some(Description::new(from, to))
}

/// Name of a single code point.
///
/// Falls back to the names of its canonical decomposition, joined with
/// `", "`. Every component must be known; a partial name is never produced.
fn describe_rune<S: MappingStore + ?Sized>(store: &S, rune: char) -> Option<String> {
    let mut buf = [0u8; 4];
    let literal: &str = rune.encode_utf8(&mut buf);
    if let Some(name) = store.describe(literal) {
        return Some(name.to_owned());
    }

    let decomposed = NFD.run(Cow::Borrowed(literal));
    if decomposed == literal {
        return None;
    }
    let names = decomposed
        .chars()
        .map(|c| store.describe(c.encode_utf8(&mut [0u8; 4])))
        .collect::<Option<SmallVec<[&str; 4]>>>()?;
    Some(names.join(", "))
}
