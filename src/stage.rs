//! Normalization stages.
//!
//! A stage is one text transformation plus a cheap pre-check. When
//! `needs_apply` reports `false` the caller keeps the borrowed input, so a
//! chain of stages over already-normalized text never allocates.
//!
//! Stages compose at compile time through [`crate::process`]; the
//! mark-stripping normalizer used by ASCII folding is one such chain.

pub mod normalization;
pub mod remove_marks;

pub use normalization::{NFC, NFD, NFKC, NfcStage, NfdStage, NfkcStage};
pub use remove_marks::{RemoveNonspacingMarks, is_nonspacing_mark};

use std::borrow::Cow;

/// A single normalization step.
pub trait Stage: Send + Sync {
    /// Human-readable name, used in test diagnostics.
    fn name(&self) -> &'static str;

    /// Fast pre-check. `false` guarantees `apply` would return `text` unchanged.
    fn needs_apply(&self, text: &str) -> bool;

    /// Allocation-aware transformation. Must be correct even when
    /// `needs_apply` would have returned `false`.
    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str>;

    /// `apply`, skipped entirely when `needs_apply` says there is nothing to do.
    #[inline]
    fn run<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if self.needs_apply(&text) {
            self.apply(text)
        } else {
            text
        }
    }
}
