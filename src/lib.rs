//! Unicode confusable detection.
//!
//! Three capabilities over one mapping table:
//!
//! - skeletons ([`to_skeleton`], [`is_confusable`]) for cross-script
//!   equality checks,
//! - ASCII folding ([`to_ascii`], [`to_ascii_diff`]) with an optional
//!   per-character report,
//! - digit folding ([`to_number`]).
//!
//! The free functions run against a process-wide [`SyncConfusables`] built
//! from the shipped table on first use. Use [`Confusables`] directly for an
//! isolated, unsynchronized table.
//!
//! ```
//! assert!(confusables::is_confusable("example", "𝐞х⍺𝓂𝕡Іꬲ"));
//! assert_eq!(confusables::to_ascii("newtòñ"), "newton");
//! assert_eq!(confusables::to_number("O12"), "012");
//! ```

pub mod ascii;
pub mod confusables;
pub mod diff;
pub mod loader;
pub mod numeric;
pub mod parse;
pub mod process;
pub mod skeleton;
pub mod stage;
pub mod store;
pub mod sync;

#[cfg(test)]
pub mod testing;

pub use confusables::{Confusables, ConfusablesBuilder};
pub use diff::Diff;
pub use loader::LoadError;
pub use numeric::fold_numeric;
pub use parse::{ConfusableEntry, Description, ParseError, ParsedLine, parse_line};
pub use process::strip_marks;
pub use store::{MappingStore, MappingTable};
pub use sync::SyncConfusables;

use std::{borrow::Cow, io::BufRead, sync::LazyLock};

static DEFAULT: LazyLock<SyncConfusables> = LazyLock::new(SyncConfusables::default);

/// The process-wide instance behind the free functions.
pub fn global() -> &'static SyncConfusables {
    &DEFAULT
}

pub fn is_confusable(a: &str, b: &str) -> bool {
    DEFAULT.is_confusable(a, b)
}

pub fn to_skeleton(text: &str) -> String {
    DEFAULT.to_skeleton(text)
}

pub fn to_skeleton_diff(text: &str) -> Vec<Diff> {
    DEFAULT.to_skeleton_diff(text)
}

pub fn to_ascii(text: &str) -> Cow<'_, str> {
    DEFAULT.to_ascii(text)
}

pub fn to_ascii_diff(text: &str) -> (Cow<'_, str>, Vec<Diff>) {
    DEFAULT.to_ascii_diff(text)
}

pub fn to_number(text: &str) -> String {
    DEFAULT.to_number(text)
}

/// Visible to every later call in the process.
pub fn add_mapping(r: char, confusable: &str) {
    DEFAULT.add_mapping(r, confusable);
}

pub fn add_mapping_with_description(r: char, confusable: &str, from: &str, to: &str) {
    DEFAULT.add_mapping_with_description(r, confusable, from, to);
}

/// Extend the process-wide table from a mapping file.
pub fn load_mappings<R: BufRead>(reader: R) -> Result<usize, LoadError> {
    DEFAULT.load_mappings(reader)
}
