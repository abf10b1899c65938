//! Removes non-spacing combining marks (General_Category = Mn).

use crate::stage::Stage;
use icu_properties::{CodePointMapData, CodePointMapDataBorrowed, props::GeneralCategory};
use std::borrow::Cow;
use std::sync::LazyLock;

static GENERAL_CATEGORY: LazyLock<CodePointMapDataBorrowed<'static, GeneralCategory>> =
    LazyLock::new(CodePointMapData::<GeneralCategory>::new);

/// `true` for code points classified as non-spacing marks.
#[inline(always)]
pub fn is_nonspacing_mark(c: char) -> bool {
    !c.is_ascii() && GENERAL_CATEGORY.get(c) == GeneralCategory::NonspacingMark
}

/// Deletes every non-spacing mark present in the text.
///
/// The stage does not decompose: precomposed letters such as `é` are left
/// intact. Run it after NFD to strip diacritics, which is what
/// [`STRIP_MARKS`](crate::process::STRIP_MARKS) does.
///
/// Spacing marks (Mc) and enclosing marks (Me) are kept.
#[derive(Default, Clone, Copy)]
pub struct RemoveNonspacingMarks;

impl Stage for RemoveNonspacingMarks {
    fn name(&self) -> &'static str {
        "remove_nonspacing_marks"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        !text.is_ascii() && text.chars().any(is_nonspacing_mark)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }
        Cow::Owned(text.chars().filter(|&c| !is_nonspacing_mark(c)).collect())
    }
}
