//! ASCII folding and digit folding.
//!
//! Works over the input's own code points; nothing is decomposed up front.
//! Each non-ASCII code point is tried against, in order: the numeric table
//! (only when folding to a number), its mapped confusable with marks
//! stripped, and itself with marks stripped. The first candidate that is
//! pure ASCII wins; otherwise the code point is kept, and runs of kept code
//! points go through NFKC.

use crate::{
    diff::Diff,
    numeric::fold_numeric,
    process::strip_marks,
    stage::{NFKC, Stage},
    store::MappingStore,
};
use smallvec::SmallVec;
use std::borrow::Cow;

/// ASCII replacement for a single non-ASCII code point.
fn fold_rune<'s, S: MappingStore + ?Sized>(
    store: &'s S,
    r: char,
    digits: bool,
) -> Option<Cow<'s, str>> {
    if digits && let Some(number) = fold_numeric(r) {
        return Some(Cow::Borrowed(number));
    }
    if let Some(mapped) = store.lookup(r) {
        let stripped = strip_marks(mapped);
        if stripped.is_ascii() {
            return Some(stripped);
        }
    }
    let mut buf = [0u8; 4];
    let stripped = strip_marks(r.encode_utf8(&mut buf));
    stripped.is_ascii().then(|| Cow::Owned(stripped.into_owned()))
}

fn fold<'a, S: MappingStore + ?Sized>(
    store: &S,
    text: &'a str,
    digits: bool,
    mut diffs: Option<&mut Vec<Diff>>,
) -> Cow<'a, str> {
    if text.is_ascii() {
        if let Some(diffs) = diffs {
            diffs.extend(text.chars().map(Diff::unchanged));
        }
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    // Byte offset where the current run of unfoldable code points began.
    let mut kept_from: Option<usize> = None;
    for (i, r) in text.char_indices() {
        let replacement = if r.is_ascii() {
            None
        } else {
            fold_rune(store, r, digits)
        };
        if replacement.is_none() && !r.is_ascii() {
            kept_from.get_or_insert(i);
            continue;
        }
        if let Some(from) = kept_from.take() {
            push_kept(store, &text[from..i], &mut out, diffs.as_deref_mut());
        }
        match replacement {
            Some(replacement) => {
                out.push_str(&replacement);
                if let Some(diffs) = diffs.as_deref_mut() {
                    diffs.push(Diff::substituted(store, r, replacement.into_owned()));
                }
            }
            None => {
                out.push(r);
                if let Some(diffs) = diffs.as_deref_mut() {
                    diffs.push(Diff::unchanged(r));
                }
            }
        }
    }
    if let Some(from) = kept_from {
        push_kept(store, &text[from..], &mut out, diffs);
    }
    Cow::Owned(out)
}

/// NFKC over a run of code points that had no ASCII fold.
///
/// ASCII text is already in NFKC, so only these runs are normalized. Every
/// diff entry stays aligned with what was written to `out`.
fn push_kept<S: MappingStore + ?Sized>(
    store: &S,
    run: &str,
    out: &mut String,
    diffs: Option<&mut Vec<Diff>>,
) {
    let normalized = NFKC.run(Cow::Borrowed(run));
    out.push_str(&normalized);
    let Some(diffs) = diffs else {
        return;
    };
    if let Cow::Borrowed(_) = normalized {
        diffs.extend(run.chars().map(Diff::unchanged));
        return;
    }

    let pieces: SmallVec<[(char, String); 8]> = run
        .chars()
        .map(|r| {
            let mut buf = [0u8; 4];
            (r, NFKC.run(Cow::Borrowed(r.encode_utf8(&mut buf))).into_owned())
        })
        .collect();
    let joined: String = pieces.iter().map(|(_, p)| p.as_str()).collect();
    if joined == normalized {
        diffs.extend(pieces.into_iter().map(|(r, piece)| {
            if piece.chars().eq([r]) {
                Diff::unchanged(r)
            } else {
                Diff::substituted(store, r, piece)
            }
        }));
        return;
    }

    // Normalization composed across code points (Hangul jamo, for one):
    // the first code point carries the whole run.
    let mut runes = run.chars();
    if let Some(first) = runes.next() {
        diffs.push(Diff::substituted(store, first, normalized.into_owned()));
    }
    diffs.extend(runes.map(|r| Diff::substituted(store, r, String::new())));
}

/// Closest ASCII rendition of `text`. Unfoldable code points pass through.
pub fn ascii<'a, S: MappingStore + ?Sized>(store: &S, text: &'a str) -> Cow<'a, str> {
    fold(store, text, false, None)
}

/// [`ascii`] together with one [`Diff`] per input code point.
///
/// Concatenating each [`Diff::output`] reproduces the folded text exactly.
pub fn ascii_diff<'a, S: MappingStore + ?Sized>(
    store: &S,
    text: &'a str,
) -> (Cow<'a, str>, Vec<Diff>) {
    let mut diffs = Vec::with_capacity(text.len());
    let folded = fold(store, text, false, Some(&mut diffs));
    (folded, diffs)
}

/// Fold `text` to ASCII, then read letter lookalikes as digits.
///
/// Digit lookalikes such as `❶` or `⑳` take priority over any mapping for
/// the same code point. After folding, `o`/`O` become `0` and `i`, `I`,
/// `l`, `L`, `!` become `1`.
pub fn number<S: MappingStore + ?Sized>(store: &S, text: &str) -> String {
    fold(store, text, true, None)
        .chars()
        .map(|c| match c.to_ascii_lowercase() {
            'o' => '0',
            'i' | 'l' | '!' => '1',
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MappingTable;

    #[test]
    fn strips_diacritics() {
        let t = MappingTable::baseline();
        assert_eq!(ascii(&t, "newtòñ"), "newton");
        assert_eq!(ascii(&t, "Crème brûlée"), "Creme brulee");
    }

    #[test]
    fn custom_mapping_completes_fold() {
        let mut t = MappingTable::baseline();
        assert_eq!(ascii(&t, "exαʍple"), "exaʍple");
        t.add('ʍ', "m");
        assert_eq!(ascii(&t, "exαʍple"), "example");
    }

    #[test]
    fn mapping_target_is_mark_stripped() {
        let mut t = MappingTable::new();
        t.add('ʍ', "m\u{0301}");
        assert_eq!(ascii(&t, "ʍ"), "m");
    }

    #[test]
    fn non_ascii_mapping_falls_back_to_stripping_the_rune() {
        let mut t = MappingTable::new();
        t.add('é', "ё");
        assert_eq!(ascii(&t, "é"), "e");
    }

    #[test]
    fn unfoldable_code_points_pass_through() {
        let t = MappingTable::baseline();
        assert_eq!(ascii(&t, "日本"), "日本");
        assert_eq!(ascii(&t, "aж"), "aж");
    }

    fn rebuild(diffs: &[Diff]) -> String {
        diffs.iter().map(|d| d.output()).collect()
    }

    #[test]
    fn compatibility_forms_are_normalized() {
        let t = MappingTable::new();
        // Fullwidth letters have no mapping here and are not ASCII after
        // stripping; NFKC folds them.
        assert_eq!(ascii(&t, "ＡＢＣ"), "ABC");
    }

    #[test]
    fn compatibility_fold_is_recorded_in_diff() {
        let t = MappingTable::new();
        let (folded, diffs) = ascii_diff(&t, "\u{FF21}b");
        assert_eq!(folded, "Ab");
        assert_eq!(diffs[0].rune, '\u{FF21}');
        assert_eq!(diffs[0].confusable.as_deref(), Some("A"));
        assert_eq!(diffs[1], Diff::unchanged('b'));
        assert_eq!(rebuild(&diffs), folded);
    }

    #[test]
    fn kept_code_points_stay_unchanged_in_diff() {
        let t = MappingTable::new();
        let (folded, diffs) = ascii_diff(&t, "x日本ж");
        assert_eq!(folded, "x日本ж");
        assert!(diffs.iter().all(|d| !d.is_substitution()));
        assert_eq!(rebuild(&diffs), folded);
    }

    #[test]
    fn composing_run_is_carried_by_first_code_point() {
        let t = MappingTable::new();
        // Conjoining jamo compose into one syllable under NFKC.
        let (folded, diffs) = ascii_diff(&t, "a\u{1100}\u{1161}");
        assert_eq!(folded, "a\u{AC00}");
        assert_eq!(diffs.len(), 3);
        assert_eq!(diffs[1].confusable.as_deref(), Some("\u{AC00}"));
        assert_eq!(diffs[2].confusable.as_deref(), Some(""));
        assert_eq!(rebuild(&diffs), folded);
    }

    #[test]
    fn ascii_input_is_borrowed() {
        let t = MappingTable::baseline();
        let text = "already ascii!";
        assert!(matches!(ascii(&t, text), Cow::Borrowed(s) if s.as_ptr() == text.as_ptr()));
        let (folded, diffs) = ascii_diff(&t, text);
        assert!(matches!(folded, Cow::Borrowed(_)));
        assert_eq!(diffs.len(), text.len());
        assert!(diffs.iter().all(|d| !d.is_substitution()));
    }

    #[test]
    fn diff_reassembles_output() {
        let t = MappingTable::baseline();
        let text = "раураl çà";
        let (folded, diffs) = ascii_diff(&t, text);
        assert_eq!(folded, "paypal ca");
        assert_eq!(diffs.len(), text.chars().count());
        let rebuilt: String = diffs.iter().map(|d| d.output()).collect();
        assert_eq!(rebuilt, folded);
        assert_eq!(
            diffs[0].description.as_ref().map(ToString::to_string).as_deref(),
            Some("CYRILLIC SMALL LETTER ER → LATIN SMALL LETTER P")
        );
    }

    #[test]
    fn lone_mark_is_dropped() {
        let t = MappingTable::new();
        let (folded, diffs) = ascii_diff(&t, "a\u{0301}");
        assert_eq!(folded, "a");
        assert_eq!(diffs[1].confusable.as_deref(), Some(""));
    }

    #[test]
    fn number_reads_letters_as_digits() {
        let t = MappingTable::baseline();
        assert_eq!(number(&t, "foobar"), "f00bar");
        assert_eq!(number(&t, "O12"), "012");
        assert_eq!(number(&t, "!23"), "123");
        assert_eq!(number(&t, "Il|"), "11|");
    }

    #[test]
    fn number_folds_digit_lookalikes() {
        let t = MappingTable::baseline();
        assert_eq!(number(&t, "❶❷❸❹❺❻❼❽❾❿"), "12345678910");
        assert_eq!(number(&t, "⑳"), "20");
    }

    #[test]
    fn numeric_table_wins_over_mapping() {
        // The baseline maps MATHEMATICAL BOLD DIGIT ZERO to 'O'.
        let t = MappingTable::baseline();
        assert_eq!(ascii(&t, "𝟎"), "O");
        assert_eq!(number(&t, "𝟎𝟏"), "01");
    }

    #[test]
    fn empty_input() {
        let t = MappingTable::baseline();
        assert_eq!(ascii(&t, ""), "");
        assert_eq!(ascii_diff(&t, "").1, Vec::new());
        assert_eq!(number(&t, ""), "");
    }
}
