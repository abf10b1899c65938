//! Digit-lookalike folding.
//!
//! Maps enclosed, parenthesized, full-stop and mathematical digit forms to
//! their literal ASCII digits. Forms numbered 10–20 fold to two-character
//! strings.

use phf::{Map, phf_map};

const NUMBERS: [&str; 21] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15", "16",
    "17", "18", "19", "20",
];

/// Code points outside the contiguous runs below.
static ISOLATED: Map<char, &'static str> = phf_map! {
    '\u{24EA}' => "0",  // CIRCLED DIGIT ZERO
    '\u{24FF}' => "0",  // NEGATIVE CIRCLED DIGIT ZERO
    '\u{1F100}' => "0", // DIGIT ZERO FULL STOP
    '\u{1F10B}' => "0", // DINGBAT CIRCLED SANS-SERIF DIGIT ZERO
    '\u{1F10C}' => "0", // DINGBAT NEGATIVE CIRCLED SANS-SERIF DIGIT ZERO
    '\u{3248}' => "10", // CIRCLED NUMBER TEN ON BLACK SQUARE
    '\u{3249}' => "20", // CIRCLED NUMBER TWENTY ON BLACK SQUARE
};

/// ASCII digits for a digit-lookalike code point.
///
/// `None` means "not a digit lookalike"; callers fall back to general ASCII
/// folding.
#[inline]
pub fn fold_numeric(r: char) -> Option<&'static str> {
    let cp = r as u32;
    let value = match cp {
        // Enclosed Alphanumerics
        0x2460..=0x2473 => cp - 0x2460 + 1,  // Circled 1–20
        0x2474..=0x2487 => cp - 0x2474 + 1,  // Parenthesized 1–20
        0x2488..=0x249B => cp - 0x2488 + 1,  // Digit full stop 1–20
        0x24EB..=0x24F4 => cp - 0x24EB + 11, // Negative circled 11–20
        0x24F5..=0x24FE => cp - 0x24F5 + 1,  // Double circled 1–10
        // Dingbats
        0x2776..=0x277F => cp - 0x2776 + 1, // Negative circled 1–10
        0x2780..=0x2789 => cp - 0x2780 + 1, // Circled sans-serif 1–10
        0x278A..=0x2793 => cp - 0x278A + 1, // Negative circled sans-serif 1–10
        // Mathematical bold, double-struck, sans-serif, sans-serif bold and
        // monospace digits: five consecutive 0–9 runs.
        0x1D7CE..=0x1D7FF => (cp - 0x1D7CE) % 10,
        _ => return ISOLATED.get(&r).copied(),
    };
    NUMBERS.get(value as usize).copied()
}
