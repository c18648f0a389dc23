//! The abjad letter-value table.
//!
//! Maps Arabic letter glyphs to their Hisab al-Jummal weights. The mapping
//! is many-to-one: orthographic variants of the same letter (seated hamza,
//! madda, tā' marbūṭa, alef maqsūra, Farsi yā') share the weight of their
//! canonical form. Every weight belongs to the fixed 28-step progression
//! 1..9, 10..90, 100..900, 1000.
//!
//! # Example
//!
//! ```
//! use wifq::letter::{weight_of, is_letter};
//!
//! assert_eq!(weight_of('ا'), Some(1));
//! assert_eq!(weight_of('أ'), Some(1)); // hamza-seated alef variant
//! assert_eq!(weight_of('غ'), Some(1000));
//! assert_eq!(weight_of('A'), None);
//! assert!(!is_letter(' '));
//! ```

use super::constants::WEIGHT_COUNT;

/// Returns the abjad weight of a glyph, or `None` for unrecognized input.
///
/// This is a total function over `char`: spaces, diacritics, punctuation,
/// digits, and non-Arabic characters all return `None` and are skipped by
/// the summation layer.
///
/// # Example
///
/// ```
/// use wifq::letter::weight_of;
///
/// assert_eq!(weight_of('ب'), Some(2));
/// assert_eq!(weight_of('ة'), Some(5));  // tā' marbūṭa shares hā''s weight
/// assert_eq!(weight_of('ى'), Some(10)); // alef maqsūra shares yā''s weight
/// assert_eq!(weight_of('ً'), None);     // diacritic
/// ```
#[must_use]
pub const fn weight_of(c: char) -> Option<u16> {
    match c {
        'ا' | 'ٱ' | 'أ' | 'إ' | 'آ' => Some(1),
        'ب' => Some(2),
        'ج' => Some(3),
        'د' => Some(4),
        'ه' | 'ة' => Some(5),
        'و' => Some(6),
        'ز' => Some(7),
        'ح' => Some(8),
        'ط' => Some(9),
        'ي' | 'ى' | 'ی' => Some(10),
        'ك' => Some(20),
        'ل' => Some(30),
        'م' => Some(40),
        'ن' => Some(50),
        'س' => Some(60),
        'ع' => Some(70),
        'ف' => Some(80),
        'ص' => Some(90),
        'ق' => Some(100),
        'ر' => Some(200),
        'ش' => Some(300),
        'ت' => Some(400),
        'ث' => Some(500),
        'خ' => Some(600),
        'ذ' => Some(700),
        'ض' => Some(800),
        'ظ' => Some(900),
        'غ' => Some(1000),
        _ => None,
    }
}

/// Returns true if the glyph carries an abjad weight.
#[inline]
#[must_use]
pub const fn is_letter(c: char) -> bool {
    weight_of(c).is_some()
}

/// The canonical progression, largest weight first.
///
/// One glyph per weight (the canonical form, no variants). The greedy
/// angel-name decomposition consumes this table front to back.
pub static DESCENDING: [(u16, char); WEIGHT_COUNT] = [
    (1000, 'غ'),
    (900, 'ظ'),
    (800, 'ض'),
    (700, 'ذ'),
    (600, 'خ'),
    (500, 'ث'),
    (400, 'ت'),
    (300, 'ش'),
    (200, 'ر'),
    (100, 'ق'),
    (90, 'ص'),
    (80, 'ف'),
    (70, 'ع'),
    (60, 'س'),
    (50, 'ن'),
    (40, 'م'),
    (30, 'ل'),
    (20, 'ك'),
    (10, 'ي'),
    (9, 'ط'),
    (8, 'ح'),
    (7, 'ز'),
    (6, 'و'),
    (5, 'ه'),
    (4, 'د'),
    (3, 'ج'),
    (2, 'ب'),
    (1, 'ا'),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_letters_roundtrip() {
        // Every canonical letter in the progression maps back to its weight.
        for &(weight, letter) in DESCENDING.iter() {
            assert_eq!(weight_of(letter), Some(weight), "letter {letter}");
        }
    }

    #[test]
    fn test_strictly_descending() {
        for pair in DESCENDING.windows(2) {
            assert!(pair[0].0 > pair[1].0);
        }
    }

    #[test]
    fn test_progression_membership() {
        // Weights are exactly {1..9, 10..90 by 10, 100..900 by 100, 1000}.
        for &(weight, _) in DESCENDING.iter() {
            let in_progression = (1..=9).contains(&weight)
                || (weight % 10 == 0 && (10..=90).contains(&weight))
                || (weight % 100 == 0 && (100..=900).contains(&weight))
                || weight == 1000;
            assert!(in_progression, "weight {weight}");
        }
    }

    #[test]
    fn test_unit_weight_present() {
        // The greedy decomposition terminates because weight 1 exists.
        assert_eq!(DESCENDING[DESCENDING.len() - 1], (1, 'ا'));
    }

    #[test]
    fn test_variants_share_weights() {
        for v in ['ا', 'ٱ', 'أ', 'إ', 'آ'] {
            assert_eq!(weight_of(v), Some(1));
        }
        for v in ['ه', 'ة'] {
            assert_eq!(weight_of(v), Some(5));
        }
        for v in ['ي', 'ى', 'ی'] {
            assert_eq!(weight_of(v), Some(10));
        }
    }

    #[test]
    fn test_glyph_count() {
        use crate::constants::GLYPH_COUNT;

        // Scan the entire Arabic blocks plus the table's known members and
        // count recognized glyphs.
        let count = (0..=0x10FFFFu32)
            .filter_map(char::from_u32)
            .filter(|&c| is_letter(c))
            .count();
        assert_eq!(count, GLYPH_COUNT);
    }

    #[test]
    fn test_non_letters_rejected() {
        for c in [' ', '.', '7', 'A', 'ё', 'ً', 'ّ', '،'] {
            assert_eq!(weight_of(c), None, "char {c:?}");
        }
    }
}
