//! Angel-name encoding via greedy abjad decomposition.
//!
//! A numeric value is first mapped into the cyclic 51-entry index space
//! (values below 51 wrap around by a variant-specific constant, then 51 is
//! subtracted), and the resulting magnitude is decomposed greedily against
//! the canonical weight progression, largest weight first. Each consumed
//! weight emits its canonical letter; the emitted sequence is reversed for
//! right-to-left presentation and a fixed variant suffix is appended.
//!
//! The decomposition is a canonical greedy representation in a
//! non-positional additive numeral system. The progression contains weight
//! 1, so every non-negative magnitude has a representation and the loop
//! terminates.
//!
//! # Example
//!
//! ```
//! use wifq::angel::{self, Variant};
//! use wifq::value::Value;
//!
//! let name = angel::name(Value::valid(170), Variant::Benevolent);
//! assert!(name.ends_with("اييل"));
//!
//! // Invalid values render as the dash sentinel.
//! assert_eq!(angel::name(Value::INVALID, Variant::Benevolent), "-");
//!
//! // 50 wraps to 410; both reduce to magnitude 359.
//! assert_eq!(
//!     angel::name(Value::valid(50), Variant::Benevolent),
//!     angel::name(Value::valid(410), Variant::Benevolent),
//! );
//! ```

use crate::constants::{
    ANGEL_INDEX_SPAN, BENEVOLENT_SUFFIX, BENEVOLENT_WRAP, INVALID_DISPLAY, SUFLIYYAH_SUFFIX,
    SUFLIYYAH_WRAP,
};
use crate::letter::DESCENDING;
use crate::value::Value;
use alloc::string::String;
use alloc::vec::Vec;

/// The two angel-name variants.
///
/// They differ only in the wraparound constant applied to values below the
/// index span, and in the fixed suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// The benevolent variant: wraparound 360, suffix "اييل".
    Benevolent,
    /// The sufliyyah variant: wraparound 319, suffix "طيش".
    Sufliyyah,
}

impl Variant {
    /// Wraparound constant added to values below the index span.
    #[inline]
    #[must_use]
    pub const fn wraparound(self) -> u64 {
        match self {
            Self::Benevolent => BENEVOLENT_WRAP,
            Self::Sufliyyah => SUFLIYYAH_WRAP,
        }
    }

    /// Fixed suffix appended after the decomposed letters.
    #[inline]
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Benevolent => BENEVOLENT_SUFFIX,
            Self::Sufliyyah => SUFLIYYAH_SUFFIX,
        }
    }
}

/// Greedy decomposition of a magnitude into canonical letters.
///
/// Largest weight first; each weight is consumed as many times as it
/// divides into the remainder. Letters come out most-significant first.
///
/// # Example
///
/// ```
/// use wifq::angel::decompose;
///
/// // 359 = 300 + 50 + 9
/// assert_eq!(decompose(359), vec!['ش', 'ن', 'ط']);
/// assert_eq!(decompose(0), Vec::<char>::new());
/// // 2000 = 1000 + 1000
/// assert_eq!(decompose(2000), vec!['غ', 'غ']);
/// ```
#[must_use]
pub fn decompose(magnitude: u64) -> Vec<char> {
    let mut remaining = magnitude;
    let mut letters = Vec::new();

    for &(weight, letter) in DESCENDING.iter() {
        let weight = weight as u64;
        while remaining >= weight {
            letters.push(letter);
            remaining -= weight;
        }
    }

    letters
}

/// Encodes a derived value as an angel name.
///
/// Invalid values produce the dash sentinel. The decomposed letters are
/// reversed before joining, then the variant suffix is appended.
#[must_use]
pub fn name(value: Value, variant: Variant) -> String {
    let Some(v) = value.get() else {
        return String::from(INVALID_DISPLAY);
    };

    let adjusted = if v < ANGEL_INDEX_SPAN {
        v + variant.wraparound()
    } else {
        v
    };
    let magnitude = adjusted - ANGEL_INDEX_SPAN;

    let mut letters = decompose(magnitude);
    letters.reverse();

    let mut out: String = letters.into_iter().collect();
    out.push_str(variant.suffix());
    out
}

/// Benevolent angel name for a value.
#[inline]
#[must_use]
pub fn benevolent(value: Value) -> String {
    name(value, Variant::Benevolent)
}

/// Sufliyyah angel name for a value.
#[inline]
#[must_use]
pub fn sufliyyah(value: Value) -> String {
    name(value, Variant::Sufliyyah)
}
