//! Function-level façade consumed by presentation layers.
//!
//! Bundles the summation audit trail into a human-readable report and
//! re-exposes the derivation entry point under its presentation-facing
//! name. Everything here is a thin composition of the other modules; no
//! arithmetic lives in this file.

use crate::abjad::{self, AbjadSum};
use crate::derivation::{self, ValueSet};
use crate::square::Square;
use alloc::string::String;
use alloc::vec::Vec;

/// Fixed Arabic message shown when the input contained no valid letters.
pub const NO_LETTERS_MESSAGE: &str = "لم يتم إدخال حروف عربية صالحة";

/// Summation result prepared for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbjadReport {
    /// The abjad total.
    pub total: u64,
    /// `"letter (weight) + … = total"`, or [`NO_LETTERS_MESSAGE`].
    pub details: String,
    /// The recognized letters in input order.
    pub letters: Vec<char>,
}

/// Sums a text and formats the contribution trail for display.
///
/// # Example
///
/// ```
/// use wifq::calculator::calculate_abjad;
///
/// let report = calculate_abjad("ابج");
/// assert_eq!(report.total, 6);
/// assert_eq!(report.details, "ا (1) + ب (2) + ج (3) = 6");
///
/// let empty = calculate_abjad("123");
/// assert_eq!(empty.total, 0);
/// assert_eq!(empty.details, "لم يتم إدخال حروف عربية صالحة");
/// ```
#[must_use]
pub fn calculate_abjad(text: &str) -> AbjadReport {
    let AbjadSum {
        total,
        contributions,
    } = abjad::sum(text);

    let details = if contributions.is_empty() {
        String::from(NO_LETTERS_MESSAGE)
    } else {
        let joined = contributions
            .iter()
            .map(|c| alloc::format!("{} ({})", c.letter, c.weight))
            .collect::<Vec<_>>()
            .join(" + ");
        alloc::format!("{joined} = {total}")
    };

    let letters = contributions.iter().map(|c| c.letter).collect();

    AbjadReport {
        total,
        details,
        letters,
    }
}

/// Derives all eight values for a (total, square) pair.
///
/// Identical to [`derivation::value_set`]; fields of a gated evaluation
/// are [`Invalid`](crate::value::Value::Invalid) and render as `"-"`.
#[inline]
#[must_use]
pub fn calculate_all_values(total: u64, square: Square) -> ValueSet {
    derivation::value_set(total, square)
}
