//! Abjad (Hisab al-Jummal) summation and WiFiQ value derivation.
//!
//! This crate is the calculation core of the wifq project: it converts
//! Arabic text into a numeric total via the abjad letter-value table,
//! derives the eight WiFiQ values for each of the seven square types, and
//! encodes values back into Arabic angel-name strings.
//!
//! # Data Flow
//!
//! ```text
//! text ──▶ abjad::sum ──▶ total ──▶ derivation::value_set(total, square)
//!                                        │
//!                                        ├─▶ eight values (ValueSet)
//!                                        ├─▶ angel::name per value
//!                                        └─▶ numerals::* for display
//! ```
//!
//! # Square Types
//!
//! | order | type | day | planet |
//! |-------|----------|----------|----------|
//! | 3 | mutsalas | السبت | الزحل |
//! | 4 | murabba | الربعاء | العطارد |
//! | 5 | mukhamas | الثلاثاء | المريخ |
//! | 6 | musaddas | الأحد | الشمس |
//! | 7 | musabba | الجمعة | الزهرة |
//! | 8 | musamman | الخميس | المشتري |
//! | 9 | mutassa | الاثنين | القمر |
//!
//! # Validity Model
//!
//! A derivation either yields an exact non-negative integer or it does
//! not. The failure case is a first-class [`Value::Invalid`] that
//! propagates through every dependent derivation and renders as `"-"`;
//! it is an admission gate, not an error. Most arbitrary totals fail most
//! types' gates — that is the expected shape of the domain.
//!
//! # Example
//!
//! ```
//! use wifq::prelude::*;
//!
//! let report = calculate_abjad("ابج");
//! assert_eq!(report.total, 6);
//!
//! let set = calculate_all_values(55, Square::Murabba);
//! assert_eq!(set.key, Value::valid(13));
//! assert_eq!(set.goal, Value::valid(340));
//! ```
//!
//! # Design Principles
//!
//! - **Pure functions over constant tables**: no I/O, no shared mutable
//!   state, referentially transparent throughout.
//! - **Bounded loops**: every loop is bounded by input length or by a
//!   strictly decreasing magnitude.
//! - **Zero dependencies**: `no_std` + `alloc`; allocation only for
//!   output strings and audit trails.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

// Core data types (constants, letter table, square types, values)
mod core;

// Abjad summation with contribution audit trail
pub mod abjad;

// Key derivation and the dependent-value chain
pub mod derivation;

// Angel-name encoding via greedy decomposition
pub mod angel;

// Arabic-Indic numeral presentation
pub mod numerals;

// Presentation-facing façade
pub mod calculator;

// Re-export submodules for external access
pub use core::constants;
pub use core::letter;
pub use core::square;
pub use core::value;

// Re-export core types at crate root
pub use core::square::{KeyFormula, Square};
pub use core::value::Value;

// Re-export commonly used items from submodules
pub use abjad::{AbjadSum, Contribution};
pub use angel::Variant;
pub use calculator::{AbjadReport, NO_LETTERS_MESSAGE};
pub use derivation::{Field, ValueSet};

/// Prelude module for convenient imports.
///
/// ```
/// use wifq::prelude::*;
/// ```
pub mod prelude {
    pub use crate::abjad::{self, AbjadSum, Contribution};
    pub use crate::angel::{self, Variant};
    pub use crate::calculator::{calculate_abjad, calculate_all_values, AbjadReport};
    pub use crate::core::letter::{is_letter, weight_of};
    pub use crate::core::square::Square;
    pub use crate::core::value::Value;
    pub use crate::derivation::{self, Field, ValueSet};
    pub use crate::numerals;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_end_to_end_murabba() {
        // Total 55 through the murabba chain.
        let set = calculate_all_values(55, Square::Murabba);
        assert_eq!(set.key, Value::valid(13));
        assert_eq!(set.lock, Value::valid(28));
        assert_eq!(set.justice, Value::valid(41));
        assert_eq!(set.subtraction, Value::valid(30));
        assert_eq!(set.concord, Value::valid(34));
        assert_eq!(set.area, Value::valid(136));
        assert_eq!(set.controller, Value::valid(170));
        assert_eq!(set.goal, Value::valid(340));
    }

    #[test]
    fn test_zero_total_fails_every_gate() {
        for square in Square::ALL {
            let set = calculate_all_values(0, square);
            assert!(set.is_gated(), "{square:?}");
        }
    }

    #[test]
    fn test_text_to_table() {
        let report = calculate_abjad("ن");
        assert_eq!(report.total, 50);
        // (50 − 3) / 4 is fractional; murabba gate fails.
        assert!(calculate_all_values(report.total, Square::Murabba).is_gated());
    }

    #[test]
    fn test_angel_name_from_derived_value() {
        let set = calculate_all_values(55, Square::Murabba);
        let name = angel::name(set.controller, Variant::Benevolent);
        assert_eq!(name, "طيقاييل");
    }
}
