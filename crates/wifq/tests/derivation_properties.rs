//! Property-based tests for the derivation and encoding layers.
//!
//! Uses proptest to verify the admission gates, the propagation invariant,
//! and the codec round-trip laws for all inputs.

use proptest::prelude::*;
use wifq::prelude::*;

// =============================================================================
// Key Gate Properties
// =============================================================================

proptest! {
    /// The key is valid iff the formula yields an exact, non-negative integer.
    #[test]
    fn prop_key_gate_matches_formula(total in 0u64..1_000_000, order in 3u8..=9) {
        let square = Square::from_order(order).unwrap();
        let f = square.key_formula();
        let numerator = total as i64 - f.offset;
        let expected = if numerator % f.divisor == 0 && numerator / f.divisor - f.subtrahend >= 0 {
            Value::valid((numerator / f.divisor - f.subtrahend) as u64)
        } else {
            Value::INVALID
        };
        prop_assert_eq!(derivation::key(total, square), expected);
    }

    /// Scaling a qualifying total by the divisor keeps the quotient exact.
    #[test]
    fn prop_constructed_totals_pass_gate(k in 0i64..100_000, order in 3u8..=9) {
        let square = Square::from_order(order).unwrap();
        let f = square.key_formula();
        // Invert the formula: total = (k + subtrahend) * divisor + offset.
        let total = ((k + f.subtrahend) * f.divisor + f.offset) as u64;
        prop_assert_eq!(derivation::key(total, square), Value::valid(k as u64));
    }
}

// =============================================================================
// Propagation Invariant
// =============================================================================

proptest! {
    /// Gated key ⇒ every dependent field gated; subtraction always defined.
    #[test]
    fn prop_invalidity_propagates(total in 0u64..1_000_000, order in 3u8..=9) {
        let square = Square::from_order(order).unwrap();
        let set = derivation::value_set(total, square);
        prop_assert!(set.subtraction.is_valid());
        if set.is_gated() {
            for (field, value) in set.fields() {
                if field != Field::Subtraction {
                    prop_assert_eq!(value, Value::INVALID, "{:?}", field);
                }
            }
        } else {
            for (_, value) in set.fields() {
                prop_assert!(value.is_valid());
            }
        }
    }

    /// Dependent values obey their defining identities whenever valid.
    #[test]
    fn prop_chain_identities(total in 0u64..1_000_000, order in 3u8..=9) {
        let square = Square::from_order(order).unwrap();
        let set = derivation::value_set(total, square);
        if let (Some(key), Some(lock), Some(justice)) =
            (set.key.get(), set.lock.get(), set.justice.get())
        {
            prop_assert_eq!(lock, key + square.lock_increment());
            prop_assert_eq!(justice, key + lock);
        }
        if let (Some(concord), Some(area), Some(controller), Some(goal)) =
            (set.concord.get(), set.area.get(), set.controller.get(), set.goal.get())
        {
            let shakl = square.shakl() as u64;
            let order = square.order() as u64;
            prop_assert_eq!(area, concord * shakl);
            prop_assert_eq!(controller, concord + area);
            prop_assert_eq!(goal, concord * (2 * order + 2));
        }
    }
}

// =============================================================================
// Abjad Summation Properties
// =============================================================================

proptest! {
    /// The total equals the sum of the contribution weights.
    #[test]
    fn prop_total_is_sum_of_contributions(text in "\\PC{0,64}") {
        let s = abjad::sum(&text);
        let sum: u64 = s.contributions.iter().map(|c| c.weight as u64).sum();
        prop_assert_eq!(s.total, sum);
    }

    /// Interleaving unrecognized characters never changes the result.
    #[test]
    fn prop_noise_invariant(text in "[\\u{0621}-\\u{064A}]{0,32}") {
        let noisy: String = text.chars().flat_map(|c| [c, ' ', 'x']).collect();
        prop_assert_eq!(abjad::sum(&noisy).total, abjad::sum(&text).total);
    }
}

// =============================================================================
// Encoding Properties
// =============================================================================

proptest! {
    /// The greedy decomposition sums back to its magnitude.
    #[test]
    fn prop_decompose_sums_back(magnitude in 0u64..1_000_000) {
        let total: u64 = angel::decompose(magnitude)
            .into_iter()
            .map(|c| weight_of(c).unwrap() as u64)
            .sum();
        prop_assert_eq!(total, magnitude);
    }

    /// Encoding is deterministic and always carries the variant suffix.
    #[test]
    fn prop_angel_name_deterministic(v in 0u64..1_000_000) {
        let value = Value::valid(v);
        let a = angel::name(value, Variant::Benevolent);
        let b = angel::name(value, Variant::Benevolent);
        prop_assert_eq!(&a, &b);
        prop_assert!(a.ends_with("اييل"));
        prop_assert!(angel::name(value, Variant::Sufliyyah).ends_with("طيش"));
    }

    /// Arabic-Indic rendering round-trips for every non-negative integer.
    #[test]
    fn prop_numeral_round_trip(n: u64) {
        let rendered = numerals::to_arabic_indic(n);
        prop_assert_eq!(numerals::from_arabic_indic(&rendered), n.to_string());
    }

    /// Substitution touches digits only, in both directions.
    #[test]
    fn prop_substitution_preserves_non_digits(text in "\\PC{0,32}") {
        let there = numerals::map_to_arabic_indic(&text);
        let back = numerals::from_arabic_indic(&there);
        // Mapping there and back is the identity unless the input already
        // contained Arabic-Indic digits (which collapse onto ASCII).
        if !numerals::contains_arabic_digits(&text) {
            prop_assert_eq!(back, text);
        }
    }
}
