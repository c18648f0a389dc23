//! Key derivation and the dependent-value chain.
//!
//! Given an abjad total and a square type, the key either exists (the
//! type's linear formula yields an exact non-negative integer) or it does
//! not. When it does not, every key-dependent value is invalid; this is the
//! expected outcome for most totals, not a fault. The subtraction value
//! depends only on the type's structural constants and is defined either
//! way.
//!
//! All arithmetic is exact integer arithmetic. The single rounding step in
//! the subtraction formula is round-half-up, and never fires while shakl
//! stays integral (the product it halves is always even).
//!
//! # Example
//!
//! ```
//! use wifq::derivation::{key, value_set};
//! use wifq::square::Square;
//! use wifq::value::Value;
//!
//! // (55 − 3) / 4 = 13, exact and non-negative.
//! assert_eq!(key(55, Square::Murabba), Value::valid(13));
//! // (6 − 3) / 4 = 0.75: no key.
//! assert_eq!(key(6, Square::Murabba), Value::INVALID);
//!
//! let set = value_set(55, Square::Murabba);
//! assert_eq!(set.goal, Value::valid(340));
//! ```

use crate::square::Square;
use crate::value::Value;

/// The eight derived fields, in canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// المفتاح — the key; gate for everything below except subtraction.
    Key,
    /// المغلاق — key plus the type's literal lock increment.
    Lock,
    /// العدل — key plus lock.
    Justice,
    /// الطرح — type-only; defined regardless of the key gate.
    Subtraction,
    /// الوفق — (cells + 1) · shakl / 2, gated on evenness.
    Concord,
    /// المساحة — concord times shakl.
    Area,
    /// الضابط — concord plus area.
    Controller,
    /// الغاية — concord times (2·order + 2).
    Goal,
}

impl Field {
    /// All fields in canonical display order.
    pub const ALL: [Self; 8] = [
        Self::Key,
        Self::Lock,
        Self::Justice,
        Self::Subtraction,
        Self::Concord,
        Self::Area,
        Self::Controller,
        Self::Goal,
    ];

    /// English field name, used for machine output.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Key => "key",
            Self::Lock => "lock",
            Self::Justice => "justice",
            Self::Subtraction => "subtraction",
            Self::Concord => "concord",
            Self::Area => "area",
            Self::Controller => "controller",
            Self::Goal => "goal",
        }
    }
}

/// The eight derived values for one (total, square) evaluation.
///
/// Invariants, maintained by [`value_set`]:
/// - `key` invalid ⇒ `lock`, `justice`, `concord`, `area`, `controller`,
///   `goal` invalid.
/// - `subtraction` is always valid; it depends only on the square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueSet {
    /// The square these values were derived for.
    pub square: Square,
    /// المفتاح.
    pub key: Value,
    /// المغلاق.
    pub lock: Value,
    /// العدل.
    pub justice: Value,
    /// الطرح.
    pub subtraction: Value,
    /// الوفق.
    pub concord: Value,
    /// المساحة.
    pub area: Value,
    /// الضابط.
    pub controller: Value,
    /// الغاية.
    pub goal: Value,
}

impl ValueSet {
    /// Returns the value of a field.
    #[inline]
    #[must_use]
    pub const fn get(&self, field: Field) -> Value {
        match field {
            Field::Key => self.key,
            Field::Lock => self.lock,
            Field::Justice => self.justice,
            Field::Subtraction => self.subtraction,
            Field::Concord => self.concord,
            Field::Area => self.area,
            Field::Controller => self.controller,
            Field::Goal => self.goal,
        }
    }

    /// Returns true when the key gate failed for this evaluation.
    #[inline]
    #[must_use]
    pub const fn is_gated(&self) -> bool {
        !self.key.is_valid()
    }

    /// Iterates (field, value) pairs in canonical display order.
    pub fn fields(&self) -> impl Iterator<Item = (Field, Value)> + '_ {
        Field::ALL.into_iter().map(|f| (f, self.get(f)))
    }
}

/// Derives the key for a total under a square's formula.
///
/// The key exists iff `(total − offset)` divides exactly by the divisor
/// and the quotient minus the subtrahend is non-negative. Anything else is
/// [`Value::INVALID`]: an admission gate, not an error.
///
/// # Example
///
/// ```
/// use wifq::derivation::key;
/// use wifq::square::Square;
/// use wifq::value::Value;
///
/// assert_eq!(key(7, Square::Murabba), Value::valid(1));  // (7−3)/4
/// assert_eq!(key(6, Square::Murabba), Value::INVALID);   // fractional
/// assert_eq!(key(3, Square::Mutsalas), Value::INVALID);  // 1 − 4 < 0
/// ```
#[must_use]
pub fn key(total: u64, square: Square) -> Value {
    let f = square.key_formula();
    let numerator = total as i64 - f.offset;
    if numerator % f.divisor != 0 {
        return Value::Invalid;
    }
    Value::from_signed(numerator / f.divisor - f.subtrahend)
}

/// Derives the subtraction value: round-half-up of (cells − 1) · shakl / 2.
///
/// Depends only on the square's structural constants, so it is defined for
/// every square regardless of any total.
#[must_use]
pub fn subtraction(square: Square) -> Value {
    let product = (square.cells() - 1) * square.shakl() as u64;
    Value::valid((product + 1) / 2)
}

/// Derives the concord value: (cells + 1) · shakl / 2, gated on evenness.
///
/// With every current shakl the product is even and the gate passes; the
/// check exists because shakl is modeled independently of order and the
/// halving is only exact while their parity cooperates.
#[must_use]
pub fn concord(square: Square) -> Value {
    let product = (square.cells() + 1) * square.shakl() as u64;
    if product % 2 != 0 {
        return Value::Invalid;
    }
    Value::valid(product / 2)
}

/// Derives all eight values for a (total, square) pair.
///
/// When the key gate fails, every key-dependent field is invalid and only
/// `subtraction` carries a number.
///
/// # Example
///
/// ```
/// use wifq::derivation::value_set;
/// use wifq::square::Square;
/// use wifq::value::Value;
///
/// let set = value_set(55, Square::Murabba);
/// assert_eq!(set.key, Value::valid(13));
/// assert_eq!(set.lock, Value::valid(28));
/// assert_eq!(set.justice, Value::valid(41));
/// assert_eq!(set.subtraction, Value::valid(30));
/// assert_eq!(set.concord, Value::valid(34));
/// assert_eq!(set.area, Value::valid(136));
/// assert_eq!(set.controller, Value::valid(170));
/// assert_eq!(set.goal, Value::valid(340));
///
/// let gated = value_set(6, Square::Murabba);
/// assert!(gated.is_gated());
/// assert_eq!(gated.goal, Value::INVALID);
/// assert_eq!(gated.subtraction, Value::valid(30)); // type-only
/// ```
#[must_use]
pub fn value_set(total: u64, square: Square) -> ValueSet {
    let key = key(total, square);
    let subtraction = subtraction(square);

    if !key.is_valid() {
        return ValueSet {
            square,
            key,
            lock: Value::Invalid,
            justice: Value::Invalid,
            subtraction,
            concord: Value::Invalid,
            area: Value::Invalid,
            controller: Value::Invalid,
            goal: Value::Invalid,
        };
    }

    let shakl = square.shakl() as u64;
    let order = square.order() as u64;

    let lock = key.map(|k| k + square.lock_increment());
    let justice = key.zip(lock, |k, l| k + l);
    let concord = concord(square);
    let area = concord.map(|c| c * shakl);
    let controller = concord.zip(area, |c, a| c + a);
    let goal = concord.map(|c| c * (2 * order + 2));

    ValueSet {
        square,
        key,
        lock,
        justice,
        subtraction,
        concord,
        area,
        controller,
        goal,
    }
}
