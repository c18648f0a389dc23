//! Derived-value type with an explicit invalid state.
//!
//! Every derivation in this crate either yields a non-negative integer or
//! fails its admission gate (non-integral quotient, negative result). The
//! failure is not an error to be reported: it is a first-class outcome that
//! propagates through dependent derivations and renders as a dash. Modeling
//! it as a tagged union keeps the propagation invariant checkable at every
//! consumer instead of punning a number with a sentinel string.

use super::constants::INVALID_DISPLAY;
use core::fmt;

/// Outcome of a derivation: a non-negative integer, or the invalid marker.
///
/// # Propagation
///
/// Arithmetic on an invalid operand is invalid. The helpers on this type
/// ([`map`](Value::map), [`zip`](Value::zip)) encode that rule so derivation
/// chains never have to branch by hand.
///
/// # Example
///
/// ```
/// use wifq::value::Value;
///
/// let v = Value::valid(13);
/// assert_eq!(v.get(), Some(13));
/// assert_eq!(v.to_string(), "13");
///
/// let invalid = Value::INVALID;
/// assert_eq!(invalid.get(), None);
/// assert_eq!(invalid.to_string(), "-");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Value {
    /// A derivation that passed its gate: exact, non-negative.
    Valid(u64),
    /// A derivation that failed its gate; poisons everything downstream.
    #[default]
    Invalid,
}

impl Value {
    /// The invalid marker.
    pub const INVALID: Self = Self::Invalid;

    /// Zero as a valid value.
    pub const ZERO: Self = Self::Valid(0);

    /// Wraps a non-negative integer as a valid value.
    #[inline]
    #[must_use]
    pub const fn valid(v: u64) -> Self {
        Self::Valid(v)
    }

    /// Admission gate for signed intermediate arithmetic.
    ///
    /// Key and lock formulas subtract before dividing, so intermediates are
    /// computed in `i64`; a negative result means the gate failed.
    ///
    /// # Example
    ///
    /// ```
    /// use wifq::value::Value;
    ///
    /// assert_eq!(Value::from_signed(13), Value::valid(13));
    /// assert_eq!(Value::from_signed(-3), Value::INVALID);
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_signed(v: i64) -> Self {
        if v >= 0 {
            Self::Valid(v as u64)
        } else {
            Self::Invalid
        }
    }

    /// Returns the integer, or `None` when invalid.
    #[inline]
    #[must_use]
    pub const fn get(self) -> Option<u64> {
        match self {
            Self::Valid(v) => Some(v),
            Self::Invalid => None,
        }
    }

    /// Returns true when the derivation passed its gate.
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Applies a function to the value, propagating invalidity.
    ///
    /// # Example
    ///
    /// ```
    /// use wifq::value::Value;
    ///
    /// assert_eq!(Value::valid(34).map(|v| v * 4), Value::valid(136));
    /// assert_eq!(Value::INVALID.map(|v| v * 4), Value::INVALID);
    /// ```
    #[inline]
    #[must_use]
    pub fn map(self, f: impl FnOnce(u64) -> u64) -> Self {
        match self {
            Self::Valid(v) => Self::Valid(f(v)),
            Self::Invalid => Self::Invalid,
        }
    }

    /// Combines two values, invalid if either operand is.
    ///
    /// # Example
    ///
    /// ```
    /// use wifq::value::Value;
    ///
    /// let sum = Value::valid(34).zip(Value::valid(136), |a, b| a + b);
    /// assert_eq!(sum, Value::valid(170));
    /// assert_eq!(Value::INVALID.zip(sum, |a, b| a + b), Value::INVALID);
    /// ```
    #[inline]
    #[must_use]
    pub fn zip(self, other: Self, f: impl FnOnce(u64, u64) -> u64) -> Self {
        match (self, other) {
            (Self::Valid(a), Self::Valid(b)) => Self::Valid(f(a, b)),
            _ => Self::Invalid,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid(v) => write!(f, "Valid({v})"),
            Self::Invalid => write!(f, "Invalid"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid(v) => write!(f, "{v}"),
            Self::Invalid => f.write_str(INVALID_DISPLAY),
        }
    }
}

impl From<u64> for Value {
    #[inline]
    fn from(v: u64) -> Self {
        Self::Valid(v)
    }
}

impl From<Value> for Option<u64> {
    #[inline]
    fn from(v: Value) -> Self {
        v.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_invalid() {
        assert_eq!(Value::default(), Value::Invalid);
    }

    #[test]
    fn test_from_signed_gate() {
        assert_eq!(Value::from_signed(0), Value::valid(0));
        assert_eq!(Value::from_signed(i64::MAX), Value::valid(i64::MAX as u64));
        assert_eq!(Value::from_signed(-1), Value::Invalid);
    }

    #[test]
    fn test_map_propagates() {
        assert_eq!(Value::valid(2).map(|v| v + 1), Value::valid(3));
        assert_eq!(Value::Invalid.map(|v| v + 1), Value::Invalid);
    }

    #[test]
    fn test_zip_propagates() {
        let a = Value::valid(2);
        let b = Value::valid(3);
        assert_eq!(a.zip(b, |x, y| x * y), Value::valid(6));
        assert_eq!(a.zip(Value::Invalid, |x, y| x * y), Value::Invalid);
        assert_eq!(Value::Invalid.zip(b, |x, y| x * y), Value::Invalid);
    }

    #[test]
    fn test_display() {
        use alloc::string::ToString;

        assert_eq!(Value::valid(340).to_string(), "340");
        assert_eq!(Value::Invalid.to_string(), "-");
    }
}
