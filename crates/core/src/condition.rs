//! Boolean condition algebra
//!
//! A [`Condition`] is an immutable boolean expression over opaque predicate
//! text. The algebra knows nothing about the predicate language itself; it
//! only combines rendered text:
//!
//! - `and(a, b)` renders as `(a) & (b)`
//! - `not(a)` renders as `! (a)`
//! - the universally-true condition renders as `true`
//!
//! Combination never simplifies and never mutates an operand: `and` and
//! `not` always allocate a new value. Two conditions are equal exactly when
//! their rendered text is equal.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rendered form of the universally-true condition.
pub const TRUE_CONDITION: &str = "true";

/// Immutable boolean expression over opaque predicate text.
///
/// Conditions are value types: freely cloned, compared and hashed by their
/// rendered text, and never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Condition(String);

impl Condition {
    /// Create a condition from predicate text, validating the input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCondition`] if the text is empty or blank.
    pub fn new(expr: impl Into<String>) -> Result<Self> {
        let expr = expr.into();
        if expr.trim().is_empty() {
            return Err(Error::InvalidCondition(expr));
        }
        Ok(Condition(expr))
    }

    /// The universally-true condition.
    pub fn always_true() -> Self {
        Condition(TRUE_CONDITION.to_owned())
    }

    /// Whether this condition is exactly the `true` placeholder.
    ///
    /// This is a textual check, not a tautology check: `"1 == 1"` is not
    /// recognized, only the literal rendering of [`Condition::always_true`].
    pub fn is_always_true(&self) -> bool {
        self.0 == TRUE_CONDITION
    }

    /// Conjunction of `self` and `other` as a new condition.
    ///
    /// The result is purely textual: no short-circuiting, no deduplication,
    /// no unit absorption. `true & x` stays `(true) & (x)`.
    pub fn and(&self, other: &Condition) -> Condition {
        Condition(format!("({}) & ({})", self.0, other.0))
    }

    /// Negation of `self` as a new condition.
    pub fn not(&self) -> Condition {
        Condition(format!("! ({})", self.0))
    }

    /// The rendered text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the rendered text.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for Condition {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for Condition {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Condition::new(value)
    }
}

impl TryFrom<String> for Condition {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Condition::new(value)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_condition_valid() {
        assert!(Condition::new("x > 0").is_ok());
        assert!(Condition::new("true").is_ok());
        assert!(Condition::new("a & b | c").is_ok());
    }

    #[test]
    fn test_condition_empty_rejected() {
        let err = Condition::new("").unwrap_err();
        assert!(matches!(err, Error::InvalidCondition(_)));
    }

    #[test]
    fn test_condition_blank_rejected() {
        let err = Condition::new("   \t").unwrap_err();
        assert!(matches!(err, Error::InvalidCondition(_)));
    }

    #[test]
    fn test_condition_and_rendering() {
        let a = Condition::new("x > 0").unwrap();
        let b = Condition::new("y < 5").unwrap();
        assert_eq!(a.and(&b).as_str(), "(x > 0) & (y < 5)");
    }

    #[test]
    fn test_condition_and_does_not_simplify_true() {
        let t = Condition::always_true();
        let x = Condition::new("x").unwrap();
        assert_eq!(t.and(&x).as_str(), "(true) & (x)");
        assert_eq!(x.and(&t).as_str(), "(x) & (true)");
    }

    #[test]
    fn test_condition_and_leaves_operands_untouched() {
        let a = Condition::new("a").unwrap();
        let b = Condition::new("b").unwrap();
        let _ = a.and(&b);
        assert_eq!(a.as_str(), "a");
        assert_eq!(b.as_str(), "b");
    }

    #[test]
    fn test_condition_not_rendering() {
        let a = Condition::new("x > 0").unwrap();
        assert_eq!(a.not().as_str(), "! (x > 0)");
    }

    #[test]
    fn test_condition_double_negation_is_structural() {
        // Double negation wraps twice; the algebra never simplifies.
        let a = Condition::new("x").unwrap();
        assert_eq!(a.not().not().as_str(), "! (! (x))");
        assert_ne!(a.not().not(), a);
    }

    #[test]
    fn test_condition_equality_by_text() {
        let a = Condition::new("x > 0").unwrap();
        let b = Condition::new("x > 0").unwrap();
        let c = Condition::new("x>0").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_condition_hash_by_text() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(Condition::new("x").unwrap());
        set.insert(Condition::new("y").unwrap());
        set.insert(Condition::new("x").unwrap());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_condition_always_true() {
        let t = Condition::always_true();
        assert_eq!(t.as_str(), TRUE_CONDITION);
        assert!(t.is_always_true());
        assert!(!Condition::new("x").unwrap().is_always_true());
    }

    #[test]
    fn test_condition_display() {
        let a = Condition::new("x > 0").unwrap();
        assert_eq!(format!("{}", a), "x > 0");
    }

    #[test]
    fn test_condition_try_from() {
        let a: Condition = "x".try_into().unwrap();
        assert_eq!(a.as_str(), "x");
        let err: Result<Condition> = "".try_into();
        assert!(err.is_err());
    }

    #[test]
    fn test_condition_serde_round_trip() {
        let a = Condition::new("x > 0").unwrap();
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, "\"x > 0\"");
        let restored: Condition = serde_json::from_str(&json).unwrap();
        assert_eq!(a, restored);
    }

    proptest! {
        #[test]
        fn prop_and_contains_both_operands(a in "[a-z][a-z0-9 <>=]{0,12}", b in "[a-z][a-z0-9 <>=]{0,12}") {
            let ca = Condition::new(a.clone()).unwrap();
            let cb = Condition::new(b.clone()).unwrap();
            let both = ca.and(&cb);
            prop_assert!(both.as_str().contains(&a));
            prop_assert!(both.as_str().contains(&b));
        }

        #[test]
        fn prop_combination_is_deterministic(a in "[a-z][a-z0-9 ]{0,12}") {
            let c = Condition::new(a).unwrap();
            prop_assert_eq!(c.not().not(), c.not().not());
            prop_assert_eq!(c.and(&c), c.and(&c));
        }

        #[test]
        fn prop_not_wraps_operand(a in "[a-z][a-z0-9 ]{0,12}") {
            let c = Condition::new(a.clone()).unwrap();
            let negated = c.not();
            prop_assert_eq!(negated.as_str(), format!("! ({})", a));
        }
    }
}
