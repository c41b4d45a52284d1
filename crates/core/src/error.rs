//! Error types for ravel
//!
//! This module defines the error type shared by the model and the resolution
//! engine. We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.

use crate::state::StateId;
use thiserror::Error;

/// Result type alias for ravel operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for model construction and contract resolution
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Condition text was empty or blank
    #[error("invalid condition: predicate text {0:?} is empty or blank")]
    InvalidCondition(String),

    /// Edge kind outside {HIT, MISS, FAIL}
    #[error("unknown edge kind: {0:?} (expected HIT, MISS or FAIL)")]
    UnknownKind(String),

    /// Region has no boundary contract
    #[error("region {0:?} has no boundary contract")]
    MalformedRegion(String),

    /// A priority grouping yielded no contract to reduce.
    ///
    /// Unreachable for a well-formed model: groups are built from the
    /// qualifying edges themselves.
    #[error("priority group {priority} of state {state:?} produced no contract")]
    EmptyPriorityGroup {
        /// Name of the state being resolved
        state: String,
        /// Numeric priority of the empty group
        priority: u32,
    },

    /// Element name was empty
    #[error("invalid name: must not be empty")]
    InvalidName,

    /// State id does not belong to the automaton
    #[error("no state with id {0}")]
    UnknownState(StateId),

    /// The start state cannot be removed while other states remain
    #[error("cannot remove the start state of an automaton")]
    StartStateRemoval,

    /// Formatting failure while rendering the flat automaton text
    #[error("failed to render flat automaton text")]
    Render(#[from] std::fmt::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_condition() {
        let err = Error::InvalidCondition(String::new());
        assert!(err.to_string().contains("invalid condition"));
    }

    #[test]
    fn test_error_display_unknown_kind() {
        let err = Error::UnknownKind("NEAR_MISS".into());
        let msg = err.to_string();
        assert!(msg.contains("NEAR_MISS"));
        assert!(msg.contains("HIT, MISS or FAIL"));
    }

    #[test]
    fn test_error_display_malformed_region() {
        let err = Error::MalformedRegion("critical".into());
        assert!(err.to_string().contains("critical"));
    }

    #[test]
    fn test_error_display_empty_priority_group() {
        let err = Error::EmptyPriorityGroup {
            state: "S".into(),
            priority: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains('S'));
        assert!(msg.contains('3'));
    }

    #[test]
    fn test_error_display_unknown_state() {
        let err = Error::UnknownState(StateId(7));
        assert!(err.to_string().contains('7'));
    }

    #[test]
    fn test_error_is_std_error() {
        let err = Error::InvalidName;
        let _: &dyn std::error::Error = &err;
    }
}
