//! Edge kinds
//!
//! A [`Kind`] determines how an edge's contract participates in the
//! transition semantics when the automaton is flattened:
//!
//! - **Hit**: the contract holds as authored.
//! - **Miss**: the transition is taken when the guard fails; the
//!   precondition is negated and the postcondition forced to `true`.
//! - **Fail**: the guard holds but the declared effect is violated; the
//!   postcondition is negated.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How an edge's contract is handled during resolution.
///
/// The enum is closed: resolution matches exhaustively, so adding a kind is
/// a compile-time-checked change. Unknown kinds can only enter through the
/// textual parsing surface, which fails with [`Error::UnknownKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    /// Contract holds as authored
    Hit,
    /// Transition on guard failure, with no effect
    Miss,
    /// Guard holds but the declared effect is violated
    Fail,
}

impl Kind {
    /// Canonical upper-case name, as used in the flat automaton text.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Hit => "HIT",
            Kind::Miss => "MISS",
            Kind::Fail => "FAIL",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Kind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "HIT" => Ok(Kind::Hit),
            "MISS" => Ok(Kind::Miss),
            "FAIL" => Ok(Kind::Fail),
            other => Err(Error::UnknownKind(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trip_names() {
        for kind in [Kind::Hit, Kind::Miss, Kind::Fail] {
            assert_eq!(kind.as_str().parse::<Kind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_kind_parse_unknown() {
        let err = "NEAR_MISS".parse::<Kind>().unwrap_err();
        assert_eq!(err, Error::UnknownKind("NEAR_MISS".into()));
    }

    #[test]
    fn test_kind_parse_is_case_sensitive() {
        assert!("hit".parse::<Kind>().is_err());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(Kind::Miss.to_string(), "MISS");
    }

    #[test]
    fn test_kind_serde_round_trip() {
        let json = serde_json::to_string(&Kind::Fail).unwrap();
        let restored: Kind = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, Kind::Fail);
    }
}
