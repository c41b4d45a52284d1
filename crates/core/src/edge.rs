//! Edges
//!
//! An [`Edge`] is a directed transition between two states. It may carry a
//! [`Contract`], a [`Kind`] describing how that contract participates in
//! the transition semantics, and a numeric priority. Edges without a
//! contract take no part in contract resolution.

use crate::contract::Contract;
use crate::kind::Kind;
use crate::state::StateId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest-precedence priority value. Larger numbers rank lower.
pub const HIGHEST_PRIORITY: u32 = 0;

/// Identifier of an edge within an automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(pub u32);

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Directed transition between two states of one automaton.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Identifier within the owning automaton
    pub id: EdgeId,
    /// Source state
    pub source: StateId,
    /// Destination state
    pub destination: StateId,
    /// Guarding contract; edges without one are ignored by resolution
    pub contract: Option<Contract>,
    /// How the contract participates in the transition semantics
    pub kind: Kind,
    /// Priority among edges leaving the same state; 0 is highest precedence
    pub priority: u32,
}

impl Edge {
    /// Whether this edge participates in contract resolution.
    #[inline]
    pub fn is_qualifying(&self) -> bool {
        self.contract.is_some()
    }
}
