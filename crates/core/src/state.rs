//! States
//!
//! A [`State`] is an identity-bearing node of an automaton. States are
//! addressed by [`StateId`], an arena index handed out by the owning
//! [`Automaton`](crate::automaton::Automaton).

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a state within an automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StateId(pub u32);

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity-bearing node of an automaton.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    /// Identifier within the owning automaton
    pub id: StateId,
    /// Non-empty state name
    pub name: String,
}

impl State {
    /// Create a state, validating the name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] if the name is empty.
    pub fn new(id: StateId, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::InvalidName);
        }
        Ok(State { id, name })
    }
}
