//! Regions
//!
//! A [`Region`] is a named grouping of states sharing an invariant and a
//! boundary contract. During resolution the invariant and boundary
//! conditions of every region containing a state are conjoined into each
//! contract leaving that state. A state may belong to any number of
//! regions, including none.

use crate::condition::Condition;
use crate::contract::Contract;
use crate::error::{Error, Result};
use crate::state::StateId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Identifier of a region within an automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RegionId(pub u32);

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Named grouping of states with an invariant and a boundary contract.
///
/// The boundary contract is optional at the model level because the editor
/// may not have authored it yet; resolution treats its absence as a
/// [`MalformedRegion`](Error::MalformedRegion) failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Identifier within the owning automaton
    pub id: RegionId,
    /// Non-empty region name
    pub name: String,
    /// Condition that holds while any member state is active
    pub invariant: Condition,
    /// Pre/post behavior imposed while the region is active
    pub boundary: Option<Contract>,
    /// Member states
    states: HashSet<StateId>,
}

impl Region {
    /// Create a region with no member states, validating the name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] if the name is empty.
    pub fn new(
        id: RegionId,
        name: impl Into<String>,
        invariant: Condition,
        boundary: Option<Contract>,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::InvalidName);
        }
        Ok(Region {
            id,
            name,
            invariant,
            boundary,
            states: HashSet::new(),
        })
    }

    /// Add a member state.
    pub fn add_state(&mut self, state: StateId) {
        self.states.insert(state);
    }

    /// Remove a member state.
    pub fn remove_state(&mut self, state: StateId) {
        self.states.remove(&state);
    }

    /// Whether the given state is a member of this region.
    pub fn contains(&self, state: StateId) -> bool {
        self.states.contains(&state)
    }

    /// Member states, in no particular order.
    pub fn states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.states.iter().copied()
    }

    /// The boundary contract, or [`Error::MalformedRegion`] if missing.
    pub fn boundary_contract(&self) -> Result<&Contract> {
        self.boundary
            .as_ref()
            .ok_or_else(|| Error::MalformedRegion(self.name.clone()))
    }
}
