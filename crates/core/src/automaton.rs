//! Automata
//!
//! An [`Automaton`] owns the states, edges and regions of one hierarchy
//! level and hands out arena-style ids for them. The resolution engine only
//! uses its query surface ([`outgoing_edges`](Automaton::outgoing_edges),
//! [`regions_containing`](Automaton::regions_containing)); the mutation
//! surface exists for the editing layers that author the model.
//!
//! Iteration order is the order in which elements were added, which keeps
//! resolution and export output deterministic for a given model.

use crate::condition::Condition;
use crate::contract::Contract;
use crate::edge::{Edge, EdgeId};
use crate::error::{Error, Result};
use crate::kind::Kind;
use crate::region::{Region, RegionId};
use crate::state::{State, StateId};
use serde::{Deserialize, Serialize};

/// States, edges and regions of one hierarchy level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Automaton {
    start_state: Option<StateId>,
    states: Vec<State>,
    edges: Vec<Edge>,
    regions: Vec<Region>,
    next_state: u32,
    next_edge: u32,
    next_region: u32,
}

impl Automaton {
    /// Create an empty automaton.
    pub fn new() -> Self {
        Automaton::default()
    }

    /// Whether the automaton has no states, edges or regions.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty() && self.edges.is_empty() && self.regions.is_empty()
    }

    // ------------------------------------------------------------------
    // States
    // ------------------------------------------------------------------

    /// Add a state and return its id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] if the name is empty.
    pub fn add_state(&mut self, name: impl Into<String>) -> Result<StateId> {
        let id = StateId(self.next_state);
        let state = State::new(id, name)?;
        self.next_state += 1;
        self.states.push(state);
        Ok(id)
    }

    /// Remove a state.
    ///
    /// The start state can only be removed when it is the last remaining
    /// state, in which case the start marker is cleared with it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownState`] if the id is not in the automaton and
    /// [`Error::StartStateRemoval`] if the state is the start state while
    /// other states remain.
    pub fn remove_state(&mut self, id: StateId) -> Result<()> {
        let index = self
            .states
            .iter()
            .position(|s| s.id == id)
            .ok_or(Error::UnknownState(id))?;
        if self.start_state == Some(id) {
            if self.states.len() > 1 {
                return Err(Error::StartStateRemoval);
            }
            self.start_state = None;
        }
        self.states.remove(index);
        Ok(())
    }

    /// Look up a state by id.
    pub fn state(&self, id: StateId) -> Result<&State> {
        self.states
            .iter()
            .find(|s| s.id == id)
            .ok_or(Error::UnknownState(id))
    }

    /// Look up the first state with the given name.
    pub fn state_by_name(&self, name: &str) -> Option<&State> {
        self.states.iter().find(|s| s.name == name)
    }

    /// All states, in insertion order.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Mark a state as the start state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownState`] if the id is not in the automaton.
    pub fn set_start_state(&mut self, id: StateId) -> Result<()> {
        self.state(id)?;
        self.start_state = Some(id);
        Ok(())
    }

    /// The start state, if one is set.
    pub fn start_state(&self) -> Option<StateId> {
        self.start_state
    }

    // ------------------------------------------------------------------
    // Edges
    // ------------------------------------------------------------------

    /// Add an edge and return its id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownState`] if either endpoint is not in the
    /// automaton.
    pub fn add_edge(
        &mut self,
        source: StateId,
        destination: StateId,
        contract: Option<Contract>,
        kind: Kind,
        priority: u32,
    ) -> Result<EdgeId> {
        self.state(source)?;
        self.state(destination)?;
        let id = EdgeId(self.next_edge);
        self.next_edge += 1;
        self.edges.push(Edge {
            id,
            source,
            destination,
            contract,
            kind,
            priority,
        });
        Ok(id)
    }

    /// Remove an edge. Removing an unknown id is a no-op.
    pub fn remove_edge(&mut self, id: EdgeId) {
        self.edges.retain(|e| e.id != id);
    }

    /// Look up an edge by id.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// Mutable access to an edge, for the editing layers.
    pub fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge> {
        self.edges.iter_mut().find(|e| e.id == id)
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edges leaving the given state, in insertion order.
    pub fn outgoing_edges(&self, state: StateId) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(move |e| e.source == state)
    }

    // ------------------------------------------------------------------
    // Regions
    // ------------------------------------------------------------------

    /// Add a region with no member states and return its id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] if the name is empty.
    pub fn add_region(
        &mut self,
        name: impl Into<String>,
        invariant: Condition,
        boundary: Option<Contract>,
    ) -> Result<RegionId> {
        let id = RegionId(self.next_region);
        let region = Region::new(id, name, invariant, boundary)?;
        self.next_region += 1;
        self.regions.push(region);
        Ok(id)
    }

    /// Remove a region. Removing an unknown id is a no-op.
    pub fn remove_region(&mut self, id: RegionId) {
        self.regions.retain(|r| r.id != id);
    }

    /// Look up a region by id.
    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    /// Mutable access to a region, e.g. for membership edits.
    pub fn region_mut(&mut self, id: RegionId) -> Option<&mut Region> {
        self.regions.iter_mut().find(|r| r.id == id)
    }

    /// All regions, in insertion order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Regions that contain the given state, in insertion order.
    pub fn regions_containing(&self, state: StateId) -> impl Iterator<Item = &Region> {
        self.regions.iter().filter(move |r| r.contains(state))
    }
}
