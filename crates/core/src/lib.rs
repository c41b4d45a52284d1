//! Core model types for ravel
//!
//! This crate defines the in-memory model of a hierarchical reactive
//! automaton and the small boolean-condition algebra the resolution engine
//! is built on:
//!
//! - Condition: immutable boolean expression over opaque predicate text
//! - Contract: named precondition/postcondition pair
//! - Kind: HIT/MISS/FAIL modifier for how an edge handles its contract
//! - State, Edge, Region: the elements of one automaton level
//! - Automaton: arena-style owner of states/edges/regions with the query
//!   surface the resolver needs
//! - System: hierarchy node pairing a name with an automaton and children
//! - Error: error type hierarchy shared with the engine
//!
//! Everything here is a value type: the resolution engine reads the model
//! and allocates fresh values, it never mutates shared model data.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod automaton;
pub mod condition;
pub mod contract;
pub mod edge;
pub mod error;
pub mod kind;
pub mod region;
pub mod state;
pub mod system;

// Re-export commonly used types at the crate root
pub use automaton::Automaton;
pub use condition::{Condition, TRUE_CONDITION};
pub use contract::{Contract, ContractId};
pub use edge::{Edge, EdgeId, HIGHEST_PRIORITY};
pub use error::{Error, Result};
pub use kind::Kind;
pub use region::{Region, RegionId};
pub use state::{State, StateId};
pub use system::System;
