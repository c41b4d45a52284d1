//! Contract resolution engine for ravel
//!
//! This crate turns the hierarchical, contract-annotated automaton model of
//! `ravel-core` into the flat, disjoint contract sets consumed by an
//! external verification/simulation tool:
//!
//! - [`resolve_state`] / [`resolve_automaton`]: flatten per-edge contracts,
//!   region invariants, edge kinds and priorities into one exportable
//!   contract per contract-bearing edge
//! - [`render_hierarchy`] / [`export_to_string`]: render the resolved
//!   contracts and transitions in the target grammar
//!
//! The engine is a pure reader of the model: the caller snapshots the model
//! and the engine only allocates new values. It performs no I/O; rendering
//! targets any [`std::fmt::Write`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod export;
pub mod resolver;

pub use export::{export_to_string, render_hierarchy, render_system};
pub use resolver::{resolve_automaton, resolve_state, ResolvedContract};
