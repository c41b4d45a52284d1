//! Ravel - contract resolution core for hierarchical reactive automata
//!
//! Ravel models hierarchical reactive automata (nested systems of states,
//! edges, regions and contracts) and lowers them into flat, mutually
//! exclusive contract sets consumable by an external verification or
//! simulation tool.
//!
//! # Quick Start
//!
//! ```
//! use ravel::{Condition, Contract, ContractId, Kind, System, export_to_string};
//!
//! # fn main() -> ravel::Result<()> {
//! let mut system = System::new("controller")?;
//! let automaton = &mut system.automaton;
//!
//! let idle = automaton.add_state("idle")?;
//! let busy = automaton.add_state("busy")?;
//! let guard = Contract::new(
//!     ContractId(0),
//!     "start",
//!     Condition::new("request")?,
//!     Condition::new("running")?,
//! )?;
//! automaton.add_edge(idle, busy, Some(guard), Kind::Hit, 0)?;
//!
//! let flat = export_to_string(&system)?;
//! assert!(flat.contains("contract start := request ==> running"));
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! The model types live in `ravel-core`; the resolution algorithm and the
//! flat-text renderer live in `ravel-engine`. This crate re-exports both as
//! the public API.

pub use ravel_core::*;
pub use ravel_engine::*;
