//! Contracts
//!
//! A [`Contract`] is a named precondition/postcondition pair describing a
//! guarded effect. Contracts are owned by whichever edge or region
//! references them; resolution never mutates a contract it reads from the
//! model, it always allocates a fresh one.

use crate::condition::Condition;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a contract within a model.
///
/// Derived contracts produced by resolution all carry id 0; they live only
/// in the export pipeline and are never written back into the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContractId(pub u32);

impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Named precondition/postcondition pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contract {
    /// Identifier within the owning model
    pub id: ContractId,
    /// Non-empty contract name
    pub name: String,
    /// Guard that must hold before the transition
    pub precondition: Condition,
    /// Effect that must hold after the transition
    pub postcondition: Condition,
}

impl Contract {
    /// Create a contract, validating the name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] if the name is empty.
    pub fn new(
        id: ContractId,
        name: impl Into<String>,
        precondition: Condition,
        postcondition: Condition,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::InvalidName);
        }
        Ok(Contract {
            id,
            name,
            precondition,
            postcondition,
        })
    }

    /// Create a contract whose conditions were omitted by the author.
    ///
    /// Both conditions default to the universally-true condition.
    pub fn trivial(id: ContractId, name: impl Into<String>) -> Result<Self> {
        Contract::new(id, name, Condition::always_true(), Condition::always_true())
    }
}
