//! System hierarchy
//!
//! A [`System`] is one node of the hierarchical model: a named component
//! owning one [`Automaton`] and any number of child systems. The export
//! pipeline walks the hierarchy in depth-first preorder and flattens each
//! system's automaton independently.

use crate::automaton::Automaton;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Named node of the system hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct System {
    /// Non-empty system name
    pub name: String,
    /// This level's automaton
    pub automaton: Automaton,
    children: Vec<System>,
}

impl System {
    /// Create a system with an empty automaton and no children.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::InvalidName);
        }
        Ok(System {
            name,
            automaton: Automaton::new(),
            children: Vec::new(),
        })
    }

    /// Add a child system and return a mutable reference to it.
    pub fn add_child(&mut self, child: System) -> &mut System {
        self.children.push(child);
        let index = self.children.len() - 1;
        &mut self.children[index]
    }

    /// Direct children, in insertion order.
    pub fn children(&self) -> &[System] {
        &self.children
    }

    /// This system followed by all descendants, depth-first preorder.
    pub fn hierarchy(&self) -> Vec<&System> {
        let mut out = Vec::new();
        self.collect(&mut out);
        out
    }

    fn collect<'a>(&'a self, out: &mut Vec<&'a System>) {
        out.push(self);
        for child in &self.children {
            child.collect(out);
        }
    }

    /// Look up a descendant (or this system) by name, depth-first preorder.
    pub fn find(&self, name: &str) -> Option<&System> {
        self.hierarchy().into_iter().find(|s| s.name == name)
    }
}
