//! Flat automaton export
//!
//! Renders a system hierarchy as the flat textual automaton description the
//! external verification tool consumes. Each system becomes one block:
//!
//! ```text
//! contract <systemName> {
//!     contract <name> := <precondition> ==> <postcondition>
//!     ...
//!     <source> -> <destination> :: <contractName>
//!     ...
//! }
//! ```
//!
//! The renderer writes into any [`std::fmt::Write`]; opening files and
//! choosing destinations stays with the caller. An export either succeeds
//! for the whole hierarchy or fails with the first resolution error; no
//! partially-correct text is produced.

use crate::resolver::resolve_automaton;
use ravel_core::{Result, System};
use std::fmt::Write;
use tracing::debug;

const INDENT: &str = "    ";

/// Render the whole hierarchy, one block per system in depth-first preorder.
pub fn render_hierarchy<W: Write>(out: &mut W, root: &System) -> Result<()> {
    for (index, system) in root.hierarchy().into_iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        render_system(out, system)?;
    }
    Ok(())
}

/// Render one system's automaton as a flat contract block.
pub fn render_system<W: Write>(out: &mut W, system: &System) -> Result<()> {
    let resolved = resolve_automaton(&system.automaton)?;
    debug!(system = %system.name, contracts = resolved.len(), "rendering system");

    writeln!(out, "contract {} {{", system.name)?;
    for entry in &resolved {
        writeln!(
            out,
            "{INDENT}contract {} := {} ==> {}",
            entry.contract.name, entry.contract.precondition, entry.contract.postcondition
        )?;
    }
    if !resolved.is_empty() {
        writeln!(out)?;
    }
    for entry in &resolved {
        let source = system.automaton.state(entry.source)?;
        let destination = system.automaton.state(entry.destination)?;
        writeln!(
            out,
            "{INDENT}{} -> {} :: {}",
            source.name, destination.name, entry.contract.name
        )?;
    }
    writeln!(out, "}}")?;
    Ok(())
}

/// Convenience wrapper rendering the hierarchy into a fresh string.
pub fn export_to_string(root: &System) -> Result<String> {
    let mut text = String::new();
    render_hierarchy(&mut text, root)?;
    Ok(text)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ravel_core::{Condition, Contract, ContractId, Error, Kind, HIGHEST_PRIORITY};

    fn cond(s: &str) -> Condition {
        Condition::new(s).unwrap()
    }

    fn contract(name: &str, pre: &str, post: &str) -> Contract {
        Contract::new(ContractId(0), name, cond(pre), cond(post)).unwrap()
    }

    fn sample_system() -> System {
        let mut system = System::new("controller").unwrap();
        let a = &mut system.automaton;
        let s = a.add_state("S").unwrap();
        let sa = a.add_state("A").unwrap();
        let sb = a.add_state("B").unwrap();
        a.add_edge(s, sa, Some(contract("c1", "x", "y")), Kind::Hit, 0)
            .unwrap();
        a.add_edge(s, sb, Some(contract("c2", "z", "w")), Kind::Hit, 1)
            .unwrap();
        system
    }

    #[test]
    fn test_render_system_block() {
        let text = export_to_string(&sample_system()).unwrap();
        assert_eq!(
            text,
            "contract controller {\n\
             \x20   contract c1 := x ==> y\n\
             \x20   contract c2 := (z) & (! (x)) ==> w\n\
             \n\
             \x20   S -> A :: c1\n\
             \x20   S -> B :: c2\n\
             }\n"
        );
    }

    #[test]
    fn test_render_empty_automaton() {
        let system = System::new("empty").unwrap();
        let text = export_to_string(&system).unwrap();
        assert_eq!(text, "contract empty {\n}\n");
    }

    #[test]
    fn test_render_miss_edge_uses_kind_suffixed_label() {
        let mut system = System::new("controller").unwrap();
        let a = &mut system.automaton;
        let s = a.add_state("S").unwrap();
        let t = a.add_state("T").unwrap();
        a.add_edge(
            s,
            t,
            Some(contract("c1", "x", "y")),
            Kind::Miss,
            HIGHEST_PRIORITY,
        )
        .unwrap();

        let text = export_to_string(&system).unwrap();
        assert!(text.contains("contract c1 MISS := ! (x) ==> true"));
        assert!(text.contains("S -> T :: c1 MISS"));
    }

    #[test]
    fn test_render_hierarchy_emits_one_block_per_system() {
        let mut root = sample_system();
        root.add_child(System::new("child").unwrap());

        let text = export_to_string(&root).unwrap();
        assert!(text.contains("contract controller {"));
        assert!(text.contains("contract child {\n}\n"));
        // Blocks are separated by a blank line.
        assert!(text.contains("}\n\ncontract child"));
    }

    #[test]
    fn test_export_aborts_on_malformed_region() {
        let mut system = sample_system();
        let a = &mut system.automaton;
        let s = a.state_by_name("S").unwrap().id;
        let r = a.add_region("broken", cond("inv"), None).unwrap();
        a.region_mut(r).unwrap().add_state(s);

        let err = export_to_string(&system).unwrap_err();
        assert_eq!(err, Error::MalformedRegion("broken".into()));
    }
}
