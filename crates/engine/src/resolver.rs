//! Contract resolution
//!
//! Flattens the per-edge, per-region, per-kind, per-priority information of
//! one automaton state into a disjoint set of exportable contracts. For
//! each state the steps are:
//!
//! 1. Copy the contract of every outgoing edge that carries one.
//! 2. Conjoin the invariants and boundary contracts of every region
//!    containing the state into each copy.
//! 3. Apply the edge kind: HIT leaves the copy alone, MISS negates the
//!    precondition and forces the postcondition to `true`, FAIL negates the
//!    postcondition.
//! 4. Group the edges by priority and strengthen every group below the
//!    highest precedence with the negated guards of all higher-precedence
//!    groups, so priority becomes declarative mutual exclusion instead of
//!    first-match-wins ordering.
//!
//! Resolution is a pure function of the model snapshot: it never mutates
//! the edges, regions or contracts it reads, and every produced contract is
//! a fresh allocation. Distinct states can therefore be resolved in
//! parallel, which [`resolve_automaton`] does.
//!
//! Conditions are combined here through a `true`-absorbing merge: conjoining
//! a real condition into the universally-true placeholder keeps the real
//! condition instead of accumulating `(true) & (...)` noise in the exported
//! text. This absorption belongs to resolution, not to the condition
//! algebra itself.

use rayon::prelude::*;
use ravel_core::{
    Automaton, Condition, Contract, ContractId, Edge, EdgeId, Error, Kind, Region, Result, StateId,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// One flattened contract, tied to the edge it was derived from.
///
/// Resolved contracts are owned by the export pipeline alone; they never
/// alias contracts in the live model. The contract's name is the label the
/// renderer uses for both the contract line and the transition line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedContract {
    /// Edge this contract was derived from
    pub edge: EdgeId,
    /// Source state of that edge
    pub source: StateId,
    /// Destination state of that edge
    pub destination: StateId,
    /// The flattened contract
    pub contract: Contract,
}

/// Resolve every state of an automaton.
///
/// States are resolved independently and in parallel, one worker per state;
/// the output is ordered by state and, within a state, by edge insertion
/// order. The model is only read, never mutated.
pub fn resolve_automaton(automaton: &Automaton) -> Result<Vec<ResolvedContract>> {
    let per_state: Vec<Vec<ResolvedContract>> = automaton
        .states()
        .par_iter()
        .map(|state| resolve_state(automaton, state.id))
        .collect::<Result<_>>()?;
    Ok(per_state.into_iter().flatten().collect())
}

/// Resolve one state into its disjoint set of flattened contracts.
///
/// Returns one contract per outgoing contract-bearing edge, in edge
/// insertion order, or an empty collection when the state has none.
///
/// # Errors
///
/// Fails fast on malformed models: [`Error::UnknownState`] for a state id
/// outside the automaton, [`Error::MalformedRegion`] for a containing
/// region without a boundary contract. No partial result is returned.
pub fn resolve_state(automaton: &Automaton, state: StateId) -> Result<Vec<ResolvedContract>> {
    let state_name = &automaton.state(state)?.name;
    let qualifying: Vec<(&Edge, &Contract)> = automaton
        .outgoing_edges(state)
        .filter_map(|edge| edge.contract.as_ref().map(|contract| (edge, contract)))
        .collect();
    if qualifying.is_empty() {
        return Ok(Vec::new());
    }

    let regions: Vec<&Region> = automaton.regions_containing(state).collect();
    let region_terms = combine_regions(&regions)?;

    // Fresh copies so the model stays untouched (steps 1-3).
    let mut working: Vec<Contract> = Vec::with_capacity(qualifying.len());
    for (edge, original) in &qualifying {
        let mut contract = Contract::new(
            ContractId(0),
            contract_label(original, edge.kind),
            original.precondition.clone(),
            original.postcondition.clone(),
        )?;
        if let Some((pre, post)) = &region_terms {
            contract.precondition = merge(&contract.precondition, pre);
            contract.postcondition = merge(&contract.postcondition, post);
        }
        apply_kind(&mut contract, edge.kind);
        working.push(contract);
    }

    apply_priorities(state_name, &qualifying, &mut working)?;

    let resolved: Vec<ResolvedContract> = qualifying
        .iter()
        .zip(working)
        .map(|((edge, _), contract)| ResolvedContract {
            edge: edge.id,
            source: edge.source,
            destination: edge.destination,
            contract,
        })
        .collect();
    debug!(
        state = %state_name,
        contracts = resolved.len(),
        regions = regions.len(),
        "resolved state"
    );
    Ok(resolved)
}

/// Conjunction with resolution-time unit absorption.
///
/// Merging into the exact `true` placeholder yields the other operand;
/// everything else is plain textual conjunction.
fn merge(a: &Condition, b: &Condition) -> Condition {
    if a.is_always_true() {
        b.clone()
    } else if b.is_always_true() {
        a.clone()
    } else {
        a.and(b)
    }
}

/// Combine the regions containing a state into one (pre, post) pair.
///
/// The accumulator is seeded with the first region's boundary contract and
/// then folded over every region in the list, the seed region included
/// again. The repeated term is harmless: the algebra never deduplicates,
/// and the absorbing merge collapses the common all-`true` boundaries.
/// Returns `None` when the state belongs to no region.
fn combine_regions(regions: &[&Region]) -> Result<Option<(Condition, Condition)>> {
    let Some(first) = regions.first() else {
        return Ok(None);
    };
    let seed = first.boundary_contract()?;
    let mut pre = seed.precondition.clone();
    let mut post = seed.postcondition.clone();
    for region in regions {
        let boundary = region.boundary_contract()?;
        pre = merge(&pre, &boundary.precondition);
        pre = merge(&pre, &region.invariant);
        post = merge(&post, &boundary.postcondition);
        post = merge(&post, &region.invariant);
    }
    Ok(Some((pre, post)))
}

/// Rewrite a working contract according to its edge's kind.
fn apply_kind(contract: &mut Contract, kind: Kind) {
    match kind {
        Kind::Hit => {}
        Kind::Miss => {
            contract.precondition = contract.precondition.not();
            contract.postcondition = Condition::always_true();
        }
        Kind::Fail => {
            contract.postcondition = contract.postcondition.not();
        }
    }
}

/// Label under which a flattened contract is exported.
///
/// A contract handled as MISS or FAIL is a different flat contract than the
/// HIT rendition of the same authored contract, so the kind is appended to
/// keep the names distinct in the target file.
fn contract_label(contract: &Contract, kind: Kind) -> String {
    match kind {
        Kind::Hit => contract.name.clone(),
        Kind::Miss | Kind::Fail => format!("{} {}", contract.name, kind),
    }
}

/// Make the priority classes mutually exclusive (step 4).
///
/// Groups are processed from highest precedence (lowest numeric priority)
/// to lowest. A left-fold accumulates the conjoined guards of the groups
/// seen so far; every contract in a group below the highest precedence is
/// strengthened with the negation of the accumulator entry before it, so it
/// can only fire when no higher-precedence guard holds.
fn apply_priorities(
    state_name: &str,
    qualifying: &[(&Edge, &Contract)],
    working: &mut [Contract],
) -> Result<()> {
    let mut groups: BTreeMap<u32, Vec<usize>> = BTreeMap::new();
    for (index, (edge, _)) in qualifying.iter().enumerate() {
        groups.entry(edge.priority).or_default().push(index);
    }
    if groups.len() < 2 {
        return Ok(());
    }
    trace!(state = %state_name, groups = groups.len(), "applying priority exclusion");

    // Conjoined guard of each priority class, highest precedence first.
    let combined: Vec<Condition> = groups
        .iter()
        .map(|(priority, members)| {
            members
                .iter()
                .map(|&index| working[index].precondition.clone())
                .reduce(|a, b| merge(&a, &b))
                .ok_or_else(|| Error::EmptyPriorityGroup {
                    state: state_name.to_owned(),
                    priority: *priority,
                })
        })
        .collect::<Result<_>>()?;

    // accumulated[j] = "some group with precedence <= j would have matched";
    // the last group never feeds an exclusion term, so it is left out.
    let mut accumulated: Vec<Condition> = Vec::with_capacity(combined.len() - 1);
    for guard in combined.iter().take(combined.len() - 1) {
        let entry = match accumulated.last() {
            Some(previous) => merge(previous, guard),
            None => guard.clone(),
        };
        accumulated.push(entry);
    }

    for (position, members) in groups.values().enumerate() {
        if position == 0 {
            // Highest precedence never needs an exclusion term.
            continue;
        }
        let exclusion = accumulated[position - 1].not();
        for &index in members {
            working[index].precondition = merge(&working[index].precondition, &exclusion);
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
