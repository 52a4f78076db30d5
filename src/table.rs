//! This module defines the `TransitionTable`, the indexed transition graph a
//! machine description is compiled into. It answers two questions for the
//! scheduler: which transitions leave a given state, and whether a state is
//! accepting.

use crate::types::{StateId, Transition};
use std::collections::{HashMap, HashSet};

/// The read-only transition graph of one machine.
///
/// Built once when the description is parsed and shared by every decision
/// procedure afterwards. Transitions are grouped by start state; within a
/// group, insertion order is preserved. That order is load-bearing: it fixes
/// which nondeterministic branch is explored first among alternatives at the
/// same step count.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TransitionTable {
    rules: HashMap<StateId, Vec<Transition>>,
    accepting: HashSet<StateId>,
}

impl TransitionTable {
    /// Creates an empty table (no transitions, no accepting states).
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a transition to the group of `start_state`, preserving the
    /// order transitions were read from the description.
    pub fn insert(&mut self, start_state: StateId, transition: Transition) {
        self.rules.entry(start_state).or_default().push(transition);
    }

    /// Marks a state as accepting. Marking the same state twice is harmless.
    pub fn mark_accepting(&mut self, state: StateId) {
        self.accepting.insert(state);
    }

    /// Returns the transitions leaving `state`, in insertion order. A state
    /// with no transitions yields an empty slice.
    pub fn lookup(&self, state: StateId) -> &[Transition] {
        self.rules.get(&state).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns whether `state` is in the acceptance set. States never
    /// mentioned in the description default to non-accepting.
    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting.contains(&state)
    }

    /// Number of distinct states that have at least one outgoing transition.
    pub fn state_count(&self) -> usize {
        self.rules.len()
    }

    /// Total number of transitions in the table.
    pub fn transition_count(&self) -> usize {
        self.rules.values().map(Vec::len).sum()
    }
}
