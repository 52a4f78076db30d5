//! This module defines the `Scheduler`, the bounded breadth-first engine
//! that decides whether a nondeterministic machine accepts an input string.
//! It owns the per-run queue of configurations, duplicates tapes before
//! mutating them, and reports the first terminal outcome it encounters.

use crate::table::TransitionTable;
use crate::tape::Tape;
use crate::types::{StateId, Verdict, INITIAL_STATE};
use std::collections::VecDeque;

/// A snapshot of one exploration branch: the machine state it is in, the
/// tape it exclusively owns, the head position on that tape, and how many
/// transitions it has taken so far.
///
/// Configurations are created by the scheduler when a branch is enqueued
/// and dropped once the branch has been fully expanded (or the run ends),
/// which releases the owned tape in the same operation.
struct Configuration {
    state: StateId,
    tape: Tape,
    head: isize,
    steps: usize,
}

/// Per-run accounting of configuration lifetimes.
///
/// After every decision `configurations_created` equals
/// `configurations_released`: each configuration is either expanded and
/// dropped in the search loop or drained from the queue when the run ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Configurations constructed during the run, initial one included.
    pub configurations_created: usize,
    /// Configurations consumed by expansion or drained at termination.
    pub configurations_released: usize,
}

/// The outcome of one decision procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// The three-valued verdict for the input string.
    pub verdict: Verdict,
    /// Lifetime accounting for the run, mostly of interest to tests.
    pub stats: RunStats,
}

/// Drives one bounded breadth-first decision procedure per input string.
///
/// The scheduler borrows the transition table (built once per machine,
/// read-only afterwards) and carries the step bound. Runs are strictly
/// sequential and share nothing: each call to [`Scheduler::decide`] builds
/// its own queue, and every configuration created during the call is
/// released before the call returns.
pub struct Scheduler<'a> {
    table: &'a TransitionTable,
    max_steps: usize,
}

impl<'a> Scheduler<'a> {
    /// Creates a scheduler for one machine.
    ///
    /// # Arguments
    ///
    /// * `table` - The machine's transition graph and acceptance set.
    /// * `max_steps` - The step bound. A branch dequeued with exactly this
    ///   many steps terminates the run as undecided without being expanded.
    pub fn new(table: &'a TransitionTable, max_steps: usize) -> Self {
        Self { table, max_steps }
    }

    /// Decides one input string.
    ///
    /// Seeds the queue with the initial configuration (state 0, the input
    /// left-aligned on a fresh tape, head at position 0, zero steps) and
    /// explores in strict FIFO order until a terminal outcome is reached:
    ///
    /// * `Accepted` - some matching transition leads into an accepting
    ///   state. First found wins; no further queue work happens.
    /// * `Undecided` - the oldest queued configuration has already taken
    ///   `max_steps` transitions. Because expansion is pure BFS, every
    ///   shallower configuration has been fully expanded by then, so no
    ///   shorter accepting path can have been missed.
    /// * `Rejected` - the queue drained without either of the above.
    ///
    /// Two quirks of the search are deliberate, documented behavior: the
    /// initial configuration's own state is never acceptance-checked (only
    /// states reached via at least one transition are), and a branch that
    /// would accept at exactly `max_steps` is never explored - the bound is
    /// exclusive of a final accepting move.
    pub fn decide(&self, input: &str) -> Decision {
        let mut stats = RunStats::default();
        let mut queue: VecDeque<Configuration> = VecDeque::new();

        queue.push_back(Configuration {
            state: INITIAL_STATE,
            tape: Tape::new(input),
            head: 0,
            steps: 0,
        });
        stats.configurations_created += 1;

        let verdict = loop {
            let Some(config) = queue.pop_front() else {
                break Verdict::Rejected;
            };
            stats.configurations_released += 1;

            if config.steps == self.max_steps {
                break Verdict::Undecided;
            }

            if let Some(verdict) = self.expand(&config, &mut queue, &mut stats) {
                break verdict;
            }
        };

        // Branches abandoned by a short-circuit are drained here, so no
        // state leaks into the next string's run.
        stats.configurations_released += queue.len();
        queue.clear();

        Decision { verdict, stats }
    }

    /// Expands one configuration over all matching transitions, in the
    /// order they were inserted into the table.
    ///
    /// Acceptance is tested on the candidate successor state before any
    /// tape is duplicated, so a branch about to accept costs no copy. Every
    /// non-accepting successor gets an independent duplicate of the parent
    /// tape with the write and head move applied.
    fn expand(
        &self,
        config: &Configuration,
        queue: &mut VecDeque<Configuration>,
        stats: &mut RunStats,
    ) -> Option<Verdict> {
        let symbol = config.tape.read(config.head);

        for transition in self.table.lookup(config.state) {
            if transition.read != symbol {
                continue;
            }

            if self.table.is_accepting(transition.end_state) {
                return Some(Verdict::Accepted);
            }

            let mut tape = config.tape.clone();
            tape.write(config.head, transition.write);
            let head = tape.step(config.head, transition.direction);

            queue.push_back(Configuration {
                state: transition.end_state,
                tape,
                head,
                steps: config.steps + 1,
            });
            stats.configurations_created += 1;
        }

        None
    }
}
