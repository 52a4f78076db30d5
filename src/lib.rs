//! This crate provides the core logic for a bounded nondeterministic Turing
//! Machine simulator. It includes modules for parsing machine descriptions,
//! exploring nondeterministic branches breadth-first under a step bound, and
//! reporting the resulting accept/reject/undecided verdicts.

pub mod loader;
pub mod machines;
pub mod parser;
pub mod reporter;
pub mod scheduler;
pub mod table;
pub mod tape;
pub mod types;

/// Re-exports the `Rule` enum from the parser module, used by the `pest` grammar.
pub use crate::parser::Rule;
/// Re-exports the `DescriptionLoader` struct from the loader module.
pub use loader::DescriptionLoader;
/// Re-exports the `MachineCatalog` struct and `MachineInfo` from the machines module.
pub use machines::{MachineCatalog, MachineInfo, MACHINES};
/// Re-exports the `parse` function and `Description` struct from the parser module.
pub use parser::{parse, Description};
/// Re-exports the `Reporter` struct from the reporter module.
pub use reporter::Reporter;
/// Re-exports the BFS engine types from the scheduler module.
pub use scheduler::{Decision, RunStats, Scheduler};
/// Re-exports the `TransitionTable` struct from the table module.
pub use table::TransitionTable;
/// Re-exports the `Tape` struct from the tape module.
pub use tape::Tape;
/// Re-exports the core data types from the types module.
pub use types::{
    Direction, NtmError, StateId, Transition, Verdict, BLANK_SYMBOL, INITIAL_STATE,
};
