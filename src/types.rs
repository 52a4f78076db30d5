//! This module defines the core data structures and types used throughout the
//! nondeterministic Turing Machine simulator: state identifiers, transitions,
//! verdicts, and error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Rule;

/// Identifier of a machine state. State indices are non-negative and may be
/// sparse and out of order in a description.
pub type StateId = u32;

/// The state every decision procedure starts in.
pub const INITIAL_STATE: StateId = 0;

/// The reserved blank symbol, materialized on first access to a tape cell
/// that was never written. When it appears in a transition's read or write
/// field it refers to this reserved symbol, not to a user-alphabet symbol.
pub const BLANK_SYMBOL: char = '_';

/// A single transition rule of the machine.
///
/// The start state is not stored here: transitions are grouped by start
/// state inside [`crate::table::TransitionTable`], and the order in which
/// transitions sharing a start state were inserted is preserved. That order
/// is observable - it determines nondeterministic branch exploration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// The symbol that must be under the head for this transition to apply.
    pub read: char,
    /// The symbol written at the head position when the transition is taken.
    pub write: char,
    /// The direction the head moves after writing.
    pub direction: Direction,
    /// The state the machine enters.
    pub end_state: StateId,
}

/// Represents the possible directions a tape head can move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Move the head one position to the left.
    Left,
    /// Move the head one position to the right.
    Right,
}

/// The three-valued result of one decision procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// An accepting state was reached within the step bound.
    Accepted,
    /// Every branch died out before the bound was hit.
    Rejected,
    /// The step bound was exhausted with branches still alive.
    Undecided,
}

impl Verdict {
    /// Returns the single-character form emitted per input line.
    pub fn symbol(&self) -> char {
        match self {
            Verdict::Accepted => '1',
            Verdict::Rejected => '0',
            Verdict::Undecided => 'U',
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Represents the errors that can occur while loading a machine description.
///
/// The simulation itself has no error path: bound exhaustion and dead
/// branches are ordinary verdicts, not failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NtmError {
    /// Indicates a syntax error in a machine description.
    #[error("Description parsing error: {0}")]
    ParseError(#[from] Box<pest::error::Error<Rule>>),
    /// Indicates a semantic problem in an otherwise well-formed description.
    #[error("Description validation error: {0}")]
    ValidationError(String),
    /// Indicates an error related to file system operations.
    #[error("File error: {0}")]
    FileError(String),
}
