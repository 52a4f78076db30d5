//! This module defines the `Tape`, a two-way-unbounded sequence of symbols
//! with implicit blank extension. Each exploration branch owns exactly one
//! tape; duplication (via `Clone`) is the only way tape state propagates to
//! descendant branches.

use crate::types::{Direction, BLANK_SYMBOL};
use std::collections::VecDeque;
use std::fmt;

/// A mutable, duplicable tape.
///
/// The materialized cells live in a `VecDeque<char>`; `origin` records the
/// tape position of the front cell, so positions may go negative when the
/// head walks off the left end of the input. Reading outside the
/// materialized range yields the blank symbol without allocating; writing or
/// moving there extends the deque with blanks first.
///
/// `Clone` is a deep copy (the deque owns its cells), which gives the
/// duplication-independence guarantee the scheduler relies on: mutating a
/// duplicate never changes what the original or any sibling reads. Dropping
/// a tape releases everything it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: VecDeque<char>,
    origin: isize,
}

impl Tape {
    /// Builds a tape from an input string, one symbol per cell, left-aligned
    /// at position 0. The empty string yields a tape with no materialized
    /// cells; reading position 0 then returns the blank.
    pub fn new(input: &str) -> Self {
        Self {
            cells: input.chars().collect(),
            origin: 0,
        }
    }

    /// Returns the symbol at `position`, or the blank symbol if that cell
    /// was never materialized.
    pub fn read(&self, position: isize) -> char {
        let index = position - self.origin;
        if index >= 0 && (index as usize) < self.cells.len() {
            self.cells[index as usize]
        } else {
            BLANK_SYMBOL
        }
    }

    /// Writes `symbol` at `position`, materializing the cell (and any gap up
    /// to it) with blanks if needed.
    pub fn write(&mut self, position: isize, symbol: char) {
        self.materialize(position);
        let index = (position - self.origin) as usize;
        self.cells[index] = symbol;
    }

    /// Moves the head from `position` one cell in `direction` and returns
    /// the new position. The target cell is materialized with a blank if it
    /// lies outside the current range, so a subsequent `read`/`write` at the
    /// returned position always addresses a real cell.
    pub fn step(&mut self, position: isize, direction: Direction) -> isize {
        let next = match direction {
            Direction::Left => position - 1,
            Direction::Right => position + 1,
        };
        self.materialize(next);
        next
    }

    /// Number of materialized cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell has been materialized yet.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Extends the materialized range to cover `position`.
    fn materialize(&mut self, position: isize) {
        if self.cells.is_empty() {
            self.cells.push_back(BLANK_SYMBOL);
            self.origin = position;
            return;
        }

        while position < self.origin {
            self.cells.push_front(BLANK_SYMBOL);
            self.origin -= 1;
        }
        while position >= self.origin + self.cells.len() as isize {
            self.cells.push_back(BLANK_SYMBOL);
        }
    }
}

impl fmt::Display for Tape {
    /// Renders the materialized cells left to right.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &cell in &self.cells {
            write!(f, "{}", cell)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tape_reads_input_symbols() {
        let tape = Tape::new("abc");
        assert_eq!(tape.read(0), 'a');
        assert_eq!(tape.read(1), 'b');
        assert_eq!(tape.read(2), 'c');
    }

    #[test]
    fn test_read_outside_range_is_blank() {
        let tape = Tape::new("abc");
        assert_eq!(tape.read(-1), BLANK_SYMBOL);
        assert_eq!(tape.read(3), BLANK_SYMBOL);
        assert_eq!(tape.read(100), BLANK_SYMBOL);
        assert_eq!(tape.len(), 3); // reading never materializes
    }

    #[test]
    fn test_empty_input_reads_blank_at_origin() {
        let tape = Tape::new("");
        assert!(tape.is_empty());
        assert_eq!(tape.read(0), BLANK_SYMBOL);
    }

    #[test]
    fn test_write_materializes_gap_with_blanks() {
        let mut tape = Tape::new("a");
        tape.write(3, 'x');
        assert_eq!(tape.read(0), 'a');
        assert_eq!(tape.read(1), BLANK_SYMBOL);
        assert_eq!(tape.read(2), BLANK_SYMBOL);
        assert_eq!(tape.read(3), 'x');
        assert_eq!(tape.len(), 4);
    }

    #[test]
    fn test_write_left_of_origin() {
        let mut tape = Tape::new("a");
        tape.write(-2, 'y');
        assert_eq!(tape.read(-2), 'y');
        assert_eq!(tape.read(-1), BLANK_SYMBOL);
        assert_eq!(tape.read(0), 'a');
    }

    #[test]
    fn test_step_extends_both_ends() {
        let mut tape = Tape::new("a");

        let right = tape.step(0, Direction::Right);
        assert_eq!(right, 1);
        assert_eq!(tape.read(1), BLANK_SYMBOL);
        assert_eq!(tape.len(), 2);

        let left = tape.step(0, Direction::Left);
        assert_eq!(left, -1);
        assert_eq!(tape.read(-1), BLANK_SYMBOL);
        assert_eq!(tape.len(), 3);
    }

    #[test]
    fn test_step_on_empty_tape() {
        let mut tape = Tape::new("");
        let pos = tape.step(0, Direction::Right);
        assert_eq!(pos, 1);
        assert_eq!(tape.read(1), BLANK_SYMBOL);
    }

    #[test]
    fn test_duplication_independence() {
        let original = Tape::new("ab");
        let mut duplicate = original.clone();

        duplicate.write(0, 'z');
        duplicate.write(-1, 'w');

        // The duplicate sees its own mutations...
        assert_eq!(duplicate.read(0), 'z');
        assert_eq!(duplicate.read(-1), 'w');

        // ...while the original is untouched at the same positions.
        assert_eq!(original.read(0), 'a');
        assert_eq!(original.read(-1), BLANK_SYMBOL);
        assert_eq!(original.len(), 2);
    }

    #[test]
    fn test_sibling_duplicates_are_independent() {
        let parent = Tape::new("ab");
        let mut first = parent.clone();
        let mut second = parent.clone();

        first.write(1, 'x');
        second.write(1, 'y');

        assert_eq!(first.read(1), 'x');
        assert_eq!(second.read(1), 'y');
        assert_eq!(parent.read(1), 'b');
    }

    #[test]
    fn test_display_renders_materialized_cells() {
        let mut tape = Tape::new("ab");
        tape.step(0, Direction::Left);
        assert_eq!(tape.to_string(), "_ab");
    }
}
