//! This module defines the `Reporter`, which turns verdicts into the
//! single-character output lines of the simulator.

use crate::types::Verdict;
use std::io::{self, Write};

/// Writes one verdict line per decided input string.
///
/// Each line is flushed before the next string is processed, so a crash
/// mid-batch can truncate the output but never reorder it relative to the
/// decisions already made.
pub struct Reporter<W: Write> {
    sink: W,
}

impl<W: Write> Reporter<W> {
    /// Wraps an output sink.
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Emits the verdict symbol followed by a line terminator and flushes.
    pub fn report(&mut self, verdict: Verdict) -> io::Result<()> {
        writeln!(self.sink, "{}", verdict.symbol())?;
        self.sink.flush()
    }

    /// Returns the underlying sink, mostly so tests can inspect the output.
    pub fn into_inner(self) -> W {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_line_per_verdict() {
        let mut reporter = Reporter::new(Vec::new());
        reporter.report(Verdict::Accepted).unwrap();
        reporter.report(Verdict::Rejected).unwrap();
        reporter.report(Verdict::Undecided).unwrap();

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(output, "1\n0\nU\n");
    }

    #[test]
    fn test_output_order_matches_input_order() {
        let verdicts = [
            Verdict::Undecided,
            Verdict::Accepted,
            Verdict::Accepted,
            Verdict::Rejected,
        ];

        let mut reporter = Reporter::new(Vec::new());
        for verdict in verdicts {
            reporter.report(verdict).unwrap();
        }

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(output.lines().collect::<Vec<_>>(), vec!["U", "1", "1", "0"]);
    }
}
