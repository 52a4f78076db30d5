//! This module provides the parser for machine descriptions, utilizing the
//! `pest` crate. It defines functions to parse the `tr`/`acc`/`max`/`run`
//! description format into a [`Description`].

use crate::{
    table::TransitionTable,
    types::{Direction, NtmError, StateId, Transition, BLANK_SYMBOL},
};
use pest::{
    error::{Error, ErrorVariant},
    iterators::Pair,
    Parser as PestParser, Span,
};
use pest_derive::Parser as PestParser;

/// Derives a `PestParser` for the description grammar defined in `grammar.pest`.
#[derive(PestParser)]
#[grammar = "grammar.pest"]
pub struct DescriptionParser;

/// A fully parsed machine description: the transition table (with its
/// acceptance set), the step bound, and the input strings to decide.
///
/// The table is built once here and is read-only afterwards; every decision
/// procedure for this machine shares it.
#[derive(Debug, Clone, PartialEq)]
pub struct Description {
    /// The indexed transition graph plus acceptance markers.
    pub table: TransitionTable,
    /// Maximum number of transitions any single branch may take. A branch
    /// dequeued with exactly this many steps is reported undecided without
    /// being expanded (the bound is exclusive).
    pub max_steps: usize,
    /// Input strings, one decision procedure each, in file order.
    pub inputs: Vec<String>,
}

/// Parses a machine description into a [`Description`].
///
/// This is the main entry point for the textual format. Any malformed line
/// (wrong field count, non-numeric state, unknown move letter) fails here,
/// before any input string is processed.
///
/// # Arguments
///
/// * `input` - The complete description text.
///
/// # Returns
///
/// * `Ok(Description)` if the input is well-formed.
/// * `Err(NtmError::ParseError)` on syntax or range errors, with the
///   offending span.
pub fn parse(input: &str) -> Result<Description, NtmError> {
    let root = DescriptionParser::parse(Rule::description, input.trim())
        .map_err(|e| NtmError::ParseError(e.into()))? //
        .next()
        .unwrap();

    parse_description(root)
}

/// Walks the top-level sections of a parsed description.
fn parse_description(pair: Pair<Rule>) -> Result<Description, NtmError> {
    let mut table = TransitionTable::new();
    let mut max_steps = 0;
    let mut inputs = Vec::new();

    for p in pair.into_inner() {
        match p.as_rule() {
            Rule::table => parse_table(p, &mut table)?,
            Rule::bound => max_steps = parse_bound(p)?,
            Rule::runs => inputs = parse_runs(p),
            _ => {} // Skip EOI
        }
    }

    Ok(Description {
        table,
        max_steps,
        inputs,
    })
}

/// Parses the transition list and the acceptance-state list into the table.
///
/// Transition insertion order is preserved by `TransitionTable::insert`;
/// two identical lines are two distinct nondeterministic branches, so no
/// duplicate detection happens here.
fn parse_table(pair: Pair<Rule>, table: &mut TransitionTable) -> Result<(), NtmError> {
    for p in pair.into_inner() {
        match p.as_rule() {
            Rule::transition => {
                let (start_state, transition) = parse_transition(p)?;
                table.insert(start_state, transition);
            }
            Rule::accepting => {
                let state = parse_state(p.into_inner().next().unwrap())?;
                table.mark_accepting(state);
            }
            _ => {}
        }
    }

    Ok(())
}

/// Parses one `<start> <read> <write> <L|R> <end>` line.
fn parse_transition(pair: Pair<Rule>) -> Result<(StateId, Transition), NtmError> {
    let mut pairs = pair.into_inner();

    let start_state = parse_state(pairs.next().unwrap())?;
    let read = parse_symbol(&pairs.next().unwrap());
    let write = parse_symbol(&pairs.next().unwrap());
    let direction = parse_direction(pairs.next().unwrap())?;
    let end_state = parse_state(pairs.next().unwrap())?;

    Ok((
        start_state,
        Transition {
            read,
            write,
            direction,
            end_state,
        },
    ))
}

/// Parses the `max` section into the step bound.
fn parse_bound(pair: Pair<Rule>) -> Result<usize, NtmError> {
    let steps = pair.into_inner().next().unwrap();
    steps
        .as_str()
        .parse::<usize>()
        .map_err(|_| parse_error(&format!("Step bound out of range: {}", steps.as_str()), steps.as_span()))
}

/// Collects the raw input lines of the `run` section.
fn parse_runs(pair: Pair<Rule>) -> Vec<String> {
    pair.into_inner()
        .filter(|p| p.as_rule() == Rule::input_line)
        .map(|p| p.as_str().to_string())
        .collect()
}

/// Parses a state index, rejecting values that do not fit a `StateId`.
fn parse_state(pair: Pair<Rule>) -> Result<StateId, NtmError> {
    pair.as_str()
        .parse::<StateId>()
        .map_err(|_| parse_error(&format!("State index out of range: {}", pair.as_str()), pair.as_span()))
}

/// Extracts the single-character symbol of a `symbol` pair.
fn parse_symbol(pair: &Pair<Rule>) -> char {
    pair.as_str().chars().next().unwrap_or(BLANK_SYMBOL)
}

/// Parses a move letter. `L`/`R` are accepted in either case, as the
/// original table format upper-cased before comparing.
fn parse_direction(pair: Pair<Rule>) -> Result<Direction, NtmError> {
    let span = pair.as_span();
    match pair.as_str() {
        "L" | "l" => Ok(Direction::Left),
        "R" | "r" => Ok(Direction::Right),
        _ => Err(parse_error(
            &format!("Unsupported direction: {}", pair.as_str()),
            span,
        )),
    }
}

/// Creates an `NtmError::ParseError` from a message and a `Span`.
fn parse_error(msg: &str, span: Span) -> NtmError {
    NtmError::ParseError(Box::new(Error::new_from_span(
        ErrorVariant::CustomError {
            message: msg.to_string(),
        },
        span,
    )))
}
