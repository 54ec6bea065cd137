//! Running a parsed, two-part solution while reporting progress to an [`OutputHandler`].
//!
//! Implement [`SolutionRunner`] with the [`#[solution_runner]`][solution_runner] attribute:
//!
//! ```ignore
//! #[solution_runner(name = "Puzzle", parsed = PuzzleInput, part_one = Puzzle, part_two = Puzzle)]
//! pub struct Puzzle;
//! ```

use std::fmt::Display;
use std::time::{Duration, Instant};

use crate::{DynamicResult, ParseData, Part, PartKind, PartOne, PartTwo, Solution};

pub use puzzle_framework_macros::solution_runner;

/// Receives the events of a solution run, in order: name, parse start/end, then start and output
/// for each part.
pub trait OutputHandler {
    fn solution_name(&mut self, name: &str);

    fn parse_start(&mut self);

    /// Parsing finished; `duration_opt` is set when the run is timed.
    fn parse_end(&mut self, duration_opt: Option<Duration>);

    fn part_start(&mut self, part: PartKind);

    /// A part produced its answer; `duration_opt` is set when the run is timed.
    fn part_output(&mut self, part: PartKind, output: &dyn Display, duration_opt: Option<Duration>);
}

/// Evaluate `$expr`, measuring the elapsed time only when `$timed` is true.
///
/// Yields `(result, Option<Duration>)`.
macro_rules! maybe_timed {
    ($expr:expr, $timed:expr) => {{
        if $timed {
            let start = Instant::now();
            let result = $expr;
            (result, Some(start.elapsed()))
        } else {
            ($expr, None)
        }
    }};
}

fn run_parse<D: ParseData>(
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<D> {
    handler.parse_start();
    let (result, duration_opt) = maybe_timed!(D::parse(input), timed);
    let parsed = result?;
    handler.parse_end(duration_opt);
    Ok(parsed)
}

fn run_part<S, P>(
    input: &S::Input,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    P: Part,
    S: Solution<P>,
{
    let part = P::kind();
    handler.part_start(part);
    let (result, duration_opt) = maybe_timed!(S::solve(input), timed);
    handler.part_output(part, &result?, duration_opt);
    Ok(())
}

/// Parse the input once with `D`, then solve part one with `S1` and part two with `S2`.
///
/// # Errors
///
/// The first error from parsing or either part is returned; later steps are not run.
pub fn solve_parsed<D, S1, S2>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    D: ParseData,
    S1: Solution<PartOne, Input = D>,
    S2: Solution<PartTwo, Input = D>,
{
    handler.solution_name(name);
    let parsed = run_parse::<D>(input, handler, timed)?;
    run_part::<S1, PartOne>(&parsed, handler, timed)?;
    run_part::<S2, PartTwo>(&parsed, handler, timed)
}

/// A complete solution that can be run against raw input.
pub trait SolutionRunner {
    /// Run the solution on `input`, reporting through `handler`.
    ///
    /// # Errors
    ///
    /// Parse and solve errors are propagated.
    fn run(input: &str, handler: &mut dyn OutputHandler, timed: bool) -> DynamicResult<()>;
}
