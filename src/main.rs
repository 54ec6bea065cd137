#![warn(clippy::pedantic)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::branches_sharing_code,
    clippy::collection_is_never_read,
    clippy::equatable_if_let,
    clippy::needless_collect,
    clippy::needless_pass_by_ref_mut,
    clippy::option_if_let_else,
    clippy::set_contains_or_insert,
    clippy::suboptimal_flops,
    clippy::trait_duplication_in_bounds,
    clippy::type_repetition_in_bounds,
    clippy::use_self,
    clippy::useless_let_if_seq
)]
#![deny(clippy::unwrap_used)]

use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Error, Result};
use clap::{ArgAction, Parser};
use puzzle_framework::PartKind;
use puzzle_framework::runner::{OutputHandler, SolutionRunner};

use crate::solver::HauntedWasteland;

mod logging;
mod network;
mod number_theory;
mod solver;
mod step;
mod walker;

/// Input read when no file is given.
const DEFAULT_INPUT: &str = "inputs/day08.txt";

/// Count steps through a haunted wasteland's node network.
#[derive(Parser, Debug)]
struct Cli {
    /// Sets an alternative input file to use over the default input.
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Measure and print the durations of parsing and solving parts.
    #[arg(short, long, action = ArgAction::SetTrue)]
    timed: bool,

    /// Minimum duration (in milliseconds) required to print timing.
    /// 0 = always print.
    #[arg(long, value_name = "NUMBER", default_value_t)]
    min_timing_ms: u64,
}

/// Read the default input file to a string.
fn get_default_input() -> Result<String> {
    let path = Path::new(DEFAULT_INPUT);
    fs::read_to_string(path).with_context(|| {
        format!(
            "default input file missing: {}\n\n\
            please create the file or provide the input file argument",
            path.display()
        )
    })
}

/// Read the given input file to a string.
fn get_input(input_file: &Path) -> Result<String> {
    fs::read_to_string(input_file)
        .with_context(|| format!("could not read input file at: {}", input_file.display()))
}

struct CliOutputHandler {
    /// Durations shorter than this are not printed.
    min_duration: Duration,
}

impl CliOutputHandler {
    fn new(min_duration: Duration) -> Self {
        Self { min_duration }
    }

    fn format_duration(duration: Duration) -> String {
        const DECIMAL_PLACES: usize = 3;

        if duration >= Duration::from_secs(1) {
            format!("{:.*} seconds", DECIMAL_PLACES, duration.as_secs_f64())
        } else if duration >= Duration::from_millis(1) {
            format!("{:.*} milliseconds", DECIMAL_PLACES, duration.as_secs_f64() * 1e3)
        } else if duration >= Duration::from_micros(1) {
            format!("{:.*} microseconds", DECIMAL_PLACES, duration.as_secs_f64() * 1e6)
        } else {
            format!("{} nanoseconds", duration.subsec_nanos())
        }
    }

    fn format_timing(&self, duration_opt: Option<Duration>) -> Option<String> {
        duration_opt
            .filter(|duration| *duration >= self.min_duration)
            .map(Self::format_duration)
    }
}

impl OutputHandler for CliOutputHandler {
    fn solution_name(&mut self, name: &str) {
        println!("= {name} =");
    }

    fn parse_start(&mut self) {
        // do nothing
    }

    fn parse_end(&mut self, duration_opt: Option<Duration>) {
        if let Some(timing) = self.format_timing(duration_opt) {
            println!("Input parsed in {timing}");
        }
    }

    fn part_start(&mut self, part: PartKind) {
        println!("-- {part} --");
    }

    fn part_output(
        &mut self,
        _part: PartKind,
        output: &dyn Display,
        duration_opt: Option<Duration>,
    ) {
        match self.format_timing(duration_opt) {
            Some(timing) => println!("{output} ({timing})"),
            None => println!("{output}"),
        }
    }
}

fn main() -> Result<()> {
    logging::init();

    let args = Cli::parse();
    let input_str = args
        .input
        .as_deref()
        .map_or_else(get_default_input, get_input)?;

    let mut handler = CliOutputHandler::new(Duration::from_millis(args.min_timing_ms));
    HauntedWasteland::run(&input_str, &mut handler, args.timed).map_err(|dyn_error| {
        Error::from_boxed(dyn_error).context("failed to run solver")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults() {
        let cli = Cli::parse_from(["haunted-wasteland"]);
        assert_eq!(cli.input, None);
        assert!(!cli.timed);
        assert_eq!(cli.min_timing_ms, 0);
    }

    #[test]
    fn cli_accepts_input_and_timing() {
        let cli = Cli::parse_from([
            "haunted-wasteland",
            "--input",
            "network.txt",
            "--timed",
            "--min-timing-ms",
            "5",
        ]);
        assert_eq!(cli.input, Some(PathBuf::from("network.txt")));
        assert!(cli.timed);
        assert_eq!(cli.min_timing_ms, 5);
    }

    #[test]
    fn durations_use_readable_units() {
        assert_eq!(
            CliOutputHandler::format_duration(Duration::from_millis(1500)),
            "1.500 seconds"
        );
        assert_eq!(
            CliOutputHandler::format_duration(Duration::from_micros(2500)),
            "2.500 milliseconds"
        );
        assert_eq!(
            CliOutputHandler::format_duration(Duration::from_nanos(750)),
            "750 nanoseconds"
        );
    }

    #[test]
    fn short_timings_are_filtered() {
        let handler = CliOutputHandler::new(Duration::from_millis(10));
        assert_eq!(handler.format_timing(Some(Duration::from_millis(3))), None);
        assert_eq!(handler.format_timing(None), None);
        assert!(handler.format_timing(Some(Duration::from_millis(30))).is_some());
    }

    #[test]
    fn runs_both_parts_on_input() -> Result<()> {
        let input = "RL\n\nAAA = (ZZZ, ZZZ)\nZZZ = (ZZZ, ZZZ)\n";
        let mut handler = CliOutputHandler::new(Duration::ZERO);
        HauntedWasteland::run(input, &mut handler, false).map_err(Error::from_boxed)?;
        Ok(())
    }
}
