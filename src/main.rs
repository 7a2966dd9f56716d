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
use aoc_framework::PartKind;
use aoc_framework::runner::OutputHandler;
use clap::{ArgAction, Parser};
use log::{LevelFilter, info};

mod solutions;

/// Solver for the Advent of Code 2023 grid and graph puzzles.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// The day's solution to run (8, 10, 11, 13, 14 or 16).
    day: u8,

    /// Read puzzle input from FILE instead of `inputs/dayNN.txt`.
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Measure and print the durations of parsing and solving parts.
    #[arg(short, long, action = ArgAction::SetTrue)]
    timed: bool,

    /// Minimum duration (in milliseconds) required to print timing.
    /// 0 = always print.
    #[arg(long, value_name = "NUMBER", default_value_t)]
    min_timing_ms: u64,

    /// Increase log detail: once for info, twice for debug, three times for trace.
    /// `RUST_LOG` takes precedence when set.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Map the verbosity count onto a log level.
fn level_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logging(verbose: u8) {
    env_logger::Builder::new()
        .filter_level(level_filter(verbose))
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn default_input_path(day: u8) -> PathBuf {
    PathBuf::from("inputs").join(format!("day{day:02}.txt"))
}

fn read_input(path: &Path, is_default: bool) -> Result<String> {
    fs::read_to_string(path).with_context(|| {
        if is_default {
            format!(
                "default input file missing: {}\n\n\
                please create the file or provide the input file argument",
                path.display()
            )
        } else {
            format!("could not read input file at: {}", path.display())
        }
    })
}

/// Prints solution events to standard output.
struct CliOutputHandler {
    /// Durations shorter than this are not printed.
    min_duration: Duration,
}

impl CliOutputHandler {
    fn format_duration(duration: Duration) -> String {
        const UNITS: [(Duration, f64, &str); 3] = [
            (Duration::from_secs(1), 1.0, "seconds"),
            (Duration::from_millis(1), 1e3, "milliseconds"),
            (Duration::from_micros(1), 1e6, "microseconds"),
        ];

        UNITS
            .iter()
            .find(|(threshold, _, _)| duration >= *threshold)
            .map_or_else(
                || format!("{} nanoseconds", duration.subsec_nanos()),
                |(_, scale, unit)| format!("{:.3} {unit}", duration.as_secs_f64() * scale),
            )
    }

    fn timing(&self, duration_opt: Option<Duration>) -> Option<String> {
        duration_opt
            .filter(|duration| *duration >= self.min_duration)
            .map(Self::format_duration)
    }
}

impl OutputHandler for CliOutputHandler {
    fn solution_name(&mut self, name: &str) {
        println!("= {name} =");
    }

    fn parse_start(&mut self) {}

    fn parse_end(&mut self, duration_opt: Option<Duration>) {
        if let Some(timing) = self.timing(duration_opt) {
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
        match self.timing(duration_opt) {
            Some(timing) => println!("{output} ({timing})"),
            None => println!("{output}"),
        }
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_logging(args.verbose);

    let input_str = match &args.input {
        Some(path) => read_input(path, false),
        None => read_input(&default_input_path(args.day), true),
    }?;
    info!("read {} bytes of input for day {}", input_str.len(), args.day);

    let mut handler = CliOutputHandler {
        min_duration: Duration::from_millis(args.min_timing_ms),
    };
    solutions::run_day(args.day, &input_str, &mut handler, args.timed).map_err(|dyn_error| {
        let anyhow_error = Error::from_boxed(dyn_error);
        anyhow_error.context("failed to run solution")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_log_level() {
        assert_eq!(level_filter(0), LevelFilter::Warn);
        assert_eq!(level_filter(2), LevelFilter::Debug);
        assert_eq!(level_filter(9), LevelFilter::Trace);
    }

    #[test]
    fn durations_pick_the_largest_unit() {
        assert_eq!(
            CliOutputHandler::format_duration(Duration::from_millis(1500)),
            "1.500 seconds"
        );
        assert_eq!(
            CliOutputHandler::format_duration(Duration::from_micros(2500)),
            "2.500 milliseconds"
        );
        assert_eq!(
            CliOutputHandler::format_duration(Duration::from_nanos(42)),
            "42 nanoseconds"
        );
    }

    #[test]
    fn cli_counts_verbose_flags() {
        let cli = Cli::parse_from(["advent-lattice", "10", "-vv", "--timed"]);
        assert_eq!(cli.day, 10);
        assert_eq!(cli.verbose, 2);
        assert!(cli.timed);
        assert_eq!(default_input_path(8), PathBuf::from("inputs/day08.txt"));
    }
}
