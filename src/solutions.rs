//! Solutions for the Advent of Code 2023 puzzles built on grids and graphs.
//!
//! This module provides [`run_day`] to dynamically run a solution by its day.
//!
//! Steps to make a solution available to run:
//! 1. Make a submodule to hold the solution implementation.
//! 2. Have the submodule implement [`AdventOfCode2023<DAY>`] for its day as a [`SolutionRunner`].
//! 3. Import the submodule below `IMPORT SUBMODULES HERE`.
//! 4. Add a match case to run [`AdventOfCode2023<DAY>`] for a day, below `MATCH SOLUTIONS HERE`:
//!
//! ```ignore
//! 10 => AdventOfCode2023::<10>::run(input, handler, timed),
//! ```

#![warn(clippy::dbg_macro, clippy::print_stderr, clippy::print_stdout)]

use aoc_framework::DynamicResult;
use aoc_framework::runner::{OutputHandler, SolutionRunner};
use log::debug;
use thiserror::Error;

// --- IMPORT SUBMODULES HERE ---
mod day03;
mod day08;
mod day10;
mod day11;
mod day13;
mod day14;
mod day16;

/// Solutions collected by day.
///
/// In a submodule, implement this as a [`SolutionRunner`] for the day with
/// [`#[solution_runner]`][aoc_framework::runner::solution_runner]:
///
/// ```ignore
/// #[solution_runner(
///     name = "Day 16: The Floor Will Be Lava",
///     parsed = Contraption,
///     part_one = Day16,
///     part_two = Day16
/// )]
/// impl super::AdventOfCode2023<16> {}
/// ```
struct AdventOfCode2023<const DAY: u8>;

/// A solution for a day is not available.
#[derive(Error, Debug)]
#[error("no solution available for day {0}")]
pub struct DayNotAvailable(u8);

/// Run a solution based on the day.
///
/// # Errors
///
/// If the solution for the given day is not available, a [`DayNotAvailable`] error is returned.
///
/// Any dynamically dispatched error from running the solution is propagated.
pub fn run_day(
    day: u8,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()> {
    debug!("dispatching day {day}");
    match day {
        // --- MATCH SOLUTIONS HERE ---
        3 => AdventOfCode2023::<3>::run(input, handler, timed),
        8 => AdventOfCode2023::<8>::run(input, handler, timed),
        10 => AdventOfCode2023::<10>::run(input, handler, timed),
        11 => AdventOfCode2023::<11>::run(input, handler, timed),
        13 => AdventOfCode2023::<13>::run(input, handler, timed),
        14 => AdventOfCode2023::<14>::run(input, handler, timed),
        16 => AdventOfCode2023::<16>::run(input, handler, timed),
        _ => Err(DayNotAvailable(day).into()),
    }
}
