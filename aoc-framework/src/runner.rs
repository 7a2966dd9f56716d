//! Running parsed two-part solutions.
//!
//! Annotate a struct or impl block with [`#[solution_runner]`][solution_runner] to implement
//! [`SolutionRunner`] for it:
//!
//! ```
//! # use aoc_framework::runner::solution_runner;
//! # use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
//! #
//! struct Words(Vec<String>);
//!
//! impl ParseData for Words {
//!     fn parse(input: &str) -> DynamicResult<Self> {
//!         Ok(Self(input.split_whitespace().map(String::from).collect()))
//!     }
//! }
//!
//! struct Counter;
//!
//! impl Solution<PartOne> for Counter {
//!     type Input = Words;
//!     type Output = usize;
//!     fn solve(input: &Words) -> DynamicResult<usize> {
//!         Ok(input.0.len())
//!     }
//! }
//! # impl Solution<PartTwo> for Counter {
//! #     type Input = Words;
//! #     type Output = usize;
//! #     fn solve(input: &Words) -> DynamicResult<usize> {
//! #         Ok(input.0.iter().map(String::len).sum())
//! #     }
//! # }
//!
//! #[solution_runner(name = "Word count", parsed = Words, part_one = Counter, part_two = Counter)]
//! struct CounterRunner;
//! ```

use std::fmt::Display;
use std::time::{Duration, Instant};

use log::{debug, trace};

use crate::{DynamicResult, ParseData, Part, PartKind, PartOne, PartTwo, Solution};

pub use aoc_framework_macros::solution_runner;

/// Receives the events of a solution run, in order: the name, parsing, then each part.
pub trait OutputHandler {
    fn solution_name(&mut self, name: &str);

    fn parse_start(&mut self);

    /// Parsing finished, taking `duration_opt` if the run is timed.
    fn parse_end(&mut self, duration_opt: Option<Duration>);

    fn part_start(&mut self, part: PartKind);

    /// A part produced `output`, taking `duration_opt` if the run is timed.
    fn part_output(&mut self, part: PartKind, output: &dyn Display, duration_opt: Option<Duration>);
}

/// Evaluate `step`, measuring how long it takes when `timed` is set.
fn measure<R>(timed: bool, step: impl FnOnce() -> R) -> (R, Option<Duration>) {
    if timed {
        let start = Instant::now();
        let result = step();
        (result, Some(start.elapsed()))
    } else {
        (step(), None)
    }
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
    trace!("solving {part}");
    let (result, duration_opt) = measure(timed, || S::solve(input));
    let output = result?;
    debug!("{part} answered {output}");
    handler.part_output(part, &output, duration_opt);
    Ok(())
}

/// Parse `input` into `D`, then solve both parts from it.
///
/// # Errors
///
/// The first parsing or solving error is propagated; parts after it are not run.
pub fn run_solution<D, S1, S2>(
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
    debug!("running {name:?} on {} lines of input", input.lines().count());

    handler.parse_start();
    let (result, duration_opt) = measure(timed, || D::parse(input));
    let parsed = result?;
    trace!("parsed input for {name:?}");
    handler.parse_end(duration_opt);

    run_part::<S1, PartOne>(&parsed, handler, timed)?;
    run_part::<S2, PartTwo>(&parsed, handler, timed)
}

/// A runnable puzzle solution, usually implemented with [`solution_runner`].
pub trait SolutionRunner {
    /// Run the solution on `input`, reporting to `handler`.
    ///
    /// # Errors
    ///
    /// Any error from parsing or solving is propagated.
    fn run(input: &str, handler: &mut dyn OutputHandler, timed: bool) -> DynamicResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DynamicError;

    /// Records every event as a line of text.
    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl OutputHandler for Recorder {
        fn solution_name(&mut self, name: &str) {
            self.events.push(format!("name {name}"));
        }

        fn parse_start(&mut self) {
            self.events.push("parse".to_string());
        }

        fn parse_end(&mut self, duration_opt: Option<Duration>) {
            self.events
                .push(format!("parsed timed={}", duration_opt.is_some()));
        }

        fn part_start(&mut self, part: PartKind) {
            self.events.push(format!("start {part}"));
        }

        fn part_output(
            &mut self,
            part: PartKind,
            output: &dyn Display,
            duration_opt: Option<Duration>,
        ) {
            self.events
                .push(format!("{part} = {output} timed={}", duration_opt.is_some()));
        }
    }

    struct Numbers(Vec<u32>);

    impl ParseData for Numbers {
        fn parse(input: &str) -> DynamicResult<Self> {
            let values = input
                .lines()
                .map(str::parse)
                .collect::<Result<_, _>>()?;
            Ok(Self(values))
        }
    }

    struct SumAndMax;

    impl Solution<PartOne> for SumAndMax {
        type Input = Numbers;
        type Output = u32;

        fn solve(input: &Numbers) -> DynamicResult<u32> {
            Ok(input.0.iter().sum())
        }
    }

    impl Solution<PartTwo> for SumAndMax {
        type Input = Numbers;
        type Output = u32;

        fn solve(input: &Numbers) -> DynamicResult<u32> {
            input
                .0
                .iter()
                .copied()
                .max()
                .ok_or_else(|| DynamicError::from("no numbers"))
        }
    }

    #[test]
    fn run_reports_events_in_order() -> DynamicResult<()> {
        let mut recorder = Recorder::default();
        run_solution::<Numbers, SumAndMax, SumAndMax>("Sums", "3\n4\n", &mut recorder, true)?;
        assert_eq!(
            recorder.events,
            vec![
                "name Sums",
                "parse",
                "parsed timed=true",
                "start Part 1",
                "Part 1 = 7 timed=true",
                "start Part 2",
                "Part 2 = 4 timed=true",
            ]
        );
        Ok(())
    }

    #[test]
    fn untimed_run_omits_durations() -> DynamicResult<()> {
        let mut recorder = Recorder::default();
        run_solution::<Numbers, SumAndMax, SumAndMax>("Sums", "1", &mut recorder, false)?;
        assert!(recorder.events.iter().all(|event| !event.contains("timed=true")));
        Ok(())
    }

    #[test]
    fn errors_stop_the_run() {
        let mut recorder = Recorder::default();
        let result = run_solution::<Numbers, SumAndMax, SumAndMax>("Sums", "", &mut recorder, false);
        assert!(result.is_err());
        assert_eq!(recorder.events.last().map(String::as_str), Some("start Part 2"));

        let mut recorder = Recorder::default();
        let result =
            run_solution::<Numbers, SumAndMax, SumAndMax>("Sums", "x", &mut recorder, false);
        assert!(result.is_err());
        assert_eq!(recorder.events.last().map(String::as_str), Some("parse"));
    }
}
