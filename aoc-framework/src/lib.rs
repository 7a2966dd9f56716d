//! Traits and a runner for two-part puzzle solutions.
//!
//! A puzzle is solved in up to three steps: parse the input text once into a [`ParseData`] type,
//! then hand a reference to it to a [`Solution`] for each [`Part`].
//!
//! ```
//! # use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
//! #
//! /// Rows of a character grid.
//! struct Rows(Vec<String>);
//!
//! impl ParseData for Rows {
//!     fn parse(input: &str) -> DynamicResult<Self> {
//!         Ok(Self(input.lines().map(String::from).collect()))
//!     }
//! }
//!
//! struct CountWalls;
//!
//! impl Solution<PartOne> for CountWalls {
//!     type Input = Rows;
//!     type Output = usize;
//!
//!     fn solve(input: &Rows) -> DynamicResult<usize> {
//!         Ok(input.0.iter().map(|row| row.matches('#').count()).sum())
//!     }
//! }
//!
//! impl Solution<PartTwo> for CountWalls {
//!     type Input = Rows;
//!     type Output = usize;
//!
//!     fn solve(input: &Rows) -> DynamicResult<usize> {
//!         Ok(input.0.len())
//!     }
//! }
//!
//! let rows = Rows::parse("#.#\n...")?;
//! assert_eq!(<CountWalls as Solution<PartOne>>::solve(&rows)?, 2);
//! # Ok::<(), aoc_framework::DynamicError>(())
//! ```
//!
//! The [`runner`] module drives these steps and reports each to an
//! [`OutputHandler`][runner::OutputHandler].

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
    clippy::trait_duplication_in_bounds,
    clippy::type_repetition_in_bounds,
    clippy::use_self,
    clippy::useless_let_if_seq
)]
#![deny(
    clippy::expect_used,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::unwrap_used
)]

use std::error::Error;
use std::fmt::Display;

pub mod parsing;
pub mod runner;

mod private {
    /// Restricts [`Part`][super::Part] to the markers defined in this crate.
    pub trait Sealed {}
}

/// A boxed error of any kind, as returned by parsing and solving.
pub type DynamicError = Box<dyn Error + Send + Sync + 'static>;
pub type DynamicResult<T> = Result<T, DynamicError>;

/// Which half of a puzzle a solution answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartKind {
    One,
    Two,
}

impl Display for PartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let number = match self {
            Self::One => 1,
            Self::Two => 2,
        };
        write!(f, "Part {number}")
    }
}

/// A type-level marker for a puzzle part, used as the parameter of [`Solution`].
pub trait Part: private::Sealed {
    fn kind() -> PartKind;
}

/// Marks a [`Solution`] for the first part.
pub struct PartOne;
impl private::Sealed for PartOne {}
impl Part for PartOne {
    fn kind() -> PartKind {
        PartKind::One
    }
}

/// Marks a [`Solution`] for the second part.
pub struct PartTwo;
impl private::Sealed for PartTwo {}
impl Part for PartTwo {
    fn kind() -> PartKind {
        PartKind::Two
    }
}

/// Solves one [`Part`] of a puzzle from parsed input.
pub trait Solution<P: Part> {
    /// The parsed input; [`solve`][Solution::solve] borrows it, so both parts share one parse.
    type Input: ?Sized;

    /// The answer, displayed by the runner.
    type Output: Display;

    /// Compute the answer.
    ///
    /// # Errors
    ///
    /// Input the solution can't make sense of, or arithmetic that would overflow, is reported as a
    /// dynamic error.
    fn solve(input: &Self::Input) -> DynamicResult<Self::Output>;
}

/// Input types built from the raw puzzle text.
pub trait ParseData {
    /// Parse the puzzle text.
    ///
    /// # Errors
    ///
    /// Malformed input is reported as a dynamic error.
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_kinds_display_their_number() {
        assert_eq!(PartOne::kind().to_string(), "Part 1");
        assert_eq!(PartTwo::kind().to_string(), "Part 2");
    }
}
