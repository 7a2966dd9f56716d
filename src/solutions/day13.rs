use aoc_framework::parsing::{InputScanner, InvalidLine};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use aoc_lattice::{Grid, GridError, Node};
use checked_sum::CheckedSum;
use log::trace;

#[solution_runner(
    name = "Day 13: Point of Incidence",
    parsed = Patterns,
    part_one = Day13,
    part_two = Day13
)]
impl super::AdventOfCode2023<13> {}

/*
Input is character grids of ash (`.`) and rocks (`#`) separated by empty lines.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Terrain {
    Ash,
    Rock,
}

#[derive(thiserror::Error, Debug)]
#[error("invalid terrain character: {0:?}")]
struct InvalidTerrain(char);

impl TryFrom<char> for Terrain {
    type Error = InvalidTerrain;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '.' => Ok(Self::Ash),
            '#' => Ok(Self::Rock),
            _ => Err(InvalidTerrain(value)),
        }
    }
}

/// The input collection of patterns.
struct Patterns(Vec<Grid<Terrain>>);

impl ParseData for Patterns {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let patterns = InputScanner::new(input)
            .map(|sequence| {
                let parse_pattern = || -> DynamicResult<_> {
                    let characters: Grid<char> = sequence.text().parse()?;
                    Ok(characters.try_map_nodes(|node| Terrain::try_from(*node.value()))?)
                };
                // errors point at the first line of the pattern
                parse_pattern().map_err(|source| InvalidLine::new(sequence.first_line, source))
            })
            .collect::<Result<_, _>>()?;
        Ok(Self(patterns))
    }
}

/*
For part 1, locate patterns of reflection per grid.

A reflection involves a line to separate two rows or columns, and the halves on either side (limited
up to a boundary of the grid, so rows/columns outside the limit ignored) perfectly reflect across
the line.

Return the sum of the number of columns to the left of vertical line reflections and 100 times the
number of rows above horizontal line reflections.
*/

/// A line of reflection found in a pattern.
#[derive(Debug, PartialEq, Eq)]
enum Mirror {
    /// A vertical line with this many columns to its left.
    Vertical(usize),
    /// A horizontal line with this many rows above it.
    Horizontal(usize),
}

impl Mirror {
    fn summary(&self) -> Option<u64> {
        match *self {
            Self::Vertical(columns) => u64::try_from(columns).ok(),
            Self::Horizontal(rows) => u64::try_from(rows).ok()?.checked_mul(100),
        }
    }
}

/// Count the cells differing between two equally long lines.
fn mismatches(a: &[Node<'_, Terrain>], b: &[Node<'_, Terrain>]) -> usize {
    a.iter()
        .zip(b)
        .filter(|(x, y)| x.value() != y.value())
        .count()
}

/// Find the first line of reflection among `lines` (rows or columns in order) where, summed over
/// every reflected pair, exactly `smudges` cells disagree.
///
/// Returns the number of lines before the reflection.
fn reflection_among(lines: &[Vec<Node<'_, Terrain>>], smudges: usize) -> Option<usize> {
    (1..lines.len()).find(|&reflection_line| {
        let mut found = 0;
        for (before, after) in (0..reflection_line).rev().zip(reflection_line..lines.len()) {
            found += mismatches(&lines[before], &lines[after]);
            if found > smudges {
                return false;
            }
        }
        found == smudges
    })
}

/// Find a pattern's reflection where exactly `smudges` cells must be flipped for it to hold.
///
/// A smudge count of 0 finds the perfect reflection. A count of 1 skips the perfect reflection,
/// since that one has no cell to flip.
fn find_mirror(pattern: &Grid<Terrain>, smudges: usize) -> Result<Option<Mirror>, GridError> {
    let columns = (0..pattern.width())
        .map(|index| pattern.column(index))
        .collect::<Result<Vec<_>, _>>()?;
    if let Some(line) = reflection_among(&columns, smudges) {
        return Ok(Some(Mirror::Vertical(line)));
    }

    let rows = (0..pattern.height())
        .map(|index| pattern.row(index))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(reflection_among(&rows, smudges).map(Mirror::Horizontal))
}

#[derive(thiserror::Error, Debug)]
enum Day13Error {
    #[error("pattern number {} did not find a reflection", .0.saturating_add(1))]
    MissingReflection(usize),

    #[error("summing reflection summaries overflowed")]
    Overflow,
}

/// Sum the summaries of each pattern's reflection with `smudges` flipped cells.
fn summarize(input: &Patterns, smudges: usize) -> DynamicResult<u64> {
    let summaries = input
        .0
        .iter()
        .enumerate()
        .map(|(index, pattern)| -> DynamicResult<u64> {
            let mirror = find_mirror(pattern, smudges)?
                .ok_or(Day13Error::MissingReflection(index))?;
            trace!("pattern {index} reflects at {mirror:?}");
            Ok(mirror.summary().ok_or(Day13Error::Overflow)?)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(summaries
        .into_iter()
        .checked_sum()
        .ok_or(Day13Error::Overflow)?)
}

struct Day13;

impl Solution<PartOne> for Day13 {
    type Input = Patterns;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        summarize(input, 0)
    }
}

/*
For part 2, input grids are assumed to have one cell smudged/inverted that yields a different
reflection. Calculate the sum again with the new reflections found after smudges are corrected.

The original reflection may or may not survive the correction, but it must be ignored either way.
Requiring exactly one mismatch across the reflected area guarantees that.
*/

impl Solution<PartTwo> for Day13 {
    type Input = Patterns;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        summarize(input, 1)
    }
}
