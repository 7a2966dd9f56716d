use std::collections::{HashMap, HashSet};

use aoc_framework::parsing::{InputScanner, parse_input_lines};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use aoc_lattice::geometry::least_common_multiple;
use log::debug;
use regex::Regex;

#[solution_runner(
    name = "Day 8: Haunted Wasteland",
    parsed = MapDocuments,
    part_one = Day08,
    part_two = Day08
)]
impl super::AdventOfCode2023<8> {}

/*
Input is a line of left/right instructions (`L` and `R`), a blank line, then a network of nodes.
Each network line reads `AAA = (BBB, CCC)`: from `AAA`, going left leads to `BBB` and going right to
`CCC`.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Turn {
    Left,
    Right,
}

#[derive(Debug)]
struct MapDocuments {
    turns: Vec<Turn>,
    /// Left and right destinations by source label.
    network: HashMap<String, (String, String)>,
}

#[derive(thiserror::Error, Debug)]
enum ParseMapDocumentsError {
    #[error("expected a line of turns")]
    NoTurns,

    #[error("invalid turn character: {0:?}")]
    InvalidTurn(char),

    #[error("expected a block of network lines after the turns")]
    NoNetwork,

    #[error("network line is not in the form `AAA = (BBB, CCC)`: {0:?}")]
    InvalidNode(String),
}

impl ParseData for MapDocuments {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let node_re = Regex::new(r"^(\w+) = \((\w+), (\w+)\)$")?;
        let mut scanner = InputScanner::new(input);

        let turns = scanner
            .collect_sequence()
            .ok_or(ParseMapDocumentsError::NoTurns)?
            .lines
            .concat()
            .chars()
            .map(|character| match character {
                'L' => Ok(Turn::Left),
                'R' => Ok(Turn::Right),
                _ => Err(ParseMapDocumentsError::InvalidTurn(character)),
            })
            .collect::<Result<Vec<_>, _>>()?;
        if turns.is_empty() {
            return Err(ParseMapDocumentsError::NoTurns.into());
        }

        let network_block = scanner
            .collect_sequence()
            .ok_or(ParseMapDocumentsError::NoNetwork)?;
        let network = parse_input_lines(&network_block.text(), |_, line| {
            let (_, [source, left, right]) = node_re
                .captures(line)
                .ok_or_else(|| ParseMapDocumentsError::InvalidNode(line.to_owned()))?
                .extract();
            Ok::<_, ParseMapDocumentsError>((
                source.to_owned(),
                (left.to_owned(), right.to_owned()),
            ))
        })
        .collect::<Result<_, _>>()?;

        Ok(Self { turns, network })
    }
}

#[derive(thiserror::Error, Debug)]
enum NavigationError {
    #[error("node {0:?} is not in the network")]
    UnknownNode(String),

    #[error("walking from {0:?} loops forever without reaching a destination")]
    Unreachable(String),

    #[error("no starting nodes ending in 'A' are in the network")]
    NoStarts,

    #[error("step count overflowed")]
    Overflow,
}

impl MapDocuments {
    /// Count the steps taken from `start` until reaching a node accepted by `is_destination`.
    ///
    /// The walk is abandoned once it repeats a node at the same position in the turn sequence,
    /// since it would then cycle forever.
    fn steps_to<P>(&self, start: &str, is_destination: P) -> Result<u64, NavigationError>
    where
        P: Fn(&str) -> bool,
    {
        let mut visited = HashSet::new();
        let mut current = start;
        let mut steps: u64 = 0;

        for (turn_index, &turn) in self.turns.iter().enumerate().cycle() {
            if is_destination(current) {
                return Ok(steps);
            }
            if !visited.insert((current, turn_index)) {
                return Err(NavigationError::Unreachable(start.to_owned()));
            }

            let (left, right) = self
                .network
                .get(current)
                .ok_or_else(|| NavigationError::UnknownNode(current.to_owned()))?;
            current = match turn {
                Turn::Left => left.as_str(),
                Turn::Right => right.as_str(),
            };
            steps = steps.checked_add(1).ok_or(NavigationError::Overflow)?;
        }

        // cycling a non-empty turn list never ends
        Err(NavigationError::Unreachable(start.to_owned()))
    }
}

/*
For part 1, count the steps to walk from `AAA` to `ZZZ`, repeating the turns as often as needed.
*/

struct Day08;

impl Solution<PartOne> for Day08 {
    type Input = MapDocuments;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.steps_to("AAA", |node| node == "ZZZ")?)
    }
}

/*
For part 2, walk from every node ending in `A` at once, and count the steps until every walker
stands on a node ending in `Z` at the same time.

This relies on the puzzle input being built so that each walker loops through its destination with
a period equal to the steps it took to first reach it, with no lead-in before the loop. Under that
assumption the answer is the least common multiple of the first-arrival step counts. Inputs that
break the assumption produce a wrong answer rather than an error.
*/

impl Solution<PartTwo> for Day08 {
    type Input = MapDocuments;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut starts: Vec<&String> = input
            .network
            .keys()
            .filter(|node| node.ends_with('A'))
            .collect();
        if starts.is_empty() {
            return Err(NavigationError::NoStarts.into());
        }
        starts.sort_unstable();

        let arrivals = starts
            .into_iter()
            .map(|start| input.steps_to(start, |node| node.ends_with('Z')))
            .collect::<Result<Vec<_>, _>>()?;
        debug!("first arrivals per start: {arrivals:?}");

        Ok(least_common_multiple(&arrivals).ok_or(NavigationError::Overflow)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT_ONE: &str = r"LLR

AAA = (BBB, BBB)
BBB = (AAA, ZZZ)
ZZZ = (ZZZ, ZZZ)
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = MapDocuments::parse(EXAMPLE_INPUT_ONE)?;
        let result = <Day08 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 6);
        Ok(())
    }

    const EXAMPLE_INPUT_TWO: &str = r"LR

11A = (11B, XXX)
11B = (XXX, 11Z)
11Z = (11B, XXX)
22A = (22B, XXX)
22B = (22C, 22C)
22C = (22Z, 22Z)
22Z = (22B, 22B)
XXX = (XXX, XXX)
";

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = MapDocuments::parse(EXAMPLE_INPUT_TWO)?;
        let result = <Day08 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 6);
        Ok(())
    }

    #[test]
    fn circular_walk_is_an_error() -> DynamicResult<()> {
        let parsed = MapDocuments::parse("L\n\nAAA = (BBB, BBB)\nBBB = (AAA, AAA)\n")?;
        let result = <Day08 as Solution<PartOne>>::solve(&parsed);
        assert!(result.is_err());
        Ok(())
    }

    #[test]
    fn malformed_network_line_is_an_error() {
        assert!(MapDocuments::parse("LR\n\nAAA -> BBB\n").is_err());
        assert!(MapDocuments::parse("LX\n\nAAA = (BBB, BBB)\n").is_err());
        assert!(MapDocuments::parse("LR\n").is_err());
    }
}
