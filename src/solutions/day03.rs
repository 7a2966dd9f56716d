use std::collections::{BTreeSet, HashMap};

use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use aoc_lattice::{Connectivity, Direction, Graph, Grid, LatticeGraph, VertexId};
use checked_sum::CheckedSum;
use log::debug;

#[solution_runner(name = "Day 3: Gear Ratios", parsed = Schematic, part_one = Day03, part_two = Day03)]
impl super::AdventOfCode2023<3> {}

/*
Input is an engine schematic, formatted as a visual representation of the engine. Numbers are digits
defined in sequence (left-to-right), and any character other than `.` is a symbol.
*/

const EMPTY: char = '.';
const GEAR: char = '*';

fn is_symbol(character: char) -> bool {
    character != EMPTY && !character.is_ascii_digit()
}

#[derive(thiserror::Error, Debug)]
enum Day03Error {
    #[error("number in schematic overflowed at vertex {0}")]
    NumberOverflow(VertexId),

    #[error("summing schematic values overflowed")]
    SumOverflow,
}

/// A run of digits in the schematic.
#[derive(Debug)]
struct SchematicNumber {
    value: u32,
    /// The digit vertices, left to right.
    digits: Vec<VertexId>,
}

/// The schematic as a lattice where every cell touches all eight of its surrounding cells.
struct Schematic {
    graph: LatticeGraph<char>,
    numbers: Vec<SchematicNumber>,
    /// Index into `numbers` for every digit vertex.
    number_by_digit: HashMap<VertexId, usize>,
}

impl Schematic {
    fn character(&self, id: VertexId) -> Option<char> {
        self.graph.vertex(id).map(|vertex| *vertex.value())
    }

    /// Split each row into runs of horizontally connected digits.
    fn find_numbers(graph: &LatticeGraph<char>) -> Result<Vec<SchematicNumber>, Day03Error> {
        let digit_of = |id: VertexId| -> Option<u32> { graph.vertex(id)?.value().to_digit(10) };

        let mut numbers = Vec::new();
        for row in graph.rows() {
            let mut current: Option<SchematicNumber> = None;
            for id in row {
                let Some(digit) = digit_of(id) else {
                    numbers.extend(current.take());
                    continue;
                };

                let continues = current.as_ref().is_some_and(|number| {
                    number
                        .digits
                        .last()
                        .is_some_and(|&last| graph.neighbor(last, Direction::Right) == Some(id))
                });
                if !continues {
                    numbers.extend(current.take());
                }

                let number = current.get_or_insert_with(|| SchematicNumber {
                    value: 0,
                    digits: Vec::new(),
                });
                number.value = number
                    .value
                    .checked_mul(10)
                    .and_then(|value| value.checked_add(digit))
                    .ok_or(Day03Error::NumberOverflow(id))?;
                number.digits.push(id);
            }
            numbers.extend(current);
        }
        Ok(numbers)
    }
}

impl ParseData for Schematic {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let grid: Grid<char> = input.parse()?;
        let graph = LatticeGraph::from_grid(&grid, Connectivity::Diagonal);
        if let Some((top_left, bottom_right)) = graph.bounds() {
            debug!("schematic spans {top_left} to {bottom_right}");
        }

        let numbers = Self::find_numbers(&graph)?;
        let number_by_digit = numbers
            .iter()
            .enumerate()
            .flat_map(|(index, number)| number.digits.iter().map(move |&id| (id, index)))
            .collect();

        Ok(Self {
            graph,
            numbers,
            number_by_digit,
        })
    }
}

/*
For part 1, find the sum of all part numbers.

A part number is any number adjacent to a symbol, cardinal or diagonal.
*/

impl Schematic {
    fn is_part_number(&self, number: &SchematicNumber) -> bool {
        number.digits.iter().any(|&id| {
            self.graph
                .neighbors(id)
                .into_iter()
                .filter_map(|neighbor| self.character(neighbor))
                .any(is_symbol)
        })
    }
}

struct Day03;

impl Solution<PartOne> for Day03 {
    type Input = Schematic;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let sum = input
            .numbers
            .iter()
            .filter(|number| input.is_part_number(number))
            .map(|number| u64::from(number.value))
            .checked_sum()
            .ok_or(Day03Error::SumOverflow)?;
        Ok(sum)
    }
}

/*
For part 2, find the sum of all gear ratios.

A gear is a `*` symbol that is adjacent to exactly two part numbers. A gear ratio is calculated by
multiplying the two part numbers of the gear.
*/

impl Schematic {
    /// The distinct numbers touching `id`, by index into `numbers`.
    fn adjacent_numbers(&self, id: VertexId) -> BTreeSet<usize> {
        self.graph
            .neighbors(id)
            .into_iter()
            .filter_map(|neighbor| self.number_by_digit.get(&neighbor).copied())
            .collect()
    }

    fn gear_ratios(&self) -> impl Iterator<Item = u64> + '_ {
        self.graph
            .iter()
            .filter(|&id| self.character(id) == Some(GEAR))
            .filter_map(|id| {
                let adjacent = self.adjacent_numbers(id);
                // two numbers of equal value are still two numbers
                (adjacent.len() == 2).then(|| {
                    adjacent
                        .into_iter()
                        .map(|index| u64::from(self.numbers[index].value))
                        .product()
                })
            })
    }
}

impl Solution<PartTwo> for Day03 {
    type Input = Schematic;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let sum = input
            .gear_ratios()
            .checked_sum()
            .ok_or(Day03Error::SumOverflow)?;
        Ok(sum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..
";

    fn values(schematic: &Schematic) -> Vec<u32> {
        schematic.numbers.iter().map(|number| number.value).collect()
    }

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Schematic::parse(EXAMPLE_INPUT)?;
        let result = <Day03 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 4361);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Schematic::parse(EXAMPLE_INPUT)?;
        let result = <Day03 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 467_835);
        Ok(())
    }

    #[test]
    fn numbers_are_read_row_by_row() -> DynamicResult<()> {
        let parsed = Schematic::parse(EXAMPLE_INPUT)?;
        assert_eq!(
            values(&parsed),
            vec![467, 114, 35, 633, 617, 58, 592, 755, 664, 598]
        );
        Ok(())
    }

    #[test]
    fn numbers_do_not_continue_onto_the_next_row() -> DynamicResult<()> {
        let parsed = Schematic::parse(".1\n2*")?;
        assert_eq!(values(&parsed), vec![1, 2]);
        assert_eq!(<Day03 as Solution<PartOne>>::solve(&parsed)?, 3);
        assert_eq!(<Day03 as Solution<PartTwo>>::solve(&parsed)?, 2);
        Ok(())
    }

    #[test]
    fn diagonal_symbols_mark_part_numbers() -> DynamicResult<()> {
        let parsed = Schematic::parse("7..\n.#.\n..5")?;
        assert_eq!(<Day03 as Solution<PartOne>>::solve(&parsed)?, 12);

        let isolated = Schematic::parse("7..\n...\n..#")?;
        assert_eq!(<Day03 as Solution<PartOne>>::solve(&isolated)?, 0);
        Ok(())
    }

    #[test]
    fn gears_need_exactly_two_numbers() -> DynamicResult<()> {
        let equal_pair = Schematic::parse("12*12")?;
        assert_eq!(<Day03 as Solution<PartTwo>>::solve(&equal_pair)?, 144);

        let triple = Schematic::parse("1.1\n.*.\n1..")?;
        assert_eq!(<Day03 as Solution<PartOne>>::solve(&triple)?, 3);
        assert_eq!(<Day03 as Solution<PartTwo>>::solve(&triple)?, 0);
        Ok(())
    }

    #[test]
    fn oversized_number_is_an_error() {
        assert!(Schematic::parse("99999999999*").is_err());
        assert!(Schematic::parse("12.\n3").is_err());
    }
}
