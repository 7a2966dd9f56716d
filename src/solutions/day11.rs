use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use aoc_lattice::{Connectivity, Coordinate, Graph, Grid, LatticeGraphBuilder, Node};
use checked_sum::CheckedSum;
use log::debug;

#[solution_runner(
    name = "Day 11: Cosmic Expansion",
    parsed = InputImage,
    part_one = Day11,
    part_two = Day11
)]
impl super::AdventOfCode2023<11> {}

/*
Input is an image formatted into a character grid. There are `.` for empty space and `#` to
represent galaxies.
*/

const GALAXY: char = '#';
const EMPTY: char = '.';

/// The input observatory image.
#[derive(Debug)]
struct InputImage {
    image: Grid<char>,
    /// Indices of rows without galaxies, ascending.
    empty_rows: Vec<usize>,
    /// Indices of columns without galaxies, ascending.
    empty_columns: Vec<usize>,
}

#[derive(thiserror::Error, Debug)]
enum ParseInputImageError {
    #[error("unexpected character in input at {coordinate}: {character:?}")]
    UnexpectedChar {
        coordinate: Coordinate,
        character: char,
    },
}

impl ParseData for InputImage {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let image: Grid<char> = input.parse()?;
        if let Some(node) = image.find(|&character| character != GALAXY && character != EMPTY) {
            return Err(ParseInputImageError::UnexpectedChar {
                coordinate: node.coordinate(),
                character: *node.value(),
            }
            .into());
        }

        let empty_rows = image
            .rows()
            .enumerate()
            .filter_map(|(index, row)| is_empty_line(&row).then_some(index))
            .collect();
        let empty_columns = image
            .columns()
            .enumerate()
            .filter_map(|(index, column)| is_empty_line(&column).then_some(index))
            .collect();

        Ok(Self {
            image,
            empty_rows,
            empty_columns,
        })
    }
}

fn is_empty_line(line: &[Node<'_, char>]) -> bool {
    line.iter().all(|node| *node.value() == EMPTY)
}

#[derive(thiserror::Error, Debug)]
enum ExpansionError {
    #[error("galaxy distances overflowed")]
    Overflow,

    #[error("expansion factor must be at least 1")]
    ZeroFactor,
}

/// Sum the distance between every unordered pair of coordinates.
fn sum_pair_distances(galaxies: &[Coordinate]) -> Result<u64, ExpansionError> {
    galaxies
        .iter()
        .enumerate()
        .flat_map(|(index, a)| {
            galaxies[index + 1..]
                .iter()
                .map(|b| a.manhattan_distance(*b))
        })
        .checked_sum()
        .ok_or(ExpansionError::Overflow)
}

/*
For part 1, factor for cosmic expansion then find the sum of lengths of shortest paths between
pairs of galaxies.

Cosmic expansion is applied by doubling all rows and columns that have no galaxies. A path between
galaxies steps across grid cells in cardinal directions, so its shortest length is the Manhattan
distance.

The doubling is small enough to apply to the image itself.
*/

impl InputImage {
    /// The image with every empty row and column doubled.
    fn doubled(&self) -> DynamicResult<Grid<char>> {
        fn double_if_empty(line: Vec<Node<'_, char>>) -> Vec<Vec<char>> {
            let copies = if is_empty_line(&line) { 2 } else { 1 };
            vec![line.iter().map(|node| *node.value()).collect(); copies]
        }

        let taller = self.image.flat_map_rows(double_if_empty)?;
        Ok(taller.flat_map_columns(double_if_empty)?)
    }
}

struct Day11;

impl Solution<PartOne> for Day11 {
    type Input = InputImage;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let expanded = input.doubled()?;
        debug!(
            "expanded image from {}x{} to {}x{}",
            input.image.width(),
            input.image.height(),
            expanded.width(),
            expanded.height()
        );

        let galaxies = expanded.filter(|&character| character == GALAXY);
        let sum = galaxies
            .iter()
            .enumerate()
            .flat_map(|(index, a)| {
                galaxies[index + 1..]
                    .iter()
                    .map(|b| Grid::distance(*a, *b))
            })
            .checked_sum()
            .ok_or(ExpansionError::Overflow)?;
        Ok(sum)
    }
}

/*
For part 2, cosmic expansion is significantly larger: every row/column without galaxies should be
replaced with 1,000,000 rows/columns.

Expanding the image is no longer practical. Instead, place each galaxy in a lattice at its shifted
coordinate, then measure between coordinates.
*/

const PART_TWO_FACTOR: u64 = 1_000_000;

impl InputImage {
    /// Sum the pairwise galaxy distances once every empty row and column is replaced with `factor`
    /// copies of itself.
    fn expanded_distance_sum(&self, factor: u64) -> DynamicResult<u64> {
        let growth = i64::try_from(factor.checked_sub(1).ok_or(ExpansionError::ZeroFactor)?)?;
        let shift = |empty: &[usize], index: i64| -> DynamicResult<i64> {
            let line_index = usize::try_from(index)?;
            let below = empty.partition_point(|&line| line < line_index);
            let offset = i64::try_from(below)?
                .checked_mul(growth)
                .ok_or(ExpansionError::Overflow)?;
            Ok(index.checked_add(offset).ok_or(ExpansionError::Overflow)?)
        };

        let mut builder = LatticeGraphBuilder::new();
        for galaxy in self.image.filter(|&character| character == GALAXY) {
            let shifted = Coordinate::new(
                shift(&self.empty_columns, galaxy.x())?,
                shift(&self.empty_rows, galaxy.y())?,
            );
            builder.vertex_at(shifted, ())?;
        }
        let lattice = builder.build(Connectivity::Cardinal);

        let galaxies: Vec<Coordinate> = lattice
            .iter()
            .filter_map(|id| lattice.coordinates(id))
            .collect();
        Ok(sum_pair_distances(&galaxies)?)
    }
}

impl Solution<PartTwo> for Day11 {
    type Input = InputImage;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        input.expanded_distance_sum(PART_TWO_FACTOR)
    }
}
