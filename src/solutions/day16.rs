use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use aoc_lattice::beam::{Beam, Deflection, Optics, energize, max_energize};
use aoc_lattice::{Coordinate, Direction, Grid};

#[solution_runner(
    name = "Day 16: The Floor Will Be Lava",
    parsed = Contraption,
    part_one = Day16,
    part_two = Day16
)]
impl super::AdventOfCode2023<16> {}

/*
Input is a character grid of a contraption layout containing mirrors and splitters.

`.` is empty space, `/` & `\` are mirrors, and `|` & `-` are splitters. The multiple characters for
mirrors and splitter indicate its orientation.
*/

/// A mirror in the contraption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mirror {
    /// Forward leaning, with ends in the top-right and bottom-left.
    Forward,
    /// Backward leaning, with ends in the top-left and bottom-right.
    Backward,
}

/// A splitter in the contraption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Splitter {
    /// Oriented vertically, with ends on the top and bottom.
    Vertical,
    /// Oriented horizontally, with ends on the left and right.
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tile {
    Empty,
    Mirror(Mirror),
    Splitter(Splitter),
}

#[derive(thiserror::Error, Debug)]
#[error("invalid character for a contraption tile: {0:?}")]
struct InvalidTile(char);

impl TryFrom<char> for Tile {
    type Error = InvalidTile;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '.' => Ok(Self::Empty),
            '/' => Ok(Self::Mirror(Mirror::Forward)),
            '\\' => Ok(Self::Mirror(Mirror::Backward)),
            '|' => Ok(Self::Splitter(Splitter::Vertical)),
            '-' => Ok(Self::Splitter(Splitter::Horizontal)),
            _ => Err(InvalidTile(value)),
        }
    }
}

impl Optics for Tile {
    fn deflect(&self, heading: Direction) -> Deflection {
        use Direction::{Down, Left, Right, Up};

        match *self {
            Self::Empty => Deflection::Pass,
            Self::Mirror(Mirror::Forward) => Deflection::Turn(match heading {
                Up => Right,
                Right => Up,
                Down => Left,
                Left => Down,
            }),
            Self::Mirror(Mirror::Backward) => Deflection::Turn(match heading {
                Up => Left,
                Left => Up,
                Down => Right,
                Right => Down,
            }),
            // entering a splitter along its length passes straight through
            Self::Splitter(Splitter::Vertical) if heading.is_horizontal() => {
                Deflection::Split(Up, Down)
            }
            Self::Splitter(Splitter::Horizontal) if heading.is_vertical() => {
                Deflection::Split(Left, Right)
            }
            Self::Splitter(_) => Deflection::Pass,
        }
    }
}

struct Contraption(Grid<Tile>);

impl ParseData for Contraption {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let characters: Grid<char> = input.parse()?;
        Ok(Self(
            characters.try_map_nodes(|node| Tile::try_from(*node.value()))?,
        ))
    }
}

/*
For part 1, a beam of light enters the top-left tile heading right. Count the tiles that end up
energized, meaning at least one beam passes through them.
*/

struct Day16;

impl Solution<PartOne> for Day16 {
    type Input = Contraption;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(energize(
            &input.0,
            Beam::new(Coordinate::origin(), Direction::Right),
        ))
    }
}

/*
For part 2, the beam may enter from any edge tile, heading away from that edge. Find the most tiles
that can be energized.
*/

#[derive(thiserror::Error, Debug)]
#[error("an empty contraption has no edge to enter from")]
struct EmptyContraption;

impl Solution<PartTwo> for Day16 {
    type Input = Contraption;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(max_energize(&input.0).ok_or(EmptyContraption)?)
    }
}
