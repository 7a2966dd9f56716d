use std::fmt::Display;

use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use aoc_lattice::tilt::{SPIN_CYCLE, Tilt, TiltRole, spin, tilt};
use aoc_lattice::{Direction, Grid};
use checked_sum::CheckedSum;
use log::debug;

#[solution_runner(
    name = "Day 14: Parabolic Reflector Dish",
    parsed = Platform,
    part_one = Day14,
    part_two = Day14
)]
impl super::AdventOfCode2023<14> {}

/*
Input is a character grid of rock placements on a platform: `O` for round rocks, `#` for cubed
rocks, and `.` for empty space.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rock {
    Round,
    Cubed,
    Empty,
}

#[derive(thiserror::Error, Debug)]
#[error("invalid character in grid: {0:?}")]
struct InvalidRock(char);

impl TryFrom<char> for Rock {
    type Error = InvalidRock;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'O' => Ok(Self::Round),
            '#' => Ok(Self::Cubed),
            '.' => Ok(Self::Empty),
            _ => Err(InvalidRock(value)),
        }
    }
}

impl Display for Rock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let character = match self {
            Self::Round => 'O',
            Self::Cubed => '#',
            Self::Empty => '.',
        };
        write!(f, "{character}")
    }
}

impl Tilt for Rock {
    fn role(&self) -> TiltRole {
        match self {
            Self::Round => TiltRole::Movable,
            Self::Cubed => TiltRole::Fixed,
            Self::Empty => TiltRole::Open,
        }
    }
}

#[derive(Debug, Clone)]
struct Platform(Grid<Rock>);

impl ParseData for Platform {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let characters: Grid<char> = input.parse()?;
        let rocks = characters.try_map_nodes(|node| Rock::try_from(*node.value()))?;
        Ok(Self(rocks))
    }
}

#[derive(thiserror::Error, Debug)]
#[error("total load overflowed")]
struct LoadOverflow;

impl Platform {
    /// The load on the north support beams: each round rock weighs the number of rows from it to
    /// the south edge, counting its own row.
    fn north_load(&self) -> Result<u64, LoadOverflow> {
        let height = self.0.height();
        self.0
            .count_by_row(|rock| *rock == Rock::Round)
            .into_iter()
            .enumerate()
            .map(|(index, rocks)| {
                let weight = u64::try_from(height - index).map_err(|_| LoadOverflow)?;
                let rocks = u64::try_from(rocks).map_err(|_| LoadOverflow)?;
                weight.checked_mul(rocks).ok_or(LoadOverflow)
            })
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .checked_sum()
            .ok_or(LoadOverflow)
    }
}

/*
For part 1, tilt the platform so that all round rocks roll north, then report the total load on the
north support beams.
*/

struct Day14;

impl Solution<PartOne> for Day14 {
    type Input = Platform;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let tilted = Platform(tilt(&input.0, Direction::Up));
        Ok(tilted.north_load()?)
    }
}

/*
For part 2, run a spin cycle (tilting north, west, south, then east) 1,000,000,000 times, then
report the north load.

The platform settles into a repeating loop of states well before that, so the spin skips ahead once
a state repeats.
*/

const SPIN_CYCLES: u64 = 1_000_000_000;

impl Solution<PartTwo> for Day14 {
    type Input = Platform;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let spun = Platform(spin(&input.0, &SPIN_CYCLE, SPIN_CYCLES));
        debug!("platform after spinning:\n{}", spun.0);
        Ok(spun.north_load()?)
    }
}
