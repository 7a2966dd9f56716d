//! Gravity simulation for grids of rolling and fixed tokens.
//!
//! Tilting a grid slides every movable token toward one edge until it rests against that edge, a
//! fixed token, or another resting movable token. Spinning repeats a sequence of tilts and
//! short-circuits once the grid returns to a state it has already been in.

use std::collections::HashMap;
use std::fmt::Display;

use log::debug;
use nalgebra::Scalar;

use crate::direction::Direction;
use crate::grid::{Grid, Node};

/// The tilt order of one spin cycle: north, west, south, then east.
pub const SPIN_CYCLE: [Direction; 4] = [
    Direction::Up,
    Direction::Left,
    Direction::Down,
    Direction::Right,
];

/// How a cell behaves when its grid is tilted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiltRole {
    /// Rolls toward the tilted edge.
    Movable,
    /// Never moves and blocks movable tokens.
    Fixed,
    /// Empty space a movable token can roll into.
    Open,
}

pub trait Tilt {
    fn role(&self) -> TiltRole;
}

/// Round rocks `O` roll, cube rocks `#` stay put, and anything else is open space.
impl Tilt for char {
    fn role(&self) -> TiltRole {
        match *self {
            'O' => TiltRole::Movable,
            '#' => TiltRole::Fixed,
            _ => TiltRole::Open,
        }
    }
}

/// Settle one line of cells, with movable tokens gathering at the start of each segment between
/// fixed tokens, or at the end if `toward_start` is false.
fn settle<T: Tilt>(line: &mut [T], toward_start: bool) {
    let rank = |value: &T| match (value.role(), toward_start) {
        (TiltRole::Movable, true) | (TiltRole::Open, false) => 0,
        _ => 1,
    };
    for segment in line.split_mut(|value| value.role() == TiltRole::Fixed) {
        segment.sort_by_key(rank);
    }
}

/// Create a grid with every movable token rolled toward `direction`.
#[must_use]
pub fn tilt<T: Scalar + Tilt>(grid: &Grid<T>, direction: Direction) -> Grid<T> {
    let toward_start = matches!(direction, Direction::Up | Direction::Left);
    let settled = |line: Vec<Node<'_, T>>| {
        let mut values: Vec<T> = line.iter().map(|node| node.value().clone()).collect();
        settle(&mut values, toward_start);
        values
    };

    if direction.is_horizontal() {
        Grid::from_row_major(
            grid.height(),
            grid.width(),
            grid.rows().flat_map(settled),
        )
    } else {
        Grid::from_row_major(
            grid.width(),
            grid.height(),
            grid.columns().flat_map(settled),
        )
        .transpose()
    }
}

/// Tilt a grid toward each direction in turn.
#[must_use]
pub fn tilt_sequence<T: Scalar + Tilt>(grid: &Grid<T>, directions: &[Direction]) -> Grid<T> {
    directions
        .iter()
        .fold(grid.clone(), |current, &direction| tilt(&current, direction))
}

/// Apply [`tilt_sequence`] `cycles` times.
///
/// Every state is recorded by its serialization along with the cycle it was first seen at. On the
/// first repeat the remaining work reduces to `(cycles - cycle) % (cycle - first_seen)` more
/// cycles, which are applied before returning.
#[must_use]
pub fn spin<T: Scalar + Tilt + Display>(
    grid: &Grid<T>,
    directions: &[Direction],
    cycles: u64,
) -> Grid<T> {
    let mut seen: HashMap<String, u64> = HashMap::new();
    let mut current = grid.clone();

    for cycle in 0..cycles {
        let state = current.to_string();
        if let Some(&first_seen) = seen.get(&state) {
            let length = cycle - first_seen;
            let remaining = (cycles - cycle) % length;
            debug!(
                "spin state at cycle {cycle} repeats cycle {first_seen}; \
                 cycle length {length}, {remaining} cycles remaining"
            );
            for _ in 0..remaining {
                current = tilt_sequence(&current, directions);
            }
            return current;
        }
        seen.insert(state, cycle);
        current = tilt_sequence(&current, directions);
    }

    debug!("spin finished all {cycles} cycles without repeating");
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"O....#....
O.OO#....#
.....##...
OO.#O....O
.O.....O#.
O.#..O.#.#
..O..#O..O
.......O..
#....###..
#OO..#....
";

    fn example() -> Grid<char> {
        EXAMPLE_INPUT.parse().expect("example should parse")
    }

    /// Each movable token weighs as many rows as lie between it and the bottom edge, inclusive.
    fn north_load(grid: &Grid<char>) -> usize {
        let height = grid.height();
        grid.count_by_row(|value| value.role() == TiltRole::Movable)
            .into_iter()
            .enumerate()
            .map(|(row, count)| count * (height - row))
            .sum()
    }

    #[test]
    fn tilt_up_matches_example_load() {
        let tilted = tilt(&example(), Direction::Up);
        assert_eq!(north_load(&tilted), 136);
        assert_eq!(
            tilted.row(0).map(|row| row.iter().map(|node| *node.value()).collect::<String>()),
            Ok("OOOO.#.O..".to_string())
        );
    }

    #[test]
    fn tilt_respects_fixed_tokens() -> Result<(), crate::grid::GridError> {
        let grid: Grid<char> = "..O#.O\n".parse()?;
        assert_eq!(tilt(&grid, Direction::Left).to_string(), "O..#O.");
        assert_eq!(tilt(&grid, Direction::Right).to_string(), "..O#.O");

        let column: Grid<char> = ".\nO\n#\n.\nO".parse()?;
        assert_eq!(tilt(&column, Direction::Up).to_string(), "O\n.\n#\nO\n.");
        assert_eq!(tilt(&column, Direction::Down).to_string(), ".\nO\n#\n.\nO");
        Ok(())
    }

    #[test]
    fn one_spin_cycle_matches_example() {
        let expected = ".....#....
....#...O#
...OO##...
.OO#......
.....OOO#.
.O#...O#.#
....O#....
......OOOO
#...O###..
#..OO#....";
        let spun = tilt_sequence(&example(), &SPIN_CYCLE);
        assert_eq!(spun.to_string(), expected);
        assert_eq!(spin(&example(), &SPIN_CYCLE, 1), spun);
    }

    #[test]
    fn spin_billion_cycles_short_circuits() {
        let spun = spin(&example(), &SPIN_CYCLE, 1_000_000_000);
        assert_eq!(north_load(&spun), 64);
    }

    #[test]
    fn spin_without_cycles_is_identity() {
        let grid = example();
        assert_eq!(spin(&grid, &SPIN_CYCLE, 0), grid);
        assert_eq!(spin(&grid, &[], 5), grid);
    }
}
