//! Light beams bouncing through a grid of optical elements.
//!
//! Each grid cell decides how a beam passing through it continues: straight on, turned by a
//! mirror, or split in two. Propagation tracks every `(position, heading)` state reached, so a
//! beam caught in a loop stops once it repeats itself.

use std::collections::{HashSet, VecDeque};

use log::debug;
use nalgebra::Scalar;

use crate::coordinate::Coordinate;
use crate::direction::Direction;
use crate::grid::Grid;

/// A beam entering a cell while moving toward `heading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Beam {
    pub position: Coordinate,
    pub heading: Direction,
}

impl Beam {
    #[must_use]
    pub fn new(position: Coordinate, heading: Direction) -> Self {
        Self { position, heading }
    }

    /// The beam leaving this cell toward `heading`.
    fn advance(self, heading: Direction) -> Self {
        Self::new(self.position.neighbor(heading), heading)
    }
}

/// How a cell changes a beam passing through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deflection {
    /// The beam continues in its heading.
    Pass,
    /// The beam leaves toward a new heading.
    Turn(Direction),
    /// The beam leaves toward both headings.
    Split(Direction, Direction),
}

/// Grid cells that interact with beams.
pub trait Optics {
    /// Decide what happens to a beam entering this cell with `heading`.
    fn deflect(&self, heading: Direction) -> Deflection;
}

/// The standard contraption cells: `.` empty space, `/` and `\` mirrors, `|` and `-` splitters.
///
/// Splitters entered along their length let the beam pass. Any other character passes beams
/// unchanged.
impl Optics for char {
    fn deflect(&self, heading: Direction) -> Deflection {
        use Direction::{Down, Left, Right, Up};

        match (*self, heading) {
            ('/', Up) | ('\\', Down) => Deflection::Turn(Right),
            ('/', Right) | ('\\', Left) => Deflection::Turn(Up),
            ('/', Down) | ('\\', Up) => Deflection::Turn(Left),
            ('/', Left) | ('\\', Right) => Deflection::Turn(Down),
            ('|', Left | Right) => Deflection::Split(Up, Down),
            ('-', Up | Down) => Deflection::Split(Left, Right),
            _ => Deflection::Pass,
        }
    }
}

/// Count the cells that at least one beam passes through, starting from `start`.
///
/// A start outside the grid energizes nothing.
pub fn energize<T: Scalar + Optics>(grid: &Grid<T>, start: Beam) -> usize {
    let mut visited = HashSet::new();
    let mut queue = VecDeque::from([start]);

    while let Some(beam) = queue.pop_front() {
        let Some(node) = grid.get(beam.position) else {
            continue;
        };
        if !visited.insert(beam) {
            continue;
        }
        match node.value().deflect(beam.heading) {
            Deflection::Pass => queue.push_back(beam.advance(beam.heading)),
            Deflection::Turn(heading) => queue.push_back(beam.advance(heading)),
            Deflection::Split(first, second) => {
                queue.push_back(beam.advance(first));
                queue.push_back(beam.advance(second));
            }
        }
    }

    let energized = visited
        .iter()
        .map(|beam| beam.position)
        .collect::<HashSet<_>>()
        .len();
    debug!(
        "beam from {} heading {:?} reached {} states over {energized} cells",
        start.position,
        start.heading,
        visited.len()
    );
    energized
}

/// Every beam entering the grid from an edge, heading away from that edge.
///
/// Corner cells receive a beam from each of the two edges they touch.
pub fn edge_beams<T: Scalar>(grid: &Grid<T>) -> Vec<Beam> {
    let Some(last_row) = grid.height().checked_sub(1) else {
        return Vec::new();
    };
    let Some(last_column) = grid.width().checked_sub(1) else {
        return Vec::new();
    };

    let top = grid.row(0).into_iter().flatten();
    let bottom = grid.row(last_row).into_iter().flatten();
    let left = grid.column(0).into_iter().flatten();
    let right = grid.column(last_column).into_iter().flatten();

    top.map(|node| Beam::new(node.coordinate(), Direction::Down))
        .chain(bottom.map(|node| Beam::new(node.coordinate(), Direction::Up)))
        .chain(left.map(|node| Beam::new(node.coordinate(), Direction::Right)))
        .chain(right.map(|node| Beam::new(node.coordinate(), Direction::Left)))
        .collect()
}

/// The largest energized count over all [edge beams][edge_beams], or `None` for an empty grid.
pub fn max_energize<T: Scalar + Optics>(grid: &Grid<T>) -> Option<usize> {
    edge_beams(grid)
        .into_iter()
        .map(|beam| energize(grid, beam))
        .max()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r".|...\....
|.-.\.....
.....|-...
........|.
..........
.........\
..../.\\..
.-.-/..|..
.|....-|.\
..//.|....
";

    fn example() -> Grid<char> {
        EXAMPLE_INPUT.parse().expect("example should parse")
    }

    #[test]
    fn energize_from_top_left() {
        let start = Beam::new(Coordinate::origin(), Direction::Right);
        assert_eq!(energize(&example(), start), 46);
    }

    #[test]
    fn max_energize_over_edges() {
        assert_eq!(max_energize(&example()), Some(51));
    }

    #[test]
    fn loops_terminate() {
        let grid: Grid<char> = r"/\
\/"
        .parse()
        .expect("grid should parse");
        let start = Beam::new(Coordinate::new(0, 1), Direction::Down);
        assert_eq!(energize(&grid, start), 4);
    }

    #[test]
    fn splitters_pass_along_their_length() {
        assert_eq!('|'.deflect(Direction::Up), Deflection::Pass);
        assert_eq!('-'.deflect(Direction::Right), Deflection::Pass);
        assert_eq!(
            '|'.deflect(Direction::Right),
            Deflection::Split(Direction::Up, Direction::Down)
        );
        assert_eq!('/'.deflect(Direction::Right), Deflection::Turn(Direction::Up));
        assert_eq!('\\'.deflect(Direction::Right), Deflection::Turn(Direction::Down));
    }

    #[test]
    fn start_outside_grid_energizes_nothing() {
        let start = Beam::new(Coordinate::new(-1, 0), Direction::Right);
        assert_eq!(energize(&example(), start), 0);
    }

    #[test]
    fn edge_beams_cover_each_edge_cell() {
        let grid = example();
        let beams = edge_beams(&grid);
        assert_eq!(beams.len(), 2 * (grid.width() + grid.height()));
        assert!(beams.contains(&Beam::new(Coordinate::origin(), Direction::Down)));
        assert!(beams.contains(&Beam::new(Coordinate::origin(), Direction::Right)));
        assert!(beams.contains(&Beam::new(Coordinate::new(9, 9), Direction::Left)));

        let empty: Grid<char> = "".parse().expect("grid should parse");
        assert!(edge_beams(&empty).is_empty());
        assert_eq!(max_energize(&empty), None);
    }
}
