//! Integer coordinates on a two-dimensional lattice.

use std::fmt::Display;

use nalgebra::{Point2, Vector2};

use crate::direction::Direction;

/// An immutable `(x, y)` position on a lattice.
///
/// `x` counts columns rightward and `y` counts rows downward, so `(0, 0)` is the top-left cell of
/// a grid parsed from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate(Point2<i64>);

impl Coordinate {
    #[must_use]
    pub fn new(x: i64, y: i64) -> Self {
        Self(Point2::new(x, y))
    }

    #[must_use]
    pub fn x(self) -> i64 {
        self.0.x
    }

    #[must_use]
    pub fn y(self) -> i64 {
        self.0.y
    }

    /// The coordinate at the lattice origin.
    #[must_use]
    pub fn origin() -> Self {
        Self(Point2::origin())
    }

    /// Offset self by a vector.
    #[must_use]
    pub fn offset(self, vector: Vector2<i64>) -> Self {
        Self(self.0 + vector)
    }

    /// Get the coordinate one step toward `direction`.
    #[must_use]
    pub fn neighbor(self, direction: Direction) -> Self {
        self.offset(direction.to_vector2())
    }

    #[must_use]
    pub fn left(self) -> Self {
        self.neighbor(Direction::Left)
    }

    #[must_use]
    pub fn right(self) -> Self {
        self.neighbor(Direction::Right)
    }

    #[must_use]
    pub fn up(self) -> Self {
        self.neighbor(Direction::Up)
    }

    #[must_use]
    pub fn down(self) -> Self {
        self.neighbor(Direction::Down)
    }

    #[must_use]
    pub fn left_up(self) -> Self {
        self.left().up()
    }

    #[must_use]
    pub fn right_up(self) -> Self {
        self.right().up()
    }

    #[must_use]
    pub fn left_down(self) -> Self {
        self.left().down()
    }

    #[must_use]
    pub fn right_down(self) -> Self {
        self.right().down()
    }

    /// The four coordinates sharing an edge with self: left, up, down, then right.
    #[must_use]
    pub fn adjacent(self) -> [Self; 4] {
        Direction::ALL.map(|direction| self.neighbor(direction))
    }

    /// The eight coordinates touching self, the [adjacent][Self::adjacent] coordinates followed
    /// by the diagonals.
    #[must_use]
    pub fn neighbors(self) -> [Self; 8] {
        let [left, up, down, right] = self.adjacent();
        [
            left,
            up,
            down,
            right,
            self.left_up(),
            self.left_down(),
            self.right_up(),
            self.right_down(),
        ]
    }

    /// The Manhattan distance between two coordinates.
    #[must_use]
    pub fn manhattan_distance(self, other: Self) -> u64 {
        self.x().abs_diff(other.x()) + self.y().abs_diff(other.y())
    }

    /// Find which direction leads from self to an adjacent coordinate, or `None` if `other` is
    /// not adjacent.
    #[must_use]
    pub fn direction_to(self, other: Self) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&direction| self.neighbor(direction) == other)
    }
}

impl From<Point2<i64>> for Coordinate {
    fn from(value: Point2<i64>) -> Self {
        Self(value)
    }
}

impl From<Coordinate> for Point2<i64> {
    fn from(value: Coordinate) -> Self {
        value.0
    }
}

impl From<(i64, i64)> for Coordinate {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x(), self.y())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacent_follows_lookup_order() {
        let center = Coordinate::new(2, 5);
        assert_eq!(
            center.adjacent(),
            [
                Coordinate::new(1, 5),
                Coordinate::new(2, 4),
                Coordinate::new(2, 6),
                Coordinate::new(3, 5),
            ]
        );
    }

    #[test]
    fn neighbors_include_diagonals() {
        let neighbors = Coordinate::origin().neighbors();
        assert_eq!(neighbors.len(), 8);
        assert!(neighbors.contains(&Coordinate::new(-1, -1)));
        assert!(neighbors.contains(&Coordinate::new(1, 1)));
        assert!(!neighbors.contains(&Coordinate::origin()));
    }

    #[test]
    fn manhattan_distance_is_symmetric() {
        let a = Coordinate::new(1, 6);
        let b = Coordinate::new(5, 11);
        assert_eq!(a.manhattan_distance(b), 9);
        assert_eq!(b.manhattan_distance(a), 9);
        assert_eq!(a.manhattan_distance(a), 0);
    }

    #[test]
    fn direction_to_only_reports_adjacent() {
        let origin = Coordinate::origin();
        assert_eq!(origin.direction_to(origin.up()), Some(Direction::Up));
        assert_eq!(origin.direction_to(origin.right()), Some(Direction::Right));
        assert_eq!(origin.direction_to(origin.right_down()), None);
        assert_eq!(origin.direction_to(origin), None);
    }
}
