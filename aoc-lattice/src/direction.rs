//! Cardinal directions on a lattice.

use nalgebra::Vector2;

/// A cardinal direction.
///
/// Lattice rows grow downward, so [`Direction::Up`] decrements `y` and [`Direction::Down`]
/// increments it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Every direction, in the order adjacency lookups report them.
    pub const ALL: [Self; 4] = [Self::Left, Self::Up, Self::Down, Self::Right];

    /// Find the opposite direction to self.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Whether the direction moves along a row.
    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Whether the direction moves along a column.
    #[must_use]
    pub fn is_vertical(self) -> bool {
        !self.is_horizontal()
    }

    /// Create a [`Vector2`] for a unit offset reflecting the direction.
    #[must_use]
    pub fn to_vector2(self) -> Vector2<i64> {
        match self {
            Self::Up => -Vector2::y(),
            Self::Down => Vector2::y(),
            Self::Left => -Vector2::x(),
            Self::Right => Vector2::x(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        for direction in Direction::ALL {
            assert_ne!(direction.opposite(), direction);
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn opposite_vectors_cancel() {
        for direction in Direction::ALL {
            let sum = direction.to_vector2() + direction.opposite().to_vector2();
            assert_eq!(sum, Vector2::zeros());
        }
    }

    #[test]
    fn orientation_splits_directions_in_half() {
        let horizontal: Vec<_> = Direction::ALL
            .into_iter()
            .filter(|direction| direction.is_horizontal())
            .collect();
        assert_eq!(horizontal, vec![Direction::Left, Direction::Right]);
        assert!(Direction::Up.is_vertical());
        assert!(Direction::Down.is_vertical());
    }
}
