//! Dense rectangular grids of values.
//!
//! A [`Grid`] is built once from rectangular input and then only queried; every transform returns
//! a new grid. Cells are exposed as [`Node`] views pairing a [`Coordinate`] with a borrowed value.

use std::fmt::Display;
use std::hash::Hash;
use std::str::FromStr;

use nalgebra::{DMatrix, Scalar};

use crate::coordinate::Coordinate;
use crate::direction::Direction;

/// An error constructing or indexing a [`Grid`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("expected grid width to be {expected} across rows, but found row {row} width {found}")]
    UnequalRowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error(
        "expected grid height to be {expected} across columns, but found column {column} height {found}"
    )]
    UnequalColumnHeight {
        column: usize,
        expected: usize,
        found: usize,
    },

    #[error("row index {index} is out of range for grid height {height}")]
    RowOutOfRange { index: usize, height: usize },

    #[error("column index {index} is out of range for grid width {width}")]
    ColumnOutOfRange { index: usize, width: usize },
}

/// A single cell of a [`Grid`]: its coordinate and a reference to its value.
///
/// Equality and hashing only consider the coordinate.
#[derive(Debug)]
pub struct Node<'a, T> {
    coordinate: Coordinate,
    value: &'a T,
}

impl<'a, T> Node<'a, T> {
    #[must_use]
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    #[must_use]
    pub fn value(&self) -> &'a T {
        self.value
    }

    #[must_use]
    pub fn x(&self) -> i64 {
        self.coordinate.x()
    }

    #[must_use]
    pub fn y(&self) -> i64 {
        self.coordinate.y()
    }
}

impl<T> Clone for Node<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Node<'_, T> {}

impl<T> PartialEq for Node<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.coordinate == other.coordinate
    }
}

impl<T> Eq for Node<'_, T> {}

impl<T> Hash for Node<'_, T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.coordinate.hash(state);
    }
}

/// Convert a matrix index into a coordinate component.
///
/// Allocations never exceed `isize::MAX` elements, so an in-bounds index always fits.
fn index_to_component(index: usize) -> i64 {
    i64::try_from(index).unwrap_or(i64::MAX)
}

/// A rectangular grid of values, addressed by [`Coordinate`] with `(0, 0)` at the top-left.
#[derive(Debug, Clone)]
pub struct Grid<T> {
    cells: DMatrix<T>,
}

impl<T: Scalar> PartialEq for Grid<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl<T: Scalar + Eq> Eq for Grid<T> {}

impl<T: Scalar> Grid<T> {
    /// Create a grid from rows of values.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::UnequalRowWidth`] if any row's length differs from the first row's.
    pub fn try_from_rows<I>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = Vec<T>>,
    {
        Self::try_from_rows_with_width(rows, 0)
    }

    /// Create a grid from rows of values, `empty_width` columns wide if there are no rows.
    fn try_from_rows_with_width<I>(rows: I, empty_width: usize) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = Vec<T>>,
    {
        let rows: Vec<Vec<T>> = rows.into_iter().collect();
        let width = rows.first().map_or(empty_width, Vec::len);

        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, length)| length != width)
        {
            return Err(GridError::UnequalRowWidth {
                row,
                expected: width,
                found,
            });
        }

        let height = rows.len();
        Ok(Self {
            cells: DMatrix::from_row_iterator(height, width, rows.into_iter().flatten()),
        })
    }

    /// Create a grid from values already in row-major order.
    ///
    /// Callers guarantee `values` yields exactly `height * width` items.
    pub(crate) fn from_row_major<I>(height: usize, width: usize, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            cells: DMatrix::from_row_iterator(height, width, values),
        }
    }

    /// Create a grid from columns of values.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::UnequalColumnHeight`] if any column's length differs from the first
    /// column's.
    pub fn try_from_columns<I>(columns: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = Vec<T>>,
    {
        Self::try_from_columns_with_height(columns, 0)
    }

    /// Create a grid from columns of values, `empty_height` rows tall if there are no columns.
    fn try_from_columns_with_height<I>(columns: I, empty_height: usize) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = Vec<T>>,
    {
        let transposed =
            Self::try_from_rows_with_width(columns, empty_height).map_err(|error| match error {
                GridError::UnequalRowWidth {
                    row,
                    expected,
                    found,
                } => GridError::UnequalColumnHeight {
                    column: row,
                    expected,
                    found,
                },
                other => other,
            })?;
        Ok(transposed.transpose())
    }

    /// The number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// The number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Whether the grid has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Locate the matrix `(row, column)` index of a coordinate, if it lies within bounds.
    fn index_of(&self, coordinate: Coordinate) -> Option<(usize, usize)> {
        let row = usize::try_from(coordinate.y()).ok()?;
        let column = usize::try_from(coordinate.x()).ok()?;
        (row < self.height() && column < self.width()).then_some((row, column))
    }

    fn node_at(&self, row: usize, column: usize) -> Node<'_, T> {
        Node {
            coordinate: Coordinate::new(index_to_component(column), index_to_component(row)),
            value: &self.cells[(row, column)],
        }
    }

    /// Whether a coordinate lies within the grid.
    #[must_use]
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.index_of(coordinate).is_some()
    }

    /// Get the node at a coordinate, or `None` if it lies outside the grid.
    #[must_use]
    pub fn get(&self, coordinate: Coordinate) -> Option<Node<'_, T>> {
        self.index_of(coordinate)
            .map(|(row, column)| self.node_at(row, column))
    }

    /// Iterate every node in row-major order.
    pub fn nodes(&self) -> impl Iterator<Item = Node<'_, T>> {
        (0..self.height())
            .flat_map(move |row| (0..self.width()).map(move |column| self.node_at(row, column)))
    }

    /// Get the nodes directly left of, above, below, and right of `node`, in that order.
    ///
    /// Positions outside the grid are omitted.
    #[must_use]
    pub fn adjacent(&self, node: Node<'_, T>) -> Vec<Node<'_, T>> {
        self.adjacent_where(node, |_, _| true)
    }

    /// Get the adjacent nodes of `node` that satisfy `predicate`.
    ///
    /// The predicate receives each candidate along with the direction leading from `node` to it.
    pub fn adjacent_where<P>(&self, node: Node<'_, T>, mut predicate: P) -> Vec<Node<'_, T>>
    where
        P: FnMut(&Node<'_, T>, Direction) -> bool,
    {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| {
                self.get(node.coordinate().neighbor(direction))
                    .filter(|candidate| predicate(candidate, direction))
            })
            .collect()
    }

    /// Get the adjacent nodes of `node` followed by the diagonally touching nodes.
    #[must_use]
    pub fn neighbors(&self, node: Node<'_, T>) -> Vec<Node<'_, T>> {
        node.coordinate()
            .neighbors()
            .into_iter()
            .filter_map(|coordinate| self.get(coordinate))
            .collect()
    }

    /// Get the nodes of a row.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::RowOutOfRange`] if `index` is not below the grid height.
    pub fn row(&self, index: usize) -> Result<Vec<Node<'_, T>>, GridError> {
        if index >= self.height() {
            return Err(GridError::RowOutOfRange {
                index,
                height: self.height(),
            });
        }
        Ok((0..self.width())
            .map(|column| self.node_at(index, column))
            .collect())
    }

    /// Get the nodes of a column.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ColumnOutOfRange`] if `index` is not below the grid width.
    pub fn column(&self, index: usize) -> Result<Vec<Node<'_, T>>, GridError> {
        if index >= self.width() {
            return Err(GridError::ColumnOutOfRange {
                index,
                width: self.width(),
            });
        }
        Ok((0..self.height())
            .map(|row| self.node_at(row, index))
            .collect())
    }

    /// Iterate rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = Vec<Node<'_, T>>> {
        (0..self.height()).map(move |row| {
            (0..self.width())
                .map(|column| self.node_at(row, column))
                .collect()
        })
    }

    /// Iterate columns from left to right.
    pub fn columns(&self) -> impl Iterator<Item = Vec<Node<'_, T>>> {
        (0..self.width()).map(move |column| {
            (0..self.height())
                .map(|row| self.node_at(row, column))
                .collect()
        })
    }

    /// Find the first node, in row-major order, whose value satisfies `predicate`.
    pub fn find<P>(&self, mut predicate: P) -> Option<Node<'_, T>>
    where
        P: FnMut(&T) -> bool,
    {
        self.nodes().find(|node| predicate(node.value()))
    }

    /// Collect every node, in row-major order, whose value satisfies `predicate`.
    pub fn filter<P>(&self, mut predicate: P) -> Vec<Node<'_, T>>
    where
        P: FnMut(&T) -> bool,
    {
        self.nodes().filter(|node| predicate(node.value())).collect()
    }

    /// Count the nodes satisfying `predicate` in each row.
    pub fn count_by_row<P>(&self, mut predicate: P) -> Vec<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.rows()
            .map(|row| row.iter().filter(|node| predicate(node.value())).count())
            .collect()
    }

    /// The Manhattan distance between two nodes.
    #[must_use]
    pub fn distance(start: Node<'_, T>, end: Node<'_, T>) -> u64 {
        start.coordinate().manhattan_distance(end.coordinate())
    }

    /// Create a grid with rows and columns swapped.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self {
            cells: self.cells.transpose(),
        }
    }

    /// Create a grid of the same shape by transforming each node.
    pub fn map_nodes<R, F>(&self, mut transform: F) -> Grid<R>
    where
        R: Scalar,
        F: FnMut(Node<'_, T>) -> R,
    {
        let values = self.nodes().map(&mut transform);
        Grid {
            cells: DMatrix::from_row_iterator(self.height(), self.width(), values),
        }
    }

    /// Create a grid of the same shape by transforming each node, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Any error returned by `transform` is propagated.
    pub fn try_map_nodes<R, E, F>(&self, transform: F) -> Result<Grid<R>, E>
    where
        R: Scalar,
        F: FnMut(Node<'_, T>) -> Result<R, E>,
    {
        let values: Vec<R> = self.nodes().map(transform).collect::<Result<_, _>>()?;
        Ok(Grid {
            cells: DMatrix::from_row_iterator(self.height(), self.width(), values),
        })
    }

    /// Create a grid where each row is replaced by zero or more new rows.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::UnequalRowWidth`] if the produced rows are not all the same length.
    pub fn flat_map_rows<R, I, F>(&self, mut transform: F) -> Result<Grid<R>, GridError>
    where
        R: Scalar,
        I: IntoIterator<Item = Vec<R>>,
        F: FnMut(Vec<Node<'_, T>>) -> I,
    {
        Grid::try_from_rows_with_width(self.rows().flat_map(&mut transform), self.width())
    }

    /// Create a grid where each column is replaced by zero or more new columns.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::UnequalColumnHeight`] if the produced columns are not all the same
    /// length.
    pub fn flat_map_columns<R, I, F>(&self, mut transform: F) -> Result<Grid<R>, GridError>
    where
        R: Scalar,
        I: IntoIterator<Item = Vec<R>>,
        F: FnMut(Vec<Node<'_, T>>) -> I,
    {
        Grid::try_from_columns_with_height(
            self.columns().flat_map(&mut transform),
            self.height(),
        )
    }

    /// Create a grid by transforming each row into a new row.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::UnequalRowWidth`] if the produced rows are not all the same length.
    pub fn map_rows<R, F>(&self, mut transform: F) -> Result<Grid<R>, GridError>
    where
        R: Scalar,
        F: FnMut(Vec<Node<'_, T>>) -> Vec<R>,
    {
        self.flat_map_rows(|row| [transform(row)])
    }

    /// Create a grid by transforming each column into a new column.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::UnequalColumnHeight`] if the produced columns are not all the same
    /// length.
    pub fn map_columns<R, F>(&self, mut transform: F) -> Result<Grid<R>, GridError>
    where
        R: Scalar,
        F: FnMut(Vec<Node<'_, T>>) -> Vec<R>,
    {
        self.flat_map_columns(|column| [transform(column)])
    }
}

impl FromStr for Grid<char> {
    type Err = GridError;

    /// Parse text into a grid, treating each line as a row and each character as a cell.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_rows(s.lines().map(|line| line.chars().collect()))
    }
}

/// Canonical serialization: each row's values concatenated, rows joined by newlines.
impl<T: Scalar + Display> Display for Grid<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, row) in self.rows().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for node in row {
                write!(f, "{}", node.value())?;
            }
        }
        Ok(())
    }
}
