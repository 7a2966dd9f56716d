//! Graphs whose vertices sit on integer coordinates.
//!
//! A [`LatticeGraph`] keeps a plain [`AdjacencyListGraph`] for topology and two indices tying
//! vertices to coordinates. Grid-shaped data becomes a graph through [`LatticeGraphBuilder`],
//! which wires every coordinate-tagged vertex to its geometric neighbors in a single pass when
//! built.

use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;
use log::debug;
use nalgebra::Scalar;

use crate::coordinate::Coordinate;
use crate::direction::Direction;
use crate::graph::{AdjacencyListGraph, Graph, Vertex, VertexId};
use crate::grid::Grid;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LatticeError {
    #[error("coordinate {coordinate} is already assigned to vertex {existing}")]
    DuplicateCoordinate {
        coordinate: Coordinate,
        existing: VertexId,
    },
}

/// Which geometric neighbors are connected when a lattice is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    /// Left, right, up, and down.
    #[default]
    Cardinal,
    /// The cardinal neighbors plus the four diagonals.
    Diagonal,
}

impl Connectivity {
    fn neighbors(self, coordinate: Coordinate) -> Vec<Coordinate> {
        match self {
            Self::Cardinal => coordinate.adjacent().to_vec(),
            Self::Diagonal => coordinate.neighbors().to_vec(),
        }
    }
}

/// A [`Graph`] with a bidirectional mapping between some of its vertices and coordinates.
#[derive(Debug, Clone)]
pub struct LatticeGraph<T> {
    graph: AdjacencyListGraph<T>,
    coordinates_by_vertex: IndexMap<VertexId, Coordinate>,
    vertex_by_coordinates: HashMap<Coordinate, VertexId>,
}

impl<T> LatticeGraph<T> {
    /// The coordinate of a vertex, if it has one.
    #[must_use]
    pub fn coordinates(&self, id: VertexId) -> Option<Coordinate> {
        self.coordinates_by_vertex.get(&id).copied()
    }

    /// The vertex placed at a coordinate.
    #[must_use]
    pub fn vertex_at(&self, coordinate: Coordinate) -> Option<VertexId> {
        self.vertex_by_coordinates.get(&coordinate).copied()
    }

    /// The direction leading from `source` to `destination`.
    ///
    /// Returns `None` unless both vertices have coordinates one cardinal step apart. Graph
    /// adjacency is not consulted.
    #[must_use]
    pub fn direction(&self, source: VertexId, destination: VertexId) -> Option<Direction> {
        let source = self.coordinates(source)?;
        let destination = self.coordinates(destination)?;
        source.direction_to(destination)
    }

    /// The vertex one step from `id` toward `direction`, provided an edge connects them.
    #[must_use]
    pub fn neighbor(&self, id: VertexId, direction: Direction) -> Option<VertexId> {
        let coordinate = self.coordinates(id)?.neighbor(direction);
        self.vertex_at(coordinate)
            .filter(|&neighbor| self.graph.adjacent(id, neighbor))
    }

    /// Coordinate-tagged vertices grouped by row, top to bottom and left to right within a row.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<VertexId>> {
        self.group_by(|coordinate| (coordinate.y(), coordinate.x()))
    }

    /// Coordinate-tagged vertices grouped by column, left to right and top to bottom within a
    /// column.
    #[must_use]
    pub fn columns(&self) -> Vec<Vec<VertexId>> {
        self.group_by(|coordinate| (coordinate.x(), coordinate.y()))
    }

    fn group_by(&self, key: impl Fn(Coordinate) -> (i64, i64)) -> Vec<Vec<VertexId>> {
        let mut groups: BTreeMap<i64, BTreeMap<i64, VertexId>> = BTreeMap::new();
        for (&id, &coordinate) in &self.coordinates_by_vertex {
            let (major, minor) = key(coordinate);
            groups.entry(major).or_default().insert(minor, id);
        }
        groups
            .into_values()
            .map(|group| group.into_values().collect())
            .collect()
    }

    /// The smallest and largest coordinate components across every tagged vertex, as the
    /// top-left and bottom-right corners of a bounding box.
    #[must_use]
    pub fn bounds(&self) -> Option<(Coordinate, Coordinate)> {
        let mut coordinates = self.coordinates_by_vertex.values();
        let first = *coordinates.next()?;
        Some(coordinates.fold((first, first), |(min, max), coordinate| {
            (
                Coordinate::new(min.x().min(coordinate.x()), min.y().min(coordinate.y())),
                Coordinate::new(max.x().max(coordinate.x()), max.y().max(coordinate.y())),
            )
        }))
    }

    /// The number of distinct edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl<T: Scalar> LatticeGraph<T> {
    /// Create a lattice with one vertex per grid node, placed at the node's coordinate.
    #[must_use]
    pub fn from_grid(grid: &Grid<T>, connectivity: Connectivity) -> Self {
        let mut builder = LatticeGraphBuilder::new();
        for node in grid.nodes() {
            builder.place(node.coordinate(), node.value().clone());
        }
        builder.build(connectivity)
    }
}

impl<T> Graph<T> for LatticeGraph<T> {
    fn add_vertex(&mut self, value: T) -> VertexId {
        self.graph.add_vertex(value)
    }

    fn add_edge(&mut self, first: VertexId, second: VertexId) {
        self.graph.add_edge(first, second);
    }

    fn remove_vertex(&mut self, id: VertexId) -> Option<Vertex<T>> {
        let vertex = self.graph.remove_vertex(id)?;
        if let Some(coordinate) = self.coordinates_by_vertex.shift_remove(&id) {
            self.vertex_by_coordinates.remove(&coordinate);
        }
        Some(vertex)
    }

    fn remove_edge(&mut self, first: VertexId, second: VertexId) -> bool {
        self.graph.remove_edge(first, second)
    }

    fn neighbors(&self, id: VertexId) -> Vec<VertexId> {
        self.graph.neighbors(id)
    }

    fn adjacent(&self, first: VertexId, second: VertexId) -> bool {
        self.graph.adjacent(first, second)
    }

    fn root(&self) -> Option<VertexId> {
        self.graph.root()
    }

    fn next(&self, id: VertexId) -> Option<VertexId> {
        self.graph.next(id)
    }

    fn size(&self) -> usize {
        self.graph.size()
    }

    fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.graph.vertex(id)
    }
}

/// Accumulates vertices and explicit edges for a [`LatticeGraph`].
///
/// No geometric edges exist until [`build`][Self::build] is called, so vertices may be added in
/// any order.
#[derive(Debug, Clone)]
pub struct LatticeGraphBuilder<T> {
    graph: AdjacencyListGraph<T>,
    coordinates_by_vertex: IndexMap<VertexId, Coordinate>,
    vertex_by_coordinates: HashMap<Coordinate, VertexId>,
    edges: Vec<(VertexId, VertexId)>,
}

impl<T> Default for LatticeGraphBuilder<T> {
    fn default() -> Self {
        Self {
            graph: AdjacencyListGraph::new(),
            coordinates_by_vertex: IndexMap::new(),
            vertex_by_coordinates: HashMap::new(),
            edges: Vec::new(),
        }
    }
}

impl<T> LatticeGraphBuilder<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex without a coordinate.
    pub fn vertex(&mut self, value: T) -> VertexId {
        self.graph.add_vertex(value)
    }

    /// Add a vertex placed at `coordinate`.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::DuplicateCoordinate`] if another vertex already occupies
    /// `coordinate`. The builder is left unchanged.
    pub fn vertex_at(&mut self, coordinate: Coordinate, value: T) -> Result<VertexId, LatticeError> {
        if let Some(&existing) = self.vertex_by_coordinates.get(&coordinate) {
            return Err(LatticeError::DuplicateCoordinate {
                coordinate,
                existing,
            });
        }
        Ok(self.place(coordinate, value))
    }

    /// Place a vertex at a coordinate known to be free.
    fn place(&mut self, coordinate: Coordinate, value: T) -> VertexId {
        let id = self.graph.add_vertex(value);
        self.coordinates_by_vertex.insert(id, coordinate);
        self.vertex_by_coordinates.insert(coordinate, id);
        id
    }

    /// Request an edge between two vertices. Edges naming unknown vertices are dropped at build
    /// time.
    pub fn edge(&mut self, first: VertexId, second: VertexId) -> &mut Self {
        self.edges.push((first, second));
        self
    }

    /// Wire the explicit edges, then connect every placed vertex to each geometric neighbor that
    /// is also placed.
    #[must_use]
    pub fn build(self, connectivity: Connectivity) -> LatticeGraph<T> {
        let Self {
            mut graph,
            coordinates_by_vertex,
            vertex_by_coordinates,
            edges,
        } = self;

        for (first, second) in edges {
            graph.add_edge(first, second);
        }
        for (&id, &coordinate) in &coordinates_by_vertex {
            for neighbor in connectivity.neighbors(coordinate) {
                if let Some(&neighbor) = vertex_by_coordinates.get(&neighbor) {
                    graph.add_edge(id, neighbor);
                }
            }
        }

        debug!(
            "built lattice graph with {} vertices and {} edges ({connectivity:?})",
            graph.size(),
            graph.edge_count()
        );
        LatticeGraph {
            graph,
            coordinates_by_vertex,
            vertex_by_coordinates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(connectivity: Connectivity) -> LatticeGraph<char> {
        let grid: Grid<char> = "ab\ncd".parse().expect("grid should parse");
        LatticeGraph::from_grid(&grid, connectivity)
    }

    fn at(graph: &LatticeGraph<char>, x: i64, y: i64) -> VertexId {
        graph
            .vertex_at(Coordinate::new(x, y))
            .expect("coordinate should be occupied")
    }

    #[test]
    fn from_grid_connects_cardinal_neighbors() {
        let graph = square(Connectivity::Cardinal);
        assert_eq!(graph.size(), 4);
        assert_eq!(graph.edge_count(), 4);

        let a = at(&graph, 0, 0);
        let d = at(&graph, 1, 1);
        assert_eq!(graph.vertex(a).map(|vertex| *vertex.value()), Some('a'));
        assert!(!graph.adjacent(a, d));
        assert_eq!(graph.neighbors(a), vec![at(&graph, 0, 1), at(&graph, 1, 0)]);
    }

    #[test]
    fn diagonal_connectivity_adds_corners() {
        let graph = square(Connectivity::Diagonal);
        assert_eq!(graph.edge_count(), 6);
        assert!(graph.adjacent(at(&graph, 0, 0), at(&graph, 1, 1)));
        assert!(graph.adjacent(at(&graph, 1, 0), at(&graph, 0, 1)));
    }

    #[test]
    fn direction_follows_coordinates() {
        let graph = square(Connectivity::Cardinal);
        let a = at(&graph, 0, 0);
        let b = at(&graph, 1, 0);
        let c = at(&graph, 0, 1);
        let d = at(&graph, 1, 1);
        assert_eq!(graph.direction(a, b), Some(Direction::Right));
        assert_eq!(graph.direction(b, a), Some(Direction::Left));
        assert_eq!(graph.direction(a, c), Some(Direction::Down));
        assert_eq!(graph.direction(c, a), Some(Direction::Up));
        assert_eq!(graph.direction(a, d), None);
    }

    #[test]
    fn neighbor_requires_an_edge() {
        let mut graph = square(Connectivity::Cardinal);
        let a = at(&graph, 0, 0);
        let b = at(&graph, 1, 0);
        assert_eq!(graph.neighbor(a, Direction::Right), Some(b));
        assert_eq!(graph.neighbor(a, Direction::Left), None);

        assert!(graph.remove_edge(a, b));
        assert_eq!(graph.neighbor(a, Direction::Right), None);
        assert_eq!(graph.direction(a, b), Some(Direction::Right));
    }

    #[test]
    fn builder_rejects_duplicate_coordinates() {
        let mut builder = LatticeGraphBuilder::new();
        let origin = Coordinate::origin();
        let first = builder.vertex_at(origin, 1).expect("origin should be free");
        assert_eq!(
            builder.vertex_at(origin, 2),
            Err(LatticeError::DuplicateCoordinate {
                coordinate: origin,
                existing: first
            })
        );
        assert_eq!(builder.build(Connectivity::Cardinal).size(), 1);
    }

    #[test]
    fn builder_wires_explicit_and_geometric_edges() -> Result<(), LatticeError> {
        let mut builder = LatticeGraphBuilder::new();
        let far = builder.vertex_at(Coordinate::new(10, 10), 'x')?;
        let hub = builder.vertex('h');
        let left = builder.vertex_at(Coordinate::new(0, 0), 'l')?;
        let right = builder.vertex_at(Coordinate::new(1, 0), 'r')?;
        builder.edge(hub, far).edge(hub, left);
        let graph = builder.build(Connectivity::Cardinal);

        assert!(graph.adjacent(left, right));
        assert!(graph.adjacent(far, hub));
        assert!(graph.adjacent(left, hub));
        assert_eq!(graph.coordinates(hub), None);
        assert_eq!(graph.edge_count(), 3);
        Ok(())
    }

    #[test]
    fn remove_vertex_clears_coordinates() {
        let mut graph = square(Connectivity::Cardinal);
        let a = at(&graph, 0, 0);
        assert!(graph.remove_vertex(a).is_some());
        assert_eq!(graph.vertex_at(Coordinate::origin()), None);
        assert_eq!(graph.coordinates(a), None);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn rows_columns_and_bounds() {
        let graph = square(Connectivity::Cardinal);
        let value = |id| graph.vertex(id).map(|vertex| *vertex.value());

        let rows: Vec<Vec<_>> = graph
            .rows()
            .into_iter()
            .map(|row| row.into_iter().map(value).collect())
            .collect();
        assert_eq!(rows, vec![vec![Some('a'), Some('b')], vec![Some('c'), Some('d')]]);

        let columns: Vec<Vec<_>> = graph
            .columns()
            .into_iter()
            .map(|column| column.into_iter().map(value).collect())
            .collect();
        assert_eq!(
            columns,
            vec![vec![Some('a'), Some('c')], vec![Some('b'), Some('d')]]
        );

        assert_eq!(
            graph.bounds(),
            Some((Coordinate::origin(), Coordinate::new(1, 1)))
        );
        assert_eq!(LatticeGraphBuilder::<()>::new().build(Connectivity::Cardinal).bounds(), None);
    }
}
