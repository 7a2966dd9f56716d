//! Grids, lattice graphs, and the algorithms grid puzzles lean on.
//!
//! # Quick Start
//!
//! Parse a character grid, turn it into a graph, and walk it:
//!
//! ```
//! use aoc_lattice::{
//!     BreadthFirst, Connectivity, Coordinate, Graph, Grid, LatticeGraph, Traversal,
//! };
//!
//! let grid: Grid<char> = "...\n.#.\n...".parse()?;
//! let mut graph = LatticeGraph::from_grid(&grid, Connectivity::Cardinal);
//!
//! // walls are not walkable
//! let wall = graph.vertex_at(Coordinate::new(1, 1)).expect("wall is in the grid");
//! graph.remove_vertex(wall);
//!
//! let start = graph.vertex_at(Coordinate::origin()).expect("start is in the grid");
//! let goal = graph.vertex_at(Coordinate::new(2, 2)).expect("goal is in the grid");
//! let mut walk = BreadthFirst::new(&graph, start);
//! let path = walk.path(goal).expect("goal is reachable");
//! assert_eq!(path.len(), 5);
//! # Ok::<(), aoc_lattice::GridError>(())
//! ```
//!
//! # Modules
//!
//! - [`coordinate`] and [`direction`] describe positions and steps on the lattice.
//! - [`grid`] holds dense rectangular data; [`graph`] and [`lattice`] hold arbitrary topologies.
//! - [`traversal`] walks graphs; [`geometry`] measures polygons and combines cycles.
//! - [`beam`] and [`tilt`] simulate light and gravity over grids.

#![warn(clippy::pedantic)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::branches_sharing_code,
    clippy::collection_is_never_read,
    clippy::equatable_if_let,
    clippy::needless_collect,
    clippy::needless_pass_by_ref_mut,
    clippy::option_if_let_else,
    clippy::set_contains_or_insert,
    clippy::use_self,
    clippy::useless_let_if_seq
)]
#![deny(clippy::print_stderr, clippy::print_stdout, clippy::unwrap_used)]

pub mod beam;
pub mod coordinate;
pub mod direction;
pub mod geometry;
pub mod graph;
pub mod grid;
pub mod lattice;
pub mod tilt;
pub mod traversal;

pub use coordinate::Coordinate;
pub use direction::Direction;
pub use graph::{AdjacencyListGraph, Graph, Vertex, VertexId};
pub use grid::{Grid, GridError, Node};
pub use lattice::{Connectivity, LatticeError, LatticeGraph, LatticeGraphBuilder};
pub use traversal::{BreadthFirst, DepthFirst, InsertOrder, Traversal};
