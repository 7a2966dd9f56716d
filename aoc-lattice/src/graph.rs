//! Undirected graphs with stable vertex identities.

use std::fmt::Display;
use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};

use crate::traversal::InsertOrder;

/// The identity of a vertex within a single graph.
///
/// Ids are assigned from a counter in insertion order and are never reused, even after the vertex
/// they named is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(usize);

impl VertexId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A graph vertex: an id plus a payload.
///
/// Only the id takes part in equality and hashing, so equal payloads remain distinct vertices.
#[derive(Debug, Clone)]
pub struct Vertex<T> {
    id: VertexId,
    value: T,
}

impl<T> Vertex<T> {
    #[must_use]
    pub fn id(&self) -> VertexId {
        self.id
    }

    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T> PartialEq for Vertex<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for Vertex<T> {}

impl<T> Hash for Vertex<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Operations common to undirected graphs.
///
/// Edges are symmetric: whenever `b` is among the neighbors of `a`, `a` is among the neighbors of
/// `b`. Edge operations naming a vertex not in the graph have no effect.
pub trait Graph<T> {
    /// Add a vertex holding `value`, returning its new id.
    fn add_vertex(&mut self, value: T) -> VertexId;

    /// Connect two vertices.
    fn add_edge(&mut self, first: VertexId, second: VertexId);

    /// Remove a vertex and every edge touching it.
    fn remove_vertex(&mut self, id: VertexId) -> Option<Vertex<T>>;

    /// Disconnect two vertices, returning whether an edge was removed.
    fn remove_edge(&mut self, first: VertexId, second: VertexId) -> bool;

    /// The vertices sharing an edge with `id`, in the order their edges were added.
    fn neighbors(&self, id: VertexId) -> Vec<VertexId>;

    /// Whether an edge connects the two vertices.
    fn adjacent(&self, first: VertexId, second: VertexId) -> bool;

    /// The earliest inserted vertex still in the graph.
    fn root(&self) -> Option<VertexId>;

    /// The vertex inserted after `id`, skipping any that were removed.
    fn next(&self, id: VertexId) -> Option<VertexId>;

    /// The number of vertices.
    fn size(&self) -> usize;

    fn vertex(&self, id: VertexId) -> Option<&Vertex<T>>;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Iterate vertex ids in insertion order.
    fn iter(&self) -> InsertOrder<'_, T>
    where
        Self: Sized,
    {
        InsertOrder::from_root(self)
    }
}

/// A [`Graph`] storing each vertex alongside the set of its neighbors.
#[derive(Debug, Clone)]
pub struct AdjacencyListGraph<T> {
    vertices: IndexMap<VertexId, (Vertex<T>, IndexSet<VertexId>)>,
    next_id: usize,
}

impl<T> Default for AdjacencyListGraph<T> {
    fn default() -> Self {
        Self {
            vertices: IndexMap::new(),
            next_id: 0,
        }
    }
}

impl<T> AdjacencyListGraph<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of distinct edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        let (loops, ends) = self
            .vertices
            .iter()
            .fold((0, 0), |(loops, ends), (id, (_, edges))| {
                (loops + usize::from(edges.contains(id)), ends + edges.len())
            });
        (ends - loops) / 2 + loops
    }
}

impl<T> Graph<T> for AdjacencyListGraph<T> {
    fn add_vertex(&mut self, value: T) -> VertexId {
        let id = VertexId(self.next_id);
        self.next_id += 1;
        self.vertices
            .insert(id, (Vertex { id, value }, IndexSet::new()));
        id
    }

    fn add_edge(&mut self, first: VertexId, second: VertexId) {
        if !(self.vertices.contains_key(&first) && self.vertices.contains_key(&second)) {
            return;
        }
        if let Some((_, edges)) = self.vertices.get_mut(&first) {
            edges.insert(second);
        }
        if let Some((_, edges)) = self.vertices.get_mut(&second) {
            edges.insert(first);
        }
    }

    fn remove_vertex(&mut self, id: VertexId) -> Option<Vertex<T>> {
        let (vertex, edges) = self.vertices.shift_remove(&id)?;
        for neighbor in edges {
            if let Some((_, neighbor_edges)) = self.vertices.get_mut(&neighbor) {
                neighbor_edges.shift_remove(&id);
            }
        }
        Some(vertex)
    }

    fn remove_edge(&mut self, first: VertexId, second: VertexId) -> bool {
        if !self.adjacent(first, second) {
            return false;
        }
        if let Some((_, edges)) = self.vertices.get_mut(&first) {
            edges.shift_remove(&second);
        }
        if let Some((_, edges)) = self.vertices.get_mut(&second) {
            edges.shift_remove(&first);
        }
        true
    }

    fn neighbors(&self, id: VertexId) -> Vec<VertexId> {
        self.vertices
            .get(&id)
            .map(|(_, edges)| edges.iter().copied().collect())
            .unwrap_or_default()
    }

    fn adjacent(&self, first: VertexId, second: VertexId) -> bool {
        self.vertices
            .get(&first)
            .is_some_and(|(_, edges)| edges.contains(&second))
    }

    fn root(&self) -> Option<VertexId> {
        self.vertices.first().map(|(id, _)| *id)
    }

    fn next(&self, id: VertexId) -> Option<VertexId> {
        let index = self.vertices.get_index_of(&id)?;
        self.vertices.get_index(index + 1).map(|(id, _)| *id)
    }

    fn size(&self) -> usize {
        self.vertices.len()
    }

    fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.vertices.get(&id).map(|(vertex, _)| vertex)
    }
}
