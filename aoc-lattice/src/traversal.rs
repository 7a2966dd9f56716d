//! Iterator-style walks over a [`Graph`].
//!
//! Each traversal yields every reachable vertex exactly once and remembers how it reached each
//! one, so a path back to the starting vertex can be rebuilt afterwards.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::graph::{Graph, VertexId};

/// A walk over a graph that records its visitation order.
pub trait Traversal: Iterator<Item = VertexId> {
    /// The vertices produced so far, in the order they were produced.
    fn visited(&self) -> &[VertexId];

    /// The vertex from which `id` was reached, or `None` for the starting vertex and for any vertex
    /// not yet reached.
    fn predecessor(&self, id: VertexId) -> Option<VertexId>;

    /// Advance until `destination` is produced, then rebuild the path leading to it from the
    /// starting vertex, both ends included.
    ///
    /// Returns `None` if the traversal ends without reaching `destination`.
    fn path(&mut self, destination: VertexId) -> Option<Vec<VertexId>>
    where
        Self: Sized,
    {
        if !self.visited().contains(&destination) {
            self.find(|&id| id == destination)?;
        }

        let mut path = vec![destination];
        let mut current = destination;
        while let Some(previous) = self.predecessor(current) {
            path.push(previous);
            current = previous;
        }
        path.reverse();
        Some(path)
    }
}

/// Breadth-first traversal, yielding vertices in order of hop count from the root.
pub struct BreadthFirst<'g, T> {
    graph: &'g dyn Graph<T>,
    queue: VecDeque<VertexId>,
    /// Predecessor and hop count of every vertex discovered so far.
    discovered: HashMap<VertexId, (Option<VertexId>, usize)>,
    order: Vec<VertexId>,
}

impl<'g, T> BreadthFirst<'g, T> {
    /// Start a traversal at `root`. A root not in the graph yields nothing.
    pub fn new(graph: &'g dyn Graph<T>, root: VertexId) -> Self {
        let mut traversal = Self {
            graph,
            queue: VecDeque::new(),
            discovered: HashMap::new(),
            order: Vec::new(),
        };
        if graph.vertex(root).is_some() {
            traversal.queue.push_back(root);
            traversal.discovered.insert(root, (None, 0));
        }
        traversal
    }

    /// The number of edges on a shortest path from the root to `id`, once `id` has been
    /// discovered.
    #[must_use]
    pub fn distance(&self, id: VertexId) -> Option<usize> {
        self.discovered.get(&id).map(|&(_, distance)| distance)
    }
}

impl<T> Iterator for BreadthFirst<'_, T> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.queue.pop_front()?;
        let depth = self.distance(id).unwrap_or_default();
        for neighbor in self.graph.neighbors(id) {
            if !self.discovered.contains_key(&neighbor) {
                self.discovered.insert(neighbor, (Some(id), depth + 1));
                self.queue.push_back(neighbor);
            }
        }
        self.order.push(id);
        Some(id)
    }
}

impl<T> Traversal for BreadthFirst<'_, T> {
    fn visited(&self) -> &[VertexId] {
        &self.order
    }

    fn predecessor(&self, id: VertexId) -> Option<VertexId> {
        self.discovered.get(&id).and_then(|&(predecessor, _)| predecessor)
    }
}

/// Depth-first traversal.
///
/// Among a vertex's unvisited neighbors the first one added is explored first, but callers
/// should treat the order at branch points as unspecified.
pub struct DepthFirst<'g, T> {
    graph: &'g dyn Graph<T>,
    stack: Vec<(VertexId, Option<VertexId>)>,
    seen: HashSet<VertexId>,
    predecessors: HashMap<VertexId, VertexId>,
    order: Vec<VertexId>,
}

impl<'g, T> DepthFirst<'g, T> {
    /// Start a traversal at `root`. A root not in the graph yields nothing.
    pub fn new(graph: &'g dyn Graph<T>, root: VertexId) -> Self {
        let stack = if graph.vertex(root).is_some() {
            vec![(root, None)]
        } else {
            Vec::new()
        };
        Self {
            graph,
            stack,
            seen: HashSet::new(),
            predecessors: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<T> Iterator for DepthFirst<'_, T> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (id, predecessor) = self.stack.pop()?;
            if !self.seen.insert(id) {
                continue;
            }
            if let Some(predecessor) = predecessor {
                self.predecessors.insert(id, predecessor);
            }

            let unseen: Vec<_> = self
                .graph
                .neighbors(id)
                .into_iter()
                .filter(|neighbor| !self.seen.contains(neighbor))
                .collect();
            self.stack
                .extend(unseen.into_iter().rev().map(|neighbor| (neighbor, Some(id))));

            self.order.push(id);
            return Some(id);
        }
    }
}

impl<T> Traversal for DepthFirst<'_, T> {
    fn visited(&self) -> &[VertexId] {
        &self.order
    }

    fn predecessor(&self, id: VertexId) -> Option<VertexId> {
        self.predecessors.get(&id).copied()
    }
}

/// Traversal in vertex insertion order, ignoring edges entirely.
///
/// The predecessor of each vertex is the one produced just before it.
pub struct InsertOrder<'g, T> {
    graph: &'g dyn Graph<T>,
    current: Option<VertexId>,
    order: Vec<VertexId>,
    /// Position of each produced vertex in `order`.
    positions: HashMap<VertexId, usize>,
}

impl<'g, T> InsertOrder<'g, T> {
    /// Start a traversal at `root`. A root not in the graph yields nothing.
    pub fn new(graph: &'g dyn Graph<T>, root: VertexId) -> Self {
        Self {
            graph,
            current: graph.vertex(root).map(|_| root),
            order: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Start a traversal at the graph's first vertex.
    pub fn from_root(graph: &'g dyn Graph<T>) -> Self {
        Self {
            graph,
            current: graph.root(),
            order: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<T> Iterator for InsertOrder<'_, T> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.graph.next(id);
        self.positions.insert(id, self.order.len());
        self.order.push(id);
        Some(id)
    }
}

impl<T> Traversal for InsertOrder<'_, T> {
    fn visited(&self) -> &[VertexId] {
        &self.order
    }

    fn predecessor(&self, id: VertexId) -> Option<VertexId> {
        let index = self.positions.get(&id)?;
        index
            .checked_sub(1)
            .and_then(|previous| self.order.get(previous).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AdjacencyListGraph;

    /// A diamond `a - b, a - c, b - d, c - d` with a tail `d - e` and an isolated `f`.
    fn diamond() -> (AdjacencyListGraph<char>, Vec<VertexId>) {
        let mut graph = AdjacencyListGraph::new();
        let ids: Vec<_> = "abcdef".chars().map(|value| graph.add_vertex(value)).collect();
        for (first, second) in [(0, 1), (0, 2), (1, 3), (2, 3), (3, 4)] {
            graph.add_edge(ids[first], ids[second]);
        }
        (graph, ids)
    }

    #[test]
    fn breadth_first_visits_by_layer() {
        let (graph, ids) = diamond();
        let mut traversal = BreadthFirst::new(&graph, ids[0]);
        let order: Vec<_> = traversal.by_ref().collect();
        assert_eq!(order, vec![ids[0], ids[1], ids[2], ids[3], ids[4]]);
        assert_eq!(traversal.visited(), order.as_slice());

        assert_eq!(traversal.distance(ids[0]), Some(0));
        assert_eq!(traversal.distance(ids[3]), Some(2));
        assert_eq!(traversal.distance(ids[4]), Some(3));
        assert_eq!(traversal.distance(ids[5]), None);
    }

    #[test]
    fn breadth_first_path_is_shortest() {
        let (graph, ids) = diamond();
        let path = BreadthFirst::new(&graph, ids[0]).path(ids[4]);
        assert_eq!(path, Some(vec![ids[0], ids[1], ids[3], ids[4]]));
    }

    #[test]
    fn path_to_unreachable_vertex_is_none() {
        let (graph, ids) = diamond();
        assert_eq!(BreadthFirst::new(&graph, ids[0]).path(ids[5]), None);
        assert_eq!(DepthFirst::new(&graph, ids[0]).path(ids[5]), None);
    }

    #[test]
    fn path_after_exhaustion_still_rebuilds() {
        let (graph, ids) = diamond();
        let mut traversal = BreadthFirst::new(&graph, ids[0]);
        assert_eq!(traversal.by_ref().count(), 5);
        assert_eq!(traversal.path(ids[2]), Some(vec![ids[0], ids[2]]));
        assert_eq!(traversal.path(ids[0]), Some(vec![ids[0]]));
    }

    #[test]
    fn depth_first_follows_a_branch_before_backtracking() {
        let (graph, ids) = diamond();
        let order: Vec<_> = DepthFirst::new(&graph, ids[0]).collect();
        assert_eq!(order, vec![ids[0], ids[1], ids[3], ids[2], ids[4]]);
    }

    #[test]
    fn depth_first_walks_a_cycle_in_order() {
        let mut graph = AdjacencyListGraph::new();
        let ids: Vec<_> = (0..6).map(|value| graph.add_vertex(value)).collect();
        for index in 0..ids.len() {
            graph.add_edge(ids[index], ids[(index + 1) % ids.len()]);
        }

        let mut traversal = DepthFirst::new(&graph, ids[0]);
        let order: Vec<_> = traversal.by_ref().collect();
        assert_eq!(order, ids);
        assert_eq!(traversal.predecessor(ids[5]), Some(ids[4]));
        assert_eq!(traversal.predecessor(ids[0]), None);
    }

    #[test]
    fn insert_order_ignores_edges() {
        let (graph, ids) = diamond();
        let order: Vec<_> = InsertOrder::new(&graph, ids[2]).collect();
        assert_eq!(order, ids[2..].to_vec());

        let mut traversal = graph.iter();
        assert_eq!(traversal.path(ids[2]), Some(ids[..3].to_vec()));
    }

    #[test]
    fn insert_order_predecessors_over_a_long_run() {
        let mut graph = AdjacencyListGraph::new();
        let ids: Vec<_> = (0..5_000).map(|value| graph.add_vertex(value)).collect();

        let mut traversal = InsertOrder::from_root(&graph);
        assert_eq!(traversal.predecessor(ids[1]), None);
        let path = traversal.path(ids[4_999]).expect("every vertex is produced");
        assert_eq!(path, ids);
        for window in ids.windows(2) {
            assert_eq!(traversal.predecessor(window[1]), Some(window[0]));
        }
        assert_eq!(traversal.predecessor(ids[0]), None);
    }

    #[test]
    fn missing_root_yields_nothing() {
        let (mut graph, ids) = diamond();
        graph.remove_vertex(ids[0]);
        assert_eq!(BreadthFirst::new(&graph, ids[0]).count(), 0);
        assert_eq!(DepthFirst::new(&graph, ids[0]).count(), 0);
        assert_eq!(InsertOrder::new(&graph, ids[0]).count(), 0);
    }
}
