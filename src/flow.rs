use std::collections::HashSet;

use log::{debug, trace};
use pathfinding::prelude::{bfs, bfs_reach};
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use thiserror::Error;

pub type Vertex = NodeIndex;
pub type Edge = EdgeIndex;

/// Edge capacity. `Unbounded` never limits an augmentation.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Capacity {
    Finite(i64),
    Unbounded,
}

impl Capacity {
    pub fn is_positive(self) -> bool {
        match self {
            Capacity::Finite(c) => c > 0,
            Capacity::Unbounded => true,
        }
    }
    fn minus(self, flow: i64) -> Capacity {
        match self {
            Capacity::Finite(c) => Capacity::Finite(c - flow),
            Capacity::Unbounded => Capacity::Unbounded,
        }
    }
}

impl From<i64> for Capacity {
    fn from(c: i64) -> Self {
        Capacity::Finite(c)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("source and sink are the same vertex")]
    SourceIsSink,
    #[error("found a source-sink path of unbounded capacity")]
    UnboundedPath,
}

#[derive(Clone, Copy, Debug)]
struct Link {
    capacity: Capacity,
    flow: i64,
}

impl Link {
    fn residual(&self) -> Capacity {
        self.capacity.minus(self.flow)
    }
}

/// Directed capacitated graph kept in residual form.
///
/// Every edge added through [`FlowNetwork::add_edge`] is stored next to a
/// zero-capacity twin running the other way, so edge `2k` and `2k + 1` are
/// always a forward/backward pair.
#[derive(Clone, Debug, Default)]
pub struct FlowNetwork {
    graph: DiGraph<(), Link>,
}

impl FlowNetwork {
    pub fn new() -> Self {
        FlowNetwork {
            graph: DiGraph::new(),
        }
    }
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        FlowNetwork {
            graph: DiGraph::with_capacity(vertices, 2 * edges),
        }
    }
    pub fn add_vertex(&mut self) -> Vertex {
        self.graph.add_node(())
    }
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count() / 2
    }
    /// Panics if either endpoint is not a vertex of this network, or if the
    /// capacity is negative.
    pub fn add_edge(&mut self, from: Vertex, to: Vertex, capacity: Capacity) -> Edge {
        let n = self.vertex_count();
        assert!(
            from.index() < n && to.index() < n,
            "edge {} -> {} references a vertex outside 0..{}",
            from.index(),
            to.index(),
            n
        );
        if let Capacity::Finite(c) = capacity {
            assert!(
                c >= 0,
                "negative capacity {} on edge {} -> {}",
                c,
                from.index(),
                to.index()
            );
        }
        let forward = self.graph.add_edge(from, to, Link { capacity, flow: 0 });
        self.graph.add_edge(
            to,
            from,
            Link {
                capacity: Capacity::Finite(0),
                flow: 0,
            },
        );
        forward
    }
    pub fn capacity(&self, edge: Edge) -> Capacity {
        self.graph[edge].capacity
    }
    pub fn endpoints(&self, edge: Edge) -> Option<(Vertex, Vertex)> {
        self.graph.edge_endpoints(edge)
    }
    /// Edges added by the caller, without their residual twins.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.graph.edge_indices().step_by(2)
    }
    fn twin(edge: Edge) -> Edge {
        EdgeIndex::new(edge.index() ^ 1)
    }
    fn residual_successors(&self, v: Vertex) -> impl Iterator<Item = Vertex> + '_ {
        self.graph
            .edges(v)
            .filter(|e| e.weight().residual().is_positive())
            .map(|e| e.target())
    }
    // Elimination networks never join two vertices twice, but arbitrary
    // networks can: repeated edges, or the twin of an antiparallel edge.
    fn widest_residual_edge(&self, from: Vertex, to: Vertex) -> Option<(Edge, Capacity)> {
        self.graph
            .edges_connecting(from, to)
            .map(|e| (e.id(), e.weight().residual()))
            .filter(|(_, residual)| residual.is_positive())
            .max_by_key(|(_, residual)| *residual)
    }
    fn push(&mut self, edge: Edge, amount: i64) {
        self.graph[edge].flow += amount;
        self.graph[Self::twin(edge)].flow -= amount;
    }
}

/// A maximum flow together with the minimum cut it certifies.
#[derive(Clone, Debug)]
pub struct MaxFlow {
    network: FlowNetwork,
    source: Vertex,
    sink: Vertex,
    value: i64,
    source_side: HashSet<Vertex>,
}

impl MaxFlow {
    /// Edmonds-Karp: augment along a shortest residual path until the sink
    /// is unreachable, which bounds the number of augmentations by
    /// `O(V * E)` regardless of the capacities.
    pub fn solve(
        mut network: FlowNetwork,
        source: Vertex,
        sink: Vertex,
    ) -> Result<Self, FlowError> {
        let n = network.vertex_count();
        assert!(
            source.index() < n && sink.index() < n,
            "terminals {} and {} must be vertices of a network with {} vertices",
            source.index(),
            sink.index(),
            n
        );
        if source == sink {
            return Err(FlowError::SourceIsSink);
        }
        let mut value = 0;
        let mut augmentations = 0usize;
        loop {
            let path = bfs(&source, |&v| network.residual_successors(v), |&v| v == sink);
            let Some(path) = path else {
                break;
            };
            let hops: Vec<(Edge, Capacity)> = path
                .windows(2)
                .map(|pair| {
                    network
                        .widest_residual_edge(pair[0], pair[1])
                        .expect("bfs only steps along positive residual edges")
                })
                .collect();
            let bottleneck = hops
                .iter()
                .map(|(_, residual)| *residual)
                .min()
                .unwrap_or(Capacity::Unbounded);
            let Capacity::Finite(amount) = bottleneck else {
                return Err(FlowError::UnboundedPath);
            };
            for (edge, _) in hops {
                network.push(edge, amount);
            }
            trace!("augmented {} along a path of {} vertices", amount, path.len());
            value += amount;
            augmentations += 1;
        }
        let source_side = bfs_reach(source, |&v| network.residual_successors(v)).collect();
        debug!(
            "max flow {} over {} vertices after {} augmentations",
            value, n, augmentations
        );
        Ok(MaxFlow {
            network,
            source,
            sink,
            value,
            source_side,
        })
    }
    pub fn value(&self) -> i64 {
        self.value
    }
    pub fn source(&self) -> Vertex {
        self.source
    }
    pub fn sink(&self) -> Vertex {
        self.sink
    }
    /// Whether `v` is reachable from the source in the final residual graph.
    pub fn in_source_side(&self, v: Vertex) -> bool {
        self.source_side.contains(&v)
    }
    /// Flow carried by an edge added through [`FlowNetwork::add_edge`].
    pub fn flow(&self, edge: Edge) -> i64 {
        self.network.graph[edge].flow
    }
    pub fn network(&self) -> &FlowNetwork {
        &self.network
    }
    /// Total capacity of the edges leaving the source side.
    pub fn cut_capacity(&self) -> Capacity {
        let mut total = 0;
        for edge in self.network.edges() {
            let Some((from, to)) = self.network.endpoints(edge) else {
                continue;
            };
            if !self.in_source_side(from) || self.in_source_side(to) {
                continue;
            }
            match self.network.capacity(edge) {
                Capacity::Finite(c) => total += c,
                Capacity::Unbounded => return Capacity::Unbounded,
            }
        }
        Capacity::Finite(total)
    }
}
