use crate::bail_invalid;
use crate::error::Result;
use crate::graph::algos::paths::ShortestPaths;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Cost, NodeId, TraversalOptions};
use crate::trace_time;
use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};
use std::time::Instant;

/// Frontier entry, ordered by accumulated cost then node id.
///
/// Wrapped in `Reverse` so the `BinaryHeap` pops the cheapest entry, with the
/// lowest node id winning ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeapEntry<N> {
    cost: Cost,
    node: N,
}

impl<N: NodeId> PartialOrd for HeapEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: NodeId> Ord for HeapEntry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// State tracked during Dijkstra traversal
struct DijkstraState<N> {
    distances: BTreeMap<N, Cost>,
    predecessors: BTreeMap<N, N>,
    finalized: BTreeSet<N>,
    heap: BinaryHeap<Reverse<HeapEntry<N>>>,
    relaxations: usize,
    stale_pops: usize,
}

impl<N: NodeId> DijkstraState<N> {
    fn new(nodes: Vec<N>, source: N) -> Self {
        let mut distances: BTreeMap<N, Cost> =
            nodes.into_iter().map(|node| (node, Cost::INFINITY)).collect();
        distances.insert(source, Cost::ZERO);

        let mut heap = BinaryHeap::new();
        heap.push(Reverse(HeapEntry {
            cost: Cost::ZERO,
            node: source,
        }));

        Self {
            distances,
            predecessors: BTreeMap::new(),
            finalized: BTreeSet::new(),
            heap,
            relaxations: 0,
            stale_pops: 0,
        }
    }

    fn distance(&self, node: N) -> Cost {
        self.distances.get(&node).copied().unwrap_or(Cost::INFINITY)
    }

    /// Pop the cheapest entry that is not yet finalized
    fn pop_frontier(&mut self) -> Option<HeapEntry<N>> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            if entry.cost > self.distance(entry.node) || self.finalized.contains(&entry.node) {
                self.stale_pops += 1;
                continue;
            }
            self.finalized.insert(entry.node);
            return Some(entry);
        }
        None
    }

    /// Record `candidate` for `neighbor` if it strictly improves on the current distance
    fn relax(&mut self, via: N, neighbor: N, candidate: Cost) {
        if candidate >= self.distance(neighbor) {
            return;
        }

        tracing::trace!(%via, %neighbor, cost = %candidate, "relax");
        self.distances.insert(neighbor, candidate);
        self.predecessors.insert(neighbor, via);
        self.heap.push(Reverse(HeapEntry {
            cost: candidate,
            node: neighbor,
        }));
        self.relaxations += 1;
    }
}

/// Single-source shortest distances from `init_node`, following outbound edges.
///
/// Every node of the graph appears in the result; nodes that cannot be
/// reached keep [`Cost::INFINITY`]. Fails with an invalid argument error when
/// `init_node` is not an endpoint of any edge.
pub fn dijkstra<N, G>(graph: &G, init_node: N) -> Result<ShortestPaths<N>>
where
    N: NodeId,
    G: GraphProvider<N> + ?Sized,
{
    dijkstra_with_options(graph, init_node, &TraversalOptions::default())
}

/// Dijkstra with explicit traversal options (direction, cost bound).
///
/// Relies on non-negative edge weights, which [`crate::graph::Edge::new`]
/// enforces.
#[tracing::instrument(skip_all, fields(init_node = %init_node, direction = %opts.direction, max_cost = ?opts.max_cost))]
pub fn dijkstra_with_options<N, G>(
    graph: &G,
    init_node: N,
    opts: &TraversalOptions,
) -> Result<ShortestPaths<N>>
where
    N: NodeId,
    G: GraphProvider<N> + ?Sized,
{
    opts.validate()?;

    if !graph.contains_node(init_node) {
        tracing::debug!(%init_node, "source node not present in graph");
        bail_invalid!("source node", format!("{} is not an endpoint of any edge", init_node));
    }

    let start = Instant::now();
    let mut state = DijkstraState::new(graph.node_ids(), init_node);

    while let Some(HeapEntry { cost, node }) = state.pop_frontier() {
        for (neighbor, weight) in graph.neighbors(node, opts.direction) {
            if state.finalized.contains(&neighbor) {
                continue;
            }

            let candidate = cost + weight;
            if !candidate.is_finite() {
                tracing::debug!(%node, %neighbor, "path cost overflows");
                bail_invalid!(
                    "graph",
                    format!("path cost to {} via {} is not finite", neighbor, node)
                );
            }
            if !opts.within_budget(candidate) {
                continue;
            }

            state.relax(node, neighbor, candidate);
        }
    }

    tracing::debug!(
        nodes = state.distances.len(),
        finalized = state.finalized.len(),
        relaxations = state.relaxations,
        stale_pops = state.stale_pops,
        "dijkstra complete"
    );
    trace_time!(start, "dijkstra", nodes = state.distances.len());

    Ok(ShortestPaths::new(
        init_node,
        state.distances,
        state.predecessors,
    ))
}
