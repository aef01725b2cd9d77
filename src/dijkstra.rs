// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::collections::{BinaryHeap, HashMap};

use log::{debug, trace};

use crate::{Edge, Graph, NodeId, RouteError};

#[derive(Debug, Clone, Copy)]
struct QueueItem {
    at: NodeId,
    cost: f64,
}

impl PartialEq for QueueItem {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl PartialOrd for QueueItem {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for QueueItem {}

impl Ord for QueueItem {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // NOTE: We revert the order of comparison,
        // as lower costs are considered better ("higher"),
        // and Rust's BinaryHeap is a max-heap.
        // Ties are broken by node id, so that equal-cost searches are deterministic.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.at.cmp(&self.at))
    }
}

/// Result of a [search]: the best known cost to every reached node,
/// and the node preceding it on the cheapest path.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SearchTree {
    costs: HashMap<NodeId, f64>,
    came_from: HashMap<NodeId, NodeId>,
}

impl SearchTree {
    /// Returns the cost of the cheapest known path to a node,
    /// or [f64::INFINITY] if the node was not reached.
    pub fn distance_to(&self, id: NodeId) -> f64 {
        self.costs.get(&id).cloned().unwrap_or(f64::INFINITY)
    }

    /// Returns the node preceding `id` on its cheapest known path.
    /// The search origin, and unreached nodes, have no predecessor.
    pub fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        self.came_from.get(&id).cloned()
    }

    /// Returns the number of nodes with a known cost, including the origin.
    pub fn reached(&self) -> usize {
        self.costs.len()
    }
}

/// Uses [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm)
/// to find the cheapest paths from `from_id` in the provided graph, minimizing [Edge::cost].
///
/// The search stops as soon as `to_id` is settled, so the returned [SearchTree] is only
/// guaranteed to be complete for `to_id` and nodes cheaper than it.
/// If `to_id` can't be reached, [SearchTree::distance_to] returns infinity for it -
/// use [reconstruct_path](crate::reconstruct_path) to turn the tree into a path.
pub fn search(g: &Graph, from_id: NodeId, to_id: NodeId) -> Result<SearchTree, RouteError> {
    if g.get_node(from_id).is_none() {
        return Err(RouteError::InvalidReference(from_id));
    }
    if g.get_node(to_id).is_none() {
        return Err(RouteError::InvalidReference(to_id));
    }

    let mut queue: BinaryHeap<QueueItem> = BinaryHeap::default();
    let mut tree = SearchTree::default();
    let mut steps: usize = 0;

    queue.push(QueueItem {
        at: from_id,
        cost: 0.0,
    });
    tree.costs.insert(from_id, 0.0);

    while let Some(item) = queue.pop() {
        // Multiple items may be kept in the queue for the same node; skip the stale ones.
        if item.cost > tree.distance_to(item.at) {
            continue;
        }

        steps += 1;
        if item.at == to_id {
            break;
        }

        for &Edge {
            to: neighbor_id,
            cost: edge_cost,
            ..
        } in g.get_edges(item.at)
        {
            let neighbor_cost = item.cost + edge_cost;
            if neighbor_cost >= tree.distance_to(neighbor_id) {
                continue;
            }

            trace!("relax {} via {}: {:.3}", neighbor_id, item.at, neighbor_cost);
            tree.came_from.insert(neighbor_id, item.at);
            tree.costs.insert(neighbor_id, neighbor_cost);
            queue.push(QueueItem {
                at: neighbor_id,
                cost: neighbor_cost,
            });
        }
    }

    debug!(
        "search {} -> {}: {} nodes settled, cost {:.3}",
        from_id,
        to_id,
        steps,
        tree.distance_to(to_id)
    );

    Ok(tree)
}
