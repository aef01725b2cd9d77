// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::{Edge, Node, NodeId};
use std::collections::btree_map::{BTreeMap, Entry};

/// Represents a synthesized waypoint network as a set of [Nodes](Node)
/// and directed [Edges](Edge) between them.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Graph(BTreeMap<NodeId, (Node, Vec<Edge>)>);

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of nodes in the graph.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of directed edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.0.values().map(|(_, edges)| edges.len()).sum()
    }

    /// Returns an iterator over all [Nodes](Node) in the graph, ordered by their id.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.0.values().map(|(node, _)| node)
    }

    /// Retrieves a [Node] with the provided id.
    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        self.0.get(&id).map(|(node, _)| node)
    }

    /// Creates or updates a [Node] with `node.id`.
    ///
    /// All outgoing and incoming edges are preserved, but their `distance`
    /// is not recomputed - moving a node which already has edges is disallowed.
    pub fn set_node(&mut self, node: Node) {
        match self.0.entry(node.id) {
            Entry::Vacant(e) => {
                e.insert((node, Vec::default()));
            }
            Entry::Occupied(mut e) => {
                debug_assert!(e.get().1.is_empty() || e.get().0.distance_to(&node) == 0.0);
                e.get_mut().0 = node;
            }
        }
    }

    /// Gets all outgoing [Edges](Edge) from a node with a given id.
    pub fn get_edges(&self, from_id: NodeId) -> &[Edge] {
        self.0
            .get(&from_id)
            .map(|(_, e)| e.as_slice())
            .unwrap_or_default()
    }

    /// Gets the cost of an [Edge] from one node to another.
    /// If such an edge doesn't exist, returns [f64::INFINITY].
    pub fn get_edge(&self, from_id: NodeId, to_id: NodeId) -> f64 {
        self.get_edges(from_id)
            .iter()
            .find(|edge| edge.to == to_id)
            .map(|edge| edge.cost)
            .unwrap_or(f64::INFINITY)
    }

    /// Creates or updates an [Edge] from a node with a given id.
    ///
    /// Returns false (and leaves the graph untouched) if either node
    /// doesn't exist, if the edge would be a self-loop, or if the edge
    /// has a negative or non-finite distance or cost.
    pub fn set_edge(&mut self, from_id: NodeId, edge: Edge) -> bool {
        if from_id == edge.to
            || !self.0.contains_key(&edge.to)
            || !(edge.cost.is_finite() && edge.cost >= 0.0)
            || !(edge.distance.is_finite() && edge.distance >= 0.0)
        {
            return false;
        }

        if let Some((_, edges)) = self.0.get_mut(&from_id) {
            if let Some(candidate) = edges.iter_mut().find(|e| e.to == edge.to) {
                *candidate = edge;
            } else {
                edges.push(edge);
            }
            true
        } else {
            false
        }
    }

    /// Connects two nodes in both directions with the same `cost`.
    /// The `distance` of both edges is the great-circle distance between the nodes.
    pub fn connect(&mut self, a: NodeId, b: NodeId, cost: f64) -> bool {
        let distance = match (self.get_node(a), self.get_node(b)) {
            (Some(na), Some(nb)) => na.distance_to(nb),
            _ => return false,
        };

        self.set_edge(
            a,
            Edge {
                to: b,
                distance,
                cost,
            },
        ) && self.set_edge(
            b,
            Edge {
                to: a,
                distance,
                cost,
            },
        )
    }

    /// Removes an edge from one node to another.
    pub fn delete_edge(&mut self, from_id: NodeId, to_id: NodeId) {
        if let Some((_, edges)) = self.0.get_mut(&from_id) {
            if let Some(idx) = edges.iter().position(|edge| edge.to == to_id) {
                edges.swap_remove(idx);
            }
        }
    }
}
