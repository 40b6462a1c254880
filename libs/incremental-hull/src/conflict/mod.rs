//! # Bipartite Conflict Graph
//!
//! Two-sided adjacency between U-nodes and V-nodes. The hull builder uses
//! not-yet-inserted points as U-nodes and current hull faces as V-nodes; an
//! arc `(p, f)` records that `p` sees `f`.
//!
//! Both sides are kept in ordered maps keyed by the node values, so
//! iteration order is deterministic and no index bookkeeping has to follow
//! mesh mutations. Deleting a node removes every arc touching it.

use std::collections::{BTreeMap, BTreeSet};

/// Bipartite graph with set-valued adjacency on both sides.
///
/// ## Example
///
/// ```rust
/// use incremental_hull::conflict::BipartiteGraph;
///
/// let mut graph: BipartiteGraph<u32, char> = BipartiteGraph::new();
/// graph.add_u_node(1);
/// graph.add_v_node('a');
/// assert!(graph.add_arc(1, 'a'));
/// assert!(!graph.add_arc(1, 'a'));
/// assert_eq!(graph.u_degree(&1), 1);
/// graph.delete_v_node(&'a');
/// assert_eq!(graph.u_degree(&1), 0);
/// ```
#[derive(Debug, Clone)]
pub struct BipartiteGraph<U, V> {
    u_nodes: BTreeMap<U, BTreeSet<V>>,
    v_nodes: BTreeMap<V, BTreeSet<U>>,
}

impl<U: Ord + Copy, V: Ord + Copy> BipartiteGraph<U, V> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            u_nodes: BTreeMap::new(),
            v_nodes: BTreeMap::new(),
        }
    }

    /// Adds a U-node; returns false if it was already present.
    pub fn add_u_node(&mut self, u: U) -> bool {
        if self.u_nodes.contains_key(&u) {
            return false;
        }
        self.u_nodes.insert(u, BTreeSet::new());
        true
    }

    /// Adds a V-node; returns false if it was already present.
    pub fn add_v_node(&mut self, v: V) -> bool {
        if self.v_nodes.contains_key(&v) {
            return false;
        }
        self.v_nodes.insert(v, BTreeSet::new());
        true
    }

    /// Adds the arc `(u, v)`.
    ///
    /// Returns false when either endpoint is missing or the arc already
    /// exists.
    pub fn add_arc(&mut self, u: U, v: V) -> bool {
        if !self.v_nodes.contains_key(&v) {
            return false;
        }
        let Some(faces) = self.u_nodes.get_mut(&u) else {
            return false;
        };
        if !faces.insert(v) {
            return false;
        }
        if let Some(points) = self.v_nodes.get_mut(&v) {
            points.insert(u);
        }
        true
    }

    /// Removes the arc `(u, v)`; returns false if it did not exist.
    pub fn delete_arc(&mut self, u: &U, v: &V) -> bool {
        let removed = self
            .u_nodes
            .get_mut(u)
            .is_some_and(|faces| faces.remove(v));
        if removed {
            if let Some(points) = self.v_nodes.get_mut(v) {
                points.remove(u);
            }
        }
        removed
    }

    /// Removes a U-node and all its arcs; returns false if it was absent.
    pub fn delete_u_node(&mut self, u: &U) -> bool {
        let Some(faces) = self.u_nodes.remove(u) else {
            return false;
        };
        for v in &faces {
            if let Some(points) = self.v_nodes.get_mut(v) {
                points.remove(u);
            }
        }
        true
    }

    /// Removes a V-node and all its arcs; returns false if it was absent.
    pub fn delete_v_node(&mut self, v: &V) -> bool {
        let Some(points) = self.v_nodes.remove(v) else {
            return false;
        };
        for u in &points {
            if let Some(faces) = self.u_nodes.get_mut(u) {
                faces.remove(v);
            }
        }
        true
    }

    /// V-nodes adjacent to `u` (empty if `u` is absent).
    pub fn adjacent_v_nodes(&self, u: &U) -> impl Iterator<Item = V> + '_ {
        self.u_nodes.get(u).into_iter().flatten().copied()
    }

    /// U-nodes adjacent to `v` (empty if `v` is absent).
    pub fn adjacent_u_nodes(&self, v: &V) -> impl Iterator<Item = U> + '_ {
        self.v_nodes.get(v).into_iter().flatten().copied()
    }

    /// Number of arcs at `u`.
    pub fn u_degree(&self, u: &U) -> usize {
        self.u_nodes.get(u).map_or(0, BTreeSet::len)
    }

    /// Number of arcs at `v`.
    pub fn v_degree(&self, v: &V) -> usize {
        self.v_nodes.get(v).map_or(0, BTreeSet::len)
    }

    /// True if `u` is a U-node.
    pub fn contains_u(&self, u: &U) -> bool {
        self.u_nodes.contains_key(u)
    }

    /// True if `v` is a V-node.
    pub fn contains_v(&self, v: &V) -> bool {
        self.v_nodes.contains_key(v)
    }

    /// True if the arc `(u, v)` exists.
    pub fn has_arc(&self, u: &U, v: &V) -> bool {
        self.u_nodes.get(u).is_some_and(|faces| faces.contains(v))
    }

    /// Number of U-nodes.
    pub fn u_count(&self) -> usize {
        self.u_nodes.len()
    }

    /// Number of V-nodes.
    pub fn v_count(&self) -> usize {
        self.v_nodes.len()
    }

    /// Total number of arcs.
    pub fn arc_count(&self) -> usize {
        self.u_nodes.values().map(BTreeSet::len).sum()
    }

    /// U-nodes in ascending order.
    pub fn u_nodes(&self) -> impl Iterator<Item = U> + '_ {
        self.u_nodes.keys().copied()
    }

    /// V-nodes in ascending order.
    pub fn v_nodes(&self) -> impl Iterator<Item = V> + '_ {
        self.v_nodes.keys().copied()
    }
}

impl<U: Ord + Copy, V: Ord + Copy> Default for BipartiteGraph<U, V> {
    fn default() -> Self {
        Self::new()
    }
}
