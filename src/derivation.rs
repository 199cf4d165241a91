/*!
A record of the resolution steps taken during a refutation.

The record is a directed graph whose nodes are [clause keys](ClauseKey).
Each resolution step adds an edge from each of its two operands to the resolvent, weighted by the index of the step.

Nodes without incoming edges are the clauses a derivation rests on, i.e. original clauses and the clause of a negated query.
*/

use petgraph::{
    graph::{DiGraph, NodeIndex},
    visit::{Dfs, EdgeRef, Reversed},
    Direction,
};
use slotmap::SecondaryMap;

use crate::db::ClauseKey;

/// A resolution step, in terms of clause keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolutionStep {
    pub left: ClauseKey,
    pub right: ClauseKey,
    pub resolvent: ClauseKey,
}

#[derive(Default)]
pub struct Derivation {
    graph: DiGraph<ClauseKey, usize>,
    nodes: SecondaryMap<ClauseKey, NodeIndex>,
    resolutions: Vec<NodeIndex>,
}

impl Derivation {
    /// The node of the clause, added if not already present.
    pub fn add_clause(&mut self, key: ClauseKey) -> NodeIndex {
        match self.nodes.get(key) {
            Some(node) => *node,
            None => {
                let node = self.graph.add_node(key);
                self.nodes.insert(key, node);
                node
            }
        }
    }

    /// Records that `resolvent` was derived from `left` and `right`.
    pub fn add_resolution(&mut self, left: ClauseKey, right: ClauseKey, resolvent: ClauseKey) {
        let step = self.resolutions.len();

        let left_node = self.add_clause(left);
        let right_node = self.add_clause(right);
        let resolvent_node = self.add_clause(resolvent);

        self.graph.add_edge(left_node, resolvent_node, step);
        self.graph.add_edge(right_node, resolvent_node, step);
        self.resolutions.push(resolvent_node);
    }

    /// The count of resolution steps.
    pub fn step_count(&self) -> usize {
        self.resolutions.len()
    }

    /// The resolution steps, in the order taken.
    pub fn steps(&self) -> Vec<ResolutionStep> {
        self.resolutions
            .iter()
            .filter_map(|resolvent_node| {
                let mut premises = self
                    .graph
                    .edges_directed(*resolvent_node, Direction::Incoming)
                    .collect::<Vec<_>>();
                // Edges are indexed in order of addition, and the left edge is added first.
                premises.sort_by_key(|edge| edge.id());

                match premises.as_slice() {
                    [left, right] => Some(ResolutionStep {
                        left: self.graph[left.source()],
                        right: self.graph[right.source()],
                        resolvent: self.graph[*resolvent_node],
                    }),
                    _ => None,
                }
            })
            .collect()
    }

    /// The clauses without premises from which the given clause descends, including the clause itself if it has no premises.
    pub fn ancestors(&self, key: ClauseKey) -> Vec<ClauseKey> {
        let Some(start) = self.nodes.get(key) else {
            return Vec::default();
        };

        let reversed = Reversed(&self.graph);
        let mut dfs = Dfs::new(reversed, *start);
        let mut the_ancestors = Vec::default();

        while let Some(node) = dfs.next(reversed) {
            let mut premises = self.graph.neighbors_directed(node, Direction::Incoming);
            if premises.next().is_none() {
                the_ancestors.push(self.graph[node]);
            }
        }

        the_ancestors
    }
}
