//! Origin graph construction and insight rendering.

use std::collections::{HashMap, HashSet};

use depsight_core::component::{ComponentIdentifier, ComponentSelector};
use depsight_core::edge::DependencyEdge;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use crate::matcher::VersionComparator;
use crate::ordering::is_strict_match;

/// Which component declared which, built from the edges of a report.
///
/// Graph edges point from the declaring component (`from`) to the
/// resolved one (`actual`).
pub struct OriginGraph {
    graph: DiGraph<ComponentIdentifier, ()>,
    index: HashMap<ComponentIdentifier, NodeIndex>,
}

impl OriginGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            index: HashMap::new(),
        }
    }

    pub fn from_edges(edges: &[DependencyEdge]) -> Self {
        let mut g = Self::new();
        for edge in edges {
            let from = g.add_node(edge.from.clone());
            let actual = g.add_node(edge.actual.clone());
            g.add_edge(from, actual);
        }
        g
    }

    /// Add or retrieve a node. If the identifier already exists, returns the existing index.
    pub fn add_node(&mut self, id: ComponentIdentifier) -> NodeIndex {
        if let Some(&idx) = self.index.get(&id) {
            return idx;
        }
        let idx = self.graph.add_node(id.clone());
        self.index.insert(id, idx);
        idx
    }

    pub fn add_edge(&mut self, from: NodeIndex, to: NodeIndex) {
        if !self.graph.edges(from).any(|e| e.target() == to) {
            self.graph.add_edge(from, to, ());
        }
    }

    pub fn find(&self, id: &ComponentIdentifier) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    pub fn node(&self, idx: NodeIndex) -> &ComponentIdentifier {
        &self.graph[idx]
    }

    /// Components that declared a dependency on `idx`, in notation order.
    pub fn dependents_of(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut dependents: Vec<NodeIndex> = self
            .graph
            .edges_directed(idx, Direction::Incoming)
            .map(|e| e.source())
            .collect();
        dependents.sort_by_key(|&d| self.graph[d].to_string());
        dependents
    }

    /// Render already-sorted edges grouped by resolved component, each with
    /// the chain of components that led to it.
    ///
    /// `max_depth` limits how many origin levels are printed below an edge.
    /// A component already shown under the same edge is marked `(*)` and
    /// not expanded again.
    pub fn render_insight<M: VersionComparator + ?Sized>(
        &self,
        sorted: &[DependencyEdge],
        max_depth: Option<usize>,
        matcher: &M,
    ) -> String {
        let mut output = String::new();

        let mut groups: Vec<(&ComponentIdentifier, Vec<&DependencyEdge>)> = Vec::new();
        for edge in sorted {
            match groups.iter_mut().find(|(actual, _)| **actual == edge.actual) {
                Some((_, members)) => members.push(edge),
                None => groups.push((&edge.actual, vec![edge])),
            }
        }

        for (i, (actual, members)) in groups.iter().enumerate() {
            if i > 0 {
                output.push('\n');
            }
            output.push_str(&format!("{actual}\n"));
            let count = members.len();
            for (j, edge) in members.iter().enumerate() {
                let is_last = j == count - 1;
                let connector = if is_last { "└── " } else { "├── " };
                output.push_str(&format!("{connector}{}\n", requested_label(edge, matcher)));

                if max_depth == Some(0) {
                    continue;
                }
                let child_prefix = if is_last { "    " } else { "│   " };
                if let Some(from) = self.find(&edge.from) {
                    let mut visited = HashSet::new();
                    self.print_origin(
                        &mut output,
                        from,
                        child_prefix,
                        true,
                        1,
                        max_depth,
                        &mut visited,
                    );
                }
            }
        }

        output
    }

    #[allow(clippy::too_many_arguments)]
    fn print_origin(
        &self,
        output: &mut String,
        idx: NodeIndex,
        prefix: &str,
        is_last: bool,
        depth: usize,
        max_depth: Option<usize>,
        visited: &mut HashSet<NodeIndex>,
    ) {
        let connector = if is_last { "└── " } else { "├── " };
        let node = &self.graph[idx];
        if !visited.insert(idx) {
            output.push_str(&format!("{prefix}{connector}{node} (*)\n"));
            return;
        }
        output.push_str(&format!("{prefix}{connector}{node}\n"));

        if let Some(max) = max_depth {
            if depth >= max {
                return;
            }
        }

        let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
        let dependents = self.dependents_of(idx);
        let count = dependents.len();
        for (i, dep) in dependents.iter().enumerate() {
            let is_last = i == count - 1;
            self.print_origin(
                output,
                *dep,
                &child_prefix,
                is_last,
                depth + 1,
                max_depth,
                visited,
            );
        }
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
}

impl Default for OriginGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// The requested notation, with the resolved version appended unless the
/// request was matched strictly.
fn requested_label<M: VersionComparator + ?Sized>(edge: &DependencyEdge, matcher: &M) -> String {
    let Some(requested) = &edge.requested else {
        return format!("<none> -> {}", edge.actual);
    };
    if is_strict_match(edge, matcher) {
        return requested.to_string();
    }
    match (requested, &edge.actual) {
        (ComponentSelector::Module { .. }, ComponentIdentifier::Module { version, .. })
            if requested.key() == edge.actual.key() =>
        {
            format!("{requested} -> {version}")
        }
        _ => format!("{requested} -> {}", edge.actual),
    }
}

/// One line per edge: `requested -> actual (from origin)`.
pub fn render_list(sorted: &[DependencyEdge]) -> String {
    sorted.iter().map(|edge| format!("{edge}\n")).collect()
}
