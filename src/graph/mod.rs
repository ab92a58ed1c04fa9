//! Precomputed breeding graph.
//!
//! Nodes are breeding combinations (unordered species pairs, self pairs
//! included). Two combinations are adjacent when the offspring of one is a
//! source of the other, i.e. one can be chained into the other. The graph
//! is undirected and read-only once built.

use std::collections::{HashMap, HashSet, VecDeque};

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::{IntoNeighbors, NodeFiltered};

use crate::table::{BreedingTable, SpeciesPair};

/// Undirected graph over breeding combinations.
#[derive(Debug, Clone, Default)]
pub struct BreedingGraph {
    graph: UnGraph<SpeciesPair, ()>,
    nodes: HashMap<SpeciesPair, NodeIndex>,
}

impl BreedingGraph {
    /// Derives the chaining graph from a breeding table.
    ///
    /// Pairs are added in table order: `(s0, s0), (s0, s1), ..., (s1, s1), ...`.
    pub fn from_table(table: &BreedingTable) -> Self {
        let mut out = Self::default();
        let mut by_species: Vec<Vec<NodeIndex>> = vec![Vec::new(); table.len()];
        let ids: Vec<_> = table.species_ids().collect();
        for (i, &a) in ids.iter().enumerate() {
            for &b in &ids[i..] {
                let pair = SpeciesPair::new(a, b);
                let idx = out.add_node(pair);
                by_species[a.index()].push(idx);
                if a != b {
                    by_species[b.index()].push(idx);
                }
            }
        }

        let mut seen: HashSet<(NodeIndex, NodeIndex)> = HashSet::new();
        for x in out.graph.node_indices() {
            let child = table.breed_pair(out.graph[x]);
            for &y in &by_species[child.index()] {
                if x == y {
                    continue;
                }
                let key = if x < y { (x, y) } else { (y, x) };
                if seen.insert(key) {
                    out.graph.add_edge(x, y, ());
                }
            }
        }
        log::debug!(
            "breeding graph: {} combinations, {} links",
            out.graph.node_count(),
            out.graph.edge_count()
        );
        out
    }

    /// Builds a graph from an explicit edge list, e.g. one computed offline.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (SpeciesPair, SpeciesPair)>,
    {
        let mut out = Self::default();
        for (a, b) in edges {
            let ia = out.add_node(a);
            let ib = out.add_node(b);
            if ia != ib {
                out.graph.update_edge(ia, ib, ());
            }
        }
        out
    }

    fn add_node(&mut self, pair: SpeciesPair) -> NodeIndex {
        if let Some(&idx) = self.nodes.get(&pair) {
            return idx;
        }
        let idx = self.graph.add_node(pair);
        self.nodes.insert(pair, idx);
        idx
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains(&self, pair: SpeciesPair) -> bool {
        self.nodes.contains_key(&pair)
    }

    pub fn is_linked(&self, a: SpeciesPair, b: SpeciesPair) -> bool {
        match (self.nodes.get(&a), self.nodes.get(&b)) {
            (Some(&ia), Some(&ib)) => self.graph.contains_edge(ia, ib),
            _ => false,
        }
    }

    /// Combinations in insertion order.
    pub fn pairs(&self) -> impl Iterator<Item = SpeciesPair> + '_ {
        self.graph.node_indices().map(|idx| self.graph[idx])
    }

    /// Breadth-first shortest-path tree rooted at `target`, restricted to
    /// the subgraph of nodes accepted by `keep` (the target itself is always
    /// kept). Returns `None` when the target is not a node of the graph.
    pub fn paths_to<F>(&self, target: SpeciesPair, keep: F) -> Option<PathTree<'_>>
    where
        F: Fn(SpeciesPair) -> bool,
    {
        let root = *self.nodes.get(&target)?;
        let subgraph = NodeFiltered::from_fn(&self.graph, |idx: NodeIndex| {
            idx == root || keep(self.graph[idx])
        });

        let mut next_hop: HashMap<NodeIndex, NodeIndex> = HashMap::new();
        let mut queue = VecDeque::from([root]);
        while let Some(node) = queue.pop_front() {
            for neighbor in (&subgraph).neighbors(node) {
                if neighbor == root || next_hop.contains_key(&neighbor) {
                    continue;
                }
                next_hop.insert(neighbor, node);
                queue.push_back(neighbor);
            }
        }
        Some(PathTree {
            graph: self,
            root,
            next_hop,
        })
    }
}

/// Shortest-path tree produced by [`BreedingGraph::paths_to`].
#[derive(Debug)]
pub struct PathTree<'g> {
    graph: &'g BreedingGraph,
    root: NodeIndex,
    next_hop: HashMap<NodeIndex, NodeIndex>,
}

impl PathTree<'_> {
    /// Shortest path from `source` to the root, both ends included.
    /// `None` when the source cannot reach the root inside the subgraph.
    pub fn path_from(&self, source: SpeciesPair) -> Option<Vec<SpeciesPair>> {
        let mut node = *self.graph.nodes.get(&source)?;
        let mut path = vec![self.graph.graph[node]];
        while node != self.root {
            node = *self.next_hop.get(&node)?;
            path.push(self.graph.graph[node]);
        }
        Some(path)
    }
}
