//! Single-parent search execution.

use log::info;

use crate::graph::BreedingGraph;
use crate::path::BreedingEvent;
use crate::table::{BreedingTable, SpeciesId, SpeciesPair};

/// Result of a single-parent search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleParentResult {
    /// Every minimum-length chain, destination stripped. Empty when the
    /// target is unreachable.
    pub paths: Vec<Vec<BreedingEvent>>,
    /// Shared length of `paths`.
    pub length: Option<usize>,
}

impl SingleParentResult {
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Shortest-path search for one starting species.
#[derive(Debug, Clone)]
pub struct SingleParentSearch<'t> {
    table: &'t BreedingTable,
    graph: &'t BreedingGraph,
    parent: SpeciesId,
}

impl<'t> SingleParentSearch<'t> {
    pub fn new(table: &'t BreedingTable, graph: &'t BreedingGraph, parent: SpeciesId) -> Self {
        Self {
            table,
            graph,
            parent,
        }
    }

    pub fn parent(&self) -> SpeciesId {
        self.parent
    }

    /// Combinations that use the parent but not the target.
    fn sources(&self, target: SpeciesId) -> impl Iterator<Item = SpeciesPair> + '_ {
        let parent = self.parent;
        self.graph
            .pairs()
            .filter(move |pair| pair.contains(parent) && !pair.contains(target))
    }

    /// Finds every shortest chain from a combination using the parent to
    /// the target.
    pub fn find_path(&self, target: SpeciesId) -> SingleParentResult {
        if target == self.parent {
            return SingleParentResult {
                paths: vec![Vec::new()],
                length: Some(0),
            };
        }

        let destination = SpeciesPair::same(target);
        let Some(tree) = self.graph.paths_to(destination, |pair| !pair.contains(target)) else {
            info!("found 0 paths: {} has no self-breed node", self.table.name(target));
            return SingleParentResult {
                paths: Vec::new(),
                length: None,
            };
        };

        let candidates: Vec<Vec<SpeciesPair>> = self
            .sources(target)
            .filter_map(|source| tree.path_from(source))
            .collect();
        let Some(shortest) = candidates.iter().map(Vec::len).min() else {
            info!("found 0 paths");
            return SingleParentResult {
                paths: Vec::new(),
                length: None,
            };
        };

        let paths: Vec<Vec<BreedingEvent>> = candidates
            .into_iter()
            .filter(|path| path.len() == shortest)
            .map(|path| {
                path[..path.len() - 1]
                    .iter()
                    .map(|&pair| BreedingEvent::from_pair(self.table, pair))
                    .collect()
            })
            .collect();
        info!("found {} path(s) with length {}", paths.len(), shortest - 1);
        SingleParentResult {
            paths,
            length: Some(shortest - 1),
        }
    }
}
