//! [`PathFinder`] facade.

use std::collections::BTreeSet;

use crate::error::{BreedError, Result};
use crate::graph::BreedingGraph;
use crate::multi::{MultiParentConfig, MultiParentSearch};
use crate::path::BreedingPath;
use crate::single::SingleParentSearch;
use crate::table::{BreedingTable, SpeciesId};

/// Algorithm chosen for a parent set.
enum Strategy<'t> {
    Empty,
    Single(SingleParentSearch<'t>),
    Multi(MultiParentSearch<'t>),
}

/// Finds minimal breeding paths from a fixed set of parents.
///
/// The table (and graph, for single-parent queries) are borrowed for the
/// lifetime of the finder.
///
/// # Examples
///
/// ```
/// use breedpath::finder::PathFinder;
/// use breedpath::graph::BreedingGraph;
/// use breedpath::table::TableBuilder;
///
/// let mut builder = TableBuilder::new(["Lamball", "Cattiva", "Chikipi", "Foxparks"]).unwrap();
/// builder.insert("Lamball", "Cattiva", "Chikipi").unwrap();
/// builder.self_breeding().fill_unset("Foxparks").unwrap();
/// let table = builder.build().unwrap();
/// let graph = BreedingGraph::from_table(&table);
///
/// let finder = PathFinder::new(&table, ["Lamball", "Cattiva"]).unwrap();
/// let paths = finder.find_path("Chikipi").unwrap();
/// assert_eq!(paths[0].cost(), 1);
///
/// let finder = PathFinder::new(&table, ["Lamball"]).unwrap().with_graph(&graph);
/// let paths = finder.find_path("Chikipi").unwrap();
/// assert_eq!(paths[0].cost(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct PathFinder<'t> {
    table: &'t BreedingTable,
    graph: Option<&'t BreedingGraph>,
    parents: BTreeSet<SpeciesId>,
    config: MultiParentConfig,
}

impl<'t> PathFinder<'t> {
    /// Resolves the parent names; an unknown name is an error.
    pub fn new<I, S>(table: &'t BreedingTable, parents: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parents = parents
            .into_iter()
            .map(|name| table.species(name.as_ref()))
            .collect::<Result<BTreeSet<_>>>()?;
        Ok(Self {
            table,
            graph: None,
            parents,
            config: MultiParentConfig::default(),
        })
    }

    /// Breeding graph for single-parent queries.
    pub fn with_graph(mut self, graph: &'t BreedingGraph) -> Self {
        self.graph = Some(graph);
        self
    }

    /// Configuration for multi-parent queries.
    pub fn with_config(mut self, config: MultiParentConfig) -> Self {
        self.config = config;
        self
    }

    /// Parent species names, sorted by table order.
    pub fn parents(&self) -> Vec<&'t str> {
        self.parents.iter().map(|&s| self.table.name(s)).collect()
    }

    fn strategy(&self) -> Result<Strategy<'t>> {
        self.config.validate().map_err(BreedError::InvalidConfig)?;
        let parents: Vec<SpeciesId> = self.parents.iter().copied().collect();
        Ok(match parents.as_slice() {
            [] => Strategy::Empty,
            [parent] => {
                let graph = self.graph.ok_or(BreedError::MissingGraph)?;
                Strategy::Single(SingleParentSearch::new(self.table, graph, *parent))
            }
            _ => Strategy::Multi(MultiParentSearch::new(self.table, &parents, self.config.clone())),
        })
    }

    /// Every minimal breeding path to `target`; empty when unreachable.
    pub fn find_path(&self, target: &str) -> Result<Vec<BreedingPath>> {
        let target = self.table.species(target)?;
        let paths = match self.strategy()? {
            Strategy::Empty => Vec::new(),
            Strategy::Single(search) => search
                .find_path(target)
                .paths
                .into_iter()
                .map(BreedingPath::Chain)
                .collect(),
            Strategy::Multi(search) => search
                .find_path(target)
                .paths
                .into_iter()
                .map(BreedingPath::Tree)
                .collect(),
        };
        Ok(paths)
    }

    /// Every species obtainable from the parents. With fewer than two
    /// parents nothing can be crossed, so this is the parent set itself.
    pub fn all_possible_children(&self) -> Result<BTreeSet<String>> {
        if self.parents.len() < 2 {
            return Ok(self.parents().into_iter().map(String::from).collect());
        }
        let parents: Vec<SpeciesId> = self.parents.iter().copied().collect();
        self.config.validate().map_err(BreedError::InvalidConfig)?;
        let search = MultiParentSearch::new(self.table, &parents, self.config.clone());
        Ok(search
            .all_possible_children()
            .into_iter()
            .map(|s| self.table.name(s).to_string())
            .collect())
    }
}
