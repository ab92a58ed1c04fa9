//! Multi-parent search execution.
//!
//! # Algorithm
//!
//! 1. Seed generation 0 from the starting species
//! 2. Expand generations until the target is produced (or nothing new is)
//! 3. Take the target-producing child nodes of that generation; their
//!    total score is the candidate minimum
//! 4. Bounded lookahead: while fewer generations have been derived than the
//!    best score, derive one more and compare its target producers
//!    - strictly lower score: replace the result set (this also tightens
//!      the bound)
//!    - equal score: add to the result set
//!
//! Every child node scores at least one more than its generation index, so
//! no generation past the bound can beat the best score.

use std::collections::BTreeSet;

use log::info;

use super::config::MultiParentConfig;
use crate::combo::{NodeArena, NodeId};
use crate::generation::Generation;
use crate::path::BreedingTree;
use crate::table::{BreedingTable, SpeciesId};

/// Result of a multi-parent search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiParentResult {
    /// Every minimal tree found, in discovery order. Empty when the target
    /// is unreachable.
    pub paths: Vec<BreedingTree>,
    /// Shared total score of `paths`.
    pub score: Option<u32>,
    /// Generations derived before the target first appeared, the seed included.
    pub generations: usize,
    /// Generations derived by the lookahead.
    pub lookahead_generations: usize,
}

impl MultiParentResult {
    fn unreachable(generations: usize) -> Self {
        Self {
            paths: Vec::new(),
            score: None,
            generations,
            lookahead_generations: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Generation-expansion search for two or more starting species.
///
/// # Examples
///
/// ```
/// use breedpath::multi::{MultiParentConfig, MultiParentSearch};
/// use breedpath::table::TableBuilder;
///
/// let mut builder = TableBuilder::new(["Lamball", "Cattiva", "Chikipi", "Foxparks"]).unwrap();
/// builder.insert("Lamball", "Cattiva", "Chikipi").unwrap();
/// builder.self_breeding().fill_unset("Foxparks").unwrap();
/// let table = builder.build().unwrap();
///
/// let parents = [table.species("Lamball").unwrap(), table.species("Cattiva").unwrap()];
/// let search = MultiParentSearch::new(&table, &parents, MultiParentConfig::default());
/// let result = search.find_path(table.species("Chikipi").unwrap());
///
/// assert_eq!(result.score, Some(1));
/// assert_eq!(result.paths[0].steps[0][0].to_string(), "Lamball + Cattiva = Chikipi");
/// ```
#[derive(Debug, Clone)]
pub struct MultiParentSearch<'t> {
    table: &'t BreedingTable,
    parents: Vec<SpeciesId>,
    config: MultiParentConfig,
}

impl<'t> MultiParentSearch<'t> {
    /// Duplicate starting species are ignored.
    pub fn new(table: &'t BreedingTable, parents: &[SpeciesId], config: MultiParentConfig) -> Self {
        let parents: BTreeSet<SpeciesId> = parents.iter().copied().collect();
        Self {
            table,
            parents: parents.into_iter().collect(),
            config,
        }
    }

    pub fn parents(&self) -> &[SpeciesId] {
        &self.parents
    }

    pub fn config(&self) -> &MultiParentConfig {
        &self.config
    }

    /// Finds every minimal-score breeding tree that produces `target`.
    pub fn find_path(&self, target: SpeciesId) -> MultiParentResult {
        let mut arena = NodeArena::new(self.table);
        if self.parents.contains(&target) {
            let root = arena.root(target);
            return MultiParentResult {
                paths: vec![arena.tree(root)],
                score: Some(0),
                generations: 0,
                lookahead_generations: 0,
            };
        }

        let cap = self.config.generation_cap(self.table);
        let seed = Generation::seed(&mut arena, &self.parents);
        let generations: Vec<Generation> = seed.generate_until(&mut arena, target, cap).collect();
        let consumed = generations.len();
        let Some(terminal) = generations.into_iter().last() else {
            return MultiParentResult::unreachable(0);
        };
        if !terminal.children(&arena).contains(&target) {
            info!(
                "no path to {} after {consumed} generation(s)",
                self.table.name(target)
            );
            return MultiParentResult::unreachable(consumed);
        }

        let mut found = terminal.producing(&arena, target);
        let mut best = arena.total_score(found[0]);
        info!(
            "found {} path(s) in {consumed} generation(s) with score {best}",
            found.len()
        );

        let mut lookahead = 0;
        if self.config.lookahead {
            lookahead = self.look_ahead(&mut arena, terminal, target, consumed, &mut found, &mut best);
        }

        MultiParentResult {
            paths: found.iter().map(|&id| arena.tree(id)).collect(),
            score: Some(best),
            generations: consumed,
            lookahead_generations: lookahead,
        }
    }

    /// Derives generations past `terminal` while their index stays below
    /// the best score. Returns how many were derived.
    fn look_ahead(
        &self,
        arena: &mut NodeArena<'t>,
        terminal: Generation,
        target: SpeciesId,
        consumed: usize,
        found: &mut Vec<NodeId>,
        best: &mut u32,
    ) -> usize {
        let mut current = terminal;
        let mut derived = 0;
        while consumed + derived < *best as usize {
            let next = current.next(arena);
            derived += 1;

            let producing = next.producing(arena, target);
            if let Some(&first) = producing.first() {
                let score = arena.total_score(first);
                if score < *best {
                    info!(
                        "lookahead: {} cheaper path(s) with score {score} (was {})",
                        producing.len(),
                        *best
                    );
                    *best = score;
                    *found = producing;
                } else if score == *best {
                    found.extend(producing);
                }
            }

            if next.children(arena).is_empty() {
                break;
            }
            current = next;
        }
        derived
    }

    /// Every species that appears in any generation reachable from the
    /// starting species, the starting species included.
    pub fn all_possible_children(&self) -> BTreeSet<SpeciesId> {
        let mut arena = NodeArena::new(self.table);
        let cap = self.config.generation_cap(self.table);
        let seed = Generation::seed(&mut arena, &self.parents);

        let mut species = BTreeSet::new();
        let mut generations = seed.generate_all(&mut arena, cap);
        while let Some(generation) = generations.next() {
            species.extend(generation.parents(generations.arena()));
            species.extend(generation.children(generations.arena()));
        }
        species
    }
}
