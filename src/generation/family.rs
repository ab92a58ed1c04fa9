//! Generation frontier, pruning and next-generation derivation.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use super::iter::Generations;
use crate::combo::{NodeArena, NodeId};
use crate::table::{SpeciesId, SpeciesPair};

/// One generation of the breeding search.
#[derive(Debug, Clone)]
pub struct Generation {
    index: usize,
    parent_nodes: Vec<NodeId>,
    child_nodes: Vec<NodeId>,
    min_scores: HashMap<SpeciesId, u32>,
}

impl Generation {
    /// Generation 0 for a set of starting species.
    ///
    /// Parent nodes are the self-breeds of each starting species; child
    /// nodes are the cross-breeds of every unordered pair of distinct
    /// starting species that make progress.
    pub fn seed(arena: &mut NodeArena<'_>, parents: &[SpeciesId]) -> Self {
        let roots: Vec<NodeId> = parents.iter().map(|&s| arena.root(s)).collect();
        let parent_nodes: Vec<NodeId> = roots.iter().map(|&r| arena.combine(r, r)).collect();
        let mut child_nodes = Vec::new();
        for (i, &a) in roots.iter().enumerate() {
            for &b in &roots[i + 1..] {
                child_nodes.extend(arena.combine_progressing(a, b));
            }
        }
        Self::assemble(arena, 0, parent_nodes, child_nodes, HashMap::new())
    }

    fn assemble(
        arena: &NodeArena<'_>,
        index: usize,
        parent_nodes: Vec<NodeId>,
        child_nodes: Vec<NodeId>,
        mut min_scores: HashMap<SpeciesId, u32>,
    ) -> Self {
        let parent_nodes = trim(arena, &mut min_scores, parent_nodes);
        let child_nodes = trim(arena, &mut min_scores, child_nodes);
        Self {
            index,
            parent_nodes,
            child_nodes,
            min_scores,
        }
    }

    /// Position in the sequence; the seed is 0.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn parent_nodes(&self) -> &[NodeId] {
        &self.parent_nodes
    }

    pub fn child_nodes(&self) -> &[NodeId] {
        &self.child_nodes
    }

    /// Cheapest total score seen so far for a species, in any generation.
    pub fn min_score(&self, species: SpeciesId) -> Option<u32> {
        self.min_scores.get(&species).copied()
    }

    pub fn min_scores(&self) -> &HashMap<SpeciesId, u32> {
        &self.min_scores
    }

    /// Species carried by the parent nodes.
    pub fn parents(&self, arena: &NodeArena<'_>) -> BTreeSet<SpeciesId> {
        self.parent_nodes.iter().map(|&id| arena.child(id)).collect()
    }

    /// Species produced by child nodes that are not already parents.
    pub fn children(&self, arena: &NodeArena<'_>) -> BTreeSet<SpeciesId> {
        let parents = self.parents(arena);
        self.child_nodes
            .iter()
            .map(|&id| arena.child(id))
            .filter(|s| !parents.contains(s))
            .collect()
    }

    /// Child nodes that produce `species`.
    pub fn producing(&self, arena: &NodeArena<'_>, species: SpeciesId) -> Vec<NodeId> {
        self.child_nodes
            .iter()
            .copied()
            .filter(|&id| arena.child(id) == species)
            .collect()
    }

    fn next_parent_nodes(&self, arena: &mut NodeArena<'_>) -> Vec<NodeId> {
        let advancing: HashSet<SpeciesId> =
            self.child_nodes.iter().map(|&id| arena.child(id)).collect();
        let mut nodes: Vec<NodeId> = self.child_nodes.iter().map(|&c| arena.combine(c, c)).collect();
        for &p in &self.parent_nodes {
            if !advancing.contains(&arena.child(p)) {
                nodes.push(arena.combine(p, p));
            }
        }
        nodes
    }

    fn next_child_nodes(&self, arena: &mut NodeArena<'_>) -> Vec<NodeId> {
        let mut nodes = Vec::new();
        for (i, &a) in self.child_nodes.iter().enumerate() {
            for &b in &self.child_nodes[i + 1..] {
                nodes.extend(arena.combine_progressing(a, b));
            }
        }

        // Established children were already crossed with these parents in
        // an earlier generation; only the new ones need it.
        let fresh = self.children(arena);
        let new_children: Vec<NodeId> = self
            .child_nodes
            .iter()
            .copied()
            .filter(|&id| fresh.contains(&arena.child(id)))
            .collect();
        for &n in &new_children {
            for &p in &self.parent_nodes {
                nodes.extend(arena.combine_progressing(n, p));
            }
        }
        nodes
    }

    /// Derives the following generation. The minimum-score map is carried
    /// forward and only ever tightened.
    pub fn next(&self, arena: &mut NodeArena<'_>) -> Generation {
        let parent_nodes = self.next_parent_nodes(arena);
        let child_nodes = self.next_child_nodes(arena);
        Self::assemble(
            arena,
            self.index + 1,
            parent_nodes,
            child_nodes,
            self.min_scores.clone(),
        )
    }

    /// Every generation from this one until no new children appear.
    pub fn generate_all<'a, 't>(self, arena: &'a mut NodeArena<'t>, cap: usize) -> Generations<'a, 't> {
        Generations::new(arena, self, None, cap)
    }

    /// Like [`generate_all`](Self::generate_all), but also stops at the first
    /// generation in which `target` is a parent or child species.
    pub fn generate_until<'a, 't>(
        self,
        arena: &'a mut NodeArena<'t>,
        target: SpeciesId,
        cap: usize,
    ) -> Generations<'a, 't> {
        Generations::new(arena, self, Some(target), cap)
    }
}

/// Keeps, per species, only the nodes whose total score equals the lowest
/// score recorded for that species, updating `min_scores` as lower scores
/// appear. Survivors are ordered by species and deduplicated by pair, the
/// first occurrence winning.
pub(crate) fn trim(
    arena: &NodeArena<'_>,
    min_scores: &mut HashMap<SpeciesId, u32>,
    nodes: Vec<NodeId>,
) -> Vec<NodeId> {
    let mut kept: BTreeMap<SpeciesId, Vec<NodeId>> = BTreeMap::new();
    for id in nodes {
        let species = arena.child(id);
        let score = arena.total_score(id);
        let min = min_scores.entry(species).or_insert(score);
        if score > *min {
            continue;
        }
        let bucket = kept.entry(species).or_default();
        if score < *min {
            *min = score;
            bucket.clear();
        }
        bucket.push(id);
    }

    let mut seen: HashSet<SpeciesPair> = HashSet::new();
    kept.into_values()
        .flatten()
        .filter(|&id| seen.insert(arena.pair(id)))
        .collect()
}
