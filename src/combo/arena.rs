//! Arena owning every combination node created by a search.

use std::cell::OnceCell;

use super::types::{Ancestry, ComboNode, NodeId};
use crate::path::{BreedingEvent, BreedingTree};
use crate::table::{BreedingTable, SpeciesId, SpeciesPair};

/// Append-only store of [`ComboNode`]s bound to one breeding table.
///
/// Ancestries are computed lazily on first access and cached in the node.
#[derive(Debug)]
pub struct NodeArena<'t> {
    table: &'t BreedingTable,
    nodes: Vec<ComboNode>,
}

impl<'t> NodeArena<'t> {
    pub fn new(table: &'t BreedingTable) -> Self {
        Self {
            table,
            nodes: Vec::new(),
        }
    }

    pub fn table(&self) -> &'t BreedingTable {
        self.table
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, node: ComboNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Root node for a starting species: `species + species`.
    pub fn root(&mut self, species: SpeciesId) -> NodeId {
        let pair = SpeciesPair::same(species);
        self.push(ComboNode {
            pair,
            child: self.table.breed_pair(pair),
            score: 0,
            constituents: None,
            ancestry: OnceCell::new(),
        })
    }

    /// Breeds the offspring of `a` with the offspring of `b`.
    ///
    /// The step is impure (score 1) unless both nodes are the same breeding
    /// event. The result does not depend on argument order.
    pub fn combine(&mut self, a: NodeId, b: NodeId) -> NodeId {
        let (na, nb) = (&self.nodes[a.0], &self.nodes[b.0]);
        let pair = SpeciesPair::new(na.child, nb.child);
        let score = u32::from(na.pair != nb.pair);
        let constituents = if a <= b { (a, b) } else { (b, a) };
        self.push(ComboNode {
            pair,
            child: self.table.breed_pair(pair),
            score,
            constituents: Some(constituents),
            ancestry: OnceCell::new(),
        })
    }

    /// Like [`combine`](Self::combine), but skips results that reproduce
    /// one of their own sources.
    pub fn combine_progressing(&mut self, a: NodeId, b: NodeId) -> Option<NodeId> {
        let pair = SpeciesPair::new(self.nodes[a.0].child, self.nodes[b.0].child);
        if pair.contains(self.table.breed_pair(pair)) {
            return None;
        }
        Some(self.combine(a, b))
    }

    pub fn node(&self, id: NodeId) -> &ComboNode {
        &self.nodes[id.0]
    }

    pub fn child(&self, id: NodeId) -> SpeciesId {
        self.nodes[id.0].child
    }

    pub fn pair(&self, id: NodeId) -> SpeciesPair {
        self.nodes[id.0].pair
    }

    /// Memoized ancestry of a node.
    pub fn ancestry(&self, id: NodeId) -> &Ancestry {
        let node = &self.nodes[id.0];
        node.ancestry.get_or_init(|| match node.constituents {
            None => Ancestry::root(),
            Some((a, b)) => {
                let impure = (node.score > 0).then_some(node.pair);
                Ancestry::merge(self.ancestry(a), self.ancestry(b), impure)
            }
        })
    }

    pub fn total_score(&self, id: NodeId) -> u32 {
        self.ancestry(id).total_score()
    }

    /// Owned breeding tree for a node: one step per impurity level after
    /// the first, keeping only true cross-breeds.
    pub fn tree(&self, id: NodeId) -> BreedingTree {
        let ancestry = self.ancestry(id);
        let steps = ancestry
            .levels()
            .iter()
            .skip(1)
            .map(|level| {
                level
                    .iter()
                    .filter(|pair| !pair.is_self_pair())
                    .map(|&pair| BreedingEvent::from_pair(self.table, pair))
                    .collect()
            })
            .collect();
        BreedingTree {
            target: self.table.name(self.child(id)).to_string(),
            score: ancestry.total_score(),
            steps,
        }
    }
}
