//! Node and ancestry types.

use std::cell::OnceCell;
use std::collections::BTreeSet;

use crate::table::{SpeciesId, SpeciesPair};

/// Index of a node in its [`NodeArena`](super::NodeArena).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

/// Impure ancestors of a node, one set per impurity depth.
///
/// Level 0 is always empty; level `i` holds the cross-breeding events that
/// happen `i` impure steps after the starting parents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ancestry {
    levels: Vec<BTreeSet<SpeciesPair>>,
    total_score: u32,
}

impl Ancestry {
    pub(crate) fn root() -> Self {
        Self {
            levels: vec![BTreeSet::new()],
            total_score: 0,
        }
    }

    /// Level-wise union of two ancestries, the shorter padded with empty
    /// levels, plus a trailing level for `impure` when given.
    pub(crate) fn merge(a: &Ancestry, b: &Ancestry, impure: Option<SpeciesPair>) -> Self {
        let depth = a.levels.len().max(b.levels.len());
        let mut levels: Vec<BTreeSet<SpeciesPair>> = (0..depth)
            .map(|i| {
                let mut level = a.levels.get(i).cloned().unwrap_or_default();
                if let Some(other) = b.levels.get(i) {
                    level.extend(other.iter().copied());
                }
                level
            })
            .collect();
        if let Some(pair) = impure {
            levels.push(BTreeSet::from([pair]));
        }
        // Every member of a level is an impure node with score 1.
        let total_score = levels.iter().map(|level| level.len() as u32).sum();
        Self {
            levels,
            total_score,
        }
    }

    pub fn levels(&self) -> &[BTreeSet<SpeciesPair>] {
        &self.levels
    }

    /// Number of impure breeding events needed to reach the node.
    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    pub fn depth(&self) -> usize {
        self.levels.len()
    }
}

/// One breeding event stored in the arena.
#[derive(Debug, Clone)]
pub struct ComboNode {
    pub(crate) pair: SpeciesPair,
    pub(crate) child: SpeciesId,
    pub(crate) score: u32,
    pub(crate) constituents: Option<(NodeId, NodeId)>,
    pub(crate) ancestry: OnceCell<Ancestry>,
}

impl ComboNode {
    /// Source pair; the node's identity.
    pub fn pair(&self) -> SpeciesPair {
        self.pair
    }

    /// Species produced by this event.
    pub fn child(&self) -> SpeciesId {
        self.child
    }

    /// 1 for an impure combination of two distinct nodes, 0 otherwise.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Nodes combined to produce this one; `None` for roots.
    pub fn constituents(&self) -> Option<(NodeId, NodeId)> {
        self.constituents
    }

    /// Whether the event reproduces one of its own sources.
    pub fn is_degenerate(&self) -> bool {
        self.pair.contains(self.child)
    }
}
