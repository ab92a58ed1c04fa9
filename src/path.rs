//! Owned search results handed back to callers.
//!
//! Results carry species names rather than ids so they stay meaningful
//! after the search (and its node arena) has been dropped.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::table::{BreedingTable, SpeciesPair};

/// One breeding event: `first + second = child`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct BreedingEvent {
    pub first: String,
    pub second: String,
    pub child: String,
}

impl BreedingEvent {
    pub(crate) fn from_pair(table: &BreedingTable, pair: SpeciesPair) -> Self {
        Self {
            first: table.name(pair.first()).to_string(),
            second: table.name(pair.second()).to_string(),
            child: table.name(table.breed_pair(pair)).to_string(),
        }
    }

    /// Whether both sources are the same species.
    pub fn is_self_breed(&self) -> bool {
        self.first == self.second
    }
}

impl fmt::Display for BreedingEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {} = {}", self.first, self.second, self.child)
    }
}

/// Breeding tree found by the multi-parent search.
///
/// `steps[i]` holds the cross-breeding events at impurity depth `i + 1`;
/// events within one step are independent of each other.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct BreedingTree {
    /// Species produced by the last step.
    pub target: String,
    /// Number of impure breeding events in the tree.
    pub score: u32,
    pub steps: Vec<Vec<BreedingEvent>>,
}

impl BreedingTree {
    /// Steps in breeding order.
    pub fn iter(&self) -> std::slice::Iter<'_, Vec<BreedingEvent>> {
        self.steps.iter()
    }

    /// All events, earliest step first.
    pub fn events(&self) -> impl Iterator<Item = &BreedingEvent> {
        self.steps.iter().flatten()
    }
}

impl<'a> IntoIterator for &'a BreedingTree {
    type Item = &'a Vec<BreedingEvent>;
    type IntoIter = std::slice::Iter<'a, Vec<BreedingEvent>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// A minimal path returned by [`PathFinder::find_path`](crate::finder::PathFinder::find_path).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum BreedingPath {
    /// Multi-parent result: a tree of breeding events.
    Tree(BreedingTree),
    /// Single-parent result: an ordered chain of combinations.
    Chain(Vec<BreedingEvent>),
}

impl BreedingPath {
    /// Impurity score of a tree, or number of events of a chain.
    pub fn cost(&self) -> usize {
        match self {
            BreedingPath::Tree(tree) => tree.score as usize,
            BreedingPath::Chain(chain) => chain.len(),
        }
    }

    /// Events grouped by step. A chain yields one event per step.
    pub fn steps(&self) -> Vec<Vec<&BreedingEvent>> {
        match self {
            BreedingPath::Tree(tree) => tree.iter().map(|step| step.iter().collect()).collect(),
            BreedingPath::Chain(chain) => chain.iter().map(|event| vec![event]).collect(),
        }
    }

    pub fn as_tree(&self) -> Option<&BreedingTree> {
        match self {
            BreedingPath::Tree(tree) => Some(tree),
            BreedingPath::Chain(_) => None,
        }
    }

    pub fn as_chain(&self) -> Option<&[BreedingEvent]> {
        match self {
            BreedingPath::Chain(chain) => Some(chain),
            BreedingPath::Tree(_) => None,
        }
    }
}
