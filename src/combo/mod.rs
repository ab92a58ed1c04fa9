//! Breeding combinations and their ancestry.
//!
//! A combination node is one breeding event. Nodes live in a
//! [`NodeArena`] and refer to the two nodes they were combined from by id;
//! those ids are always lower than the node's own, so the ancestry graph
//! is acyclic by construction.
//!
//! # Identity
//!
//! Two nodes are the same breeding event when their unordered source pairs
//! are equal, regardless of history. The arena may hold several entries
//! with the same pair; generation pruning decides which survive.
//!
//! # Score
//!
//! Combining two distinct nodes is an impure step and costs 1; combining a
//! node with itself costs 0. A node's total score counts the impure steps
//! in its whole ancestry.

mod arena;
mod types;

pub use arena::NodeArena;
pub use types::{Ancestry, ComboNode, NodeId};
