//! Single-parent breeding search.
//!
//! With only one starting species there is nothing to cross it with, so
//! generation expansion does not apply. Instead the search walks the
//! precomputed [`BreedingGraph`](crate::graph::BreedingGraph) from every
//! combination that uses the parent to the target's self-breed, avoiding
//! any combination that already needs the target.

mod runner;

pub use runner::{SingleParentResult, SingleParentSearch};
