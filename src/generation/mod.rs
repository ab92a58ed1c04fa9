//! Breeding generations.
//!
//! A [`Generation`] is the search frontier: self-bred *parent* nodes that
//! carry established lineages forward, and cross-bred *child* nodes that
//! introduce new species. Each generation is pruned to the cheapest nodes
//! per species and derives the next one deterministically.
//!
//! # Key Types
//!
//! - [`Generation`]: one frontier plus the running per-species minimum scores
//! - [`Generations`]: lazy iterator over successive generations

mod family;
mod iter;

pub use family::Generation;
pub use iter::Generations;
