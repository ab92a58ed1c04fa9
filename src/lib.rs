//! Minimal-impurity breeding chain search.
//!
//! Given one or more starting species and a fixed breeding table
//! (`breed(a, b) -> c`, total and symmetric), finds the cheapest ways to
//! breed a target species. Cost counts *impure* steps: crossing two
//! different breeding lines costs 1, self-breeding an existing line is free.
//!
//! - **Multi-parent search**: expands generations of breeding combinations,
//!   prunes each species to its cheapest trees, and looks a bounded number
//!   of generations past the first hit to confirm minimality.
//! - **Single-parent search**: shortest paths over a precomputed breeding
//!   graph, excluding every combination that already needs the target.
//! - **PathFinder**: picks between the two by parent-set size.
//!
//! # Architecture
//!
//! The breeding table and graph are plain data supplied by the caller and
//! borrowed read-only by the searches. Each search owns an arena of
//! combination nodes for the duration of one query and hands back owned,
//! name-based results.
//!
//! # Features
//!
//! - `serde`: JSON loading of breeding tables, `Serialize` on results
//! - `cli`: the `breedpath` binary

pub mod combo;
pub mod error;
pub mod finder;
pub mod generation;
pub mod graph;
pub mod multi;
pub mod path;
pub mod single;
pub mod table;

pub use error::{BreedError, Result};
pub use finder::PathFinder;
pub use path::{BreedingEvent, BreedingPath, BreedingTree};
