//! Multi-parent breeding search.
//!
//! Expands generations from the starting species until the target appears,
//! then keeps expanding for a bounded number of generations in case a
//! deeper but purer tree exists. Self-breeding is free and does not bump
//! the score, so the generation in which the target first shows up is not
//! necessarily the cheapest one.

mod config;
mod runner;

pub use config::MultiParentConfig;
pub use runner::{MultiParentResult, MultiParentSearch};
