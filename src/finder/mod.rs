//! Entry point that picks a search algorithm for a set of parents.
//!
//! - no parents: nothing to breed, every query returns no paths
//! - one parent: [`SingleParentSearch`](crate::single::SingleParentSearch)
//!   over a breeding graph
//! - two or more: [`MultiParentSearch`](crate::multi::MultiParentSearch)

mod runner;

pub use runner::PathFinder;
