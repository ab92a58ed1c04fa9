//! Lazy enumeration of successive generations.

use log::{debug, warn};

use super::family::Generation;
use crate::combo::NodeArena;
use crate::table::SpeciesId;

/// Iterator returned by [`Generation::generate_all`] and
/// [`Generation::generate_until`].
///
/// Yields the starting generation first. The terminal generation (no new
/// children, target reached, or generation cap hit) is yielded too.
pub struct Generations<'a, 't> {
    arena: &'a mut NodeArena<'t>,
    pending: Option<Generation>,
    target: Option<SpeciesId>,
    cap: usize,
}

impl<'a, 't> Generations<'a, 't> {
    pub(crate) fn new(
        arena: &'a mut NodeArena<'t>,
        start: Generation,
        target: Option<SpeciesId>,
        cap: usize,
    ) -> Self {
        Self {
            arena,
            pending: Some(start),
            target,
            cap,
        }
    }

    /// Arena holding the nodes of every generation yielded so far.
    pub fn arena(&self) -> &NodeArena<'t> {
        self.arena
    }

    fn is_terminal(&self, generation: &Generation) -> bool {
        let children = generation.children(self.arena);
        if children.is_empty() {
            return true;
        }
        match self.target {
            Some(target) => {
                children.contains(&target) || generation.parents(self.arena).contains(&target)
            }
            None => false,
        }
    }
}

impl Iterator for Generations<'_, '_> {
    type Item = Generation;

    fn next(&mut self) -> Option<Generation> {
        let current = self.pending.take()?;
        debug!(
            "generation {}: {} parent(s), {} child(ren), {} node(s) in arena",
            current.index(),
            current.parents(self.arena).len(),
            current.children(self.arena).len(),
            self.arena.len()
        );
        if !self.is_terminal(&current) {
            if current.index() + 1 >= self.cap {
                warn!("stopping expansion at generation cap {}", self.cap);
            } else {
                self.pending = Some(current.next(self.arena));
            }
        }
        Some(current)
    }
}
