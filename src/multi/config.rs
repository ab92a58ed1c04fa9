//! Multi-parent search configuration.

use crate::table::BreedingTable;

/// Configuration for [`MultiParentSearch`](super::MultiParentSearch).
///
/// # Examples
///
/// ```
/// use breedpath::multi::MultiParentConfig;
///
/// let config = MultiParentConfig::default()
///     .with_max_generations(30)
///     .with_lookahead(false);
/// assert_eq!(config.max_generations, Some(30));
/// assert!(!config.lookahead);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiParentConfig {
    /// Upper bound on generations derived per expansion, the seed included.
    ///
    /// `None` uses the species count plus one, which is never reached when
    /// every species breeds true with itself.
    pub max_generations: Option<usize>,

    /// Whether to keep expanding after the target first appears to look
    /// for cheaper trees.
    pub lookahead: bool,
}

impl Default for MultiParentConfig {
    fn default() -> Self {
        Self {
            max_generations: None,
            lookahead: true,
        }
    }
}

impl MultiParentConfig {
    /// Sets the generation cap.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = Some(n);
        self
    }

    /// Enables or disables the bounded lookahead.
    pub fn with_lookahead(mut self, lookahead: bool) -> Self {
        self.lookahead = lookahead;
        self
    }

    /// Generation cap to use with `table`.
    pub fn generation_cap(&self, table: &BreedingTable) -> usize {
        self.max_generations.unwrap_or(table.len() + 1)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_generations == Some(0) {
            return Err("max_generations must be at least 1".into());
        }
        Ok(())
    }
}
