//! Species compatibility table.
//!
//! The table is the total, symmetric function `breed(a, b) -> c` over a
//! fixed universe of species. Names are interned once into dense
//! [`SpeciesId`]s so the searches work on integers and only touch strings
//! at the boundary.
//!
//! # Key Types
//!
//! - [`BreedingTable`]: the read-only lookup used by every search
//! - [`TableBuilder`]: incremental construction with totality checks
//! - [`SpeciesId`] / [`SpeciesPair`]: interned species and unordered pairs

mod builder;
#[cfg(feature = "serde")]
mod data;
#[cfg(test)]
pub(crate) mod fixtures;

pub use builder::TableBuilder;
#[cfg(feature = "serde")]
pub use data::TableData;

use std::collections::HashMap;
use std::fmt;

use crate::error::{BreedError, Result};

/// Interned species identifier, valid for the table that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpeciesId(u32);

impl SpeciesId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// Position of the species in its table.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Unordered pair of source species.
///
/// Stored normalized so that `(a, b)` and `(b, a)` compare and hash equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpeciesPair {
    first: SpeciesId,
    second: SpeciesId,
}

impl SpeciesPair {
    pub fn new(a: SpeciesId, b: SpeciesId) -> Self {
        if a <= b {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }

    /// Pair of a species with itself.
    pub fn same(s: SpeciesId) -> Self {
        Self { first: s, second: s }
    }

    pub fn first(self) -> SpeciesId {
        self.first
    }

    pub fn second(self) -> SpeciesId {
        self.second
    }

    pub fn contains(self, s: SpeciesId) -> bool {
        self.first == s || self.second == s
    }

    /// Whether both sources are the same species.
    pub fn is_self_pair(self) -> bool {
        self.first == self.second
    }
}

/// Read-only breeding table.
///
/// # Examples
///
/// ```
/// use breedpath::table::TableBuilder;
///
/// let mut builder = TableBuilder::new(["Lamball", "Cattiva", "Chikipi"]).unwrap();
/// builder.insert("Lamball", "Cattiva", "Chikipi").unwrap();
/// builder.fill_unset("Chikipi").unwrap();
/// let table = builder.build().unwrap();
///
/// assert_eq!(table.breed("Cattiva", "Lamball").unwrap(), "Chikipi");
/// assert!(table.breed("Lamball", "Anubis").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct BreedingTable {
    names: Vec<String>,
    index: HashMap<String, SpeciesId>,
    // Row-major `len * len` offspring matrix.
    offspring: Vec<SpeciesId>,
}

impl BreedingTable {
    pub(crate) fn from_parts(
        names: Vec<String>,
        index: HashMap<String, SpeciesId>,
        offspring: Vec<SpeciesId>,
    ) -> Self {
        debug_assert_eq!(offspring.len(), names.len() * names.len());
        Self {
            names,
            index,
            offspring,
        }
    }

    /// Builds a table from a square matrix of offspring names.
    ///
    /// `rows[i][j]` is the offspring of `species[i]` and `species[j]`.
    /// The matrix must be square, symmetric and name only known species.
    pub fn from_matrix<S, R>(species: &[S], rows: &[R]) -> Result<Self>
    where
        S: AsRef<str>,
        R: AsRef<[S]>,
    {
        let n = species.len();
        if rows.len() != n {
            return Err(BreedError::MalformedMatrix(format!(
                "expected {n} rows, got {}",
                rows.len()
            )));
        }
        let mut builder = TableBuilder::new(species.iter().map(|s| s.as_ref()))?;
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n {
                return Err(BreedError::MalformedMatrix(format!(
                    "row {} has {} entries, expected {n}",
                    species[i].as_ref(),
                    row.len()
                )));
            }
            for j in i..n {
                let forward = row[j].as_ref();
                let mirrored = rows[j].as_ref().get(i).map(|s| s.as_ref());
                if mirrored.is_some_and(|m| m != forward) {
                    return Err(BreedError::AsymmetricTable {
                        first: species[i].as_ref().to_string(),
                        second: species[j].as_ref().to_string(),
                    });
                }
                builder.insert(species[i].as_ref(), species[j].as_ref(), forward)?;
            }
        }
        builder.build()
    }

    /// Number of species in the universe.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Resolves a species name.
    pub fn species(&self, name: &str) -> Result<SpeciesId> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| BreedError::UnknownSpecies(name.to_string()))
    }

    /// Name of an interned species.
    pub fn name(&self, id: SpeciesId) -> &str {
        &self.names[id.index()]
    }

    /// All species in table order.
    pub fn species_ids(&self) -> impl Iterator<Item = SpeciesId> + '_ {
        (0..self.names.len()).map(SpeciesId::new)
    }

    /// Resolves a pair of species names.
    pub fn pair(&self, a: &str, b: &str) -> Result<SpeciesPair> {
        Ok(SpeciesPair::new(self.species(a)?, self.species(b)?))
    }

    /// Offspring of two interned species.
    pub fn breed_id(&self, a: SpeciesId, b: SpeciesId) -> SpeciesId {
        self.offspring[a.index() * self.names.len() + b.index()]
    }

    /// Offspring of a pair.
    pub fn breed_pair(&self, pair: SpeciesPair) -> SpeciesId {
        self.breed_id(pair.first(), pair.second())
    }

    /// Offspring of two species given by name.
    pub fn breed(&self, a: &str, b: &str) -> Result<&str> {
        let child = self.breed_id(self.species(a)?, self.species(b)?);
        Ok(self.name(child))
    }

    /// Renders a pair as `a + b = child`.
    pub fn describe(&self, pair: SpeciesPair) -> PairDisplay<'_> {
        PairDisplay { table: self, pair }
    }
}

/// Display adapter returned by [`BreedingTable::describe`].
pub struct PairDisplay<'t> {
    table: &'t BreedingTable,
    pair: SpeciesPair,
}

impl fmt::Display for PairDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} + {} = {}",
            self.table.name(self.pair.first()),
            self.table.name(self.pair.second()),
            self.table.name(self.table.breed_pair(self.pair))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::table;
    use super::*;

    #[test]
    fn test_pair_is_unordered() {
        let a = SpeciesId::new(3);
        let b = SpeciesId::new(1);
        assert_eq!(SpeciesPair::new(a, b), SpeciesPair::new(b, a));
        assert_eq!(SpeciesPair::new(a, b).first(), b);
        assert!(SpeciesPair::same(a).is_self_pair());
        assert!(!SpeciesPair::new(a, b).is_self_pair());
    }

    #[test]
    fn test_breed_by_name_is_symmetric() {
        let t = table(&["A", "B", "C", "Z"], &[("A", "B", "C")]);
        assert_eq!(t.breed("A", "B").unwrap(), "C");
        assert_eq!(t.breed("B", "A").unwrap(), "C");
        assert_eq!(t.breed("A", "A").unwrap(), "A");
        assert_eq!(t.breed("A", "C").unwrap(), "Z");
    }

    #[test]
    fn test_unknown_species_is_reported() {
        let t = table(&["A", "B", "Z"], &[]);
        assert_eq!(
            t.species("Foxcicle"),
            Err(BreedError::UnknownSpecies("Foxcicle".into()))
        );
        assert!(matches!(
            t.breed("A", "Foxcicle"),
            Err(BreedError::UnknownSpecies(name)) if name == "Foxcicle"
        ));
    }

    #[test]
    fn test_from_matrix() {
        let species = ["A", "B"];
        let rows = [["A", "B"], ["B", "B"]];
        let t = BreedingTable::from_matrix(&species, &rows).unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t.breed("A", "B").unwrap(), "B");
    }

    #[test]
    fn test_from_matrix_rejects_asymmetry() {
        let species = ["A", "B"];
        let rows = [["A", "A"], ["B", "B"]];
        let err = BreedingTable::from_matrix(&species, &rows).unwrap_err();
        assert!(matches!(err, BreedError::AsymmetricTable { .. }));
    }

    #[test]
    fn test_from_matrix_rejects_bad_shape() {
        let species = ["A", "B"];
        let rows = [vec!["A", "B"]];
        let err = BreedingTable::from_matrix(&species, &rows).unwrap_err();
        assert!(matches!(err, BreedError::MalformedMatrix(_)));

        let rows = [vec!["A", "B"], vec!["B"]];
        let err = BreedingTable::from_matrix(&species, &rows).unwrap_err();
        assert!(matches!(err, BreedError::MalformedMatrix(_)));
    }

    #[test]
    fn test_describe_pair() {
        let t = table(&["A", "B", "C", "Z"], &[("A", "B", "C")]);
        let pair = SpeciesPair::new(t.species("B").unwrap(), t.species("A").unwrap());
        assert_eq!(t.describe(pair).to_string(), "A + B = C");
    }
}
