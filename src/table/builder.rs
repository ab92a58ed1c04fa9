//! Incremental construction of a [`BreedingTable`].

use std::collections::HashMap;

use super::{BreedingTable, SpeciesId};
use crate::error::{BreedError, Result};

/// Builder that collects offspring entries and checks totality on
/// [`build`](TableBuilder::build).
///
/// Every entry is recorded for both orders of the pair, so the resulting
/// table is symmetric by construction.
#[derive(Debug, Clone)]
pub struct TableBuilder {
    names: Vec<String>,
    index: HashMap<String, SpeciesId>,
    offspring: Vec<Option<SpeciesId>>,
}

impl TableBuilder {
    /// Registers the species universe. Names must be unique.
    pub fn new<I, S>(species: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names = Vec::new();
        let mut index = HashMap::new();
        for name in species {
            let name = name.as_ref();
            if index.contains_key(name) {
                return Err(BreedError::DuplicateSpecies(name.to_string()));
            }
            index.insert(name.to_string(), SpeciesId::new(names.len()));
            names.push(name.to_string());
        }
        let n = names.len();
        Ok(Self {
            names,
            index,
            offspring: vec![None; n * n],
        })
    }

    fn resolve(&self, name: &str) -> Result<SpeciesId> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| BreedError::UnknownSpecies(name.to_string()))
    }

    fn set(&mut self, a: SpeciesId, b: SpeciesId, child: SpeciesId) {
        let n = self.names.len();
        self.offspring[a.index() * n + b.index()] = Some(child);
        self.offspring[b.index() * n + a.index()] = Some(child);
    }

    /// Records `a + b = child`. A later insert for the same pair overwrites.
    pub fn insert(&mut self, a: &str, b: &str, child: &str) -> Result<&mut Self> {
        let (a, b, child) = (self.resolve(a)?, self.resolve(b)?, self.resolve(child)?);
        self.set(a, b, child);
        Ok(self)
    }

    /// Makes every species breed true with itself where no entry exists.
    pub fn self_breeding(&mut self) -> &mut Self {
        let n = self.names.len();
        for i in 0..n {
            if self.offspring[i * n + i].is_none() {
                let s = SpeciesId::new(i);
                self.set(s, s, s);
            }
        }
        self
    }

    /// Assigns `child` to every pair that has no entry yet.
    pub fn fill_unset(&mut self, child: &str) -> Result<&mut Self> {
        let child = self.resolve(child)?;
        for slot in self.offspring.iter_mut().filter(|slot| slot.is_none()) {
            *slot = Some(child);
        }
        Ok(self)
    }

    /// Finishes the table, failing on the first pair without offspring.
    pub fn build(self) -> Result<BreedingTable> {
        let n = self.names.len();
        let mut offspring = Vec::with_capacity(n * n);
        for (i, slot) in self.offspring.iter().enumerate() {
            match slot {
                Some(child) => offspring.push(*child),
                None => {
                    return Err(BreedError::IncompleteTable {
                        first: self.names[i / n].clone(),
                        second: self.names[i % n].clone(),
                    })
                }
            }
        }
        Ok(BreedingTable::from_parts(self.names, self.index, offspring))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_species_rejected() {
        let err = TableBuilder::new(["A", "B", "A"]).unwrap_err();
        assert_eq!(err, BreedError::DuplicateSpecies("A".into()));
    }

    #[test]
    fn test_incomplete_table_rejected() {
        let mut builder = TableBuilder::new(["A", "B"]).unwrap();
        builder.self_breeding();
        let err = builder.build().unwrap_err();
        assert_eq!(
            err,
            BreedError::IncompleteTable {
                first: "A".into(),
                second: "B".into()
            }
        );
    }

    #[test]
    fn test_insert_unknown_species() {
        let mut builder = TableBuilder::new(["A", "B"]).unwrap();
        let err = builder.insert("A", "B", "C").unwrap_err();
        assert_eq!(err, BreedError::UnknownSpecies("C".into()));
    }

    #[test]
    fn test_insert_is_symmetric() {
        let mut builder = TableBuilder::new(["A", "B", "C"]).unwrap();
        builder.insert("B", "A", "C").unwrap();
        builder.self_breeding().fill_unset("A").unwrap();
        let table = builder.build().unwrap();
        assert_eq!(table.breed("A", "B").unwrap(), "C");
        assert_eq!(table.breed("B", "A").unwrap(), "C");
        assert_eq!(table.breed("C", "C").unwrap(), "C");
        assert_eq!(table.breed("B", "C").unwrap(), "A");
    }

    #[test]
    fn test_empty_universe_builds() {
        let table = TableBuilder::new(Vec::<String>::new()).unwrap().build().unwrap();
        assert!(table.is_empty());
    }
}
