//! Small tables shared by unit tests across the crate.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{BreedingTable, TableBuilder};

/// Species breed true with themselves, `rules` set the listed pairs, and
/// every other pair yields the last species in `species`, which acts as an
/// inert sink.
pub(crate) fn table(species: &[&str], rules: &[(&str, &str, &str)]) -> BreedingTable {
    let sink = species.last().copied().expect("fixture needs a sink species");
    let mut builder = TableBuilder::new(species.iter().copied()).unwrap();
    for (a, b, child) in rules {
        builder.insert(a, b, child).unwrap();
    }
    builder.self_breeding().fill_unset(sink).unwrap();
    builder.build().unwrap()
}

/// Random symmetric table where every species breeds true with itself.
pub(crate) fn random_table(n: usize, seed: u64) -> BreedingTable {
    let mut rng = StdRng::seed_from_u64(seed);
    let names: Vec<String> = (0..n).map(|i| format!("S{i}")).collect();
    let mut builder = TableBuilder::new(&names).unwrap();
    builder.self_breeding();
    for i in 0..n {
        for j in (i + 1)..n {
            let child = rng.random_range(0..n);
            builder.insert(&names[i], &names[j], &names[child]).unwrap();
        }
    }
    builder.build().unwrap()
}
