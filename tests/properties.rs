//! Property tests over random breeding tables.

use proptest::prelude::*;

use breedpath::combo::NodeArena;
use breedpath::generation::Generation;
use breedpath::multi::{MultiParentConfig, MultiParentSearch};
use breedpath::table::{BreedingTable, SpeciesId, TableBuilder};

/// Random table where every species breeds true with itself.
fn arb_table() -> impl Strategy<Value = BreedingTable> {
    (3usize..9)
        .prop_flat_map(|n| (Just(n), prop::collection::vec(0..n, n * (n - 1) / 2)))
        .prop_map(|(n, crosses)| {
            let names: Vec<String> = (0..n).map(|i| format!("S{i}")).collect();
            let mut builder = TableBuilder::new(&names).unwrap();
            builder.self_breeding();
            let mut k = 0;
            for i in 0..n {
                for j in (i + 1)..n {
                    builder.insert(&names[i], &names[j], &names[crosses[k]]).unwrap();
                    k += 1;
                }
            }
            builder.build().unwrap()
        })
}

fn first(table: &BreedingTable, k: usize) -> Vec<SpeciesId> {
    table.species_ids().take(k).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_table_is_symmetric(table in arb_table()) {
        for a in table.species_ids() {
            for b in table.species_ids() {
                prop_assert_eq!(table.breed_id(a, b), table.breed_id(b, a));
            }
        }
    }

    #[test]
    fn prop_combine_is_symmetric(table in arb_table()) {
        let mut arena = NodeArena::new(&table);
        let roots: Vec<_> = table.species_ids().map(|s| arena.root(s)).collect();
        for (i, &a) in roots.iter().enumerate() {
            for &b in &roots[i..] {
                let ab = arena.combine(a, b);
                let ba = arena.combine(b, a);
                prop_assert_eq!(arena.pair(ab), arena.pair(ba));
                prop_assert_eq!(arena.child(ab), arena.child(ba));
                prop_assert_eq!(arena.node(ab).score(), arena.node(ba).score());
                prop_assert_eq!(arena.total_score(ab), arena.total_score(ba));
            }
        }
    }

    #[test]
    fn prop_self_breed_costs_nothing(table in arb_table()) {
        let mut arena = NodeArena::new(&table);
        for s in table.species_ids() {
            let root = arena.root(s);
            let same = arena.combine(root, root);
            prop_assert_eq!(arena.node(same).score(), 0);
            prop_assert_eq!(arena.total_score(same), 0);
        }
    }

    #[test]
    fn prop_generate_all_terminates(table in arb_table(), k in 2usize..4) {
        let mut arena = NodeArena::new(&table);
        let seed = Generation::seed(&mut arena, &first(&table, k));
        // a cap well above the universe size must never be the reason to stop
        let gens: Vec<Generation> = seed.generate_all(&mut arena, 10 * table.len()).collect();
        prop_assert!(gens.len() <= table.len() + 1);
        prop_assert!(gens.last().unwrap().children(&arena).is_empty());
    }

    #[test]
    fn prop_min_scores_are_monotone(table in arb_table(), k in 2usize..4) {
        let mut arena = NodeArena::new(&table);
        let seed = Generation::seed(&mut arena, &first(&table, k));
        let gens: Vec<Generation> = seed.generate_all(&mut arena, table.len() + 1).collect();
        for pair in gens.windows(2) {
            for (species, &score) in pair[0].min_scores() {
                prop_assert!(pair[1].min_score(*species).unwrap() <= score);
            }
        }
    }

    #[test]
    fn prop_results_share_the_minimal_score(table in arb_table(), k in 2usize..4) {
        let parents = first(&table, k);
        let with = MultiParentSearch::new(&table, &parents, MultiParentConfig::default());
        let without = MultiParentSearch::new(
            &table,
            &parents,
            MultiParentConfig::default().with_lookahead(false),
        );
        for target in table.species_ids().skip(k) {
            let best = with.find_path(target);
            let first_hit = without.find_path(target);
            prop_assert_eq!(best.is_empty(), first_hit.is_empty());
            if let (Some(score), Some(first_score)) = (best.score, first_hit.score) {
                prop_assert!(score <= first_score);
                prop_assert!(best.paths.iter().all(|p| p.score == score));
                prop_assert!(best.paths.iter().all(|p| p.target == table.name(target)));
            }
        }
    }
}
