//! Criterion benchmarks for the breeding searches.
//!
//! Uses synthetic random tables so the numbers reflect search overhead
//! rather than any particular game's data.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use breedpath::graph::BreedingGraph;
use breedpath::multi::{MultiParentConfig, MultiParentSearch};
use breedpath::single::SingleParentSearch;
use breedpath::table::{BreedingTable, TableBuilder};

// ===========================================================================
// Synthetic tables: every species breeds true, crosses are random
// ===========================================================================

fn random_table(n: usize, seed: u64) -> BreedingTable {
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

fn bench_multi_parent(c: &mut Criterion) {
    let mut group = c.benchmark_group("multi_parent");
    group.sample_size(10);

    for &n in &[20, 40, 80] {
        let table = random_table(n, 42);
        let parents: Vec<_> = table.species_ids().take(3).collect();
        let target = table.species_ids().last().unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &table, |b, t| {
            b.iter(|| {
                let search = MultiParentSearch::new(t, &parents, MultiParentConfig::default());
                black_box(search.find_path(black_box(target)))
            })
        });
    }
    group.finish();
}

fn bench_single_parent(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_parent");
    group.sample_size(10);

    for &n in &[20, 40, 80] {
        let table = random_table(n, 42);
        let graph = BreedingGraph::from_table(&table);
        let parent = table.species_ids().next().unwrap();
        let target = table.species_ids().last().unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &(table, graph), |b, (t, g)| {
            b.iter(|| {
                let search = SingleParentSearch::new(t, g, parent);
                black_box(search.find_path(black_box(target)))
            })
        });
    }
    group.finish();
}

fn bench_graph_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_build");
    group.sample_size(10);

    for &n in &[40, 80] {
        let table = random_table(n, 7);
        group.bench_with_input(BenchmarkId::from_parameter(n), &table, |b, t| {
            b.iter(|| black_box(BreedingGraph::from_table(black_box(t))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_multi_parent, bench_single_parent, bench_graph_build);
criterion_main!(benches);
