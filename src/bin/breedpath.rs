//! breedpath CLI: prints the cheapest breeding paths to a species.
//!
//! Usage: breedpath <table.json> <parent>... <child>

use std::env;
use std::fs;
use std::process::ExitCode;

use breedpath::graph::BreedingGraph;
use breedpath::table::BreedingTable;
use breedpath::{BreedingPath, PathFinder};

fn print_usage() {
    eprintln!(
        r#"Usage: breedpath <table.json> <parent>... <child>

  table.json   {{"species": [...], "matrix": [[...], ...]}}
  parent       one or more starting species
  child        species to breed

Set RUST_LOG=debug to trace generations."#
    );
}

fn print_path(path: &BreedingPath) {
    for (i, step) in path.steps().iter().enumerate() {
        let events: Vec<String> = step.iter().map(|e| e.to_string()).collect();
        println!("  {:>2}. {}", i + 1, events.join(", "));
    }
}

fn run(args: &[String]) -> breedpath::Result<()> {
    let table_file = &args[0];
    let child = &args[args.len() - 1];
    let parents = &args[1..args.len() - 1];

    let json = fs::read_to_string(table_file)
        .map_err(|e| breedpath::BreedError::Data(format!("{table_file}: {e}")))?;
    let table = BreedingTable::from_json(&json)?;
    let graph = if parents.len() == 1 {
        Some(BreedingGraph::from_table(&table))
    } else {
        None
    };

    let mut finder = PathFinder::new(&table, parents)?;
    if let Some(graph) = &graph {
        finder = finder.with_graph(graph);
    }
    let paths = finder.find_path(child)?;

    match paths.first() {
        None => println!("No path from {} to {child}.", parents.join(", ")),
        Some(sample) => {
            println!(
                "{} path(s) to {child} with cost {}. Sample path:",
                paths.len(),
                sample.cost()
            );
            print_path(sample);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 3 {
        print_usage();
        return ExitCode::from(2);
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
