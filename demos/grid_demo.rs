// Demonstration: learn a route across a textual map and print it.
//
// Build/run from this repo root:
//   RUST_LOG=gridq=debug cargo run --example grid_demo -- path/to/map.txt --start 0,0 --goal 4,7

use std::collections::HashSet;
use std::env;
use std::fs;
use std::process;

use gridq::{
    ActionIndexing, Cell, GridWorld, OccupancyMatrix, PathReport, QLearningConfig,
    QLearningSolver,
};

const DEFAULT_MAP: &str = "\
........
.XXXX...
.X......
.X.XXXX.
........
";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gridq=info".parse().expect("static directive")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    let text = match args.get(1).filter(|a| !a.starts_with("--")) {
        Some(path) => fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Cannot read map '{}': {}", path, e);
            process::exit(2);
        }),
        None => DEFAULT_MAP.to_string(),
    };
    let matrix: OccupancyMatrix = text.parse().unwrap_or_else(|e| {
        eprintln!("Invalid map: {}", e);
        process::exit(2);
    });

    let start = arg_value(&args, "--start")
        .and_then(parse_cell)
        .unwrap_or(Cell::new(0, 0));
    let goal = arg_value(&args, "--goal")
        .and_then(parse_cell)
        .unwrap_or(Cell::new(matrix.height() - 1, matrix.width() - 1));
    let episodes: usize = arg_value(&args, "--episodes")
        .and_then(|s| s.parse().ok())
        .unwrap_or(1000);
    let seed: u64 = arg_value(&args, "--seed")
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);
    let indexing = match arg_value(&args, "--indexing").unwrap_or("canonical") {
        "canonical" => ActionIndexing::Canonical,
        "filtered" => ActionIndexing::FilteredNeighbor,
        other => {
            eprintln!(
                "Unknown --indexing '{}'; expected 'canonical' or 'filtered'.",
                other
            );
            process::exit(2);
        }
    };

    let world = GridWorld::new(matrix, start, goal).unwrap_or_else(|e| {
        eprintln!("{}", e);
        process::exit(2);
    });
    let config = QLearningConfig::default()
        .with_seed(seed)
        .with_indexing(indexing);
    let mut solver = QLearningSolver::new(world, config).unwrap_or_else(|e| {
        eprintln!("{}", e);
        process::exit(2);
    });

    let stats = solver.train(episodes).unwrap_or_else(|e| {
        eprintln!("{}", e);
        process::exit(1);
    });
    println!("{}", stats);

    match solver.extract_path() {
        Ok(path) => {
            println!("{}", PathReport::evaluate(solver.world(), &path));
            print_route(solver.world(), &path);
        }
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}

fn print_route(world: &GridWorld, path: &[Cell]) {
    let on_path: HashSet<Cell> = path.iter().copied().collect();
    for cell in world.matrix().cells() {
        let symbol = if cell == world.start() {
            'S'
        } else if cell == world.goal() {
            'G'
        } else if on_path.contains(&cell) {
            '*'
        } else if world.is_obstacle(cell) {
            'X'
        } else {
            '.'
        };
        print!("{}", symbol);
        if cell.col + 1 == world.width() {
            println!();
        }
    }
}

fn parse_cell(s: &str) -> Option<Cell> {
    let (row, col) = s.split_once(',')?;
    Some(Cell::new(row.trim().parse().ok()?, col.trim().parse().ok()?))
}

fn arg_value<'a>(args: &'a [String], key: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}
