use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use std::time::Instant;
use tree_set::{Tree, TreeOps, TreeSet};

#[derive(Parser)]
#[command(name = "tree-benchmark")]
#[command(about = "A tree and set performance testing tool")]
struct Args {
    #[arg(long, default_value = "10000")]
    size: usize,

    #[arg(long, value_enum, default_value_t = Target::Tree)]
    target: Target,

    /// Insertion order; ascending and descending build a degenerate chain.
    #[arg(long, value_enum, default_value_t = InsertOrder::Shuffled)]
    order: InsertOrder,

    #[arg(long, default_value = "42")]
    seed: u64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Target {
    Tree,
    Set,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InsertOrder {
    Ascending,
    Descending,
    Shuffled,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut values: Vec<usize> = (0..args.size).collect();
    match args.order {
        InsertOrder::Ascending => {}
        InsertOrder::Descending => values.reverse(),
        InsertOrder::Shuffled => {
            let mut rng = rand::rngs::StdRng::seed_from_u64(args.seed);
            values.shuffle(&mut rng);
        }
    }

    println!(
        "Running with {:?} target, {:?} order and {} node count",
        args.target, args.order, args.size
    );

    match args.target {
        Target::Tree => {
            let mut tree = Tree::new();
            run(&mut tree, &values);
            println!("Tree depth {}", depth_after_insert(&values));
        }
        Target::Set => {
            let mut set = TreeSet::new();
            run(&mut set, &values);
        }
    }
}

fn depth_after_insert(values: &[usize]) -> usize {
    let tree: Tree<usize> = values.iter().copied().collect();
    tree.depth()
}

fn run<S: TreeOps<usize>>(tree: &mut S, values: &[usize]) {
    let start = Instant::now();
    for (i, &value) in values.iter().enumerate() {
        assert_eq!(tree.len(), i);
        tree.insert(value);
        assert!(tree.contains(&value));
    }
    let inserted = Instant::now();
    for value in values {
        assert!(tree.contains(value));
    }
    let checked_contains = Instant::now();
    for value in values {
        assert!(tree.remove(value));
    }
    let end = Instant::now();
    assert!(tree.is_empty());

    println!(
        "Inserts took {} seconds",
        inserted.saturating_duration_since(start).as_secs_f32()
    );
    println!(
        "Checking contains took {} seconds",
        checked_contains
            .saturating_duration_since(inserted)
            .as_secs_f32()
    );
    println!(
        "Removals took {} seconds",
        end.saturating_duration_since(checked_contains)
            .as_secs_f32()
    );
    println!(
        "Total {} seconds",
        end.saturating_duration_since(start).as_secs_f32()
    );
}
