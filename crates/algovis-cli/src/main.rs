//! Algovis CLI - exercises the algorithm engines from a terminal.
//!
//! The engine API is for building visual front-ends; the CLI is for quick
//! runs, timing comparisons, and scripted checks.

mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};

use algovis_common::ValueKind;
use algovis_core::graph::PathAlgorithm;
use algovis_core::list::ListSortAlgorithm;
use algovis_core::sort::SortAlgorithm;
use algovis_core::tree::{NaryTraversal, TraversalOrder};

/// Algovis algorithm runner.
///
/// Generates data, runs the sorting, list, tree, and shortest-path engines,
/// and reports results with timings.
#[derive(Parser)]
#[command(name = "algovis")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, global = true, default_value = "table")]
    format: OutputFormat,

    /// Seed for random data generation (omit for OS entropy)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Suppress progress and info messages
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose debug logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

/// Output format options.
#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable table format (default for TTY)
    #[default]
    Table,
    /// Machine-readable JSON format
    Json,
}

/// Value kind for generated data.
#[derive(Clone, Copy, ValueEnum, Default)]
enum KindArg {
    /// 64-bit signed integers
    #[default]
    Int,
    /// 64-bit floats
    Float,
    /// Uppercase letters
    Char,
    /// Short lowercase strings
    Text,
}

impl From<KindArg> for ValueKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Int => ValueKind::Int,
            KindArg::Float => ValueKind::Float,
            KindArg::Char => ValueKind::Char,
            KindArg::Text => ValueKind::Text,
        }
    }
}

/// Array sorting algorithm.
#[derive(Clone, Copy, ValueEnum, Default)]
enum SortArg {
    /// Bubble sort
    Bubble,
    /// Insertion sort
    Insertion,
    /// Shell sort
    Shell,
    /// Quicksort
    #[default]
    Quick,
}

impl From<SortArg> for SortAlgorithm {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Bubble => SortAlgorithm::Bubble,
            SortArg::Insertion => SortAlgorithm::Insertion,
            SortArg::Shell => SortAlgorithm::Shell,
            SortArg::Quick => SortAlgorithm::Quick,
        }
    }
}

/// Linked-list sorting algorithm.
#[derive(Clone, Copy, ValueEnum, Default)]
enum ListSortArg {
    /// Bubble sort
    #[default]
    Bubble,
    /// Insertion sort
    Insertion,
    /// Selection sort
    Selection,
}

impl From<ListSortArg> for ListSortAlgorithm {
    fn from(arg: ListSortArg) -> Self {
        match arg {
            ListSortArg::Bubble => ListSortAlgorithm::Bubble,
            ListSortArg::Insertion => ListSortAlgorithm::Insertion,
            ListSortArg::Selection => ListSortAlgorithm::Selection,
        }
    }
}

/// Shortest-path algorithm.
#[derive(Clone, Copy, ValueEnum, Default)]
enum PathArg {
    /// Dijkstra (non-negative weights)
    #[default]
    Dijkstra,
    /// Bellman-Ford (detects negative cycles)
    BellmanFord,
    /// Floyd-Warshall (all-pairs, detects negative cycles)
    FloydWarshall,
}

impl From<PathArg> for PathAlgorithm {
    fn from(arg: PathArg) -> Self {
        match arg {
            PathArg::Dijkstra => PathAlgorithm::Dijkstra,
            PathArg::BellmanFord => PathAlgorithm::BellmanFord,
            PathArg::FloydWarshall => PathAlgorithm::FloydWarshall,
        }
    }
}

/// Binary-tree traversal order.
#[derive(Clone, Copy, ValueEnum, Default)]
enum OrderArg {
    /// Root, left, right
    #[default]
    Pre,
    /// Left, root, right
    In,
    /// Left, right, root
    Post,
    /// Level by level
    Bfs,
}

impl From<OrderArg> for TraversalOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Pre => TraversalOrder::PreOrder,
            OrderArg::In => TraversalOrder::InOrder,
            OrderArg::Post => TraversalOrder::PostOrder,
            OrderArg::Bfs => TraversalOrder::BreadthFirst,
        }
    }
}

/// N-ary tree traversal order (no in-order for arbitrary arity).
#[derive(Clone, Copy, ValueEnum, Default)]
enum NaryOrderArg {
    /// Root, then children left to right
    #[default]
    Pre,
    /// Children left to right, then root
    Post,
    /// Level by level
    Bfs,
}

impl From<NaryOrderArg> for NaryTraversal {
    fn from(arg: NaryOrderArg) -> Self {
        match arg {
            NaryOrderArg::Pre => NaryTraversal::PreOrder,
            NaryOrderArg::Post => NaryTraversal::PostOrder,
            NaryOrderArg::Bfs => NaryTraversal::BreadthFirst,
        }
    }
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Generate a random array and sort it
    Sort {
        /// Number of values to generate
        #[arg(long, default_value_t = 100)]
        size: usize,

        /// Kind of values to generate
        #[arg(long, default_value = "int")]
        kind: KindArg,

        /// Sorting algorithm
        #[arg(long, short, default_value = "quick")]
        algorithm: SortArg,

        /// Print the sequence before and after sorting
        #[arg(long)]
        show_values: bool,
    },

    /// Generate a random linked list and sort it
    List {
        /// Number of values to generate
        #[arg(long, default_value_t = 100)]
        size: usize,

        /// Kind of values to generate
        #[arg(long, default_value = "int")]
        kind: KindArg,

        /// Sorting algorithm
        #[arg(long, short, default_value = "bubble")]
        algorithm: ListSortArg,

        /// Use a doubly-linked list
        #[arg(long)]
        double: bool,

        /// Print the list before and after sorting
        #[arg(long)]
        show_values: bool,
    },

    /// Tree operations
    #[command(subcommand)]
    Tree(TreeCommands),

    /// Build a graph and run a shortest-path algorithm
    Graph {
        /// Number of vertices (1 to 50)
        #[arg(long, default_value_t = 8)]
        vertices: usize,

        /// Edge as `from:to:weight`; repeat for each edge
        #[arg(long = "edge", short)]
        edges: Vec<String>,

        /// Shortest-path algorithm
        #[arg(long, short, default_value = "dijkstra")]
        algorithm: PathArg,

        /// Start vertex
        #[arg(long, default_value_t = 0)]
        from: usize,

        /// End vertex
        #[arg(long)]
        to: usize,
    },
}

/// Tree commands.
#[derive(Subcommand)]
enum TreeCommands {
    /// Insert integers into a binary search tree and traverse it
    Bst {
        /// Values to insert, in order
        values: Vec<i64>,

        /// Traversal order
        #[arg(long, short, default_value = "pre")]
        order: OrderArg,
    },

    /// Build an n-ary tree from parent:child pairs and traverse it
    Nary {
        /// Root value
        root: i64,

        /// Insertion as `parent:child`; repeat for each node
        #[arg(long = "node", short)]
        nodes: Vec<String>,

        /// Traversal order
        #[arg(long, short, default_value = "pre")]
        order: NaryOrderArg,

        /// Also convert to binary (first-child/next-sibling) and traverse
        #[arg(long)]
        to_binary: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else if !cli.quiet {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    let result = match cli.command {
        Commands::Sort {
            size,
            kind,
            algorithm,
            show_values,
        } => commands::sort::run(
            size,
            kind.into(),
            algorithm.into(),
            show_values,
            cli.seed,
            cli.format,
            cli.quiet,
        ),
        Commands::List {
            size,
            kind,
            algorithm,
            double,
            show_values,
        } => commands::list::run(
            size,
            kind.into(),
            algorithm.into(),
            double,
            show_values,
            cli.seed,
            cli.format,
            cli.quiet,
        ),
        Commands::Tree(cmd) => commands::tree::run(cmd, cli.format, cli.quiet),
        Commands::Graph {
            vertices,
            edges,
            algorithm,
            from,
            to,
        } => commands::graph::run(
            vertices,
            &edges,
            algorithm.into(),
            from,
            to,
            cli.format,
            cli.quiet,
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
