//! Example demonstrating board dealing.
//!
//! Deals one or more boards and prints them as the 4x4 grid the app shows,
//! together with the seed that reproduces each deal.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example deal_board
//! ```
//!
//! Reproduce a specific deal:
//!
//! ```sh
//! cargo run --example deal_board -- --seed 42
//! ```
//!
//! Deal several boards at once:
//!
//! ```sh
//! cargo run --example deal_board -- --count 5
//! ```

use clap::Parser;
use numerush_core::{GRID_SIDE, TileIndex};
use numerush_deal::{BoardDealer, DealtBoard};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed to reproduce a specific deal. Random when omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Number of boards to deal.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    count: usize,
}

fn main() {
    let args = Args::parse();
    let dealer = BoardDealer::new();

    for i in 0..args.count {
        if i > 0 {
            println!();
        }
        let board = match args.seed {
            Some(seed) => dealer.deal_with_seed(seed),
            None => dealer.deal(),
        };
        print_board(&board);
    }
}

fn print_board(board: &DealtBoard) {
    println!("Seed:");
    println!("  {}", board.seed);
    println!();
    println!("Board:");
    for row in TileIndex::ALL.chunks(GRID_SIDE) {
        let line = row
            .iter()
            .map(|index| format!("{:>3}", board.value(*index)))
            .collect::<Vec<_>>()
            .join(" ");
        println!("  {line}");
    }
}
