use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;

use crate::cards::parse_cards;
use crate::decision::decide;
use crate::display::{hand_display, print_error, range_grid, styled_action};
use crate::drill::{drill_command, DrillConfig};
use crate::hand::Hand;
use crate::ranges::{range_pct, total_combos, validate_position, RangeSource};

#[derive(Parser)]
#[command(
    name = "drill",
    version,
    about = "Preflop trainer \u{2014} drill open/fold decisions against positional opening ranges."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive trainer: random hand, random position, open or fold?
    Drill {
        /// Range file (JSON: lowercase position -> array of notations)
        #[arg(short, long)]
        ranges: Option<PathBuf>,
        /// Append one line per hand to this history file
        #[arg(long)]
        history: Option<PathBuf>,
        /// Stop after this many hands (default: drill until 'q')
        #[arg(short = 'n', long)]
        hands: Option<usize>,
        /// Seed the deal for a reproducible session
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the opening range for a position
    Range {
        /// Position (SB, UTG, UTG+1, MP1, LJ, HJ, CO, BU)
        position: String,
        /// Range file (JSON: lowercase position -> array of notations)
        #[arg(short, long)]
        ranges: Option<PathBuf>,
    },
    /// One-shot verdict for concrete cards, e.g. `drill check BU 7c2d`
    Check {
        /// Position (SB, UTG, UTG+1, MP1, LJ, HJ, CO, BU)
        position: String,
        /// Two cards, e.g. AhKs or 10c7d
        cards: String,
        /// Range file (JSON: lowercase position -> array of notations)
        #[arg(short, long)]
        ranges: Option<PathBuf>,
    },
}

fn range_source(ranges: Option<PathBuf>) -> RangeSource {
    match ranges {
        Some(path) => RangeSource::File(path),
        None => RangeSource::Builtin,
    }
}

pub fn run() {
    let cli = Cli::parse();
    match cli.command {
        Commands::Drill {
            ranges,
            history,
            hands,
            seed,
        } => {
            let config = DrillConfig {
                ranges: range_source(ranges),
                history,
                hands,
                seed,
            };
            if let Err(e) = drill_command(&config) {
                print_error(&e.to_string());
                std::process::exit(1);
            }
        }
        Commands::Range { position, ranges } => cmd_range(position, range_source(ranges)),
        Commands::Check {
            position,
            cards,
            ranges,
        } => cmd_check(position, cards, range_source(ranges)),
    }
}

fn cmd_range(position: String, source: RangeSource) {
    let position = match validate_position(&position) {
        Ok(p) => p,
        Err(e) => {
            print_error(&e);
            return;
        }
    };

    let hands = match source.ranges_for(&position) {
        Ok(h) => h,
        Err(e) => {
            print_error(&e.to_string());
            return;
        }
    };

    println!();
    println!(
        "{}",
        range_grid(&hands, &format!("{} Open Range", position))
    );
    println!();
    println!(
        "  {} hands | {} combos | {:.1}% of hands",
        hands.len().to_string().bold(),
        total_combos(&hands).to_string().bold(),
        range_pct(&hands),
    );
    println!();
}

fn cmd_check(position: String, cards: String, source: RangeSource) {
    let position = match validate_position(&position) {
        Ok(p) => p,
        Err(e) => {
            print_error(&e);
            return;
        }
    };

    let parsed = match parse_cards(&cards) {
        Ok(c) => c,
        Err(e) => {
            print_error(&e.to_string());
            return;
        }
    };

    if parsed.len() == 2 && parsed[0].same_card(&parsed[1]) {
        print_error(&format!("Duplicate card in hand: {}", cards));
        return;
    }

    let hand = Hand::new(parsed);
    match decide(&source, &position, &hand) {
        Ok(verdict) => {
            let notation = hand.notation().unwrap_or_else(|_| "??".to_string());
            println!();
            println!(
                "  {} ({}) from {}: {}",
                hand_display(&hand),
                notation.dimmed(),
                position.bold(),
                styled_action(verdict)
            );
            println!();
        }
        Err(e) => print_error(&e.to_string()),
    }
}
