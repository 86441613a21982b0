use std::collections::HashSet;

use colored::{ColoredString, Colorize};
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::cards::{Card, Suit};
use crate::decision::Action;
use crate::hand::Hand;

const RANGE_GRID_RANKS: [char; 13] = [
    'A', 'K', 'Q', 'J', 'T', '9', '8', '7', '6', '5', '4', '3', '2',
];

fn suit_colored(card: &Card, text: String) -> ColoredString {
    match card.suit {
        Suit::Spades => text.white(),
        Suit::Hearts => text.red(),
        Suit::Diamonds => text.blue(),
        Suit::Clubs => text.green(),
    }
}

pub fn hand_display(hand: &Hand) -> String {
    hand.cards()
        .iter()
        .map(|card| suit_colored(card, card.pretty()).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Side-by-side ASCII card fronts, one box per card.
pub fn hand_art(hand: &Hand) -> String {
    let mut lines = vec![String::new(); 5];
    for card in hand.cards() {
        let rank = card.rank.to_char();
        let symbol = card.suit.symbol();
        let rows = [
            "\u{250c}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2510}".to_string(),
            format!("\u{2502}{}    \u{2502}", rank),
            format!("\u{2502}  {}  \u{2502}", symbol),
            format!("\u{2502}    {}\u{2502}", rank),
            "\u{2514}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2518}".to_string(),
        ];
        for (line, row) in lines.iter_mut().zip(rows) {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(&suit_colored(card, row).to_string());
        }
    }
    lines.join("\n")
}

/// 13x13 starting-hand grid with the in-range hands highlighted. Pairs on
/// the diagonal, suited above, offsuit below.
pub fn range_grid(hands_in_range: &HashSet<String>, title: &str) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("")];
    for &r in &RANGE_GRID_RANKS {
        header.push(Cell::new(r).set_alignment(CellAlignment::Center));
    }
    table.set_header(header);

    for (i, &r1) in RANGE_GRID_RANKS.iter().enumerate() {
        let mut row = vec![Cell::new(format!("{}", r1).bold().to_string())];
        for (j, &r2) in RANGE_GRID_RANKS.iter().enumerate() {
            let hand = if i == j {
                format!("{}{}", r1, r2)
            } else if i < j {
                format!("{}{}s", r1, r2)
            } else {
                format!("{}{}o", r2, r1)
            };

            let cell = if hands_in_range.contains(hand.as_str()) {
                Cell::new(hand.green().bold().to_string())
            } else {
                Cell::new(hand.dimmed().to_string())
            };
            row.push(cell.set_alignment(CellAlignment::Center));
        }
        table.add_row(row);
    }

    format!("  {}\n{}", title.bold(), table)
}

pub fn styled_action(action: Action) -> String {
    match action {
        Action::Open => "OPEN".green().bold().to_string(),
        Action::Fold => "FOLD".dimmed().bold().to_string(),
    }
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "Error:".red().bold(), msg);
}
