use std::fs::OpenOptions;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use colored::Colorize;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cards::deal;
use crate::decision::{decide, Action};
use crate::display::{hand_art, hand_display, styled_action};
use crate::error::DrillResult;
use crate::hand::Hand;
use crate::ranges::{explain_position, RangeSource, POSITIONS};

pub struct DrillConfig {
    pub ranges: RangeSource,
    pub history: Option<PathBuf>,
    pub hands: Option<usize>,
    pub seed: Option<u64>,
}

impl Default for DrillConfig {
    fn default() -> Self {
        DrillConfig {
            ranges: RangeSource::Builtin,
            history: None,
            hands: None,
            seed: None,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub correct: u32,
    pub wrong: u32,
}

impl Score {
    pub fn rounds(&self) -> u32 {
        self.correct + self.wrong
    }

    pub fn accuracy(&self) -> f64 {
        if self.rounds() == 0 {
            return 0.0;
        }
        f64::from(self.correct) / f64::from(self.rounds()) * 100.0
    }
}

pub fn drill_command(config: &DrillConfig) -> DrillResult<Score> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut reader = stdin.lock();
    let mut writer = stdout.lock();
    run_session(config, &mut reader, &mut writer)
}

pub fn run_session(
    config: &DrillConfig,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
) -> DrillResult<Score> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    writeln!(writer).ok();
    writeln!(
        writer,
        "{}",
        "Range Drill \u{2014} open or fold?".cyan().bold()
    )
    .ok();
    writeln!(
        writer,
        "Answer {} to open, {} to fold, {} to quit.\n",
        "'o'".bold(),
        "'f'".bold(),
        "'q'".bold()
    )
    .ok();

    let mut score = Score::default();

    loop {
        if let Some(limit) = config.hands {
            if score.rounds() as usize >= limit {
                break;
            }
        }

        match drill_one_round(config, &mut rng, &mut score, reader, writer)? {
            RoundOutcome::Played => {}
            RoundOutcome::Quit => break,
        }
    }

    print_summary(&score, writer);
    Ok(score)
}

enum RoundOutcome {
    Played,
    Quit,
}

fn drill_one_round(
    config: &DrillConfig,
    rng: &mut StdRng,
    score: &mut Score,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
) -> DrillResult<RoundOutcome> {
    let cards = deal(rng, 2)?;
    let hand = Hand::new(cards);
    let position = POSITIONS[rng.gen_range(0..POSITIONS.len())];

    writeln!(writer, "{}", hand_art(&hand)).ok();
    writeln!(
        writer,
        "  Position: {}  {}",
        position.bold(),
        explain_position(position).dimmed()
    )
    .ok();
    writeln!(
        writer,
        "  Correct: {}  Wrong: {}",
        score.correct.to_string().green(),
        score.wrong.to_string().red()
    )
    .ok();

    // Verdict is computed before touching the table output so a broken
    // range file fails the round instead of scoring it.
    let verdict = decide(&config.ranges, position, &hand)?;

    let answer = loop {
        match prompt("  (o)pen / (f)old / (q)uit", reader, writer) {
            None => break None,
            Some(text) => match text.chars().next() {
                Some('o') => break Some(Action::Open),
                Some('f') => break Some(Action::Fold),
                Some('q') => break None,
                _ => {
                    writeln!(writer, "  {}", "Answer o, f, or q.".red()).ok();
                }
            },
        }
    };

    let answer = match answer {
        Some(a) => a,
        None => return Ok(RoundOutcome::Quit),
    };

    let matched = answer == verdict;
    if matched {
        score.correct += 1;
        writeln!(
            writer,
            "  {} {} {} was the move.",
            "Correct!".green().bold(),
            hand_display(&hand),
            styled_action(verdict)
        )
        .ok();
    } else {
        score.wrong += 1;
        writeln!(
            writer,
            "  {} {} should {}.",
            "Wrong.".red().bold(),
            hand_display(&hand),
            styled_action(verdict)
        )
        .ok();
    }
    writeln!(writer).ok();

    if let Some(path) = &config.history {
        // Best-effort: a failed history append never ends the session.
        if let Err(e) = append_history(path, position, &hand, verdict, matched) {
            writeln!(writer, "  {}", format!("History not saved: {}", e).yellow()).ok();
        }
    }

    Ok(RoundOutcome::Played)
}

fn append_history(
    path: &PathBuf,
    position: &str,
    hand: &Hand,
    verdict: Action,
    matched: bool,
) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(
        file,
        "{} {} {} {}",
        position,
        hand,
        verdict,
        u8::from(matched)
    )
}

fn prompt(message: &str, reader: &mut dyn BufRead, writer: &mut dyn Write) -> Option<String> {
    write!(writer, "{}: ", message).ok();
    writer.flush().ok();

    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_lowercase()),
    }
}

fn print_summary(score: &Score, writer: &mut dyn Write) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Session".bold().to_string()),
        Cell::new("").set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Hands"),
        Cell::new(score.rounds().to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Correct"),
        Cell::new(score.correct.to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Wrong"),
        Cell::new(score.wrong.to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Accuracy"),
        Cell::new(format!("{:.1}%", score.accuracy())),
    ]);
    writeln!(writer, "{}", table).ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn session(config: &DrillConfig, input: &[u8]) -> (Score, String) {
        let mut reader = input;
        let mut output = Vec::new();
        let score = run_session(config, &mut reader, &mut output).unwrap();
        (score, String::from_utf8(output).unwrap())
    }

    #[test]
    fn quit_immediately_plays_no_rounds() {
        let config = DrillConfig::default();
        let (score, out) = session(&config, b"q\n");
        assert_eq!(score.rounds(), 0);
        assert!(out.contains("Range Drill"));
    }

    #[test]
    fn eof_ends_the_session() {
        let config = DrillConfig::default();
        let (score, _) = session(&config, b"");
        assert_eq!(score.rounds(), 0);
    }

    #[test]
    fn one_round_is_scored() {
        let config = DrillConfig {
            hands: Some(1),
            seed: Some(42),
            ..DrillConfig::default()
        };
        let (score, out) = session(&config, b"o\n");
        assert_eq!(score.rounds(), 1);
        assert!(out.contains("Position:"));
        assert!(out.contains("Correct!") || out.contains("Wrong."));
        assert!(out.contains("Accuracy"));
    }

    #[test]
    fn same_seed_deals_same_round() {
        let config = DrillConfig {
            hands: Some(1),
            seed: Some(7),
            ..DrillConfig::default()
        };
        let (_, out1) = session(&config, b"f\n");
        let (_, out2) = session(&config, b"f\n");
        assert_eq!(out1, out2);
    }

    #[test]
    fn garbage_input_reprompts() {
        let config = DrillConfig {
            hands: Some(1),
            seed: Some(3),
            ..DrillConfig::default()
        };
        let (score, out) = session(&config, b"x\nf\n");
        assert_eq!(score.rounds(), 1);
        assert!(out.contains("Answer o, f, or q."));
    }

    #[test]
    fn history_line_per_round() {
        let path = std::env::temp_dir().join(format!(
            "range-drill-history-{}-{}",
            std::process::id(),
            line!()
        ));
        let _ = std::fs::remove_file(&path);

        let config = DrillConfig {
            history: Some(path.clone()),
            hands: Some(2),
            seed: Some(11),
            ..DrillConfig::default()
        };
        session(&config, b"o\nf\n");

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            let fields: Vec<&str> = line.split(' ').collect();
            assert_eq!(fields.len(), 4);
            assert!(POSITIONS.contains(&fields[0]));
            assert!(fields[2] == "open" || fields[2] == "fold");
            assert!(fields[3] == "0" || fields[3] == "1");
        }
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_position_in_table_is_fatal() {
        let path = std::env::temp_dir().join(format!(
            "range-drill-ranges-{}-{}",
            std::process::id(),
            line!()
        ));
        std::fs::write(&path, r#"{"bu": ["AA"]}"#).unwrap();

        let config = DrillConfig {
            ranges: RangeSource::File(path.clone()),
            hands: Some(1),
            seed: Some(0),
            ..DrillConfig::default()
        };
        let mut reader: &[u8] = b"o\n";
        let mut output = Vec::new();
        // Seed 0 will land on some position; with a one-key table almost
        // every seed hits a missing key. Accept either outcome but never
        // a silent fold-as-success for a missing entry.
        let result = run_session(&config, &mut reader, &mut output);
        if let Err(e) = result {
            assert!(e.to_string().contains("No range data for position"));
        }
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn accuracy_percentage() {
        let score = Score {
            correct: 2,
            wrong: 1,
        };
        assert_relative_eq!(score.accuracy(), 200.0 / 3.0, epsilon = 1e-9);
        assert_relative_eq!(Score::default().accuracy(), 0.0);
    }
}
