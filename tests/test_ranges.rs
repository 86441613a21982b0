use std::io::Write;
use std::path::PathBuf;

use range_drill::cards::{Card, Rank, Suit};
use range_drill::decision::{decide, Action};
use range_drill::error::DrillError;
use range_drill::hand::Hand;
use range_drill::ranges::*;

fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn temp_range_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("range-drill-{}-{}", std::process::id(), name));
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn test_builtin_lookup_is_case_insensitive() {
    let upper = RangeSource::Builtin.ranges_for("BU").unwrap();
    let lower = RangeSource::Builtin.ranges_for("bu").unwrap();
    assert_eq!(upper, lower);
    assert!(upper.contains("AKs"));
}

#[test]
fn test_builtin_missing_position() {
    assert!(matches!(
        RangeSource::Builtin.ranges_for("BTN"),
        Err(DrillError::PositionNotFound(_))
    ));
}

#[test]
fn test_file_source_round_trip() {
    let path = temp_range_file("roundtrip", r#"{"bu": ["AA", "AKs", "72o"]}"#);
    let source = RangeSource::File(path.clone());

    // 7c2d encodes to 72o, which is in the range.
    let offsuit = Hand::new(vec![
        card(Rank::Seven, Suit::Clubs),
        card(Rank::Two, Suit::Diamonds),
    ]);
    assert_eq!(decide(&source, "BU", &offsuit).unwrap(), Action::Open);

    // 7c2c encodes to 72s; only the offsuit combo is listed.
    let suited = Hand::new(vec![
        card(Rank::Seven, Suit::Clubs),
        card(Rank::Two, Suit::Clubs),
    ]);
    assert_eq!(decide(&source, "bu", &suited).unwrap(), Action::Fold);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_missing_position_is_not_a_fold() {
    let path = temp_range_file("missing-pos", r#"{"bu": ["AA"]}"#);
    let source = RangeSource::File(path.clone());

    let hand = Hand::new(vec![
        card(Rank::Ace, Suit::Spades),
        card(Rank::Ace, Suit::Hearts),
    ]);
    assert!(matches!(
        decide(&source, "utg", &hand),
        Err(DrillError::PositionNotFound(_))
    ));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_missing_file_propagates_io_error() {
    let source = RangeSource::File(PathBuf::from("/nonexistent/open_ranges.json"));
    assert!(matches!(
        source.ranges_for("bu"),
        Err(DrillError::Io(_))
    ));
}

#[test]
fn test_malformed_file_propagates_json_error() {
    let path = temp_range_file("malformed", "{not json");
    let source = RangeSource::File(path.clone());
    assert!(matches!(source.ranges_for("bu"), Err(DrillError::Json(_))));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_file_source_rereads_every_lookup() {
    let path = temp_range_file("reread", r#"{"bu": ["AA"]}"#);
    let source = RangeSource::File(path.clone());

    let hand = Hand::new(vec![
        card(Rank::King, Suit::Spades),
        card(Rank::King, Suit::Hearts),
    ]);
    assert_eq!(decide(&source, "bu", &hand).unwrap(), Action::Fold);

    // An external edit between lookups is visible on the next one.
    std::fs::write(&path, r#"{"bu": ["AA", "KK"]}"#).unwrap();
    assert_eq!(decide(&source, "bu", &hand).unwrap(), Action::Open);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_decide_with_builtin_ranges() {
    // AA opens from everywhere; 72o opens from nowhere in the defaults.
    let aces = Hand::new(vec![
        card(Rank::Ace, Suit::Spades),
        card(Rank::Ace, Suit::Hearts),
    ]);
    let trash = Hand::new(vec![
        card(Rank::Seven, Suit::Clubs),
        card(Rank::Two, Suit::Diamonds),
    ]);
    for pos in POSITIONS {
        assert_eq!(decide(&RangeSource::Builtin, pos, &aces).unwrap(), Action::Open);
        assert_eq!(decide(&RangeSource::Builtin, pos, &trash).unwrap(), Action::Fold);
    }
}

#[test]
fn test_decide_rejects_oversized_hand() {
    let hand = Hand::new(vec![
        card(Rank::Ace, Suit::Spades),
        card(Rank::King, Suit::Spades),
        card(Rank::Queen, Suit::Spades),
    ]);
    assert!(matches!(
        decide(&RangeSource::Builtin, "bu", &hand),
        Err(DrillError::InvalidHandSize(3))
    ));
}

#[test]
fn test_total_combos_and_pct() {
    let hands = ["AA", "AKs", "AKo"];
    assert_eq!(total_combos(hands), 6 + 4 + 12);
    assert!((range_pct(hands) - 22.0 / 1326.0 * 100.0).abs() < 1e-9);
}
