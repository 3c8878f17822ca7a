//! Pegging history integration tests.
//!
//! Throughout these tests player 0 is the dealer and player 1 the
//! non-dealer, so the non-dealer acts first.

use cribrs::{Card, Game, GameOptions, Hand, PeggingHistory, PlayError};

fn game() -> Game {
    Game::new(GameOptions::default(), 0)
}

fn card(game: &Game, text: &str) -> Card {
    game.parse_card(text).unwrap()
}

fn hand(game: &Game, text: &str) -> Hand {
    Hand::new(
        text.split_whitespace()
            .map(|t| game.parse_card(t).unwrap())
            .collect(),
    )
}

#[test]
fn fresh_history_is_at_a_round_start() {
    let game = game();
    let history = PeggingHistory::new();
    assert_eq!(history.total(), 0);
    assert!(history.start_round(&game));
    assert!(!history.is_terminal(&game));
    assert!(!history.has_passed(0));
    assert_eq!(history.last_score().total(), 0);
}

#[test]
fn reaching_the_scoring_sum_scores() {
    let game = game();
    let mut history = PeggingHistory::new();

    let opening = history.play(&game, Some(card(&game, "7S")), 1).unwrap();
    assert_eq!(opening.total(), 0);
    assert_eq!(history.total(), 7);

    let fifteen = history.play(&game, Some(card(&game, "8H")), 0).unwrap();
    assert_eq!(fifteen.fifteens, 2);
    assert_eq!(fifteen.runs, 0);
    assert_eq!(fifteen.total(), 2);
    assert_eq!(history.total(), 15);
}

#[test]
fn runs_count_regardless_of_play_order() {
    let game = game();
    let mut history = PeggingHistory::new();
    history.play(&game, Some(card(&game, "4S")), 1).unwrap();
    history.play(&game, Some(card(&game, "6H")), 0).unwrap();

    // 4, 6, 5 completes both a run of three and a fifteen
    let score = history.play(&game, Some(card(&game, "5D")), 1).unwrap();
    assert_eq!(score.runs, 3);
    assert_eq!(score.fifteens, 2);
    assert_eq!(score.total(), 5);
}

#[test]
fn consecutive_matches_score_pairs_royal() {
    let game = game();
    let mut history = PeggingHistory::new();
    history.play(&game, Some(card(&game, "8S")), 1).unwrap();

    let pair = history.play(&game, Some(card(&game, "8H")), 0).unwrap();
    assert_eq!(pair.pairs, 2);

    let royal = history.play(&game, Some(card(&game, "8D")), 1).unwrap();
    assert_eq!(royal.pairs, 6);
    assert_eq!(history.total(), 24);
}

#[test]
fn exact_limit_scores_two_and_resets_the_round() {
    let game = game();
    let mut history = PeggingHistory::new();
    history.play(&game, Some(card(&game, "TS")), 1).unwrap();
    history.play(&game, Some(card(&game, "TH")), 0).unwrap();
    history.play(&game, Some(card(&game, "5D")), 1).unwrap();

    let exact = history.play(&game, Some(card(&game, "6C")), 0).unwrap();
    assert_eq!(exact.last, 2);
    assert_eq!(exact.total(), 2);
    assert!(history.start_round(&game));

    // next play opens a fresh count
    let fresh = history.play(&game, Some(card(&game, "9S")), 1).unwrap();
    assert_eq!(fresh.total(), 0);
    assert_eq!(history.total(), 9);
}

#[test]
fn exact_limit_after_a_go_scores_one() {
    let game = game();
    let mut history = PeggingHistory::new();
    history.play(&game, Some(card(&game, "TS")), 1).unwrap();
    history.play(&game, Some(card(&game, "TH")), 0).unwrap();
    history.play(&game, Some(card(&game, "9D")), 1).unwrap();

    let go = history.play(&game, None, 0).unwrap();
    assert_eq!(go.total(), -1);

    // the go point is already conceded, so landing on the limit earns one
    let exact = history.play(&game, Some(card(&game, "2S")), 1).unwrap();
    assert_eq!(exact.last, 1);
    assert_eq!(exact.total(), 1);
    assert!(history.start_round(&game));
}

#[test]
fn passing_concedes_a_go() {
    let game = game();
    let mut history = PeggingHistory::new();
    history.play(&game, Some(card(&game, "TS")), 1).unwrap();
    history.play(&game, Some(card(&game, "TH")), 0).unwrap();
    history.play(&game, Some(card(&game, "9D")), 1).unwrap();

    // the first pass of the round credits the opponent one point
    let go = history.play(&game, None, 0).unwrap();
    assert_eq!(go.last, -1);
    assert_eq!(go.total(), -1);
    assert!(history.has_passed(0));

    // the answering pass scores nothing, the go is already conceded
    let answer = history.play(&game, None, 1).unwrap();
    assert_eq!(answer.total(), 0);
    assert!(history.start_round(&game));

    let plays = history.plays();
    assert_eq!(plays.len(), 1);
    assert_eq!(plays[0].len(), 5);
    assert_eq!(plays[0][0], (1, Some(card(&game, "TS"))));
    assert_eq!(plays[0][3], (0, None));
    assert_eq!(plays[0][4], (1, None));
}

#[test]
fn playing_after_a_pass_is_rejected() {
    let game = game();
    let mut history = PeggingHistory::new();
    history.play(&game, Some(card(&game, "TS")), 1).unwrap();
    history.play(&game, None, 0).unwrap();
    history.play(&game, Some(card(&game, "TH")), 1).unwrap();

    let result = history.play(&game, Some(card(&game, "5S")), 0);
    assert_eq!(result, Err(PlayError::AlreadyPassed));
}

#[test]
fn exceeding_the_limit_is_rejected() {
    let game = game();
    let mut history = PeggingHistory::new();
    history.play(&game, Some(card(&game, "TS")), 1).unwrap();
    history.play(&game, Some(card(&game, "TH")), 0).unwrap();
    history.play(&game, Some(card(&game, "TD")), 1).unwrap();

    assert!(!history.is_legal(&game, card(&game, "5H")));
    let result = history.play(&game, Some(card(&game, "5H")), 0);
    assert_eq!(result, Err(PlayError::OverLimit));

    assert!(history.is_legal(&game, card(&game, "AS")));
}

#[test]
fn acting_twice_in_a_row_is_rejected() {
    let game = game();
    let mut history = PeggingHistory::new();
    history.play(&game, Some(card(&game, "TS")), 1).unwrap();

    let result = history.play(&game, Some(card(&game, "5H")), 1);
    assert_eq!(result, Err(PlayError::WrongTurn));
}

#[test]
fn has_legal_play_respects_limit_and_passes() {
    let game = game();
    let mut history = PeggingHistory::new();
    history.play(&game, Some(card(&game, "TS")), 1).unwrap();
    history.play(&game, Some(card(&game, "TH")), 0).unwrap();
    history.play(&game, Some(card(&game, "TD")), 1).unwrap();

    assert!(history.has_legal_play(&game, &hand(&game, "KS AS"), 0));
    assert!(!history.has_legal_play(&game, &hand(&game, "KS QS"), 0));

    history.play(&game, None, 0).unwrap();
    // a passed player has no legal play until the round resets
    assert!(!history.has_legal_play(&game, &hand(&game, "AS"), 0));
}

#[test]
fn score_probes_without_mutating() {
    let game = game();
    let mut history = PeggingHistory::new();
    history.play(&game, Some(card(&game, "7S")), 1).unwrap();

    let probe = history.score(&game, Some(card(&game, "8H")), 0).unwrap();
    assert_eq!(probe.fifteens, 2);
    assert_eq!(history.total(), 7);

    // the probe did not apply, the same play still succeeds
    let applied = history.play(&game, Some(card(&game, "8H")), 0).unwrap();
    assert_eq!(applied, probe);
}

#[test]
fn hand_ends_when_all_kept_cards_are_played() {
    let game = game();
    let mut history = PeggingHistory::new();
    let sequence = ["AS", "AH", "2S", "2H", "3S", "3H", "4S", "4C"];

    for (i, text) in sequence.iter().enumerate() {
        let player = (i + 1) % 2;
        let score = history.play(&game, Some(card(&game, text)), player).unwrap();
        if *text == "4C" {
            assert_eq!(score.pairs, 2);
            assert_eq!(score.last, 1);
            assert_eq!(score.total(), 3);
        }
    }

    assert!(history.is_terminal(&game));
    assert_eq!(history.total(), 20);
    assert_eq!(history.plays().concat().len(), 8);
}
