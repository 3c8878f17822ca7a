//! Match orchestration and batch evaluation integration tests.

use cribrs::{
    Card, CompoundPolicy, EvaluationResults, Game, GameOptions, GreedyPegger, GreedyThrower, Hand,
    MatchError, PeggingHistory, Policy, RandomPegger, RandomThrower, Thrower,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn game(seed: u64) -> Game {
    Game::new(GameOptions::default(), seed)
}

/// Discards sensibly, then passes at every pegging turn.
struct AlwaysPass;

impl Policy for AlwaysPass {
    fn keep(
        &self,
        game: &Game,
        hand: &Hand,
        scores: [u32; 2],
        am_dealer: bool,
        rng: &mut ChaCha8Rng,
    ) -> (Hand, Hand) {
        RandomThrower.keep(game, hand, scores, am_dealer, rng)
    }

    fn peg(
        &self,
        _game: &Game,
        _hand: &Hand,
        _history: &PeggingHistory,
        _cut: Card,
        _scores: [u32; 2],
        _am_dealer: bool,
        _rng: &mut ChaCha8Rng,
    ) -> Option<Card> {
        None
    }
}

/// Keeps the whole dealt hand and throws nothing.
struct KeepsEverything;

impl Policy for KeepsEverything {
    fn keep(
        &self,
        _game: &Game,
        hand: &Hand,
        _scores: [u32; 2],
        _am_dealer: bool,
        _rng: &mut ChaCha8Rng,
    ) -> (Hand, Hand) {
        (hand.clone(), Hand::new(Vec::new()))
    }

    fn peg(
        &self,
        _game: &Game,
        _hand: &Hand,
        _history: &PeggingHistory,
        _cut: Card,
        _scores: [u32; 2],
        _am_dealer: bool,
        _rng: &mut ChaCha8Rng,
    ) -> Option<Card> {
        None
    }
}

/// Returns hands that do not partition the deal at all.
struct DropsCards;

impl Policy for DropsCards {
    fn keep(
        &self,
        _game: &Game,
        _hand: &Hand,
        _scores: [u32; 2],
        _am_dealer: bool,
        _rng: &mut ChaCha8Rng,
    ) -> (Hand, Hand) {
        (Hand::new(Vec::new()), Hand::new(Vec::new()))
    }

    fn peg(
        &self,
        _game: &Game,
        _hand: &Hand,
        _history: &PeggingHistory,
        _cut: Card,
        _scores: [u32; 2],
        _am_dealer: bool,
        _rng: &mut ChaCha8Rng,
    ) -> Option<Card> {
        None
    }
}

/// Discards sensibly, then pegs a card it does not hold.
struct PlaysForeignCards;

impl Policy for PlaysForeignCards {
    fn keep(
        &self,
        game: &Game,
        hand: &Hand,
        scores: [u32; 2],
        am_dealer: bool,
        rng: &mut ChaCha8Rng,
    ) -> (Hand, Hand) {
        RandomThrower.keep(game, hand, scores, am_dealer, rng)
    }

    fn peg(
        &self,
        game: &Game,
        hand: &Hand,
        _history: &PeggingHistory,
        _cut: Card,
        _scores: [u32; 2],
        _am_dealer: bool,
        _rng: &mut ChaCha8Rng,
    ) -> Option<Card> {
        game.full_deck()
            .peek(52)
            .into_iter()
            .find(|c| !hand.cards().contains(c))
    }
}

#[test]
fn full_match_runs_to_completion() {
    let game = game(7);
    let greedy = CompoundPolicy::new(GreedyThrower, GreedyPegger);
    let random = CompoundPolicy::new(RandomThrower, RandomPegger);

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let result = game.play(&greedy, &random, &mut rng).unwrap();
    assert_ne!(result.value, 0);
    assert!(result.value.abs() <= 3);
    assert!(result.hands_played >= 1);
}

#[test]
fn matches_are_reproducible_from_the_seed() {
    let greedy = CompoundPolicy::new(GreedyThrower, GreedyPegger);
    let random = CompoundPolicy::new(RandomThrower, RandomPegger);

    let mut first_rng = ChaCha8Rng::seed_from_u64(99);
    let mut second_rng = ChaCha8Rng::seed_from_u64(99);
    let first = game(99).play(&greedy, &random, &mut first_rng).unwrap();
    let second = game(99).play(&greedy, &random, &mut second_rng).unwrap();
    assert_eq!(first, second);
}

#[test]
fn evaluation_aggregates_every_match() {
    let game = game(11);
    let greedy = CompoundPolicy::new(GreedyThrower, GreedyPegger);
    let random = CompoundPolicy::new(RandomThrower, RandomPegger);

    let results = game.evaluate(&greedy, &random, 6).unwrap();
    assert_eq!(results.games(), 6);
    assert_eq!(results.margins().values().sum::<usize>(), 6);
    for &margin in results.margins().keys() {
        assert_ne!(margin, 0);
        assert!(margin.abs() <= 3);
    }
    assert!(results.average_hands() > 0.0);
    assert!(results.mean().abs() <= 3.0);
    assert!(results.two_std_errs() >= 0.0);
    assert!(format!("{results}").contains("games"));
}

#[test]
fn evaluation_is_deterministic_for_a_seed() {
    let greedy = CompoundPolicy::new(GreedyThrower, GreedyPegger);
    let random = CompoundPolicy::new(RandomThrower, RandomPegger);

    let first = game(5).evaluate(&greedy, &random, 8).unwrap();
    let second = game(5).evaluate(&greedy, &random, 8).unwrap();
    assert_eq!(first, second);
}

#[test]
fn greedy_outplays_random_over_a_batch() {
    let game = game(3);
    let greedy = CompoundPolicy::new(GreedyThrower, GreedyPegger);
    let random = CompoundPolicy::new(RandomThrower, RandomPegger);

    let results = game.evaluate(&greedy, &random, 40).unwrap();
    assert!(results.mean() > 0.0);
    assert!(results.p0_average() > results.p1_average());
}

#[test]
fn passing_with_a_legal_play_aborts_the_match() {
    let game = game(1);
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let result = game.play(&AlwaysPass, &AlwaysPass, &mut rng);
    assert_eq!(result, Err(MatchError::PassWithLegalPlay));
}

#[test]
fn keeping_the_wrong_number_of_cards_aborts_the_match() {
    let game = game(1);
    let greedy = CompoundPolicy::new(GreedyThrower, GreedyPegger);
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let result = game.play(&KeepsEverything, &greedy, &mut rng);
    assert_eq!(result, Err(MatchError::WrongKeepSize));
}

#[test]
fn discarding_outside_the_deal_aborts_the_match() {
    let game = game(1);
    let greedy = CompoundPolicy::new(GreedyThrower, GreedyPegger);
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let result = game.play(&DropsCards, &greedy, &mut rng);
    assert_eq!(result, Err(MatchError::InvalidPartition));
}

#[test]
fn pegging_a_card_outside_the_hand_aborts_the_match() {
    let game = game(1);
    let greedy = CompoundPolicy::new(GreedyThrower, GreedyPegger);
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let result = game.play(&PlaysForeignCards, &greedy, &mut rng);
    assert_eq!(result, Err(MatchError::CardNotInHand));
}

#[test]
fn update_folds_outcomes_into_the_report() {
    let mut results = EvaluationResults::default();
    results.update(3, 10);
    results.update(-1, 8);

    assert_eq!(results.games(), 2);
    assert_eq!(results.margins().get(&3), Some(&1));
    assert_eq!(results.margins().get(&-1), Some(&1));
    assert!((results.mean() - 1.0).abs() < 1e-9);
    assert!((results.p0_average() - 1.5).abs() < 1e-9);
    assert!((results.p1_average() - 0.5).abs() < 1e-9);
    assert!((results.average_hands() - 9.0).abs() < 1e-9);
    // margins 3 and -1: variance 4, two standard errors = 2 * sqrt(4 / 2)
    assert!((results.two_std_errs() - 2.0 * 2.0_f64.sqrt()).abs() < 1e-9);
}
