//! Mutable deck of cards.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::hand::Hand;

/// A mutable ordered stack of cards.
///
/// The top of the deck is the end of the backing vector, so dealing pops
/// from the end. Fresh decks come from [`Game::full_deck`], which snapshots
/// the canonical card set for the ruleset.
///
/// [`Game::full_deck`]: crate::Game::full_deck
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a deck holding the given cards, last card on top.
    #[must_use]
    pub const fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffles the deck.
    pub fn shuffle(&mut self, rng: &mut ChaCha8Rng) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top `n` cards, or `None` when fewer than `n`
    /// remain. The order of the remaining deck is preserved.
    pub fn deal(&mut self, n: usize) -> Option<Hand> {
        if self.cards.len() < n {
            return None;
        }
        let mut dealt = Vec::with_capacity(n);
        for _ in 0..n {
            dealt.push(self.cards.pop()?);
        }
        Some(Hand::new(dealt))
    }

    /// Returns the top `n` cards (or all of them, if fewer remain) in deal
    /// order, without removing them.
    #[must_use]
    pub fn peek(&self, n: usize) -> Vec<Card> {
        self.cards.iter().rev().take(n).copied().collect()
    }

    /// Removes exactly one occurrence per repetition of each card in
    /// `cards`, keyed on card value. Cards not present are ignored.
    pub fn remove(&mut self, cards: &[Card]) {
        let mut counts: HashMap<Card, usize> = HashMap::new();
        for &c in cards {
            *counts.entry(c).or_insert(0) += 1;
        }
        self.cards.retain(|c| match counts.get_mut(c) {
            Some(n) if *n > 0 => {
                *n -= 1;
                false
            }
            _ => true,
        });
    }
}
