//! Immutable hands of cards.

use std::collections::HashMap;

use crate::card::Card;

/// An immutable, order-preserving collection of cards.
///
/// Duplicates are permitted: a crib merged from two players' discards may
/// contain two physical copies of the same card when the ruleset deals
/// multiple copies. Hands are never mutated after construction; operations
/// that "change" a hand return a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a hand holding the given cards in the given order.
    #[must_use]
    pub const fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Partitions the hand in two: the cards at the given indices form the
    /// second part, all others the first, relative order preserved in both.
    ///
    /// # Panics
    ///
    /// Panics if `indices` is not a strictly increasing sequence of valid
    /// indices into this hand.
    #[must_use]
    pub fn split(&self, indices: &[usize]) -> (Self, Self) {
        let mut rest = Vec::with_capacity(self.cards.len() - indices.len());
        let mut selected = Vec::with_capacity(indices.len());

        let mut curr = 0;
        for &i in indices {
            rest.extend_from_slice(&self.cards[curr..i]);
            selected.push(self.cards[i]);
            curr = i + 1;
        }
        rest.extend_from_slice(&self.cards[curr..]);

        (Self::new(rest), Self::new(selected))
    }

    /// Concatenates this hand with another, preserving duplicates.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        let mut cards = Vec::with_capacity(self.cards.len() + other.cards.len());
        cards.extend_from_slice(&self.cards);
        cards.extend_from_slice(&other.cards);
        Self::new(cards)
    }

    /// Returns a new hand without the first occurrence equal to `card`, or
    /// an unchanged copy when no occurrence exists.
    #[must_use]
    pub fn remove_one(&self, card: Card) -> Self {
        let mut removed = false;
        let mut retained = Vec::with_capacity(self.cards.len());
        for &c in &self.cards {
            if !removed && c == card {
                removed = true;
            } else {
                retained.push(c);
            }
        }
        Self::new(retained)
    }

    /// Determines whether `parts` is an exact partition of this hand: every
    /// card of the hand accounted for exactly once, no extras, no
    /// omissions. Counting is by card value, never by reference identity.
    #[must_use]
    pub fn is_legal_split(&self, parts: &[&Self]) -> bool {
        let mut counts: HashMap<Card, usize> = HashMap::new();
        for &c in &self.cards {
            *counts.entry(c).or_insert(0) += 1;
        }

        let mut partition_size = 0;
        for part in parts {
            partition_size += part.len();
            for c in part.cards() {
                match counts.get_mut(c) {
                    Some(n) if *n > 0 => *n -= 1,
                    _ => return false,
                }
            }
        }

        partition_size == self.len()
    }
}
