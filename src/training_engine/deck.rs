use rand::Rng;
use crate::training_engine::models::{Card, Rank, Suit};

/// A standard 52-card deck that can be shuffled and dealt from.
pub struct Deck {
    cards: Vec<Card>,
    cursor: usize,
}

impl Deck {
    /// Build a fresh ordered deck and shuffle it with `rng`.
    pub fn new_shuffled<R: Rng>(rng: &mut R) -> Self {
        Self::new_shuffled_excluding(rng, &[])
    }

    /// Shuffled deck with every card in `used` removed.
    pub fn new_shuffled_excluding<R: Rng>(rng: &mut R, used: &[Card]) -> Self {
        let mut cards: Vec<Card> = Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::all().map(move |rank| Card { rank, suit }))
            .filter(|card| !used.contains(card))
            .collect();

        // Fisher-Yates shuffle
        for i in (1..cards.len()).rev() {
            let j = rng.gen_range(0..=i);
            cards.swap(i, j);
        }

        Deck { cards, cursor: 0 }
    }

    /// Deal one card, or `None` once the deck is exhausted.
    pub fn deal(&mut self) -> Option<Card> {
        let card = self.cards.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(card)
    }

    /// Deal up to `n` cards.
    pub fn deal_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).map_while(|_| self.deal()).collect()
    }

    /// Remaining cards available.
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }

    /// All dealt cards so far.
    pub fn dealt_cards(&self) -> &[Card] {
        &self.cards[..self.cursor]
    }
}
