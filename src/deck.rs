//! An ordered, mutable pile of cards.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::Card;

/// An ordered pile of cards with the front acting as the top.
///
/// The deck knows nothing about game rules; it only supports the
/// collection operations the table and engine build on: insertion at
/// either end, removal from the top or an arbitrary index, shuffling,
/// and a stable suit-then-rank sort.
///
/// Every removal on an empty deck (or with an out-of-range index)
/// reports `None` rather than panicking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    /// Cards in order, front = top.
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates an empty deck.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: VecDeque::new(),
        }
    }

    /// Creates an empty deck with room for `capacity` cards.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cards: VecDeque::with_capacity(capacity),
        }
    }

    /// Places a card on top of the deck.
    pub fn push_top(&mut self, card: Card) {
        self.cards.push_front(card);
    }

    /// Slides a card under the bottom of the deck.
    pub fn push_bottom(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Removes and returns the top card, or `None` if the deck is empty.
    pub fn pop_top(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Removes and returns the card at the 0-based `index` counted from
    /// the top, or `None` if the index is out of range.
    ///
    /// Cards above and below the removed slot keep their relative order.
    pub fn remove_at(&mut self, index: usize) -> Option<Card> {
        self.cards.remove(index)
    }

    /// Returns the top card without removing it.
    #[must_use]
    pub fn peek_top(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Returns the card at the 0-based `index` counted from the top.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffles the deck into a uniformly random permutation.
    ///
    /// The generator is injected so a game can reuse one seeded RNG for
    /// every shuffle it performs.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Sorts the deck by suit, then rank ascending.
    ///
    /// The sort is stable: duplicate cards from multi-pack deals keep
    /// their relative order.
    pub fn sort_by_suit_then_rank(&mut self) {
        self.cards.make_contiguous().sort();
    }

    /// Returns a snapshot of the deck from top to bottom.
    ///
    /// Mutating the deck afterwards does not affect the returned cards.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Card> {
        self.cards.iter().copied().collect()
    }

    /// Iterates over the cards from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = alloc::collections::vec_deque::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
