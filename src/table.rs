//! The table: four piles and the moves between them.

use rand::Rng;

use crate::card::{Card, PACK_SIZE, Rank, Suit};
use crate::deck::Deck;
use crate::error::ConfigError;
use crate::event::Snapshot;
use crate::game::Player;
use crate::options::GameOptions;

/// Identifies one of the four piles on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeckId {
    /// The face-down pile players draw from.
    Draw,
    /// The face-up pile of played cards; its top is the matching target.
    Discard,
    /// A player's hand.
    Hand(Player),
}

/// The four piles a game is played with.
///
/// Every card dealt at the start of a game lives in exactly one of the
/// four piles for the whole game; [`GameTable::transfer_top`] and
/// [`GameTable::transfer_at`] are the only ways a card crosses a pile
/// boundary, so no card is ever duplicated or lost.
///
/// The fields are public so tests and front ends can inspect or rig
/// specific layouts; regular play should go through the transfer methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameTable {
    /// The draw pile.
    pub draw: Deck,
    /// The discard pile.
    pub discard: Deck,
    /// The two player hands, indexed by [`Player::index`].
    pub hands: [Deck; 2],
}

impl GameTable {
    /// Deals a new table: builds the draw pile from `options.packs`
    /// ordered packs, shuffles it once, then alternately deals
    /// `options.hand_size` cards to each hand (player one receives the
    /// first card of every round) and sorts both hands.
    ///
    /// The opening discard is not flipped here; see
    /// [`GameTable::flip_initial_discard`].
    ///
    /// # Errors
    ///
    /// Returns an error if `packs` or `hand_size` is zero, or if the
    /// packs cannot cover two hands plus the opening discard.
    pub fn deal<R: Rng + ?Sized>(options: GameOptions, rng: &mut R) -> Result<Self, ConfigError> {
        if options.packs == 0 {
            return Err(ConfigError::ZeroPacks);
        }
        if options.hand_size == 0 {
            return Err(ConfigError::ZeroHandSize);
        }
        let total = options.packs as usize * PACK_SIZE;
        // Overflowing hand sizes are just another way of asking for more
        // cards than the packs hold.
        let needed = options
            .hand_size
            .checked_mul(2)
            .and_then(|n| n.checked_add(1))
            .ok_or(ConfigError::HandTooLarge)?;
        if needed > total {
            return Err(ConfigError::HandTooLarge);
        }

        let mut draw = Deck::with_capacity(total);
        for _ in 0..options.packs {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    draw.push_bottom(Card::new(suit, rank));
                }
            }
        }
        draw.shuffle(rng);

        let mut table = Self {
            draw,
            discard: Deck::new(),
            hands: [Deck::new(), Deck::new()],
        };

        for _ in 0..options.hand_size {
            for player in [Player::One, Player::Two] {
                table.transfer_top(DeckId::Draw, DeckId::Hand(player));
            }
        }
        for hand in &mut table.hands {
            hand.sort_by_suit_then_rank();
        }

        Ok(table)
    }

    /// Flips the top of the draw pile onto the discard pile as the
    /// game-opening visible card.
    ///
    /// Returns the flipped card, or `None` if the draw pile was empty
    /// (ruled out by the pack-size check in [`GameTable::deal`]).
    pub fn flip_initial_discard(&mut self) -> Option<Card> {
        self.transfer_top(DeckId::Draw, DeckId::Discard)
    }

    /// Moves the top card of `from` onto the top of `to`.
    ///
    /// Returns the moved card, or `None` if `from` was empty (in which
    /// case nothing moves).
    pub fn transfer_top(&mut self, from: DeckId, to: DeckId) -> Option<Card> {
        let card = self.deck_mut(from).pop_top()?;
        self.deck_mut(to).push_top(card);
        Some(card)
    }

    /// Moves the card at `index` (0-based from the top) of `from` onto
    /// the top of `to`.
    ///
    /// Returns the moved card, or `None` if the index was out of range
    /// (in which case nothing moves).
    pub fn transfer_at(&mut self, from: DeckId, index: usize, to: DeckId) -> Option<Card> {
        let card = self.deck_mut(from).remove_at(index)?;
        self.deck_mut(to).push_top(card);
        Some(card)
    }

    /// Returns the pile named by `id`.
    #[must_use]
    pub const fn deck(&self, id: DeckId) -> &Deck {
        match id {
            DeckId::Draw => &self.draw,
            DeckId::Discard => &self.discard,
            DeckId::Hand(player) => &self.hands[player.index()],
        }
    }

    /// Returns the pile named by `id` mutably.
    pub const fn deck_mut(&mut self, id: DeckId) -> &mut Deck {
        match id {
            DeckId::Draw => &mut self.draw,
            DeckId::Discard => &mut self.discard,
            DeckId::Hand(player) => &mut self.hands[player.index()],
        }
    }

    /// Returns the hand of `player`.
    #[must_use]
    pub const fn hand(&self, player: Player) -> &Deck {
        &self.hands[player.index()]
    }

    /// Returns the total number of cards across all four piles.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.draw.len() + self.discard.len() + self.hands[0].len() + self.hands[1].len()
    }

    /// Returns a read-only snapshot of the table for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            draw_count: self.draw.len(),
            discard_top: self.discard.peek_top().copied(),
            hand1: self.hands[0].to_vec(),
            hand2: self.hands[1].to_vec(),
        }
    }
}
