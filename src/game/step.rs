use crate::error::StepError;
use crate::event::TurnEvent;
use crate::table::DeckId;

use super::{Game, GameState};

impl Game {
    /// Advances the game by one step for the active player.
    ///
    /// A step is exactly one of: playing the first matching card in the
    /// player's sorted hand, drawing when no card matches, refilling the
    /// draw pile from the buried discards (the player acts on the next
    /// step), winning by playing the last card, or declaring a
    /// stalemate when fewer than two cards remain outside the hands.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has already ended.
    #[expect(
        clippy::missing_panics_doc,
        reason = "internal expects are guaranteed to succeed"
    )]
    pub fn step(&mut self) -> Result<TurnEvent, StepError> {
        let GameState::Turn(player) = self.state else {
            return Err(StepError::GameOver);
        };

        let top = *self
            .table
            .discard
            .peek_top()
            .expect("the discard pile holds at least the opening card");
        let hand = DeckId::Hand(player);

        // Lowest sorted index wins ties: suit order, then rank order.
        let matching = self.table.hand(player).iter().position(|c| c.matches(&top));

        if let Some(index) = matching {
            let card = self
                .table
                .transfer_at(hand, index, DeckId::Discard)
                .expect("index came from scanning the same hand");

            if self.table.hand(player).is_empty() {
                self.state = GameState::Won(player);
                return Ok(TurnEvent::Won { player });
            }

            self.state = GameState::Turn(player.opponent());
            return Ok(TurnEvent::Played { player, card });
        }

        if self.table.draw.is_empty() {
            // One card must stay visible, so a refill needs two or more.
            if self.table.discard.len() < 2 {
                self.state = GameState::Stalemate;
                return Ok(TurnEvent::Stalemate);
            }
            self.refill();
            return Ok(TurnEvent::Refilled);
        }

        let card = self
            .table
            .transfer_top(DeckId::Draw, hand)
            .expect("the draw pile was checked non-empty above");
        self.table.deck_mut(hand).sort_by_suit_then_rank();

        self.state = GameState::Turn(player.opponent());
        Ok(TurnEvent::Drew { player, card })
    }

    /// Recycles the buried discards into the draw pile.
    ///
    /// The visible top card stays behind as the discard pile's sole
    /// element; everything underneath moves to the draw pile and is
    /// shuffled with the game RNG.
    fn refill(&mut self) {
        let kept = self.table.discard.pop_top();

        while let Some(card) = self.table.discard.pop_top() {
            self.table.draw.push_top(card);
        }
        self.table.draw.shuffle(&mut self.rng);

        if let Some(kept) = kept {
            self.table.discard.push_top(kept);
        }
    }
}
