//! Turn events and render snapshots reported to front ends.

use alloc::vec::Vec;

use crate::card::Card;
use crate::game::Player;

/// What happened during one call to [`Game::step`](crate::Game::step).
///
/// The engine never performs any I/O; a front end renders these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEvent {
    /// The player discarded a matching card from their hand.
    Played {
        /// The player who played.
        player: Player,
        /// The card now on top of the discard pile.
        card: Card,
    },
    /// The player had no legal play and drew from the draw pile.
    ///
    /// Not an error: drawing is the normal outcome of a matchless hand.
    Drew {
        /// The player who drew.
        player: Player,
        /// The card added to the player's hand.
        card: Card,
    },
    /// The draw pile was empty and the buried discards were shuffled
    /// back into it. The active player has not acted yet and will take
    /// the same turn on the next step.
    Refilled,
    /// The player discarded their last card and won. The game is over.
    Won {
        /// The winner.
        player: Player,
    },
    /// Neither a draw nor a refill was possible. The game is over with
    /// no winner.
    Stalemate,
}

/// A read-only export of the table state for rendering or logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Number of cards left in the draw pile.
    pub draw_count: usize,
    /// The visible top of the discard pile, if any has been flipped.
    pub discard_top: Option<Card>,
    /// Player one's hand, top to bottom.
    pub hand1: Vec<Card>,
    /// Player two's hand, top to bottom.
    pub hand2: Vec<Card>,
}
