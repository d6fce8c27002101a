//! Game engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::error::ConfigError;
use crate::event::Snapshot;
use crate::options::GameOptions;
use crate::table::GameTable;

mod step;
pub mod state;

pub use state::{GameState, Player};

/// The turn engine for a two-player matching game.
///
/// The game owns the table and a single seeded RNG used for the opening
/// shuffle and every mid-game refill shuffle, so a full game replays
/// deterministically from `(options, seed)`.
///
/// Both players follow the same policy: play the first matching card in
/// sorted hand order, otherwise draw.
#[derive(Debug)]
pub struct Game {
    /// The four piles in play.
    pub table: GameTable,
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed: deals both hands and
    /// flips the opening discard. Player one acts first.
    ///
    /// # Example
    ///
    /// ```
    /// use c8rs::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42).unwrap();
    /// assert_eq!(game.cards_remaining(), 35);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the options describe an undealable game.
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, ConfigError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut table = GameTable::deal(options, &mut rng)?;

        let flipped = table.flip_initial_discard();
        debug_assert!(
            flipped.is_some(),
            "the pack-size check reserves a card for the opening discard"
        );

        Ok(Self {
            table,
            options,
            state: GameState::Turn(Player::One),
            rng,
        })
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player who acts next, or `None` once the game is over.
    #[must_use]
    pub const fn current_player(&self) -> Option<Player> {
        match self.state {
            GameState::Turn(player) => Some(player),
            GameState::Won(_) | GameState::Stalemate => None,
        }
    }

    /// Returns the winner, if the game ended with one.
    #[must_use]
    pub const fn winner(&self) -> Option<Player> {
        match self.state {
            GameState::Won(player) => Some(player),
            GameState::Turn(_) | GameState::Stalemate => None,
        }
    }

    /// Returns whether the game has ended in a win or stalemate.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Returns the number of cards remaining in the draw pile.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.table.draw.len()
    }

    /// Returns the visible top of the discard pile.
    #[must_use]
    pub fn discard_top(&self) -> Option<Card> {
        self.table.discard.peek_top().copied()
    }

    /// Returns a read-only snapshot of the table for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.table.snapshot()
    }
}
