//! Error types for game construction and stepping.

use thiserror::Error;

/// Errors that can occur while dealing a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Number of packs is zero.
    #[error("number of packs is zero")]
    ZeroPacks,
    /// Hand size is zero.
    #[error("hand size is zero")]
    ZeroHandSize,
    /// Two hands plus the opening discard need more cards than the packs hold.
    #[error("hand size too large for the configured packs")]
    HandTooLarge,
}

/// Errors that can occur while stepping a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StepError {
    /// The game has already ended in a win or stalemate.
    #[error("the game is already over")]
    GameOver,
}
