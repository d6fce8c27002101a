//! Game state types.

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Player one, who always takes the first turn.
    One,
    /// Player two.
    Two,
}

impl Player {
    /// Returns the other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// Returns the 0-based hand index for this player.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }
}

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// The named player acts next.
    Turn(Player),
    /// The named player has emptied their hand. Terminal.
    Won(Player),
    /// Both piles ran out below the one-card floor needed to continue.
    /// Terminal, no winner.
    Stalemate,
}

impl GameState {
    /// Returns whether the game has reached a terminal state.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Turn(_))
    }
}
