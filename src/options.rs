//! Game configuration options.

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use c8rs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_packs(2)
///     .with_hand_size(7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of 52-card packs shuffled into the draw pile.
    pub packs: u8,
    /// Number of cards dealt to each player.
    pub hand_size: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            packs: 1,
            hand_size: 8,
        }
    }
}

impl GameOptions {
    /// Sets the number of packs.
    ///
    /// # Example
    ///
    /// ```
    /// use c8rs::GameOptions;
    ///
    /// let options = GameOptions::default().with_packs(2);
    /// assert_eq!(options.packs, 2);
    /// ```
    #[must_use]
    pub const fn with_packs(mut self, packs: u8) -> Self {
        self.packs = packs;
        self
    }

    /// Sets the number of cards dealt to each player.
    ///
    /// # Example
    ///
    /// ```
    /// use c8rs::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(5);
    /// assert_eq!(options.hand_size, 5);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }
}
