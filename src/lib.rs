//! A two-player suit/rank-matching card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that deals two hands from a shuffled
//! draw pile, flips an opening discard, and then plays out alternating
//! turns: each player discards their first card sharing a suit or rank
//! with the discard top, or draws when they cannot. When the draw pile
//! runs dry the buried discards are shuffled back in. The engine reports
//! every step as a [`TurnEvent`] and never performs I/O itself.
//!
//! # Example
//!
//! ```no_run
//! use c8rs::{Game, GameOptions, TurnEvent};
//!
//! let mut game = Game::new(GameOptions::default(), 42).unwrap();
//! loop {
//!     match game.step().unwrap() {
//!         TurnEvent::Won { player } => {
//!             println!("{player:?} wins");
//!             break;
//!         }
//!         TurnEvent::Stalemate => {
//!             println!("stalemate");
//!             break;
//!         }
//!         _ => {}
//!     }
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod options;
pub mod table;

// Re-export main types
pub use card::{Card, PACK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ConfigError, StepError};
pub use event::{Snapshot, TurnEvent};
pub use game::{Game, GameState, Player};
pub use options::GameOptions;
pub use table::{DeckId, GameTable};
