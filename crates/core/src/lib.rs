//! Core game logic. Keep this crate free of IO and platform concerns.

pub mod cards;
pub mod clock;
pub mod config;
pub mod deck;
pub mod events;
pub mod rng;
pub mod session;
pub mod tokens;

pub use cards::*;
pub use clock::*;
pub use config::*;
pub use deck::*;
pub use events::*;
pub use rng::*;
pub use session::*;
pub use tokens::*;
