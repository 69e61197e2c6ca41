//! The apple-catching game.
//!
//! A basket steered by the direction mapper catches an apple falling at
//! constant speed. Catching or missing respawns the apple at a random
//! column; the score counts catches for the life of the process.

mod game;

pub use game::{CatchConfig, CatchGame, CatchSnapshot};
