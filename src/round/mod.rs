//! Round sequencing for the gesture-matching game.
//!
//! ## Key Types
//!
//! - `RoundMachine`: ticks through counting / resolved / paused phases
//! - `RoundSnapshot`: read-only per-tick projection for the renderer
//! - `Outcome`: Win/Lose/Draw under RPS dominance (from `outcome`)

mod machine;
mod outcome;

pub use machine::{RoundMachine, RoundPhase, RoundSnapshot};
pub use outcome::{resolve, Outcome};
