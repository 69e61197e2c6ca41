//! Round outcome rules.
//!
//! Standard rock-paper-scissors dominance, with one asymmetry worth
//! spelling out: once the draw check and the win trio fail, the player
//! loses. That routes `Unknown` and `Waiting` signs straight to `Lose`
//! against any real throw - an unrecognized or absent sign never wins
//! and never draws against rock, paper, or scissors.

use serde::{Deserialize, Serialize};

use crate::classifier::{Gesture, PlayerSign};

/// Result of one resolved round, from the player's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Draw,
    Win,
    Lose,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Outcome::Draw => "Draw",
            Outcome::Win => "You Win!",
            Outcome::Lose => "You Lose!",
        };
        write!(f, "{label}")
    }
}

/// Compare the player's sign against the opponent's throw.
///
/// Draw requires literal equality; Win requires an exact match in the
/// win trio; everything else loses. The fall-through `Lose` is the
/// rule, not a shortcut.
#[must_use]
pub fn resolve(player: PlayerSign, opponent: Gesture) -> Outcome {
    if player == PlayerSign::Seen(opponent) {
        return Outcome::Draw;
    }

    match (player, opponent) {
        (PlayerSign::Seen(Gesture::Rock), Gesture::Scissors)
        | (PlayerSign::Seen(Gesture::Scissors), Gesture::Paper)
        | (PlayerSign::Seen(Gesture::Paper), Gesture::Rock) => Outcome::Win,
        _ => Outcome::Lose,
    }
}
