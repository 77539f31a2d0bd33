//! Agents that consume observation vectors and produce turn decisions.
//!
//! Agents see only the sensor output, never the full state; the driver
//! feeds the chosen turn back into [`SnakeState::turn`].
//!
//! [`SnakeState::turn`]: crate::game::SnakeState::turn

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::game::Turn;

/// A policy mapping an observation vector to a relative turn.
pub trait Agent {
    fn act(&mut self, observation: &[f64]) -> Turn;
}

/// Turns matching the first three observation slots `[right, front, left]`.
const TURNS: [Turn; 3] = [Turn::Right, Turn::Forward, Turn::Left];

/// Picks safe turns at random. A baseline for comparing smarter agents.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl Agent for RandomAgent {
    fn act(&mut self, observation: &[f64]) -> Turn {
        let safe: Vec<Turn> = TURNS
            .iter()
            .zip(observation)
            .filter(|&(_, &value)| value >= 0.0)
            .map(|(&turn, _)| turn)
            .collect();
        safe.choose(&mut self.rng).copied().unwrap_or(Turn::Forward)
    }
}

/// Steers toward the fruit using the default observation layout
/// (`[right, front, left, cos, sin]`), never entering a cell flagged
/// blocked when a safe one exists.
#[derive(Debug, Default)]
pub struct GreedyAgent;

impl GreedyAgent {
    pub fn new() -> Self {
        Self
    }
}

impl Agent for GreedyAgent {
    fn act(&mut self, observation: &[f64]) -> Turn {
        let neighbors = &observation[..3];
        // A fruit one cell away wins outright.
        if let Some(slot) = neighbors.iter().position(|&value| value == 1.0) {
            return TURNS[slot];
        }

        // Otherwise steer by bearing: positive sin means fruit to the
        // left, negative to the right, else keep going when it is ahead.
        let (cos, sin) = (observation[3], observation[4]);
        let preference = if sin > 0.0 {
            [Turn::Left, Turn::Forward, Turn::Right]
        } else if sin < 0.0 {
            [Turn::Right, Turn::Forward, Turn::Left]
        } else if cos > 0.0 {
            [Turn::Forward, Turn::Left, Turn::Right]
        } else {
            [Turn::Left, Turn::Right, Turn::Forward]
        };

        let safe = |turn: Turn| {
            let slot = TURNS.iter().position(|&t| t == turn).unwrap();
            neighbors[slot] >= 0.0
        };
        preference
            .into_iter()
            .find(|&turn| safe(turn))
            .unwrap_or(Turn::Forward)
    }
}
