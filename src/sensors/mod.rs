//! Read-only observation vectors derived from a [`SnakeState`].
//!
//! All sensors operate in the snake's head-relative frame (right/front/
//! left of the current heading), which is what a turning agent consumes.
//! Nothing here mutates state; terminal states simply report their last
//! valid configuration.

pub mod observation;

use std::fmt;
use std::str::FromStr;

pub use observation::{enhanced_lidar, fruit_bearing, lidar, observation, turn_neighbors};

use crate::game::SnakeState;

/// Which sensors make up the observation vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorMode {
    /// Neighbor occupancy plus fruit bearing (5 values)
    Default,
    /// Three-ray lidar plus fruit bearing (5 values)
    Lidar,
    /// Five-ray lidar plus fruit bearing (7 values)
    Elidar,
}

impl SensorMode {
    /// Length of the observation vector this mode produces.
    pub fn len(self) -> usize {
        match self {
            SensorMode::Default | SensorMode::Lidar => 5,
            SensorMode::Elidar => 7,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SensorMode::Default => "default",
            SensorMode::Lidar => "lidar",
            SensorMode::Elidar => "elidar",
        }
    }
}

impl fmt::Display for SensorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized sensor mode name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownModeError(String);

impl fmt::Display for UnknownModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown sensor mode {:?}: expected \"default\", \"lidar\" or \"elidar\"",
            self.0
        )
    }
}

impl std::error::Error for UnknownModeError {}

impl FromStr for SensorMode {
    type Err = UnknownModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(SensorMode::Default),
            "lidar" => Ok(SensorMode::Lidar),
            "elidar" => Ok(SensorMode::Elidar),
            other => Err(UnknownModeError(other.to_string())),
        }
    }
}

/// Convenience wrapper bundling a state reference with its sensor suite.
#[derive(Debug, Clone, Copy)]
pub struct SensorBank<'a> {
    state: &'a SnakeState,
}

impl<'a> SensorBank<'a> {
    pub fn new(state: &'a SnakeState) -> Self {
        Self { state }
    }

    pub fn turn_neighbors(&self) -> [f64; 3] {
        turn_neighbors(self.state)
    }

    pub fn lidar(&self) -> [f64; 3] {
        lidar(self.state)
    }

    pub fn enhanced_lidar(&self) -> [f64; 5] {
        enhanced_lidar(self.state)
    }

    pub fn fruit_bearing(&self) -> (f64, f64) {
        fruit_bearing(self.state)
    }

    pub fn observation(&self, mode: SensorMode) -> Vec<f64> {
        observation(self.state, mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parsing() {
        assert_eq!("default".parse::<SensorMode>(), Ok(SensorMode::Default));
        assert_eq!("lidar".parse::<SensorMode>(), Ok(SensorMode::Lidar));
        assert_eq!("elidar".parse::<SensorMode>(), Ok(SensorMode::Elidar));
    }

    #[test]
    fn test_unknown_mode_is_an_error() {
        let err = "moore".parse::<SensorMode>().unwrap_err();
        assert!(err.to_string().contains("moore"));
        assert!("".parse::<SensorMode>().is_err());
        // Parsing is case-sensitive, like the original option strings.
        assert!("Lidar".parse::<SensorMode>().is_err());
    }

    #[test]
    fn test_mode_round_trip() {
        for mode in [SensorMode::Default, SensorMode::Lidar, SensorMode::Elidar] {
            assert_eq!(mode.as_str().parse::<SensorMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_mode_lengths() {
        assert_eq!(SensorMode::Default.len(), 5);
        assert_eq!(SensorMode::Lidar.len(), 5);
        assert_eq!(SensorMode::Elidar.len(), 7);
    }

    #[test]
    fn test_bank_matches_free_functions() {
        use crate::game::{GameConfig, SnakeState};

        let mut state = SnakeState::new(&GameConfig::small());
        state.reset(Some(31));
        let bank = SensorBank::new(&state);
        assert_eq!(bank.turn_neighbors(), turn_neighbors(&state));
        assert_eq!(bank.lidar(), lidar(&state));
        assert_eq!(bank.enhanced_lidar(), enhanced_lidar(&state));
        assert_eq!(bank.fruit_bearing(), fruit_bearing(&state));
        for mode in [SensorMode::Default, SensorMode::Lidar, SensorMode::Elidar] {
            assert_eq!(bank.observation(mode), observation(&state, mode));
        }
    }
}
