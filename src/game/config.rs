use serde::{Deserialize, Serialize};

use crate::render::Palette;

/// Configuration for a game instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of grid rows (including the boundary ring)
    pub rows: usize,
    /// Number of grid columns (including the boundary ring)
    pub cols: usize,
    /// Colors used by the color-grid snapshot
    pub palette: Palette,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 12,
            cols: 12,
            palette: Palette::default(),
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Default::default()
        }
    }

    /// The smallest playable grid, handy in tests
    pub fn small() -> Self {
        Self::new(5, 5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.rows, 12);
        assert_eq!(config.cols, 12);
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(8, 15);
        assert_eq!(config.rows, 8);
        assert_eq!(config.cols, 15);
    }
}
