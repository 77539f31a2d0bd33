//! Core game logic for the grid snake engine.
//!
//! Everything here is synchronous, single-owner and free of I/O: grid
//! geometry, the snake state machine, and their configuration. Sensors
//! and rendering build on top without reaching back in.

pub mod config;
pub mod direction;
pub mod grid;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::{Direction, Turn};
pub use grid::Grid;
pub use state::{SnakeState, Status};
