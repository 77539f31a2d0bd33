//! Grid snake engine for teaching array manipulation and basic
//! agent/sensor design.
//!
//! This library provides:
//! - Core game logic: grid geometry and the snake state machine (game module)
//! - Head-relative observation vectors for agents (sensors module)
//! - A pure color-grid snapshot plus a TUI renderer (render module)
//! - Baseline turn-deciding agents (agent module)
//! - Interactive and batch execution modes (modes module)

pub mod agent;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod sensors;
