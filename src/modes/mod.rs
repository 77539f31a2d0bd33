pub mod agent;
pub mod human;

pub use agent::{AgentKind, AgentMode};
pub use human::HumanMode;
