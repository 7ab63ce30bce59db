mod agent;
mod random;
mod smart;
pub mod threat;

pub use agent::{Agent, AgentConfig, AgentKind};
pub use random::RandomAgent;
pub use smart::{choose_column, Decision, Rule, SmartAgent, CENTER_PREFERENCE};
pub use threat::{creates_double_threat, find_winning_move, Search};
