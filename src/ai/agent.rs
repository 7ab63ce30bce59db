use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AgentError, ConfigError};
use crate::game::{ActionMask, Board};

use super::random::RandomAgent;
use super::smart::SmartAgent;

/// Universal interface for all agents.
pub trait Agent: Send {
    /// Select a column given a board seen from the agent's side (its pieces
    /// in the mover channel) and the columns it may play.
    fn select_action(&mut self, board: &Board, mask: &ActionMask) -> Result<usize, AgentError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// Settings shared by every agent kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Check board/mask consistency before every decision.
    pub validate_input: bool,
    /// Fixed RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        AgentConfig {
            validate_input: cfg!(debug_assertions),
            seed: None,
        }
    }
}

/// Agent implementations that can be named in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentKind {
    Smart,
    Random,
}

impl AgentKind {
    /// Build a fresh boxed agent of this kind.
    pub fn build(self, config: &AgentConfig) -> Box<dyn Agent> {
        match self {
            AgentKind::Smart => Box::new(SmartAgent::from_config(config)),
            AgentKind::Random => Box::new(RandomAgent::from_config(config)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AgentKind::Smart => "SmartAgent",
            AgentKind::Random => "RandomAgent",
        }
    }
}

impl FromStr for AgentKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "smart" => Ok(AgentKind::Smart),
            "random" => Ok(AgentKind::Random),
            other => Err(ConfigError::Validation(format!(
                "unknown agent '{other}' (expected 'smart' or 'random')"
            ))),
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
