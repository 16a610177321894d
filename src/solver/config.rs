//! Solver configuration.

use serde::{Deserialize, Serialize};

use crate::core::Topology;
use crate::error::ConfigError;

/// When a game ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TerminationPolicy {
    /// The first player to capture at least one stone wins.
    #[default]
    FirstCapture,
    /// A player with no legal move loses. Captures only matter through
    /// their effect on later liberties.
    NoLegalMoveLoses,
}

impl TerminationPolicy {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TerminationPolicy::FirstCapture => "first-capture",
            TerminationPolicy::NoLegalMoveLoses => "no-legal-move-loses",
        }
    }
}

impl std::fmt::Display for TerminationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for TerminationPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "first-capture" => Ok(TerminationPolicy::FirstCapture),
            "no-legal-move-loses" => Ok(TerminationPolicy::NoLegalMoveLoses),
            _ => Err(ConfigError::UnknownPolicy(s.to_string())),
        }
    }
}

/// Solver configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Board shape every solved position must have.
    pub topology: Topology,

    /// Terminal-state convention.
    #[serde(default)]
    pub policy: TerminationPolicy,

    /// Seed for the Zobrist keys. Same seed gives the same fingerprints.
    #[serde(default = "default_zobrist_seed")]
    pub zobrist_seed: u64,
}

fn default_zobrist_seed() -> u64 {
    0x5EED_CAFE
}

impl SolverConfig {
    /// Configuration for a board, first-capture policy.
    #[must_use]
    pub fn new(topology: Topology) -> Self {
        Self {
            topology,
            policy: TerminationPolicy::default(),
            zobrist_seed: default_zobrist_seed(),
        }
    }

    /// Strip of `len` cells.
    pub fn strip(len: usize) -> Result<Self, ConfigError> {
        Ok(Self::new(Topology::strip(len)?))
    }

    /// Grid of `rows x cols` cells.
    pub fn grid(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        Ok(Self::new(Topology::grid(rows, cols)?))
    }

    /// Set the termination policy.
    #[must_use]
    pub fn with_policy(mut self, policy: TerminationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the Zobrist seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.zobrist_seed = seed;
        self
    }

    /// Check the configuration before a solve starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.topology.validate()
    }

    /// Load from JSON.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
