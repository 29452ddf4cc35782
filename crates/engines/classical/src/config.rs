//! Engine settings, loadable from TOML.
//!
//! ```toml
//! depth = 2
//! root = "always-maximize"   # or "side-to-move"
//! draws = "material"         # or "zero"
//! ```

use std::path::{Path, PathBuf};

use chess_core::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Plies searched per move unless configured otherwise.
pub const DEFAULT_DEPTH: u8 = 2;

/// Deepest search accepted from configuration. Full-width search without
/// move ordering grows by roughly 35x per ply.
pub const MAX_DEPTH: u8 = 6;

/// How the maximizing flag is chosen for the root call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RootPolicy {
    /// Root always maximizes White's score, whoever is to move.
    #[default]
    AlwaysMaximize,
    /// Root maximizes when White is to move and minimizes when Black is,
    /// i.e. it optimizes for the mover.
    SideToMove,
}

impl RootPolicy {
    pub fn maximizing(self, side_to_move: Color) -> bool {
        match self {
            RootPolicy::AlwaysMaximize => true,
            RootPolicy::SideToMove => side_to_move == Color::White,
        }
    }
}

/// Score given to drawn positions by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DrawScoring {
    /// No override: draws score their material balance.
    #[default]
    Material,
    /// Stalemate and rule draws score exactly 0.
    Zero,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Search depth in plies
    pub depth: u8,
    pub root: RootPolicy,
    pub draws: DrawScoring,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            root: RootPolicy::default(),
            draws: DrawScoring::default(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("search depth must be between 1 and {max}, got {0}", max = MAX_DEPTH)]
    Depth(u8),
}

impl EngineConfig {
    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_DEPTH).contains(&self.depth) {
            return Err(ConfigError::Depth(self.depth));
        }
        Ok(())
    }

    /// Parses and validates a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
