//! Best-score record
//!
//! The simulation reports the player's final head value through
//! [`crate::sim::GameEvent::PlayerDied`]; comparing and persisting it is the
//! host's job. This record keeps the single best scalar and round-trips it
//! as JSON, tolerating a missing or corrupt file by starting fresh.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// The single best final head value achieved across runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScore {
    pub value: u32,
}

impl BestScore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a score would set a new best
    pub fn qualifies(&self, score: u32) -> bool {
        score > self.value
    }

    /// Record a final score; returns true if it set a new best
    pub fn record(&mut self, score: u32) -> bool {
        if self.qualifies(score) {
            self.value = score;
            true
        } else {
            false
        }
    }

    /// Load from a JSON file, falling back to a fresh record on any failure
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(best) => best,
                Err(err) => {
                    log::warn!("corrupt best-score file {}: {}", path.display(), err);
                    Self::new()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => Self::new(),
            Err(err) => {
                log::warn!("could not read {}: {}", path.display(), err);
                Self::new()
            }
        }
    }

    /// Save as JSON
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string(self).map_err(io::Error::other)?;
        fs::write(path, json)
    }
}
