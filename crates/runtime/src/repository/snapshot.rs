//! Versioned roster envelope.

use pocket_core::RosterEntry;
use serde::{Deserialize, Serialize};

use crate::repository::{RepositoryError, Result};

/// Whole-roster persistence unit, written under [`RosterSnapshot::KEY`].
///
/// ```json
/// { "version": 1, "seed": 123, "next_nonce": 4, "entries": [ ... ] }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSnapshot {
    pub version: u32,
    /// Roster seed all entry draws derive from.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Nonce for the next entry creation.
    #[serde(default)]
    pub next_nonce: u64,
    #[serde(default)]
    pub entries: Vec<RosterEntry>,
}

impl RosterSnapshot {
    pub const KEY: &'static str = "roster";
    pub const CURRENT_VERSION: u32 = 1;

    pub fn new(seed: u64, next_nonce: u64, entries: Vec<RosterEntry>) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            seed: Some(seed),
            next_nonce,
            entries,
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Strict decode: unknown versions are rejected.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let snapshot: Self = serde_json::from_slice(bytes)?;
        if snapshot.version != Self::CURRENT_VERSION {
            return Err(RepositoryError::UnsupportedVersion {
                found: snapshot.version,
                expected: Self::CURRENT_VERSION,
            });
        }
        Ok(snapshot)
    }
}
