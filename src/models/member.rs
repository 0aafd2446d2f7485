//! Member identity and graph-distance types.

use serde::{Deserialize, Serialize};

/// Opaque identifier of a social-network member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(pub u64);

impl MemberId {
    /// Creates a member id from its raw value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw 64-bit value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for MemberId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Distance of a candidate from the origin member in the friendship graph.
///
/// `None` models a non-graph fallback candidate (e.g. a recently joined
/// member) that carries no graph signal and is scored on interaction alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Degree {
    /// Friend of a friend.
    Second,
    /// Friend of a friend of a friend.
    Third,
    /// Not discovered through the graph.
    None,
}
