//! Friendship-graph store boundary.
//!
//! The engine's sole external dependency is a batched adjacency lookup:
//! given a set of member ids, return each member's direct-friend set in one
//! round trip. Implementations must never split the lookup into per-member
//! calls, which would reintroduce N+1 latency.

pub mod memory;
pub mod redis;

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;

use crate::error::Result;
use crate::models::MemberId;

// Re-exports
pub use self::memory::InMemoryFriendshipSource;
pub use self::redis::{RedisConfig, RedisFriendshipSource};

/// Batched adjacency lookup over the friendship graph.
///
/// The graph is symmetric and read-only from this crate's perspective.
/// A member with no friends may be omitted from the result or present with
/// an empty set; callers treat both identically.
#[async_trait]
pub trait FriendshipSource: Send + Sync {
    /// Returns the direct-friend set of every requested member.
    ///
    /// Must use one round trip regardless of input cardinality.
    async fn friends_batch(
        &self,
        member_ids: &HashSet<MemberId>,
    ) -> Result<HashMap<MemberId, HashSet<MemberId>>>;

    /// Checks that the backing store is reachable.
    async fn health_check(&self) -> Result<bool>;

    /// Source name for logging.
    fn source_name(&self) -> &str;
}
