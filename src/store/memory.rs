//! In-memory friendship source for testing and local development.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::{RecommendError, Result};
use crate::models::MemberId;

use super::FriendshipSource;

/// Deterministic in-memory friendship graph.
///
/// Tracks how many batch calls it has served so tests can assert the
/// one-round-trip-per-degree property, and supports failure injection.
pub struct InMemoryFriendshipSource {
    adjacency: HashMap<MemberId, HashSet<MemberId>>,
    batch_calls: AtomicUsize,
    should_fail: bool,
}

impl InMemoryFriendshipSource {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
            batch_calls: AtomicUsize::new(0),
            should_fail: false,
        }
    }

    /// Makes every batch call fail, simulating an unreachable store.
    pub fn should_fail(mut self, fail: bool) -> Self {
        self.should_fail = fail;
        self
    }

    /// Records a symmetric friendship between two members.
    pub fn add_friendship(&mut self, a: MemberId, b: MemberId) -> &mut Self {
        self.adjacency.entry(a).or_default().insert(b);
        self.adjacency.entry(b).or_default().insert(a);
        self
    }

    /// Records a one-directional adjacency entry.
    ///
    /// The production graph is symmetric; this exists so tests can model
    /// store-level inconsistencies directly.
    pub fn add_directed(&mut self, from: MemberId, to: MemberId) -> &mut Self {
        self.adjacency.entry(from).or_default().insert(to);
        self
    }

    /// Number of batch calls served so far.
    pub fn batch_call_count(&self) -> usize {
        self.batch_calls.load(Ordering::SeqCst)
    }
}

impl Default for InMemoryFriendshipSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FriendshipSource for InMemoryFriendshipSource {
    async fn friends_batch(
        &self,
        member_ids: &HashSet<MemberId>,
    ) -> Result<HashMap<MemberId, HashSet<MemberId>>> {
        self.batch_calls.fetch_add(1, Ordering::SeqCst);

        if self.should_fail {
            return Err(RecommendError::Retrieval(
                "in-memory source configured to fail".to_string(),
            ));
        }

        // Members without friends are omitted, matching the store contract.
        Ok(member_ids
            .iter()
            .filter_map(|id| self.adjacency.get(id).map(|friends| (*id, friends.clone())))
            .collect())
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(!self.should_fail)
    }

    fn source_name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[u64]) -> HashSet<MemberId> {
        values.iter().map(|&v| MemberId::new(v)).collect()
    }

    #[tokio::test]
    async fn test_batch_returns_symmetric_edges() {
        let mut source = InMemoryFriendshipSource::new();
        source.add_friendship(MemberId::new(1), MemberId::new(2));

        let result = source.friends_batch(&ids(&[1, 2])).await.unwrap();

        assert_eq!(result[&MemberId::new(1)], ids(&[2]));
        assert_eq!(result[&MemberId::new(2)], ids(&[1]));
    }

    #[tokio::test]
    async fn test_unknown_members_omitted() {
        let mut source = InMemoryFriendshipSource::new();
        source.add_friendship(MemberId::new(1), MemberId::new(2));

        let result = source.friends_batch(&ids(&[1, 99])).await.unwrap();

        assert!(result.contains_key(&MemberId::new(1)));
        assert!(!result.contains_key(&MemberId::new(99)));
    }

    #[tokio::test]
    async fn test_batch_call_counter() {
        let source = InMemoryFriendshipSource::new();

        source.friends_batch(&ids(&[1])).await.unwrap();
        source.friends_batch(&ids(&[2, 3])).await.unwrap();

        assert_eq!(source.batch_call_count(), 2);
    }

    #[tokio::test]
    async fn test_failure_injection() {
        let source = InMemoryFriendshipSource::new().should_fail(true);

        let result = source.friends_batch(&ids(&[1])).await;
        assert!(matches!(result, Err(RecommendError::Retrieval(_))));
        assert!(!source.health_check().await.unwrap());
    }
}
