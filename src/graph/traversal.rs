//! Batched multi-hop traversal of the friendship graph.
//!
//! Each degree level is resolved with exactly one batched adjacency fetch,
//! independent of candidate-set size. The alternative, walking vertices one
//! by one, would cost one network round trip per vertex.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::debug;

use crate::error::Result;
use crate::models::MemberId;
use crate::store::FriendshipSource;

/// Map from discovered candidate to the prior-degree members connecting to it.
pub type CandidateMap = HashMap<MemberId, HashSet<MemberId>>;

/// Discovers second- and third-degree candidates around an origin member.
///
/// The engine never mutates the graph; its only side effects are the two
/// batched reads. It holds no per-request state and can be shared freely.
pub struct TraversalEngine {
    source: Arc<dyn FriendshipSource>,
}

impl TraversalEngine {
    /// Creates an engine over the given friendship source.
    pub fn new(source: Arc<dyn FriendshipSource>) -> Self {
        Self { source }
    }

    /// Finds friends-of-friends of the origin.
    ///
    /// Returns a map from each second-degree candidate to the first-degree
    /// friends bridging to it. The origin and its direct friends are never
    /// candidates. Candidates without a bridge are simply absent, never
    /// present with an empty set.
    pub async fn find_second_degree(
        &self,
        origin: MemberId,
        first_degree: &HashSet<MemberId>,
    ) -> Result<CandidateMap> {
        if first_degree.is_empty() {
            return Ok(CandidateMap::new());
        }

        let adjacency = self.source.friends_batch(first_degree).await?;

        let mut candidates = CandidateMap::new();
        for (friend, friends_of_friend) in &adjacency {
            for candidate in friends_of_friend {
                if *candidate == origin || first_degree.contains(candidate) {
                    continue;
                }
                candidates.entry(*candidate).or_default().insert(*friend);
            }
        }

        debug!(
            origin = %origin,
            first_degree = first_degree.len(),
            candidates = candidates.len(),
            "Second-degree traversal complete"
        );

        Ok(candidates)
    }

    /// Finds friends of the second-degree candidates.
    ///
    /// Returns a map from each third-degree candidate to the second-degree
    /// candidates bridging to it. Exclusion cascades: the origin, every
    /// first-degree friend, and every second-degree candidate are skipped.
    pub async fn find_third_degree(
        &self,
        origin: MemberId,
        first_degree: &HashSet<MemberId>,
        second_degree: &CandidateMap,
    ) -> Result<CandidateMap> {
        if second_degree.is_empty() {
            return Ok(CandidateMap::new());
        }

        let second_ids: HashSet<MemberId> = second_degree.keys().copied().collect();
        let adjacency = self.source.friends_batch(&second_ids).await?;

        let mut candidates = CandidateMap::new();
        for (second, friends_of_second) in &adjacency {
            for candidate in friends_of_second {
                if *candidate == origin
                    || first_degree.contains(candidate)
                    || second_ids.contains(candidate)
                {
                    continue;
                }
                candidates.entry(*candidate).or_default().insert(*second);
            }
        }

        debug!(
            origin = %origin,
            second_degree = second_ids.len(),
            candidates = candidates.len(),
            "Third-degree traversal complete"
        );

        Ok(candidates)
    }
}
