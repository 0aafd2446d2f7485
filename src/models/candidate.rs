//! Candidate state carried through the recommendation pipeline.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::member::{Degree, MemberId};

/// Discovery record for one candidate at one degree: the candidate id plus
/// the prior-degree members that connect to it. Never constructed with an
/// empty connecting set; a candidate with no connection is never discovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateInfo {
    /// The discovered candidate.
    pub candidate_id: MemberId,
    /// Prior-degree members bridging the origin to this candidate.
    pub connected_ids: HashSet<MemberId>,
}

impl CandidateInfo {
    /// Creates a discovery record from a candidate and its connecting members.
    pub fn new(candidate_id: MemberId, connected_ids: HashSet<MemberId>) -> Self {
        Self {
            candidate_id,
            connected_ids,
        }
    }
}

/// Mutable accumulator holding one candidate's graph and score state.
///
/// Created per request, mutated through traversal, grouping and scoring,
/// and discarded afterward. Never persisted or shared across requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationCandidate {
    /// The member being evaluated.
    pub member_id: MemberId,

    /// Graph distance from the origin.
    pub degree: Degree,

    /// Bridging members recorded so far (unique, order-irrelevant).
    common_friends: HashSet<MemberId>,

    /// First common friend ever recorded; immutable once set.
    acquaintance_id: Option<MemberId>,

    /// Latches true once two or more common friends are recorded.
    many_acquaintances: bool,

    /// External behavioral signal, capped to [0, 10] at scoring time.
    pub interaction_score: f64,

    /// Composite rank score, written by the scorer.
    pub total_score: f64,
}

impl RecommendationCandidate {
    /// Creates a candidate at the given degree with an empty common-friend set.
    pub fn new(member_id: MemberId, degree: Degree) -> Self {
        Self {
            member_id,
            degree,
            common_friends: HashSet::new(),
            acquaintance_id: None,
            many_acquaintances: false,
            interaction_score: 0.0,
            total_score: 0.0,
        }
    }

    /// Records a bridging member.
    ///
    /// The first friend ever added becomes the acquaintance id and is never
    /// reassigned. Once the set reaches two members, `many_acquaintances`
    /// becomes true and stays true.
    pub fn add_common_friend(&mut self, friend_id: MemberId) {
        if self.acquaintance_id.is_none() {
            self.acquaintance_id = Some(friend_id);
        }

        self.common_friends.insert(friend_id);

        if self.common_friends.len() >= 2 {
            self.many_acquaintances = true;
        }
    }

    /// Number of distinct bridging members recorded.
    pub fn common_friend_count(&self) -> usize {
        self.common_friends.len()
    }

    /// The recorded bridging members.
    pub fn common_friends(&self) -> &HashSet<MemberId> {
        &self.common_friends
    }

    /// First bridging member ever recorded, if any.
    pub fn acquaintance_id(&self) -> Option<MemberId> {
        self.acquaintance_id
    }

    /// Whether two or more bridging members have been recorded.
    pub fn has_many_acquaintances(&self) -> bool {
        self.many_acquaintances
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_starts_empty() {
        let candidate = RecommendationCandidate::new(MemberId::new(1), Degree::Second);

        assert_eq!(candidate.common_friend_count(), 0);
        assert_eq!(candidate.acquaintance_id(), None);
        assert!(!candidate.has_many_acquaintances());
        assert_eq!(candidate.total_score, 0.0);
    }

    #[test]
    fn test_first_seen_acquaintance() {
        let mut candidate = RecommendationCandidate::new(MemberId::new(1), Degree::Second);

        candidate.add_common_friend(MemberId::new(10));
        candidate.add_common_friend(MemberId::new(20));
        candidate.add_common_friend(MemberId::new(30));

        assert_eq!(candidate.acquaintance_id(), Some(MemberId::new(10)));
        assert!(candidate.has_many_acquaintances());
        assert_eq!(candidate.common_friend_count(), 3);
    }

    #[test]
    fn test_many_acquaintances_monotonic() {
        let mut candidate = RecommendationCandidate::new(MemberId::new(1), Degree::Second);

        candidate.add_common_friend(MemberId::new(10));
        assert!(!candidate.has_many_acquaintances());

        candidate.add_common_friend(MemberId::new(20));
        assert!(candidate.has_many_acquaintances());

        // Duplicate additions never reset the flag
        candidate.add_common_friend(MemberId::new(10));
        candidate.add_common_friend(MemberId::new(20));
        assert!(candidate.has_many_acquaintances());
        assert_eq!(candidate.common_friend_count(), 2);
    }

    #[test]
    fn test_duplicate_friend_counted_once() {
        let mut candidate = RecommendationCandidate::new(MemberId::new(1), Degree::Third);

        candidate.add_common_friend(MemberId::new(5));
        candidate.add_common_friend(MemberId::new(5));

        assert_eq!(candidate.common_friend_count(), 1);
        assert!(!candidate.has_many_acquaintances());
        assert_eq!(candidate.acquaintance_id(), Some(MemberId::new(5)));
    }

    #[test]
    fn test_candidate_serializes() {
        let mut candidate = RecommendationCandidate::new(MemberId::new(3), Degree::Second);
        candidate.add_common_friend(MemberId::new(7));
        candidate.total_score = 52.0;

        let json = serde_json::to_string(&candidate).unwrap();
        assert!(json.contains("\"member_id\":3"));
        assert!(json.contains("\"degree\":\"second\""));
        assert!(json.contains("52.0") || json.contains("52"));
    }
}
