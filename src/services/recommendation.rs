//! Recommendation pipeline: traversal, grouping, scoring.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::debug;

use crate::error::Result;
use crate::graph::{CommonFriendGrouper, Scorer, ScoringConfig, TraversalEngine};
use crate::models::{CandidateInfo, Degree, MemberId, RecommendationCandidate};
use crate::store::FriendshipSource;

/// Input to one recommendation computation.
#[derive(Debug, Clone)]
pub struct RecommendationInput {
    /// Member the recommendations are for.
    pub origin: MemberId,

    /// The origin's direct friends, supplied by the caller.
    pub first_degree: HashSet<MemberId>,

    /// Behavioral interaction signal per member, from an external collaborator.
    pub interaction_scores: HashMap<MemberId, f64>,

    /// Non-graph candidates (e.g. recently joined members) scored with no
    /// graph signal.
    pub fallback_members: HashSet<MemberId>,
}

impl RecommendationInput {
    /// Creates an input with no interaction signal and no fallback members.
    pub fn new(origin: MemberId, first_degree: HashSet<MemberId>) -> Self {
        Self {
            origin,
            first_degree,
            interaction_scores: HashMap::new(),
            fallback_members: HashSet::new(),
        }
    }

    /// Builder: attach per-member interaction scores.
    pub fn with_interaction_scores(mut self, scores: HashMap<MemberId, f64>) -> Self {
        self.interaction_scores = scores;
        self
    }

    /// Builder: attach fallback candidates.
    pub fn with_fallback_members(mut self, members: HashSet<MemberId>) -> Self {
        self.fallback_members = members;
        self
    }
}

/// Computes ranked friend recommendations for one origin member.
///
/// Every invocation builds its own candidate maps and union-find forest;
/// concurrent requests share nothing but the read-only friendship source.
pub struct RecommendationService {
    engine: TraversalEngine,
    scorer: Scorer,
}

impl RecommendationService {
    /// Creates a service with a custom scoring configuration.
    pub fn new(source: Arc<dyn FriendshipSource>, config: ScoringConfig) -> Self {
        Self {
            engine: TraversalEngine::new(source),
            scorer: Scorer::new(config),
        }
    }

    /// Creates a service with the production scoring formula.
    pub fn with_defaults(source: Arc<dyn FriendshipSource>) -> Self {
        Self::new(source, ScoringConfig::default())
    }

    /// Runs the full pipeline and returns candidates sorted by total score,
    /// highest first. The set is never bounded or paginated here.
    ///
    /// Fails whole on a store error; no partial result is returned.
    pub async fn recommend(
        &self,
        input: RecommendationInput,
    ) -> Result<Vec<RecommendationCandidate>> {
        let second_degree = self
            .engine
            .find_second_degree(input.origin, &input.first_degree)
            .await?;
        let third_degree = self
            .engine
            .find_third_degree(input.origin, &input.first_degree, &second_degree)
            .await?;

        debug!(
            origin = %input.origin,
            second = second_degree.len(),
            third = third_degree.len(),
            fallback = input.fallback_members.len(),
            "Candidate discovery complete"
        );

        let mut candidates: HashMap<MemberId, RecommendationCandidate> = HashMap::new();

        for id in second_degree.keys() {
            candidates.insert(*id, RecommendationCandidate::new(*id, Degree::Second));
        }

        let infos: Vec<CandidateInfo> = second_degree
            .iter()
            .map(|(id, connected)| CandidateInfo::new(*id, connected.clone()))
            .collect();
        CommonFriendGrouper::build_common_friend_groups(&infos, &mut candidates)?;

        // Third-degree candidates are credited with their bridging
        // second-degree candidates, not first-degree friends.
        for (id, bridges) in &third_degree {
            let candidate = candidates
                .entry(*id)
                .or_insert_with(|| RecommendationCandidate::new(*id, Degree::Third));
            for bridge in bridges {
                candidate.add_common_friend(*bridge);
            }
        }

        // Fallback members only fill in when the graph found nothing for them
        for id in &input.fallback_members {
            if *id == input.origin || input.first_degree.contains(id) {
                continue;
            }
            candidates
                .entry(*id)
                .or_insert_with(|| RecommendationCandidate::new(*id, Degree::None));
        }

        let mut ranked: Vec<RecommendationCandidate> = candidates
            .into_values()
            .map(|mut candidate| {
                candidate.interaction_score = self
                    .scorer
                    .interaction_score(input.interaction_scores.get(&candidate.member_id).copied());
                self.scorer.score(&mut candidate);
                candidate
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.total_score
                .partial_cmp(&a.total_score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.member_id.cmp(&b.member_id))
        });

        Ok(ranked)
    }
}
