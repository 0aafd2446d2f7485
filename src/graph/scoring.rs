//! Composite rank scoring.
//!
//! A candidate's score is a pure function of its degree, common-friend
//! count, and interaction signal. Caps are applied to each component before
//! weighting, so the maxima are fixed: 80 at second degree, 35 at third,
//! and 10 for a non-graph candidate (interaction alone).

use crate::models::{Degree, RecommendationCandidate};

use super::config::ScoringConfig;

/// Stateless scorer over a fixed configuration.
pub struct Scorer {
    config: ScoringConfig,
}

impl Scorer {
    /// Creates a scorer with the given configuration.
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Creates a scorer with the production formula.
    pub fn with_defaults() -> Self {
        Self::new(ScoringConfig::default())
    }

    /// Base points for a degree.
    pub fn base_score(&self, degree: Degree) -> f64 {
        match degree {
            Degree::Second => self.config.second_degree_base,
            Degree::Third => self.config.third_degree_base,
            Degree::None => 0.0,
        }
    }

    /// Common-friend component: the count is capped first, then weighted.
    ///
    /// At third degree the count is of distinct bridging second-degree
    /// candidates, not first-degree friends.
    pub fn common_friend_score(&self, common_count: usize, degree: Degree) -> f64 {
        let capped = common_count.min(self.config.max_counted_common_friends) as f64;
        match degree {
            Degree::Second => capped * self.config.second_degree_common_weight,
            Degree::Third => capped * self.config.third_degree_common_weight,
            Degree::None => 0.0,
        }
    }

    /// Interaction component: the raw signal clamped to [0, cap]; a missing
    /// signal is 0.
    pub fn interaction_score(&self, raw_score: Option<f64>) -> f64 {
        raw_score
            .unwrap_or(0.0)
            .clamp(0.0, self.config.interaction_cap)
    }

    /// Composite score for a candidate, without mutating it.
    pub fn total_score(&self, candidate: &RecommendationCandidate) -> f64 {
        self.base_score(candidate.degree)
            + self.common_friend_score(candidate.common_friend_count(), candidate.degree)
            + self.interaction_score(Some(candidate.interaction_score))
    }

    /// Computes the composite score and writes it back onto the candidate.
    /// The only mutating call in the scorer.
    pub fn score(&self, candidate: &mut RecommendationCandidate) {
        candidate.total_score = self.total_score(candidate);
    }

    /// Maximum attainable score at a degree.
    pub fn max_score_for(&self, degree: Degree) -> f64 {
        self.base_score(degree)
            + self.common_friend_score(self.config.max_counted_common_friends, degree)
            + self.config.interaction_cap
    }
}
