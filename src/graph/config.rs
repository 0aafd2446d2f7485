//! Scoring configuration.

use serde::{Deserialize, Serialize};

/// Weights and caps for the composite rank score.
///
/// Defaults encode the production formula: 50/20 base points for second and
/// third degree, up to 10 common friends counted at 2.0/0.5 points each, and
/// an interaction signal capped at 10.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Base points for a second-degree candidate.
    pub second_degree_base: f64,

    /// Base points for a third-degree candidate.
    pub third_degree_base: f64,

    /// Points per common friend at second degree.
    pub second_degree_common_weight: f64,

    /// Points per bridging second-degree candidate at third degree.
    pub third_degree_common_weight: f64,

    /// Common friends counted beyond this are ignored. Applied before the
    /// per-friend weight, never after.
    pub max_counted_common_friends: usize,

    /// Ceiling on the raw interaction signal.
    pub interaction_cap: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            second_degree_base: 50.0,
            third_degree_base: 20.0,
            second_degree_common_weight: 2.0,
            third_degree_common_weight: 0.5,
            max_counted_common_friends: 10,
            interaction_cap: 10.0,
        }
    }
}

impl ScoringConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the second-degree base score.
    pub fn with_second_degree_base(mut self, base: f64) -> Self {
        self.second_degree_base = base.max(0.0);
        self
    }

    /// Builder: set the third-degree base score.
    pub fn with_third_degree_base(mut self, base: f64) -> Self {
        self.third_degree_base = base.max(0.0);
        self
    }

    /// Builder: set the common-friend cap.
    pub fn with_max_counted_common_friends(mut self, max: usize) -> Self {
        self.max_counted_common_friends = max;
        self
    }

    /// Builder: set the interaction ceiling.
    pub fn with_interaction_cap(mut self, cap: f64) -> Self {
        self.interaction_cap = cap.max(0.0);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.second_degree_base < self.third_degree_base {
            return Err(ConfigError::BaseOrderInverted);
        }
        if self.second_degree_common_weight < 0.0 || self.third_degree_common_weight < 0.0 {
            return Err(ConfigError::NegativeCommonWeight);
        }
        if self.interaction_cap < 0.0 {
            return Err(ConfigError::NegativeInteractionCap);
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    BaseOrderInverted,
    NegativeCommonWeight,
    NegativeInteractionCap,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BaseOrderInverted => {
                write!(f, "Second-degree base must be >= third-degree base")
            }
            Self::NegativeCommonWeight => write!(f, "Common-friend weights must be >= 0"),
            Self::NegativeInteractionCap => write!(f, "Interaction cap must be >= 0"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_production_formula() {
        let config = ScoringConfig::default();

        assert!((config.second_degree_base - 50.0).abs() < f64::EPSILON);
        assert!((config.third_degree_base - 20.0).abs() < f64::EPSILON);
        assert!((config.second_degree_common_weight - 2.0).abs() < f64::EPSILON);
        assert!((config.third_degree_common_weight - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.max_counted_common_friends, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = ScoringConfig::new()
            .with_second_degree_base(40.0)
            .with_third_degree_base(15.0)
            .with_max_counted_common_friends(5)
            .with_interaction_cap(8.0);

        assert!((config.second_degree_base - 40.0).abs() < f64::EPSILON);
        assert!((config.third_degree_base - 15.0).abs() < f64::EPSILON);
        assert_eq!(config.max_counted_common_friends, 5);
        assert!((config.interaction_cap - 8.0).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_inverted_bases() {
        let config = ScoringConfig::new()
            .with_second_degree_base(10.0)
            .with_third_degree_base(20.0);

        assert_eq!(config.validate(), Err(ConfigError::BaseOrderInverted));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::BaseOrderInverted;
        assert!(err.to_string().contains("base"));
    }
}
