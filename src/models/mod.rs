//! Domain types for the recommendation pipeline.

pub mod candidate;
pub mod member;

// Re-exports
pub use candidate::{CandidateInfo, RecommendationCandidate};
pub use member::{Degree, MemberId};
