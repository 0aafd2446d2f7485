//! Business services for amity.
//!
//! The recommendation service wires traversal, grouping and scoring into a
//! single per-request pipeline:
//!
//! ```ignore
//! use amity::services::{RecommendationInput, RecommendationService};
//!
//! let service = RecommendationService::with_defaults(source);
//! let input = RecommendationInput::new(origin, first_degree)
//!     .with_interaction_scores(scores)
//!     .with_fallback_members(recent_joiners);
//!
//! let ranked = service.recommend(input).await?;
//! ```

pub mod recommendation;

// Re-exports
pub use recommendation::{RecommendationInput, RecommendationService};
