//! Graph algorithms for friend recommendation.
//!
//! This module provides:
//! - **Traversal**: batched second- and third-degree candidate discovery
//! - **Grouping**: union-find over candidates and their bridging friends
//! - **Scoring**: composite rank score from degree, common-friend density
//!   and interaction signal

pub mod config;
pub mod grouping;
pub mod scoring;
pub mod traversal;

// Re-exports
pub use config::ScoringConfig;
pub use grouping::{CommonFriendGrouper, DisjointSet};
pub use scoring::Scorer;
pub use traversal::TraversalEngine;
