//! Worker-facing job recommendations.
//!
//! The engine is a pure, synchronous pipeline — filter and annotate, score,
//! rank, truncate — over one worker's profile and the currently open
//! postings. Everything stateful (profile lookup, posting listing) sits
//! behind the repository traits so the engine and service stay trivially
//! testable.

pub mod domain;
pub(crate) mod engine;
pub mod geo;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Availability, GeoPoint, JobPosting, PostingId, PostingStatus, WorkerId, WorkerProfile,
};
pub use engine::{RecommendationConfig, RecommendationEngine, ScoreBreakdown, ScoredPosting};
pub use repository::{
    PostingRepository, RecommendationView, RepositoryError, WorkerProfileRepository,
};
pub use router::recommendations_router;
pub use service::{RecommendationService, RecommendationServiceError};
