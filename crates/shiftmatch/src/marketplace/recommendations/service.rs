use std::sync::Arc;

use chrono::NaiveDate;

use super::domain::{JobPosting, WorkerId, WorkerProfile};
use super::engine::{RecommendationConfig, RecommendationEngine, ScoredPosting};
use super::repository::{PostingRepository, RepositoryError, WorkerProfileRepository};

/// Service composing the profile lookup, the posting listing, and the scorer.
pub struct RecommendationService<W, P> {
    profiles: Arc<W>,
    postings: Arc<P>,
    engine: Arc<RecommendationEngine>,
}

impl<W, P> RecommendationService<W, P>
where
    W: WorkerProfileRepository + 'static,
    P: PostingRepository + 'static,
{
    pub fn new(profiles: Arc<W>, postings: Arc<P>, config: RecommendationConfig) -> Self {
        Self {
            profiles,
            postings,
            engine: Arc::new(RecommendationEngine::new(config)),
        }
    }

    /// Rank open postings for the worker, best first.
    ///
    /// A worker without a stored profile is a caller error, reported before
    /// the engine ever runs.
    pub fn recommend_for_worker(
        &self,
        worker_id: &WorkerId,
        today: NaiveDate,
    ) -> Result<Vec<ScoredPosting>, RecommendationServiceError> {
        let profile = self
            .profiles
            .fetch(worker_id)?
            .ok_or_else(|| RecommendationServiceError::ProfileMissing(worker_id.clone()))?;

        let candidates = self.postings.open_postings(today)?;

        Ok(self.engine.recommend(&profile, &candidates, today))
    }

    /// Store or replace a worker profile.
    pub fn register_worker(
        &self,
        profile: WorkerProfile,
    ) -> Result<(), RecommendationServiceError> {
        self.profiles.upsert(profile)?;
        Ok(())
    }

    /// Publish a posting into the marketplace.
    pub fn publish_posting(
        &self,
        posting: JobPosting,
    ) -> Result<JobPosting, RecommendationServiceError> {
        Ok(self.postings.insert(posting)?)
    }
}

/// Error raised by the recommendation service.
#[derive(Debug, thiserror::Error)]
pub enum RecommendationServiceError {
    #[error("no profile found for worker '{}'", .0 .0)]
    ProfileMissing(WorkerId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
