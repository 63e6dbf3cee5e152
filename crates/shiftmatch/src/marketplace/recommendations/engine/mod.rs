mod config;
pub(crate) mod filter;
pub(crate) mod score;

pub use config::RecommendationConfig;

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::domain::{JobPosting, PostingStatus, WorkerProfile};

/// Stateless scorer that applies the rubric configuration to one worker's
/// candidate postings. Safe to share across concurrent requests; it owns no
/// mutable state and performs no I/O.
pub struct RecommendationEngine {
    config: RecommendationConfig,
}

impl RecommendationEngine {
    pub fn new(config: RecommendationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RecommendationConfig {
        &self.config
    }

    /// Rank the postings this worker has not applied to, is available for,
    /// and is within range of, best first, capped at the configured feed
    /// length.
    ///
    /// Callers supply `today` explicitly so runs are reproducible; the engine
    /// never reads a clock. The candidate list must already be restricted to
    /// open, future-or-today postings by the posting collaborator — the
    /// engine checks that precondition only to warn, never to re-filter, so
    /// ranking semantics stay in one place.
    pub fn recommend(
        &self,
        worker: &WorkerProfile,
        postings: &[JobPosting],
        today: NaiveDate,
    ) -> Vec<ScoredPosting> {
        let out_of_contract = postings
            .iter()
            .filter(|posting| posting.date < today || posting.status != PostingStatus::Open)
            .count();
        if out_of_contract > 0 {
            warn!(
                out_of_contract,
                worker = %worker.worker_id.0,
                "candidate set contains closed or past-dated postings; ranking proceeds unchanged"
            );
        }

        let candidates = filter::eligible_candidates(worker, postings, &self.config);

        let mut scored: Vec<ScoredPosting> = candidates
            .into_iter()
            .map(|candidate| score::score_candidate(worker, candidate, &self.config))
            .collect();

        // Stable sort keeps the collaborator's ordering for equal scores.
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        scored.truncate(self.config.max_results);
        scored
    }
}

/// Discrete contributions to a composite score, kept so feeds can explain
/// why a posting ranked where it did.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skill_points: f64,
    pub distance_points: f64,
}

/// A posting that survived filtering, annotated with its distance from the
/// worker and the composite score in `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPosting {
    pub posting: JobPosting,
    pub distance_km: f64,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}
