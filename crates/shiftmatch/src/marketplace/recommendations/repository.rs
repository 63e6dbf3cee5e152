use chrono::NaiveDate;
use serde::Serialize;

use super::domain::{JobPosting, PostingId, WorkerId, WorkerProfile};
use super::engine::ScoredPosting;

/// Profile lookup abstraction so the recommendation service can be exercised
/// in isolation. Implementations back onto whatever identity store the
/// deployment uses.
pub trait WorkerProfileRepository: Send + Sync {
    fn fetch(&self, id: &WorkerId) -> Result<Option<WorkerProfile>, RepositoryError>;
    fn upsert(&self, profile: WorkerProfile) -> Result<(), RepositoryError>;
}

/// Posting listing abstraction.
///
/// `open_postings` owns the marketplace-side restriction the engine relies
/// on: only postings with status `open` and `date >= today` are returned,
/// newest posting date first.
pub trait PostingRepository: Send + Sync {
    fn insert(&self, posting: JobPosting) -> Result<JobPosting, RepositoryError>;
    fn fetch(&self, id: &PostingId) -> Result<Option<JobPosting>, RepositoryError>;
    fn open_postings(&self, today: NaiveDate) -> Result<Vec<JobPosting>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Flattened, JSON-ready projection of a scored posting for API consumers:
/// the posting's own attributes annotated with `distance_km`, the composite
/// `score`, and its two components.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationView {
    pub posting_id: PostingId,
    pub title: String,
    pub business_name: String,
    pub venue: String,
    pub hourly_rate: u32,
    pub date: NaiveDate,
    pub required_skills: Vec<String>,
    pub status: &'static str,
    pub distance_km: f64,
    pub score: f64,
    pub skill_points: f64,
    pub distance_points: f64,
}

impl ScoredPosting {
    pub fn view(&self) -> RecommendationView {
        RecommendationView {
            posting_id: self.posting.posting_id.clone(),
            title: self.posting.title.clone(),
            business_name: self.posting.business_name.clone(),
            venue: self.posting.venue.clone(),
            hourly_rate: self.posting.hourly_rate,
            date: self.posting.date,
            required_skills: self.posting.required_skills.clone(),
            status: self.posting.status.label(),
            distance_km: self.distance_km,
            score: self.score,
            skill_points: self.breakdown.skill_points,
            distance_points: self.breakdown.distance_points,
        }
    }
}
