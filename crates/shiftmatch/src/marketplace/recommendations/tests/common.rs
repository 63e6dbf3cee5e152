use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use crate::marketplace::recommendations::domain::{
    Availability, GeoPoint, JobPosting, PostingId, PostingStatus, WorkerId, WorkerProfile,
};
use crate::marketplace::recommendations::engine::{RecommendationConfig, RecommendationEngine};
use crate::marketplace::recommendations::repository::{
    PostingRepository, RepositoryError, WorkerProfileRepository,
};
use crate::marketplace::recommendations::service::RecommendationService;

// 2026-08-07 is a Friday; the two days after it cover the weekend.
pub(super) fn friday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 7).expect("valid date")
}

pub(super) fn saturday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 8).expect("valid date")
}

pub(super) fn sunday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 9).expect("valid date")
}

pub(super) fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 10).expect("valid date")
}

/// Colombo Town Hall; the demo postings cluster around it.
pub(super) fn colombo() -> GeoPoint {
    GeoPoint::new(6.9271, 79.8612).expect("finite coordinates")
}

/// Colombo Fort, roughly 2.2 km from Town Hall.
pub(super) fn colombo_fort() -> GeoPoint {
    GeoPoint::new(6.9344, 79.8428).expect("finite coordinates")
}

/// About 40 km north of Town Hall along the same meridian.
pub(super) fn forty_km_north() -> GeoPoint {
    GeoPoint::new(7.2871, 79.8612).expect("finite coordinates")
}

pub(super) fn worker(skills: &[&str], availability: Availability) -> WorkerProfile {
    WorkerProfile {
        worker_id: WorkerId("worker-1".to_string()),
        skills: skills.iter().map(|skill| skill.to_string()).collect(),
        location: Some(colombo()),
        availability,
    }
}

pub(super) fn posting(id: &str, date: NaiveDate, skills: &[&str]) -> JobPosting {
    JobPosting {
        posting_id: PostingId(id.to_string()),
        title: format!("Posting {id}"),
        business_name: "Colombo Expo".to_string(),
        venue: "Exhibition Hall".to_string(),
        hourly_rate: 950,
        date,
        required_skills: skills.iter().map(|skill| skill.to_string()).collect(),
        location: Some(colombo_fort()),
        applicants: Default::default(),
        status: PostingStatus::Open,
    }
}

pub(super) fn engine() -> RecommendationEngine {
    RecommendationEngine::new(RecommendationConfig::default())
}

#[derive(Default, Clone)]
pub(super) struct MemoryProfiles {
    profiles: Arc<Mutex<HashMap<WorkerId, WorkerProfile>>>,
}

impl WorkerProfileRepository for MemoryProfiles {
    fn fetch(&self, id: &WorkerId) -> Result<Option<WorkerProfile>, RepositoryError> {
        let guard = self.profiles.lock().expect("profile mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn upsert(&self, profile: WorkerProfile) -> Result<(), RepositoryError> {
        let mut guard = self.profiles.lock().expect("profile mutex poisoned");
        guard.insert(profile.worker_id.clone(), profile);
        Ok(())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryBoard {
    postings: Arc<Mutex<HashMap<PostingId, JobPosting>>>,
}

impl PostingRepository for MemoryBoard {
    fn insert(&self, posting: JobPosting) -> Result<JobPosting, RepositoryError> {
        let mut guard = self.postings.lock().expect("posting mutex poisoned");
        if guard.contains_key(&posting.posting_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(posting.posting_id.clone(), posting.clone());
        Ok(posting)
    }

    fn fetch(&self, id: &PostingId) -> Result<Option<JobPosting>, RepositoryError> {
        let guard = self.postings.lock().expect("posting mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn open_postings(&self, today: NaiveDate) -> Result<Vec<JobPosting>, RepositoryError> {
        let guard = self.postings.lock().expect("posting mutex poisoned");
        let mut open: Vec<JobPosting> = guard
            .values()
            .filter(|posting| posting.status == PostingStatus::Open && posting.date >= today)
            .cloned()
            .collect();
        open.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| a.posting_id.cmp(&b.posting_id))
        });
        Ok(open)
    }
}

pub(super) struct UnavailableBoard;

impl PostingRepository for UnavailableBoard {
    fn insert(&self, _posting: JobPosting) -> Result<JobPosting, RepositoryError> {
        Err(RepositoryError::Unavailable("board offline".to_string()))
    }

    fn fetch(&self, _id: &PostingId) -> Result<Option<JobPosting>, RepositoryError> {
        Err(RepositoryError::Unavailable("board offline".to_string()))
    }

    fn open_postings(&self, _today: NaiveDate) -> Result<Vec<JobPosting>, RepositoryError> {
        Err(RepositoryError::Unavailable("board offline".to_string()))
    }
}

pub(super) fn build_service() -> (
    RecommendationService<MemoryProfiles, MemoryBoard>,
    Arc<MemoryProfiles>,
    Arc<MemoryBoard>,
) {
    let profiles = Arc::new(MemoryProfiles::default());
    let board = Arc::new(MemoryBoard::default());
    let service = RecommendationService::new(
        profiles.clone(),
        board.clone(),
        RecommendationConfig::default(),
    );
    (service, profiles, board)
}
