use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use shiftmatch::marketplace::recommendations::{
    JobPosting, PostingId, PostingRepository, PostingStatus, RecommendationConfig,
    RepositoryError, WorkerId, WorkerProfile, WorkerProfileRepository,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryWorkerProfiles {
    profiles: Arc<Mutex<HashMap<WorkerId, WorkerProfile>>>,
}

impl WorkerProfileRepository for InMemoryWorkerProfiles {
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

/// In-memory posting board. `open_postings` implements the marketplace-side
/// contract the engine relies on: open status, future-or-today date, newest
/// posting date first.
#[derive(Default, Clone)]
pub(crate) struct InMemoryPostingBoard {
    postings: Arc<Mutex<HashMap<PostingId, JobPosting>>>,
}

impl PostingRepository for InMemoryPostingBoard {
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

pub(crate) fn default_recommendation_config() -> RecommendationConfig {
    RecommendationConfig::default()
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn deserialize_optional_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.map(|value| parse_date(&value).map_err(serde::de::Error::custom))
        .transpose()
}
