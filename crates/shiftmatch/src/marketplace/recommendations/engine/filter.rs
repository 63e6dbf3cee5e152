use chrono::{Datelike, NaiveDate, Weekday};

use super::super::domain::{Availability, JobPosting, WorkerProfile};
use super::super::geo::haversine_km;
use super::config::RecommendationConfig;

/// Posting that survived every gate, annotated with the distance computed
/// while evaluating the radius filter so scoring does not recompute it.
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    pub(crate) posting: JobPosting,
    pub(crate) distance_km: f64,
}

/// First pipeline stage: apply the three hard gates and annotate survivors.
///
/// Each gate is a boolean exclusion; no gate influences the score of a
/// posting that passes it, except that the radius gate hands its distance to
/// the scoring stage.
pub(crate) fn eligible_candidates(
    worker: &WorkerProfile,
    postings: &[JobPosting],
    config: &RecommendationConfig,
) -> Vec<Candidate> {
    postings
        .iter()
        .filter(|posting| !posting.has_applicant(&worker.worker_id))
        .filter(|posting| availability_permits(worker.availability, posting.date))
        .filter_map(|posting| {
            let distance_km = venue_distance(worker, posting)?;
            if exceeds_radius(distance_km, config.max_distance_km) {
                return None;
            }
            Some(Candidate {
                posting: posting.clone(),
                distance_km,
            })
        })
        .collect()
}

/// A posting is excluded only when a restrictive availability contradicts the
/// posting day: `Weekdays` rejects weekend dates and `Weekends` rejects
/// weekday dates. `Unknown` deliberately falls through both restrictive arms
/// and behaves like `Flexible` — unrecognised profile strings impose no day
/// restriction. Revisit if profile intake ever validates the raw value.
pub(crate) fn availability_permits(availability: Availability, date: NaiveDate) -> bool {
    match availability {
        Availability::Weekdays => !is_weekend(date),
        Availability::Weekends => is_weekend(date),
        Availability::Flexible | Availability::Unknown => true,
    }
}

pub(crate) fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Strict policy: a worker or posting without coordinates yields no distance,
/// and a posting without a distance is never recommended.
fn venue_distance(worker: &WorkerProfile, posting: &JobPosting) -> Option<f64> {
    let origin = worker.location?;
    let venue = posting.location?;
    Some(haversine_km(origin, venue))
}

/// The boundary itself is in range: exactly `max_distance_km` away passes.
pub(crate) fn exceeds_radius(distance_km: f64, max_distance_km: f64) -> bool {
    distance_km > max_distance_km
}
