use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for worker accounts.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WorkerId(pub String);

/// Identifier wrapper for job postings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PostingId(pub String);

/// Validated coordinate pair.
///
/// Construction goes through [`GeoPoint::from_parts`], which rejects partial
/// or non-finite components, so NaN and infinity can never reach the distance
/// computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Build a point from the optional latitude/longitude columns profiles
    /// and postings carry. Anything short of two finite numbers counts as
    /// "no location".
    pub fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        match (latitude, longitude) {
            (Some(latitude), Some(longitude)) if latitude.is_finite() && longitude.is_finite() => {
                Some(Self {
                    latitude,
                    longitude,
                })
            }
            _ => None,
        }
    }

    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        Self::from_parts(Some(latitude), Some(longitude))
    }
}

/// A worker's self-declared day-of-week constraint on job interest.
///
/// Profiles store availability as free text; [`Availability::parse`] folds
/// anything unrecognised into `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Flexible,
    Weekdays,
    Weekends,
    Unknown,
}

impl Availability {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "flexible" => Self::Flexible,
            "weekdays" => Self::Weekdays,
            "weekends" => Self::Weekends,
            _ => Self::Unknown,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Availability::Flexible => "flexible",
            Availability::Weekdays => "weekdays",
            Availability::Weekends => "weekends",
            Availability::Unknown => "unknown",
        }
    }
}

/// Worker attributes the recommendation engine reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerProfile {
    pub worker_id: WorkerId,
    pub skills: Vec<String>,
    pub location: Option<GeoPoint>,
    pub availability: Availability,
}

/// Lifecycle status tracked on a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostingStatus {
    Open,
    Filled,
    Cancelled,
}

impl PostingStatus {
    pub const fn label(self) -> &'static str {
        match self {
            PostingStatus::Open => "open",
            PostingStatus::Filled => "filled",
            PostingStatus::Cancelled => "cancelled",
        }
    }
}

/// A part-time job posting published by a business account.
///
/// `title`, `business_name`, `venue`, and `hourly_rate` are descriptive and
/// pass through the engine unmodified; only `date`, `required_skills`,
/// `location`, and `applicants` participate in filtering and scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub posting_id: PostingId,
    pub title: String,
    pub business_name: String,
    pub venue: String,
    pub hourly_rate: u32,
    pub date: NaiveDate,
    pub required_skills: Vec<String>,
    pub location: Option<GeoPoint>,
    pub applicants: BTreeSet<WorkerId>,
    pub status: PostingStatus,
}

impl JobPosting {
    pub fn has_applicant(&self, worker_id: &WorkerId) -> bool {
        self.applicants.contains(worker_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_parts_requires_both_components() {
        assert!(GeoPoint::from_parts(Some(6.9), None).is_none());
        assert!(GeoPoint::from_parts(None, Some(79.8)).is_none());
        assert!(GeoPoint::from_parts(None, None).is_none());
        assert!(GeoPoint::from_parts(Some(6.9), Some(79.8)).is_some());
    }

    #[test]
    fn from_parts_rejects_non_finite_components() {
        assert!(GeoPoint::from_parts(Some(f64::NAN), Some(79.8)).is_none());
        assert!(GeoPoint::from_parts(Some(6.9), Some(f64::INFINITY)).is_none());
        assert!(GeoPoint::from_parts(Some(f64::NEG_INFINITY), Some(79.8)).is_none());
    }

    #[test]
    fn availability_parses_case_insensitively() {
        assert_eq!(Availability::parse("Flexible"), Availability::Flexible);
        assert_eq!(Availability::parse(" WEEKDAYS "), Availability::Weekdays);
        assert_eq!(Availability::parse("weekends"), Availability::Weekends);
    }

    #[test]
    fn unrecognised_availability_maps_to_unknown() {
        assert_eq!(Availability::parse("evenings"), Availability::Unknown);
        assert_eq!(Availability::parse(""), Availability::Unknown);
    }
}
