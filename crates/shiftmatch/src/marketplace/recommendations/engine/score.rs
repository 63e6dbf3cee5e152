use std::collections::HashSet;

use super::super::domain::WorkerProfile;
use super::config::RecommendationConfig;
use super::filter::Candidate;
use super::{ScoreBreakdown, ScoredPosting};

/// Second pipeline stage: turn a surviving candidate into a scored posting.
pub(crate) fn score_candidate(
    worker: &WorkerProfile,
    candidate: Candidate,
    config: &RecommendationConfig,
) -> ScoredPosting {
    let skill_points = skill_points(&worker.skills, &candidate.posting.required_skills, config);
    let distance_points = distance_points(candidate.distance_km, config);

    ScoredPosting {
        distance_km: candidate.distance_km,
        score: skill_points + distance_points,
        breakdown: ScoreBreakdown {
            skill_points,
            distance_points,
        },
        posting: candidate.posting,
    }
}

/// Pro-rata share of the skill weight for the fraction of required skills the
/// worker holds, by exact string equality over de-duplicated requirement
/// sets. A posting with no requirements earns half credit flat, so open
/// postings surface without demanding a skill overlap.
pub(crate) fn skill_points(
    worker_skills: &[String],
    required_skills: &[String],
    config: &RecommendationConfig,
) -> f64 {
    let required: HashSet<&str> = required_skills.iter().map(String::as_str).collect();
    if required.is_empty() {
        return config.open_posting_points;
    }

    let held: HashSet<&str> = worker_skills.iter().map(String::as_str).collect();
    let matched = required.intersection(&held).count();

    (matched as f64 / required.len() as f64) * config.skill_weight
}

/// Step-function proximity bonus; each band is closed at its upper edge.
pub(crate) fn distance_points(distance_km: f64, config: &RecommendationConfig) -> f64 {
    if distance_km <= config.near_distance_km {
        config.near_bonus
    } else if distance_km <= config.mid_distance_km {
        config.mid_bonus
    } else if distance_km <= config.far_distance_km {
        config.far_bonus
    } else {
        0.0
    }
}
