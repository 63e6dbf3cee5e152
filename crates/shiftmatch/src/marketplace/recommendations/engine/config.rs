use serde::{Deserialize, Serialize};

/// Rubric configuration for the recommendation scorer.
///
/// Every threshold the ranking depends on is named here rather than inlined
/// at its use site so tests can pin bands individually. These are contract
/// values, not deployment tunables; callers normally take
/// [`RecommendationConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Postings farther than this never surface, regardless of score.
    pub max_distance_km: f64,
    pub near_distance_km: f64,
    pub mid_distance_km: f64,
    pub far_distance_km: f64,
    pub near_bonus: f64,
    pub mid_bonus: f64,
    pub far_bonus: f64,
    /// Ceiling of the skill component for a full requirements match.
    pub skill_weight: f64,
    /// Flat credit for postings that declare no skill requirements.
    pub open_posting_points: f64,
    /// Feed length cap after ranking.
    pub max_results: usize,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            max_distance_km: 25.0,
            near_distance_km: 5.0,
            mid_distance_km: 10.0,
            far_distance_km: 20.0,
            near_bonus: 30.0,
            mid_bonus: 20.0,
            far_bonus: 10.0,
            skill_weight: 70.0,
            open_posting_points: 35.0,
            max_results: 5,
        }
    }
}
