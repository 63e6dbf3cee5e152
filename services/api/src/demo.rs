use crate::infra::{
    default_recommendation_config, parse_date, InMemoryPostingBoard, InMemoryWorkerProfiles,
};
use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

use shiftmatch::error::AppError;
use shiftmatch::marketplace::import::PostingCsvImporter;
use shiftmatch::marketplace::recommendations::{
    Availability, GeoPoint, JobPosting, PostingId, PostingRepository, PostingStatus,
    RecommendationEngine, RecommendationService, ScoredPosting, WorkerId, WorkerProfile,
    WorkerProfileRepository,
};

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Posting CSV export to rank
    #[arg(long)]
    pub(crate) postings_csv: PathBuf,
    /// Worker identifier used for the already-applied filter
    #[arg(long, default_value = "cli-worker")]
    pub(crate) worker_id: String,
    /// Comma-separated worker skills
    #[arg(long, value_delimiter = ',')]
    pub(crate) skills: Vec<String>,
    /// Worker latitude
    #[arg(long)]
    pub(crate) latitude: Option<f64>,
    /// Worker longitude
    #[arg(long)]
    pub(crate) longitude: Option<f64>,
    /// Worker availability: flexible, weekdays, or weekends
    #[arg(long, default_value = "flexible")]
    pub(crate) availability: String,
    /// Evaluation date (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Evaluation date for the demo (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) struct SeededMarketplace {
    pub(crate) workers: usize,
    pub(crate) postings: usize,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        postings_csv,
        worker_id,
        skills,
        latitude,
        longitude,
        availability,
        today,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());

    let imported = PostingCsvImporter::from_path(postings_csv)?;
    let candidates: Vec<JobPosting> = imported
        .into_iter()
        .filter(|posting| posting.status == PostingStatus::Open && posting.date >= today)
        .collect();

    let profile = WorkerProfile {
        worker_id: WorkerId(worker_id),
        skills,
        location: GeoPoint::from_parts(latitude, longitude),
        availability: Availability::parse(&availability),
    };

    let engine = RecommendationEngine::new(default_recommendation_config());
    let ranked = engine.recommend(&profile, &candidates, today);

    println!(
        "Ranked {} of {} open postings for {} (evaluated {})",
        ranked.len(),
        candidates.len(),
        profile.worker_id.0,
        today
    );
    render_recommendations(&ranked);

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    let profiles = Arc::new(InMemoryWorkerProfiles::default());
    let board = Arc::new(InMemoryPostingBoard::default());
    let service = Arc::new(RecommendationService::new(
        profiles,
        board,
        default_recommendation_config(),
    ));

    println!("shiftmatch marketplace demo (evaluated {today})");

    let seeded = sample_marketplace(&service, today)?;
    println!(
        "Seeded {} workers and {} postings around central Colombo",
        seeded.workers, seeded.postings
    );

    for worker_id in ["kasun-weekender", "amaya-flexible"] {
        let ranked = service.recommend_for_worker(&WorkerId(worker_id.to_string()), today)?;
        println!("\nRecommendations for {worker_id}");
        render_recommendations(&ranked);
    }

    Ok(())
}

/// Seed a small Colombo marketplace: two workers and a spread of postings
/// that exercises every filter (weekday/weekend dates, an out-of-range
/// venue, a posting already applied to, and one with no skill requirements).
pub(crate) fn sample_marketplace<W, P>(
    service: &RecommendationService<W, P>,
    today: NaiveDate,
) -> Result<SeededMarketplace, AppError>
where
    W: WorkerProfileRepository + 'static,
    P: PostingRepository + 'static,
{
    let town_hall = GeoPoint::new(6.9271, 79.8612);
    let fort = GeoPoint::new(6.9344, 79.8428);
    let negombo = GeoPoint::new(7.2871, 79.8612);

    let saturday = upcoming(today, Weekday::Sat);
    let monday = upcoming(today, Weekday::Mon);

    service.register_worker(WorkerProfile {
        worker_id: WorkerId("kasun-weekender".to_string()),
        skills: vec!["Ticket Handling".to_string()],
        location: town_hall,
        availability: Availability::Weekends,
    })?;
    service.register_worker(WorkerProfile {
        worker_id: WorkerId("amaya-flexible".to_string()),
        skills: vec![
            "Cleaning & Maintenance".to_string(),
            "Data Entry".to_string(),
        ],
        location: town_hall,
        availability: Availability::Flexible,
    })?;

    let mut postings = vec![
        demo_posting("expo-gates", "Expo Gate Steward", saturday, &["Ticket Handling"], fort),
        demo_posting("expo-floor", "Exhibition Floor Crew", saturday, &[], fort),
        demo_posting(
            "office-files",
            "Records Digitisation",
            monday,
            &["Data Entry", "Cleaning & Maintenance"],
            fort,
        ),
        demo_posting(
            "negombo-festival",
            "Festival Usher",
            saturday,
            &["Ticket Handling"],
            negombo,
        ),
    ];

    // Kasun already applied to this one; it must never resurface for him.
    let mut applied = demo_posting(
        "expo-parking",
        "Parking Marshal",
        saturday,
        &["Ticket Handling"],
        fort,
    );
    applied
        .applicants
        .insert(WorkerId("kasun-weekender".to_string()));
    postings.push(applied);

    let posting_count = postings.len();
    for posting in postings {
        service.publish_posting(posting)?;
    }

    Ok(SeededMarketplace {
        workers: 2,
        postings: posting_count,
    })
}

fn demo_posting(
    id: &str,
    title: &str,
    date: NaiveDate,
    skills: &[&str],
    location: Option<GeoPoint>,
) -> JobPosting {
    JobPosting {
        posting_id: PostingId(id.to_string()),
        title: title.to_string(),
        business_name: "Colombo Expo Services".to_string(),
        venue: "Central Colombo".to_string(),
        hourly_rate: 950,
        date,
        required_skills: skills.iter().map(|skill| skill.to_string()).collect(),
        location,
        applicants: Default::default(),
        status: PostingStatus::Open,
    }
}

/// Next occurrence of `weekday` on or after `date`.
fn upcoming(date: NaiveDate, weekday: Weekday) -> NaiveDate {
    let offset = (7 + i64::from(weekday.num_days_from_monday())
        - i64::from(date.weekday().num_days_from_monday()))
        % 7;
    date + Duration::days(offset)
}

fn render_recommendations(ranked: &[ScoredPosting]) {
    if ranked.is_empty() {
        println!("- no postings qualify");
        return;
    }

    for entry in ranked {
        println!(
            "- {} | {} | {} | {:.1} km | score {:.1} (skills {:.1} + proximity {:.1})",
            entry.posting.posting_id.0,
            entry.posting.title,
            entry.posting.date,
            entry.distance_km,
            entry.score,
            entry.breakdown.skill_points,
            entry.breakdown.distance_points
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upcoming_rolls_forward_to_the_requested_weekday() {
        // 2026-08-07 is a Friday.
        let friday = NaiveDate::from_ymd_opt(2026, 8, 7).expect("valid date");
        assert_eq!(
            upcoming(friday, Weekday::Sat),
            NaiveDate::from_ymd_opt(2026, 8, 8).expect("valid date")
        );
        assert_eq!(
            upcoming(friday, Weekday::Mon),
            NaiveDate::from_ymd_opt(2026, 8, 10).expect("valid date")
        );
        // The same weekday maps to the date itself.
        assert_eq!(upcoming(friday, Weekday::Fri), friday);
    }

    #[test]
    fn demo_marketplace_recommends_only_qualifying_postings() {
        let profiles = Arc::new(InMemoryWorkerProfiles::default());
        let board = Arc::new(InMemoryPostingBoard::default());
        let service = Arc::new(RecommendationService::new(
            profiles,
            board,
            default_recommendation_config(),
        ));

        let friday = NaiveDate::from_ymd_opt(2026, 8, 7).expect("valid date");
        sample_marketplace(&service, friday).expect("seed succeeds");

        let ranked = service
            .recommend_for_worker(&WorkerId("kasun-weekender".to_string()), friday)
            .expect("ranking succeeds");

        // Weekend availability drops the Monday posting, the radius drops
        // Negombo, and the applied posting is excluded; the full skill match
        // outranks the open-skills floor crew.
        let order: Vec<&str> = ranked
            .iter()
            .map(|entry| entry.posting.posting_id.0.as_str())
            .collect();
        assert_eq!(order, vec!["expo-gates", "expo-floor"]);
        assert_eq!(ranked[0].score, 100.0);
        assert_eq!(ranked[1].score, 65.0);
    }
}
