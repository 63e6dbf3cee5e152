//! Posting intake from business CSV exports.
//!
//! Businesses bulk-upload their shift schedules as spreadsheet exports; this
//! module turns those rows into [`JobPosting`]s, rejecting rows that are
//! missing the fields the marketplace cannot invent.

mod normalizer;
mod parser;

use std::io::Read;
use std::path::Path;

use crate::marketplace::recommendations::domain::{
    GeoPoint, JobPosting, PostingId, PostingStatus,
};

use parser::PostingRecord;

#[derive(Debug)]
pub enum PostingImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Row { line: u64, reason: String },
}

impl std::fmt::Display for PostingImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostingImportError::Io(err) => write!(f, "failed to read posting export: {}", err),
            PostingImportError::Csv(err) => write!(f, "invalid posting CSV data: {}", err),
            PostingImportError::Row { line, reason } => {
                write!(f, "rejected posting row at line {}: {}", line, reason)
            }
        }
    }
}

impl std::error::Error for PostingImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PostingImportError::Io(err) => Some(err),
            PostingImportError::Csv(err) => Some(err),
            PostingImportError::Row { .. } => None,
        }
    }
}

impl From<std::io::Error> for PostingImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for PostingImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct PostingCsvImporter;

impl PostingCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<JobPosting>, PostingImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<JobPosting>, PostingImportError> {
        let mut postings = Vec::new();

        for record in parser::parse_records(reader)? {
            postings.push(posting_from_record(record)?);
        }

        Ok(postings)
    }
}

fn posting_from_record(record: PostingRecord) -> Result<JobPosting, PostingImportError> {
    let line = record.line;
    let reject = |reason: String| PostingImportError::Row { line, reason };

    let posting_id = record
        .posting_id
        .ok_or_else(|| reject("missing posting id".to_string()))?;
    let title = record
        .title
        .ok_or_else(|| reject("missing title".to_string()))?;

    let raw_date = record
        .date
        .ok_or_else(|| reject("missing date".to_string()))?;
    let date = parser::parse_posting_date(&raw_date)
        .ok_or_else(|| reject(format!("unparseable date '{raw_date}'")))?;

    let hourly_rate = match record.hourly_rate {
        Some(raw) => raw
            .parse::<u32>()
            .map_err(|_| reject(format!("unparseable hourly rate '{raw}'")))?,
        None => 0,
    };

    let latitude = parse_coordinate(record.latitude, "latitude", line)?;
    let longitude = parse_coordinate(record.longitude, "longitude", line)?;

    let status = match record.status.as_deref() {
        None => PostingStatus::Open,
        Some(raw) => match raw.to_ascii_lowercase().as_str() {
            "open" => PostingStatus::Open,
            "filled" => PostingStatus::Filled,
            "cancelled" | "canceled" => PostingStatus::Cancelled,
            other => return Err(reject(format!("unknown status '{other}'"))),
        },
    };

    Ok(JobPosting {
        posting_id: PostingId(posting_id),
        title,
        business_name: record.business_name,
        venue: record.venue,
        hourly_rate,
        date,
        required_skills: record.required_skills,
        // Non-finite numbers fold to "no location" here, the same as absent
        // columns; the distance filter handles the rest.
        location: GeoPoint::from_parts(latitude, longitude),
        applicants: Default::default(),
        status,
    })
}

fn parse_coordinate(
    raw: Option<String>,
    field: &str,
    line: u64,
) -> Result<Option<f64>, PostingImportError> {
    match raw {
        None => Ok(None),
        Some(value) => value
            .parse::<f64>()
            .map(Some)
            .map_err(|_| PostingImportError::Row {
                line,
                reason: format!("unparseable {field} '{value}'"),
            }),
    }
}
