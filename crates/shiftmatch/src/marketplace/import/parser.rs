use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};
use std::io::Read;

use super::normalizer::{normalize_label, split_skills};

/// One CSV row after normalization, before domain validation.
#[derive(Debug)]
pub(crate) struct PostingRecord {
    pub(crate) line: u64,
    pub(crate) posting_id: Option<String>,
    pub(crate) title: Option<String>,
    pub(crate) business_name: String,
    pub(crate) venue: String,
    pub(crate) hourly_rate: Option<String>,
    pub(crate) date: Option<String>,
    pub(crate) required_skills: Vec<String>,
    pub(crate) latitude: Option<String>,
    pub(crate) longitude: Option<String>,
    pub(crate) status: Option<String>,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<PostingRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for (index, record) in csv_reader.deserialize::<PostingRow>().enumerate() {
        let row = record?;
        // The header row occupies line 1.
        let line = index as u64 + 2;

        records.push(PostingRecord {
            line,
            posting_id: row.posting_id.map(|value| normalize_label(&value)),
            title: row.title.map(|value| normalize_label(&value)),
            business_name: row
                .business
                .map(|value| normalize_label(&value))
                .unwrap_or_default(),
            venue: row
                .venue
                .map(|value| normalize_label(&value))
                .unwrap_or_default(),
            hourly_rate: row.hourly_rate,
            date: row.date,
            required_skills: row
                .required_skills
                .as_deref()
                .map(split_skills)
                .unwrap_or_default(),
            latitude: row.latitude,
            longitude: row.longitude,
            status: row.status,
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct PostingRow {
    #[serde(rename = "Posting ID", default, deserialize_with = "empty_string_as_none")]
    posting_id: Option<String>,
    #[serde(rename = "Title", default, deserialize_with = "empty_string_as_none")]
    title: Option<String>,
    #[serde(rename = "Business", default, deserialize_with = "empty_string_as_none")]
    business: Option<String>,
    #[serde(rename = "Venue", default, deserialize_with = "empty_string_as_none")]
    venue: Option<String>,
    #[serde(
        rename = "Hourly Rate",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    hourly_rate: Option<String>,
    #[serde(rename = "Date", default, deserialize_with = "empty_string_as_none")]
    date: Option<String>,
    #[serde(
        rename = "Required Skills",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    required_skills: Option<String>,
    #[serde(rename = "Latitude", default, deserialize_with = "empty_string_as_none")]
    latitude: Option<String>,
    #[serde(rename = "Longitude", default, deserialize_with = "empty_string_as_none")]
    longitude: Option<String>,
    #[serde(rename = "Status", default, deserialize_with = "empty_string_as_none")]
    status: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// Exports write either bare dates or RFC 3339 timestamps; accept both.
pub(crate) fn parse_posting_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc().date());
    }

    None
}

#[cfg(test)]
pub(crate) fn parse_posting_date_for_tests(value: &str) -> Option<NaiveDate> {
    parse_posting_date(value)
}
