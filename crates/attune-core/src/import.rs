//! Check-in history import from CSV and JSON

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{normalize_mood_label, CheckInRecord};

/// Separator for the list columns of the CSV format
const LIST_SEPARATOR: char = ';';

/// Input format, chosen from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryFormat {
    Csv,
    Json,
}

impl HistoryFormat {
    /// `.json` is JSON, everything else is treated as CSV
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => HistoryFormat::Json,
            _ => HistoryFormat::Csv,
        }
    }
}

/// Read a history file in the format implied by its extension
pub fn load_history_file(path: &Path) -> Result<Vec<CheckInRecord>> {
    let file = std::fs::File::open(path)?;
    let records = match HistoryFormat::from_path(path) {
        HistoryFormat::Json => parse_history_json(file)?,
        HistoryFormat::Csv => parse_history_csv(file)?,
    };
    debug!("Loaded {} check-ins from {}", records.len(), path.display());
    Ok(records)
}

/// Parse a CSV history
///
/// Format: date,mood,mood_score,energy_level,triggers,emotions
/// with `;` between list items and dates as YYYY-MM-DD.
pub fn parse_history_csv<R: Read>(reader: R) -> Result<Vec<CheckInRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();

    for (index, result) in rdr.records().enumerate() {
        let row = index + 1;
        let record = result?;
        records.push(parse_row(&record, row)?);
    }

    debug!("Parsed {} check-ins from CSV", records.len());
    Ok(records)
}

fn parse_row(record: &StringRecord, row: usize) -> Result<CheckInRecord> {
    let date_str = record
        .get(0)
        .ok_or_else(|| Error::Import(format!("Row {}: missing date", row)))?;
    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| Error::Import(format!("Row {}: unable to parse date: {}", row, date_str)))?;

    let mood_str = record
        .get(1)
        .ok_or_else(|| Error::Import(format!("Row {}: missing mood", row)))?;
    let mood = normalize_mood_label(mood_str)
        .ok_or_else(|| Error::Import(format!("Row {}: unknown mood: {}", row, mood_str)))?;

    let mood_score = parse_score(record.get(2), "mood_score", row)?;
    let energy_level = parse_score(record.get(3), "energy_level", row)?;

    Ok(CheckInRecord {
        date,
        mood,
        mood_score,
        energy_level,
        triggers: split_list(record.get(4)),
        emotions: split_list(record.get(5)),
    })
}

/// Parse a 1..=10 score column
fn parse_score(value: Option<&str>, column: &str, row: usize) -> Result<u8> {
    let value = value.ok_or_else(|| Error::Import(format!("Row {}: missing {}", row, column)))?;
    let score: u8 = value
        .parse()
        .map_err(|_| Error::Import(format!("Row {}: invalid {}: {}", row, column, value)))?;
    if !(1..=10).contains(&score) {
        return Err(Error::Import(format!(
            "Row {}: {} must be between 1 and 10, got {}",
            row, column, score
        )));
    }
    Ok(score)
}

fn split_list(value: Option<&str>) -> Vec<String> {
    value
        .unwrap_or("")
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Parse a JSON array of check-ins
pub fn parse_history_json<R: Read>(reader: R) -> Result<Vec<CheckInRecord>> {
    let records: Vec<CheckInRecord> = serde_json::from_reader(reader)?;
    validate_scores(&records)?;
    debug!("Parsed {} check-ins from JSON", records.len());
    Ok(records)
}

/// Reject records whose scores fall outside 1..=10
pub fn validate_scores(records: &[CheckInRecord]) -> Result<()> {
    for (index, record) in records.iter().enumerate() {
        for (column, value) in [
            ("mood_score", record.mood_score),
            ("energy_level", record.energy_level),
        ] {
            if !(1..=10).contains(&value) {
                return Err(Error::InvalidData(format!(
                    "Entry {}: {} must be between 1 and 10, got {}",
                    index + 1,
                    column,
                    value
                )));
            }
        }
    }
    Ok(())
}

/// Stable ascending sort by date
pub fn sort_chronologically(records: &mut [CheckInRecord]) {
    records.sort_by_key(|r| r.date);
}
