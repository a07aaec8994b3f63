//! Raw log rows from a spreadsheet export
//!
//! The climbing log is kept in a spreadsheet with (at least) the columns
//! `Date`, `Climb` (place and climbers) and `Comments`. Dates are written
//! `M/D/YYYY`; ISO dates are accepted as well.

use crate::error::{ClimbError, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One row of the climbing log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRow {
    pub date: NaiveDate,
    pub place_and_climbers: String,
    pub comment: String,
}

/// Producer of log rows in chronological (file) order
pub trait RowSource {
    fn rows(&mut self) -> Result<Vec<LogRow>>;
}

#[derive(Debug, Deserialize)]
struct SheetRow {
    #[serde(rename = "Date", default)]
    date: String,
    #[serde(rename = "Climb", default)]
    climb: String,
    #[serde(rename = "Comments", default)]
    comments: String,
}

/// Rows read from CSV, filtered by place and date prefix
pub struct CsvRowSource<R: Read> {
    reader: csv::Reader<R>,
    place_filter: String,
    date_prefix: Option<String>,
}

impl CsvRowSource<File> {
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Ok(CsvRowSource::from_reader(file))
    }
}

impl<R: Read> CsvRowSource<R> {
    pub fn from_reader(reader: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);
        CsvRowSource {
            reader,
            place_filter: String::new(),
            date_prefix: None,
        }
    }

    /// Keep only rows whose place mentions `filter` (case-insensitive).
    /// An empty filter keeps every row.
    pub fn with_place_filter(mut self, filter: &str) -> Self {
        self.place_filter = filter.trim().to_lowercase();
        self
    }

    /// Keep only rows whose ISO date starts with `prefix`, e.g. "2024" or "2024-06"
    pub fn with_date_prefix(mut self, prefix: Option<&str>) -> Self {
        self.date_prefix = prefix.map(|p| p.trim().to_string());
        self
    }

    /// Sheet rows paired with the file line each record starts on.
    /// Quoted fields may span lines, so the line comes from the reader.
    fn sheet_rows(&mut self) -> Result<Vec<(u64, SheetRow)>> {
        let headers = self.reader.headers()?.clone();
        let mut rows = Vec::new();

        for record in self.reader.records() {
            let record = record?;
            let line = record.position().map_or(0, |p| p.line());
            rows.push((line, record.deserialize::<SheetRow>(Some(&headers))?));
        }
        Ok(rows)
    }
}

impl<R: Read> RowSource for CsvRowSource<R> {
    fn rows(&mut self) -> Result<Vec<LogRow>> {
        let mut rows = Vec::new();

        for (line, record) in self.sheet_rows()? {
            if record.date.trim().is_empty() {
                continue;
            }
            if !self.place_filter.is_empty()
                && !record.climb.to_lowercase().contains(&self.place_filter)
            {
                continue;
            }

            let date = match parse_sheet_date(&record.date) {
                Ok(date) => date,
                Err(_) => {
                    tracing::warn!(row = line, date = %record.date, "skipping row with unreadable date");
                    continue;
                }
            };

            if let Some(prefix) = &self.date_prefix {
                if !date.format("%Y-%m-%d").to_string().starts_with(prefix.as_str()) {
                    continue;
                }
            }

            rows.push(LogRow {
                date,
                place_and_climbers: record.climb,
                comment: record.comments,
            });
        }

        Ok(rows)
    }
}

/// Parse a date as written in the sheet (`M/D/YYYY`) or as ISO (`YYYY-MM-DD`)
pub fn parse_sheet_date(input: &str) -> Result<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(input, "%m/%d/%Y"))
        .map_err(|_| ClimbError::InvalidDate(input.to_string()))
}
