//! Import log rows from a spreadsheet export

use crate::application::ParsingContext;
use crate::domain::parse_day;
use crate::error::Result;
use crate::infrastructure::{ClimbRepository, CsvRowSource, FileSystemRepository, RowSource};
use std::path::Path;

/// What an import did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    /// Days already stored and left alone
    pub skipped: usize,
    pub entries: usize,
    pub needs_review: usize,
}

pub struct ImportService {
    repository: FileSystemRepository,
}

impl ImportService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ImportService { repository }
    }

    /// Import a CSV file. Stored days are skipped unless `force` is set.
    pub fn execute(&self, csv: &Path, date_prefix: Option<&str>, force: bool) -> Result<ImportSummary> {
        let context = ParsingContext::load(&self.repository)?;
        let source = CsvRowSource::from_path(csv)?
            .with_place_filter(&context.config.place_filter)
            .with_date_prefix(date_prefix);

        self.import_rows(source, &context, force)
    }

    /// Parse and store every row a source yields
    pub fn import_rows(
        &self,
        mut source: impl RowSource,
        context: &ParsingContext,
        force: bool,
    ) -> Result<ImportSummary> {
        let mut summary = ImportSummary::default();

        for row in source.rows()? {
            if !force && self.repository.day_exists(row.date) {
                tracing::debug!(date = %row.date, "day already stored, skipping");
                summary.skipped += 1;
                continue;
            }

            let roster = context.climbers.roster_from_header(&row.place_and_climbers);
            let day = parse_day(
                row.date,
                &row.place_and_climbers,
                &row.comment,
                &roster,
                &context.routes,
                &context.climbers,
            );
            self.repository.put_day(&day)?;

            let review = day.entries_needing_review().len();
            tracing::info!(
                date = %day.date,
                entries = day.climb_entries.len(),
                needs_review = review,
                "imported day"
            );

            summary.imported += 1;
            summary.entries += day.climb_entries.len();
            summary.needs_review += review;
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::InitService;
    use crate::error::ClimbError;
    use crate::infrastructure::LogRow;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    const SHEET: &str = "\
Date,Climb,Comments
6/1/2024,Rumney TA AS,\"Armed, Obi (AS)\"
6/8/2024,Gym TA AS,Board session
6/15/2024,Rumney TA,\"Centerpiece (TA redpoint), Qwxzv\"
";

    struct FixedRows(Vec<LogRow>);

    impl RowSource for FixedRows {
        fn rows(&mut self) -> Result<Vec<LogRow>> {
            Ok(std::mem::take(&mut self.0))
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn setup() -> (TempDir, ImportService) {
        let temp = TempDir::new().unwrap();
        InitService::execute(temp.path(), true).unwrap();
        fs::write(temp.path().join("log.csv"), SHEET).unwrap();
        let service = ImportService::new(FileSystemRepository::new(temp.path().to_path_buf()));
        (temp, service)
    }

    #[test]
    fn test_import_filters_place_and_stores_days() {
        let (temp, service) = setup();

        let summary = service.execute(&temp.path().join("log.csv"), None, false).unwrap();
        assert_eq!(summary.imported, 2);
        assert_eq!(summary.skipped, 0);
        assert_eq!(summary.entries, 4);
        assert_eq!(summary.needs_review, 2);

        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        let day = repo.get_day(date(2024, 6, 1)).unwrap().unwrap();
        assert_eq!(day.climb_entries[0].attempts("TA"), 1);
        assert_eq!(day.climb_entries[0].attempts("AS"), 1);
        assert!(!repo.day_exists(date(2024, 6, 8)));
    }

    #[test]
    fn test_import_roster_comes_from_header() {
        let (temp, service) = setup();
        service.execute(&temp.path().join("log.csv"), None, false).unwrap();

        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        let day = repo.get_day(date(2024, 6, 15)).unwrap().unwrap();
        assert_eq!(day.climb_entries[0].climbers, vec!["TA"]);
    }

    #[test]
    fn test_import_skips_existing_unless_forced() {
        let (temp, service) = setup();
        let csv = temp.path().join("log.csv");

        service.execute(&csv, None, false).unwrap();
        let again = service.execute(&csv, None, false).unwrap();
        assert_eq!(again.imported, 0);
        assert_eq!(again.skipped, 2);

        let forced = service.execute(&csv, None, true).unwrap();
        assert_eq!(forced.imported, 2);
    }

    #[test]
    fn test_import_date_prefix() {
        let (temp, service) = setup();
        let summary = service
            .execute(&temp.path().join("log.csv"), Some("2024-06-1"), false)
            .unwrap();
        assert_eq!(summary.imported, 1);
    }

    #[test]
    fn test_import_rows_from_any_source() {
        let (_temp, service) = setup();
        let context = ParsingContext::load(&service.repository).unwrap();
        let rows = FixedRows(vec![LogRow {
            date: date(2024, 7, 4),
            place_and_climbers: "Rumney AS".to_string(),
            comment: "Weevil (AS 2 hangs)".to_string(),
        }]);

        let summary = service.import_rows(rows, &context, false).unwrap();
        assert_eq!(summary.imported, 1);

        let day = service.repository.get_day(date(2024, 7, 4)).unwrap().unwrap();
        assert_eq!(day.climb_entries[0].hangs("AS"), 1);
    }

    #[test]
    fn test_import_outside_log_fails() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("log.csv"), SHEET).unwrap();
        let service = ImportService::new(FileSystemRepository::new(temp.path().to_path_buf()));

        let result = service.execute(&temp.path().join("log.csv"), None, false);
        assert!(matches!(result, Err(ClimbError::NotClimblogDirectory(_))));
    }
}
