//! The time-logging orchestration service.

use std::sync::Arc;

use chrono::{Local, NaiveDateTime};

use crate::client::SheetsClient;
use crate::rows;
use ticklist_core::{ColumnMap, Error, Result, format_duration};

/// Result of a successful time-logging call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogOutcome {
    /// Human-readable summary naming the column and a rushed marker.
    pub message: String,
    /// Number of cells the spreadsheet backend reports as updated.
    pub updated_cells: u32,
}

/// Records one completion duration per checklist into the spreadsheet.
///
/// Stateless per request; safe to share behind an `Arc` across
/// concurrent handlers.
pub struct TimeLogService {
    client: Arc<dyn SheetsClient>,
    columns: ColumnMap,
    sheet_name: String,
    cutoff_hour: u32,
}

impl TimeLogService {
    /// Create a service writing into the named sheet tab.
    pub fn new(
        client: Arc<dyn SheetsClient>,
        columns: ColumnMap,
        sheet_name: impl Into<String>,
    ) -> Self {
        Self {
            client,
            columns,
            sheet_name: sheet_name.into(),
            cutoff_hour: rows::DEFAULT_CUTOFF_HOUR,
        }
    }

    /// Log a completion against the current local time.
    pub async fn log(
        &self,
        checklist_name: &str,
        duration_seconds: u64,
        rushed: bool,
    ) -> Result<LogOutcome> {
        self.log_at(checklist_name, duration_seconds, rushed, Local::now().naive_local())
            .await
    }

    /// Log a completion as of an explicit timestamp.
    ///
    /// Resolves the target column, finds the effective date's row in
    /// column A, and writes the formatted duration into that cell.
    /// Input validation fails before any network call is made.
    pub async fn log_at(
        &self,
        checklist_name: &str,
        duration_seconds: u64,
        rushed: bool,
        now: NaiveDateTime,
    ) -> Result<LogOutcome> {
        if checklist_name.is_empty() {
            return Err(Error::invalid_request("checklist_name must not be empty"));
        }

        let column = self.columns.resolve(checklist_name);
        let column_number = column.number(rushed);

        let key = rows::date_key(rows::effective_date(now, self.cutoff_hour));

        let column_a = self
            .client
            .read_column(&format!("'{}'!A:A", self.sheet_name))
            .await?;
        let row = rows::find_row(&key, &column_a)?;

        let cell = format!(
            "'{}'!{}{}",
            self.sheet_name,
            rows::column_letter(column_number),
            row
        );
        let time_str = format_duration(duration_seconds);

        let updated_cells = self.client.write_cell(&cell, &time_str).await?;

        let display = if rushed {
            format!("{column} (rushed)")
        } else {
            column.to_string()
        };
        tracing::info!(
            checklist = checklist_name,
            cell = %cell,
            duration = %time_str,
            "completion time logged"
        );

        Ok(LogOutcome {
            message: format!("Logged {time_str} to {display} column"),
            updated_cells,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::Mutex;

    /// In-memory spreadsheet backend recording every write.
    struct FakeSheets {
        column_a: Vec<String>,
        writes: Mutex<Vec<(String, String)>>,
        updated_cells: u32,
    }

    impl FakeSheets {
        fn with_column_a(column_a: Vec<&str>) -> Self {
            Self {
                column_a: column_a.into_iter().map(str::to_string).collect(),
                writes: Mutex::new(Vec::new()),
                updated_cells: 1,
            }
        }
    }

    #[async_trait]
    impl SheetsClient for FakeSheets {
        async fn read_column(&self, _range: &str) -> ticklist_core::Result<Vec<String>> {
            Ok(self.column_a.clone())
        }

        async fn write_cell(&self, address: &str, value: &str) -> ticklist_core::Result<u32> {
            self.writes
                .lock()
                .unwrap()
                .push((address.to_string(), value.to_string()));
            Ok(self.updated_cells)
        }
    }

    fn noon(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn service(fake: Arc<FakeSheets>) -> TimeLogService {
        TimeLogService::new(fake, ColumnMap::default(), "Sheet1")
    }

    #[tokio::test]
    async fn test_morning_writes_day_column() {
        // Row 5 holds today's key.
        let fake = Arc::new(FakeSheets::with_column_a(vec![
            "Date", "3/1/2024", "3/2/2024", "3/3/2024", "3/4/2024",
        ]));
        let outcome = service(fake.clone())
            .log_at("morning", 3725, false, noon(2024, 3, 4))
            .await
            .unwrap();

        let writes = fake.writes.lock().unwrap();
        assert_eq!(writes.as_slice(), [("'Sheet1'!B5".to_string(), "1h 2m 5s".to_string())]);
        assert_eq!(outcome.updated_cells, 1);
        assert_eq!(outcome.message, "Logged 1h 2m 5s to Day column");
    }

    #[tokio::test]
    async fn test_rushed_shifts_one_column_right() {
        let fake = Arc::new(FakeSheets::with_column_a(vec![
            "Date", "3/1/2024", "3/2/2024", "3/3/2024", "3/4/2024",
        ]));
        let outcome = service(fake.clone())
            .log_at("morning", 3725, true, noon(2024, 3, 4))
            .await
            .unwrap();

        let writes = fake.writes.lock().unwrap();
        assert_eq!(writes[0].0, "'Sheet1'!C5");
        assert_eq!(outcome.message, "Logged 1h 2m 5s to Day (rushed) column");
    }

    #[tokio::test]
    async fn test_night_checklist_uses_night_column() {
        let fake = Arc::new(FakeSheets::with_column_a(vec!["3/4/2024"]));
        service(fake.clone())
            .log_at("Night", 90, false, noon(2024, 3, 4))
            .await
            .unwrap();

        assert_eq!(fake.writes.lock().unwrap()[0].0, "'Sheet1'!D1");
    }

    #[tokio::test]
    async fn test_unmapped_checklist_defaults_to_day() {
        let fake = Arc::new(FakeSheets::with_column_a(vec!["3/4/2024"]));
        service(fake.clone())
            .log_at("groceries", 45, false, noon(2024, 3, 4))
            .await
            .unwrap();

        let writes = fake.writes.lock().unwrap();
        assert_eq!(writes.as_slice(), [("'Sheet1'!B1".to_string(), "45s".to_string())]);
    }

    #[tokio::test]
    async fn test_early_morning_logs_previous_day() {
        let fake = Arc::new(FakeSheets::with_column_a(vec!["3/3/2024", "3/4/2024"]));
        let early = NaiveDate::from_ymd_opt(2024, 3, 4)
            .unwrap()
            .and_hms_opt(1, 30, 0)
            .unwrap();

        service(fake.clone())
            .log_at("night", 600, false, early)
            .await
            .unwrap();

        // 1:30am on the 4th belongs to the 3rd — row 1.
        assert_eq!(fake.writes.lock().unwrap()[0].0, "'Sheet1'!D1");
    }

    #[tokio::test]
    async fn test_missing_date_row_writes_nothing() {
        let fake = Arc::new(FakeSheets::with_column_a(vec!["3/1/2024", "3/2/2024"]));
        let err = service(fake.clone())
            .log_at("morning", 60, false, noon(2024, 3, 4))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::RowNotFound { ref date_key } if date_key == "3/4/2024"));
        assert!(fake.writes.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_checklist_name_fails_fast() {
        let fake = Arc::new(FakeSheets::with_column_a(vec!["3/4/2024"]));
        let err = service(fake.clone())
            .log_at("", 60, false, noon(2024, 3, 4))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::InvalidRequest { .. }));
        assert!(fake.writes.lock().unwrap().is_empty());
    }
}
