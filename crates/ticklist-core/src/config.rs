//! Immutable application configuration.
//!
//! Built once at process start and passed explicitly to the components
//! that need it; request handlers never re-read environment state.

use std::path::PathBuf;

/// Process-wide configuration, read-only after startup.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Google Sheets spreadsheet ID. Time logging is disabled when absent.
    pub spreadsheet_id: Option<String>,
    /// Sheet (tab) name within the spreadsheet.
    pub sheet_name: String,
    /// Path to the Google service-account credentials JSON file.
    pub service_account_file: Option<PathBuf>,
    /// Directory holding checklist documents.
    pub checklists_dir: PathBuf,
}

impl AppConfig {
    /// Default sheet tab name.
    pub const DEFAULT_SHEET_NAME: &'static str = "Sheet1";

    /// Returns whether time logging has everything it needs configured.
    pub fn sheets_configured(&self) -> bool {
        self.spreadsheet_id.is_some() && self.service_account_file.is_some()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            spreadsheet_id: None,
            sheet_name: Self::DEFAULT_SHEET_NAME.to_string(),
            service_account_file: None,
            checklists_dir: PathBuf::from("checklists"),
        }
    }
}
