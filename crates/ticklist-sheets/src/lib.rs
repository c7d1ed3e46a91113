//! Ticklist Sheets — Google Sheets time-logging integration.
//!
//! Completion times are recorded into a date-keyed spreadsheet: column A
//! holds one `M/D/YYYY` date per row, and each checklist writes its
//! formatted duration into its own column on today's row.
//!
//! # Modules
//!
//! - [`credentials`]: service-account key file parsing
//! - [`auth`]: OAuth2 JWT-bearer token exchange with caching
//! - [`client`]: the narrow [`SheetsClient`] seam and its HTTP implementation
//! - [`rows`]: effective-date, date-key, and row/column resolution
//! - [`logger`]: the time-logging orchestration service

pub mod auth;
pub mod client;
pub mod credentials;
pub mod logger;
pub mod rows;

#[cfg(test)]
mod test_support;

pub use client::{HttpSheetsClient, SheetsClient};
pub use credentials::ServiceAccountKey;
pub use logger::{LogOutcome, TimeLogService};
