//! Shared request-handler state.

use std::sync::Arc;

use ticklist_sheets::TimeLogService;
use ticklist_store::ChecklistStore;

/// State shared by all request handlers.
///
/// Built once in `main`; nothing in here is mutable after startup.
/// The log service is absent when the spreadsheet integration is
/// unconfigured, and `/api/log-time` then fails before any network
/// call.
#[derive(Clone)]
pub struct AppState {
    /// Confined checklist document store.
    pub store: ChecklistStore,
    /// Spreadsheet time logging, when configured.
    pub log_service: Option<Arc<TimeLogService>>,
}

impl AppState {
    /// Create state with time logging disabled.
    pub fn without_sheets(store: ChecklistStore) -> Self {
        Self {
            store,
            log_service: None,
        }
    }

    /// Create state with the given time-logging service.
    pub fn with_sheets(store: ChecklistStore, log_service: Arc<TimeLogService>) -> Self {
        Self {
            store,
            log_service: Some(log_service),
        }
    }
}
