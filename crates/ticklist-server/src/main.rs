//! Ticklist server entry point.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use ticklist_core::{AppConfig, ColumnMap};
use ticklist_server::{AppState, router};
use ticklist_sheets::{HttpSheetsClient, ServiceAccountKey, TimeLogService};
use ticklist_store::ChecklistStore;

#[derive(Debug, Parser)]
#[command(name = "ticklist-server", about = "Personal checklist web app")]
struct Args {
    /// Address to bind.
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to bind.
    #[arg(long, env = "PORT", default_value_t = 5001)]
    port: u16,

    /// Google Sheets spreadsheet ID; time logging is disabled when unset.
    #[arg(long, env = "SPREADSHEET_ID")]
    spreadsheet_id: Option<String>,

    /// Sheet (tab) name within the spreadsheet.
    #[arg(long, env = "SHEET_NAME", default_value = AppConfig::DEFAULT_SHEET_NAME)]
    sheet_name: String,

    /// Path to the Google service-account credentials JSON file.
    #[arg(long, env = "SERVICE_ACCOUNT_FILE")]
    service_account_file: Option<PathBuf>,

    /// Directory holding checklist documents.
    #[arg(long, env = "CHECKLISTS_DIR", default_value = "checklists")]
    checklists_dir: PathBuf,

    /// Directory holding the static UI assets.
    #[arg(long, env = "STATIC_DIR", default_value = "static")]
    static_dir: PathBuf,
}

impl Args {
    fn into_config(self) -> (AppConfig, String, u16, PathBuf) {
        let config = AppConfig {
            spreadsheet_id: self.spreadsheet_id,
            sheet_name: self.sheet_name,
            service_account_file: self.service_account_file,
            checklists_dir: self.checklists_dir,
        };
        (config, self.host, self.port, self.static_dir)
    }
}

/// Build the time-logging service, or `None` when the spreadsheet
/// integration is unconfigured or its credentials are unusable.
/// A broken credential file disables logging rather than failing
/// startup; checklist storage keeps working either way.
fn build_log_service(config: &AppConfig) -> Option<Arc<TimeLogService>> {
    let (Some(spreadsheet_id), Some(key_path)) =
        (&config.spreadsheet_id, &config.service_account_file)
    else {
        tracing::warn!("spreadsheet not configured; time logging disabled");
        return None;
    };

    match ServiceAccountKey::from_file(key_path) {
        Ok(key) => {
            let client = Arc::new(HttpSheetsClient::new(key, spreadsheet_id.clone()));
            Some(Arc::new(TimeLogService::new(
                client,
                ColumnMap::default(),
                config.sheet_name.clone(),
            )))
        }
        Err(e) => {
            tracing::error!(error = %e, "could not load service account; time logging disabled");
            None
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,ticklist=debug".into()),
        )
        .init();

    let (config, host, port, static_dir) = Args::parse().into_config();

    let store = ChecklistStore::new(&config.checklists_dir)?;
    tracing::info!(dir = %store.root().display(), "checklist store ready");

    let state = match build_log_service(&config) {
        Some(log_service) => AppState::with_sheets(store, log_service),
        None => AppState::without_sheets(store),
    };

    let app = router(state, &static_dir);
    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    tracing::info!(%host, port, "ticklist server listening");

    axum::serve(listener, app).await?;
    Ok(())
}
