use std::env;

use anyhow::{Result, anyhow};
use chrono::NaiveDate;

/// Days the summit runs, in venue-local calendar dates.
const DEFAULT_EVENT_DAYS: &str = "2025-08-20,2025-08-21";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub storage_path: String,
    pub db_path: String,
    pub event_days: Vec<NaiveDate>,
}

/// Parse a comma separated list of `YYYY-MM-DD` dates.
pub fn parse_event_days(raw: &str) -> Result<Vec<NaiveDate>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map_err(|e| anyhow!("Invalid event day \"{}\": {}", s, e))
        })
        .collect()
}

impl Default for AppConfig {
    fn default() -> Self {
        let storage_path = env::var("SUMMIT_STORAGE_PATH").unwrap_or("./".to_string());
        let db_path = format!("{}/db", storage_path);
        let raw_days =
            env::var("SUMMIT_EVENT_DAYS").unwrap_or_else(|_| DEFAULT_EVENT_DAYS.to_string());
        let event_days = parse_event_days(&raw_days).unwrap_or_else(|err| {
            tracing::warn!("Ignoring SUMMIT_EVENT_DAYS: {}", err);
            parse_event_days(DEFAULT_EVENT_DAYS).unwrap_or_default()
        });

        Self {
            storage_path,
            db_path,
            event_days,
        }
    }
}
