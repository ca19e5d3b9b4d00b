use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::core::AppConfig;
use crate::core::db::async_db;
use crate::identity::{find_override, list_overrides};
use crate::meetings::find_meetings;
use crate::schedule::{display_slots, occurs_at};

pub async fn run(firmandname: &str, config: &AppConfig) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db = async_db(&config.db_path).await?;

    let overrides = list_overrides(&db).await?;
    println!("Overrides in store: {}", overrides.len());

    match find_override(&db, firmandname).await? {
        Some(target) => println!("Override: {} -> {}", firmandname, target),
        None => println!("No override for {}", firmandname),
    }

    let search = find_meetings(&db, Some(firmandname)).await;
    println!(
        "Searched with {}: {} meetings",
        search.search_key.as_deref().unwrap_or("<none>"),
        search.meetings.len()
    );
    for m in &search.meetings {
        println!(
            "  [{}] {} - {} with {} at table {}",
            m.current_user_is_attendee,
            m.meeting.start_time.to_rfc3339(),
            m.meeting.end_time.to_rfc3339(),
            m.counterpart_key(),
            m.meeting
                .table_number
                .map(|t| t.to_string())
                .unwrap_or_else(|| "-".to_string())
        );
    }

    for date in &config.event_days {
        println!("{}", date.format("%A, %B %-d"));
        for time in display_slots() {
            if let Some(m) = occurs_at(&search.meetings, time, *date) {
                println!("  {:>8}  {}", time.to_string(), m.counterpart_key());
            }
        }
    }

    if let Some(err) = search.error {
        return Err(err.into());
    }
    Ok(())
}
