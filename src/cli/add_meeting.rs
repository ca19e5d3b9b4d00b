use anyhow::{Result, anyhow};
use chrono::{DateTime, Utc};

use crate::core::db::async_db;
use crate::meetings::{NewMeeting, insert_meeting};

pub async fn run(
    attendee1: String,
    attendee2: String,
    table: Option<i64>,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    db_path: &str,
) -> Result<()> {
    if end <= start {
        return Err(anyhow!("--end must be after --start"));
    }

    let db = async_db(db_path).await?;
    let meeting = insert_meeting(
        &db,
        NewMeeting {
            attendee1_firmandname: attendee1,
            attendee2_firmandname: attendee2,
            table_number: table,
            start_time: start,
            end_time: end,
        },
    )
    .await?;

    println!("{}", serde_json::to_string_pretty(&meeting)?);
    Ok(())
}
