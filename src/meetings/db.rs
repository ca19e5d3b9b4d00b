//! Database queries for meetings
use anyhow::{Error, Result, anyhow};
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{OptionalExtension, Row};
use rusqlite::types::Type;
use tokio_rusqlite::Connection;

use super::models::{AttendeeSlot, Meeting, NewMeeting};

/// Fixed-width RFC 3339 so text order in `ORDER BY start_time` is time
/// order and no sub-second precision is lost.
fn to_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

fn parse_timestamp(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let raw: String = row.get(idx)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

const MEETING_COLUMNS: &str = r"
    id,
    attendee1_firmandname,
    attendee2_firmandname,
    table_number,
    start_time,
    end_time
";

fn meeting_from_row(i: &Row<'_>) -> rusqlite::Result<Meeting> {
    Ok(Meeting {
        id: i.get(0)?,
        attendee1_firmandname: i.get(1)?,
        attendee2_firmandname: i.get(2)?,
        table_number: i.get(3)?,
        start_time: parse_timestamp(i, 4)?,
        end_time: parse_timestamp(i, 5)?,
    })
}

/// All meetings where `key` is in the given participant column, earliest
/// first.
pub async fn meetings_for_slot(
    db: &Connection,
    key: &str,
    slot: AttendeeSlot,
) -> Result<Vec<Meeting>, Error> {
    let key = key.to_owned();
    let sql = format!(
        r"
        SELECT {}
        FROM meetings
        WHERE {} = ?
        ORDER BY start_time ASC, id ASC
        ",
        MEETING_COLUMNS,
        slot.column()
    );
    let meetings = db
        .call(move |conn| {
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt
                .query_map([key], meeting_from_row)?
                .collect::<rusqlite::Result<Vec<Meeting>>>()?;
            Ok(rows)
        })
        .await?;
    Ok(meetings)
}

pub async fn find_meeting(db: &Connection, id: i64) -> Result<Option<Meeting>, Error> {
    let meeting = db
        .call(move |conn| {
            let result = conn
                .query_row(
                    &format!("SELECT {} FROM meetings WHERE id = ?", MEETING_COLUMNS),
                    [id],
                    meeting_from_row,
                )
                .optional()?;
            Ok(result)
        })
        .await?;
    Ok(meeting)
}

/// Store a meeting and return the row as it was written.
pub async fn insert_meeting(db: &Connection, meeting: NewMeeting) -> Result<Meeting, Error> {
    let NewMeeting {
        attendee1_firmandname,
        attendee2_firmandname,
        table_number,
        start_time,
        end_time,
    } = meeting;

    let id = db
        .call(move |conn| {
            conn.execute(
                r"
                INSERT INTO meetings (
                  attendee1_firmandname,
                  attendee2_firmandname,
                  table_number,
                  start_time,
                  end_time
                ) VALUES (?, ?, ?, ?, ?)
                ",
                rusqlite::params![
                    attendee1_firmandname,
                    attendee2_firmandname,
                    table_number,
                    to_timestamp(&start_time),
                    to_timestamp(&end_time),
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })
        .await?;

    find_meeting(db, id)
        .await?
        .ok_or_else(|| anyhow!("Meeting {} missing after insert", id))
}
