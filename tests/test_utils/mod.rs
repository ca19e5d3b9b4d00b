//! Test utilities for integration tests
#![allow(dead_code)]
use std::sync::{Arc, RwLock};

use axum::{Router, body::Body};
use chrono::{DateTime, NaiveDate, Utc};
use tokio_rusqlite::Connection;

use summit::api::AppState;
use summit::api::app;
use summit::attendees::{Attendee, insert_attendee};
use summit::core::AppConfig;
use summit::core::db::memory_db;
use summit::meetings::{Meeting, NewMeeting, insert_meeting};

/// Creates a test application router backed by an in-memory store.
///
/// The connection is returned alongside the router so tests can seed
/// rows before sending requests.
pub async fn test_app() -> (Router, Connection) {
    let db = memory_db().await.expect("Failed to create in-memory db");

    let app_config = AppConfig {
        storage_path: String::from("test_storage_path"),
        db_path: String::from("test_db_path"),
        event_days: vec![
            NaiveDate::from_ymd_opt(2025, 8, 20).unwrap(),
            NaiveDate::from_ymd_opt(2025, 8, 21).unwrap(),
        ],
    };
    let app_state = AppState::new(db.clone(), app_config);
    (app(Arc::new(RwLock::new(app_state))), db)
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not utf8")
}

pub fn ts(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
}

pub async fn seed_meeting(db: &Connection, a1: &str, a2: &str, start: &str, end: &str) -> Meeting {
    insert_meeting(
        db,
        NewMeeting {
            attendee1_firmandname: a1.to_string(),
            attendee2_firmandname: a2.to_string(),
            table_number: Some(3),
            start_time: ts(start),
            end_time: ts(end),
        },
    )
    .await
    .expect("Failed to seed meeting")
}

pub async fn seed_override(db: &Connection, from: &str, to: &str) {
    let (from, to) = (from.to_string(), to.to_string());
    db.call(move |conn| {
        conn.execute(
            "INSERT INTO mappingkey (attendee_firmandname, meetings_firmandname) VALUES (?, ?)",
            [from, to],
        )?;
        Ok(())
    })
    .await
    .expect("Failed to seed override");
}

pub async fn seed_attendee(db: &Connection, email: &str, firmandname: &str, kind: &str) {
    insert_attendee(
        db,
        Attendee {
            email: email.to_string(),
            name: None,
            firm: None,
            firmandname: Some(firmandname.to_string()),
            attendee_type: Some(kind.to_string()),
            title: None,
            linkedin: None,
            userprovidedtitle: None,
            userprovidedlinkedin: None,
            userprovidedwebsite: None,
        },
    )
    .await
    .expect("Failed to seed attendee");
}

pub async fn seed_directory_entry(
    db: &Connection,
    email: &str,
    name: &str,
    firm: &str,
    title: &str,
    kind: &str,
) {
    insert_attendee(
        db,
        Attendee {
            email: email.to_string(),
            name: Some(name.to_string()),
            firm: Some(firm.to_string()),
            firmandname: Some(format!("{} ({})", firm, name)),
            attendee_type: Some(kind.to_string()),
            title: Some(title.to_string()),
            linkedin: None,
            userprovidedtitle: None,
            userprovidedlinkedin: None,
            userprovidedwebsite: None,
        },
    )
    .await
    .expect("Failed to seed attendee");
}

pub async fn drop_table(db: &Connection, table: &'static str) {
    db.call(move |conn| {
        conn.execute_batch(&format!("DROP TABLE {}", table))?;
        Ok(())
    })
    .await
    .expect("Failed to drop table");
}
