//! Database queries for attendees
use std::collections::HashMap;

use anyhow::{Error, Result};
use rusqlite::{OptionalExtension, Row};
use tokio_rusqlite::Connection;

use super::models::Attendee;

const ATTENDEE_COLUMNS: &str = r"
    email,
    name,
    firm,
    firmandname,
    type,
    title,
    linkedin,
    userprovidedtitle,
    userprovidedlinkedin,
    userprovidedwebsite
";

fn attendee_from_row(i: &Row<'_>) -> rusqlite::Result<Attendee> {
    Ok(Attendee {
        email: i.get(0)?,
        name: i.get(1)?,
        firm: i.get(2)?,
        firmandname: i.get(3)?,
        attendee_type: i.get(4)?,
        title: i.get(5)?,
        linkedin: i.get(6)?,
        userprovidedtitle: i.get(7)?,
        userprovidedlinkedin: i.get(8)?,
        userprovidedwebsite: i.get(9)?,
    })
}

pub async fn find_attendee_by_email(
    db: &Connection,
    email: &str,
) -> Result<Option<Attendee>, Error> {
    let email = email.to_owned();
    let attendee = db
        .call(move |conn| {
            let result = conn
                .query_row(
                    &format!(
                        "SELECT {} FROM attendees WHERE email = ? LIMIT 1",
                        ATTENDEE_COLUMNS
                    ),
                    [email],
                    attendee_from_row,
                )
                .optional()?;
            Ok(result)
        })
        .await?;
    Ok(attendee)
}

/// Directory listing ordered by name. `query` matches name, firm or
/// title case-insensitively and `attendee_type` filters on the type
/// column, also case-insensitively. Attendees without a name sort last.
pub async fn list_attendees(
    db: &Connection,
    query: Option<&str>,
    attendee_type: Option<&str>,
) -> Result<Vec<Attendee>, Error> {
    let query = query
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase);
    let attendee_type = attendee_type
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase);

    let attendees = db
        .call(move |conn| {
            let mut stmt = conn.prepare(&format!(
                r"
                SELECT {}
                FROM attendees
                WHERE (
                    ?1 IS NULL
                    OR instr(lower(coalesce(name, '')), ?1) > 0
                    OR instr(lower(coalesce(firm, '')), ?1) > 0
                    OR instr(lower(coalesce(title, '')), ?1) > 0
                  )
                  AND (?2 IS NULL OR lower(type) = ?2)
                ORDER BY name IS NULL, lower(name), email
                ",
                ATTENDEE_COLUMNS
            ))?;
            let rows = stmt
                .query_map(rusqlite::params![query, attendee_type], attendee_from_row)?
                .collect::<rusqlite::Result<Vec<Attendee>>>()?;
            Ok(rows)
        })
        .await?;
    Ok(attendees)
}

pub async fn insert_attendee(db: &Connection, attendee: Attendee) -> Result<(), Error> {
    db.call(move |conn| {
        conn.execute(
            &format!(
                "INSERT INTO attendees ({}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
                ATTENDEE_COLUMNS
            ),
            rusqlite::params![
                attendee.email,
                attendee.name,
                attendee.firm,
                attendee.firmandname,
                attendee.attendee_type,
                attendee.title,
                attendee.linkedin,
                attendee.userprovidedtitle,
                attendee.userprovidedlinkedin,
                attendee.userprovidedwebsite,
            ],
        )?;
        Ok(())
    })
    .await?;
    Ok(())
}

/// Map of trimmed identity key to lower-cased attendee type.
pub async fn attendee_type_map(db: &Connection) -> Result<HashMap<String, String>, Error> {
    let types = db
        .call(|conn| {
            let mut stmt = conn.prepare(
                "SELECT firmandname, type FROM attendees WHERE firmandname IS NOT NULL",
            )?;
            let rows = stmt
                .query_map([], |i| {
                    let key: String = i.get(0)?;
                    let kind: Option<String> = i.get(1)?;
                    Ok((key, kind))
                })?
                .filter_map(|r| r.ok())
                .filter(|(key, _)| !key.trim().is_empty())
                .map(|(key, kind)| {
                    (
                        key.trim().to_string(),
                        kind.map(|k| k.to_lowercase()).unwrap_or_default(),
                    )
                })
                .collect::<HashMap<String, String>>();
            Ok(rows)
        })
        .await?;
    Ok(types)
}

/// Write the normalized profile fields. `None` leaves a column
/// untouched, `Some(None)` clears it. Returns false when no attendee
/// has the email.
pub async fn update_profile_fields(
    db: &Connection,
    email: &str,
    title: Option<Option<String>>,
    linkedin: Option<Option<String>>,
    website: Option<Option<String>>,
) -> Result<bool, Error> {
    let email = email.to_owned();
    let updated = db
        .call(move |conn| {
            let tx = conn.transaction()?;
            let exists = tx
                .query_row("SELECT 1 FROM attendees WHERE email = ?", [&email], |_| Ok(()))
                .optional()?
                .is_some();
            if exists {
                let columns = [
                    ("userprovidedtitle", title),
                    ("userprovidedlinkedin", linkedin),
                    ("userprovidedwebsite", website),
                ];
                for (column, value) in columns {
                    if let Some(value) = value {
                        tx.execute(
                            &format!("UPDATE attendees SET {} = ? WHERE email = ?", column),
                            rusqlite::params![value, email],
                        )?;
                    }
                }
            }
            tx.commit()?;
            Ok(exists)
        })
        .await?;
    Ok(updated)
}
