//! Database queries for identity overrides
use anyhow::{Error, Result};
use rusqlite::OptionalExtension;
use tokio_rusqlite::Connection;

use super::models::IdentityOverride;

/// Look up the meetings-side key for `attendee_firmandname`.
///
/// Returns `Ok(None)` when there is no override row. When more than one
/// row exists for the key, the earliest inserted row wins.
pub async fn find_override(
    db: &Connection,
    attendee_firmandname: &str,
) -> Result<Option<String>, Error> {
    let key = attendee_firmandname.to_owned();
    let target = db
        .call(move |conn| {
            let result = conn
                .query_row(
                    r"
                    SELECT meetings_firmandname
                    FROM mappingkey
                    WHERE attendee_firmandname = ?
                    ORDER BY id
                    LIMIT 1
                    ",
                    [key],
                    |row| row.get::<_, Option<String>>(0),
                )
                .optional()?;
            Ok(result.flatten())
        })
        .await?;
    Ok(target)
}

pub async fn list_overrides(db: &Connection) -> Result<Vec<IdentityOverride>, Error> {
    let overrides = db
        .call(|conn| {
            let mut stmt = conn.prepare(
                "SELECT attendee_firmandname, meetings_firmandname FROM mappingkey ORDER BY id",
            )?;
            let rows = stmt
                .query_map([], |i| {
                    Ok(IdentityOverride {
                        attendee_firmandname: i.get(0)?,
                        meetings_firmandname: i.get(1)?,
                    })
                })?
                .filter_map(|r| r.ok())
                .collect::<Vec<IdentityOverride>>();
            Ok(rows)
        })
        .await?;
    Ok(overrides)
}
