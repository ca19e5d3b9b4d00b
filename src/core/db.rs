use anyhow::Result;
use rusqlite::Connection as SyncConnection;
use tokio_rusqlite::Connection;

const DB_FILE_NAME: &str = "summit.db";

/// Open the async connection to the store located in the `db_path`
/// directory.
pub async fn async_db(db_path: &str) -> Result<Connection> {
    let path = format!("{}/{}", db_path.trim_end_matches('/'), DB_FILE_NAME);
    let db = Connection::open(path).await?;
    Ok(db)
}

/// Open an in-memory store with all tables created. Used for one-off
/// tooling and tests where nothing should touch disk.
pub async fn memory_db() -> Result<Connection> {
    let db = Connection::open_in_memory().await?;
    db.call(|conn| {
        initialize_db(conn)?;
        Ok(())
    })
    .await?;
    Ok(db)
}

/// Create all tables. Safe to run more than once.
///
/// Neither `attendees.firmandname` nor `mappingkey.attendee_firmandname`
/// is unique: identity keys are maintained by hand outside this service
/// and collisions are left for the admins to sort out.
pub fn initialize_db(conn: &SyncConnection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r"
        BEGIN;

        CREATE TABLE IF NOT EXISTS attendees (
            email TEXT PRIMARY KEY,
            name TEXT,
            firm TEXT,
            firmandname TEXT,
            type TEXT,
            title TEXT,
            linkedin TEXT,
            userprovidedtitle TEXT,
            userprovidedlinkedin TEXT,
            userprovidedwebsite TEXT
        );

        CREATE TABLE IF NOT EXISTS mappingkey (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            attendee_firmandname TEXT NOT NULL,
            meetings_firmandname TEXT
        );

        CREATE INDEX IF NOT EXISTS mappingkey_attendee_idx
            ON mappingkey(attendee_firmandname);

        CREATE TABLE IF NOT EXISTS meetings (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            attendee1_firmandname TEXT NOT NULL,
            attendee2_firmandname TEXT NOT NULL,
            table_number INTEGER,
            start_time TEXT NOT NULL,
            end_time TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS meetings_attendee1_idx
            ON meetings(attendee1_firmandname, start_time);
        CREATE INDEX IF NOT EXISTS meetings_attendee2_idx
            ON meetings(attendee2_firmandname, start_time);

        COMMIT;
        ",
    )
}
