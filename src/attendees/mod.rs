pub mod db;
pub mod models;
pub use db::*;
pub use models::*;

use std::collections::BTreeMap;

use anyhow::Result;
use tokio_rusqlite::Connection;

use crate::links::{company_url, linkedin_url};

fn normalize_title(raw: &str) -> Option<String> {
    let title = raw.trim();
    (!title.is_empty()).then(|| title.to_string())
}

/// Group attendees under their firm, firms in alphabetical order.
///
/// Firm names are compared trimmed and case-insensitively; the first
/// spelling seen is the one shown. Attendees keep their relative order
/// and those without a firm are left out.
pub fn group_by_firm(attendees: &[Attendee]) -> Vec<FirmGroup> {
    let mut groups: BTreeMap<String, FirmGroup> = BTreeMap::new();
    for attendee in attendees {
        let Some(firm) = attendee
            .firm
            .as_deref()
            .map(str::trim)
            .filter(|f| !f.is_empty())
        else {
            continue;
        };
        groups
            .entry(firm.to_lowercase())
            .or_insert_with(|| FirmGroup {
                firm: firm.to_string(),
                attendee_type: attendee.attendee_type.as_deref().map(str::to_lowercase),
                attendees: Vec::new(),
            })
            .attendees
            .push(attendee.clone());
    }
    groups.into_values().collect()
}

/// Apply a profile edit and return the updated attendee, or `None` if
/// there is no attendee with that email.
pub async fn update_profile(
    db: &Connection,
    email: &str,
    update: ProfileUpdate,
) -> Result<Option<Attendee>> {
    let ProfileUpdate {
        title,
        linkedin,
        website,
    } = update;

    let found = update_profile_fields(
        db,
        email,
        title.as_deref().map(normalize_title),
        linkedin.as_deref().map(linkedin_url),
        website.as_deref().map(company_url),
    )
    .await?;

    if !found {
        tracing::debug!("No attendee found for profile update {}", email);
        return Ok(None);
    }
    find_attendee_by_email(db, email).await
}
