use serde::{Deserialize, Serialize};

/// A row of the `attendees` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendee {
    pub email: String,
    pub name: Option<String>,
    pub firm: Option<String>,
    pub firmandname: Option<String>,
    #[serde(rename = "type")]
    pub attendee_type: Option<String>,
    pub title: Option<String>,
    pub linkedin: Option<String>,
    pub userprovidedtitle: Option<String>,
    pub userprovidedlinkedin: Option<String>,
    pub userprovidedwebsite: Option<String>,
}

/// Profile fields an attendee is allowed to change. Absent fields are
/// left as they are, blank ones are cleared.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdate {
    pub title: Option<String>,
    pub linkedin: Option<String>,
    pub website: Option<String>,
}

/// Attendees sharing a firm, as listed in the directory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FirmGroup {
    pub firm: String,
    #[serde(rename = "type")]
    pub attendee_type: Option<String>,
    pub attendees: Vec<Attendee>,
}
