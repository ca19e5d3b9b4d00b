use std::collections::HashMap;

use serde::Serialize;

use super::models::ResolvedMeeting;
use crate::identity::FirmAndName;

/// What the schedule shows for a meeting: who the attendee is meeting
/// and where.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeetingDisplay {
    pub person_name: String,
    /// `None` when the counterpart is a company rather than a person at
    /// a firm, in which case the company name is in `person_name`.
    pub company_name: Option<String>,
    pub table_number: Option<i64>,
    pub other_firmandname: String,
    pub other_type: Option<String>,
}

impl MeetingDisplay {
    /// `attendee_types` maps trimmed identity keys to lower-cased
    /// attendee types.
    pub fn from_meeting(
        meeting: &ResolvedMeeting,
        attendee_types: &HashMap<String, String>,
    ) -> Self {
        let other = meeting.counterpart_key().trim().to_string();
        let FirmAndName { firm, person } = FirmAndName::parse(&other);
        let (person_name, company_name) = match person {
            Some(person) => (person, Some(firm)),
            None => (firm, None),
        };

        Self {
            person_name,
            company_name,
            table_number: meeting.meeting.table_number,
            other_type: attendee_types
                .get(&other)
                .filter(|t| !t.is_empty())
                .cloned(),
            other_firmandname: other,
        }
    }
}
