use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static FIRM_AND_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)\s*\((.+?)\)$").expect("Invalid firmandname regex"));

/// An identity key split into its parts.
///
/// Keys are either `"Firm (Person)"` for people attending on behalf of
/// a firm or just `"Firm"` for companies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirmAndName {
    pub firm: String,
    pub person: Option<String>,
}

impl FirmAndName {
    pub fn parse(key: &str) -> Self {
        let key = key.trim();
        match FIRM_AND_NAME_RE.captures(key) {
            Some(caps) => Self {
                firm: caps[1].trim().to_string(),
                person: Some(caps[2].trim().to_string()),
            },
            None => Self {
                firm: key.to_string(),
                person: None,
            },
        }
    }
}

impl fmt::Display for FirmAndName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.person {
            Some(person) => write!(f, "{} ({})", self.firm, person),
            None => write!(f, "{}", self.firm),
        }
    }
}

/// A row of the `mappingkey` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityOverride {
    pub attendee_firmandname: String,
    pub meetings_firmandname: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_parses_person_at_firm() {
        let parsed = FirmAndName::parse("Acme Corp (Jane Doe)");
        assert_eq!(parsed.firm, "Acme Corp");
        assert_eq!(parsed.person.as_deref(), Some("Jane Doe"));
        assert_eq!(parsed.to_string(), "Acme Corp (Jane Doe)");
    }

    #[test]
    fn it_parses_firm_only() {
        let parsed = FirmAndName::parse("  Beta Corp ");
        assert_eq!(parsed.firm, "Beta Corp");
        assert_eq!(parsed.person, None);
    }

    #[test]
    fn it_trims_around_the_parenthesized_name() {
        let parsed = FirmAndName::parse("Acme(  Jane )");
        assert_eq!(parsed.firm, "Acme");
        assert_eq!(parsed.person.as_deref(), Some("Jane"));
    }
}
