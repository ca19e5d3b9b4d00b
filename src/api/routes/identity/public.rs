//! Public types for the identity API
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct ResolveQuery {
    pub firmandname: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct ResolveResponse {
    pub firmandname: Option<String>,
    /// Key to search meetings with, `None` when there is no identity.
    pub meetings_firmandname: Option<String>,
}
