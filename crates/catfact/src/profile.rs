use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::facts::{get_fact, FactSource};

pub const STATUS_SUCCESS: &str = "success";

/// Static identity served with every profile response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    pub name: String,
    pub stack: String,
}

/// Payload returned by the profile endpoint. Built fresh for every request.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub status: &'static str,
    pub user: UserProfile,
    pub timestamp: String,
    pub fact: String,
}

impl ProfileResponse {
    pub fn new(user: UserProfile, fact: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            status: STATUS_SUCCESS,
            user,
            timestamp: format_timestamp(now),
            fact: fact.into(),
        }
    }
}

/// Format an instant as RFC 3339 with microseconds and a `Z` suffix,
/// e.g. `2025-01-01T12:00:00.123456Z`
pub fn format_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Fetch a fact and assemble the response, stamped after the fetch completes.
pub async fn build_profile(user: &UserProfile, source: &dyn FactSource) -> ProfileResponse {
    let fact = get_fact(source).await;
    ProfileResponse::new(user.clone(), fact, Utc::now())
}
