//! Request validation. Turns a raw request body into a `Profile`.
//!
//! Nothing here performs I/O. A `Profile` can only be obtained through
//! `Profile::from_body`, so partial profiles never reach the prompt builder.

use serde_json::{Map, Value};

use crate::payload::{parse_payload, text_field, PayloadError};

pub const FIELD_INTERESTS: &str = "interests";
pub const FIELD_SKILLS: &str = "skills";
pub const FIELD_CONTRIBUTION_METHOD: &str = "contributionMethod";
pub const FIELD_LOCATION: &str = "location";

/// A validated user profile. All fields are non-empty and trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    interests: String,
    skills: String,
    contribution_method: String,
    location: String,
}

impl Profile {
    pub fn from_body(body: &[u8]) -> Result<Self, PayloadError> {
        let payload = parse_payload(body)?;
        Self::from_payload(&payload)
    }

    pub fn from_payload(payload: &Map<String, Value>) -> Result<Self, PayloadError> {
        let mut missing = Vec::new();
        let mut take = |key: &'static str| {
            let value = text_field(payload, key);
            if value.is_none() {
                missing.push(key);
            }
            value.unwrap_or_default()
        };

        let interests = take(FIELD_INTERESTS);
        let skills = take(FIELD_SKILLS);
        let contribution_method = take(FIELD_CONTRIBUTION_METHOD);
        let location = take(FIELD_LOCATION);

        if !missing.is_empty() {
            return Err(PayloadError::MissingFields { missing });
        }

        Ok(Profile {
            interests,
            skills,
            contribution_method,
            location,
        })
    }

    pub fn interests(&self) -> &str {
        &self.interests
    }

    pub fn skills(&self) -> &str {
        &self.skills
    }

    pub fn contribution_method(&self) -> &str {
        &self.contribution_method
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}
