//! Shared DTOs for the client/API boundary and the browser store.
//!
//! DESIGN
//! ======
//! `UserProfile` keeps the camelCase keys already written to `localStorage`
//! by earlier builds so existing sessions restore without migration. Unset
//! optional fields are skipped on write, which keeps store round-trips exact.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::value::StrDeserializer;
use serde::{Deserialize, Deserializer, Serialize};

/// The closed set of account categories chosen at signup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[serde(alias = "Tutor")]
    Tutor,
    #[serde(alias = "Tutee")]
    Tutee,
}

impl Role {
    /// Every role, in the order the signup form lists them.
    pub const ALL: [Role; 2] = [Role::Tutor, Role::Tutee];

    /// Wire value sent as `userType`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Tutor => "tutor",
            Role::Tutee => "tutee",
        }
    }

    /// Human label for radio buttons and headings.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Role::Tutor => "Tutor",
            Role::Tutee => "Tutee",
        }
    }

    /// Landing route after onboarding completes.
    #[must_use]
    pub fn landing_route(self) -> &'static str {
        match self {
            Role::Tutor => "/dashboard/tutor",
            Role::Tutee => "/dashboard/tutee",
        }
    }
}

/// The signed-in user's profile as held by the session and persisted in the
/// browser store under the `user` key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    /// Stable identity key.
    #[serde(default)]
    pub email: String,
    /// Set once at signup. An empty stored string means no role yet.
    #[serde(
        rename = "userType",
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subjects: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// True only after the phone verification sub-flow completes.
    #[serde(default)]
    pub is_phone_verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highest_education: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about_me: Option<String>,
    /// Link or file name of an uploaded resume.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume: Option<String>,
}

impl UserProfile {
    /// True when nothing has been stored yet (fresh or logged-out session).
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty() && self.email.is_empty()
    }
}

/// Read `userType`, treating `null` and `""` as unset.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<Role>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.as_deref() {
        None | Some("") => Ok(None),
        Some(raw) => Role::deserialize(StrDeserializer::<D::Error>::new(raw)).map(Some),
    }
}

/// `POST /api/auth/signup` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Lowercase role value.
    pub user_type: String,
}

/// `POST /api/auth/login` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /api/auth/login` success payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub message: String,
}

/// One entry of the tutor directory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorListing {
    /// Unique within a listing set.
    pub id: u32,
    pub name: String,
    pub subjects: Vec<String>,
    pub levels: Vec<String>,
    /// Average review score, 0.0 to 5.0.
    pub rating: f32,
    pub rate_per_hour: u32,
    pub experience: String,
    pub availability: String,
}
