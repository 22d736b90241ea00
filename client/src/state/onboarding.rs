//! Onboarding form and its simulated phone verification sub-flow.
//!
//! DESIGN
//! ======
//! Verification is a gate on submit: the code step never contacts a backend
//! and accepts any non-empty code. Submitting merges the form over the
//! current profile, the same shape the API and the store receive.

#[cfg(test)]
#[path = "onboarding_test.rs"]
mod onboarding_test;

use super::auth::{FlowError, HOME_ROUTE};
use crate::net::api::{ApiClient, ONBOARDING_PATH};
use crate::net::types::{Role, UserProfile};

pub const VERIFICATION_REQUIRED: &str = "Please verify your phone number before proceeding.";

/// Tutor-only fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TutorDetails {
    pub rate: String,
    pub experience: String,
    pub highest_education: String,
    pub resume: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OnboardingForm {
    pub name: String,
    pub school: String,
    pub level: String,
    pub subjects: String,
    pub address: String,
    pub phone_number: String,
    pub is_phone_verified: bool,
    /// Code-entry sub-state is open.
    pub awaiting_code: bool,
    pub tutor: TutorDetails,
}

impl OnboardingForm {
    /// Pre-fill from the signed-up profile.
    #[must_use]
    pub fn for_profile(profile: &UserProfile) -> Self {
        Self { name: profile.name.clone(), ..Self::default() }
    }

    /// Open the code-entry step. No code is actually sent anywhere.
    pub fn begin_verification(&mut self) {
        if !self.is_phone_verified {
            self.awaiting_code = true;
        }
    }

    /// Accept any non-empty code. Returns whether the phone is now verified.
    pub fn submit_verification_code(&mut self, code: &str) -> bool {
        if code.is_empty() {
            return false;
        }
        self.is_phone_verified = true;
        self.awaiting_code = false;
        true
    }

    /// Layer the form over `profile`; form fields win.
    #[must_use]
    pub fn merge_into(&self, profile: &UserProfile) -> UserProfile {
        let mut merged = UserProfile {
            name: self.name.clone(),
            school: Some(self.school.clone()),
            level: Some(self.level.clone()),
            subjects: Some(self.subjects.clone()),
            address: Some(self.address.clone()),
            phone_number: Some(self.phone_number.clone()),
            is_phone_verified: self.is_phone_verified,
            ..profile.clone()
        };
        if profile.role == Some(Role::Tutor) {
            merged.rate = Some(self.tutor.rate.clone());
            merged.experience = Some(self.tutor.experience.clone());
            merged.highest_education = Some(self.tutor.highest_education.clone());
            merged.resume = Some(self.tutor.resume.clone()).filter(|r| !r.is_empty());
        }
        merged
    }
}

/// Landing page for a role once onboarding is done.
#[must_use]
pub fn landing_route(role: Option<Role>) -> &'static str {
    role.map_or(HOME_ROUTE, Role::landing_route)
}

/// Complete the profile. Only `200 OK` counts as success.
///
/// Returns the merged profile the session should adopt.
///
/// # Errors
///
/// Returns [`FlowError::Invalid`] without sending anything when the phone is
/// unverified, otherwise a rejected status or transport failure.
pub async fn submit_onboarding(
    api: &ApiClient,
    profile: &UserProfile,
    form: &OnboardingForm,
) -> Result<UserProfile, FlowError> {
    if !form.is_phone_verified {
        return Err(FlowError::Invalid(VERIFICATION_REQUIRED));
    }
    let merged = form.merge_into(profile);

    let resp = api.post(ONBOARDING_PATH, &merged).await.inspect_err(|e| {
        leptos::logging::error!("onboarding request failed: {e}");
    })?;
    if resp.status != 200 {
        return Err(FlowError::Rejected { action: "Onboarding", status: resp.status });
    }
    Ok(merged)
}
