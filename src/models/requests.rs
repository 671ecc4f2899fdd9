use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::models::domain::{Posting, Profile};

/// Request to rank a catalog of postings for one profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendationRequest {
    #[validate(custom(function = "validate_profile"))]
    pub profile: Profile,
    #[serde(default)]
    pub postings: Vec<Posting>,
    #[serde(default)]
    pub limit: Option<i64>,
}

/// Skills and location are required before the engine is invoked
fn validate_profile(profile: &Profile) -> Result<(), ValidationError> {
    if profile.skills.iter().all(|skill| skill.trim().is_empty()) {
        let mut err = ValidationError::new("skills_required");
        err.message = Some("Skills array is required and cannot be empty".into());
        return Err(err);
    }

    if profile.location.trim().is_empty() {
        let mut err = ValidationError::new("location_required");
        err.message = Some("Location is required".into());
        return Err(err);
    }

    Ok(())
}
