use thiserror::Error;
use crate::models::{Profile, Posting, ScoreBreakdown, ScoreComponent, ScoringWeights};
use crate::core::{normalizer::SkillNormalizer, skills::match_skills};

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Errors for rejected weight sets
#[derive(Debug, Error, PartialEq)]
pub enum WeightsError {
    #[error("Weight for {0} must be a finite, non-negative number")]
    InvalidWeight(&'static str),

    #[error("Weights must sum to 1.0, got {0}")]
    BadSum(f64),
}

impl ScoringWeights {
    /// Check that every weight is usable and that they sum to 1.0
    pub fn validate(&self) -> Result<(), WeightsError> {
        let named = [
            ("skill_match", self.skill_match),
            ("location_match", self.location_match),
            ("diversity_boost", self.diversity_boost),
            ("new_participant_boost", self.new_participant_boost),
        ];
        for (name, weight) in named {
            if !weight.is_finite() || weight < 0.0 {
                return Err(WeightsError::InvalidWeight(name));
            }
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(WeightsError::BadSum(sum));
        }

        Ok(())
    }
}

/// Total score with its per-factor breakdown
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchScore {
    pub total: f64,
    pub breakdown: ScoreBreakdown,
}

/// Calculate a match score (0-1) for a posting against a profile
///
/// Scoring formula:
/// score = (
///     skill_score * 0.6 +            # Weighted skill overlap
///     location_score * 0.2 +         # Same location token
///     diversity_score * 0.1 +        # Priority category
///     new_participant_score * 0.1    # No prior participation
/// )
pub fn calculate_match_score(
    profile: &Profile,
    posting: &Posting,
    weights: &ScoringWeights,
    normalizer: &SkillNormalizer,
) -> MatchScore {
    let skill_score = match_skills(normalizer, &profile.skills, &posting.required_skills).score;

    // Exact, case-sensitive token equality as stored
    let location_score = if !profile.location.is_empty() && profile.location == posting.location {
        1.0
    } else {
        0.0
    };

    let diversity_score = if profile.category.is_priority() { 1.0 } else { 0.0 };

    let new_participant_score = if profile.prior_participation { 0.0 } else { 1.0 };

    let breakdown = ScoreBreakdown {
        skill_match: ScoreComponent::new(skill_score, weights.skill_match),
        location_match: ScoreComponent::new(location_score, weights.location_match),
        diversity_boost: ScoreComponent::new(diversity_score, weights.diversity_boost),
        new_participant_boost: ScoreComponent::new(
            new_participant_score,
            weights.new_participant_boost,
        ),
    };

    MatchScore {
        total: breakdown.total_contribution().clamp(0.0, 1.0),
        breakdown,
    }
}
