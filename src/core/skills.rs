use std::collections::HashSet;
use crate::core::normalizer::SkillNormalizer;

const EXACT_MATCH_WEIGHT: f64 = 1.0;
const PARTIAL_MATCH_WEIGHT: f64 = 0.5;

/// Outcome of comparing a profile's skills with a posting's requirements
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillMatch {
    pub exact: usize,
    pub partial: usize,
    pub required: usize,
    /// Weighted score in [0, 1]
    pub score: f64,
}

impl SkillMatch {
    fn empty(required: usize) -> Self {
        Self { exact: 0, partial: 0, required, score: 0.0 }
    }
}

/// Compare two skill sets
///
/// Required skills whose normalized form appears in the profile count as
/// exact matches. The remaining required skills count half when some profile
/// skill shares a synonym variant with them.
pub fn match_skills(
    normalizer: &SkillNormalizer,
    profile_skills: &[String],
    required_skills: &[String],
) -> SkillMatch {
    if profile_skills.is_empty() || required_skills.is_empty() {
        return SkillMatch::empty(required_skills.len());
    }

    let normalized_profile: HashSet<String> = profile_skills
        .iter()
        .map(|skill| normalizer.normalize(skill))
        .collect();

    let mut exact = 0;
    let mut partial = 0;

    for required in required_skills {
        if normalized_profile.contains(&normalizer.normalize(required)) {
            exact += 1;
        } else if profile_skills
            .iter()
            .any(|skill| normalizer.related(skill, required))
        {
            partial += 1;
        }
    }

    let required = required_skills.len();
    let weighted = exact as f64 * EXACT_MATCH_WEIGHT + partial as f64 * PARTIAL_MATCH_WEIGHT;
    let score = (weighted / (required as f64 * EXACT_MATCH_WEIGHT)).min(1.0);

    SkillMatch { exact, partial, required, score }
}

/// Required skills that overlap with the profile, in posting order
///
/// Overlap means an exact or synonym match, or one name containing the
/// other case-insensitively ("SQL" and "PostgreSQL").
pub fn matched_required<'a>(
    normalizer: &SkillNormalizer,
    profile_skills: &[String],
    required_skills: &'a [String],
) -> Vec<&'a str> {
    required_skills
        .iter()
        .filter(|required| {
            let required_norm = normalizer.normalize(required);
            let required_lower = required.trim().to_lowercase();
            profile_skills.iter().any(|skill| {
                let skill_lower = skill.trim().to_lowercase();
                normalizer.normalize(skill) == required_norm
                    || normalizer.related(skill, required)
                    || (!skill_lower.is_empty()
                        && !required_lower.is_empty()
                        && (skill_lower.contains(&required_lower)
                            || required_lower.contains(&skill_lower)))
            })
        })
        .map(String::as_str)
        .collect()
}
