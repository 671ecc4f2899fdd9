use crate::models::{Profile, Posting, ScoreBreakdown};
use crate::core::{normalizer::SkillNormalizer, skills::matched_required};

const STRONG_SKILL_THRESHOLD: f64 = 0.7;
const GOOD_SKILL_THRESHOLD: f64 = 0.4;
const FALLBACK_REASON: &str = "General profile compatibility with internship requirements.";

/// Representative skill keywords per sector
pub const DEFAULT_SECTOR_KEYWORDS: &[(&str, &[&str])] = &[
    ("Technology", &["javascript", "python", "react", "node", "sql", "programming"]),
    ("Healthcare", &["data analysis", "research", "biology"]),
    ("Finance", &["data analysis", "sql", "python", "excel"]),
    ("Education", &["content writing", "communication"]),
    ("Marketing", &["digital marketing", "content writing", "graphic design"]),
];

/// Immutable sector to keyword lookup
#[derive(Debug, Clone)]
pub struct SectorKeywords {
    sectors: Vec<(String, Vec<String>)>,
}

impl SectorKeywords {
    pub fn new(table: &[(&str, &[&str])]) -> Self {
        Self {
            sectors: table
                .iter()
                .map(|(sector, keywords)| {
                    (
                        sector.to_string(),
                        keywords.iter().map(|k| k.to_lowercase()).collect(),
                    )
                })
                .collect(),
        }
    }

    pub fn keywords(&self, sector: &str) -> &[String] {
        self.sectors
            .iter()
            .find(|(name, _)| name == sector)
            .map(|(_, keywords)| keywords.as_slice())
            .unwrap_or(&[])
    }

    /// Whether any skill contains one of the sector's keywords
    pub fn has_experience(&self, sector: &str, skills: &[String]) -> bool {
        let keywords = self.keywords(sector);
        skills.iter().any(|skill| {
            let skill = skill.to_lowercase();
            keywords.iter().any(|keyword| skill.contains(keyword.as_str()))
        })
    }
}

impl Default for SectorKeywords {
    fn default() -> Self {
        Self::new(DEFAULT_SECTOR_KEYWORDS)
    }
}

/// Build a human-readable explanation for a score breakdown
///
/// Clauses are emitted in a fixed order: skills, location, diversity,
/// new participant, sector.
pub fn generate_match_reason(
    profile: &Profile,
    posting: &Posting,
    breakdown: &ScoreBreakdown,
    normalizer: &SkillNormalizer,
    sectors: &SectorKeywords,
) -> String {
    let mut reasons: Vec<String> = Vec::new();

    let skill_score = breakdown.skill_match.score;
    if skill_score > STRONG_SKILL_THRESHOLD {
        let matched = matched_required(normalizer, &profile.skills, &posting.required_skills);
        if !matched.is_empty() {
            let named = matched.iter().take(2).copied().collect::<Vec<_>>().join(" and ");
            reasons.push(format!("Strong skill match in {}", named));
        }
    } else if skill_score > GOOD_SKILL_THRESHOLD {
        reasons.push("Good skill alignment with requirements".to_string());
    } else if skill_score > 0.0 {
        reasons.push("Some relevant skills match".to_string());
    }

    if breakdown.location_match.score > 0.0 {
        reasons.push(format!("Perfect location match in {}", profile.location));
    }

    if breakdown.diversity_boost.score > 0.0 {
        reasons.push("Diversity and inclusion priority".to_string());
    }

    if breakdown.new_participant_boost.score > 0.0 {
        reasons.push("New participant opportunity".to_string());
    }

    if sectors.has_experience(&posting.sector, &profile.skills) {
        reasons.push(format!("{} sector experience", posting.sector));
    }

    if reasons.is_empty() {
        FALLBACK_REASON.to_string()
    } else {
        format!("{}.", reasons.join(", "))
    }
}
