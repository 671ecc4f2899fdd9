use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Student profile with declared skills and eligibility data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: Category,
    #[serde(alias = "pastParticipation", alias = "past_participation", default)]
    pub prior_participation: bool,
}

/// Reservation category used for the diversity boost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    None,
    GroupA,
    GroupB,
    GroupC,
}

impl Category {
    /// Parse a stored category label. Unknown labels map to `None`.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "SC" | "groupA" => Category::GroupA,
            "ST" | "groupB" => Category::GroupB,
            "OBC" | "groupC" => Category::GroupC,
            _ => Category::None,
        }
    }

    pub fn label(&self) -> Option<&'static str> {
        match self {
            Category::None => None,
            Category::GroupA => Some("SC"),
            Category::GroupB => Some("ST"),
            Category::GroupC => Some("OBC"),
        }
    }

    /// Whether the category qualifies for the diversity boost
    pub fn is_priority(&self) -> bool {
        !matches!(self, Category::None)
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.label() {
            Some(label) => serializer.serialize_str(label),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label: Option<String> = Option::deserialize(deserializer)?;
        Ok(label.as_deref().map(Category::from_label).unwrap_or_default())
    }
}

/// Internship posting from the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Posting {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub sector: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub capacity: Option<u32>,
}

/// One weighted factor of a match score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub score: f64,
    pub weight: f64,
    pub contribution: f64,
}

impl ScoreComponent {
    pub fn new(score: f64, weight: f64) -> Self {
        Self {
            score,
            weight,
            contribution: score * weight,
        }
    }
}

/// Per-factor decomposition of a total score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub skill_match: ScoreComponent,
    pub location_match: ScoreComponent,
    pub diversity_boost: ScoreComponent,
    pub new_participant_boost: ScoreComponent,
}

impl ScoreBreakdown {
    pub fn components(&self) -> [&ScoreComponent; 4] {
        [
            &self.skill_match,
            &self.location_match,
            &self.diversity_boost,
            &self.new_participant_boost,
        ]
    }

    /// Sum of all weighted contributions
    pub fn total_contribution(&self) -> f64 {
        self.components().iter().map(|c| c.contribution).sum()
    }
}

/// Posting annotated with its score for one profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredPosting {
    #[serde(flatten)]
    pub posting: Posting,
    pub match_score: f64,
    pub score_breakdown: ScoreBreakdown,
    pub match_reason: String,
}

impl ScoredPosting {
    /// Score rendered as a 0-100 percentage for display
    pub fn match_percentage(&self) -> f64 {
        (self.match_score * 100.0).round()
    }
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub skill_match: f64,
    pub location_match: f64,
    pub diversity_boost: f64,
    pub new_participant_boost: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.skill_match + self.location_match + self.diversity_boost + self.new_participant_boost
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill_match: 0.6,
            location_match: 0.2,
            diversity_boost: 0.1,
            new_participant_boost: 0.1,
        }
    }
}
