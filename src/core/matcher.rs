use crate::models::{Profile, Posting, ScoredPosting, ScoringWeights};
use crate::core::{
    normalizer::SkillNormalizer,
    reason::{generate_match_reason, SectorKeywords},
    scoring::{calculate_match_score, WeightsError},
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of a ranking call
#[derive(Debug)]
pub struct RankedList {
    pub recommendations: Vec<ScoredPosting>,
    pub total_candidates: usize,
}

/// Ranking orchestrator - scores every posting and orders the catalog
///
/// # Pipeline Stages
/// 1. Multi-factor scoring per posting
/// 2. Match reason generation
/// 3. Stable descending sort by score
/// 4. Truncation to the requested limit
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    normalizer: SkillNormalizer,
    sectors: SectorKeywords,
}

impl Matcher {
    /// Build a matcher, rejecting weight sets that could push scores out of [0, 1]
    pub fn new(weights: ScoringWeights) -> Result<Self, WeightsError> {
        weights.validate()?;
        Ok(Self::from_checked(weights))
    }

    pub fn with_default_weights() -> Self {
        Self::from_checked(ScoringWeights::default())
    }

    fn from_checked(weights: ScoringWeights) -> Self {
        Self {
            weights,
            normalizer: SkillNormalizer::default(),
            sectors: SectorKeywords::default(),
        }
    }

    /// Replace the skill normalizer (synonym table)
    pub fn with_normalizer(mut self, normalizer: SkillNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Replace the sector keyword table
    pub fn with_sector_keywords(mut self, sectors: SectorKeywords) -> Self {
        self.sectors = sectors;
        self
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score a single posting for a profile
    pub fn score_posting(&self, profile: &Profile, posting: &Posting) -> ScoredPosting {
        let score = calculate_match_score(profile, posting, &self.weights, &self.normalizer);
        let match_reason = generate_match_reason(
            profile,
            posting,
            &score.breakdown,
            &self.normalizer,
            &self.sectors,
        );

        ScoredPosting {
            posting: posting.clone(),
            match_score: score.total,
            score_breakdown: score.breakdown,
            match_reason,
        }
    }

    /// Rank postings for a profile
    ///
    /// # Arguments
    /// * `profile` - The student profile
    /// * `postings` - The catalog, in the order supplied by the caller
    /// * `limit` - Maximum number of recommendations; zero or negative yields none
    ///
    /// # Returns
    /// RankedList ordered by descending score. Postings with equal scores keep
    /// their catalog order.
    pub fn rank(&self, profile: &Profile, postings: &[Posting], limit: i64) -> RankedList {
        let total_candidates = postings.len();

        if limit <= 0 || postings.is_empty() {
            return RankedList {
                recommendations: Vec::new(),
                total_candidates,
            };
        }

        #[cfg(feature = "parallel")]
        let iter = postings.par_iter();
        #[cfg(not(feature = "parallel"))]
        let iter = postings.iter();

        let mut scored: Vec<ScoredPosting> = iter
            .map(|posting| self.score_posting(profile, posting))
            .collect();

        // sort_by is stable, so ties keep catalog order
        scored.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));

        scored.truncate(usize::try_from(limit).unwrap_or(usize::MAX));

        tracing::debug!(
            "Ranked {} postings for profile {}, returning {}",
            total_candidates,
            profile.id,
            scored.len()
        );

        RankedList {
            recommendations: scored,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
