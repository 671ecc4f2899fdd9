//! Internship Match - recommendation engine for internship postings
//!
//! This library ranks a catalog of internship postings for a student profile.
//! Each posting gets a weighted multi-factor score (skills, location,
//! diversity, new participant), a per-factor breakdown, and a readable reason.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use core::{Matcher, RankedList, SkillNormalizer, SectorKeywords};
pub use models::{Profile, Posting, Category, ScoreBreakdown, ScoredPosting, ScoringWeights, RecommendationRequest, RecommendationResponse};
