// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Profile, Posting, Category, ScoreComponent, ScoreBreakdown, ScoredPosting, ScoringWeights};
pub use requests::RecommendationRequest;
pub use responses::{RecommendationResponse, HealthResponse, ErrorResponse};
