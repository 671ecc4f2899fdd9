use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::MatchingSettings;
use crate::core::Matcher;
use crate::error::ServiceError;
use crate::models::{HealthResponse, RecommendationRequest, RecommendationResponse};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub matching: MatchingSettings,
}

impl AppState {
    /// Apply the configured default and cap to a requested limit
    pub fn effective_limit(&self, requested: Option<i64>) -> i64 {
        requested
            .unwrap_or(i64::from(self.matching.default_limit))
            .min(i64::from(self.matching.max_limit))
    }
}

/// Configure all recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/recommendations", web::post().to(recommend));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Recommendations endpoint
///
/// POST /api/v1/recommendations
///
/// Request body:
/// ```json
/// {
///   "profile": { "id": "string", "skills": ["string"], "location": "string", ... },
///   "postings": [{ "id": "string", "title": "string", "required_skills": ["string"], ... }],
///   "limit": 5
/// }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendationRequest>,
) -> Result<HttpResponse, ServiceError> {
    if let Err(errors) = req.validate() {
        tracing::info!(
            "Validation failed for recommendation request: profile={}, errors={:?}",
            req.profile.id,
            errors
        );
        return Err(errors.into());
    }

    let limit = state.effective_limit(req.limit);

    tracing::info!(
        "Ranking {} postings for profile: {}, limit: {}",
        req.postings.len(),
        req.profile.id,
        limit
    );

    let result = state.matcher.rank(&req.profile, &req.postings, limit);

    let response = RecommendationResponse {
        success: true,
        count: result.recommendations.len(),
        recommendations: result.recommendations,
        total_candidates: result.total_candidates,
    };

    tracing::info!(
        "Returning {} recommendations for profile {} (from {} postings)",
        response.count,
        req.profile.id,
        response.total_candidates
    );

    Ok(HttpResponse::Ok().json(response))
}
