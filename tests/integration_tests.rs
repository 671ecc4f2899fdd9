// Integration tests for Internship Match

use actix_web::{test, web, App};
use internship_match::config::MatchingSettings;
use internship_match::core::Matcher;
use internship_match::error::handle_json_payload_error;
use internship_match::models::{Category, ErrorResponse, Posting, Profile, RecommendationResponse};
use internship_match::routes::{self, recommendations::AppState};
use serde_json::json;

fn create_posting(id: &str, title: &str, required: &[&str], sector: &str, location: &str) -> Posting {
    Posting {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        required_skills: required.iter().map(|s| s.to_string()).collect(),
        sector: sector.to_string(),
        location: location.to_string(),
        capacity: Some(3),
    }
}

fn sample_catalog() -> Vec<Posting> {
    vec![
        create_posting("1", "Software Developer Intern", &["JavaScript", "React", "Node.js"], "Technology", "Bangalore"),
        create_posting("2", "Data Analyst Intern", &["Python", "Data Analysis", "SQL"], "Technology", "Delhi"),
        create_posting("3", "Digital Marketing Intern", &["Digital Marketing", "Content Writing"], "Marketing", "Mumbai"),
        create_posting("4", "Web Developer Intern", &["HTML/CSS", "JavaScript", "React"], "Technology", "Hyderabad"),
        create_posting("5", "ML Research Intern", &["Python", "Machine Learning", "Data Analysis"], "Technology", "Chennai"),
    ]
}

fn create_profile(skills: &[&str], location: &str) -> Profile {
    Profile {
        id: "current_student".to_string(),
        name: Some("Ravi".to_string()),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        education: None,
        location: location.to_string(),
        category: Category::None,
        prior_participation: false,
    }
}

fn app_state() -> AppState {
    AppState {
        matcher: Matcher::with_default_weights(),
        matching: MatchingSettings { default_limit: 5, max_limit: 3 },
    }
}

#[::std::prelude::v1::test]
fn test_integration_end_to_end_ranking() {
    let matcher = Matcher::with_default_weights();
    let profile = create_profile(&["JavaScript", "React"], "Bangalore");

    let result = matcher.rank(&profile, &sample_catalog(), 5);

    assert_eq!(result.recommendations.len(), 5);
    assert_eq!(result.total_candidates, 5);

    let top = &result.recommendations[0];
    assert_eq!(top.posting.id, "1");
    assert!((top.match_score - 0.70).abs() < 1e-9);
    assert_eq!(top.match_percentage(), 70.0);
    assert_eq!(
        top.match_reason,
        "Good skill alignment with requirements, Perfect location match in Bangalore, \
         New participant opportunity, Technology sector experience."
    );

    for pair in result.recommendations.windows(2) {
        assert!(pair[0].match_score >= pair[1].match_score, "Recommendations not sorted by score");
    }
}

#[::std::prelude::v1::test]
fn test_ranking_is_reproducible() {
    let matcher = Matcher::with_default_weights();
    let profile = create_profile(&["Python", "ML"], "Chennai");
    let catalog = sample_catalog();

    let first: Vec<String> = matcher
        .rank(&profile, &catalog, 5)
        .recommendations
        .into_iter()
        .map(|r| r.posting.id)
        .collect();
    let second: Vec<String> = matcher
        .rank(&profile, &catalog, 5)
        .recommendations
        .into_iter()
        .map(|r| r.posting.id)
        .collect();

    assert_eq!(first, second);
    assert_eq!(first[0], "5");
}

#[::std::prelude::v1::test]
fn test_defensive_empty_profile() {
    let matcher = Matcher::with_default_weights();
    let profile: Profile = serde_json::from_value(json!({ "id": "ghost" })).unwrap();

    let result = matcher.rank(&profile, &sample_catalog(), 10);

    assert_eq!(result.recommendations.len(), 5);
    for r in &result.recommendations {
        assert_eq!(r.score_breakdown.skill_match.score, 0.0);
        assert_eq!(r.score_breakdown.location_match.score, 0.0);
        assert!((r.match_score - 0.1).abs() < 1e-9);
    }
    let ids: Vec<&str> = result.recommendations.iter().map(|r| r.posting.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
}

#[actix_web::test]
async fn test_recommendations_endpoint() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/recommendations")
        .set_json(json!({
            "profile": {
                "id": "s1",
                "skills": ["JS", "React"],
                "location": "Bangalore",
                "category": "SC",
                "pastParticipation": false
            },
            "postings": sample_catalog(),
            "limit": 2
        }))
        .to_request();
    let resp: RecommendationResponse = test::call_and_read_body_json(&app, req).await;

    assert!(resp.success);
    assert_eq!(resp.count, 2);
    assert_eq!(resp.total_candidates, 5);
    assert_eq!(resp.recommendations[0].posting.id, "1");
    assert!((resp.recommendations[0].match_score - 0.8).abs() < 1e-9);
}

#[actix_web::test]
async fn test_recommendations_json_shape() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/recommendations")
        .set_json(json!({
            "profile": { "id": "s1", "skills": ["Python"], "location": "Delhi" },
            "postings": [sample_catalog()[1].clone()]
        }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    let first = &body["recommendations"][0];
    assert_eq!(first["title"], "Data Analyst Intern");
    assert!(first["match_score"].is_number());
    assert!(first["match_reason"].is_string());
    for key in ["skillMatch", "locationMatch", "diversityBoost", "newParticipantBoost"] {
        let component = &first["score_breakdown"][key];
        assert!(component["score"].is_number(), "missing {}", key);
        assert!(component["weight"].is_number(), "missing {}", key);
        assert!(component["contribution"].is_number(), "missing {}", key);
    }
}

#[actix_web::test]
async fn test_limit_is_capped() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/recommendations")
        .set_json(json!({
            "profile": { "id": "s1", "skills": ["Python"], "location": "Delhi" },
            "postings": sample_catalog(),
            "limit": 100
        }))
        .to_request();
    let resp: RecommendationResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp.count, 3);
}

#[actix_web::test]
async fn test_missing_skills_rejected() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/recommendations")
        .set_json(json!({
            "profile": { "id": "s1", "skills": [], "location": "Delhi" },
            "postings": sample_catalog()
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "validation_failed");
}

#[actix_web::test]
async fn test_malformed_json_rejected() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/recommendations")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "invalid_json");
}

#[actix_web::test]
async fn test_health_endpoint() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
}
