use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use internship_match::config::Settings;
use internship_match::core::Matcher;
use internship_match::error::handle_json_payload_error;
use internship_match::routes::{self, recommendations::AppState};
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration before logging so the file can pick the log level
    let settings = Settings::load();

    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| {
        settings
            .as_ref()
            .map(|s| s.logging.level.clone())
            .unwrap_or_else(|_| "info".to_string())
    });
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| {
        settings
            .as_ref()
            .map(|s| s.logging.format.clone())
            .unwrap_or_else(|_| "json".to_string())
    });

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }

    info!("Starting internship match service...");

    let settings = settings.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    info!("Configuration loaded successfully");

    let weights = settings.scoring_weights();
    let matcher = Matcher::new(weights).map_err(|e| {
        error!("Invalid scoring weights {:?}: {}", weights, e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    info!("Matcher initialized with weights: {:?}", weights);

    let app_state = AppState {
        matcher,
        matching: settings.matching.clone(),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
