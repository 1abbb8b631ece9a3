use actix_web::{middleware, web, App, HttpResponse, HttpServer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use github_explorer::handlers::configure_github_routes;
use github_explorer::{AppState, Config, GitHubClient};

/// Health check endpoint
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "github-explorer"
    }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "github_explorer=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().expect("Failed to load configuration");

    info!(
        "Starting GitHub explorer on {}:{}",
        config.host, config.port
    );

    let github = GitHubClient::new(&config).expect("Failed to build GitHub client");
    info!("GitHub client initialized for {}", config.github_api_url);

    let app_state = web::Data::new(AppState {
        config: config.clone(),
        github,
    });

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .route("/health", web::get().to(health_check))
            .configure(configure_github_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
