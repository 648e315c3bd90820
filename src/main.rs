use std::sync::{Arc, Mutex};

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use techbook::config::AppConfig;
use techbook::db;
use techbook::handlers;
use techbook::services::ai::groq::GroqProvider;
use techbook::services::ai::ollama::OllamaProvider;
use techbook::services::ai::LlmProvider;
use techbook::services::clock::SystemClock;
use techbook::services::notify::EmailLogNotifier;
use techbook::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let conn = db::init_db(&config.database_url)?;

    let llm: Box<dyn LlmProvider> = match config.llm_provider.as_str() {
        "groq" => {
            anyhow::ensure!(
                !config.groq_api_key.is_empty(),
                "GROQ_API_KEY must be set when LLM_PROVIDER=groq"
            );
            tracing::info!("using Groq LLM provider (model: {})", config.groq_model);
            Box::new(GroqProvider::new(
                config.groq_api_key.clone(),
                config.groq_model.clone(),
            ))
        }
        _ => {
            tracing::info!("using Ollama LLM provider (url: {})", config.ollama_url);
            Box::new(OllamaProvider::new(
                config.ollama_url.clone(),
                "llama3.2".to_string(),
            ))
        }
    };

    let notifier = EmailLogNotifier::new(config.contact_email.clone());

    let state = Arc::new(AppState {
        db: Arc::new(Mutex::new(conn)),
        config: config.clone(),
        llm,
        notifier: Box::new(notifier),
        clock: Box::new(SystemClock),
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/slots", get(handlers::bookings::get_slots))
        .route("/api/bookings", post(handlers::bookings::create_booking))
        .route("/api/chat", post(handlers::chat::chat_message))
        .route("/api/contact", post(handlers::contact::submit_contact))
        .route("/api/reviews", get(handlers::reviews::list_reviews))
        .route("/api/reviews", post(handlers::reviews::create_review))
        .route("/api/admin/bookings", get(handlers::admin::get_bookings))
        .route(
            "/api/admin/bookings/:id/status",
            post(handlers::admin::update_booking_status),
        )
        .route(
            "/api/admin/messages",
            get(handlers::admin::get_contact_messages),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
