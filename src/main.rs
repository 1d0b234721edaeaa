use std::sync::Arc;

use tower_http::cors::CorsLayer;

use neuraserve_api::config::Config;
use neuraserve_api::routes;
use neuraserve_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().init();

    let config = Config::from_env();
    if config.api_key.is_none() {
        tracing::warn!(
            "DEEPSEEK_API_KEY is not set; chat requests will get the fallback response"
        );
    }

    let addr = format!("0.0.0.0:{}", config.port);
    let state = Arc::new(AppState::new(config)?);

    // The widget is served from another origin, so preflight requests must
    // pass through unchallenged.
    let cors = CorsLayer::very_permissive();

    let app = routes::create_router().with_state(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "NeuraServe API listening");
    axum::serve(listener, app).await?;

    Ok(())
}
