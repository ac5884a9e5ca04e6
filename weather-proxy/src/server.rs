use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};
use weather_core::{WeatherError, WeatherProvider, WeatherResult};

#[derive(Debug, Clone)]
pub struct AppState {
    provider: Arc<dyn WeatherProvider>,
}

/// Failures surfaced to HTTP clients as plain text.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("City is required")]
    MissingCity,

    #[error(transparent)]
    Weather(#[from] WeatherError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingCity => StatusCode::BAD_REQUEST,
            ApiError::Weather(err) => {
                error!(error = %err, "Error fetching weather data");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, self.to_string()).into_response()
    }
}

pub fn router(provider: Arc<dyn WeatherProvider>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/weather", get(weather))
        .with_state(AppState { provider })
        .layer(cors)
}

async fn weather(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<WeatherResult>, ApiError> {
    // First `city` wins; whitespace-only names are passed through untouched.
    let city = params
        .into_iter()
        .find_map(|(key, value)| (key == "city").then_some(value))
        .filter(|c| !c.is_empty())
        .ok_or(ApiError::MissingCity)?;

    let weather = state.provider.get_weather(&city).await?;
    Ok(Json(weather))
}

/// Bind `addr` and serve `app` until Ctrl-C.
pub async fn serve(addr: SocketAddr, app: Router) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Server is running on port {}...", addr.port());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server terminated unexpectedly")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            error!(error = %e, "Unable to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
