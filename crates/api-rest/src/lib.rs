//! # API REST
//!
//! REST API for the chatbot game service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON decoding, status codes, CORS)
//!
//! Uses `chatbot-game` for the request DTOs and the sink that consumes them.

#![warn(rust_2018_idioms)]

pub mod config;

pub use config::RestConfig;

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chatbot_game::{RiddleDto, RiddleSink};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

/// Path of the generated OpenAPI document.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Application state for the REST API server
///
/// Holds the sink that receives every riddle built from a request body.
#[derive(Clone)]
struct AppState {
    riddle_sink: Arc<dyn RiddleSink>,
}

/// Health check response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, submit_riddle),
    components(schemas(HealthRes, RiddleDto))
)]
pub struct ApiDoc;

/// Build the REST router.
///
/// Every riddle accepted by `POST /game/riddle` is passed to `riddle_sink`.
pub fn router(riddle_sink: Arc<dyn RiddleSink>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/game/riddle", post(submit_riddle))
        .merge(SwaggerUi::new("/swagger-ui").url(OPENAPI_PATH, ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(AppState { riddle_sink })
}

/// Bind the configured address and serve the REST API until the server stops.
///
/// # Errors
/// Returns an error if:
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
pub async fn serve(config: RestConfig, riddle_sink: Arc<dyn RiddleSink>) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    axum::serve(listener, router(riddle_sink)).await?;

    Ok(())
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "Chatbot REST API is alive".into(),
    })
}

#[utoipa::path(
    post,
    path = "/game/riddle",
    request_body = RiddleDto,
    responses(
        (status = 202, description = "Riddle accepted"),
        (status = 400, description = "Request body is not a JSON object"),
        (status = 415, description = "Request body is not sent as application/json")
    )
)]
/// Submit a riddle to the game
///
/// Builds a [`RiddleDto`] from the JSON body and hands it to the riddle sink. Missing fields are
/// passed on as absent; the required list in the published schema is not enforced here.
///
/// # Errors
/// Returns `400 Bad Request` if:
/// - the body is valid JSON but not an object.
#[axum::debug_handler]
async fn submit_riddle(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<StatusCode, (StatusCode, &'static str)> {
    let riddle = match RiddleDto::try_from(&body) {
        Ok(riddle) => riddle,
        Err(e) => {
            tracing::warn!("Rejected riddle body: {}", e);
            return Err((
                StatusCode::BAD_REQUEST,
                "Request body must be a JSON object",
            ));
        }
    };

    state.riddle_sink.accept(riddle);
    Ok(StatusCode::ACCEPTED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_document_lists_riddle_component_and_path() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();

        let riddle = &doc["components"]["schemas"]["RiddleDto"];
        assert_eq!(riddle["type"], "object");
        assert_eq!(riddle["required"].as_array().map(Vec::len), Some(3));
        assert_eq!(
            riddle["properties"]["riddle_description"]["description"],
            "谜语描述"
        );

        let body = &doc["paths"]["/game/riddle"]["post"]["requestBody"];
        assert_eq!(
            body["content"]["application/json"]["schema"]["$ref"],
            "#/components/schemas/RiddleDto"
        );
    }

    #[test]
    fn openapi_document_lists_health() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();

        assert!(doc["paths"]["/health"]["get"].is_object());
        assert!(doc["components"]["schemas"]["HealthRes"].is_object());
    }
}
