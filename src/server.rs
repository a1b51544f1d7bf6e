//! HTTP transport: the chat endpoint plus the static page.

mod assets;
mod chat;

use std::{any::Any, net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    Router,
    response::{IntoResponse, Response},
    routing::post,
};
use log::{error, info};
use tokio::net::TcpListener;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyCors, CorsLayer},
};

use crate::config::Config;
use crate::error::{BotError, Result};
use crate::responder::Responder;

pub use chat::{ChatRequest, ChatResponse};

/// Shared, read-only handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub responder: Arc<Responder>,
    pub reply_delay: Duration,
}

impl AppState {
    #[must_use]
    pub fn new(responder: Responder, reply_delay: Duration) -> Self {
        Self {
            responder: Arc::new(responder),
            reply_delay,
        }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(Responder::new(config.responder), config.reply_delay)
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    with_middleware(
        Router::new()
            .route("/api/chat", post(chat::chat))
            .fallback(assets::serve),
    )
    .with_state(state)
}

fn with_middleware(router: Router<AppState>) -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(AnyCors)
        .allow_methods(AnyCors)
        .allow_headers(AnyCors);

    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| err.downcast_ref::<&str>().map(ToString::to_string))
        .unwrap_or_else(|| "unknown panic".to_string());

    BotError::Internal(detail).into_response()
}

/// Bind the configured address and serve until Ctrl-C.
pub async fn serve(config: &Config) -> Result<()> {
    let addr = SocketAddr::new(config.host, config.port);
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    let state = AppState::from_config(config);
    let options = state.responder.options();
    info!(
        "Replying after {} ms (keyword triggers: {}, strip punctuation: {})",
        state.reply_delay.as_millis(),
        options.keyword_triggers,
        options.strip_punctuation
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    info!("Shutdown signal received, shutting down...");
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
        routing::get,
    };
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::responder::Intent;

    fn test_router() -> Router {
        router(AppState::new(Responder::default(), Duration::ZERO))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, String, Vec<u8>) {
        let res = app.oneshot(request).await.expect("router is infallible");
        let status = res.status();
        let content_type = res
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = res
            .into_body()
            .collect()
            .await
            .expect("body should be readable")
            .to_bytes()
            .to_vec();
        (status, content_type, body)
    }

    fn post_chat(body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .expect("valid request")
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("valid request")
    }

    fn error_of(body: &[u8]) -> String {
        let v: Value = serde_json::from_slice(body).expect("error body is JSON");
        v["error"].as_str().expect("error field").to_string()
    }

    #[tokio::test]
    async fn farewell_message_gets_farewell_reply() {
        let payload = json!({ "message": "bye" }).to_string();
        let (status, _, body) = send(test_router(), post_chat(payload)).await;
        assert_eq!(status, StatusCode::OK);

        let reply: ChatResponse = serde_json::from_slice(&body).expect("chat response");
        let pool = Intent::Farewell.pool().expect("farewell has a pool");
        assert!(pool.contains(&reply.response), "{}", reply.response);
    }

    #[tokio::test]
    async fn non_string_message_is_bad_request() {
        let payload = json!({ "message": 123 }).to_string();
        let (status, _, body) = send(test_router(), post_chat(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error_of(&body), "Message must be a string");
    }

    #[tokio::test]
    async fn missing_or_blank_message_is_bad_request() {
        for payload in [json!({}), json!({ "text": "hi" }), json!({ "message": "   " })] {
            let (status, _, body) = send(test_router(), post_chat(payload.to_string())).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{payload}");
            assert!(!error_of(&body).is_empty());
        }
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request() {
        let (status, _, body) = send(test_router(), post_chat("{\"message\": ")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(error_of(&body).contains("JSON"));

        let request = Request::builder()
            .method("POST")
            .uri("/api/chat")
            .body(Body::from("message=hi"))
            .expect("valid request");
        let (status, _, _) = send(test_router(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn reply_waits_for_configured_delay() {
        let delay = Duration::from_millis(50);
        let app = router(AppState::new(Responder::default(), delay));
        let payload = json!({ "message": "hello" }).to_string();

        let started = Instant::now();
        let (status, _, _) = send(app, post_chat(payload)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(started.elapsed() >= delay);
    }

    #[tokio::test]
    async fn root_serves_chat_page() {
        let (status, content_type, body) = send(test_router(), get_request("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.starts_with("text/html"));
        assert!(String::from_utf8_lossy(&body).contains("script.js"));
    }

    #[tokio::test]
    async fn assets_get_their_own_content_type() {
        let (status, content_type, _) = send(test_router(), get_request("/style.css")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.starts_with("text/css"));

        let (status, content_type, body) = send(test_router(), get_request("/script.js")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.contains("javascript"));
        assert!(String::from_utf8_lossy(&body).contains("/api/chat"));
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_page() {
        let (status, content_type, _) = send(test_router(), get_request("/some/deep/link")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.starts_with("text/html"));
    }

    async fn boom() -> &'static str {
        panic!("responder exploded")
    }

    #[tokio::test]
    async fn panics_become_internal_errors() {
        let app = with_middleware(Router::new().route("/boom", get(boom)))
            .with_state(AppState::new(Responder::default(), Duration::ZERO));

        let (status, content_type, body) = send(app.clone(), get_request("/boom")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(content_type.starts_with("application/json"));
        assert_eq!(error_of(&body), "Internal server error");

        // Still serving after the panic.
        let (status, _, _) = send(app, get_request("/boom")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
