#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use jsonwebtoken::{encode, EncodingKey, Header};
use sqlx::PgPool;
use tower::ServiceExt;

use formgen_api::auth::jwt::{Claims, JwtConfig};
use formgen_api::cache::ViewCache;
use formgen_api::config::ServerConfig;
use formgen_api::router::build_app_router;
use formgen_api::state::AppState;
use formgen_genai::{GenAiConfig, GenAiError, TextGenerator};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        forms_cache_ttl_secs: 60,
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough".to_string(),
        },
        genai: GenAiConfig {
            api_key: Some("test-key".to_string()),
            model: "test-model".to_string(),
            api_url: "http://127.0.0.1:9".to_string(),
        },
    }
}

/// Provider double returning a fixed reply and counting calls.
pub struct StubGenerator {
    pub configured: bool,
    pub reply: String,
    pub calls: AtomicUsize,
}

impl StubGenerator {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            configured: true,
            reply: reply.to_string(),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn unconfigured() -> Arc<Self> {
        Arc::new(Self {
            configured: false,
            reply: String::new(),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn generate_text(&self, _prompt: &str) -> Result<String, GenAiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.reply.clone())
    }
}

/// Build the full application router around `pool` and `generator`.
///
/// Uses the same [`build_app_router`] as `main.rs`, so tests exercise the
/// production middleware stack.
pub fn build_test_app(pool: PgPool, generator: Arc<StubGenerator>) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        generator,
        view_cache: Arc::new(ViewCache::new(Duration::from_secs(60))),
    };
    build_app_router(state, &config)
}

/// Issue a 15-minute access token for `subject`, signed with the test secret
/// the way the identity provider signs real ones.
pub fn token_for(subject: &str) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: subject.to_string(),
        exp: now + 15 * 60,
        iat: now,
        jti: uuid::Uuid::new_v4().to_string(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(test_config().jwt.secret.as_bytes()),
    )
    .expect("token generation should succeed")
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST an urlencoded body, optionally authenticated.
pub async fn post_form(app: Router, uri: &str, body: &str, token: Option<&str>) -> Response {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    app.oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

/// POST a JSON body, optionally authenticated.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: Option<&str>,
) -> Response {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    app.oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}
