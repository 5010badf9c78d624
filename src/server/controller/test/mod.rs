use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use sea_orm::DatabaseConnection;
use tempfile::TempDir;
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;
use url::Url;

use crate::server::{
    config::Config,
    realtime::ConnectionRegistry,
    service::test::RecordingProducer,
    startup,
    state::AppState,
    storage::AvatarStorage,
    util::session_token::SessionTokenService,
};


const TEST_SECRET: &str = "controller-test-secret";
const MULTIPART_BOUNDARY: &str = "marinetes-test-boundary";

/// Fully assembled application backed by an in-memory database.
struct TestApp {
    app: Router,
    tokens: SessionTokenService,
    producer: Arc<RecordingProducer>,
    upload_dir: TempDir,
    // Keeps the database alive for the duration of the test
    context: TestContext,
}

impl TestApp {
    async fn new() -> Self {
        let context = TestBuilder::new()
            .with_table(entity::prelude::Employee)
            .with_schedule_tables()
            .build()
            .await
            .unwrap();
        let db = context.db.clone().unwrap();
        let upload_dir = tempfile::tempdir().unwrap();

        let config = Config {
            database_url: "sqlite::memory:".to_string(),
            port: 3333,
            public_url: "http://localhost:3333".to_string(),
            upload_dir: upload_dir.path().to_path_buf(),
            object_storage_url: None,
            kafka_rest_url: None,
            session_token_secret: TEST_SECRET.to_string(),
            session_token_ttl_seconds: 3600,
        };

        let tokens = SessionTokenService::new(TEST_SECRET.as_bytes(), 3600);
        let producer = Arc::new(RecordingProducer::default());

        let state = AppState::new(
            db,
            tokens.clone(),
            ConnectionRegistry::new(),
            producer.clone(),
            AvatarStorage::Local {
                upload_dir: config.upload_dir.clone(),
            },
            Url::parse("http://localhost:3333/").unwrap(),
        );

        Self {
            app: startup::build_app(state, &config),
            tokens,
            producer,
            upload_dir,
            context,
        }
    }

    fn db(&self) -> &DatabaseConnection {
        self.context.db.as_ref().unwrap()
    }

    fn bearer(&self, subject: &str, audience: &str) -> String {
        format!("Bearer {}", self.tokens.sign(subject, audience).unwrap())
    }

    async fn send(&self, request: Request<Body>) -> Response {
        self.app.clone().oneshot(request).await.unwrap()
    }
}

fn request(method: Method, uri: &str, authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(authorization) = authorization {
        builder = builder.header(header::AUTHORIZATION, authorization);
    }
    builder.body(Body::empty()).unwrap()
}

fn json_request(
    method: Method,
    uri: &str,
    authorization: &str,
    body: serde_json::Value,
) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, authorization)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn multipart_request(
    uri: &str,
    authorization: &str,
    field: &str,
    filename: &str,
    content_type: &str,
    bytes: &[u8],
) -> Request<Body> {
    let mut body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n",
        b = MULTIPART_BOUNDARY,
    )
    .into_bytes();
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{}--\r\n", MULTIPART_BOUNDARY).as_bytes());

    Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header(header::AUTHORIZATION, authorization)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", MULTIPART_BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
