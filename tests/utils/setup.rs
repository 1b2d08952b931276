use axum::{body::Body, http::Request, response::Response, Router};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

use prismecho::room::generators::UuidRoomIdGenerator;
use prismecho::room::repository::InMemoryRoomRepository;
use prismecho::websockets::serve_connection;
use prismecho::{
    build_router, AiClient, AppState, ConnectionManager, FailurePolicy, InMemoryConnectionManager,
};

use super::mocks::{socket_pair, MockClient};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

#[allow(dead_code)]
pub struct TestSetup {
    pub app_state: AppState,
    pub connection_manager: Arc<InMemoryConnectionManager>,
    pub router: Router,
}

pub struct TestSetupBuilder {
    ai_client: Option<Arc<dyn AiClient>>,
    failure_policy: FailurePolicy,
}

#[allow(dead_code)]
impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            ai_client: None,
            failure_policy: FailurePolicy::Open,
        }
    }

    pub fn with_ai_client(mut self, client: Arc<dyn AiClient>) -> Self {
        self.ai_client = Some(client);
        self
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn build(self) -> TestSetup {
        let connection_manager = Arc::new(InMemoryConnectionManager::new());
        let app_state = AppState::new(
            Arc::new(InMemoryRoomRepository::new()),
            Arc::new(UuidRoomIdGenerator::new()),
            connection_manager.clone(),
            self.ai_client,
            self.failure_policy,
        );
        let router = build_router(
            app_state.clone(),
            &["http://localhost:5173".to_string()],
        );

        TestSetup {
            app_state,
            connection_manager,
            router,
        }
    }
}

#[allow(dead_code)]
impl TestSetup {
    /// Sends one request through a fresh clone of the router
    pub async fn request(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.request(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_json(&self, uri: &str, body: serde_json::Value) -> Response {
        self.request(
            Request::post(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Opens an in-process connection and waits until it is registered
    pub async fn connect(&self, client_id: &str) -> MockClient {
        let expected = self.connection_manager.connection_count().await + 1;
        let (socket, client) = socket_pair();
        let manager: Arc<dyn ConnectionManager> = self.connection_manager.clone();
        tokio::spawn(serve_connection(
            Box::new(socket),
            client_id.to_string(),
            manager,
        ));
        self.wait_for_connection_count(expected).await;
        client
    }

    pub async fn wait_for_connection_count(&self, expected: usize) {
        tokio::time::timeout(Duration::from_secs(2), async {
            while self.connection_manager.connection_count().await != expected {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .expect("connection count never reached the expected value");
    }
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
