use std::sync::Arc;

use auth::Authenticator;
use auth::JwtConfig;
use auth::TokenVerifier;
use inventory_service::domain::inventory::service::InventoryService;
use inventory_service::inbound::http::router::create_router;
use inventory_service::outbound::repositories::inventory::SqliteInventoryRepository;
use sqlx::sqlite::SqlitePoolOptions;

pub const TEST_JWT_SECRET: &str = "test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub token: String,
}

impl TestApp {
    /// Spawn the application against a fresh in-memory database
    pub async fn spawn() -> Self {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let config = JwtConfig::new(TEST_JWT_SECRET);
        let token_verifier =
            Arc::new(TokenVerifier::from_config(&config).expect("Failed to create verifier"));
        let repository = Arc::new(SqliteInventoryRepository::new(pool));
        let inventory_service = Arc::new(InventoryService::new(repository));

        let router = create_router(inventory_service, token_verifier);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        let token = Authenticator::new(&config)
            .expect("Failed to create authenticator")
            .issue_token("testuser")
            .expect("Failed to create test token");

        Self {
            address,
            api_client: reqwest::Client::new(),
            token,
        }
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client
            .get(&format!("{}{}", self.address, path))
            .bearer_auth(&self.token)
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client
            .post(&format!("{}{}", self.address, path))
            .bearer_auth(&self.token)
    }

    pub fn post_anonymous(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(&format!("{}{}", self.address, path))
    }

    /// POST /api/inventory and return the status and JSON body
    pub async fn add_stock(&self, body: serde_json::Value) -> (u16, serde_json::Value) {
        let response = self
            .post("/api/inventory")
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request");
        let status = response.status().as_u16();
        let body = response.json().await.expect("Failed to parse response");
        (status, body)
    }
}
