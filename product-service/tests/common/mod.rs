use std::sync::Arc;

use auth::Authenticator;
use auth::JwtConfig;
use auth::PasswordHasher;
use auth::TokenVerifier;
use product_service::domain::product::service::ProductService;
use product_service::inbound::http::router::create_router;
use product_service::outbound::repositories::product::SqliteProductRepository;
use serde_json::json;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

pub const TEST_JWT_SECRET: &str = "test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub authenticator: Authenticator,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let pool = memory_pool().await;
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
        let repository = Arc::new(SqliteProductRepository::new(pool));
        let product_service = Arc::new(ProductService::new(repository));

        let router = create_router(product_service, token_verifier);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            authenticator: Authenticator::new(&config).expect("Failed to create authenticator"),
        }
    }

    /// Create a test JWT token for a subject
    pub fn create_test_token(&self) -> String {
        self.authenticator
            .issue_token("testuser")
            .expect("Failed to create test token")
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(&format!("{}{}", self.address, path))
    }

    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .post(&format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .put(&format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(&format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Create a product and return its JSON representation
    pub async fn create_product(
        &self,
        token: &str,
        name: &str,
        price: f64,
        category: Option<&str>,
    ) -> serde_json::Value {
        let response = self
            .post_authenticated("/api/products", token)
            .json(&json!({ "name": name, "price": price, "category": category }))
            .send()
            .await
            .expect("Failed to execute request");
        assert!(response.status().is_success());
        response.json().await.expect("Failed to parse response")
    }
}

/// Auth service running beside the product service, sharing its signing secret.
pub struct AuthApp {
    pub address: String,
}

impl AuthApp {
    pub async fn spawn() -> Self {
        use auth_service::domain::user::service::UserService;
        use auth_service::outbound::repositories::user::SqliteUserRepository;

        let pool = memory_pool().await;
        sqlx::migrate!("../auth-service/migrations")
            .run(&pool)
            .await
            .expect("Failed to run auth migrations");

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();

        let authenticator = Arc::new(
            Authenticator::new(&JwtConfig::new(TEST_JWT_SECRET))
                .expect("Failed to create authenticator")
                .with_password_hasher(PasswordHasher::with_cost(4)),
        );
        let repository = Arc::new(SqliteUserRepository::new(pool));
        let user_service = Arc::new(UserService::new(repository, authenticator));

        let router = auth_service::inbound::http::create_router(user_service);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address: format!("http://127.0.0.1:{}", port),
        }
    }
}

/// Single long-lived connection so the in-memory database survives the test.
async fn memory_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database")
}
