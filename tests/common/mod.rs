#![allow(dead_code)]

use axum_test::TestServer;
use course_api::auth::ApiKey;
use course_api::config::AppConfig;
use course_api::state::AppState;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

pub const API_KEY: &str = "test-secret";

pub async fn test_pool() -> SqlitePool {
    // One connection: every new in-memory connection is a fresh database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create database");

    sqlx::raw_sql(include_str!("../../schema.sql"))
        .execute(&pool)
        .await
        .expect("Failed to apply schema");

    pool
}

pub fn test_config() -> AppConfig {
    AppConfig::new(ApiKey::new(API_KEY).expect("valid key"))
}

pub fn server_with(pool: SqlitePool, config: &AppConfig) -> TestServer {
    let app = course_api::app(AppState::new(pool), config).expect("Failed to build app");
    TestServer::new(app).expect("Failed to create test server")
}

pub async fn test_server() -> (TestServer, SqlitePool) {
    let pool = test_pool().await;
    let server = server_with(pool.clone(), &test_config());
    (server, pool)
}

pub async fn course_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM courses")
        .fetch_one(pool)
        .await
        .expect("Failed to count courses")
}
