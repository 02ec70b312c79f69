//! Binary entrypoint for the buildscope API server.
use std::time::Duration;

use buildscope_core::BuildCache;
use buildscope_data::KeystoneTable;
use buildscope_decode::BuildPipeline;
use tracing_subscriber::EnvFilter;

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Listen address and cache sizing can be overridden via the environment.
    let addr = std::env::var("BUILDSCOPE_ADDR").unwrap_or_else(|_| "0.0.0.0:8787".to_string());
    let cache_max = env_or("BUILDSCOPE_CACHE_MAX", 100);
    let cache_ttl = Duration::from_secs(env_or("BUILDSCOPE_CACHE_TTL_SECS", 3600));

    let pipeline = BuildPipeline::new(
        BuildCache::new(cache_max, cache_ttl),
        KeystoneTable::shared(),
    );
    let app = buildscope_api::create_app(pipeline);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind");

    tracing::info!("buildscope API listening on {}", addr);
    axum::serve(listener, app).await.expect("Server error");
}
