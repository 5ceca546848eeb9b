use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use flux_relay::{api, config, inference, limit, token};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    config::Config::dotenv_load();
    let config = config::Config::new().expect("Failed to load configuration");
    config::Config::print_env_vars();

    // Load the credential pool once; tokens added later require a restart
    let token_pool = token::pool::TokenPool::from_env();
    if token_pool.is_empty() {
        tracing::warn!("No HF_TOKEN<N> variables set; generation requests will fail");
    } else {
        tracing::info!("Loaded {} token(s) into the credential pool", token_pool.len());
    }

    let inference_client = inference::client::InferenceClient::new(
        config.inference_url.clone(),
        Duration::from_secs(config.request_timeout_secs),
    )
    .expect("Failed to build inference client");
    let token_rotator =
        token::rotator::TokenRotator::load(token_pool, config.token_track_path.clone()).await;
    let rate_limiter = limit::RateLimiter::new(
        config.rate_limit_max,
        Duration::from_secs(config.rate_limit_window_secs),
    );

    let state = Arc::new(api::routes::AppState {
        inference_client,
        token_rotator,
        rate_limiter,
    });

    let app = api::routes::create_app(state);

    // Run our application with safe parsing
    let host_str = config.api_host.clone();
    let port_str = config.api_port.clone();
    let ip: std::net::IpAddr = host_str.parse().unwrap_or_else(|_| {
        tracing::warn!("Invalid API_HOST '{}', falling back to 127.0.0.1", host_str);
        std::net::IpAddr::from([127, 0, 0, 1])
    });
    let port: u16 = port_str.parse().unwrap_or_else(|_| {
        tracing::warn!("Invalid API_PORT '{}', falling back to 8190", port_str);
        8190
    });
    let socket_address = SocketAddr::new(ip, port);
    tracing::info!("listening on {}", socket_address);
    axum::Server::bind(&socket_address)
        .serve(app.into_make_service_with_connect_info::<SocketAddr>())
        .await
        .unwrap();
}
