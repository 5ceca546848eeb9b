//! Env-driven configuration for the service and library.
//!
//! Values are read from the process environment; `dotenv` is loaded on demand
//! by the binary. Defaults are provided for convenience during development.
use std::env;
use dotenv;

const DEFAULT_INFERENCE_URL: &str =
    "https://router.huggingface.co/hf-inference/models/black-forest-labs/FLUX.1-dev";

pub struct Config {
    pub inference_url: String,
    pub token_track_path: String,
    pub api_host: String,
    pub api_port: String,
    pub rate_limit_max: u32,
    pub rate_limit_window_secs: u64,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn dotenv_load() {
        dotenv::dotenv().ok();
    }
    pub fn new() -> Result<Self, env::VarError> {
        Ok(Config {
            inference_url: env::var("INFERENCE_URL").unwrap_or_else(|_| DEFAULT_INFERENCE_URL.to_string()),
            token_track_path: env::var("TOKEN_TRACK_PATH").unwrap_or_else(|_| "./token_track.json".to_string()),
            api_host: env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            api_port: env::var("API_PORT").unwrap_or_else(|_| "8190".to_string()),
            rate_limit_max: parse_env_or("RATE_LIMIT_MAX", 2),
            rate_limit_window_secs: parse_env_or("RATE_LIMIT_WINDOW_SECS", 60),
            request_timeout_secs: parse_env_or("REQUEST_TIMEOUT_SECS", 60),
        })
    }
    pub fn print_env_vars() {
        println!("INFERENCE_URL: {}", env::var("INFERENCE_URL").unwrap_or_else(|_| "<unset>".to_string()));
        println!("TOKEN_TRACK_PATH: {}", env::var("TOKEN_TRACK_PATH").unwrap_or_else(|_| "<unset>".to_string()));
        println!("API_HOST: {}", env::var("API_HOST").unwrap_or_else(|_| "<unset>".to_string()));
        println!("API_PORT: {}", env::var("API_PORT").unwrap_or_else(|_| "<unset>".to_string()));
        println!("RATE_LIMIT_MAX: {}", env::var("RATE_LIMIT_MAX").unwrap_or_else(|_| "<unset>".to_string()));
        println!("RATE_LIMIT_WINDOW_SECS: {}", env::var("RATE_LIMIT_WINDOW_SECS").unwrap_or_else(|_| "<unset>".to_string()));
        println!("REQUEST_TIMEOUT_SECS: {}", env::var("REQUEST_TIMEOUT_SECS").unwrap_or_else(|_| "<unset>".to_string()));
    }
}

fn parse_env_or<T: std::str::FromStr + Copy>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid {} '{}', falling back to default", name, raw);
            default
        }),
        Err(_) => default,
    }
}
