use flux_relay::{Config, InferenceClient, TokenPool, TokenRotator};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load env (if .env present)
    Config::dotenv_load();
    let cfg = Config::new().expect("Failed to load config");

    let pool = TokenPool::from_env();
    let rotator = TokenRotator::load(pool, cfg.token_track_path.clone()).await;
    let token = rotator
        .current()
        .await
        .ok_or("No token at the current index; set HF_TOKEN1")?;

    let client = InferenceClient::new(
        cfg.inference_url.clone(),
        Duration::from_secs(cfg.request_timeout_secs),
    )?;
    println!("Generating via {}", cfg.inference_url);
    let bytes = client
        .generate("an astronaut riding a horse, watercolor", &token)
        .await?;
    tokio::fs::write("img.png", &bytes).await?;
    println!("Wrote {} bytes to img.png", bytes.len());
    Ok(())
}
