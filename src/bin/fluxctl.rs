use clap::{Parser, Subcommand};
use flux_relay::{Config, InferenceClient, TokenPool, TokenRotator};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "fluxctl", about = "CLI for the FLUX relay", version)]
struct Cli {
    /// Override INFERENCE_URL
    #[arg(global = true, long)]
    inference_url: Option<String>,

    /// Override TOKEN_TRACK_PATH
    #[arg(global = true, long)]
    token_track: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate an image from a prompt
    Generate {
        /// Prompt text sent to the model
        #[arg(long, value_name = "TEXT")]
        prompt: String,
        /// Output path (defaults to ./img.png)
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
        /// Rotate to the next token and retry once if the first attempt fails
        #[arg(long)]
        rotate_on_failure: bool,
    },
    /// Rotation-state utilities
    Tokens {
        #[command(subcommand)]
        cmd: TokensCmd,
    },
}

#[derive(Subcommand, Debug)]
enum TokensCmd {
    /// Show the current token index and pool size
    Status,
    /// Advance the persisted index to the next token
    Advance,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    Config::dotenv_load();
    let cfg = Config::new().expect("Failed to load config");
    let cli = Cli::parse();

    let inference_url = cli.inference_url.unwrap_or(cfg.inference_url);
    let track_path = cli.token_track.unwrap_or(cfg.token_track_path);

    let pool = TokenPool::from_env();
    let rotator = TokenRotator::load(pool, track_path).await;

    match cli.command {
        Commands::Generate { prompt, out, rotate_on_failure } => {
            let client = InferenceClient::new(
                inference_url,
                Duration::from_secs(cfg.request_timeout_secs),
            )?;
            let token = rotator
                .current()
                .await
                .ok_or("No token available at the current index; set HF_TOKEN1")?;

            let bytes = match client.generate(&prompt, &token).await {
                Ok(b) => b,
                Err(e) if rotate_on_failure => {
                    eprintln!("Primary token failed ({}), rotating", e);
                    let next = rotator.advance().await?.ok_or("Token pool exhausted")?;
                    client.generate(&prompt, &next).await?
                }
                Err(e) => return Err(e.into()),
            };

            let out = out.unwrap_or_else(|| PathBuf::from("img.png"));
            tokio::fs::write(&out, &bytes).await?;
            println!("Wrote {} bytes to {}", bytes.len(), out.display());
        }
        Commands::Tokens { cmd } => match cmd {
            TokensCmd::Status => {
                println!("current token index: {}", rotator.current_index().await);
                println!("pool size: {}", rotator.pool().len());
                println!("token resolved: {}", rotator.current().await.is_some());
            }
            TokensCmd::Advance => {
                let next = rotator.advance().await?;
                println!("advanced to index {}", rotator.current_index().await);
                println!("token resolved: {}", next.is_some());
            }
        },
    }
    Ok(())
}
