//! Hunt chat client binary.
//!
//! Composition root: reads configuration, sets up logging, builds the runtime
//! and runs a line-oriented chat loop over stdin.
//!
//! ```bash
//! HUNT_PLAYER_NAME=Olena HUNT_SEED=7 cargo run -p hunt-client
//! ```

use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use hunt_client::{ChatSession, ClientConfig, Reply, build_runtime};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env();
    tracing::info!(
        player = %config.player_id,
        data_dir = %config.data_dir.display(),
        seeded = config.seed.is_some(),
        "Starting hunt client"
    );

    let runtime = Arc::new(build_runtime(&config)?);
    let record = runtime
        .register_player(config.player_id, &config.player_name)
        .await?;
    println!("Welcome, {}! Type /help for commands.", record.name);

    let chat = ChatSession::new(runtime, config.player_id);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match chat.handle_line(&line).await {
            Reply::Text(text) => println!("{text}\n"),
            Reply::Quit => break,
        }
    }

    tracing::info!("Client shutdown complete");
    Ok(())
}
