use ai_client::{OpenAiClient, OpenAiClientConfig};
use backend_api::run_server;
use std::env;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Environment variables with sane defaults; only the API key is required
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "5000".to_string())
        .parse()
        .unwrap_or(5000);

    let config = OpenAiClientConfig::from_env()?;

    println!("Financial Diagnosis API Server");
    println!("==============================");
    println!("Model: {}", config.model);
    println!("Completion API: {}", config.base_url);
    println!("Listening on: {}:{}", host, port);
    println!();

    // Create the completion client once; handlers share it read-only
    let client = Arc::new(OpenAiClient::new(config)?);

    // Start the server
    run_server(client, &host, port).await?;

    Ok(())
}
