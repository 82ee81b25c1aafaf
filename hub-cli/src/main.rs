//! study-hub CLI: run the webhook server, or register the webhook once. Config from env (.env supported).

use anyhow::Result;
use clap::Parser;
use hub_cli::{build_components, serve, Cli, Commands, HubConfig, ServerConfig};
use hub_core::init_tracing;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let server = ServerConfig::from_env();
    init_tracing(server.log_file.as_deref())?;

    match cli.command {
        Commands::Serve { addr } => {
            let addr = addr.unwrap_or_else(|| server.listen_addr.clone());
            serve(server, &addr).await
        }
        Commands::SetWebhook { url } => {
            let config = HubConfig::from_env()?;
            let components = build_components(&config);
            components.bot.set_webhook(&url).await?;
            info!(url = %url, "Webhook set");
            println!("Webhook set: {}", url);
            Ok(())
        }
    }
}
