//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "study-hub")]
#[command(about = "AI Study Hub Telegram webhook bot", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the webhook HTTP server (config from env; --addr overrides LISTEN_ADDR).
    Serve {
        #[arg(short, long)]
        addr: Option<String>,
    },
    /// Register the webhook URL with Telegram once and exit.
    SetWebhook {
        #[arg(short, long)]
        url: String,
    },
}
