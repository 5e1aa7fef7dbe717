//! Developer CLI for exercising a running gist proxy.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "gist-cli")]
#[command(about = "Command-line client for the gist proxy", long_about = None)]
struct Cli {
    /// Base URL of the running proxy.
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read the stored envelope for a resource kind
    Read {
        /// Resource kind (users, posts, tips, resources)
        kind: String,
    },
    /// Overwrite a resource kind with a JSON array of records
    Write {
        /// Resource kind (users, posts, tips, resources)
        kind: String,
        /// File holding the JSON array; stdin when omitted
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let endpoint = format!("{}/api/gist-proxy", cli.url.trim_end_matches('/'));

    let body = match cli.command {
        Commands::Read { kind } => json!({ "gistType": kind, "method": "GET" }),
        Commands::Write { kind, file } => {
            let raw = match file {
                Some(path) => std::fs::read_to_string(path)?,
                None => std::io::read_to_string(std::io::stdin())?,
            };
            let content: Value = serde_json::from_str(&raw)?;
            json!({ "gistType": kind, "method": "PATCH", "content": content })
        }
    };

    let res = client.post(endpoint).json(&body).send().await?;
    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: proxy returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
