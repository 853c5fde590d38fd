//! Connects to the weather server over stdio and calls one tool.
//!
//! ```text
//! weather-client alerts NY
//! weather-client --server target/debug/weather-mcp forecast 40.71 -74.01
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use rmcp::{model::CallToolRequestParam, transport::TokioChildProcess, ServiceExt};
use serde_json::json;
use tokio::process::Command;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "weather-client", about = "Query the weather MCP server")]
struct Cli {
    /// Server executable to spawn
    #[arg(long, default_value = "weather-mcp")]
    server: String,

    #[command(subcommand)]
    command: Query,
}

#[derive(Subcommand)]
enum Query {
    /// Active alerts for a two-letter state code
    Alerts { state: String },
    /// Forecast for a coordinate
    Forecast {
        #[arg(allow_negative_numbers = true)]
        latitude: f64,
        #[arg(allow_negative_numbers = true)]
        longitude: f64,
    },
}

impl Query {
    fn into_request(self) -> CallToolRequestParam {
        let (name, arguments) = match self {
            Query::Alerts { state } => ("get-alerts", json!({ "state": state })),
            Query::Forecast {
                latitude,
                longitude,
            } => (
                "get-forecast",
                json!({ "latitude": latitude, "longitude": longitude }),
            ),
        };
        CallToolRequestParam {
            name: name.into(),
            arguments: arguments.as_object().cloned(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let transport = TokioChildProcess::new(Command::new(&cli.server))?;
    let client = ().serve(transport).await?;
    tracing::info!(server = %cli.server, "Connected to weather server");

    let tools = client.list_all_tools().await?;
    for tool in &tools {
        tracing::info!(
            "Available tool {}: {}",
            tool.name,
            tool.description.as_deref().unwrap_or("")
        );
    }

    let request = cli.command.into_request();
    tracing::info!("Calling {}", request.name);
    let result = client.call_tool(request).await?;

    for content in &result.content {
        if let Some(text) = content.as_text() {
            println!("{}", text.text);
        }
    }

    client.cancel().await?;
    Ok(())
}
