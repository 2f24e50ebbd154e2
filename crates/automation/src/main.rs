//! `packetbase-automation` -- runs one PacketBase automation command.
//!
//! ```text
//! packetbase-automation <command> [args-json | -]
//! ```
//!
//! `args-json` is a flat JSON object (e.g. `{"model_name": "rf"}`); `-`
//! reads it from stdin and omitting it means no arguments. The result
//! envelope is printed to stdout as JSON, logs go to stderr.
//!
//! # Environment variables
//!
//! | Variable  | Required | Description                                  |
//! |-----------|----------|----------------------------------------------|
//! | `API_URL` | yes      | PacketBase API base URL, e.g. `http://gw:8080` |

use std::io::Read;

use packetbase_automation::client::PacketBaseClient;
use packetbase_automation::commands::{self, Args};
use packetbase_automation::config::AutomationConfig;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "packetbase_automation=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut argv = std::env::args().skip(1);

    let Some(command) = argv.next() else {
        tracing::error!("usage: packetbase-automation <command> [args-json | -]");
        std::process::exit(2);
    };

    let args = read_args(argv.next()).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Arguments must be a JSON object");
        std::process::exit(2);
    });

    let config = AutomationConfig::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        std::process::exit(1);
    });

    let client = PacketBaseClient::new(config.api_url);
    tracing::debug!(api_url = %client.api_url(), %command, "Dispatching");

    let results = match commands::dispatch(&client, &command, &args).await {
        Ok(results) => results,
        Err(e) => {
            tracing::error!(%command, error = %e, "Command failed");
            std::process::exit(1);
        }
    };

    match serde_json::to_string(&results) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialise command results");
            std::process::exit(1);
        }
    }
}

fn read_args(raw: Option<String>) -> Result<Args, Box<dyn std::error::Error>> {
    let raw = match raw.as_deref() {
        None => return Ok(Args::new()),
        Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
        Some(inline) => inline.to_string(),
    };

    Ok(serde_json::from_str(&raw)?)
}
