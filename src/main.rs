use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;

use httpe::config::Config;
use httpe::openapi::ApiDoc;
use httpe::{HttpErrors, InternalCause};

#[derive(Debug, Parser)]
#[command(version, about = "Render structured HTTP error responses", long_about = None)]
#[command(after_help = "Environment variables:\n  \
    HTTPE_EXPOSE_INTERNAL    Include the internal cause in rendered bodies\n  \
    HTTPE_LOG_CLIENT_ERRORS  Log 4xx responses in the middleware")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the JSON body a client would receive
    Render {
        /// HTTP status code
        code: u16,
        /// Message in `field: message; ...` form
        message: String,
        /// Server-side cause to attach
        #[arg(long, value_name = "TEXT")]
        internal: Option<String>,
    },
    /// Print the OpenAPI document for the error schema
    Openapi,
}

/// Build the JSON body a client would receive for `code` and `message`
fn render(config: &Config, code: u16, message: String, internal: Option<String>) -> Result<String> {
    let mut err = HttpErrors::new(code, message);

    let response = match internal {
        Some(text) => {
            let cause = InternalCause::from_anyhow(anyhow!(text));
            error!(status = %code, internal = %cause, "Rendering error with internal cause");
            err.with_internal(cause)
        }
        None => err.to_response(),
    };

    let body = if config.expose_internal {
        response
    } else {
        response.without_internal()
    };

    serde_json::to_string_pretty(&body).context("Failed to serialize error response")
}

fn run(config: &Config, command: Command) -> Result<String> {
    match command {
        Command::Render {
            code,
            message,
            internal,
        } => render(config, code, message, internal),
        Command::Openapi => ApiDoc::openapi()
            .to_pretty_json()
            .context("Failed to serialize OpenAPI document"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,httpe=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    info!(expose_internal = config.expose_internal, "Configuration loaded");

    let output = run(&config, cli.command)?;
    println!("{output}");
    Ok(())
}
