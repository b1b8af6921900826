//! Flowcheck CLI - pipeline topology analysis service

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::fs;

use flowcheck::error::{FixSuggestion, FlowcheckError};
use flowcheck::pipeline::Pipeline;
use flowcheck::server;
use flowcheck::ServerConfig;

#[derive(Parser)]
#[command(name = "flowcheck")]
#[command(about = "Flowcheck - pipeline topology analysis service")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Listen address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Listen port
        #[arg(short, long, default_value_t = 8000)]
        port: u16,

        /// Allowed CORS origin (repeatable; defaults to any origin)
        #[arg(long = "allow-origin")]
        allow_origin: Vec<String>,
    },

    /// Analyze a pipeline JSON file
    Check {
        /// Path to a pipeline description ({"nodes": [...], "edges": [...]})
        file: String,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file (ignore if not present)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve {
            host,
            port,
            allow_origin,
        } => serve(host, port, allow_origin).await,
        Commands::Check { file } => check_pipeline(&file),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        if let Some(suggestion) = e.fix_suggestion() {
            eprintln!("  {} {}", "Fix:".yellow(), suggestion);
        }
        std::process::exit(1);
    }
}

async fn serve(host: String, port: u16, allow_origin: Vec<String>) -> Result<(), FlowcheckError> {
    let mut config = ServerConfig {
        host,
        port,
        ..ServerConfig::default()
    };
    if !allow_origin.is_empty() {
        config.allowed_origins = allow_origin;
    }

    server::serve(config).await
}

fn check_pipeline(file: &str) -> Result<(), FlowcheckError> {
    let json = fs::read_to_string(file)?;
    let pipeline: Pipeline = serde_json::from_str(&json)?;

    let stats = flowcheck::analyze(&pipeline);

    println!("{} Pipeline '{}'", "→".cyan(), file.cyan().bold());
    println!("  Nodes: {}", stats.num_nodes);
    println!("  Edges: {}", stats.num_edges);

    if !stats.is_dag {
        return Err(FlowcheckError::CyclicPipeline {
            file: file.to_string(),
        });
    }

    println!("{} No cycles detected", "✓".green());
    Ok(())
}
