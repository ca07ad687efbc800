use std::path::PathBuf;

use chrono::Utc;
use clap::{Parser, Subcommand};
use meds_client::{pages, ExplainClient};
use meds_core::{
    intake, render, Destination, IntakeForm, ReminderRequest, ServiceConfig, SessionStore,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "meds")]
#[command(about = "Prescription explanation and medicine reminder CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Explain a prescription from typed text or an image
    Explain {
        /// Typed prescription or medicine name
        #[arg(long)]
        text: Option<String>,
        /// Path to a prescription image (PNG or JPEG)
        #[arg(long)]
        image: Option<PathBuf>,
        /// Print the structured response as JSON instead of cards
        #[arg(long)]
        json: bool,
    },
    /// Build a calendar reminder for taking a medicine
    Remind {
        /// Medicine name
        medicine: String,
        /// Time of day (HH:MM, 24-hour clock)
        time: String,
        /// Print the event URL without opening a browser
        #[arg(long)]
        no_open: bool,
    },
    /// Check whether the explanation service is reachable
    Status,
}

/// Main entry point for the meds CLI
///
/// # Environment Variables
/// - `MEDS_SERVICE_URL`: Base URL of the explanation service
///   (default: "http://localhost:5000")
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("meds=info".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = ServiceConfig::from_env_value(std::env::var("MEDS_SERVICE_URL").ok())?;

    match cli.command {
        Some(Commands::Explain { text, image, json }) => {
            let client = ExplainClient::new(config);
            if let Err(e) = run_explain(text, image, json, &client).await {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Remind {
            medicine,
            time,
            no_open,
        }) => match ReminderRequest::parse(&medicine, &time) {
            Ok(request) => {
                let url = request.event_url(Utc::now());
                if !no_open {
                    if let Err(e) = webbrowser::open(&url) {
                        tracing::warn!("could not open a browser: {}", e);
                    }
                }
                println!("{url}");
            }
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
        Some(Commands::Status) => {
            let client = ExplainClient::new(config);
            match client.service_info().await {
                Ok(info) => println!("{}: {}", info.app, info.description),
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }
        None => {
            println!("Use 'meds --help' for commands");
        }
    }

    Ok(())
}

/// Runs the full explain pipeline: intake, staging, page flows, rendering.
///
/// An image passes through the analysis page (its acknowledgement is
/// printed) before the medical-info page; typed text goes straight to
/// medical-info. Any failure surfaces as a single message and nothing
/// is rendered.
async fn run_explain(
    text: Option<String>,
    image: Option<PathBuf>,
    json: bool,
    client: &ExplainClient,
) -> anyhow::Result<()> {
    let mut session = SessionStore::new();
    let form = IntakeForm { text, image };

    let destination = intake::submit(&form, &mut session)?;

    if destination == Destination::Analysis {
        let ack = pages::analysis_page(&session, client).await?;
        println!("{}", ack.message);
        println!();
    }

    let explanation = pages::medical_info_page(&session, client).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&explanation)?);
        return Ok(());
    }

    println!("{}", render::render_cards(&explanation));
    Ok(())
}
