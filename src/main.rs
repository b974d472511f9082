use anyhow::{Context, Result};
use cli::{Cli, Commands, TourArgs};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tour_pdf::config::Configuration;
use tour_pdf::generate::generate_deferred;
use tour_pdf::notify::{Level, Notification};
use tour_pdf::sinks::{HttpRelay, Sink, SystemPrintHost};
use tour_pdf::tour::TourDocument;

mod cli;
mod config_wizard;

fn main() -> ExitCode {
    match try_main() {
        Err(e) => {
            eprintln!("{}: {e:#}", console::style("Error").red());
            ExitCode::FAILURE
        }
        Ok(Some(notification)) => {
            report(&notification);
            if notification.level == Level::Success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Ok(None) => ExitCode::SUCCESS,
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn report(notification: &Notification) {
    let title = match notification.level {
        Level::Success => console::style(&notification.title).green(),
        Level::Warning => console::style(&notification.title).yellow(),
        Level::Error => console::style(&notification.title).red(),
    };
    if notification.level == Level::Success {
        println!("{}: {}", title.bold(), notification.message);
    } else {
        eprintln!("{}: {}", title.bold(), notification.message);
    }
}

fn try_main() -> Result<Option<Notification>> {
    use clap::Parser;
    let cli = Cli::parse();
    init_logging();

    let (tour, sink) = match cli.command {
        Commands::Config => {
            config_wizard::run(&cli.config)?;
            return Ok(None);
        }
        Commands::Download { tour, out_dir } => (tour, Sink::Download { dir: out_dir }),
        Commands::Print { tour } => (tour, Sink::Print),
        Commands::Email { tour, to } => {
            let recipient = match to {
                Some(to) => to,
                None => Input::with_theme(&ColorfulTheme::default())
                    .with_prompt("Recipient email")
                    .interact_text()
                    .with_context(|| "Failed to obtain recipient")?,
            };
            (tour, Sink::Email { recipient })
        }
    };

    deliver(&cli.config, tour, sink).map(Some)
}

/// Generate the itinerary and hand it to `sink`
fn deliver(config_path: &Path, args: TourArgs, sink: Sink) -> Result<Notification> {
    let config = Configuration::load(config_path)?;
    let tour = TourDocument::load(&args.tour)?;
    let Configuration {
        layout,
        print,
        email,
    } = config;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .with_context(|| "Failed to start async runtime")?;

    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .with_context(|| "Failed to parse progress style")?,
    );
    progress.enable_steady_tick(Duration::from_millis(100));
    progress.set_message(format!("Generating {}...", tour.filename()));

    let delay = Duration::from_millis(args.delay_ms);
    let tour_name = tour.name.trim().to_string();
    let artifact = match runtime.block_on(generate_deferred(tour, Arc::new(layout), delay)) {
        Ok(artifact) => artifact,
        Err(e) => {
            progress.finish_and_clear();
            return Ok(Notification::from(&e));
        }
    };
    progress.finish_and_clear();

    for warning in artifact.warnings.iter() {
        eprintln!("{}: {warning}", console::style("Warning").yellow());
    }
    println!(
        "Generated {} ({} pages)",
        console::style(&artifact.filename).bold(),
        artifact.page_count
    );

    let host = SystemPrintHost::new(print.command);
    let relay = email.map(|e| HttpRelay::new(e.relay_url));
    let outcome = runtime.block_on(sink.deliver(&artifact, &tour_name, &host, relay.as_ref()));
    Ok(outcome.unwrap_or_else(|e| Notification::from(&e)))
}
