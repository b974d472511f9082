use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct TourArgs {
    /// Tour record to lay out, as JSON
    pub tour: PathBuf,

    /// Wait this long before generating
    #[clap(long, default_value_t = 0, env = "TOUR_PDF_DELAY_MS")]
    pub delay_ms: u64,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generates a tour-pdf.toml config file
    Config,
    /// Generates the itinerary and saves it to disk
    Download {
        #[clap(flatten)]
        tour: TourArgs,

        /// Directory to save the PDF into
        #[clap(short, long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Generates the itinerary and opens it for printing
    Print {
        #[clap(flatten)]
        tour: TourArgs,
    },
    /// Generates the itinerary and sends it through the email relay
    Email {
        #[clap(flatten)]
        tour: TourArgs,

        /// Recipient address; prompted for when omitted
        #[clap(long)]
        to: Option<String>,
    },
}

#[derive(Parser, Debug)]
#[clap(author, version, about)]
pub struct Cli {
    /// Configuration file
    #[clap(short, long, global = true, default_value = tour_pdf::config::DEFAULT_CONFIG_FILE, env = "TOUR_PDF_CONFIG")]
    pub config: PathBuf,

    #[clap(subcommand)]
    pub command: Commands,
}
