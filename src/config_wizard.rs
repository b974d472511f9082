//! Interactive configuration wizard for creating `tour-pdf.toml`.
//!
//! The wizard collects the operator's contact details, the paper size and
//! logo, and the print and email settings through a series of prompts.

use anyhow::{anyhow, Context, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, FuzzySelect, Input};
use std::path::{Path, PathBuf};
use tour_pdf::config::{Configuration, EmailConfig, PrintConfig};
use tour_pdf::layout::config::{ContactDetails, LayoutConfig};
use tour_pdf::sinks::looks_like_email;

/// Paper sizes offered by the wizard, in millimetres
const PAPER_SIZES: &[(&str, f32, f32)] = &[("A4", 210.0, 297.0), ("US Letter", 215.9, 279.4)];

/// Run the interactive configuration wizard.
///
/// Prompts for the settings and writes them to `path`.
pub fn run(path: &Path) -> Result<()> {
    let theme = ColorfulTheme {
        ..ColorfulTheme::default()
    };
    let defaults = ContactDetails::default();

    let operator: String = Input::with_theme(&theme)
        .with_prompt("Tour operator name")
        .default(defaults.operator)
        .interact()
        .with_context(|| "Failed to obtain operator name")?;
    let email: String = Input::with_theme(&theme)
        .with_prompt("Contact email")
        .default(defaults.email)
        .validate_with(|input: &String| {
            if looks_like_email(input.trim()) {
                Ok(())
            } else {
                Err("That doesn't look like an email address")
            }
        })
        .interact()?;
    let phone: String = Input::with_theme(&theme)
        .with_prompt("Contact phone number")
        .default(defaults.phone)
        .interact()?;
    let website: String = Input::with_theme(&theme)
        .with_prompt("Website")
        .default(defaults.website)
        .interact()?;

    let paper_names: Vec<&str> = PAPER_SIZES.iter().map(|(name, _, _)| *name).collect();
    let paper = FuzzySelect::with_theme(&theme)
        .with_prompt("Paper size")
        .items(&paper_names)
        .default(0)
        .interact()?;
    let (_, page_width_mm, page_height_mm) = PAPER_SIZES[paper];

    let logo: String = Input::with_theme(&theme)
        .with_prompt("Logo image (leave blank for none)")
        .allow_empty(true)
        .interact()?;
    let logo = if logo.trim().is_empty() {
        None
    } else {
        let logo = PathBuf::from(logo.trim());
        if !logo.is_file() {
            return Err(anyhow!("Logo '{}' isn't a file!", logo.display()));
        }
        Some(logo)
    };

    let layout = LayoutConfig {
        contact: ContactDetails {
            operator: operator.trim().to_string(),
            email: email.trim().to_string(),
            phone: phone.trim().to_string(),
            website: website.trim().to_string(),
            ..ContactDetails::default()
        },
        logo,
        ..LayoutConfig::for_page(page_width_mm, page_height_mm)
    };
    layout
        .validate()
        .with_context(|| "The chosen layout can't be used")?;

    let print_default = PrintConfig::default().command.join(" ");
    let print_command: String = Input::with_theme(&theme)
        .with_prompt("Command used to open PDFs for printing")
        .default(print_default)
        .interact()?;
    let print = PrintConfig {
        command: print_command.split_whitespace().map(ToString::to_string).collect(),
    };

    let email = if Confirm::with_theme(&theme)
        .with_prompt("Do you want to send itineraries by email?")
        .default(false)
        .interact()?
    {
        let relay_url: String = Input::with_theme(&theme)
            .with_prompt("Email relay URL")
            .allow_empty(false)
            .interact()?;
        Some(EmailConfig {
            relay_url: relay_url.trim().to_string(),
        })
    } else {
        None
    };

    let config = Configuration {
        layout,
        print,
        email,
    }
    .to_toml()?;

    if path.exists()
        && !Confirm::with_theme(&theme)
            .with_prompt(format!(
                "{} already exists, do you want to override it?",
                path.display()
            ))
            .interact()?
    {
        println!("Configuration:");
        println!("{}", config);
    } else {
        std::fs::write(path, config).with_context(|| "Failed to write configuration file")?;
        println!("{} written!", path.display());
    }

    Ok(())
}
