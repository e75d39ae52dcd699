// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use anyhow::{Context, Result};
use billfold_domain::{Catalog, IconStyle, load_bills_from_path, sample_bills};
use billfold_logging::CliLoggingArgs;
use billfold_tui::config::TuiConfig;
use billfold_tui::keymap::Keymap;
use billfold_tui::theme::Theme;
use billfold_tui::view_model::AppModel;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "billfold",
    author,
    version,
    about = "Terminal bill and subscription manager",
    long_about = None
)]
struct Args {
    /// Path to the configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Theme override file (TOML color table)
    #[arg(long)]
    theme: Option<PathBuf>,

    /// Use the high-contrast palette
    #[arg(long)]
    high_contrast: bool,

    /// Disable mouse capture
    #[arg(long)]
    no_mouse: bool,

    /// Draw category icons with plain ASCII glyphs
    #[arg(long)]
    ascii_icons: bool,

    /// Bills file replacing the built-in samples
    #[arg(long)]
    bills: Option<PathBuf>,

    #[command(flatten)]
    logging: CliLoggingArgs,
}

impl Args {
    /// Command line flags win over the configuration file.
    fn merge_into(&self, config: &mut TuiConfig) {
        if self.theme.is_some() {
            config.theme = self.theme.clone();
        }
        if self.high_contrast {
            config.high_contrast = Some(true);
        }
        if self.no_mouse {
            config.mouse_interaction = Some(false);
        }
        if self.ascii_icons {
            config.icon_style = Some(IconStyle::Ascii);
        }
        if self.bills.is_some() {
            config.bills = self.bills.clone();
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    args.logging.clone().init("billfold", true)?;

    let mut config =
        TuiConfig::load_or_default(args.config.as_deref()).context("loading configuration")?;
    args.merge_into(&mut config);

    let mut startup_warnings: Vec<String> = Vec::new();

    // A broken theme file falls back to the built-in palette instead of
    // aborting; the user is told about it in the status bar
    let theme = match Theme::from_tui_config(&config) {
        Ok(theme) => theme,
        Err(err) => {
            warn!(error = %err, "falling back to the built-in theme");
            startup_warnings.push(format!("Theme not loaded: {}", err));
            if config.high_contrast.unwrap_or(false) {
                Theme::high_contrast()
            } else {
                Theme::default()
            }
        }
    };

    let (keymap, keymap_warnings) = Keymap::from_config(config.keymap.as_ref());
    for warning in &keymap_warnings {
        warn!("{}", warning);
    }
    startup_warnings.extend(keymap_warnings);

    let catalog = Catalog::with_defaults();
    let bills = match config.bills.as_ref() {
        Some(path) => load_bills_from_path(path).context("loading bills file")?,
        None => sample_bills(),
    };
    for bill in &bills {
        if !catalog.contains(&bill.category) {
            warn!(bill = %bill.name, category = %bill.category, "bill references an unknown category");
        }
    }

    info!(bills = bills.len(), "starting billfold");

    let mut model = AppModel::new(
        catalog,
        bills,
        theme,
        keymap,
        config.icon_style(),
        config.high_contrast.unwrap_or(false),
    );
    if let Some(message) = startup_warnings.first() {
        model.set_status_message(message.clone());
    }

    let mouse_capture = config.mouse_interaction.unwrap_or(true);
    billfold_tui::run_app(model, mouse_capture)
        .map_err(|e| anyhow::anyhow!("TUI error: {}", e))?;

    Ok(())
}
