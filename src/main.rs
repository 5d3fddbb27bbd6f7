//! termfolio - A personal portfolio for the terminal
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;

/// termfolio - A personal portfolio for the terminal
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "A personal portfolio for the terminal", long_about = None)]
struct Args {
    /// Path to the config file (default: ~/.config/termfolio/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Section tab to open on startup (e.g. "projects", "contact")
    #[arg(long, value_name = "ID")]
    section: Option<String>,
}

#[tokio::main]
async fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    // File logging only: stderr belongs to the terminal UI
    folio_core::logging::init()?;

    let settings = folio_app::load_settings(args.config.as_deref());
    folio_tui::run(settings, args.section).await?;

    Ok(())
}
