//! Interactive survey fill

use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::config::paths::SurveyPaths;
use crate::config::settings::Settings;
use crate::submission::{write_response, OutputFormat};
use crate::tui::run_tui;

/// Arguments for `survey fill`
#[derive(Args, Debug, Clone, Default)]
pub struct FillArgs {
    /// Write the completed response to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Handle `survey fill`
pub fn handle_fill_command(paths: &SurveyPaths, settings: &Settings, args: FillArgs) -> Result<()> {
    let Some(response) = run_tui(paths, settings)? else {
        println!("Survey cancelled.");
        return Ok(());
    };

    let format = args.format.unwrap_or(settings.output_format);
    match &args.output {
        Some(path) => {
            let mut file = File::create(path)?;
            write_response(&response, format, &mut file)?;
            println!("Response written to {}", path.display());
        }
        None => write_response(&response, format, &mut io::stdout())?,
    }
    Ok(())
}
