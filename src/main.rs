use anyhow::Result;
use clap::{Parser, Subcommand};

use survey_form::cli::{handle_check_command, handle_fill_command, CheckArgs, FillArgs};
use survey_form::config::{paths::SurveyPaths, settings::Settings};
use survey_form::logging::{init_tracing, LogTarget};

#[derive(Parser)]
#[command(
    name = "survey",
    version,
    about = "Household expense survey form",
    long_about = "Fill in a household expense survey from the terminal. Expense \
                  amounts follow their checkboxes, a live summary shows income, \
                  expenses, balance and expense ratio, and the form is validated \
                  before the response is written out."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill in the survey interactively
    #[command(alias = "tui")]
    Fill(FillArgs),

    /// Validate survey values without the interactive form
    Check(CheckArgs),

    /// Write the default configuration
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SurveyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Fill(args)) => {
            init_tracing(LogTarget::File(&paths.log_file()), &settings.log_level)?;
            handle_fill_command(&paths, &settings, args)?;
        }
        Some(Commands::Check(args)) => {
            init_tracing(LogTarget::Stderr, &settings.log_level)?;
            handle_check_command(&settings, args)?;
        }
        Some(Commands::Init) => {
            println!("Initializing survey-form at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'survey fill' to fill in the survey.");
        }
        Some(Commands::Config) => {
            println!("Survey Form Configuration");
            println!("=========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency.symbol);
            println!("  Inline messages:  {}", settings.inline_messages);
            println!("  Show tooltips:    {}", settings.show_tooltips);
            println!("  Log level:        {}", settings.log_level);
            println!("  Output format:    {:?}", settings.output_format);
        }
        None => {
            println!("survey - Household expense survey form");
            println!();
            println!("Run 'survey --help' for usage information.");
            println!("Run 'survey fill' to launch the interactive form.");
        }
    }

    Ok(())
}
