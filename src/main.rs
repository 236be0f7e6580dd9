use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use prorata_cli::cli::{
    handle_budget_command, handle_export_command, handle_total_command, BudgetCommands,
    ExportFormat,
};
use prorata_cli::config::{paths::ProrataPaths, settings::Settings};
use prorata_cli::logging::init_tracing;
use prorata_cli::storage::{initialize_storage, BudgetRepository};

#[derive(Parser)]
#[command(
    name = "prorata",
    version,
    about = "Prorate monthly budgets over arbitrary date ranges",
    long_about = "prorata keeps one budget per calendar month and answers how much \
                  of it falls within any date range, spreading each month's amount \
                  evenly over its days."
)]
struct Cli {
    /// Override the data directory
    #[arg(long, global = true, env = "PRORATA_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Total budgeted amount between two dates (inclusive)
    Total {
        /// First day of the range
        start: String,
        /// Last day of the range
        end: String,
        /// Show each month's share
        #[arg(short, long)]
        breakdown: bool,
    },

    /// Export all budgets to a file
    Export {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = match cli.data_dir {
        Some(dir) => ProrataPaths::with_base_dir(dir),
        None => ProrataPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    let repo = BudgetRepository::new(paths.budgets_file());
    repo.load()?;

    match cli.command {
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&repo, &settings, cmd)?;
        }
        Some(Commands::Total {
            start,
            end,
            breakdown,
        }) => {
            handle_total_command(&repo, &settings, &start, &end, breakdown)?;
        }
        Some(Commands::Export {
            output,
            format,
            pretty,
        }) => {
            handle_export_command(&repo, &output, format, pretty)?;
        }
        Some(Commands::Init) => {
            println!("Initializing prorata at: {}", paths.base_dir().display());
            initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'prorata budget set 200004 300' to add a budget.");
        }
        Some(Commands::Config) => {
            println!("prorata Configuration");
            println!("=====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Budgets file:   {}", paths.budgets_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Initialized:    {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Date format:    {}", settings.date_format);
            println!("  Decimal places: {}", settings.decimal_places);
        }
        None => {
            println!("prorata - prorate monthly budgets over date ranges");
            println!();
            println!("Run 'prorata --help' for usage information.");
        }
    }

    Ok(())
}
