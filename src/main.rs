use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use splitledger::cli::{
    handle_balances, handle_debts, handle_expense_command, handle_export, handle_group_command,
    handle_participant_command, handle_settle, ExpenseCommands, ExportFormat, GroupCommands,
    ParticipantCommands,
};
use splitledger::config::{paths::LedgerPaths, settings::Settings};
use splitledger::logging;
use splitledger::storage::Storage;

#[derive(Parser)]
#[command(
    name = "splitledger",
    version,
    about = "Shared-expense ledger: split bills, track balances, settle up",
    long_about = "SplitLedger records shared expenses within groups, splits them \
                  equally, by exact amounts, or by percentages, and computes the \
                  short list of transfers that settles everyone up."
)]
struct Cli {
    /// Data directory (defaults to ~/.config/splitledger)
    #[arg(long, global = true, env = "SPLITLEDGER_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,

    /// Participant management commands
    #[command(subcommand)]
    Participant(ParticipantCommands),

    /// Group management commands
    #[command(subcommand)]
    Group(GroupCommands),

    /// Expense commands
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Show net balances for a group
    Balances {
        /// Group name or ID
        group: String,
    },

    /// Show the transfers that settle a group
    Settle {
        /// Group name or ID
        group: String,
    },

    /// Show gross who-owes-whom totals across all groups
    Debts,

    /// Export a group's settlement plan
    Export {
        /// Group name or ID
        group: String,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => LedgerPaths::with_base_dir(dir),
        None => LedgerPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    logging::init(&settings.log_level, cli.log_json);
    let config = settings.ledger_config()?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing SplitLedger at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            storage.save_all()?;
            println!("Initialization complete!");
            println!();
            println!("Next steps:");
            println!("  splitledger participant add alice");
            println!("  splitledger group create trip alice bob");
        }
        Some(Commands::Config) => {
            println!("SplitLedger Configuration");
            println!("=========================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Data directory:    {}", paths.data_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Initialized:       {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol:      {}", config.currency.symbol);
            println!("  Decimal places:       {}", config.currency.decimal_places);
            println!("  Rounding:             {}", config.currency.rounding);
            println!("  Percent epsilon:      {}", config.percent_epsilon);
            println!(
                "  Settlement tolerance: {} minor units",
                config.settlement_tolerance
            );
            println!("  Log level:            {}", settings.log_level);
        }
        Some(Commands::Participant(cmd)) => handle_participant_command(&storage, cmd)?,
        Some(Commands::Group(cmd)) => handle_group_command(&storage, &config, cmd)?,
        Some(Commands::Expense(cmd)) => handle_expense_command(&storage, &config, cmd)?,
        Some(Commands::Balances { group }) => handle_balances(&storage, &config, &group)?,
        Some(Commands::Settle { group }) => handle_settle(&storage, &config, &group)?,
        Some(Commands::Debts) => handle_debts(&storage, &config)?,
        Some(Commands::Export {
            group,
            format,
            output,
        }) => handle_export(&storage, &config, &group, format, output)?,
        None => {
            println!("SplitLedger - shared-expense ledger");
            println!();
            println!("Run 'splitledger --help' for usage information.");
        }
    }

    Ok(())
}
