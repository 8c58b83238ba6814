use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use spendwise::audit::AuditLogger;
use spendwise::cli::{
    handle_expense_command, handle_goal_command, handle_history, handle_summary,
    ExpenseCommands, GoalCommands,
};
use spendwise::config::{SpendPaths, Settings};
use spendwise::notify::{Notification, Notifier, TerminalNotifier};
use spendwise::services::ExpenseLedger;
use spendwise::storage::FileStore;
use spendwise::SpendError;

#[derive(Parser)]
#[command(
    name = "spendwise",
    version,
    about = "Track everyday expenses and savings goals",
    long_about = "SpendWise records expenses by category, totals your spending \
                  and tracks progress toward savings goals from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Show total spending, the category breakdown and goal progress
    Summary,

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut notifier = TerminalNotifier::new();

    match run(cli, &mut notifier) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let message = match err.downcast_ref::<SpendError>() {
                Some(spend_err) => spend_err.user_message(),
                None => format!("{:#}", err),
            };
            notifier.notify(&Notification::error(message));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, notifier: &mut dyn Notifier) -> Result<()> {
    // Initialize paths and settings
    let paths = SpendPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    init_tracing(&settings);

    paths.ensure_directories()?;
    if !paths.is_initialized() {
        settings.save(&paths)?;
    }

    let audit = AuditLogger::new(paths.audit_log());

    let mut ledger = ExpenseLedger::open(FileStore::new(paths.data_dir()));
    if settings.audit_enabled {
        ledger = ledger.with_audit(audit.clone());
    }

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&mut ledger, &settings, notifier, cmd)?;
        }
        Some(Commands::Goal(cmd)) => {
            handle_goal_command(&mut ledger, &settings, notifier, cmd)?;
        }
        Some(Commands::Summary) => {
            handle_summary(&ledger, &settings);
        }
        Some(Commands::History { count }) => {
            handle_history(&audit, count)?;
        }
        Some(Commands::Config) => {
            println!("SpendWise Configuration");
            println!("=======================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Date format:      {}", settings.date_format);
            println!("  Default category: {}", settings.default_category);
            println!("  Log level:        {}", settings.log_level);
            println!("  Audit enabled:    {}", settings.audit_enabled);
        }
        None => {
            println!("SpendWise - expense and savings goal tracker");
            println!();
            println!("Run 'spendwise --help' for usage information.");
        }
    }

    Ok(())
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the configured level
fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("spendwise={}", settings.log_level)))
        .unwrap_or_else(|_| EnvFilter::new("spendwise=warn"));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
