mod commands;

use agendar_core::config::GlobalConfig;
use agendar_core::constants::DEFAULT_CALENDAR_ID;
use agendar_core::window::ListWindow;
use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "agendar")]
#[command(about = "Manage Google Calendar events from the terminal", version)]
struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Authorize a Google account and store its session
    Auth,
    /// Show the calendars the account can see
    Calendars {
        /// Account email (defaults to the configured one)
        #[arg(short, long)]
        account: Option<String>,
    },
    /// List upcoming events
    List(commands::list::ListArgs),
    /// Show one event in full
    Show {
        /// Event id (shown by `agendar list`)
        event_id: String,

        /// Account email (defaults to the configured one)
        #[arg(short, long)]
        account: Option<String>,

        /// Calendar id (defaults to "primary")
        #[arg(short, long)]
        calendar: Option<String>,

        /// Print the event as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create an event, optionally recurring, inviting attendees by email
    Create(commands::create::CreateArgs),
    /// Change fields of an existing event
    Update(commands::update::UpdateArgs),
    /// Delete an event
    Delete {
        /// Event id (shown by `agendar list`)
        event_id: String,

        /// Account email (defaults to the configured one)
        #[arg(short, long)]
        account: Option<String>,

        /// Calendar id (defaults to "primary")
        #[arg(short, long)]
        calendar: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match cli.command {
        Commands::Auth => commands::auth::run().await,
        Commands::Calendars { account } => {
            let account = resolve_account(account)?;
            commands::calendars::run(&account).await
        }
        Commands::List(args) => {
            let account = resolve_account(args.account.clone())?;
            let calendar_id = resolve_calendar(args.calendar.clone())?;
            let window = ListWindow::from_args(args.days, args.from.as_deref(), args.to.as_deref())?;
            commands::list::run(&account, &calendar_id, &window, &args).await
        }
        Commands::Show {
            event_id,
            account,
            calendar,
            json,
        } => {
            let account = resolve_account(account)?;
            let calendar_id = resolve_calendar(calendar)?;
            commands::show::run(&account, &calendar_id, &event_id, json).await
        }
        Commands::Create(args) => {
            let account = resolve_account(args.account.clone())?;
            let calendar_id = resolve_calendar(args.calendar.clone())?;
            commands::create::run(&account, &calendar_id, &args).await
        }
        Commands::Update(args) => {
            let account = resolve_account(args.account.clone())?;
            let calendar_id = resolve_calendar(args.calendar.clone())?;
            commands::update::run(&account, &calendar_id, &args).await
        }
        Commands::Delete {
            event_id,
            account,
            calendar,
        } => {
            let account = resolve_account(account)?;
            let calendar_id = resolve_calendar(calendar)?;
            commands::delete::run(&account, &calendar_id, &event_id).await
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "agendar_cli=debug,agendar_google=debug,agendar_core=debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn resolve_account(account: Option<String>) -> Result<String> {
    if let Some(account) = account {
        return Ok(account);
    }

    let config = GlobalConfig::load()?;
    match config.default_account {
        Some(account) => Ok(account),
        None => anyhow::bail!(
            "No account configured.\n\n\
            Authorize one with:\n  \
            agendar auth\n\n\
            or pass --account <email>."
        ),
    }
}

fn resolve_calendar(calendar: Option<String>) -> Result<String> {
    if let Some(calendar) = calendar {
        return Ok(calendar);
    }

    let config = GlobalConfig::load()?;
    Ok(config
        .default_calendar
        .unwrap_or_else(|| DEFAULT_CALENDAR_ID.to_string()))
}
