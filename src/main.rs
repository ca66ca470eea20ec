mod api;
mod commands;
mod dashboard;
mod feed;
mod http;
mod notify;
mod posting;
mod session;
mod store;

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::AppContext;

/// Upcoming job postings and dashboard state from the PlanUP backend
#[derive(Parser)]
struct Args {
    /// Base URL of the PlanUP API
    #[arg(long, env = "PLANUP_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    /// User whose postings are shown
    #[arg(long, env = "PLANUP_USER")]
    user: Option<String>,

    /// Directory holding the local token store
    #[arg(long, env = "PLANUP_STORE")]
    store: Option<PathBuf>,

    /// Pretend the current time is this RFC 3339 instant
    #[arg(long, hide = true)]
    now: Option<DateTime<Utc>>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Show job postings whose deadline has not passed, soonest first
    Show {
        /// Show every posting instead of the first page
        #[arg(long)]
        all: bool,
    },
    /// Open a posting in the browser by its shorthand
    Open {
        /// The shorthand shown next to the posting
        shorthand: String,
    },
    /// Save an auth token for later requests
    Login {
        #[arg(long)]
        token: String,
    },
    /// Forget the saved auth token
    Logout {
        /// Do not ask for confirmation
        #[arg(long, short)]
        yes: bool,
    },
    /// Show which dashboard panels apply to the user
    Dashboard,
}

fn store_dir(arg: Option<PathBuf>) -> PathBuf {
    arg.or_else(|| dirs::data_dir().map(|d| d.join("planup")))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> anyhow::Result<()> {
    let ctx = AppContext {
        base_url: args.api_url,
        user_id: args.user,
        store_dir: store_dir(args.store),
        now: args.now.unwrap_or_else(Utc::now),
        api: api::HttpApi::new(http::http_client()?),
        notifier: notify::StderrNotifier,
    };

    match args.command {
        Some(Command::Show { all }) => commands::show::cmd_show(&ctx, all),
        Some(Command::Open { ref shorthand }) => commands::open::cmd_open(&ctx, shorthand),
        Some(Command::Login { ref token }) => commands::login::cmd_login(&ctx, token),
        Some(Command::Logout { yes }) => commands::logout::cmd_logout(&ctx, yes),
        Some(Command::Dashboard) => commands::dashboard::cmd_dashboard(&ctx),
        None => commands::show::cmd_show(&ctx, false),
    }
}

fn main() {
    init_logging();
    let args = Args::parse();
    if let Err(e) = run(args) {
        if !e.is::<commands::Reported>() {
            eprintln!("Error: {e:#}");
        }
        std::process::exit(1);
    }
}
