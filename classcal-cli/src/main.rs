mod commands;
mod render;

use anyhow::{Context, Result};
use classcal_core::config::ClasscalConfig;
use classcal_core::event::{EventCategory, EventFilter};
use classcal_core::store::EventStore;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "classcal")]
#[command(about = "Month calendar of exams, assignments, holidays and meetings")]
#[command(version)]
struct Cli {
    /// Show debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month grid with its events
    Month {
        /// Month to show (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,

        /// Page forward (positive) or back (negative) this many months
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i32,

        /// Highlight this day (YYYY-MM-DD) and list only its events
        #[arg(short, long)]
        select: Option<String>,

        #[command(flatten)]
        filter: FilterArgs,
    },
    /// List upcoming events by day
    Events {
        /// First day to list (YYYY-MM-DD), defaults to today
        #[arg(long)]
        from: Option<String>,

        /// Last day to list (YYYY-MM-DD), defaults to a week after --from
        #[arg(long)]
        to: Option<String>,

        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Create an event (prompts for anything missing)
    New {
        title: Option<String>,

        /// Day of the event: YYYY-MM-DD or e.g. "next friday"
        #[arg(short, long)]
        date: Option<String>,

        /// exam, assignment, holiday, meeting or event
        #[arg(short, long)]
        category: Option<EventCategory>,

        /// Class or section, e.g. "Grade 10-A"
        #[arg(short, long)]
        group: Option<String>,
    },
    /// Delete an event by id
    Delete { id: String },
    /// Show config and data paths
    Config,
}

#[derive(Args)]
struct FilterArgs {
    /// Only show events of this category
    #[arg(short, long)]
    category: Option<EventCategory>,

    /// Only show events for this class or section
    #[arg(short, long)]
    group: Option<String>,
}

impl From<FilterArgs> for EventFilter {
    fn from(args: FilterArgs) -> Self {
        EventFilter {
            category: args.category,
            group: args.group,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.quiet, cli.verbose)?;

    let config = ClasscalConfig::load().context("failed to load classcal config")?;
    let store = EventStore::from_config(&config);
    let today = chrono::Local::now().date_naive();

    match cli.command {
        Commands::Month {
            month,
            offset,
            select,
            filter,
        } => commands::month::run(
            &store,
            month.as_deref(),
            offset,
            select.as_deref(),
            filter.into(),
            today,
        ),
        Commands::Events { from, to, filter } => {
            commands::events::run(&store, from.as_deref(), to.as_deref(), filter.into(), today)
        }
        Commands::New {
            title,
            date,
            category,
            group,
        } => commands::new::run(&store, &config, title, date, category, group),
        Commands::Delete { id } => commands::delete::run(&store, &id),
        Commands::Config => commands::config::run(&config),
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("CLASSCAL_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
