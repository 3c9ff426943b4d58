//! Terminal front end for the metric clock.
//!
//! # Responsibility
//! - Mirror the clock screen actions (live now, edit, navigate, week strip)
//!   as one-shot subcommands over a share-state string.
//! - Keep output deterministic for a given state so it can be scripted.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use log::info;
use metric_clock_core::{
    init_logging_with, parse_share_state, ClockConfig, ClockSession, MetricField, NavAction,
    SystemClock,
};

#[derive(Parser, Debug)]
#[command(name = "metric-clock", version, about = "Unix metric time converter")]
struct Cli {
    /// Log level (trace|debug|info|warn|error). Overrides METRIC_CLOCK_LOG_LEVEL.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute log directory. Overrides METRIC_CLOCK_LOG_DIR.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the current instant.
    Now,

    /// Convert epoch seconds to metric time.
    Encode {
        /// Seconds since 1970-01-01T00:00:00Z; may be negative.
        #[arg(allow_negative_numbers = true)]
        seconds: i64,
    },

    /// Convert a `yy-ddd-hh-mmm` state to epoch seconds.
    Decode(StateArgs),

    /// Step by whole metric years and days.
    Step {
        #[command(flatten)]
        state: StateArgs,

        /// Years to move.
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        years: i64,

        /// Days to move; overflow carries into the year.
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        days: i64,
    },

    /// Apply one navigation action (prev-week, next-season, end-of-year, ...).
    Nav {
        #[command(flatten)]
        state: StateArgs,

        /// Action id.
        action: String,
    },

    /// Edit one field (yy|ddd|hh|mmm); bad input becomes 0, then clamps.
    Edit {
        #[command(flatten)]
        state: StateArgs,

        /// Field id.
        field: String,

        /// Raw input text.
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Print the metric week strip around the state's day.
    Week(StateArgs),

    /// Print the navigation grid for the state.
    Cards(StateArgs),

    /// Restore the instant from a link query string (`?t=...`).
    Open {
        /// Query string; falls back to now when it carries no valid state.
        query: String,
    },
}

#[derive(Args, Debug)]
struct StateArgs {
    /// Share state `yy-ddd-hh-mmm`; malformed values fall back to now.
    #[arg(allow_hyphen_values = true)]
    state: String,
}

impl StateArgs {
    fn session(&self) -> ClockSession {
        if parse_share_state(&self.state).is_none() {
            eprintln!("state `{}` is malformed; using now", self.state);
        }
        ClockSession::from_share_state_or_now(Some(self.state.as_str()), &SystemClock)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = ClockConfig::from_env().with_overrides(cli.log_level.clone(), cli.log_dir.clone());
    if let Err(err) = init_logging_with(&config) {
        eprintln!("logging disabled: {err}");
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), String> {
    info!("event=cli_command module=cli status=start command={command:?}");
    match command {
        Command::Now => print_session(&ClockSession::now(&SystemClock)),
        Command::Encode { seconds } => print_session(&ClockSession::at_seconds(seconds)),
        Command::Decode(state) => {
            let session = state.session();
            println!("{}", session.civil_seconds());
        }
        Command::Step { state, years, days } => print_session(&state.session().step(years, days)),
        Command::Nav { state, action } => {
            let action = action.parse::<NavAction>().map_err(|err| err.to_string())?;
            print_session(&state.session().navigate(action));
        }
        Command::Edit {
            state,
            field,
            value,
        } => {
            let field = field.parse::<MetricField>().map_err(|err| err.to_string())?;
            print_session(&state.session().edit_field(field, &value));
        }
        Command::Week(state) => print_week(&state.session()),
        Command::Cards(state) => print_cards(&state.session()),
        Command::Open { query } => {
            print_session(&ClockSession::from_query_or_now(&query, &SystemClock))
        }
    }
    Ok(())
}

fn print_session(session: &ClockSession) {
    let civil = session.civil();
    println!("metric  {}", session.share_state());
    println!("label   {}", session.label());
    println!("seconds {}", session.civil_seconds());
    println!("local   {}", civil.local);
    println!("utc     {}", civil.utc);
    println!("link    ?{}", session.share_query());
    if !civil.is_valid() {
        eprintln!("instant is outside the representable calendar range");
    }
}

fn print_week(session: &ClockSession) {
    let week = session.week();
    let (Some(first), Some(last)) = (week.first(), week.last()) else {
        println!("no days in window for day {}", session.metric().ddd);
        return;
    };
    println!("metric week (days {} - {})", first.day, last.day);
    for entry in &week {
        let marker = if entry.selected { '*' } else { ' ' };
        let month_day = metric_clock_core::CivilRendering::of(entry.civil_seconds).month_day;
        println!("{marker} {:03}  {month_day}", entry.day);
    }
}

fn print_cards(session: &ClockSession) {
    for card in session.nav_cards() {
        let marker = if card.highlight { '!' } else { ' ' };
        println!(
            "{marker} {:<13} {:<16} {}",
            card.action.as_str(),
            card.title,
            card.sub_label
        );
    }
}
