use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use chrono::NaiveDateTime;
use clap::Parser;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use salary_accrual::config::{
    ConfigLoader, JsonFileSettingsStore, MemorySettingsStore, SettingsStore,
};
use salary_accrual::models::{AccrualSnapshot, ClockReading, Currency, Schedule, WorkingDays};
use salary_accrual::presenter::{
    AmountStyle, Clock, FixedClock, Presenter, SystemClock, render_dashboard, spawn_refresh,
};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Live estimate of the salary earned today and this month.
///
/// Starts from the default schedule (Mon-Fri, 10:00-18:00, 30000 GBP),
/// or from `--config`, then applies any saved settings and command line
/// overrides. Overrides are saved back to the settings file.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// YAML schedule file providing the defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON settings file remembered between runs.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Annual salary.
    #[arg(long)]
    salary: Option<Decimal>,

    /// Hour the work window opens (0-24).
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=24))]
    start_hour: Option<u32>,

    /// Hour the work window closes (0-24).
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=24))]
    end_hour: Option<u32>,

    /// Display currency: USD, GBP, EUR or JPY.
    #[arg(long)]
    currency: Option<Currency>,

    /// Working days, e.g. `mon,tue,wed,thu,fri`, `all` or `none`.
    #[arg(long)]
    days: Option<WorkingDays>,

    /// Evaluate at a fixed local time (`YYYY-MM-DD HH:MM[:SS]`) instead of now.
    #[arg(long, value_parser = parse_instant)]
    at: Option<NaiveDateTime>,

    /// Print a single snapshot and exit.
    #[arg(long)]
    once: bool,

    /// Emit snapshots as JSON lines instead of the dashboard.
    #[arg(long)]
    json: bool,

    /// Show running counters with their sub-cent digit.
    #[arg(long)]
    live: bool,

    /// Refresh period in milliseconds.
    #[arg(long, default_value_t = 1000)]
    interval_ms: u64,
}

fn parse_instant(raw: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M"))
        .map_err(|e| format!("expected YYYY-MM-DD HH:MM[:SS]: {e}"))
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `warn` so the dashboard is not interleaved with logs.
/// * Writes to stderr, leaving stdout to the dashboard.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

// ─── output ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
struct Output {
    json: bool,
    style: AmountStyle,
    clear_screen: bool,
}

impl Output {
    fn from_cli(cli: &Cli) -> Self {
        Self {
            json: cli.json,
            style: if cli.live {
                AmountStyle::Live
            } else {
                AmountStyle::Cents
            },
            clear_screen: !cli.once && !cli.json && io::stdout().is_terminal(),
        }
    }

    fn emit(&self, snapshot: &AccrualSnapshot) {
        let text = if self.json {
            match serde_json::to_string(snapshot) {
                Ok(line) => line,
                Err(error) => {
                    warn!(%error, "failed to serialize snapshot");
                    return;
                }
            }
        } else {
            render_dashboard(snapshot, self.style)
        };

        let mut stdout = io::stdout().lock();
        let result = if self.clear_screen {
            writeln!(stdout, "\x1b[2J\x1b[H{text}")
        } else {
            writeln!(stdout, "{text}")
        };
        if let Err(error) = result.and_then(|_| stdout.flush()) {
            debug!(%error, "stdout closed");
        }
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn apply_overrides<S: SettingsStore>(cli: &Cli, presenter: &mut Presenter<S>) -> anyhow::Result<()> {
    let has_overrides = cli.salary.is_some()
        || cli.start_hour.is_some()
        || cli.end_hour.is_some()
        || cli.currency.is_some()
        || cli.days.is_some();
    if !has_overrides {
        return Ok(());
    }

    presenter
        .update(|schedule| {
            if let Some(salary) = cli.salary {
                schedule.annual_salary = salary.max(Decimal::ZERO);
            }
            if let Some(hour) = cli.start_hour {
                schedule.start_hour = hour;
            }
            if let Some(hour) = cli.end_hour {
                schedule.end_hour = hour;
            }
            if let Some(currency) = cli.currency {
                schedule.currency = currency;
            }
            if let Some(days) = cli.days {
                schedule.working_days = days;
            }
        })
        .context("failed to save settings")
}

async fn run<S: SettingsStore>(cli: Cli, mut presenter: Presenter<S>) -> anyhow::Result<()> {
    apply_overrides(&cli, &mut presenter)?;

    let clock: Arc<dyn Clock> = match cli.at {
        Some(at) => Arc::new(FixedClock(ClockReading::new(at))),
        None => Arc::new(SystemClock),
    };
    let output = Output::from_cli(&cli);

    if cli.once {
        output.emit(&presenter.snapshot(clock.now()));
        return Ok(());
    }

    let period = Duration::from_millis(cli.interval_ms);
    let handle = spawn_refresh(presenter.subscribe(), clock, period, move |snapshot| {
        output.emit(&snapshot)
    });

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for ctrl-c")?;

    let ticks = handle.stop().await;
    info!(ticks, "stopped");
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let defaults = match &cli.config {
        Some(path) => ConfigLoader::load(path)?.schedule(),
        None => Schedule::default(),
    };

    match cli.settings.clone() {
        Some(path) => {
            debug!(path = %path.display(), "using settings file");
            let store = JsonFileSettingsStore::open(&path)?;
            run(cli, Presenter::open(store, &defaults)).await
        }
        None => run(cli, Presenter::open(MemorySettingsStore::new(), &defaults)).await,
    }
}
