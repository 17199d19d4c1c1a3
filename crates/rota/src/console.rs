//! Colorful console output for scheduler progress.
//!
//! Provides a `tracing` layer that renders the scheduler's structured
//! events. Initialized by the entry points when the `console` feature is
//! enabled.
//!
//! ## Log Levels
//!
//! - **INFO**: solve start and end, new best schedules
//! - **DEBUG**: periodic progress
//! - **TRACE**: individual rejected candidates

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SOLVE_START_NANOS: AtomicU64 = AtomicU64::new(0);

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Directives used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "rota_solver=info";

/// Installs the console subscriber.
///
/// Safe to call multiple times - only the first call has effect. Does nothing
/// if another global subscriber is already installed.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(RotaConsoleLayer)
            .try_init();
    });
}

fn mark_solve_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    SOLVE_START_NANOS.store(epoch.elapsed().as_nanos() as u64, Ordering::Relaxed);
}

fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start = SOLVE_START_NANOS.load(Ordering::Relaxed);
    let now = epoch.elapsed().as_nanos() as u64;
    now.saturating_sub(start) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
  ____       _
 |  _ \ ___ | |_ __ _
 | |_) / _ \| __/ _` |
 |  _ < (_) | || (_| |
 |_| \_\___/ \__\__,_|
"#;
    let version_line = format!("  v{VERSION} - Fair Shift Auto-Fill\n");

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats scheduler events with colors.
pub struct RotaConsoleLayer;

impl<S: Subscriber> Layer<S> for RotaConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("rota") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{output}");
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    workers: Option<u64>,
    slots: Option<u64>,
    horizon_days: Option<u64>,
    heuristics: Option<u64>,
    cycle: Option<u64>,
    cycles: Option<u64>,
    computed: Option<u64>,
    discarded: Option<u64>,
    pool: Option<u64>,
    duration_ms: Option<u64>,
    best: Option<f64>,
    max_inconvenience_deviation: Option<f64>,
    mutated: Option<bool>,
    score: Option<String>,
    reason: Option<String>,
    slot: Option<String>,
    dominant_discard: Option<String>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{value:?}").trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "score" => self.score = Some(s),
            "reason" => self.reason = Some(s),
            "slot" => self.slot = Some(s),
            "dominant_discard" => self.dominant_discard = Some(s),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        let s = Some(value.to_string());
        match field.name() {
            "event" => self.event = s,
            "score" => self.score = s,
            "reason" => self.reason = s,
            "slot" => self.slot = s,
            "dominant_discard" => self.dominant_discard = s,
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        let v = Some(value);
        match field.name() {
            "workers" => self.workers = v,
            "slots" => self.slots = v,
            "horizon_days" => self.horizon_days = v,
            "heuristics" => self.heuristics = v,
            "cycle" => self.cycle = v,
            "cycles" => self.cycles = v,
            "computed" => self.computed = v,
            "discarded" => self.discarded = v,
            "pool" => self.pool = v,
            "duration_ms" => self.duration_ms = v,
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "best" => self.best = Some(value),
            "max_inconvenience_deviation" => self.max_inconvenience_deviation = Some(value),
            _ => {}
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "mutated" {
            self.mutated = Some(value);
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "solve_start" => format_solve_start(v),
        "new_best" => format_new_best(v),
        "progress" => format_progress(v),
        "discard" if level == Level::TRACE => format_discard(v),
        "solve_end" => format_solve_end(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs()).bright_black().to_string()
}

fn count(value: Option<u64>) -> String {
    value.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_score(score: Option<f64>) -> String {
    match score {
        Some(s) if s <= 0.25 => format!("{s:.4}").bright_green().to_string(),
        Some(s) if s <= 0.5 => format!("{s:.4}").yellow().to_string(),
        Some(s) => format!("{s:.4}").bright_red().to_string(),
        None => "none".bright_black().to_string(),
    }
}

fn format_solve_start(v: &EventVisitor) -> String {
    mark_solve_start();
    format!(
        "{} {} Scheduling │ {} workers │ {} slots │ {} days │ {} heuristics",
        format_elapsed(),
        "▶".bright_green().bold(),
        count(v.workers).bright_yellow(),
        count(v.slots).bright_yellow(),
        count(v.horizon_days).bright_yellow(),
        count(v.heuristics).bright_yellow(),
    )
}

fn format_new_best(v: &EventVisitor) -> String {
    let score = v.score.as_deref().and_then(|s| s.parse().ok());
    let origin = if v.mutated.unwrap_or(false) {
        "mutation"
    } else {
        "construction"
    };
    format!(
        "{} {} cycle {:>9} │ {} │ {}",
        format_elapsed(),
        "->".bright_blue(),
        count(v.cycle).white(),
        format_score(score),
        origin.bright_black(),
    )
}

fn format_progress(v: &EventVisitor) -> String {
    format!(
        "{} {} {:>9} cycles │ {} valid │ {} discarded │ pool {} │ best {}",
        format_elapsed(),
        "⚡".bright_cyan(),
        count(v.cycle).white(),
        count(v.computed).bright_green(),
        count(v.discarded).bright_red(),
        count(v.pool).white(),
        format_score(v.best),
    )
}

fn format_discard(v: &EventVisitor) -> String {
    format!(
        "{} {} cycle {:>9} │ {} │ {}",
        format_elapsed(),
        "✗".red(),
        count(v.cycle).bright_black(),
        v.reason.as_deref().unwrap_or("unknown").red(),
        v.slot.as_deref().unwrap_or("-").bright_black(),
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let found = v.pool.unwrap_or(0) > 0;
    let status = if found {
        "SCHEDULE FOUND".bright_green().bold().to_string()
    } else {
        "NO VALID SCHEDULE".bright_red().bold().to_string()
    };

    let mut output = format!(
        "{} {} Scheduling complete ({}) │ {} │ {} │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        v.reason.as_deref().unwrap_or("unknown"),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        format_score(v.best),
        status,
    );

    output.push_str("\n\n");
    let rows = [
        ("Cycles:", count(v.cycles)),
        ("Valid schedules:", count(v.computed)),
        ("Discarded:", count(v.discarded)),
        (
            "Top reason:",
            v.dominant_discard.clone().unwrap_or_else(|| "-".to_string()),
        ),
        ("Pool size:", count(v.pool)),
        (
            "Max deviation:",
            v.max_inconvenience_deviation
                .map_or_else(|| "-".to_string(), |d| format!("{:+.1}%", d * 100.0)),
        ),
    ];
    output.push_str(
        &"╔══════════════════════════════════════════════════════════╗"
            .bright_cyan()
            .to_string(),
    );
    output.push('\n');
    for (label, value) in rows {
        output.push_str(&format!(
            "{}  {:<18}{:>36}  {}",
            "║".bright_cyan(),
            label,
            value,
            "║".bright_cyan()
        ));
        output.push('\n');
    }
    output.push_str(
        &"╚══════════════════════════════════════════════════════════╝"
            .bright_cyan()
            .to_string(),
    );
    output.push('\n');
    output
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{ms}ms")
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        format!("{}m {}s", ms / 60_000, (ms % 60_000) / 1000)
    }
}
