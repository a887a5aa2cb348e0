//! Colorful console output for solver progress.
//!
//! Provides a custom `tracing` layer that formats solver events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Solve start/end
//! - **DEBUG**: One line per sweep
//! - **WARN**: Contradictory entities and unreadable projections

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes the solver console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints a banner and sets up tracing at INFO unless `RUST_LOG` says
/// otherwise.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SolverConsoleLayer)
            .try_init();
    });
}

// Seconds since the first solve started.
fn elapsed_secs() -> f64 {
    EPOCH.get().map(|t| t.elapsed().as_secs_f64()).unwrap_or(0.0)
}

fn print_banner() {
    let title = format!("datemark v{VERSION} - date notation solver");
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", title.bright_cyan().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats solver events with colors.
pub struct SolverConsoleLayer;

impl<S: Subscriber> Layer<S> for SolverConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("datemark") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    entity: Option<String>,
    reason: Option<String>,
    notation: Option<String>,
    records: Option<u64>,
    entities: Option<u64>,
    sweep: Option<u64>,
    sweeps: Option<u64>,
    sweep_limit: Option<u64>,
    constrain_calls: Option<u64>,
    solved: Option<u64>,
    open: Option<u64>,
    contradicted: Option<u64>,
    duration_ms: Option<u64>,
    parallel: Option<bool>,
    converged: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.record_str(field, s.trim_matches('"'));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "records" => self.records = Some(value),
            "entities" => self.entities = Some(value),
            "sweep" => self.sweep = Some(value),
            "sweeps" => self.sweeps = Some(value),
            "sweep_limit" => self.sweep_limit = Some(value),
            "constrain_calls" => self.constrain_calls = Some(value),
            "solved" => self.solved = Some(value),
            "open" => self.open = Some(value),
            "contradicted" => self.contradicted = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        match field.name() {
            "parallel" => self.parallel = Some(value),
            "converged" => self.converged = Some(value),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        let value = Some(value.to_string());
        match field.name() {
            "event" => self.event = value,
            "entity" => self.entity = value,
            "reason" => self.reason = value,
            "notation" => self.notation = value,
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "solve_start" => format_solve_start(v),
        "sweep_end" => format_sweep_end(v),
        "contradiction" => format_contradiction(v),
        "solve_end" => format_solve_end(v),
        "query_skip" if level == Level::WARN => format_query_skip(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn count(value: Option<u64>) -> String {
    value.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_solve_start(v: &EventVisitor) -> String {
    EPOCH.get_or_init(Instant::now);
    let mode = if v.parallel.unwrap_or(false) {
        "parallel"
    } else {
        "sequential"
    };

    format!(
        "{} {} Solving │ {} records │ {} sweeps max │ {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        count(v.records).bright_yellow(),
        count(v.sweep_limit).bright_yellow(),
        mode.bright_magenta()
    )
}

fn format_sweep_end(v: &EventVisitor) -> String {
    format!(
        "{} {} Sweep {:>3} │ {} calls │ {} solved │ {} open │ {} contradicted",
        format_elapsed(),
        "⚡".bright_cyan(),
        v.sweep.unwrap_or(0),
        count(v.constrain_calls).white(),
        count(v.solved).bright_green(),
        count(v.open).yellow(),
        count(v.contradicted).bright_red()
    )
}

fn format_contradiction(v: &EventVisitor) -> String {
    format!(
        "{} {} {} has no consistent reading (sweep {})",
        format_elapsed(),
        "✖".bright_red().bold(),
        v.entity.as_deref().unwrap_or("?").white().bold(),
        v.sweep.unwrap_or(0)
    )
}

fn format_query_skip(v: &EventVisitor) -> String {
    format!(
        "{} {} {} skipped at {}: {}",
        format_elapsed(),
        "!".yellow().bold(),
        v.entity.as_deref().unwrap_or("?").white().bold(),
        v.notation.as_deref().unwrap_or("?"),
        v.reason.as_deref().unwrap_or("unknown")
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let status = if v.converged.unwrap_or(false) {
        "CONVERGED".bright_green().bold().to_string()
    } else {
        "PARTIAL".bright_yellow().bold().to_string()
    };

    format!(
        "{} {} Solving complete │ {} │ {} sweeps │ {}/{} entities solved │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        count(v.sweeps).white(),
        count(v.solved).bright_green(),
        count(v.entities).white(),
        status
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visitor(event: &str) -> EventVisitor {
        EventVisitor {
            event: Some(event.to_string()),
            ..EventVisitor::default()
        }
    }

    #[test]
    fn test_duration_format() {
        assert_eq!(format_duration_ms(42), "42ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_sweep_line() {
        let v = EventVisitor {
            sweep: Some(7),
            solved: Some(1234),
            ..visitor("sweep_end")
        };
        let line = format_event(&v, Level::DEBUG);
        assert!(line.contains("Sweep   7"));
        assert!(line.contains("1,234"));
    }

    #[test]
    fn test_solve_end_status() {
        let v = EventVisitor {
            converged: Some(true),
            ..visitor("solve_end")
        };
        assert!(format_event(&v, Level::INFO).contains("CONVERGED"));
        assert!(format_event(&visitor("solve_end"), Level::INFO).contains("PARTIAL"));
    }

    #[test]
    fn test_debug_query_skip_is_silent() {
        let v = EventVisitor {
            entity: Some("Zed".to_string()),
            ..visitor("query_skip")
        };
        assert!(format_event(&v, Level::DEBUG).is_empty());
        assert!(format_event(&v, Level::WARN).contains("Zed"));
    }

    #[test]
    fn test_unknown_event_is_silent() {
        assert!(format_event(&visitor("step"), Level::INFO).is_empty());
    }
}
