//! `meetslot` CLI — rank meeting times, invert ranges, and switch participant
//! modes from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Ranked result list for an event (stdin → stdout)
//! meetslot aggregate < event.json
//!
//! # Human-readable output with hourly slots and a stricter threshold
//! meetslot aggregate -i event.json --format text --slot-minutes 60 --threshold 0.75
//!
//! # Load slot width and threshold from a JSON config file
//! meetslot aggregate -i event.json --config meetslot.json
//!
//! # Invert a day's ranges
//! echo '[{"start":"09:00","end":"12:00"}]' | meetslot invert
//!
//! # Switch a participant to blacklist input, converting their ranges
//! meetslot switch-mode -i event.json --participant p1 --mode blacklist
//!
//! # Print a demo event starting the day after 2026-06-01
//! meetslot sample --from 2026-06-01
//! ```
//!
//! Logs go to stderr. `RUST_LOG` overrides the level chosen by `-v`.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use meetslot_engine::{
    aggregate_with, invert, AggregatedSlot, AggregationConfig, Event, Mode, SlotView, TimeRange,
};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "meetslot",
    version,
    about = "Find meeting times from group availability"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank every slot of every candidate date by participant availability
    Aggregate {
        /// Event JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        /// JSON file with `slotMinutes` and/or `threshold`
        #[arg(long)]
        config: Option<String>,
        /// Slot width in minutes (must divide 1440)
        #[arg(long)]
        slot_minutes: Option<u32>,
        /// Minimum fraction of participants for a slot to be listed
        #[arg(long)]
        threshold: Option<f64>,
    },
    /// Invert a JSON array of time ranges within one day
    Invert {
        /// Ranges JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Switch a participant's input mode and print the updated event
    SwitchMode {
        /// Event JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Id of the participant to switch
        #[arg(long)]
        participant: String,
        /// Mode to switch to
        #[arg(long, value_enum)]
        mode: ModeArg,
        /// Keep the entered ranges as-is instead of converting them
        #[arg(long)]
        keep_ranges: bool,
    },
    /// Print a demo event with three participants
    Sample {
        /// Base date; candidate dates fall 1, 3 and 7 days after it (default: today)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Whitelist,
    Blacklist,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Whitelist => Mode::Whitelist,
            ModeArg::Blacklist => Mode::Blacklist,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Aggregate {
            input,
            output,
            format,
            config,
            slot_minutes,
            threshold,
        } => {
            let event = read_event(input.as_deref())?;
            let config = build_config(config.as_deref(), slot_minutes, threshold)?;
            tracing::info!(
                event = %event.id,
                slot_minutes = config.slot_minutes(),
                threshold = config.threshold(),
                "aggregating"
            );

            let slots = aggregate_with(&event, &config);
            let rendered = match format {
                OutputFormat::Json => {
                    let views: Vec<SlotView> = slots.iter().map(SlotView::from).collect();
                    serde_json::to_string_pretty(&views)?
                }
                OutputFormat::Text => render_text(&event, &slots),
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Invert { input, output } => {
            let json = read_input(input.as_deref())?;
            let ranges: Vec<TimeRange> =
                serde_json::from_str(&json).context("Failed to parse time ranges")?;
            let inverted = invert(&ranges);
            write_output(output.as_deref(), &serde_json::to_string_pretty(&inverted)?)?;
        }
        Commands::SwitchMode {
            input,
            output,
            participant,
            mode,
            keep_ranges,
        } => {
            let event = read_event(input.as_deref())?;
            let updated = event
                .with_mode_switched(&participant, mode.into(), !keep_ranges)
                .with_context(|| format!("Failed to switch mode for '{}'", participant))?;
            write_output(output.as_deref(), &updated.to_json_pretty()?)?;
        }
        Commands::Sample { from, output } => {
            let base = from.unwrap_or_else(|| chrono::Local::now().date_naive());
            let event = meetslot_engine::sample::sample_event(base);
            write_output(output.as_deref(), &event.to_json_pretty()?)?;
        }
    }

    Ok(())
}

/// Install a stderr subscriber. `RUST_LOG` wins over the `-v` count.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Start from the config file (or defaults), then apply flag overrides.
fn build_config(
    path: Option<&str>,
    slot_minutes: Option<u32>,
    threshold: Option<f64>,
) -> Result<AggregationConfig> {
    let mut config = match path {
        Some(path) => {
            let raw = read_input(Some(path))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Invalid config file: {}", path))?
        }
        None => AggregationConfig::default(),
    };

    if let Some(minutes) = slot_minutes {
        config = config.with_slot_minutes(minutes)?;
    }
    if let Some(threshold) = threshold {
        config = config.with_threshold(threshold)?;
    }

    Ok(config)
}

/// One line per slot, followed by the memos left for that slot's date.
fn render_text(event: &Event, slots: &[AggregatedSlot]) -> String {
    if event.participants.is_empty() {
        return "no participants yet".to_string();
    }
    if slots.is_empty() {
        return "no matching slots".to_string();
    }

    let mut lines = Vec::new();
    for slot in slots {
        let mut line = format!("{}  {}", slot, slot.attendees.join(", "));
        if !slot.absentees.is_empty() {
            line.push_str(&format!(" (absent: {})", slot.absentees.join(", ")));
        }
        lines.push(line);

        for memo in event.memos_for(slot.date) {
            lines.push(format!("    {}: {}", memo.name, memo.memo));
        }
    }
    lines.join("\n")
}

fn read_event(path: Option<&str>) -> Result<Event> {
    let json = read_input(path)?;
    Event::from_json(&json).context("Failed to parse event")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, format!("{}\n", content))
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
