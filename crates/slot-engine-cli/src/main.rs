//! `nexus-slots` CLI — project availability payloads into bookable slots.
//!
//! ## Usage
//!
//! ```sh
//! # Project a payload (stdin → stdout, one label per line)
//! curl -s $API/availability/1 | nexus-slots project
//!
//! # Reproducible output with a fixed reference instant
//! nexus-slots project -i payload.json --now 2024-01-10T10:00:00Z
//!
//! # Resolve owner names from a directory file
//! nexus-slots project -i payload.json --owners owners.json
//!
//! # Keep slots that fall inside out-of-office blocks
//! nexus-slots project -i payload.json --ignore-ooo
//!
//! # Emit the slot list as pretty JSON
//! nexus-slots project -i payload.json --json
//!
//! # Per-owner slot counts over the projection window
//! nexus-slots stats -i payload.json --now 2024-01-10T10:00:00Z
//! ```

use std::collections::BTreeMap;
use std::io::{self, Read};

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use clap::{Parser, Subcommand};
use slot_engine::{
    bookable_slots, project_slots, AvailabilityPayload, OwnerDirectory, OwnerRecord, Slot,
    HORIZON_WEEKS,
};

#[derive(Parser)]
#[command(
    name = "nexus-slots",
    version,
    about = "Nexus Scheduling slot projection CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project an availability payload into bookable slots
    Project {
        /// Input payload file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Reference instant, RFC 3339 (defaults to the current time)
        #[arg(long)]
        now: Option<String>,
        /// Owner directory file: JSON array of {id, name} records
        #[arg(long)]
        owners: Option<String>,
        /// Skip out-of-office exclusion
        #[arg(long)]
        ignore_ooo: bool,
        /// Emit slots as pretty-printed JSON instead of text lines
        #[arg(long)]
        json: bool,
    },
    /// Show projection statistics (window, per-owner slot counts)
    Stats {
        /// Input payload file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Reference instant, RFC 3339 (defaults to the current time)
        #[arg(long)]
        now: Option<String>,
        /// Owner directory file: JSON array of {id, name} records
        #[arg(long)]
        owners: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Project {
            input,
            now,
            owners,
            ignore_ooo,
            json,
        } => {
            let payload = read_payload(input.as_deref())?;
            let now = resolve_now(now.as_deref())?;
            let directory = load_directory(owners.as_deref())?;

            let slots = if ignore_ooo {
                project_slots(&payload.availabilities, now, &directory)
            } else {
                bookable_slots(&payload, now, &directory)
            }
            .context("Failed to project slots")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&slots)?);
            } else {
                for slot in &slots {
                    println!("{}", slot.label);
                }
            }
        }
        Commands::Stats { input, now, owners } => {
            let payload = read_payload(input.as_deref())?;
            let now = resolve_now(now.as_deref())?;
            let directory = load_directory(owners.as_deref())?;

            let slots = bookable_slots(&payload, now, &directory)
                .context("Failed to project slots")?;

            let window_end = now + Duration::days(7 * HORIZON_WEEKS);
            println!("Window start: {}", now.format("%Y-%m-%d %H:%M UTC"));
            println!("Window end:   {}", window_end.format("%Y-%m-%d %H:%M UTC"));
            println!("Total slots:  {}", slots.len());
            for (owner_id, (name, count)) in count_by_owner(&slots) {
                println!("Owner {} ({}): {}", owner_id, name, count);
            }
        }
    }

    Ok(())
}

/// Count slots per owner, keyed by owner id for stable output order.
fn count_by_owner(slots: &[Slot]) -> BTreeMap<i64, (String, usize)> {
    let mut counts: BTreeMap<i64, (String, usize)> = BTreeMap::new();
    for slot in slots {
        let entry = counts
            .entry(slot.owner_id)
            .or_insert_with(|| (slot.owner_name.clone(), 0));
        entry.1 += 1;
    }
    counts
}

/// Parse the --now argument, defaulting to the current instant.
fn resolve_now(now: Option<&str>) -> Result<DateTime<Utc>> {
    match now {
        Some(s) => {
            let parsed = DateTime::parse_from_rfc3339(s)
                .with_context(|| format!("Invalid --now value (expected RFC 3339): {}", s))?;
            Ok(parsed.with_timezone(&Utc))
        }
        None => Ok(Utc::now()),
    }
}

/// Load the optional owner directory file (JSON array of {id, name} records).
fn load_directory(path: Option<&str>) -> Result<OwnerDirectory> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read owners file: {}", path))?;
            let records: Vec<OwnerRecord> = serde_json::from_str(&raw)
                .with_context(|| format!("Invalid owners file: {}", path))?;
            Ok(OwnerDirectory::from_records(records))
        }
        None => Ok(OwnerDirectory::new()),
    }
}

fn read_payload(path: Option<&str>) -> Result<AvailabilityPayload> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            buf
        }
    };
    serde_json::from_str(&raw).context("Invalid availability payload JSON")
}
