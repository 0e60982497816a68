//! WASM bindings for slot-engine.
//!
//! Exposes slot projection and the full bookable-slots pipeline to JavaScript
//! via `wasm-bindgen`, so the booking view can run the projection client-side
//! against the fetched availability payload. All complex types are passed as
//! JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/slot-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;
use slot_engine::{AvailabilityPayload, AvailabilityRule, OwnerDirectory, OwnerRecord, Slot};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct SlotDto {
    owner_id: i64,
    start: String,
    end: String,
    owner_name: String,
    label: String,
}

impl From<&Slot> for SlotDto {
    fn from(s: &Slot) -> Self {
        Self {
            owner_id: s.owner_id,
            start: s.start.to_rfc3339(),
            end: s.end.to_rfc3339(),
            owner_name: s.owner_name.clone(),
            label: s.label.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse an ISO 8601 datetime string into `DateTime<Utc>`.
///
/// Accepts both RFC 3339 (with timezone offset, e.g., "2024-01-10T10:00:00Z")
/// and naive local time (e.g., "2024-01-10T10:00:00"), which is interpreted
/// as UTC.
fn parse_datetime(s: &str) -> Result<DateTime<Utc>, JsValue> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map(|ndt| ndt.and_utc())
        .map_err(|e| JsValue::from_str(&format!("Invalid datetime '{}': {}", s, e)))
}

/// Build an owner directory from an optional JSON array of `{id, name}` records.
fn parse_directory(owners_json: Option<String>) -> Result<OwnerDirectory, JsValue> {
    match owners_json {
        Some(json) => {
            let records: Vec<OwnerRecord> = serde_json::from_str(&json)
                .map_err(|e| JsValue::from_str(&format!("Invalid owners JSON: {}", e)))?;
            Ok(OwnerDirectory::from_records(records))
        }
        None => Ok(OwnerDirectory::new()),
    }
}

fn slots_to_json(slots: &[Slot]) -> Result<String, JsValue> {
    let dtos: Vec<SlotDto> = slots.iter().map(SlotDto::from).collect();
    serde_json::to_string(&dtos)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Project recurring availability rules into concrete bookable slots.
///
/// `rules_json` must be a JSON array of availability rule objects. `now` is an
/// ISO 8601 datetime string (the reference instant). `owners_json` is an
/// optional JSON array of `{id, name}` records; missing owners resolve to a
/// generated placeholder name.
///
/// Returns a JSON string containing the sorted slot array, each slot with
/// `owner_id`, RFC 3339 `start`/`end`, `owner_name`, and `label`.
#[wasm_bindgen(js_name = "projectSlots")]
pub fn project_slots(
    rules_json: &str,
    now: &str,
    owners_json: Option<String>,
) -> Result<String, JsValue> {
    let rules: Vec<AvailabilityRule> = serde_json::from_str(rules_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid rules JSON: {}", e)))?;
    let now = parse_datetime(now)?;
    let directory = parse_directory(owners_json)?;

    let slots = slot_engine::project_slots(&rules, now, &directory)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    slots_to_json(&slots)
}

/// Run the full booking pipeline: project every rule in an availability
/// payload, then drop slots blocked by the owner's out-of-office intervals.
///
/// `payload_json` must be the availability payload object (`ssm_ids`,
/// `availabilities`, `ooo_blocks`) as fetched from the scheduling API.
/// `now` and `owners_json` behave as in [`project_slots`].
#[wasm_bindgen(js_name = "bookableSlots")]
pub fn bookable_slots(
    payload_json: &str,
    now: &str,
    owners_json: Option<String>,
) -> Result<String, JsValue> {
    let payload: AvailabilityPayload = serde_json::from_str(payload_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid payload JSON: {}", e)))?;
    let now = parse_datetime(now)?;
    let directory = parse_directory(owners_json)?;

    let slots = slot_engine::bookable_slots(&payload, now, &directory)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    slots_to_json(&slots)
}
