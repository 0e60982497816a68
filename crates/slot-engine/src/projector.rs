//! Availability-to-slot projection.
//!
//! Turns weekly recurring [`AvailabilityRule`]s into concrete, bookable
//! half-hour slots over the next two weekly cycles from a caller-supplied
//! reference instant, dropping any occurrence that has already passed.
//!
//! The projection is a pure function of `(rules, now, directory)` — no I/O,
//! no hidden clock reads — so callers pass `Utc::now()` at the edge and tests
//! pass a fixed instant. All calendar arithmetic happens on UTC instants;
//! converting to a viewer's local time is a presentation concern.

use chrono::{DateTime, Datelike, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::directory::OwnerDirectory;
use crate::error::Result;
use crate::rule::AvailabilityRule;

/// Fixed duration of every bookable slot, in minutes.
pub const SLOT_MINUTES: i64 = 30;

/// Forward-looking horizon: each rule is expanded for this many weekly cycles.
pub const HORIZON_WEEKS: i64 = 2;

/// A concrete, dated, bookable window derived from a recurring rule.
///
/// Slots are ephemeral: recomputed on every projection, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub owner_id: i64,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub owner_name: String,
    pub label: String,
}

/// Project recurring availability rules into concrete bookable slots.
///
/// For each rule and each week offset `w` in `0..HORIZON_WEEKS`, the nearest
/// occurrence of the rule's weekday on/after `now` is computed as
/// `((day_of_week - now_weekday + 7) % 7) + 7*w` days ahead, then the rule's
/// wall-clock start is stamped onto that date (seconds zeroed). Candidates
/// that are not strictly in the future are discarded — this removes the
/// "today, but the time already passed" occurrence while keeping next week's.
///
/// The result carries every surviving occurrence across all rules, sorted
/// ascending by start (owner id as a stable tiebreak). Nothing else is
/// suppressed here: overlap de-duplication and conflict checks against
/// existing bookings happen server-side.
///
/// # Errors
/// Returns `SlotError::MalformedTime` if any rule's `start_time` is not a
/// parseable wall-clock string, and `SlotError::InvalidDayOfWeek` if a rule's
/// `day_of_week` is outside 0-6. A bad rule fails the whole projection rather
/// than being skipped, so upstream data problems surface instead of
/// manifesting as quietly missing slots.
pub fn project_slots(
    rules: &[AvailabilityRule],
    now: DateTime<Utc>,
    directory: &OwnerDirectory,
) -> Result<Vec<Slot>> {
    let today = now.weekday().num_days_from_sunday() as i64;

    let mut slots = Vec::new();
    for rule in rules {
        let clock = rule.start_clock()?;

        for week in 0..HORIZON_WEEKS {
            let offset_days = ((rule.day_of_week as i64 - today + 7) % 7) + 7 * week;

            let start = (now.date_naive() + Duration::days(offset_days))
                .and_time(clock)
                .and_utc();
            if start <= now {
                continue;
            }
            let end = start + Duration::minutes(SLOT_MINUTES);

            let owner_name = directory.resolve(rule.owner_id);
            let label = format!("{} ({})", start.format("%Y-%m-%d %H:%M UTC"), owner_name);

            slots.push(Slot {
                owner_id: rule.owner_id,
                start,
                end,
                owner_name,
                label,
            });
        }
    }

    slots.sort_by_key(|s| (s.start, s.owner_id));
    Ok(slots)
}
