//! The student booking pipeline: payload in, bookable slots out.
//!
//! Composes [`projector::project_slots`] with [`ooo::remove_ooo_slots`] over a
//! raw [`AvailabilityPayload`] — the shape returned by the "fetch availability
//! for pathway" collaborator. This is the single entry point the booking view
//! needs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::directory::OwnerDirectory;
use crate::error::Result;
use crate::ooo::remove_ooo_slots;
use crate::projector::{project_slots, Slot};
use crate::rule::AvailabilityPayload;

/// The booking request body submitted when a student confirms a slot.
///
/// Built from a chosen [`Slot`] plus the student/pathway context; the actual
/// submission belongs to the HTTP layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub student_disco_user_id: String,
    pub ssm_id: i64,
    pub pathway_id: i64,
    pub start_datetime: DateTime<Utc>,
    pub end_datetime: DateTime<Utc>,
}

impl BookingRequest {
    /// Build a booking request for a chosen slot.
    pub fn for_slot(slot: &Slot, student_disco_user_id: impl Into<String>, pathway_id: i64) -> Self {
        Self {
            student_disco_user_id: student_disco_user_id.into(),
            ssm_id: slot.owner_id,
            pathway_id,
            start_datetime: slot.start,
            end_datetime: slot.end,
        }
    }
}

/// Project every rule in the payload, then drop slots blocked by the owner's
/// out-of-office intervals.
///
/// # Errors
/// Propagates projection errors (`MalformedTime`, `InvalidDayOfWeek`) from any
/// rule in the payload.
pub fn bookable_slots(
    payload: &AvailabilityPayload,
    now: DateTime<Utc>,
    directory: &OwnerDirectory,
) -> Result<Vec<Slot>> {
    let projected = project_slots(&payload.availabilities, now, directory)?;
    Ok(remove_ooo_slots(projected, &payload.ooo_blocks))
}
