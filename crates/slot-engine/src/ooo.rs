//! Out-of-office exclusion.
//!
//! An owner's OOO blocks are concrete date ranges during which their recurring
//! availability does not apply. A projected slot is removed when it overlaps
//! an OOO block belonging to the same owner; blocks for other owners never
//! affect it. Adjacent ranges (slot ends exactly when a block starts, or vice
//! versa) are NOT overlaps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::projector::Slot;

/// A concrete out-of-office interval for one owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OooBlock {
    #[serde(alias = "user_id")]
    pub owner_id: i64,
    #[serde(alias = "start_datetime")]
    pub start: DateTime<Utc>,
    #[serde(alias = "end_datetime")]
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub reason: Option<String>,
}

impl OooBlock {
    /// Whether this block overlaps the given slot.
    ///
    /// Two intervals overlap iff `a.start < b.end && b.start < a.end`, which
    /// excludes the adjacent case.
    fn blocks(&self, slot: &Slot) -> bool {
        self.owner_id == slot.owner_id && slot.start < self.end && self.start < slot.end
    }
}

/// Remove every slot that falls inside an out-of-office block of its owner.
///
/// The relative order of surviving slots is preserved.
pub fn remove_ooo_slots(slots: Vec<Slot>, blocks: &[OooBlock]) -> Vec<Slot> {
    if blocks.is_empty() {
        return slots;
    }
    slots
        .into_iter()
        .filter(|slot| !blocks.iter().any(|b| b.blocks(slot)))
        .collect()
}
