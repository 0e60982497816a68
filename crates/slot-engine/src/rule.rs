//! Availability rules and the raw payload shape delivered by the scheduling API.
//!
//! An [`AvailabilityRule`] is one recurring weekly commitment window for a
//! single owner (SSM). Rules are owned and mutated by staff-management
//! workflows elsewhere; here they are read-only input to the projector.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::ooo::OooBlock;

/// A recurring weekly availability window for one owner.
///
/// `day_of_week` follows the 0=Sunday convention used by the backend.
/// `start_time` and `end_time` are wall-clock strings ("HH:MM" or "HH:MM:SS").
/// The projector only consumes `start_time`; slots have a fixed duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityRule {
    pub availability_id: i64,
    /// The backend serializes this field as `user_id`; both names deserialize.
    #[serde(alias = "user_id")]
    pub owner_id: i64,
    pub day_of_week: u8,
    pub start_time: String,
    pub end_time: String,
}

impl AvailabilityRule {
    /// Parse this rule's `start_time` into a wall-clock time with seconds zeroed.
    ///
    /// # Errors
    /// Returns `SlotError::MalformedTime` if `start_time` is not "HH:MM" or
    /// "HH:MM:SS", and `SlotError::InvalidDayOfWeek` if `day_of_week` is
    /// outside 0-6.
    pub fn start_clock(&self) -> Result<NaiveTime> {
        if self.day_of_week > 6 {
            return Err(SlotError::InvalidDayOfWeek(self.day_of_week));
        }
        parse_wall_clock(&self.start_time)
    }
}

/// The availability payload returned by the "fetch availability for pathway"
/// collaborator: the owners serving the pathway, their recurring rules, and
/// any out-of-office blocks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AvailabilityPayload {
    pub ssm_ids: Vec<i64>,
    pub availabilities: Vec<AvailabilityRule>,
    pub ooo_blocks: Vec<OooBlock>,
}

/// Parse a wall-clock string ("HH:MM" or "HH:MM:SS") into a `NaiveTime`.
///
/// Seconds are validated when present but always zeroed in the result: slot
/// starts land on whole minutes.
///
/// # Errors
/// Returns `SlotError::MalformedTime` carrying the offending text when the
/// string has the wrong arity, a non-numeric component, or an out-of-range
/// hour/minute/second.
pub fn parse_wall_clock(s: &str) -> Result<NaiveTime> {
    let malformed = || SlotError::MalformedTime(s.to_string());

    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 2 && parts.len() != 3 {
        return Err(malformed());
    }

    let hour: u32 = parts[0].trim().parse().map_err(|_| malformed())?;
    let minute: u32 = parts[1].trim().parse().map_err(|_| malformed())?;
    if let Some(sec) = parts.get(2) {
        let second: u32 = sec.trim().parse().map_err(|_| malformed())?;
        if second > 59 {
            return Err(malformed());
        }
    }

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(malformed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parses_hour_minute() {
        let t = parse_wall_clock("09:30").unwrap();
        assert_eq!((t.hour(), t.minute(), t.second()), (9, 30, 0));
    }

    #[test]
    fn parses_hour_minute_second_and_zeroes_seconds() {
        let t = parse_wall_clock("14:00:45").unwrap();
        assert_eq!((t.hour(), t.minute(), t.second()), (14, 0, 0));
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "nine", "12", "25:00", "09:61", "09:00:99", "1:2:3:4"] {
            assert!(
                matches!(parse_wall_clock(bad), Err(SlotError::MalformedTime(_))),
                "expected MalformedTime for {:?}",
                bad
            );
        }
    }

    #[test]
    fn rule_start_clock_rejects_bad_day_of_week() {
        let rule = AvailabilityRule {
            availability_id: 1,
            owner_id: 1,
            day_of_week: 7,
            start_time: "09:00".to_string(),
            end_time: "09:30".to_string(),
        };
        assert!(matches!(
            rule.start_clock(),
            Err(SlotError::InvalidDayOfWeek(7))
        ));
    }
}
