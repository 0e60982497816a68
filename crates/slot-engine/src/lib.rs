//! # slot-engine
//!
//! Deterministic availability-to-slot projection for the Nexus Scheduling
//! booking flow.
//!
//! Staff scheduling managers publish weekly recurring availability rules;
//! students book concrete half-hour sessions against them. This crate turns
//! those rules into the sorted list of bookable slots over the next two
//! weekly cycles, given a reference instant — a pure computation the booking
//! view runs fresh on every availability refresh.
//!
//! ## Modules
//!
//! - [`projector`] — recurring rules → concrete, future-only, sorted slots
//! - [`rule`] — availability rules, wall-clock parsing, payload shape
//! - [`ooo`] — out-of-office exclusion of projected slots
//! - [`booking`] — payload-to-bookable-slots pipeline and booking requests
//! - [`directory`] — total owner-id → display-name lookup with fallback
//! - [`error`] — error types

pub mod booking;
pub mod directory;
pub mod error;
pub mod ooo;
pub mod projector;
pub mod rule;

pub use booking::{bookable_slots, BookingRequest};
pub use directory::{OwnerDirectory, OwnerRecord};
pub use error::SlotError;
pub use ooo::{remove_ooo_slots, OooBlock};
pub use projector::{project_slots, Slot, HORIZON_WEEKS, SLOT_MINUTES};
pub use rule::{AvailabilityPayload, AvailabilityRule};
