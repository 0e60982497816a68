//! Tests for out-of-office exclusion and the booking pipeline.

use chrono::{TimeZone, Utc};
use slot_engine::{
    bookable_slots, remove_ooo_slots, AvailabilityPayload, AvailabilityRule, BookingRequest,
    OooBlock, OwnerDirectory, Slot,
};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn slot(owner_id: i64, start: &str, end: &str) -> Slot {
    Slot {
        owner_id,
        start: start.parse().unwrap(),
        end: end.parse().unwrap(),
        owner_name: format!("Owner {}", owner_id),
        label: String::new(),
    }
}

fn block(owner_id: i64, start: &str, end: &str) -> OooBlock {
    OooBlock {
        owner_id,
        start: start.parse().unwrap(),
        end: end.parse().unwrap(),
        reason: None,
    }
}

// ── remove_ooo_slots ────────────────────────────────────────────────────────

#[test]
fn overlapping_block_removes_same_owner_slot() {
    let slots = vec![
        slot(1, "2024-01-12T11:00:00Z", "2024-01-12T11:30:00Z"),
        slot(1, "2024-01-19T11:00:00Z", "2024-01-19T11:30:00Z"),
    ];
    let blocks = vec![block(1, "2024-01-12T00:00:00Z", "2024-01-13T00:00:00Z")];

    let kept = remove_ooo_slots(slots, &blocks);

    assert_eq!(kept.len(), 1);
    assert_eq!(
        kept[0].start,
        Utc.with_ymd_and_hms(2024, 1, 19, 11, 0, 0).unwrap()
    );
}

#[test]
fn other_owners_block_does_not_remove_slot() {
    let slots = vec![slot(1, "2024-01-12T11:00:00Z", "2024-01-12T11:30:00Z")];
    let blocks = vec![block(2, "2024-01-12T00:00:00Z", "2024-01-13T00:00:00Z")];

    let kept = remove_ooo_slots(slots, &blocks);
    assert_eq!(kept.len(), 1);
}

#[test]
fn adjacent_block_is_not_an_overlap() {
    // Block ends exactly when the slot starts, and another begins exactly
    // when it ends. Neither removes the slot.
    let slots = vec![slot(1, "2024-01-12T11:00:00Z", "2024-01-12T11:30:00Z")];
    let blocks = vec![
        block(1, "2024-01-12T10:00:00Z", "2024-01-12T11:00:00Z"),
        block(1, "2024-01-12T11:30:00Z", "2024-01-12T12:00:00Z"),
    ];

    let kept = remove_ooo_slots(slots, &blocks);
    assert_eq!(kept.len(), 1);
}

#[test]
fn partial_overlap_still_blocks() {
    // Block covers only the first 10 minutes of the slot.
    let slots = vec![slot(1, "2024-01-12T11:00:00Z", "2024-01-12T11:30:00Z")];
    let blocks = vec![block(1, "2024-01-12T10:30:00Z", "2024-01-12T11:10:00Z")];

    let kept = remove_ooo_slots(slots, &blocks);
    assert!(kept.is_empty());
}

#[test]
fn no_blocks_is_a_no_op() {
    let slots = vec![
        slot(1, "2024-01-12T11:00:00Z", "2024-01-12T11:30:00Z"),
        slot(2, "2024-01-12T11:00:00Z", "2024-01-12T11:30:00Z"),
    ];
    let kept = remove_ooo_slots(slots.clone(), &[]);
    assert_eq!(kept, slots);
}

// ── bookable_slots pipeline ─────────────────────────────────────────────────

#[test]
fn pipeline_projects_then_removes_ooo() {
    // Wednesday 2024-01-10T10:00:00Z; one Friday 11:00 rule; the owner is
    // out of office on the first Friday, so only next week's slot survives.
    let now = Utc.with_ymd_and_hms(2024, 1, 10, 10, 0, 0).unwrap();
    let payload = AvailabilityPayload {
        ssm_ids: vec![2],
        availabilities: vec![AvailabilityRule {
            availability_id: 25,
            owner_id: 2,
            day_of_week: 5,
            start_time: "11:00:00".to_string(),
            end_time: "17:00:00".to_string(),
        }],
        ooo_blocks: vec![block(2, "2024-01-12T00:00:00Z", "2024-01-13T00:00:00Z")],
    };

    let slots = bookable_slots(&payload, now, &OwnerDirectory::new()).unwrap();

    assert_eq!(slots.len(), 1);
    assert_eq!(
        slots[0].start,
        Utc.with_ymd_and_hms(2024, 1, 19, 11, 0, 0).unwrap()
    );
}

#[test]
fn payload_deserializes_from_api_shape() {
    let json = r#"{
        "ssm_ids": [1, 2],
        "availabilities": [
            {
                "availability_id": 11,
                "user_id": 1,
                "day_of_week": 3,
                "start_time": "09:00:00",
                "end_time": "09:30:00"
            }
        ],
        "ooo_blocks": [
            {
                "ooo_id": 4,
                "user_id": 1,
                "start_datetime": "2024-01-12T00:00:00Z",
                "end_datetime": "2024-01-13T00:00:00Z",
                "reason": "conference"
            }
        ]
    }"#;

    let payload: AvailabilityPayload = serde_json::from_str(json).unwrap();
    assert_eq!(payload.ssm_ids, vec![1, 2]);
    assert_eq!(payload.availabilities.len(), 1);
    assert_eq!(payload.availabilities[0].owner_id, 1);
    assert_eq!(payload.availabilities[0].day_of_week, 3);
    assert_eq!(payload.ooo_blocks[0].owner_id, 1);
    assert_eq!(payload.ooo_blocks[0].reason.as_deref(), Some("conference"));
}

#[test]
fn booking_request_copies_slot_fields() {
    let s = slot(2, "2024-01-19T11:00:00Z", "2024-01-19T11:30:00Z");
    let req = BookingRequest::for_slot(&s, "disco-123", 1);

    assert_eq!(req.ssm_id, 2);
    assert_eq!(req.pathway_id, 1);
    assert_eq!(req.student_disco_user_id, "disco-123");
    assert_eq!(req.start_datetime, s.start);
    assert_eq!(req.end_datetime, s.end);
}
