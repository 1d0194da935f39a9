//! Guide assignment: a thin annotation on a projected segment.
//!
//! No availability or conflict detection happens here; a guide can be
//! attached to overlapping segments across bookings. Persisting the
//! assignment is the storage layer's job (`db::queries::record_assignment`).

use crate::models::segment::Segment;

/// Attach a guide to one segment instance, in memory.
pub fn assign_guide(segment: &mut Segment, guide_id: i64) {
    segment.guide_id = Some(guide_id);
}

/// Detach whatever guide is currently assigned. No-op when unassigned.
pub fn clear_guide(segment: &mut Segment) {
    segment.guide_id = None;
}
