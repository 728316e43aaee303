//! Load-time upgrade of persisted state documents.
//!
//! Serde defaults already fill any keys an older build never wrote; this
//! pass re-establishes the invariants that depend on reference data:
//! the look level is recomputed from the inventory, rent is re-read from
//! the flat catalogue, and a stale enrollment in an already-completed
//! course is cleared.

use ratrace_catalog::flats;
use ratrace_types::{PlayerState, STATE_VERSION};

use crate::locations::john_lewis;

/// Bring a freshly loaded document up to the current schema.
pub fn upgrade_state(state: &mut PlayerState) {
    john_lewis::recompute_look(state);

    if let Some(flat) = flats::flat_by_tier(state.flat_tier) {
        state.rent = flat.rent;
    } else {
        // Unknown tier in an old document: back to the streets.
        state.flat_tier = 0;
        state.rent = 0;
    }

    let stale_enrollment = state
        .enrolled_course
        .as_deref()
        .is_some_and(|course| state.completed_courses.contains(course));
    if stale_enrollment {
        state.enrolled_course = None;
        state.lectures_completed = 0;
    }

    state.version = STATE_VERSION;
}
