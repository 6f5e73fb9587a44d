//! Zonk element: falls into empty space, rolls off round things.
//!
//! A moving zonk occupies two cells for the duration of the move. The half
//! it is leaving turns back into space when the animation wraps; the half it
//! is entering turns into a resting zonk.

use crate::api::FieldApi;
use crate::cell::ElementType;

pub fn update_zonk(api: &mut FieldApi) {
    let c = api.at;
    let below = c.below();
    let under = api.get(below);

    if under.is_space() || under.is_reserved() {
        api.set(c, ElementType::ZonkFallingTop);
        api.set(below, ElementType::ZonkFallingBottom);
        return;
    }

    if !under.is_round() {
        return;
    }

    // Right is tried first.
    if api.get(c.right()).is_space() && api.get(below.right()).is_space() {
        api.set(below.right(), ElementType::Reserved);
        api.set(c.right(), ElementType::ZonkRollingRightRight);
        api.set(c, ElementType::ZonkRollingRightLeft);
    } else if api.get(c.left()).is_space() && api.get(below.left()).is_space() {
        api.set(below.left(), ElementType::Reserved);
        api.set(c.left(), ElementType::ZonkRollingLeftLeft);
        api.set(c, ElementType::ZonkRollingLeftRight);
    }
}

/// Source half of a move: empties when the animation completes.
pub fn update_leaving(api: &mut FieldApi) {
    if api.next_frame() {
        api.set(api.at, ElementType::Space);
    }
}

/// Destination half of a move: settles into a resting zonk.
pub fn update_arriving(api: &mut FieldApi) {
    if api.next_frame() {
        api.set(api.at, ElementType::Zonk);
    }
}
