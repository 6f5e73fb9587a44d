//! The cell Murphy is leaving: plays out its animation, then empties.

use crate::api::FieldApi;
use crate::cell::ElementType;

pub fn update_moving(api: &mut FieldApi) {
    if api.next_frame() {
        api.set(api.at, ElementType::Space);
    }
}
