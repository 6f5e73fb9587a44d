//! Per-element update rules dispatched from the simulation pass.

mod murphy;
mod zonk;


use crate::api::FieldApi;
use crate::cell::ElementType;

/// An update rule for one element type.
pub type Rule = fn(&mut FieldApi);

/// Rule table indexed by type code. Types without an entry are inert.
static RULES: [Option<Rule>; ElementType::COUNT] = build_rules();

const fn build_rules() -> [Option<Rule>; ElementType::COUNT] {
    let mut rules: [Option<Rule>; ElementType::COUNT] = [None; ElementType::COUNT];

    rules[ElementType::MurphyMoving as usize] = Some(murphy::update_moving);

    rules[ElementType::Zonk as usize] = Some(zonk::update_zonk);
    rules[ElementType::ZonkFallingTop as usize] = Some(zonk::update_leaving);
    rules[ElementType::ZonkFallingBottom as usize] = Some(zonk::update_arriving);
    rules[ElementType::ZonkRollingLeftLeft as usize] = Some(zonk::update_arriving);
    rules[ElementType::ZonkRollingLeftRight as usize] = Some(zonk::update_leaving);
    rules[ElementType::ZonkRollingRightRight as usize] = Some(zonk::update_arriving);
    rules[ElementType::ZonkRollingRightLeft as usize] = Some(zonk::update_leaving);

    rules
}

#[must_use]
pub fn rule_for(kind: ElementType) -> Option<Rule> {
    RULES[kind as usize]
}

/// Run the rule registered for `kind`, if any.
pub fn update_cell(kind: ElementType, api: &mut FieldApi) {
    if let Some(rule) = rule_for(kind) {
        rule(api);
    }
}
