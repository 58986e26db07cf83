//! Trigger sheet construction: ignition, extinguish, spread, destroy
//!
//! Entry order within each trigger follows the host's evaluation order
//! and is part of the artifact: the onUpdate reset entry comes first,
//! then any engine default events, then one ignition entry per
//! direction, then the extinguish entry.

use crate::block::state::{PARAM_STATE, STATE_ACTIVE};
use crate::direction::{cube_offsets, Direction, DirectionSet};
use crate::predicate::Predicate;
use crate::trigger::{Action, DefaultEvents, TriggerEntry, TriggerSheet};

use super::config::FireConfig;

/// Trigger invoked by the host on every block update.
pub const ON_UPDATE: &str = "onUpdate";
/// Trigger invoked by the host when the block is placed.
pub const ON_PLACE: &str = "onPlace";
/// Ignition entry point: activates the block and schedules spread and
/// destruction.
pub const ON_FIRE_SPREAD: &str = "onFireSpread";
/// Outward spread attempt over the full neighborhood cube.
pub const SPREAD_FIRE: &str = "spreadFire";
/// Repeating neighbor-destruction timer.
pub const TRY_DESTROY_BLOCKS: &str = "tryDestroyBlocks";

/// Build the complete fire trigger sheet.
pub fn build_trigger_sheet(config: &FireConfig, defaults: &dyn DefaultEvents) -> TriggerSheet {
    let mut sheet = TriggerSheet::new(config.block_id());

    // Reset every connectivity param before the ignition entries
    // re-derive them from the current neighborhood.
    sheet.add_trigger(ON_UPDATE, [TriggerEntry::new(Action::set_params(
        Direction::CARDINALS.iter().map(|d| (d.name(), "false")),
    ))]);

    defaults.apply(&mut sheet);

    sheet.add_trigger(ON_PLACE, [TriggerEntry::new(Action::run_trigger(ON_FIRE_SPREAD))]);

    for direction in Direction::CARDINALS {
        sheet.add_trigger(ON_UPDATE, [TriggerEntry::guarded(
            ignition_guard(config, direction),
            Action::set_param(direction.name(), "true"),
        )]);
    }

    // All six connectivity params false: nothing burns next door, go out.
    sheet.add_trigger(ON_UPDATE, [TriggerEntry::guarded(
        Predicate::all(
            Direction::CARDINALS.iter().map(|d| Predicate::has_param(d.name(), "false")),
        ),
        Action::replace_block_state(config.inert_state_id.as_str()),
    )]);

    sheet.add_trigger(ON_FIRE_SPREAD, [
        TriggerEntry::new(Action::set_param(PARAM_STATE, STATE_ACTIVE)),
        TriggerEntry::new(Action::run_trigger_delayed(SPREAD_FIRE, config.spread_delay)),
        TriggerEntry::new(Action::run_trigger_delayed(TRY_DESTROY_BLOCKS, config.destroy_delay)),
    ]);

    for direction in Direction::CARDINALS {
        sheet.add_trigger(TRY_DESTROY_BLOCKS, [TriggerEntry::guarded(
            Predicate::all([
                Predicate::random(config.destroy_chance),
                Predicate::has_param(direction.name(), "true"),
            ]),
            Action::replace_block_state_at(direction.offset(), config.inert_state_id.as_str()),
        )]);
    }

    // Unbounded repeating timer: keeps rescheduling for as long as the
    // fire block exists.
    sheet.add_trigger(TRY_DESTROY_BLOCKS, [
        TriggerEntry::new(Action::update_block()),
        TriggerEntry::new(Action::run_trigger_delayed(TRY_DESTROY_BLOCKS, config.destroy_interval)),
    ]);

    // Spread seeds a fully connected but inactive fire, then re-runs the
    // ignition chain at the target so it activates and spreads onward.
    let spread_target = config.block_state_id(DirectionSet::ALL, false);
    for offset in cube_offsets(config.spread_radius) {
        sheet.add_trigger(SPREAD_FIRE, [
            TriggerEntry::guarded(
                Predicate::all([
                    Predicate::random(config.spread_chance),
                    Predicate::block_at(offset, config.replaceable_tag.as_str()),
                ]),
                Action::replace_block_state_at(offset, spread_target.as_str()),
            ),
            TriggerEntry::new(Action::update_block_at(offset)),
            TriggerEntry::new(Action::run_trigger_at(offset, ON_FIRE_SPREAD)),
        ]);
    }

    sheet
}

/// Two-tier flammability test for the neighbor in `direction`: the
/// explicit flammable tag is authoritative; otherwise the material
/// heuristic tags classify the neighbor, overridden by the
/// definitely-not-flammable set.
fn ignition_guard(config: &FireConfig, direction: Direction) -> Predicate {
    let offset = direction.offset();
    Predicate::any([
        Predicate::block_at(offset, config.flammable_tag.as_str()),
        Predicate::all([
            Predicate::any(
                config.flammable_tags.iter().map(|tag| Predicate::block_at(offset, tag.as_str())),
            ),
            Predicate::not(Predicate::any(
                config
                    .non_flammable_tags
                    .iter()
                    .map(|tag| Predicate::block_at(offset, tag.as_str())),
            )),
        ]),
    ])
}
