//! Named trigger graph and the actions it schedules

pub mod action;
pub mod sheet;

pub use action::Action;
pub use sheet::{Trigger, TriggerEntry, TriggerSheet};

/// Engine-supplied trigger boilerplate spliced into a sheet.
///
/// The host engine ships default event wiring (placement and update
/// plumbing) that is not modeled by this crate; the generation pipeline
/// hands the sheet to an implementation of this trait at the point where
/// that boilerplate belongs.
pub trait DefaultEvents {
    fn apply(&self, sheet: &mut TriggerSheet);
}

/// Injector for hosts that add their boilerplate at load time instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDefaultEvents;

impl DefaultEvents for NoDefaultEvents {
    fn apply(&self, _sheet: &mut TriggerSheet) {}
}
