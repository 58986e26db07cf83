//! Fire block compiler pipeline
//!
//! The pipeline orchestrates:
//! 1. Trigger sheet construction (ignition, extinguish, spread, destroy)
//! 2. State-space generation (64 connectivity subsets x 2 activity values)
//! 3. Assembly into a Mod handed read-only to the writer
//!
//! One synchronous, deterministic pass with no shared mutable state: the
//! artifact it emits describes an asynchronous per-block automaton, but
//! nothing here evaluates predicates, samples randomness, or advances
//! ticks. That is the host engine's job.

pub mod config;
pub mod states;
pub mod triggers;

pub use config::FireConfig;
pub use triggers::{ON_FIRE_SPREAD, ON_PLACE, ON_UPDATE, SPREAD_FIRE, TRY_DESTROY_BLOCKS};

use crate::texture::Texture;
use crate::trigger::DefaultEvents;
use crate::writer::Mod;

/// Orchestrates fire block generation: trigger sheet, state table, mod.
pub struct FirePipeline {
    config: FireConfig,
}

impl FirePipeline {
    /// Create a pipeline from configuration.
    pub fn new(config: FireConfig) -> Self {
        Self { config }
    }

    /// The configuration this pipeline compiles.
    pub fn config(&self) -> &FireConfig {
        &self.config
    }

    /// Generate the complete mod definition.
    ///
    /// Identical config and texture always produce a structurally
    /// identical artifact.
    pub fn generate(&self, texture: Texture, defaults: &dyn DefaultEvents) -> Mod {
        let sheet = triggers::build_trigger_sheet(&self.config, defaults);
        let block = states::build_block(&self.config, sheet.string_id(), &texture);

        log::info!(
            "generated block '{}': {} states, {} triggers",
            block.string_id(),
            block.states().len(),
            sheet.len()
        );

        let mut artifact = Mod::new(self.config.mod_id.as_str());
        artifact.add_texture(texture);
        artifact.add_trigger_sheet(sheet);
        artifact.add_block(block);
        artifact
    }
}
