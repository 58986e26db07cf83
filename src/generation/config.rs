//! Fire generation configuration

use crate::block::state_suffix;
use crate::direction::DirectionSet;

/// Configuration for the fire block compiler.
///
/// `Default` reproduces the shipped fire block exactly. The tag lists
/// must stay non-empty: the ignition guard builds a disjunction over
/// each list, and a zero-term disjunction is rejected at build time.
#[derive(Clone, Debug)]
pub struct FireConfig {
    /// Mod id the block and trigger sheet are registered under.
    pub mod_id: String,
    /// Block name within the mod.
    pub block_name: String,
    /// Explicit flammability tag, authoritative when present.
    pub flammable_tag: String,
    /// Material-heuristic tags that classify a neighbor as flammable.
    pub flammable_tags: Vec<String>,
    /// Tags overriding the heuristic as definitely not flammable.
    pub non_flammable_tags: Vec<String>,
    /// Tag a target block must carry for fire to spread into it.
    pub replaceable_tag: String,
    /// State the fire collapses to when it extinguishes, and that it
    /// leaves behind when destroying a neighbor.
    pub inert_state_id: String,
    /// Radius of the spread neighborhood cube.
    pub spread_radius: i32,
    /// Per-offset spread probability.
    pub spread_chance: f64,
    /// Per-direction destroy probability.
    pub destroy_chance: f64,
    /// Ticks between ignition and the first spread attempt.
    pub spread_delay: u32,
    /// Ticks between ignition and the first destroy attempt.
    pub destroy_delay: u32,
    /// Ticks between destroy attempts thereafter.
    pub destroy_interval: u32,
    /// RGB light emitted by active states.
    pub active_light: [u8; 3],
}

impl Default for FireConfig {
    fn default() -> Self {
        Self {
            mod_id: "fire".to_string(),
            block_name: "fire".to_string(),
            flammable_tag: "flammable".to_string(),
            flammable_tags: vec!["tool_axe_effective".to_string()],
            non_flammable_tags: vec![
                "tool_pickaxe_effective".to_string(),
                "tool_shovel_effective".to_string(),
            ],
            replaceable_tag: "replaceable".to_string(),
            inert_state_id: "base:air[default]".to_string(),
            spread_radius: 2,
            spread_chance: 0.2,
            destroy_chance: 0.1,
            spread_delay: 40,
            destroy_delay: 20,
            destroy_interval: 5,
            active_light: [15, 12, 6],
        }
    }
}

impl FireConfig {
    /// Fully qualified block id, e.g. "fire:fire".
    pub fn block_id(&self) -> String {
        format!("{}:{}", self.mod_id, self.block_name)
    }

    /// Fully qualified id of one concrete block state, e.g.
    /// "fire:fire[north=true,...,state=inactive]".
    pub fn block_state_id(&self, connectivity: DirectionSet, active: bool) -> String {
        format!("{}[{}]", self.block_id(), state_suffix(connectivity, active))
    }
}
