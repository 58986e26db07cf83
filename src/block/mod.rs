//! Block definition: the state table and its render models

pub mod model;
pub mod state;

pub use model::{BlockModel, Cuboid, FaceTextures};
pub use state::{state_suffix, BlockState};

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

/// A complete block definition: every state record in insertion order,
/// keyed by its canonical param suffix, all sharing one trigger sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    string_id: String,
    states: Vec<BlockState>,
}

impl Block {
    /// Empty block definition with the given string id (e.g. "fire:fire").
    pub fn new(string_id: impl Into<String>) -> Block {
        Block { string_id: string_id.into(), states: Vec::new() }
    }

    /// Fully qualified block id.
    pub fn string_id(&self) -> &str {
        &self.string_id
    }

    /// Append a state record.
    pub fn push_state(&mut self, state: BlockState) {
        self.states.push(state);
    }

    /// All state records in insertion order.
    pub fn states(&self) -> &[BlockState] {
        &self.states
    }
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut doc = serializer.serialize_struct("Block", 2)?;
        doc.serialize_field("stringId", &self.string_id)?;
        doc.serialize_field("states", &StateMap(&self.states))?;
        doc.end()
    }
}

/// Serializes the state list as a suffix-keyed map in insertion order.
struct StateMap<'a>(&'a [BlockState]);

impl Serialize for StateMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for state in self.0 {
            map.serialize_entry(&state.param_suffix(), state)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::DirectionSet;

    #[test]
    fn test_states_keep_insertion_order() {
        let mut block = Block::new("test:block");
        block.push_state(BlockState::new(DirectionSet::ALL, false, "test:block"));
        block.push_state(BlockState::new(DirectionSet::EMPTY, true, "test:block"));

        assert_eq!(block.states().len(), 2);
        assert_eq!(block.states()[0].connectivity, DirectionSet::ALL);
    }

    #[test]
    fn test_block_document_keys_are_state_suffixes() {
        let mut block = Block::new("test:block");
        block.push_state(BlockState::new(DirectionSet::EMPTY, false, "test:block"));

        let doc = serde_json::to_value(&block).expect("serialize failed");
        assert_eq!(doc["stringId"], "test:block");
        let states = doc["states"].as_object().expect("states not a map");
        assert!(states.contains_key(
            "north=false,east=false,south=false,west=false,up=false,down=false,state=inactive"
        ));
    }
}
