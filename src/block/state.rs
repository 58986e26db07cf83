//! Block states: connectivity and activity params plus derived properties

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::model::BlockModel;
use crate::direction::{Direction, DirectionSet};

/// Name of the activity param.
pub const PARAM_STATE: &str = "state";
/// Activity param value while the fire is burning.
pub const STATE_ACTIVE: &str = "active";
/// Activity param value before ignition.
pub const STATE_INACTIVE: &str = "inactive";

/// One concrete state of the block: six connectivity flags plus the
/// activity flag, with its derived render model and catalog flags.
///
/// The connectivity flags record contact with a currently flammable
/// neighbor per direction; they are read back by the host through the
/// trigger sheet's param predicates, not baked into per-state logic.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockState {
    pub connectivity: DirectionSet,
    pub active: bool,
    /// RGB light emission, set only on active states.
    pub light: Option<[u8; 3]>,
    pub catalog_hidden: bool,
    pub model: BlockModel,
    /// String id of the trigger sheet shared by every state.
    pub trigger_sheet_id: String,
}

impl BlockState {
    /// State with the given flags, hidden from the catalog, with an empty
    /// transparent model and no light.
    pub fn new(
        connectivity: DirectionSet,
        active: bool,
        trigger_sheet_id: impl Into<String>,
    ) -> BlockState {
        BlockState {
            connectivity,
            active,
            light: None,
            catalog_hidden: true,
            model: BlockModel::new(true),
            trigger_sheet_id: trigger_sheet_id.into(),
        }
    }

    /// Params in canonical order: the six directions, then the activity
    /// flag.
    pub fn params(&self) -> Vec<(&'static str, &'static str)> {
        let mut params: Vec<(&'static str, &'static str)> = Direction::CARDINALS
            .iter()
            .map(|d| {
                let value = if self.connectivity.contains(*d) { "true" } else { "false" };
                (d.name(), value)
            })
            .collect();
        let activity = if self.active { STATE_ACTIVE } else { STATE_INACTIVE };
        params.push((PARAM_STATE, activity));
        params
    }

    /// Canonical "param=value,..." suffix identifying this state within
    /// its block.
    pub fn param_suffix(&self) -> String {
        state_suffix(self.connectivity, self.active)
    }
}

/// Canonical param suffix for a connectivity/activity pair, e.g.
/// "north=true,east=false,south=false,west=false,up=false,down=true,state=inactive".
pub fn state_suffix(connectivity: DirectionSet, active: bool) -> String {
    let mut parts: Vec<String> = Direction::CARDINALS
        .iter()
        .map(|d| format!("{}={}", d.name(), connectivity.contains(*d)))
        .collect();
    parts.push(format!("{}={}", PARAM_STATE, if active { STATE_ACTIVE } else { STATE_INACTIVE }));
    parts.join(",")
}

impl Serialize for BlockState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("params", &ParamMap(self))?;
        map.serialize_entry("model", &self.model)?;
        if let Some(light) = &self.light {
            map.serialize_entry("light", light)?;
        }
        map.serialize_entry("catalogHidden", &self.catalog_hidden)?;
        map.serialize_entry("triggerSheetId", &self.trigger_sheet_id)?;
        map.end()
    }
}

/// Serializes the param list as a map in canonical order.
struct ParamMap<'a>(&'a BlockState);

impl Serialize for ParamMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let params = self.0.params();
        let mut map = serializer.serialize_map(Some(params.len()))?;
        for (param, value) in params {
            map.serialize_entry(param, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_suffix_is_canonical() {
        let connectivity = DirectionSet::only(Direction::North).with(Direction::Down);
        assert_eq!(
            state_suffix(connectivity, false),
            "north=true,east=false,south=false,west=false,up=false,down=true,state=inactive"
        );
        assert_eq!(
            state_suffix(DirectionSet::EMPTY, true),
            "north=false,east=false,south=false,west=false,up=false,down=false,state=active"
        );
    }

    #[test]
    fn test_params_match_suffix() {
        let state = BlockState::new(DirectionSet::only(Direction::Up), true, "test:block");
        let joined: Vec<String> = state
            .params()
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        assert_eq!(joined.join(","), state.param_suffix());
    }

    #[test]
    fn test_state_document_shape() {
        let mut state = BlockState::new(DirectionSet::EMPTY, true, "test:block");
        state.light = Some([15, 12, 6]);

        let doc = serde_json::to_value(&state).expect("serialize failed");
        assert_eq!(
            doc,
            json!({
                "params": {
                    "north": "false", "east": "false", "south": "false",
                    "west": "false", "up": "false", "down": "false",
                    "state": "active"
                },
                "model": { "transparent": true, "cuboids": [] },
                "light": [15, 12, 6],
                "catalogHidden": true,
                "triggerSheetId": "test:block"
            })
        );
    }

    #[test]
    fn test_inactive_state_omits_light() {
        let state = BlockState::new(DirectionSet::EMPTY, false, "test:block");
        let doc = serde_json::to_value(&state).expect("serialize failed");
        assert!(doc.get("light").is_none());
    }
}
