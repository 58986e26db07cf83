//! Actions executed when a trigger entry fires

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::types::IVec3;

/// A state mutation or scheduling instruction executed when a trigger
/// entry's guard passes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    SetParams(SetParams),
    ReplaceBlockState(ReplaceBlockState),
    RunTrigger(RunTrigger),
    UpdateBlock(UpdateBlock),
}

/// Write one or more state params on the block the trigger fired on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetParams {
    pub params: BTreeMap<String, String>,
}

/// Swap the block state at an optional relative offset for another state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplaceBlockState {
    #[serde(rename = "blockStateId")]
    pub block_state_id: String,
    #[serde(rename = "xOff", skip_serializing_if = "Option::is_none")]
    pub x_off: Option<i32>,
    #[serde(rename = "yOff", skip_serializing_if = "Option::is_none")]
    pub y_off: Option<i32>,
    #[serde(rename = "zOff", skip_serializing_if = "Option::is_none")]
    pub z_off: Option<i32>,
}

/// Schedule another trigger by name, optionally offset and tick-delayed.
///
/// The name is symbolic: it may refer to a trigger defined later, or to
/// the running trigger itself, forming cycles the host resolves at load
/// time. Once scheduled, a delayed run fires unless the host removes the
/// block first; no cancellation primitive exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunTrigger {
    #[serde(rename = "triggerId")]
    pub trigger_id: String,
    #[serde(rename = "xOff", skip_serializing_if = "Option::is_none")]
    pub x_off: Option<i32>,
    #[serde(rename = "yOff", skip_serializing_if = "Option::is_none")]
    pub y_off: Option<i32>,
    #[serde(rename = "zOff", skip_serializing_if = "Option::is_none")]
    pub z_off: Option<i32>,
    #[serde(rename = "tickDelay", skip_serializing_if = "Option::is_none")]
    pub tick_delay: Option<u32>,
}

/// Force a block update at an optional relative offset.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateBlock {
    #[serde(rename = "xOff", skip_serializing_if = "Option::is_none")]
    pub x_off: Option<i32>,
    #[serde(rename = "yOff", skip_serializing_if = "Option::is_none")]
    pub y_off: Option<i32>,
    #[serde(rename = "zOff", skip_serializing_if = "Option::is_none")]
    pub z_off: Option<i32>,
}

impl Action {
    /// Set a single state param.
    pub fn set_param(param: impl Into<String>, value: impl Into<String>) -> Action {
        Action::set_params([(param, value)])
    }

    /// Set several state params at once.
    pub fn set_params<K, V>(params: impl IntoIterator<Item = (K, V)>) -> Action
    where
        K: Into<String>,
        V: Into<String>,
    {
        Action::SetParams(SetParams {
            params: params.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        })
    }

    /// Replace the source block itself.
    pub fn replace_block_state(block_state_id: impl Into<String>) -> Action {
        Action::ReplaceBlockState(ReplaceBlockState {
            block_state_id: block_state_id.into(),
            x_off: None,
            y_off: None,
            z_off: None,
        })
    }

    /// Replace the block at a relative offset.
    pub fn replace_block_state_at(offset: IVec3, block_state_id: impl Into<String>) -> Action {
        Action::ReplaceBlockState(ReplaceBlockState {
            block_state_id: block_state_id.into(),
            x_off: Some(offset.x),
            y_off: Some(offset.y),
            z_off: Some(offset.z),
        })
    }

    /// Run the named trigger on the source block, same tick.
    pub fn run_trigger(trigger_id: impl Into<String>) -> Action {
        Action::RunTrigger(RunTrigger {
            trigger_id: trigger_id.into(),
            x_off: None,
            y_off: None,
            z_off: None,
            tick_delay: None,
        })
    }

    /// Run the named trigger on the source block after a tick delay.
    pub fn run_trigger_delayed(trigger_id: impl Into<String>, ticks: u32) -> Action {
        Action::RunTrigger(RunTrigger {
            trigger_id: trigger_id.into(),
            x_off: None,
            y_off: None,
            z_off: None,
            tick_delay: Some(ticks),
        })
    }

    /// Run the named trigger on the block at a relative offset.
    pub fn run_trigger_at(offset: IVec3, trigger_id: impl Into<String>) -> Action {
        Action::RunTrigger(RunTrigger {
            trigger_id: trigger_id.into(),
            x_off: Some(offset.x),
            y_off: Some(offset.y),
            z_off: Some(offset.z),
            tick_delay: None,
        })
    }

    /// Update the source block.
    pub fn update_block() -> Action {
        Action::UpdateBlock(UpdateBlock::default())
    }

    /// Update the block at a relative offset.
    pub fn update_block_at(offset: IVec3) -> Action {
        Action::UpdateBlock(UpdateBlock {
            x_off: Some(offset.x),
            y_off: Some(offset.y),
            z_off: Some(offset.z),
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_set_params_document_shape() {
        let action = Action::set_param("north", "true");
        let doc = serde_json::to_value(&action).expect("serialize failed");
        assert_eq!(doc, json!({ "set_params": { "params": { "north": "true" } } }));
    }

    #[test]
    fn test_replace_document_shape() {
        let plain = Action::replace_block_state("base:air[default]");
        let doc = serde_json::to_value(&plain).expect("serialize failed");
        assert_eq!(
            doc,
            json!({ "replace_block_state": { "blockStateId": "base:air[default]" } })
        );

        let offset = Action::replace_block_state_at(IVec3::new(0, -1, 0), "base:air[default]");
        let doc = serde_json::to_value(&offset).expect("serialize failed");
        assert_eq!(
            doc,
            json!({
                "replace_block_state": {
                    "blockStateId": "base:air[default]",
                    "xOff": 0, "yOff": -1, "zOff": 0
                }
            })
        );
    }

    #[test]
    fn test_run_trigger_document_shape() {
        let delayed = Action::run_trigger_delayed("spreadFire", 40);
        let doc = serde_json::to_value(&delayed).expect("serialize failed");
        assert_eq!(
            doc,
            json!({ "run_trigger": { "triggerId": "spreadFire", "tickDelay": 40 } })
        );

        let offset = Action::run_trigger_at(IVec3::new(2, 0, -2), "onFireSpread");
        let doc = serde_json::to_value(&offset).expect("serialize failed");
        assert_eq!(
            doc,
            json!({
                "run_trigger": { "triggerId": "onFireSpread", "xOff": 2, "yOff": 0, "zOff": -2 }
            })
        );
    }

    #[test]
    fn test_update_block_document_shape() {
        let plain = Action::update_block();
        let doc = serde_json::to_value(&plain).expect("serialize failed");
        assert_eq!(doc, json!({ "update_block": {} }));
    }
}
