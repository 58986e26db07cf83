//! Trigger sheet: the block's named, tick-scheduled trigger graph
//!
//! Triggers reference each other by name only, which lets the graph
//! contain cycles (a trigger rescheduling itself, directly or through
//! another trigger) without structural ownership cycles. The graph is
//! stored exactly as authored and never unrolled; unknown names are
//! forward references resolved by the host at package time.

use std::collections::HashMap;

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

use super::action::Action;
use crate::predicate::Predicate;

/// One guarded action within a trigger's ordered entry list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriggerEntry {
    #[serde(rename = "if", skip_serializing_if = "Option::is_none")]
    pub guard: Option<Predicate>,
    pub action: Action,
}

impl TriggerEntry {
    /// Unguarded entry, the action always executes.
    pub fn new(action: Action) -> TriggerEntry {
        TriggerEntry { guard: None, action }
    }

    /// Entry whose action executes only when `guard` evaluates true.
    pub fn guarded(guard: Predicate, action: Action) -> TriggerEntry {
        TriggerEntry { guard: Some(guard), action }
    }
}

/// A named trigger: an append-only, ordered list of entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Trigger {
    pub name: String,
    pub entries: Vec<TriggerEntry>,
}

/// The full trigger graph of a block, keyed by trigger name.
///
/// Insertion order of triggers and of entries within a trigger is
/// preserved verbatim. There is no reordering or deduplication API; a
/// duplicate append stays duplicated, last-appended order is
/// authoritative.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerSheet {
    string_id: String,
    triggers: Vec<Trigger>,
    index: HashMap<String, usize>,
}

impl TriggerSheet {
    /// Create an empty sheet with the given string id (e.g. "fire:fire").
    pub fn new(string_id: impl Into<String>) -> TriggerSheet {
        TriggerSheet {
            string_id: string_id.into(),
            triggers: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Fully qualified sheet id.
    pub fn string_id(&self) -> &str {
        &self.string_id
    }

    /// Append entries to the named trigger, creating it if absent.
    pub fn add_trigger(
        &mut self,
        name: &str,
        entries: impl IntoIterator<Item = TriggerEntry>,
    ) {
        let slot = match self.index.get(name) {
            Some(&i) => i,
            None => {
                self.triggers.push(Trigger { name: name.to_string(), entries: Vec::new() });
                let i = self.triggers.len() - 1;
                self.index.insert(name.to_string(), i);
                i
            }
        };
        self.triggers[slot].entries.extend(entries);
    }

    /// Ordered entries of the named trigger, if defined.
    pub fn get(&self, name: &str) -> Option<&[TriggerEntry]> {
        self.index.get(name).map(|&i| self.triggers[i].entries.as_slice())
    }

    /// Triggers in definition order.
    pub fn triggers(&self) -> impl Iterator<Item = &Trigger> {
        self.triggers.iter()
    }

    /// Number of defined triggers.
    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    /// Check if no trigger has been defined yet.
    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }
}

impl Serialize for TriggerSheet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut doc = serializer.serialize_struct("TriggerSheet", 2)?;
        doc.serialize_field("stringId", &self.string_id)?;
        doc.serialize_field("triggers", &TriggerMap(&self.triggers))?;
        doc.end()
    }
}

/// Serializes the trigger list as a name-keyed map in definition order.
struct TriggerMap<'a>(&'a [Trigger]);

impl Serialize for TriggerMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for trigger in self.0 {
            map.serialize_entry(&trigger.name, &trigger.entries)?;
        }
        map.end()
    }
}
