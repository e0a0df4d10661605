// File: src/host.rs
//! The pieces of the game host the decoder talks to.

use crate::core::types::{MessageBackground, MessagePosition, Value, VariableId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The host's key-value variable store.
pub trait VariableStore {
    fn value(&self, id: VariableId) -> Option<Value>;
    fn set_value(&mut self, id: VariableId, value: Value);
}

/// A finished message ready for the host's message window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayMessage {
    /// Lines separated by `\n`, with inline `\c[n]` color tokens.
    pub text: String,
    pub position: MessagePosition,
    pub background: MessageBackground,
}

/// Where decoded messages are shown.
pub trait MessageSink {
    fn show(&mut self, message: DisplayMessage);
}

/// A plain in-memory variable store, serialized as part of a save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variables {
    values: BTreeMap<VariableId, Value>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VariableStore for Variables {
    fn value(&self, id: VariableId) -> Option<Value> {
        self.values.get(&id).cloned()
    }

    fn set_value(&mut self, id: VariableId, value: Value) {
        self.values.insert(id, value);
    }
}

/// Collects shown messages instead of drawing them.
#[derive(Debug, Default)]
pub struct MessageLog {
    pub messages: Vec<DisplayMessage>,
}

impl MessageSink for MessageLog {
    fn show(&mut self, message: DisplayMessage) {
        self.messages.push(message);
    }
}
