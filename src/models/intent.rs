use serde_derive::Serialize;

use crate::utils::{EntityName, SlotName};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntentJson {
    pub utterances: Vec<UtteranceJson>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UtteranceJson {
    pub data: Vec<ChunkJson>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChunkJson {
    Slot {
        text: Option<String>,
        entity: EntityName,
        slot_name: SlotName,
    },
    Text {
        text: String,
    },
}
