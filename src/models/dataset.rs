use std::collections::HashMap;

use serde_derive::Serialize;

use crate::language::Language;
use crate::models::entity::EntityJson;
use crate::models::intent::IntentJson;
use crate::utils::{EntityName, IntentName};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetJson {
    pub language: Language,
    pub intents: HashMap<IntentName, IntentJson>,
    pub entities: HashMap<EntityName, EntityJson>,
}
