mod builtin_entity_examples;
mod dataset;
pub mod errors;
mod language;
pub mod models;
#[cfg(test)]
mod testutils;
mod utils;

pub use crate::builtin_entity_examples::{
    load_builtin_entity_examples, BuiltinEntityExamples, HashMapBuiltinEntityExamples,
};
pub use crate::dataset::*;
pub use crate::errors::*;
pub use crate::language::Language;
pub use crate::models::*;
pub use crate::utils::{is_builtin_entity, EntityName, IntentName, SlotName, BUILTIN_ENTITY_PREFIX};
