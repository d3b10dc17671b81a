use std::collections::{HashMap, HashSet};
use std::path::Path;

use log::{debug, info};

use crate::builtin_entity_examples::BuiltinEntityExamples;
use crate::dataset::entity::Entity;
use crate::dataset::intent::Intent;
use crate::dataset::loading::{load_text_files, load_yaml_files};
use crate::dataset::value_pool::CyclicValuePool;
use crate::errors::*;
use crate::language::Language;
use crate::models::DatasetJson;
use crate::utils::{extend_unique, EntityName};

/// Training data of an NLU engine for a single language
///
/// Once built, every entity referenced by an intent slot is part of `entities`, and
/// every slot chunk carries a text value.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub language: Language,
    pub intents: Vec<Intent>,
    pub entities: Vec<Entity>,
}

impl Dataset {
    pub fn new(
        language: Language,
        intents: Vec<Intent>,
        entities: Vec<Entity>,
        builtin_entity_examples: &dyn BuiltinEntityExamples,
    ) -> Result<Self> {
        let mut dataset = Self {
            language,
            intents,
            entities,
        };
        dataset.check_unique_names()?;
        dataset.add_missing_entities();
        dataset.ensure_entity_values(builtin_entity_examples)?;
        Ok(dataset)
    }

    /// Builds a dataset out of YAML files, each of which may hold several intent and
    /// entity documents
    pub fn from_yaml_files<P: AsRef<Path>>(
        language: Language,
        paths: &[P],
        builtin_entity_examples: &dyn BuiltinEntityExamples,
    ) -> Result<Self> {
        let (intents, entities) = load_yaml_files(paths)?;
        Self::new(language, intents, entities, builtin_entity_examples)
    }

    /// Builds a dataset out of `intent_<name>.txt` and `entity_<name>.txt` files
    pub fn from_files<P: AsRef<Path>>(
        language: Language,
        paths: &[P],
        builtin_entity_examples: &dyn BuiltinEntityExamples,
    ) -> Result<Self> {
        let (intents, entities) = load_text_files(paths)?;
        Self::new(language, intents, entities, builtin_entity_examples)
    }

    pub fn json(&self) -> DatasetJson {
        DatasetJson {
            language: self.language,
            intents: self
                .intents
                .iter()
                .map(|intent| (intent.intent_name.clone(), intent.json()))
                .collect(),
            entities: self
                .entities
                .iter()
                .map(|entity| (entity.name.clone(), entity.json()))
                .collect(),
        }
    }

    pub fn to_json_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self.json())?)
    }

    fn check_unique_names(&self) -> Result<()> {
        let mut entity_names = HashSet::new();
        if let Some(entity) = self
            .entities
            .iter()
            .find(|entity| !entity_names.insert(&*entity.name))
        {
            return Err(DatasetFormatError::DuplicateEntity(entity.name.clone()).into());
        }
        let mut intent_names = HashSet::new();
        if let Some(intent) = self
            .intents
            .iter()
            .find(|intent| !intent_names.insert(&*intent.intent_name))
        {
            return Err(DatasetFormatError::DuplicateIntent(intent.intent_name.clone()).into());
        }
        Ok(())
    }

    fn add_missing_entities(&mut self) {
        let mut entity_names: HashSet<EntityName> =
            self.entities.iter().map(|entity| entity.name.clone()).collect();
        let mut nb_added = 0;
        for intent in &self.intents {
            for entity_name in intent.entities_names() {
                if entity_names.insert(entity_name.to_string()) {
                    debug!("Adding missing entity '{}'", entity_name);
                    self.entities.push(Entity::new(entity_name.to_string()));
                    nb_added += 1;
                }
            }
        }
        if nb_added > 0 {
            info!("Added {} entity(ies) referenced only in utterances", nb_added);
        }
    }

    fn ensure_entity_values(
        &mut self,
        builtin_entity_examples: &dyn BuiltinEntityExamples,
    ) -> Result<()> {
        let mut value_pools = self.entity_value_pools(builtin_entity_examples)?;
        let mut nb_filled = 0;
        for chunk in self
            .intents
            .iter_mut()
            .flat_map(|intent| intent.slot_chunks_mut())
        {
            if chunk.text.is_some() {
                continue;
            }
            let pool = value_pools
                .get_mut(&chunk.entity)
                .ok_or_else(|| DatasetFormatError::UnknownEntity(chunk.entity.clone()))?;
            let value = pool
                .next_value()
                .ok_or_else(|| DatasetFormatError::MissingEntityValues(chunk.entity.clone()))?;
            chunk.text = Some(value);
            nb_filled += 1;
        }
        info!("Filled {} slot(s) with entity values", nb_filled);
        Ok(())
    }

    fn entity_value_pools(
        &self,
        builtin_entity_examples: &dyn BuiltinEntityExamples,
    ) -> Result<HashMap<EntityName, CyclicValuePool>> {
        self.entities
            .iter()
            .map(|entity| {
                let values = self.entity_values(entity, builtin_entity_examples)?;
                Ok((entity.name.clone(), CyclicValuePool::new(values)))
            })
            .collect()
    }

    fn entity_values(
        &self,
        entity: &Entity,
        builtin_entity_examples: &dyn BuiltinEntityExamples,
    ) -> Result<Vec<String>> {
        if entity.is_builtin() {
            return builtin_entity_examples.examples(&entity.name, self.language);
        }
        // Synonyms are not used as slot values, only the reference value of each
        // declared entity value is
        let mut values: Vec<String> = entity
            .utterances
            .iter()
            .map(|utterance| utterance.value.clone())
            .collect();
        let mut values_set: HashSet<String> = values.iter().cloned().collect();
        let slot_values = self
            .intents
            .iter()
            .flat_map(|intent| intent.slot_chunks())
            .filter(|chunk| chunk.entity == entity.name)
            .filter_map(|chunk| chunk.text.clone());
        extend_unique(&mut values, &mut values_set, slot_values);
        Ok(values)
    }
}
