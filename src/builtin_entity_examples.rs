use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::iter::FromIterator;
use std::path::Path;
use std::str::FromStr;

use failure::ResultExt;
use log::info;

use crate::errors::*;
use crate::language::Language;
use crate::utils::EntityName;

/// Source of example values for builtin entities such as `snips/datetime`
pub trait BuiltinEntityExamples: Send + Sync {
    fn examples(&self, entity: &str, language: Language) -> Result<Vec<String>>;
}

#[derive(Debug, Default)]
pub struct HashMapBuiltinEntityExamples {
    values: HashMap<(Language, EntityName), Vec<String>>,
}

impl HashMapBuiltinEntityExamples {
    /// Reads a json object mapping language codes to builtin entities examples:
    /// `{"en": {"snips/number": ["two", "12"]}}`
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: HashMap<String, HashMap<EntityName, Vec<String>>> =
            serde_json::from_reader(reader)?;
        let mut values = HashMap::new();
        for (language_code, entities) in raw {
            let language = Language::from_str(&language_code)?;
            for (entity, examples) in entities {
                values.insert((language, entity), examples);
            }
        }
        Ok(Self { values })
    }
}

impl FromIterator<(Language, EntityName, Vec<String>)> for HashMapBuiltinEntityExamples {
    fn from_iter<T: IntoIterator<Item = (Language, EntityName, Vec<String>)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(language, entity, examples)| ((language, entity), examples))
                .collect(),
        }
    }
}

impl BuiltinEntityExamples for HashMapBuiltinEntityExamples {
    fn examples(&self, entity: &str, language: Language) -> Result<Vec<String>> {
        Ok(self
            .values
            .get(&(language, entity.to_string()))
            .cloned()
            .unwrap_or_else(|| vec![]))
    }
}

pub fn load_builtin_entity_examples<P: AsRef<Path>>(
    path: P,
) -> Result<HashMapBuiltinEntityExamples> {
    info!(
        "Loading builtin entity examples ({:?}) ...",
        path.as_ref()
    );
    let file = File::open(path.as_ref()).with_context(|_| {
        format!(
            "Cannot open builtin entity examples file {:?}",
            path.as_ref()
        )
    })?;
    let examples = HashMapBuiltinEntityExamples::from_reader(file).with_context(|_| {
        format!(
            "Cannot read builtin entity examples file {:?}",
            path.as_ref()
        )
    })?;
    info!("Builtin entity examples loaded");
    Ok(examples)
}
