use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use failure::ResultExt;
use log::{debug, info};
use serde::Deserialize;
use serde_yaml::Value;

use crate::dataset::entity::{Entity, ENTITY_FILE_PREFIX};
use crate::dataset::intent::{Intent, INTENT_FILE_PREFIX};
use crate::errors::*;
use crate::utils::yaml_scalar_to_string;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentType {
    Entity,
    Intent,
}

/// Parses the YAML documents contained in the given files, in file order and then
/// in document order, and splits them into intents and entities
pub fn load_yaml_files<P: AsRef<Path>>(paths: &[P]) -> Result<(Vec<Intent>, Vec<Entity>)> {
    let mut intents = vec![];
    let mut entities = vec![];
    for path in paths {
        let path = path.as_ref();
        info!("Loading dataset file {:?} ...", path);
        let file = File::open(path)
            .with_context(|_| format!("Cannot open dataset file {:?}", path))?;
        for document in serde_yaml::Deserializer::from_reader(BufReader::new(file)) {
            let doc = Value::deserialize(document)
                .with_context(|_| format!("Invalid YAML in dataset file {:?}", path))?;
            if doc.is_null() {
                debug!("Skipping empty YAML document in {:?}", path);
                continue;
            }
            match document_type(&doc, path)? {
                DocumentType::Entity => entities.push(Entity::from_yaml(&doc)?),
                DocumentType::Intent => intents.push(Intent::from_yaml(&doc)?),
            }
        }
    }
    info!(
        "Loaded {} intent(s) and {} entity(ies)",
        intents.len(),
        entities.len()
    );
    Ok((intents, entities))
}

/// Loads intents and entities from `intent_<name>.txt` and `entity_<name>.txt` files
pub fn load_text_files<P: AsRef<Path>>(paths: &[P]) -> Result<(Vec<Intent>, Vec<Entity>)> {
    let mut intents = vec![];
    let mut entities = vec![];
    for path in paths {
        let path = path.as_ref();
        let stem = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default();
        info!("Loading dataset file {:?} ...", path);
        if stem.starts_with(INTENT_FILE_PREFIX) {
            intents.push(Intent::from_file(path)?);
        } else if stem.starts_with(ENTITY_FILE_PREFIX) {
            entities.push(Entity::from_file(path)?);
        } else {
            return Err(DatasetFormatError::InvalidFileName(stem.to_string()).into());
        }
    }
    Ok((intents, entities))
}

fn document_type(doc: &Value, path: &Path) -> Result<DocumentType> {
    let doc_type = doc.get("type");
    match doc_type.and_then(Value::as_str) {
        Some("entity") => Ok(DocumentType::Entity),
        Some("intent") => Ok(DocumentType::Intent),
        _ => Err(DatasetFormatError::InvalidDocumentType {
            file: path.display().to_string(),
            doc_type: describe_type_value(doc_type),
        }
        .into()),
    }
}

fn describe_type_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "null".to_string(),
        Some(value) => yaml_scalar_to_string(value).unwrap_or_else(|| format!("{:?}", value)),
    }
}
