use std::fs::File;
use std::io::Read;
use std::path::Path;

use failure::{format_err, ResultExt};
use serde_yaml::Value;

use crate::errors::*;
use crate::models::{BuiltinEntityJson, CustomEntityJson, EntityJson, EntityValueJson};
use crate::utils::{is_builtin_entity, yaml_scalar_to_string, EntityName};

pub const ENTITY_FILE_PREFIX: &str = "entity_";

/// A declared entity value along with its alternative spellings
#[derive(Debug, Clone, PartialEq)]
pub struct EntityUtterance {
    pub value: String,
    pub synonyms: Vec<String>,
}

impl EntityUtterance {
    pub fn new(value: String) -> Self {
        Self {
            value,
            synonyms: vec![],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub name: EntityName,
    pub utterances: Vec<EntityUtterance>,
    pub automatically_extensible: bool,
    pub use_synonyms: bool,
    pub matching_strictness: f64,
}

impl Entity {
    pub fn new(name: EntityName) -> Self {
        Self {
            name,
            utterances: vec![],
            automatically_extensible: true,
            use_synonyms: true,
            matching_strictness: 1.0,
        }
    }

    pub fn is_builtin(&self) -> bool {
        is_builtin_entity(&self.name)
    }

    pub fn from_yaml(doc: &Value) -> Result<Self> {
        if let Some(object_type) = doc.get("type").filter(|t| !t.is_null()) {
            let object_type = yaml_scalar_to_string(object_type).unwrap_or_default();
            if object_type != "entity" {
                return Err(EntityFormatError::WrongType(object_type).into());
            }
        }
        let name = doc
            .get("name")
            .and_then(yaml_scalar_to_string)
            .filter(|name| !name.is_empty())
            .ok_or(EntityFormatError::MissingName)?;

        let mut entity = Entity::new(name);
        entity.utterances = match doc.get("values") {
            None | Some(Value::Null) => vec![],
            Some(Value::Sequence(values)) => values
                .iter()
                .map(|value| parse_entity_value(&entity.name, value))
                .collect::<Result<Vec<_>>>()?,
            Some(_) => return Err(EntityFormatError::InvalidValue(entity.name.clone()).into()),
        };
        if let Some(extensible) = doc.get("automatically_extensible") {
            entity.automatically_extensible =
                parse_bool_parameter(&entity.name, "automatically_extensible", extensible)?;
        }
        if let Some(use_synonyms) = doc.get("use_synonyms") {
            entity.use_synonyms =
                parse_bool_parameter(&entity.name, "use_synonyms", use_synonyms)?;
        }
        if let Some(strictness) = doc.get("matching_strictness") {
            entity.matching_strictness = strictness
                .as_f64()
                .filter(|strictness| *strictness > 0.0 && *strictness <= 1.0)
                .ok_or_else(|| EntityFormatError::InvalidParameter {
                    entity: entity.name.clone(),
                    parameter: "matching_strictness".to_string(),
                })?;
        }
        Ok(entity)
    }

    /// Loads a custom entity from a csv file named `entity_<name>.txt`, where each
    /// row holds a value followed by its synonyms
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let stem = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| format_err!("Invalid entity file path {:?}", path))?;
        if !stem.starts_with(ENTITY_FILE_PREFIX) {
            return Err(DatasetFormatError::InvalidFileName(stem.to_string()).into());
        }
        let name = stem[ENTITY_FILE_PREFIX.len()..].to_string();
        if is_builtin_entity(&name) {
            return Err(EntityFormatError::BuiltinEntityFile(name).into());
        }
        let file =
            File::open(path).with_context(|_| format!("Cannot open entity file {:?}", path))?;
        let utterances = read_entity_utterances(file)
            .with_context(|_| format!("Cannot read entity file {:?}", path))?;
        let mut entity = Entity::new(name);
        entity.utterances = utterances;
        Ok(entity)
    }

    pub fn json(&self) -> EntityJson {
        if self.is_builtin() {
            return EntityJson::Builtin(BuiltinEntityJson {});
        }
        EntityJson::Custom(CustomEntityJson {
            data: self
                .utterances
                .iter()
                .map(|utterance| EntityValueJson {
                    value: utterance.value.clone(),
                    synonyms: utterance.synonyms.clone(),
                })
                .collect(),
            use_synonyms: self.use_synonyms,
            automatically_extensible: self.automatically_extensible,
            matching_strictness: self.matching_strictness,
        })
    }
}

fn parse_entity_value(entity: &str, value: &Value) -> Result<EntityUtterance> {
    if let Some(value) = yaml_scalar_to_string(value) {
        return Ok(EntityUtterance::new(value));
    }
    let variations = value
        .as_sequence()
        .map(|variations| {
            variations
                .iter()
                .map(yaml_scalar_to_string)
                .collect::<Option<Vec<_>>>()
        })
        .and_then(|variations| variations)
        .ok_or_else(|| EntityFormatError::InvalidValue(entity.to_string()))?;
    let mut variations = variations.into_iter();
    let value = variations
        .next()
        .ok_or_else(|| EntityFormatError::InvalidValue(entity.to_string()))?;
    Ok(EntityUtterance {
        value,
        synonyms: variations.collect(),
    })
}

fn parse_bool_parameter(entity: &str, parameter: &str, value: &Value) -> Result<bool> {
    Ok(value
        .as_bool()
        .ok_or_else(|| EntityFormatError::InvalidParameter {
            entity: entity.to_string(),
            parameter: parameter.to_string(),
        })?)
}

fn read_entity_utterances<R: Read>(reader: R) -> Result<Vec<EntityUtterance>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .flexible(true)
        .has_headers(false)
        .from_reader(reader);

    let mut utterances = vec![];
    for record in csv_reader.records() {
        let elements = record?;
        let mut variations = elements
            .iter()
            .map(|element| element.trim())
            .filter(|element| !element.is_empty())
            .map(|element| element.to_string());
        if let Some(value) = variations.next() {
            utterances.push(EntityUtterance {
                value,
                synonyms: variations.collect(),
            });
        }
    }
    Ok(utterances)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_from_yaml() {
        // Given
        let doc: Value = serde_yaml::from_str(
            r#"
type: entity
name: city
automatically_extensible: false
matching_strictness: 0.8
values:
  - london
  - [new york, big apple]
  - [paris, city of lights]
"#,
        )
        .unwrap();

        // When
        let entity = Entity::from_yaml(&doc).unwrap();

        // Then
        let expected_utterances = vec![
            EntityUtterance::new("london".to_string()),
            EntityUtterance {
                value: "new york".to_string(),
                synonyms: vec!["big apple".to_string()],
            },
            EntityUtterance {
                value: "paris".to_string(),
                synonyms: vec!["city of lights".to_string()],
            },
        ];
        assert_eq!("city", entity.name);
        assert_eq!(expected_utterances, entity.utterances);
        assert!(!entity.automatically_extensible);
        assert!(entity.use_synonyms);
        assert_eq!(0.8, entity.matching_strictness);
        assert!(!entity.is_builtin());
    }

    #[test]
    fn test_from_yaml_should_fail_with_invalid_parameters() {
        // Given
        let docs = vec![
            "type: intent\nname: city",
            "type: entity\nvalues: [paris]",
            "type: entity\nname: city\nvalues: [[]]",
            "type: entity\nname: city\nuse_synonyms: maybe",
            "type: entity\nname: city\nmatching_strictness: 1.5",
        ];

        for doc in docs {
            // When
            let doc: Value = serde_yaml::from_str(doc).unwrap();
            let result = Entity::from_yaml(&doc);

            // Then
            let error = result.unwrap_err();
            assert!(
                error.downcast_ref::<EntityFormatError>().is_some(),
                "unexpected error: {}",
                error
            );
        }
    }

    #[test]
    fn test_from_file() {
        // Given
        let tdir = tempdir().unwrap();
        let path = tdir.path().join("entity_color.txt");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "red,crimson, scarlet").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "\"blue, navy\"").unwrap();

        // When
        let entity = Entity::from_file(&path).unwrap();

        // Then
        let expected_utterances = vec![
            EntityUtterance {
                value: "red".to_string(),
                synonyms: vec!["crimson".to_string(), "scarlet".to_string()],
            },
            EntityUtterance::new("blue, navy".to_string()),
        ];
        assert_eq!("color", entity.name);
        assert_eq!(expected_utterances, entity.utterances);
    }

    #[test]
    fn test_builtin_entity_json_is_empty() {
        // When
        let json = serde_json::to_value(Entity::new("snips/number".to_string()).json()).unwrap();

        // Then
        assert_eq!(serde_json::json!({}), json);
    }

    #[test]
    fn test_custom_entity_json() {
        // Given
        let mut entity = Entity::new("color".to_string());
        entity.utterances = vec![EntityUtterance {
            value: "red".to_string(),
            synonyms: vec!["crimson".to_string()],
        }];

        // When
        let json = serde_json::to_value(entity.json()).unwrap();

        // Then
        let expected_json = serde_json::json!({
            "data": [{"value": "red", "synonyms": ["crimson"]}],
            "use_synonyms": true,
            "automatically_extensible": true,
            "matching_strictness": 1.0
        });
        assert_eq!(expected_json, json);
    }
}
