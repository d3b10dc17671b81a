use serde_derive::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EntityJson {
    Custom(CustomEntityJson),
    Builtin(BuiltinEntityJson),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomEntityJson {
    pub data: Vec<EntityValueJson>,
    pub use_synonyms: bool,
    pub automatically_extensible: bool,
    pub matching_strictness: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityValueJson {
    pub value: String,
    pub synonyms: Vec<String>,
}

/// Builtin entities are fully described by their name and serialize to `{}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuiltinEntityJson {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_entity_serializes_to_empty_object() {
        let json = serde_json::to_value(EntityJson::Builtin(BuiltinEntityJson {})).unwrap();
        assert_eq!(serde_json::json!({}), json);
    }
}
