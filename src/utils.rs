use std::collections::HashSet;
use std::hash::Hash;

use serde_yaml::Value;

pub type IntentName = String;
pub type SlotName = String;
pub type EntityName = String;

pub const BUILTIN_ENTITY_PREFIX: &str = "snips/";

pub fn is_builtin_entity(entity: &str) -> bool {
    entity.starts_with(BUILTIN_ENTITY_PREFIX)
}

/// Renders a yaml scalar as a string, numbers and booleans included
pub fn yaml_scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Appends the items of `iter` which are not already present in `values`,
/// keeping the order in which they are first seen.
pub fn extend_unique<T, I>(values: &mut Vec<T>, seen: &mut HashSet<T>, iter: I)
where
    T: Clone + Eq + Hash,
    I: IntoIterator<Item = T>,
{
    for item in iter {
        if seen.insert(item.clone()) {
            values.push(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_builtin_entity() {
        assert!(is_builtin_entity("snips/datetime"));
        assert!(!is_builtin_entity("city"));
        assert!(!is_builtin_entity("snipsdatetime"));
    }

    #[test]
    fn test_extend_unique_keeps_first_seen_order() {
        // Given
        let mut values = vec!["b".to_string()];
        let mut seen: HashSet<String> = values.iter().cloned().collect();

        // When
        extend_unique(
            &mut values,
            &mut seen,
            vec!["a", "b", "c", "a"].into_iter().map(|s| s.to_string()),
        );

        // Then
        assert_eq!(vec!["b", "a", "c"], values);
    }
}
