use std::collections::HashMap;
use std::fs;
use std::iter::FromIterator;
use std::path::{Path, PathBuf};

use crate::builtin_entity_examples::BuiltinEntityExamples;
use crate::errors::*;
use crate::language::Language;

pub fn write_file(dir: &Path, file_name: &str, content: &str) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, content).unwrap();
    path
}

/// Returns the same examples whatever the language
#[derive(Default)]
pub struct MockedBuiltinEntityExamples {
    pub mocked_outputs: HashMap<String, Vec<String>>,
}

impl BuiltinEntityExamples for MockedBuiltinEntityExamples {
    fn examples(&self, entity: &str, _language: Language) -> Result<Vec<String>> {
        Ok(self
            .mocked_outputs
            .get(entity)
            .cloned()
            .unwrap_or_else(|| vec![]))
    }
}

impl FromIterator<(String, Vec<String>)> for MockedBuiltinEntityExamples {
    fn from_iter<T: IntoIterator<Item = (String, Vec<String>)>>(iter: T) -> Self {
        Self {
            mocked_outputs: HashMap::from_iter(iter),
        }
    }
}
