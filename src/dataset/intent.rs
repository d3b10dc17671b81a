use std::fs;
use std::path::Path;

use failure::{format_err, ResultExt};
use lazy_static::lazy_static;
use regex::Regex;
use serde_yaml::Value;

use crate::errors::*;
use crate::models::{ChunkJson, IntentJson, UtteranceJson};
use crate::utils::{yaml_scalar_to_string, EntityName, IntentName, SlotName};

pub const INTENT_FILE_PREFIX: &str = "intent_";

lazy_static! {
    static ref SLOT_REGEX: Regex = Regex::new(
        r"\[(?P<slot_name>[^\[\]:]+)(?::(?P<entity>[^\[\]]+))?\](?:\((?P<text>[^()]*)\))?"
    )
    .unwrap();
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextChunk {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlotChunk {
    pub slot_name: SlotName,
    pub entity: EntityName,
    /// `None` until an example value is provided or synthesized
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Chunk {
    Text(TextChunk),
    Slot(SlotChunk),
}

impl Chunk {
    pub fn json(&self) -> ChunkJson {
        match self {
            Chunk::Text(chunk) => ChunkJson::Text {
                text: chunk.text.clone(),
            },
            Chunk::Slot(chunk) => ChunkJson::Slot {
                text: chunk.text.clone(),
                entity: chunk.entity.clone(),
                slot_name: chunk.slot_name.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntentUtterance {
    pub chunks: Vec<Chunk>,
}

impl IntentUtterance {
    pub fn slot_chunks(&self) -> impl Iterator<Item = &SlotChunk> {
        self.chunks.iter().filter_map(|chunk| match chunk {
            Chunk::Slot(slot_chunk) => Some(slot_chunk),
            Chunk::Text(_) => None,
        })
    }

    pub fn slot_chunks_mut(&mut self) -> impl Iterator<Item = &mut SlotChunk> {
        self.chunks.iter_mut().filter_map(|chunk| match chunk {
            Chunk::Slot(slot_chunk) => Some(slot_chunk),
            Chunk::Text(_) => None,
        })
    }

    pub fn json(&self) -> UtteranceJson {
        UtteranceJson {
            data: self.chunks.iter().map(|chunk| chunk.json()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlotDefinition {
    pub name: SlotName,
    pub entity: EntityName,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Intent {
    pub intent_name: IntentName,
    pub slots: Vec<SlotDefinition>,
    pub utterances: Vec<IntentUtterance>,
}

#[derive(Debug, Clone, PartialEq)]
enum RawChunk {
    Text(String),
    Slot {
        slot_name: SlotName,
        entity: Option<EntityName>,
        text: Option<String>,
    },
}

impl Intent {
    /// Builds an intent out of utterances written with the `[slot_name:entity](text)`
    /// syntax. Blank utterances are ignored.
    pub fn parse<S: AsRef<str>>(
        intent_name: IntentName,
        slots: Vec<SlotDefinition>,
        utterances: &[S],
    ) -> Result<Self> {
        let raw_utterances = utterances
            .iter()
            .map(|utterance| utterance.as_ref().trim())
            .filter(|utterance| !utterance.is_empty())
            .map(parse_utterance)
            .collect::<Result<Vec<_>>>()?;
        if raw_utterances.is_empty() {
            return Err(IntentFormatError::MissingUtterances(intent_name).into());
        }

        let mut slots = slots;
        for raw_chunk in raw_utterances.iter().flatten() {
            if let RawChunk::Slot {
                slot_name,
                entity: Some(entity),
                ..
            } = raw_chunk
            {
                if !slots.iter().any(|slot| slot.name == *slot_name) {
                    slots.push(SlotDefinition {
                        name: slot_name.clone(),
                        entity: entity.clone(),
                    });
                }
            }
        }

        let utterances = raw_utterances
            .into_iter()
            .map(|raw_chunks| IntentUtterance {
                chunks: raw_chunks
                    .into_iter()
                    .map(|raw_chunk| resolve_chunk(raw_chunk, &slots))
                    .collect(),
            })
            .collect();

        Ok(Self {
            intent_name,
            slots,
            utterances,
        })
    }

    pub fn from_yaml(doc: &Value) -> Result<Self> {
        if let Some(object_type) = doc.get("type").filter(|t| !t.is_null()) {
            let object_type = yaml_scalar_to_string(object_type).unwrap_or_default();
            if object_type != "intent" {
                return Err(IntentFormatError::WrongType(object_type).into());
            }
        }
        let intent_name = doc
            .get("name")
            .and_then(yaml_scalar_to_string)
            .filter(|name| !name.is_empty())
            .ok_or(IntentFormatError::MissingName)?;

        let slots = match doc.get("slots") {
            None | Some(Value::Null) => vec![],
            Some(Value::Sequence(slots)) => slots
                .iter()
                .map(|slot| {
                    let name = slot.get("name").and_then(yaml_scalar_to_string);
                    let entity = slot.get("entity").and_then(yaml_scalar_to_string);
                    match (name, entity) {
                        (Some(name), Some(entity)) => Ok(SlotDefinition { name, entity }),
                        _ => Err(IntentFormatError::InvalidSlot(intent_name.clone())),
                    }
                })
                .collect::<::std::result::Result<Vec<_>, _>>()?,
            Some(_) => return Err(IntentFormatError::InvalidSlot(intent_name).into()),
        };

        let utterances = doc
            .get("utterances")
            .and_then(Value::as_sequence)
            .ok_or_else(|| IntentFormatError::MissingUtterances(intent_name.clone()))?
            .iter()
            .map(|utterance| {
                yaml_scalar_to_string(utterance).ok_or_else(|| {
                    IntentFormatError::InvalidUtterance {
                        utterance: format!("{:?}", utterance),
                        reason: "utterances must be strings".to_string(),
                    }
                })
            })
            .collect::<::std::result::Result<Vec<_>, _>>()?;

        Self::parse(intent_name, slots, &utterances)
    }

    /// Loads an intent from a text file named `intent_<name>.txt` containing one
    /// utterance per line
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let stem = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| format_err!("Invalid intent file path {:?}", path))?;
        if !stem.starts_with(INTENT_FILE_PREFIX) {
            return Err(DatasetFormatError::InvalidFileName(stem.to_string()).into());
        }
        let intent_name = stem[INTENT_FILE_PREFIX.len()..].to_string();
        let content = fs::read_to_string(path)
            .with_context(|_| format!("Cannot read intent file {:?}", path))?;
        let utterances: Vec<&str> = content.lines().collect();
        Self::parse(intent_name, vec![], &utterances)
    }

    /// Names of the entities referenced by the slots of the utterances, in order of
    /// appearance and possibly repeated
    pub fn entities_names(&self) -> impl Iterator<Item = &str> {
        self.slot_chunks().map(|chunk| &*chunk.entity)
    }

    pub fn slot_chunks(&self) -> impl Iterator<Item = &SlotChunk> {
        self.utterances
            .iter()
            .flat_map(|utterance| utterance.slot_chunks())
    }

    pub fn slot_chunks_mut(&mut self) -> impl Iterator<Item = &mut SlotChunk> {
        self.utterances
            .iter_mut()
            .flat_map(|utterance| utterance.slot_chunks_mut())
    }

    pub fn json(&self) -> IntentJson {
        IntentJson {
            utterances: self
                .utterances
                .iter()
                .map(|utterance| utterance.json())
                .collect(),
        }
    }
}

fn parse_utterance(utterance: &str) -> Result<Vec<RawChunk>> {
    let mut chunks = vec![];
    let mut last_end = 0;
    for captures in SLOT_REGEX.captures_iter(utterance) {
        let slot_match = match captures.get(0) {
            Some(slot_match) => slot_match,
            None => continue,
        };
        push_text_chunk(&mut chunks, utterance, &utterance[last_end..slot_match.start()])?;
        // A slot text may not contain parentheses
        if utterance[slot_match.end()..].starts_with('(') {
            return Err(IntentFormatError::InvalidUtterance {
                utterance: utterance.to_string(),
                reason: "unbalanced slot text parentheses".to_string(),
            }
            .into());
        }
        let slot_name = captures
            .name("slot_name")
            .map(|m| m.as_str().trim())
            .unwrap_or_default();
        if slot_name.is_empty() {
            return Err(IntentFormatError::InvalidUtterance {
                utterance: utterance.to_string(),
                reason: "empty slot name".to_string(),
            }
            .into());
        }
        let entity = captures
            .name("entity")
            .map(|m| m.as_str().trim().to_string())
            .filter(|entity| !entity.is_empty());
        let text = captures
            .name("text")
            .map(|m| m.as_str().to_string())
            .filter(|text| !text.is_empty());
        chunks.push(RawChunk::Slot {
            slot_name: slot_name.to_string(),
            entity,
            text,
        });
        last_end = slot_match.end();
    }
    push_text_chunk(&mut chunks, utterance, &utterance[last_end..])?;
    Ok(chunks)
}

fn push_text_chunk(chunks: &mut Vec<RawChunk>, utterance: &str, text: &str) -> Result<()> {
    if text.contains('[') || text.contains(']') {
        return Err(IntentFormatError::InvalidUtterance {
            utterance: utterance.to_string(),
            reason: "unbalanced slot brackets".to_string(),
        }
        .into());
    }
    if !text.is_empty() {
        chunks.push(RawChunk::Text(text.to_string()));
    }
    Ok(())
}

fn resolve_chunk(raw_chunk: RawChunk, slots: &[SlotDefinition]) -> Chunk {
    match raw_chunk {
        RawChunk::Text(text) => Chunk::Text(TextChunk { text }),
        RawChunk::Slot {
            slot_name,
            entity,
            text,
        } => {
            let entity = entity.unwrap_or_else(|| {
                slots
                    .iter()
                    .find(|slot| slot.name == slot_name)
                    .map(|slot| slot.entity.clone())
                    .unwrap_or_else(|| slot_name.clone())
            });
            Chunk::Slot(SlotChunk {
                slot_name,
                entity,
                text,
            })
        }
    }
}
