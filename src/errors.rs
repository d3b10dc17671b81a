use failure::Fail;

#[derive(Debug, Fail)]
pub enum DatasetFormatError {
    #[fail(display = "Invalid 'type' value in YAML file '{}': '{}'", file, doc_type)]
    InvalidDocumentType { file: String, doc_type: String },
    #[fail(
        display = "At least one entity value must be provided for entity '{}'",
        _0
    )]
    MissingEntityValues(String),
    #[fail(
        display = "Filename should start either with 'intent_' or 'entity_' but found: '{}'",
        _0
    )]
    InvalidFileName(String),
    #[fail(display = "Unknown entity referenced in slot: '{}'", _0)]
    UnknownEntity(String),
    #[fail(display = "Entity '{}' is declared more than once", _0)]
    DuplicateEntity(String),
    #[fail(display = "Intent '{}' is declared more than once", _0)]
    DuplicateIntent(String),
}

#[derive(Debug, Fail)]
pub enum IntentFormatError {
    #[fail(display = "Wrong type: '{}'", _0)]
    WrongType(String),
    #[fail(display = "Missing 'name' attribute")]
    MissingName,
    #[fail(display = "Intent '{}' must contain at least one utterance", _0)]
    MissingUtterances(String),
    #[fail(display = "Invalid utterance '{}': {}", utterance, reason)]
    InvalidUtterance { utterance: String, reason: String },
    #[fail(display = "Invalid slot definition in intent '{}'", _0)]
    InvalidSlot(String),
}

#[derive(Debug, Fail)]
pub enum EntityFormatError {
    #[fail(display = "Wrong type: '{}'", _0)]
    WrongType(String),
    #[fail(display = "Missing 'name' attribute")]
    MissingName,
    #[fail(display = "Invalid value in entity '{}'", _0)]
    InvalidValue(String),
    #[fail(display = "Invalid '{}' parameter in entity '{}'", parameter, entity)]
    InvalidParameter { entity: String, parameter: String },
    #[fail(display = "Custom entity names must not start with 'snips/': '{}'", _0)]
    BuiltinEntityFile(String),
}

#[derive(Debug, Fail)]
pub enum LanguageError {
    #[fail(display = "Unknown language: '{}'", _0)]
    Unknown(String),
}

pub type Result<T> = ::std::result::Result<T, ::failure::Error>;
