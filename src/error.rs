use thiserror::Error;

pub type BlockResult<T> = Result<T, BlockError>;

#[derive(Error, Debug, Clone)]
pub enum BlockError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid property '{property}' for '{entity}': {reason}")]
    InvalidProperty {
        entity: String,
        property: String,
        reason: String,
    },

    #[error("Invalid color value '{value}' for '{property}': {reason}")]
    InvalidColor {
        property: String,
        value: String,
        reason: String,
    },

    #[error("Missing required property '{property}' for '{entity}'")]
    MissingProperty { entity: String, property: String },

    #[error("Value out of range for '{property}': {value}. Expected range: {range}")]
    ValueOutOfRange {
        property: String,
        value: String,
        range: String,
    },

    #[error("Duplicate id '{id}': entity ids must be unique within a section")]
    DuplicateId { id: String },

    #[error("Too many cards: maximum {max} cards per section")]
    CardLimitExceeded { max: usize },

    #[error("Too many blocks: maximum {max} blocks per section")]
    BlockLimitExceeded { max: usize },

    #[error("Deserialization error: {0}")]
    DeserializationError(String),
}

impl From<serde_json::Error> for BlockError {
    fn from(err: serde_json::Error) -> Self {
        BlockError::DeserializationError(err.to_string())
    }
}
