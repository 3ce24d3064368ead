use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read cards file {path}: {source}")]
    CardsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse cards file: {0}")]
    CardsFileParse(#[from] serde_yaml::Error),

    #[error("invalid slot position {position} for axis '{axis}'; must be 1, 2, or 3")]
    InvalidSlot { axis: String, position: u8 },

    #[error("slot position {0} is out of range; must be 1, 2, or 3")]
    SlotOutOfRange(u8),

    #[error("configuration validation failed: {0}")]
    Validation(String),
}
