use thiserror::Error;

/// Errors raised while configuring the scene or wiring its buffers
#[derive(Debug, Error, PartialEq)]
pub enum MorphError {
    #[error("Invalid geometry: {field} must be a positive finite number, got {value}")]
    InvalidGeometry { field: &'static str, value: f32 },

    #[error("Instance buffer for {group} holds {actual} slots but the dataset has {expected} elements")]
    CapacityMismatch {
        group: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Config parse error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, MorphError>;
