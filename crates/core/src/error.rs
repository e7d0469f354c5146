use crate::invalid_value::{FieldKind, ViolationKind};

/// Caller-misuse errors raised by the test-data factories.
///
/// These are never produced by the service under test; they mean a scenario
/// asked a factory for something it cannot build.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("\"{violation}\" is not a value but an operation: remove the field instead")]
    UnsupportedOperation { violation: ViolationKind },

    #[error("Unsupported invalid value type for {field_kind}: {violation}")]
    UnsupportedValueKind {
        field_kind: FieldKind,
        violation: ViolationKind,
    },

    #[error("Unknown violation kind: {0}")]
    UnknownViolationKind(String),

    #[error("Unknown character field: {0}")]
    UnknownField(String),
}

/// A required environment variable was absent at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not defined. {hint}")]
    Missing { var: &'static str, hint: &'static str },

    #[error("{var} must be {expected}, got {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}
