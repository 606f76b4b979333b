//! Error types for graphform.

use thiserror::Error;

use crate::host::ClassId;

/// Error type for marshaling operations.
///
/// The taxonomy is closed: every failure this layer can produce is one of
/// these variants. Each names the offending field or argument and carries
/// a stable machine-readable code (see [`BridgeError::code`]) for hosts
/// that route errors by identifier rather than by message. All errors are
/// terminal for the current call and abort it before the solver runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BridgeError {
    /// A mandatory record field was absent.
    #[error("field {field} is required")]
    MissingRequiredField {
        /// Qualified field name, e.g. `f.kind`.
        field: String,
    },

    /// A field or argument had a shape incompatible with its contract.
    #[error("dimensions of {field} must be {expected}, got {got}")]
    DimensionMismatch {
        /// Qualified field name, e.g. `g.a`.
        field: String,
        /// Shape the contract allows.
        expected: String,
        /// Shape actually supplied.
        got: String,
    },

    /// A buffer's class cannot be decoded where a numeric value is
    /// required.
    #[error("unsupported class {class} for {field}")]
    UnsupportedType {
        /// Qualified field or argument name.
        field: String,
        /// Class tag actually supplied.
        class: ClassId,
    },

    /// A numeric selector value does not name any function kind.
    #[error("unknown function kind {code} for {field}")]
    UnknownFunctionKind {
        /// Qualified field name, e.g. `f.kind`.
        field: String,
        /// Selector value actually supplied.
        code: f64,
    },
}

impl BridgeError {
    /// Stable machine-readable identifier for this error.
    pub fn code(&self) -> &'static str {
        match self {
            BridgeError::MissingRequiredField { .. } => "graphform:missingParam",
            BridgeError::DimensionMismatch { .. } => "graphform:dimensionMismatch",
            BridgeError::UnsupportedType { .. } => "graphform:unsupportedType",
            BridgeError::UnknownFunctionKind { .. } => "graphform:unknownFunctionKind",
        }
    }

    /// Name of the offending field or argument.
    pub fn field(&self) -> &str {
        match self {
            BridgeError::MissingRequiredField { field }
            | BridgeError::DimensionMismatch { field, .. }
            | BridgeError::UnsupportedType { field, .. }
            | BridgeError::UnknownFunctionKind { field, .. } => field,
        }
    }
}

/// Result type for marshaling operations.
pub type Result<T> = std::result::Result<T, BridgeError>;
