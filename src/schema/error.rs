//! Error types raised while declaring schemas and constructing records.

use thiserror::Error;

/// Errors raised while building schema descriptors or assembling a record
/// whose required fields were never supplied.
///
/// Descriptor-level variants are fatal at startup; callers are expected to
/// abort initialization rather than retry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaConstructionError {
    /// A required field was omitted from a record.
    #[error("{entity}.{field} is required")]
    MissingRequiredField {
        /// Entity kind being constructed.
        entity: &'static str,
        /// Logical field name that was omitted.
        field: &'static str,
    },

    /// An entity declared no fields at all.
    #[error("entity {0} declares no fields")]
    EmptyEntity(&'static str),

    /// Two fields share a logical or column name.
    #[error("entity {entity} declares field '{field}' more than once")]
    DuplicateField {
        /// Entity kind being declared.
        entity: &'static str,
        /// Duplicated logical or column name.
        field: &'static str,
    },

    /// The entity does not declare exactly one primary key.
    #[error("entity {entity} must declare exactly one primary key, found {found}")]
    PrimaryKeyCount {
        /// Entity kind being declared.
        entity: &'static str,
        /// Number of primary key fields found.
        found: usize,
    },

    /// An enumerated field has no legal values.
    #[error("enumerated field {entity}.{field} has an empty value domain")]
    EmptyDomain {
        /// Entity kind being declared.
        entity: &'static str,
        /// Enumerated field name.
        field: &'static str,
    },

    /// A default value does not fit the declared field type.
    #[error("default for {entity}.{field} is invalid: {reason}")]
    InvalidDefault {
        /// Entity kind being declared.
        entity: &'static str,
        /// Field carrying the default.
        field: &'static str,
        /// Human-readable description of the mismatch.
        reason: String,
    },

    /// Two registered entities share a name or table.
    #[error("entity or table '{0}' is registered more than once")]
    DuplicateEntity(&'static str),
}

impl SchemaConstructionError {
    /// Unwraps a required field, reporting its absence.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaConstructionError::MissingRequiredField`] when `value`
    /// is `None`.
    pub fn require<T>(
        value: Option<T>,
        entity: &'static str,
        field: &'static str,
    ) -> Result<T, Self> {
        value.ok_or(Self::MissingRequiredField { entity, field })
    }
}

/// A field value violates a declared rule.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The value is empty.
    #[error("{} cannot be empty", display_name(.field))]
    Empty {
        /// Logical field name.
        field: &'static str,
    },

    /// The value length is outside the inclusive bounds.
    #[error(
        "{} must be between {min} and {max} characters long, got {actual}",
        display_name(.field)
    )]
    Length {
        /// Logical field name.
        field: &'static str,
        /// Minimum accepted length.
        min: usize,
        /// Maximum accepted length.
        max: usize,
        /// Observed character count.
        actual: usize,
    },

    /// An explicit null was given for a non-nullable field.
    #[error("{field} cannot be null")]
    Null {
        /// Logical field name.
        field: &'static str,
    },

    /// The raw value does not have the declared type.
    #[error("{field} expects {expected}")]
    TypeMismatch {
        /// Logical field name.
        field: &'static str,
        /// Description of the expected type.
        expected: &'static str,
    },

    /// A raw record payload is not a JSON object.
    #[error("{entity} record must be a JSON object")]
    NotAnObject {
        /// Entity kind being checked.
        entity: &'static str,
    },
}

/// An enumerated field was given a value outside its legal set.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid value '{value}' for {field}, expected one of: {}", .allowed.join(", "))]
pub struct DomainError {
    /// Logical field name.
    pub field: &'static str,
    /// Rejected raw value.
    pub value: String,
    /// Legal literals for the field.
    pub allowed: Vec<&'static str>,
}

/// Any failure raised while constructing, updating, or checking a record.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordError {
    /// A required field is missing.
    #[error(transparent)]
    Construction(#[from] SchemaConstructionError),
    /// A declared validation rule failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// An enumerated value is outside its domain.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Capitalizes a logical field name for user-facing messages.
fn display_name(field: &str) -> String {
    let mut chars = field.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
