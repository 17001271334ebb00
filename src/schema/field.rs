//! Field-level declarations: logical types, defaults, and validation rules.

use super::{Enumerated, ValidationError};

/// Storage-independent type of a declared field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogicalType {
    /// Unique identifier (UUID v4).
    Uuid,
    /// Unbounded text.
    Text,
    /// 32-bit signed integer.
    Integer,
    /// Boolean flag.
    Boolean,
    /// Timestamp with time zone.
    Timestamp,
    /// Closed set of literal values.
    Enumerated {
        /// Name of the enumeration.
        name: &'static str,
        /// Legal literals in declaration order.
        values: Vec<&'static str>,
    },
    /// Image reference document: a JSON object with a non-empty `url`.
    Image,
}

impl LogicalType {
    /// Declares an enumerated type from a closed Rust enum.
    #[must_use]
    pub fn enumerated<E: Enumerated>() -> Self {
        Self::Enumerated {
            name: E::FIELD,
            values: E::literals(),
        }
    }

    /// Returns a short human-readable name for diagnostics.
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::Uuid => "uuid",
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Timestamp => "timestamp",
            Self::Enumerated { .. } => "enumerated",
            Self::Image => "image",
        }
    }
}

/// Value assigned by the storage layer when a record omits the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    /// A freshly generated UUID v4.
    GeneratedUuid,
    /// The current time at insertion.
    CurrentTimestamp,
    /// A fixed boolean.
    Boolean(bool),
    /// A fixed text or enumerated literal.
    Literal(&'static str),
}

impl DefaultValue {
    /// Declares an enumerated default from a closed Rust enum variant.
    #[must_use]
    pub fn enumerated<E: Enumerated>(variant: E) -> Self {
        Self::Literal(variant.as_str())
    }

    /// Returns a short human-readable name for diagnostics.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::GeneratedUuid => "generated uuid",
            Self::CurrentTimestamp => "current timestamp",
            Self::Boolean(_) => "boolean",
            Self::Literal(_) => "literal",
        }
    }
}

/// Declarative validation applied to text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// The value must not be the empty string.
    NotEmpty,
    /// The character count must lie within `min..=max`.
    Length {
        /// Minimum accepted character count.
        min: usize,
        /// Maximum accepted character count.
        max: usize,
    },
}

impl FieldRule {
    /// Checks a text value against this rule.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Empty`] or [`ValidationError::Length`] when
    /// the value violates the rule.
    pub fn check(self, field: &'static str, value: &str) -> Result<(), ValidationError> {
        match self {
            Self::NotEmpty if value.is_empty() => Err(ValidationError::Empty { field }),
            Self::NotEmpty => Ok(()),
            Self::Length { min, max } => {
                let actual = value.chars().count();
                if (min..=max).contains(&actual) {
                    Ok(())
                } else {
                    Err(ValidationError::Length {
                        field,
                        min,
                        max,
                        actual,
                    })
                }
            }
        }
    }
}

/// Checks a text value against every rule in order, stopping at the first
/// violation.
///
/// # Errors
///
/// Returns the first [`ValidationError`] raised by `rules`.
pub fn check_rules(
    rules: &[FieldRule],
    field: &'static str,
    value: &str,
) -> Result<(), ValidationError> {
    rules.iter().try_for_each(|rule| rule.check(field, value))
}

/// Declaration of a single persisted field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    name: &'static str,
    column: &'static str,
    logical: LogicalType,
    nullable: bool,
    primary_key: bool,
    default: Option<DefaultValue>,
    rules: Vec<FieldRule>,
}

impl FieldSpec {
    /// Declares a non-nullable field.
    #[must_use]
    pub const fn required(name: &'static str, column: &'static str, logical: LogicalType) -> Self {
        Self {
            name,
            column,
            logical,
            nullable: false,
            primary_key: false,
            default: None,
            rules: Vec::new(),
        }
    }

    /// Declares a nullable field.
    #[must_use]
    pub const fn optional(name: &'static str, column: &'static str, logical: LogicalType) -> Self {
        Self {
            name,
            column,
            logical,
            nullable: true,
            primary_key: false,
            default: None,
            rules: Vec::new(),
        }
    }

    /// Declares the generated UUID primary key.
    #[must_use]
    pub const fn primary_key(name: &'static str, column: &'static str) -> Self {
        Self {
            name,
            column,
            logical: LogicalType::Uuid,
            nullable: false,
            primary_key: true,
            default: Some(DefaultValue::GeneratedUuid),
            rules: Vec::new(),
        }
    }

    /// Declares an automatically managed timestamp such as `createdAt`.
    #[must_use]
    pub const fn managed_timestamp(name: &'static str, column: &'static str) -> Self {
        Self {
            name,
            column,
            logical: LogicalType::Timestamp,
            nullable: false,
            primary_key: false,
            default: Some(DefaultValue::CurrentTimestamp),
            rules: Vec::new(),
        }
    }

    /// Sets the storage default.
    #[must_use]
    pub const fn with_default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }

    /// Appends validation rules.
    #[must_use]
    pub fn with_rules(mut self, rules: &[FieldRule]) -> Self {
        self.rules.extend_from_slice(rules);
        self
    }

    /// Returns the logical field name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the storage column name.
    #[must_use]
    pub const fn column(&self) -> &'static str {
        self.column
    }

    /// Returns the logical type.
    #[must_use]
    pub const fn logical(&self) -> &LogicalType {
        &self.logical
    }

    /// Returns whether the field accepts null.
    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Returns whether the field is the primary key.
    #[must_use]
    pub const fn is_primary_key(&self) -> bool {
        self.primary_key
    }

    /// Returns the storage default, if any.
    #[must_use]
    pub const fn default_value(&self) -> Option<DefaultValue> {
        self.default
    }

    /// Returns the declared validation rules.
    #[must_use]
    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// Returns whether a record must supply this field explicitly.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        !self.nullable && self.default.is_none()
    }
}
