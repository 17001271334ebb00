//! Capability objects translating logical types into backend column types.

use super::{DefaultValue, FieldRule, LogicalType};

/// Maps logical field types and defaults onto a concrete storage backend.
///
/// The persistence layer supplies an implementation when schemas are
/// constructed; descriptors keep the mapped output alongside each field.
pub trait TypeMapper {
    /// Returns the backend name recorded on descriptors.
    fn backend(&self) -> &'static str;

    /// Returns the column type for a logical type.
    fn column_type(&self, logical: &LogicalType) -> String;

    /// Returns the SQL expression for a storage default.
    fn default_expression(&self, default: DefaultValue) -> String;

    /// Returns a `CHECK` expression restricting a column to `values`.
    fn domain_check(&self, column: &str, values: &[&'static str]) -> String {
        let literals = values
            .iter()
            .map(|value| quote_literal(value))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{column} IN ({literals})")
    }

    /// Returns a `CHECK` expression enforcing a text rule.
    fn rule_check(&self, column: &str, rule: FieldRule) -> String {
        match rule {
            FieldRule::NotEmpty => format!("{column} <> ''"),
            FieldRule::Length { min, max } => {
                format!("char_length({column}) BETWEEN {min} AND {max}")
            }
        }
    }
}

/// `PostgreSQL` column mapping used by the Diesel adapters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostgresTypeMapper;

impl PostgresTypeMapper {
    /// Column width used for enumerated literals.
    pub const ENUM_COLUMN_WIDTH: usize = 50;
}

impl TypeMapper for PostgresTypeMapper {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    fn column_type(&self, logical: &LogicalType) -> String {
        match logical {
            LogicalType::Uuid => "UUID".to_owned(),
            LogicalType::Text => "TEXT".to_owned(),
            LogicalType::Integer => "INTEGER".to_owned(),
            LogicalType::Boolean => "BOOLEAN".to_owned(),
            LogicalType::Timestamp => "TIMESTAMPTZ".to_owned(),
            LogicalType::Enumerated { .. } => format!("VARCHAR({})", Self::ENUM_COLUMN_WIDTH),
            LogicalType::Image => "JSONB".to_owned(),
        }
    }

    fn default_expression(&self, default: DefaultValue) -> String {
        match default {
            DefaultValue::GeneratedUuid => "gen_random_uuid()".to_owned(),
            DefaultValue::CurrentTimestamp => "now()".to_owned(),
            DefaultValue::Boolean(true) => "TRUE".to_owned(),
            DefaultValue::Boolean(false) => "FALSE".to_owned(),
            DefaultValue::Literal(value) => quote_literal(value),
        }
    }
}

/// Wraps a value in single quotes, doubling embedded quotes.
fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
