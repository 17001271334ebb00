//! Per-entity schema descriptors.

use super::{
    DefaultValue, DomainError, FieldSpec, LogicalType, RecordError, SchemaConstructionError,
    TypeMapper, ValidationError, check_rules,
};
use crate::image::ImageRef;
use chrono::DateTime;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use uuid::Uuid;

/// A declared field together with its backend mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    spec: FieldSpec,
    column_type: String,
    default_sql: Option<String>,
    checks: Vec<String>,
}

impl ColumnDescriptor {
    /// Returns the field declaration.
    #[must_use]
    pub const fn spec(&self) -> &FieldSpec {
        &self.spec
    }

    /// Returns the backend column type.
    #[must_use]
    pub fn column_type(&self) -> &str {
        &self.column_type
    }

    /// Returns the backend default expression, if any.
    #[must_use]
    pub fn default_sql(&self) -> Option<&str> {
        self.default_sql.as_deref()
    }

    /// Returns backend `CHECK` expressions for the column.
    #[must_use]
    pub fn checks(&self) -> &[String] {
        &self.checks
    }

    fn render(&self) -> String {
        let mut line = format!("    {} {}", self.spec.column(), self.column_type);
        if self.spec.is_primary_key() {
            line.push_str(" PRIMARY KEY");
        } else if !self.spec.is_nullable() {
            line.push_str(" NOT NULL");
        }
        if let Some(default_sql) = &self.default_sql {
            line.push_str(" DEFAULT ");
            line.push_str(default_sql);
        }
        for check in &self.checks {
            line.push_str(" CHECK (");
            line.push_str(check);
            line.push(')');
        }
        line
    }
}

/// Opaque schema descriptor for one entity kind.
///
/// Descriptors are produced once at startup and handed to the persistence
/// layer by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySchema {
    entity: &'static str,
    table: &'static str,
    backend: &'static str,
    columns: Vec<ColumnDescriptor>,
}

impl EntitySchema {
    /// Builds a descriptor from field declarations.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaConstructionError`] when the declaration is empty,
    /// repeats a field or column name, does not declare exactly one primary
    /// key, leaves an enumerated domain empty, or carries a default that
    /// does not fit its field.
    pub fn new(
        entity: &'static str,
        table: &'static str,
        fields: Vec<FieldSpec>,
        mapper: &dyn TypeMapper,
    ) -> Result<Self, SchemaConstructionError> {
        if fields.is_empty() {
            return Err(SchemaConstructionError::EmptyEntity(entity));
        }

        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.name()) {
                return Err(SchemaConstructionError::DuplicateField {
                    entity,
                    field: field.name(),
                });
            }
            if field.column() != field.name() && !seen.insert(field.column()) {
                return Err(SchemaConstructionError::DuplicateField {
                    entity,
                    field: field.column(),
                });
            }
        }

        let primary_keys = fields.iter().filter(|field| field.is_primary_key()).count();
        if primary_keys != 1 {
            return Err(SchemaConstructionError::PrimaryKeyCount {
                entity,
                found: primary_keys,
            });
        }

        let columns = fields
            .into_iter()
            .map(|spec| describe_column(entity, spec, mapper))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            entity,
            table,
            backend: mapper.backend(),
            columns,
        })
    }

    /// Returns the entity kind name.
    #[must_use]
    pub const fn entity(&self) -> &'static str {
        self.entity
    }

    /// Returns the storage table name.
    #[must_use]
    pub const fn table(&self) -> &'static str {
        self.table
    }

    /// Returns the backend the descriptor was mapped for.
    #[must_use]
    pub const fn backend(&self) -> &'static str {
        self.backend
    }

    /// Returns every column in declaration order.
    #[must_use]
    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    /// Returns every field declaration in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.columns.iter().map(ColumnDescriptor::spec)
    }

    /// Looks up a column by logical field name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|column| column.spec.name() == name)
    }

    /// Returns the primary key declaration.
    ///
    /// Construction guarantees exactly one primary key, so this only returns
    /// `None` for descriptors that were never validated.
    #[must_use]
    pub fn primary_key(&self) -> Option<&FieldSpec> {
        self.fields().find(|field| field.is_primary_key())
    }

    /// Returns the logical names of fields every record must supply.
    #[must_use]
    pub fn required_fields(&self) -> Vec<&'static str> {
        self.fields()
            .filter(|field| field.is_required())
            .map(FieldSpec::name)
            .collect()
    }

    /// Renders a `CREATE TABLE` statement for the mapped backend.
    #[must_use]
    pub fn create_table_sql(&self) -> String {
        let body = self
            .columns
            .iter()
            .map(ColumnDescriptor::render)
            .collect::<Vec<_>>()
            .join(",\n");
        format!("CREATE TABLE {} (\n{body}\n);", self.table)
    }

    /// Checks a raw record, keyed by logical field names, against the
    /// declaration.
    ///
    /// Keys without a declared field are ignored. Fields with a storage
    /// default may be omitted, but an explicit `null` is only accepted for
    /// nullable fields.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::Construction`] when a required field is absent
    /// or null, [`RecordError::Domain`] when an enumerated value is outside
    /// its set, and [`RecordError::Validation`] for type mismatches, rule
    /// violations and nulls in non-nullable fields.
    pub fn check_record(&self, record: &Value) -> Result<(), RecordError> {
        let Some(object) = record.as_object() else {
            return Err(ValidationError::NotAnObject {
                entity: self.entity,
            }
            .into());
        };

        for spec in self.fields() {
            match object.get(spec.name()) {
                None | Some(Value::Null) if spec.is_required() => {
                    return Err(SchemaConstructionError::MissingRequiredField {
                        entity: self.entity,
                        field: spec.name(),
                    }
                    .into());
                }
                Some(Value::Null) if !spec.is_nullable() => {
                    return Err(ValidationError::Null { field: spec.name() }.into());
                }
                None | Some(Value::Null) => {}
                Some(value) => check_value(spec, value)?,
            }
        }
        Ok(())
    }
}

fn describe_column(
    entity: &'static str,
    spec: FieldSpec,
    mapper: &dyn TypeMapper,
) -> Result<ColumnDescriptor, SchemaConstructionError> {
    if matches!(spec.logical(), LogicalType::Enumerated { values, .. } if values.is_empty()) {
        return Err(SchemaConstructionError::EmptyDomain {
            entity,
            field: spec.name(),
        });
    }

    if let Some(default) = spec.default_value() {
        check_default(entity, &spec, default)?;
    }

    let mut checks = Vec::new();
    if let LogicalType::Enumerated { values, .. } = spec.logical() {
        checks.push(mapper.domain_check(spec.column(), values));
    }
    checks.extend(
        spec.rules()
            .iter()
            .map(|rule| mapper.rule_check(spec.column(), *rule)),
    );

    Ok(ColumnDescriptor {
        column_type: mapper.column_type(spec.logical()),
        default_sql: spec
            .default_value()
            .map(|default| mapper.default_expression(default)),
        checks,
        spec,
    })
}

fn check_default(
    entity: &'static str,
    spec: &FieldSpec,
    default: DefaultValue,
) -> Result<(), SchemaConstructionError> {
    let reason = match (default, spec.logical()) {
        (DefaultValue::GeneratedUuid, LogicalType::Uuid)
        | (DefaultValue::CurrentTimestamp, LogicalType::Timestamp)
        | (DefaultValue::Boolean(_), LogicalType::Boolean)
        | (DefaultValue::Literal(_), LogicalType::Text) => return Ok(()),
        (DefaultValue::Literal(literal), LogicalType::Enumerated { values, .. }) => {
            if values.contains(&literal) {
                return Ok(());
            }
            format!("'{literal}' is not one of: {}", values.join(", "))
        }
        (default, logical) => format!(
            "cannot use a {} default for a field of type {}",
            default.describe(),
            logical.describe()
        ),
    };
    Err(SchemaConstructionError::InvalidDefault {
        entity,
        field: spec.name(),
        reason,
    })
}

fn check_value(spec: &FieldSpec, value: &Value) -> Result<(), RecordError> {
    let field = spec.name();
    match spec.logical() {
        LogicalType::Uuid => {
            let parsed = value.as_str().map(Uuid::parse_str);
            ensure(matches!(parsed, Some(Ok(_))), field, "a UUID string")
        }
        LogicalType::Text => {
            let text = value.as_str().ok_or(ValidationError::TypeMismatch {
                field,
                expected: "a string",
            })?;
            check_rules(spec.rules(), field, text).map_err(RecordError::from)
        }
        LogicalType::Integer => {
            let fits = value
                .as_i64()
                .is_some_and(|number| i32::try_from(number).is_ok());
            ensure(fits, field, "a 32-bit integer")
        }
        LogicalType::Boolean => ensure(value.is_boolean(), field, "a boolean"),
        LogicalType::Timestamp => {
            let parsed = value.as_str().map(DateTime::parse_from_rfc3339);
            ensure(matches!(parsed, Some(Ok(_))), field, "an RFC 3339 timestamp")
        }
        LogicalType::Enumerated { values, .. } => {
            let literal = value.as_str().ok_or(ValidationError::TypeMismatch {
                field,
                expected: "a string literal",
            })?;
            if values.iter().any(|allowed| *allowed == literal) {
                Ok(())
            } else {
                Err(DomainError {
                    field,
                    value: literal.to_owned(),
                    allowed: values.clone(),
                }
                .into())
            }
        }
        LogicalType::Image => ensure(
            ImageRef::deserialize(value).is_ok(),
            field,
            "an image object with a non-empty url",
        ),
    }
}

fn ensure(condition: bool, field: &'static str, expected: &'static str) -> Result<(), RecordError> {
    if condition {
        Ok(())
    } else {
        Err(ValidationError::TypeMismatch { field, expected }.into())
    }
}
