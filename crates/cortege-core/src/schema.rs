//! Declarative runtime schemas for wire payloads
//!
//! A [`Schema`] describes the expected shape of one entity's payload and
//! the per-field constraints the upstream promises (text length bounds,
//! enumerations, date formats, uuid identifiers). It is checked against an
//! untrusted `serde_json::Value` *before* the value is deserialized into
//! the nominal payload type, so a shape mismatch is reported as a precise
//! field-level violation instead of a deserializer message.
//!
//! Validation stops at the first violation; co-occurring violations in
//! other fields are not aggregated. Unknown fields are ignored — the
//! upstream adds fields without coordination, and the schema's job is to
//! protect declared fields, not to freeze the payload.

use chrono::{DateTime, NaiveDate};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::SchemaError;

/// Constraint on a single payload field
#[derive(Debug, Clone)]
pub enum FieldRule {
    /// JSON boolean
    Boolean,
    /// JSON string with inclusive character-count bounds
    Text { min: usize, max: usize },
    /// JSON string holding a canonical UUID
    Uuid,
    /// JSON string holding an ISO date (`%Y-%m-%d`)
    Date,
    /// JSON string holding an RFC 3339 date-time
    DateTime,
    /// JSON string drawn from a fixed token set
    OneOf(&'static [&'static str]),
    /// JSON array whose every element satisfies the inner rule
    Array(Box<FieldRule>),
    /// Nested JSON object checked against its own schema
    Object(Schema),
}

#[derive(Debug, Clone)]
struct Field {
    name: &'static str,
    rule: FieldRule,
    required: bool,
}

/// Declarative schema for one entity's wire payload
///
/// Built once per use by a pure constructor function on the entity's
/// hydrator; the builder-style `field`/`optional` calls make the payload
/// contract readable at the declaration site. The entity tag is the
/// nominal brand: structurally identical schemas for different entities
/// carry different tags and report violations under their own name.
#[derive(Debug, Clone)]
pub struct Schema {
    entity: &'static str,
    fields: Vec<Field>,
}

impl Schema {
    /// Start a schema for the given entity tag
    pub fn new(entity: &'static str) -> Self {
        Self {
            entity,
            fields: Vec::new(),
        }
    }

    /// Declare a required field
    ///
    /// A required field must be present and non-null.
    pub fn field(mut self, name: &'static str, rule: FieldRule) -> Self {
        self.fields.push(Field {
            name,
            rule,
            required: true,
        });
        self
    }

    /// Declare an optional field
    ///
    /// Absent or `null` passes; a present value is still checked.
    pub fn optional(mut self, name: &'static str, rule: FieldRule) -> Self {
        self.fields.push(Field {
            name,
            rule,
            required: false,
        });
        self
    }

    /// The entity tag this schema brands
    pub fn entity(&self) -> &'static str {
        self.entity
    }

    /// Check an untrusted value against this schema
    ///
    /// # Errors
    ///
    /// Returns the first [`SchemaError`] encountered, identifying the
    /// offending field.
    pub fn check(&self, raw: &Value) -> Result<(), SchemaError> {
        let object = raw.as_object().ok_or(SchemaError::NotAnObject {
            entity: self.entity,
        })?;

        for field in &self.fields {
            match object.get(field.name) {
                None | Some(Value::Null) => {
                    if field.required {
                        return Err(SchemaError::MissingField {
                            entity: self.entity,
                            field: field.name.to_string(),
                        });
                    }
                }
                Some(value) => {
                    check_rule(self.entity, field.name.to_string(), &field.rule, value)?;
                }
            }
        }

        Ok(())
    }
}

fn check_rule(
    entity: &'static str,
    field: String,
    rule: &FieldRule,
    value: &Value,
) -> Result<(), SchemaError> {
    match rule {
        FieldRule::Boolean => {
            if !value.is_boolean() {
                return Err(SchemaError::TypeMismatch {
                    entity,
                    field,
                    expected: "boolean",
                });
            }
        }
        FieldRule::Text { min, max } => {
            let text = expect_str(entity, &field, value)?;
            let len = text.chars().count();
            if !(*min..=*max).contains(&len) {
                return Err(SchemaError::LengthOutOfRange {
                    entity,
                    field,
                    len,
                    min: *min,
                    max: *max,
                });
            }
        }
        FieldRule::Uuid => {
            let text = expect_str(entity, &field, value)?;
            if Uuid::parse_str(text).is_err() {
                return Err(SchemaError::BadFormat {
                    entity,
                    field,
                    expected: "uuid",
                    value: text.to_string(),
                });
            }
        }
        FieldRule::Date => {
            let text = expect_str(entity, &field, value)?;
            if NaiveDate::parse_from_str(text, "%Y-%m-%d").is_err() {
                return Err(SchemaError::BadFormat {
                    entity,
                    field,
                    expected: "ISO date",
                    value: text.to_string(),
                });
            }
        }
        FieldRule::DateTime => {
            let text = expect_str(entity, &field, value)?;
            if DateTime::parse_from_rfc3339(text).is_err() {
                return Err(SchemaError::BadFormat {
                    entity,
                    field,
                    expected: "RFC 3339 date-time",
                    value: text.to_string(),
                });
            }
        }
        FieldRule::OneOf(allowed) => {
            let text = expect_str(entity, &field, value)?;
            if !allowed.contains(&text) {
                return Err(SchemaError::NotInEnum {
                    entity,
                    field,
                    value: text.to_string(),
                    allowed,
                });
            }
        }
        FieldRule::Array(inner) => {
            let items = value.as_array().ok_or_else(|| SchemaError::TypeMismatch {
                entity,
                field: field.clone(),
                expected: "array",
            })?;
            for (index, item) in items.iter().enumerate() {
                check_rule(entity, format!("{field}[{index}]"), inner, item)?;
            }
        }
        FieldRule::Object(schema) => {
            schema.check(value)?;
        }
    }

    Ok(())
}

fn expect_str<'a>(
    entity: &'static str,
    field: &str,
    value: &'a Value,
) -> Result<&'a str, SchemaError> {
    value.as_str().ok_or_else(|| SchemaError::TypeMismatch {
        entity,
        field: field.to_string(),
        expected: "string",
    })
}
