use serde::de::DeserializeOwned;
use serde_json::Value;

pub mod schemas;

/// Primitive type a client-supplied field must conform to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Integer,
    /// Opaque structured value, stored as submitted
    Json,
}

impl FieldType {
    fn expected(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Integer => "integer",
            FieldType::Json => "json",
        }
    }

    fn matches(&self, value: &Value) -> bool {
        match self {
            FieldType::Text => value.is_string(),
            FieldType::Integer => value.as_i64().is_some(),
            FieldType::Json => true,
        }
    }
}

/// Validation rule for a single insertable field
pub struct FieldRule {
    pub name: &'static str,
    pub required: bool,
    pub ty: FieldType,
}

/// Ordered allow-list of the fields a creation request may populate.
///
/// Never contains the generated columns (`id`, `createdAt`) - those are
/// assigned by the stores at write time.
pub struct InsertSchema {
    pub entity: &'static str,
    pub fields: &'static [FieldRule],
}

/// One field-level problem found while validating an input payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub expected: String,
    pub message: String,
}

/// The input failed schema conformance; every offending field is listed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {entity} payload: {} field(s) rejected", violations.len())]
pub struct ValidationError {
    pub entity: &'static str,
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    fn single(entity: &'static str, field: &str, expected: &str, message: String) -> Self {
        Self {
            entity,
            violations: vec![FieldViolation {
                field: field.to_string(),
                expected: expected.to_string(),
                message,
            }],
        }
    }
}

/// Check `input` against `schema`, collecting every violation before failing.
///
/// Fields are visited in schema order: a required field that is missing (or
/// JSON null) is a violation, as is a present field of the wrong type.
/// Unknown extra fields are ignored. The check is pure and deterministic -
/// the same input always produces the same outcome.
pub fn validate(schema: &InsertSchema, input: &Value) -> Result<(), ValidationError> {
    let Some(object) = input.as_object() else {
        return Err(ValidationError::single(
            schema.entity,
            "payload",
            "object",
            "request body must be a JSON object".to_string(),
        ));
    };

    let mut violations = Vec::new();
    for rule in schema.fields {
        match object.get(rule.name) {
            None | Some(Value::Null) => {
                if rule.required {
                    violations.push(FieldViolation {
                        field: rule.name.to_string(),
                        expected: rule.ty.expected().to_string(),
                        message: format!("required field `{}` is missing", rule.name),
                    });
                }
            }
            Some(value) => {
                if !rule.ty.matches(value) {
                    violations.push(FieldViolation {
                        field: rule.name.to_string(),
                        expected: rule.ty.expected().to_string(),
                        message: format!(
                            "field `{}` must be of type {}",
                            rule.name,
                            rule.ty.expected()
                        ),
                    });
                }
            }
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError {
            entity: schema.entity,
            violations,
        })
    }
}

/// Validate `input` and convert it into the typed insert record `T`.
///
/// Validation guarantees the shape, so the conversion itself only fails on
/// values outside the target's numeric range; that edge is reported as a
/// payload-level violation rather than a panic.
pub fn parse<T: DeserializeOwned>(schema: &InsertSchema, input: &Value) -> Result<T, ValidationError> {
    validate(schema, input)?;
    serde_json::from_value(input.clone()).map_err(|e| {
        ValidationError::single(schema.entity, "payload", "insertable record", e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::dto::alibi::NewAlibi;
    use crate::types::dto::face_analysis::NewFaceAnalysis;
    use serde_json::json;

    #[test]
    fn test_valid_alibi_payload_parses_into_typed_record() {
        let input = json!({
            "recipient": "boss",
            "alibiType": "sick",
            "format": "text",
            "content": "I have a fever"
        });

        let record: NewAlibi = parse(&schemas::ALIBI, &input).expect("payload should validate");

        assert_eq!(record.recipient, "boss");
        assert_eq!(record.alibi_type, "sick");
        assert_eq!(record.format, "text");
        assert_eq!(record.content, "I have a fever");
        assert_eq!(record.user_id, None);
        assert_eq!(record.real_reason, None);
    }

    #[test]
    fn test_missing_required_fields_are_all_reported() {
        let input = json!({ "recipient": "boss" });

        let err = validate(&schemas::ALIBI, &input).expect_err("payload should be rejected");

        let fields: Vec<&str> = err.violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["alibiType", "format", "content"]);
    }

    #[test]
    fn test_wrong_type_names_the_offending_field() {
        let input = json!({ "userId": 1, "age": "not-a-number" });

        let err = validate(&schemas::FACE_ANALYSIS, &input).expect_err("payload should be rejected");

        assert_eq!(err.violations.len(), 1);
        assert_eq!(err.violations[0].field, "age");
        assert_eq!(err.violations[0].expected, "integer");
    }

    #[test]
    fn test_null_optional_field_is_accepted() {
        let input = json!({
            "userId": null,
            "recipient": "boss",
            "alibiType": "sick",
            "format": "text",
            "content": "traffic"
        });

        assert!(validate(&schemas::ALIBI, &input).is_ok());
    }

    #[test]
    fn test_null_required_field_counts_as_missing() {
        let input = json!({
            "recipient": null,
            "alibiType": "sick",
            "format": "text",
            "content": "traffic"
        });

        let err = validate(&schemas::ALIBI, &input).expect_err("payload should be rejected");

        assert_eq!(err.violations.len(), 1);
        assert_eq!(err.violations[0].field, "recipient");
    }

    #[test]
    fn test_unknown_extra_fields_are_ignored() {
        let input = json!({
            "recipient": "boss",
            "alibiType": "sick",
            "format": "text",
            "content": "traffic",
            "somethingElse": 42
        });

        assert!(validate(&schemas::ALIBI, &input).is_ok());
        let record: NewAlibi = parse(&schemas::ALIBI, &input).expect("extras must not break parsing");
        assert_eq!(record.recipient, "boss");
    }

    #[test]
    fn test_non_object_payload_is_a_single_payload_violation() {
        let err = validate(&schemas::ALIBI, &json!("just a string"))
            .expect_err("non-object should be rejected");

        assert_eq!(err.violations.len(), 1);
        assert_eq!(err.violations[0].field, "payload");
    }

    #[test]
    fn test_validation_is_idempotent() {
        let input = json!({ "recipient": "boss" });

        let first = validate(&schemas::ALIBI, &input);
        let second = validate(&schemas::ALIBI, &input);

        assert_eq!(first, second);
    }

    #[test]
    fn test_fractional_number_is_not_an_integer() {
        let input = json!({ "age": 27.5 });

        let err = validate(&schemas::FACE_ANALYSIS, &input).expect_err("fractional age rejected");

        assert_eq!(err.violations[0].field, "age");
    }

    #[test]
    fn test_optional_integer_accepts_integer() {
        let input = json!({ "userId": 7, "age": 27 });

        let record: NewFaceAnalysis =
            parse(&schemas::FACE_ANALYSIS, &input).expect("payload should validate");

        assert_eq!(record.user_id, Some(7));
        assert_eq!(record.age, Some(27));
    }

    #[test]
    fn test_user_schema_requires_username_and_password() {
        // The schema exists even though the user creation endpoint does not
        // consult it; see api::users.
        let err = validate(&schemas::USER, &json!({ "email": "a@b.c" }))
            .expect_err("user payload should be rejected");

        let fields: Vec<&str> = err.violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["username", "password"]);
    }

    #[test]
    fn test_plan_schema_accepts_opaque_features() {
        let input = json!({
            "name": "premium",
            "description": "all features",
            "price": 999,
            "features": { "alibisPerMonth": 100, "tts": true }
        });

        assert!(validate(&schemas::SUBSCRIPTION_PLAN, &input).is_ok());
    }
}
