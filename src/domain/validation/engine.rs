//! Schema-driven request validation

use serde_json::{Map, Value};
use tracing::debug;
use validator::ValidateEmail;

use super::schema::{
    FieldError, FieldKind, FieldRule, IntegerRules, ObjectSchema, RequestSchemas, StringRules,
    ViolationCode,
};
use crate::domain::DomainError;

/// Untyped request fragments as received by the transport
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRequest {
    pub params: Value,
    pub query: Value,
    pub body: Value,
}

/// Request fragments after validation
///
/// Fragments with a schema hold only the declared fields, with coerced
/// values. Fragments without one are passed through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub params: Value,
    pub query: Value,
    pub body: Value,
}

impl ValidatedRequest {
    /// Merge into `{ "params": .., "query": .., "body": .. }`
    pub fn into_value(self) -> Value {
        let mut merged = Map::new();
        merged.insert("params".to_string(), self.params);
        merged.insert("query".to_string(), self.query);
        merged.insert("body".to_string(), self.body);
        Value::Object(merged)
    }
}

/// Validates request fragments against [`RequestSchemas`]
///
/// Fragments are checked params, then query, then body. Each invalid field
/// contributes its first violation only. Any violation rejects the whole
/// request.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationEngine;

impl ValidationEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(
        &self,
        schemas: &RequestSchemas,
        raw: RawRequest,
    ) -> Result<ValidatedRequest, DomainError> {
        let mut errors = Vec::new();

        let params = apply(schemas.params.as_ref(), raw.params, &mut errors);
        let query = apply(schemas.query.as_ref(), raw.query, &mut errors);
        let body = apply(schemas.body.as_ref(), raw.body, &mut errors);

        if !errors.is_empty() {
            debug!(error_count = errors.len(), "Request rejected by validation");
            return Err(DomainError::request_validation(errors));
        }

        Ok(ValidatedRequest {
            params,
            query,
            body,
        })
    }
}

fn apply(schema: Option<&ObjectSchema>, fragment: Value, errors: &mut Vec<FieldError>) -> Value {
    match schema {
        Some(schema) => Value::Object(parse_object(schema, fragment, errors)),
        None => fragment,
    }
}

/// Non-object fragments are read as an empty object, so required fields
/// report `invalid_type`.
fn parse_object(schema: &ObjectSchema, fragment: Value, errors: &mut Vec<FieldError>) -> Map<String, Value> {
    let mut input = match fragment {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    let mut output = Map::new();

    for rule in schema.fields() {
        let value = input.remove(rule.name()).filter(|v| !v.is_null());

        match parse_field(rule, value) {
            Ok(Some(parsed)) => {
                output.insert(rule.name().to_string(), parsed);
            }
            Ok(None) => {}
            Err(code) => {
                // A field name may repeat across fragments; keep the first.
                if !errors.iter().any(|e| e.field == rule.name()) {
                    errors.push(FieldError::new(rule.name(), code.as_str()));
                }
            }
        }
    }

    output
}

fn parse_field(rule: &FieldRule, value: Option<Value>) -> Result<Option<Value>, ViolationCode> {
    let Some(value) = value else {
        return if rule.is_optional() {
            Ok(None)
        } else {
            Err(ViolationCode::InvalidType)
        };
    };

    let parsed = match rule.kind() {
        FieldKind::String(rules) => parse_string(rules, value)?,
        FieldKind::CoerceBoolean => coerce_boolean(&value)?,
        FieldKind::Integer(rules) => parse_integer(rules, &value)?,
    };

    Ok(Some(parsed))
}

fn parse_string(rules: &StringRules, value: Value) -> Result<Value, ViolationCode> {
    let Value::String(text) = value else {
        return Err(ViolationCode::InvalidType);
    };

    let length = text.chars().count();

    if rules.min_length.is_some_and(|min| length < min) {
        return Err(ViolationCode::TooSmall);
    }

    if rules.max_length.is_some_and(|max| length > max) {
        return Err(ViolationCode::TooBig);
    }

    if rules.email && !text.validate_email() {
        return Err(ViolationCode::InvalidString);
    }

    Ok(Value::String(text))
}

fn coerce_boolean(value: &Value) -> Result<Value, ViolationCode> {
    let coerced = match value {
        Value::Bool(b) => *b,
        Value::String(s) if s.eq_ignore_ascii_case("true") || s == "1" => true,
        Value::String(s) if s.eq_ignore_ascii_case("false") || s == "0" => false,
        Value::Number(n) if n.as_i64() == Some(1) => true,
        Value::Number(n) if n.as_i64() == Some(0) => false,
        _ => return Err(ViolationCode::InvalidType),
    };

    Ok(Value::Bool(coerced))
}

fn parse_integer(rules: &IntegerRules, value: &Value) -> Result<Value, ViolationCode> {
    let number = match value {
        Value::Number(n) => n.as_i64().ok_or(ViolationCode::InvalidType)?,
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| ViolationCode::InvalidType)?,
        _ => return Err(ViolationCode::InvalidType),
    };

    if rules.min.is_some_and(|min| number < min) {
        return Err(ViolationCode::TooSmall);
    }

    if rules.max.is_some_and(|max| number > max) {
        return Err(ViolationCode::TooBig);
    }

    Ok(Value::from(number))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn team_id_params() -> RequestSchemas {
        RequestSchemas::new().params(ObjectSchema::new().field(FieldRule::string("teamId").nonempty()))
    }

    fn user_status_schemas() -> RequestSchemas {
        RequestSchemas::new()
            .params(ObjectSchema::new().field(FieldRule::string("username").nonempty()))
            .body(ObjectSchema::new().field(FieldRule::coerce_boolean("enabled")))
    }

    fn errors_of(result: Result<ValidatedRequest, DomainError>) -> Vec<FieldError> {
        match result {
            Err(DomainError::RequestValidation { errors }) => errors,
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_team_id_is_too_small() {
        let raw = RawRequest {
            params: json!({ "teamId": "" }),
            ..Default::default()
        };

        let errors = errors_of(ValidationEngine::new().validate(&team_id_params(), raw));
        assert_eq!(errors, vec![FieldError::new("teamId", "too_small")]);
    }

    #[test]
    fn test_valid_team_id_is_forwarded() {
        let raw = RawRequest {
            params: json!({ "teamId": "abc" }),
            ..Default::default()
        };

        let validated = ValidationEngine::new().validate(&team_id_params(), raw).unwrap();
        assert_eq!(validated.params, json!({ "teamId": "abc" }));
    }

    #[test]
    fn test_boolean_coercion() {
        let engine = ValidationEngine::new();

        for (input, expected) in [
            (json!("true"), true),
            (json!("TRUE"), true),
            (json!("1"), true),
            (json!(true), true),
            (json!("false"), false),
            (json!("0"), false),
            (json!(false), false),
        ] {
            let raw = RawRequest {
                params: json!({ "username": "alice" }),
                body: json!({ "enabled": input }),
                ..Default::default()
            };

            let validated = engine.validate(&user_status_schemas(), raw).unwrap();
            assert_eq!(validated.body["enabled"], json!(expected));
        }
    }

    #[test]
    fn test_unparseable_boolean_is_rejected() {
        let raw = RawRequest {
            params: json!({ "username": "alice" }),
            body: json!({ "enabled": "notabool" }),
            ..Default::default()
        };

        let errors = errors_of(ValidationEngine::new().validate(&user_status_schemas(), raw));
        assert_eq!(errors, vec![FieldError::new("enabled", "invalid_type")]);
    }

    #[test]
    fn test_errors_follow_fragment_order() {
        let raw = RawRequest {
            params: json!({ "username": "" }),
            query: Value::Null,
            body: json!({}),
        };

        let errors = errors_of(ValidationEngine::new().validate(&user_status_schemas(), raw));
        assert_eq!(
            errors,
            vec![
                FieldError::new("username", "too_small"),
                FieldError::new("enabled", "invalid_type"),
            ]
        );
    }

    #[test]
    fn test_errors_follow_declaration_order() {
        let schemas = RequestSchemas::new().body(
            ObjectSchema::new()
                .field(FieldRule::string("zeta"))
                .field(FieldRule::integer("alpha").min(1))
                .field(FieldRule::string("email").email()),
        );
        let raw = RawRequest {
            body: json!({ "alpha": "0", "email": "not-an-email", "zeta": 3 }),
            ..Default::default()
        };

        let errors = errors_of(ValidationEngine::new().validate(&schemas, raw));
        assert_eq!(
            errors,
            vec![
                FieldError::new("zeta", "invalid_type"),
                FieldError::new("alpha", "too_small"),
                FieldError::new("email", "invalid_string"),
            ]
        );
    }

    #[test]
    fn test_one_error_per_field() {
        let schemas = RequestSchemas::new()
            .body(ObjectSchema::new().field(FieldRule::string("name").nonempty().email()));
        let raw = RawRequest {
            body: json!({ "name": "" }),
            ..Default::default()
        };

        let errors = errors_of(ValidationEngine::new().validate(&schemas, raw));
        assert_eq!(errors, vec![FieldError::new("name", "too_small")]);
    }

    #[test]
    fn test_max_length() {
        let schemas = RequestSchemas::new()
            .body(ObjectSchema::new().field(FieldRule::string("name").max_length(3)));
        let raw = RawRequest {
            body: json!({ "name": "abcd" }),
            ..Default::default()
        };

        let errors = errors_of(ValidationEngine::new().validate(&schemas, raw));
        assert_eq!(errors, vec![FieldError::new("name", "too_big")]);
    }

    #[test]
    fn test_optional_field_and_unknown_keys() {
        let schemas = RequestSchemas::new()
            .query(ObjectSchema::new().field(FieldRule::string("paginationToken").optional()));

        let raw = RawRequest {
            query: json!({ "other": "x" }),
            ..Default::default()
        };
        let validated = ValidationEngine::new().validate(&schemas, raw).unwrap();
        assert_eq!(validated.query, json!({}));

        let raw = RawRequest {
            query: json!({ "paginationToken": "tok", "other": "x" }),
            ..Default::default()
        };
        let validated = ValidationEngine::new().validate(&schemas, raw).unwrap();
        assert_eq!(validated.query, json!({ "paginationToken": "tok" }));
    }

    #[test]
    fn test_integer_coercion() {
        let schemas = RequestSchemas::new()
            .query(ObjectSchema::new().field(FieldRule::integer("limit").max(60)));

        let raw = RawRequest {
            query: json!({ "limit": "20" }),
            ..Default::default()
        };
        let validated = ValidationEngine::new().validate(&schemas, raw).unwrap();
        assert_eq!(validated.query["limit"], json!(20));

        let raw = RawRequest {
            query: json!({ "limit": "2.5" }),
            ..Default::default()
        };
        let errors = errors_of(ValidationEngine::new().validate(&schemas, raw));
        assert_eq!(errors, vec![FieldError::new("limit", "invalid_type")]);
    }

    #[test]
    fn test_fragment_without_schema_passes_through() {
        let raw = RawRequest {
            params: json!({ "teamId": "abc" }),
            body: json!([1, 2, 3]),
            ..Default::default()
        };

        let validated = ValidationEngine::new().validate(&team_id_params(), raw).unwrap();
        assert_eq!(validated.body, json!([1, 2, 3]));

        let merged = validated.into_value();
        assert_eq!(merged["params"]["teamId"], "abc");
    }

    #[test]
    fn test_non_object_fragment_reports_missing_fields() {
        let raw = RawRequest {
            params: json!("abc"),
            ..Default::default()
        };

        let errors = errors_of(ValidationEngine::new().validate(&team_id_params(), raw));
        assert_eq!(errors, vec![FieldError::new("teamId", "invalid_type")]);
    }
}
