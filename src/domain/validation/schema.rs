//! Declarative request shape schemas

use serde::{Deserialize, Serialize};

/// Stable violation codes reported to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCode {
    /// Missing required value or value of the wrong type
    InvalidType,
    /// Empty or below the minimum
    TooSmall,
    /// Above the maximum
    TooBig,
    /// String failed a format check
    InvalidString,
}

impl ViolationCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidType => "invalid_type",
            Self::TooSmall => "too_small",
            Self::TooBig => "too_big",
            Self::InvalidString => "invalid_string",
        }
    }
}

impl std::fmt::Display for ViolationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One field-scoped validation failure, serialized as `{ param, type }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    #[serde(rename = "param")]
    pub field: String,
    #[serde(rename = "type")]
    pub violation_code: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, violation_code: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            violation_code: violation_code.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.violation_code)
    }
}

/// Checks applied to a string field, in this order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringRules {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub email: bool,
}

/// Bounds applied to an integer field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegerRules {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

/// Kind of value a field accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    String(StringRules),
    /// Booleans, or the strings `true`/`false`/`1`/`0`
    CoerceBoolean,
    /// Integers, or strings holding one
    Integer(IntegerRules),
}

/// Rule for a single named field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    name: String,
    kind: FieldKind,
    optional: bool,
}

impl FieldRule {
    pub fn string(name: impl Into<String>) -> Self {
        Self::with_kind(name, FieldKind::String(StringRules::default()))
    }

    pub fn coerce_boolean(name: impl Into<String>) -> Self {
        Self::with_kind(name, FieldKind::CoerceBoolean)
    }

    pub fn integer(name: impl Into<String>) -> Self {
        Self::with_kind(name, FieldKind::Integer(IntegerRules::default()))
    }

    fn with_kind(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            optional: false,
        }
    }

    /// Accept a missing or null value
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Reject the empty string
    pub fn nonempty(self) -> Self {
        self.min_length(1)
    }

    pub fn min_length(mut self, min: usize) -> Self {
        if let FieldKind::String(rules) = &mut self.kind {
            rules.min_length = Some(min);
        }
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        if let FieldKind::String(rules) = &mut self.kind {
            rules.max_length = Some(max);
        }
        self
    }

    pub fn email(mut self) -> Self {
        if let FieldKind::String(rules) = &mut self.kind {
            rules.email = true;
        }
        self
    }

    pub fn min(mut self, min: i64) -> Self {
        if let FieldKind::Integer(rules) = &mut self.kind {
            rules.min = Some(min);
        }
        self
    }

    pub fn max(mut self, max: i64) -> Self {
        if let FieldKind::Integer(rules) = &mut self.kind {
            rules.max = Some(max);
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }
}

/// Object schema with fields checked in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectSchema {
    fields: Vec<FieldRule>,
}

impl ObjectSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, rule: FieldRule) -> Self {
        self.fields.push(rule);
        self
    }

    pub fn fields(&self) -> &[FieldRule] {
        &self.fields
    }
}

/// Schemas for the three request fragments; absent fragments are not checked
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSchemas {
    pub params: Option<ObjectSchema>,
    pub query: Option<ObjectSchema>,
    pub body: Option<ObjectSchema>,
}

impl RequestSchemas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn params(mut self, schema: ObjectSchema) -> Self {
        self.params = Some(schema);
        self
    }

    pub fn query(mut self, schema: ObjectSchema) -> Self {
        self.query = Some(schema);
        self
    }

    pub fn body(mut self, schema: ObjectSchema) -> Self {
        self.body = Some(schema);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_json_shape() {
        let error = FieldError::new("teamId", ViolationCode::TooSmall.as_str());
        let json = serde_json::to_value(&error).unwrap();

        assert_eq!(json, serde_json::json!({ "param": "teamId", "type": "too_small" }));
    }

    #[test]
    fn test_rule_builders() {
        let rule = FieldRule::string("email").nonempty().max_length(10).email();

        assert_eq!(
            rule.kind(),
            &FieldKind::String(StringRules {
                min_length: Some(1),
                max_length: Some(10),
                email: true,
            })
        );
        assert!(!rule.is_optional());
        assert!(FieldRule::coerce_boolean("enabled").optional().is_optional());
    }

    #[test]
    fn test_string_modifiers_ignored_on_other_kinds() {
        let rule = FieldRule::coerce_boolean("enabled").nonempty();
        assert_eq!(rule.kind(), &FieldKind::CoerceBoolean);
    }
}
