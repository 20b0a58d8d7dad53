//! Request validation domain

mod engine;
mod schema;

pub use engine::{RawRequest, ValidatedRequest, ValidationEngine};
pub use schema::{
    FieldError, FieldKind, FieldRule, IntegerRules, ObjectSchema, RequestSchemas, StringRules,
    ViolationCode,
};
