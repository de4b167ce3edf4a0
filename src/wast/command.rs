//! Data model for spec-test JSON descriptors.
//!
//! A descriptor (the output of `wast2json`) carries an ordered `commands`
//! list. Each command record has a `type` discriminant; the kinds we
//! translate are `module` and `assert_return` with an `invoke` action.
//! Everything else deserializes to an explicit `Other` variant so that
//! unsupported kinds are a scope limitation, never a parse error.

use serde::Deserialize;

use super::WastError;

/// A whole descriptor file: the ordered command stream.
#[derive(Debug, Deserialize)]
pub struct Wast {
    pub commands: Vec<Command>,
}

/// One entry in the descriptor's `commands` list.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Declare a compiled module; subsequent assertions run against it.
    Module { filename: String },

    /// Assert that an action returns the expected value(s).
    AssertReturn {
        action: Action,
        #[serde(default)]
        expected: Vec<WasmValue>,
    },

    /// Any command kind we do not translate (traps, malformed modules, ...).
    #[serde(other)]
    Other,
}

/// The action inside an assertion.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Call the export named `field` with the given arguments.
    Invoke {
        field: String,
        #[serde(default)]
        args: Vec<WasmValue>,
    },

    /// Any other action kind (e.g. `get`); dropped silently.
    #[serde(other)]
    Other,
}

/// A typed constant from the descriptor, kept in its raw wire shape.
///
/// `value` stays loosely typed: scalar values arrive as decimal-digit
/// strings, but e.g. v128 constants carry a lane array. Keeping the raw
/// JSON here lets an unsupported type surface as [`WastError::UnsupportedType`]
/// rather than a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct WasmValue {
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

impl WasmValue {
    /// Resolve the value's type tag, failing on anything outside the
    /// four scalar kinds.
    pub fn kind(&self) -> Result<ValueKind, WastError> {
        ValueKind::from_ty(&self.ty).ok_or_else(|| WastError::UnsupportedType {
            ty: self.ty.clone(),
            value: self.literal().unwrap_or("<none>").to_string(),
        })
    }

    /// The decimal-digit literal, when the wire value is a string.
    pub fn literal(&self) -> Option<&str> {
        match &self.value {
            Some(serde_json::Value::String(s)) => Some(s),
            _ => None,
        }
    }
}

/// The four scalar value types the generator translates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    I32,
    I64,
    F32,
    F64,
}

impl ValueKind {
    pub fn from_ty(ty: &str) -> Option<ValueKind> {
        match ty {
            "i32" => Some(ValueKind::I32),
            "i64" => Some(ValueKind::I64),
            "f32" => Some(ValueKind::F32),
            "f64" => Some(ValueKind::F64),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ValueKind::I32 => "i32",
            ValueKind::I64 => "i64",
            ValueKind::F32 => "f32",
            ValueKind::F64 => "f64",
        }
    }
}

/// One module declaration together with the assertions that target it,
/// in original stream order. Built by the grouper, never mutated after.
#[derive(Debug)]
pub struct TestModule {
    pub filename: String,
    pub assertions: Vec<Assertion>,
}

/// The invoke-only projection of an `assert_return` command.
#[derive(Debug)]
pub struct Assertion {
    pub field: String,
    pub args: Vec<WasmValue>,
    pub expected: Vec<WasmValue>,
}
