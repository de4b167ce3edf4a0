//! Spec-test descriptor input layer.
//!
//! This module reads the JSON descriptors that `wast2json` produces from
//! the official WebAssembly specification test suite and reshapes their
//! flat, order-dependent command stream into per-module assertion groups.
//!
//! The wire format is deliberately only partially covered: module
//! declarations and `assert_return`/`invoke` commands are translated,
//! everything else (traps, malformed-module checks, multi-value results)
//! is accepted structurally and dropped.

pub mod command;
pub mod grouper;
pub mod loader;

pub use command::{Action, Assertion, Command, TestModule, ValueKind, WasmValue, Wast};
pub use grouper::group;
pub use loader::{load, parse_str};

/// Errors arising from the descriptor input layer. All are fatal.
#[derive(Debug, thiserror::Error)]
pub enum WastError {
    /// The descriptor is not well-formed, or a record is structurally
    /// incomplete (e.g. missing its `type` discriminant).
    #[error("{file}: malformed descriptor: {detail}")]
    Parse { file: String, detail: String },

    /// An assertion appeared before any module declaration.
    #[error("{file}: assertion precedes any module")]
    Ordering { file: String },

    /// A value type outside i32/i64/f32/f64.
    #[error("unsupported value type `{ty}` (value `{value}`)")]
    UnsupportedType { ty: String, value: String },
}
