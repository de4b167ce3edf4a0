//! A conformance-test transpiler for the WebAssembly specification suite.
//!
//! wastgen reads the JSON descriptors that `wast2json` produces from the
//! official spec-test `.wast` files and emits Rust test sources that
//! exercise a WebAssembly module loader against the suite's expectations:
//! load a compiled module, retrieve its exports, invoke them, and compare
//! results bit-exactly.
//!
//! # Modules
//!
//! - [`wast`] -- Descriptor input layer: data model, loader, and the fold
//!   that groups the flat command stream into per-module assertion groups.
//! - [`gen`] -- Output layer: value encoding, identifier sanitization,
//!   statement emission, and the per-file driver.
//!
//! # Example
//!
//! ```
//! use wastgen::wast::{grouper, loader};
//! use wastgen::gen::emitter;
//!
//! let descriptor = r#"{"commands": [
//!     {"type": "module", "filename": "add.0.wasm"},
//!     {"type": "assert_return",
//!      "action": {"type": "invoke", "field": "add",
//!                 "args": [{"type": "i32", "value": "1"},
//!                          {"type": "i32", "value": "2"}]},
//!      "expected": [{"type": "i32", "value": "3"}]}
//! ]}"#;
//!
//! let wast = loader::parse_str("add.json", descriptor).unwrap();
//! let modules = grouper::group("add.json", wast.commands).unwrap();
//! let stmts = emitter::emit(&modules[0], "spec/add.0.wasm").unwrap();
//! assert_eq!(
//!     stmts[2],
//!     "assert_eq!(add.invoke(&[Value::I32(1), Value::I32(2)]).unwrap().as_i32(), 3);"
//! );
//! ```
//!
//! Only the "invoke and compare a typed return value" subset of the
//! format is translated; other assertion kinds are dropped silently. The
//! transpiler never parses or executes module bytes itself -- the
//! generated code does that, through the runtime crate it imports.

pub mod gen;
pub mod wast;
