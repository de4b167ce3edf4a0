//! Test source generation.
//!
//! Turns grouped [`TestModule`](crate::wast::TestModule)s into compilable
//! Rust test units: bit-exact value encoding ([`values`]), identifier
//! sanitization ([`idents`]), per-module statement emission ([`emitter`]),
//! and the per-file driver with atomic output writes ([`unit`]).

pub mod emitter;
pub mod idents;
pub mod unit;
pub mod values;

pub use unit::{process_file, unit_name};

use crate::wast::WastError;

/// Errors from the generation pipeline. All fatal; partial output is
/// never persisted.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    #[error(transparent)]
    Wast(#[from] WastError),

    /// A scalar literal that is not a decimal-digit string.
    #[error("invalid {ty} literal `{literal}`")]
    Literal { ty: &'static str, literal: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
