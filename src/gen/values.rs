//! Bit-exact numeric encoding for generated test values.
//!
//! Descriptor literals live in four distinct domains: i32/i64 literals are
//! the value's decimal magnitude in the type's *unsigned* representation
//! space (so `"4294967295"` is the i32 value `-1`), while f32/f64 literals
//! are the raw IEEE-754 bit pattern as an unsigned decimal integer, not the
//! float's numeric value. Integers are parsed as `i128` before the modular
//! reduction so the full u64 range survives without overflow; float bits
//! are carried through untouched, NaN payloads included.

use super::GenError;
use crate::wast::command::{ValueKind, WasmValue};

/// An f32/f64 literal: either exact bits or one of the symbolic NaN
/// patterns the test suite uses for non-deterministic NaN results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatBits<T> {
    Exact(T),
    NanCanonical,
    NanArithmetic,
}

impl FloatBits<u32> {
    /// Bits to use when the value appears as a call argument.
    pub fn arg_bits(self) -> u32 {
        match self {
            FloatBits::Exact(bits) => bits,
            FloatBits::NanCanonical => 0x7fc00000,
            FloatBits::NanArithmetic => 0x7fc00001,
        }
    }
}

impl FloatBits<u64> {
    pub fn arg_bits(self) -> u64 {
        match self {
            FloatBits::Exact(bits) => bits,
            FloatBits::NanCanonical => 0x7ff8000000000000,
            FloatBits::NanArithmetic => 0x7ff8000000000001,
        }
    }
}

fn parse_wide(kind: ValueKind, literal: &str) -> Result<i128, GenError> {
    literal.parse::<i128>().map_err(|_| GenError::Literal {
        ty: kind.name(),
        literal: literal.to_string(),
    })
}

/// Reduce a decimal literal modulo 2^32 and reinterpret as two's-complement.
pub fn encode_i32(literal: &str) -> Result<i32, GenError> {
    let n = parse_wide(ValueKind::I32, literal)?;
    Ok(n.rem_euclid(1i128 << 32) as u32 as i32)
}

/// Reduce a decimal literal modulo 2^64 and reinterpret as two's-complement.
pub fn encode_i64(literal: &str) -> Result<i64, GenError> {
    let n = parse_wide(ValueKind::I64, literal)?;
    Ok(n.rem_euclid(1i128 << 64) as u64 as i64)
}

/// Parse an f32 literal into its raw bit pattern (or a NaN pattern).
pub fn encode_f32(literal: &str) -> Result<FloatBits<u32>, GenError> {
    match literal {
        "nan:canonical" => Ok(FloatBits::NanCanonical),
        "nan:arithmetic" => Ok(FloatBits::NanArithmetic),
        _ => literal
            .parse::<u32>()
            .map(FloatBits::Exact)
            .map_err(|_| GenError::Literal {
                ty: ValueKind::F32.name(),
                literal: literal.to_string(),
            }),
    }
}

/// Parse an f64 literal into its raw bit pattern (or a NaN pattern).
pub fn encode_f64(literal: &str) -> Result<FloatBits<u64>, GenError> {
    match literal {
        "nan:canonical" => Ok(FloatBits::NanCanonical),
        "nan:arithmetic" => Ok(FloatBits::NanArithmetic),
        _ => literal
            .parse::<u64>()
            .map(FloatBits::Exact)
            .map_err(|_| GenError::Literal {
                ty: ValueKind::F64.name(),
                literal: literal.to_string(),
            }),
    }
}

/// The method the generated code calls to extract a typed result from the
/// runtime's value wrapper.
pub fn accessor(kind: ValueKind) -> &'static str {
    match kind {
        ValueKind::I32 => "as_i32",
        ValueKind::I64 => "as_i64",
        ValueKind::F32 => "as_f32",
        ValueKind::F64 => "as_f64",
    }
}

/// Render an i32 as a Rust source literal. `i32::MIN` is spelled by name:
/// rustc rejects a bare `-2147483648` literal as overflowing.
pub fn i32_literal(v: i32) -> String {
    if v == i32::MIN {
        "i32::MIN".to_string()
    } else {
        v.to_string()
    }
}

/// Render an i64 as a Rust source literal, spelling `i64::MIN` by name.
pub fn i64_literal(v: i64) -> String {
    if v == i64::MIN {
        "i64::MIN".to_string()
    } else {
        v.to_string()
    }
}

/// Render a descriptor value as a `Value` constructor expression for use
/// as a call argument in generated source.
pub fn value_expr(value: &WasmValue) -> Result<String, GenError> {
    let kind = value.kind()?;
    let literal = value.literal().ok_or_else(|| GenError::Literal {
        ty: kind.name(),
        literal: "<none>".to_string(),
    })?;
    Ok(match kind {
        ValueKind::I32 => format!("Value::I32({})", i32_literal(encode_i32(literal)?)),
        ValueKind::I64 => format!("Value::I64({})", i64_literal(encode_i64(literal)?)),
        ValueKind::F32 => match encode_f32(literal)? {
            FloatBits::Exact(bits) => format!("Value::F32(f32::from_bits({}))", bits),
            nan => format!("Value::F32(f32::from_bits({:#010x}))", nan.arg_bits()),
        },
        ValueKind::F64 => match encode_f64(literal)? {
            FloatBits::Exact(bits) => format!("Value::F64(f64::from_bits({}))", bits),
            nan => format!("Value::F64(f64::from_bits({:#018x}))", nan.arg_bits()),
        },
    })
}
