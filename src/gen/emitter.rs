//! Statement emission for one test module.
//!
//! Produces the body of a generated test case: an instantiation statement,
//! one export binding per distinct field (first occurrence only), and one
//! assertion per `assert_return`, all in original stream order. Integer
//! results compare exactly; float results compare their bit pattern, since
//! a tolerance-based comparison cannot assert NaN results.

use super::idents::IdentTable;
use super::values::{self, FloatBits};
use super::GenError;
use crate::wast::command::{Assertion, TestModule, ValueKind};

/// Emit the ordered statements of one test case.
///
/// `resource_path` is where the generated code will find the compiled
/// module at run time. Assertions with more than one expected value are
/// outside the translated subset and are skipped without a statement.
pub fn emit(module: &TestModule, resource_path: &str) -> Result<Vec<String>, GenError> {
    let mut stmts = Vec::with_capacity(module.assertions.len() + 1);
    stmts.push(format!(
        "let instance = Instance::from_file({:?}).unwrap();",
        resource_path
    ));

    let mut idents = IdentTable::new();
    for assertion in &module.assertions {
        if assertion.expected.len() > 1 {
            continue;
        }
        let (ident, first) = idents.resolve(&assertion.field);
        if first {
            stmts.push(format!(
                "let {} = instance.export({:?});",
                ident, assertion.field
            ));
        }
        stmts.push(assert_stmt(&ident, assertion)?);
    }
    Ok(stmts)
}

fn assert_stmt(ident: &str, assertion: &Assertion) -> Result<String, GenError> {
    let args = assertion
        .args
        .iter()
        .map(values::value_expr)
        .collect::<Result<Vec<_>, _>>()?
        .join(", ");
    let call = format!("{}.invoke(&[{}])", ident, args);

    let expected = match assertion.expected.as_slice() {
        // Void invoke: assert the absence of a result, never a numeric cast.
        [] => return Ok(format!("assert_eq!({}, None);", call)),
        [expected] => expected,
        _ => unreachable!("multi-value assertions are filtered by emit()"),
    };

    let kind = expected.kind()?;
    let literal = expected.literal().ok_or_else(|| GenError::Literal {
        ty: kind.name(),
        literal: "<none>".to_string(),
    })?;
    let accessor = values::accessor(kind);

    Ok(match kind {
        ValueKind::I32 => format!(
            "assert_eq!({}.unwrap().{}(), {});",
            call,
            accessor,
            values::i32_literal(values::encode_i32(literal)?)
        ),
        ValueKind::I64 => format!(
            "assert_eq!({}.unwrap().{}(), {});",
            call,
            accessor,
            values::i64_literal(values::encode_i64(literal)?)
        ),
        ValueKind::F32 => match values::encode_f32(literal)? {
            FloatBits::Exact(bits) => format!(
                "assert_eq!({}.unwrap().{}().to_bits(), {});",
                call, accessor, bits
            ),
            _ => format!("assert!({}.unwrap().{}().is_nan());", call, accessor),
        },
        ValueKind::F64 => match values::encode_f64(literal)? {
            FloatBits::Exact(bits) => format!(
                "assert_eq!({}.unwrap().{}().to_bits(), {});",
                call, accessor, bits
            ),
            _ => format!("assert!({}.unwrap().{}().is_nan());", call, accessor),
        },
    })
}
