//! End-to-end tests driving the full pipeline over fixture descriptors.

use std::fs;
use std::path::{Path, PathBuf};

use wastgen::gen::{process_file, GenError};
use wastgen::wast::WastError;

/// Fresh output directory under the system temp dir, unique per test.
fn out_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("wastgen-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn generates_one_unit_per_descriptor() {
    let dest = out_dir("i32");
    let path = process_file(Path::new("tests/fixtures/i32.json"), &dest).unwrap();
    assert_eq!(path.file_name().unwrap(), "SpecV1I32Test.rs");

    let source = fs::read_to_string(&path).unwrap();

    // one test case per .wasm module, in declaration order
    assert_eq!(source.matches("#[test]").count(), 2);
    assert!(source.contains("fn test_0()"));
    assert!(source.contains("fn test_1()"));

    // modules load from paths next to the descriptor
    assert!(source.contains(r#"Instance::from_file("tests/fixtures/i32.0.wasm")"#));
    assert!(source.contains(r#"Instance::from_file("tests/fixtures/i32.1.wasm")"#));

    // the export binds once, then both assertions reuse it in stream order
    assert_eq!(source.matches(r#"let add = instance.export("add");"#).count(), 1);
    let first = source
        .find("assert_eq!(add.invoke(&[Value::I32(1), Value::I32(2)]).unwrap().as_i32(), 3);")
        .unwrap();
    let second = source
        .find("assert_eq!(add.invoke(&[Value::I32(-1), Value::I32(1)]).unwrap().as_i32(), 0);")
        .unwrap();
    assert!(first < second);

    // unsigned literal above i32::MAX encodes to its two's-complement value
    assert!(source.contains("unwrap().as_i32(), -1);"));

    // the assert_trap command leaves no trace
    assert!(!source.contains("div_s"));

    // second module: void invoke asserts absence, dotted export name is sanitized
    assert!(source.contains("assert_eq!(store.invoke(&[Value::I32(7)]), None);"));
    assert!(source.contains(r#"let i64load = instance.export("i64.load");"#));
    assert!(source.contains("assert_eq!(i64load.invoke(&[]).unwrap().as_i64(), -1);"));

    fs::remove_dir_all(&dest).unwrap();
}

#[test]
fn float_results_compare_bits_and_nan_patterns() {
    let dest = out_dir("float");
    let path = process_file(Path::new("tests/fixtures/float_misc.json"), &dest).unwrap();
    assert_eq!(path.file_name().unwrap(), "SpecV1FloatMiscTest.rs");

    let source = fs::read_to_string(&path).unwrap();

    // the .wat module is metadata-only: exactly one test case is emitted
    assert_eq!(source.matches("#[test]").count(), 1);
    assert!(!source.contains("float_misc.1.wat"));

    assert!(source.contains("unwrap().as_f32().to_bits(), 2143289344);"));
    assert!(source.contains("unwrap().as_f64().is_nan());"));

    fs::remove_dir_all(&dest).unwrap();
}

#[test]
fn malformed_descriptor_writes_nothing() {
    let dest = out_dir("malformed");
    let input = dest.join("broken.json");
    fs::write(&input, "{\"commands\": [{\"filename\": \"a.wasm\"}]}").unwrap();

    let err = process_file(&input, &dest).unwrap_err();
    assert!(matches!(err, GenError::Wast(WastError::Parse { .. })));

    // no unit, no temp leftover
    assert!(!dest.join("SpecV1BrokenTest.rs").exists());
    assert!(!dest.join("SpecV1BrokenTest.rs.tmp").exists());

    fs::remove_dir_all(&dest).unwrap();
}

#[test]
fn assertion_before_any_module_aborts() {
    let dest = out_dir("ordering");
    let input = dest.join("bad_order.json");
    fs::write(
        &input,
        r#"{"commands": [
            {"type": "assert_return",
             "action": {"type": "invoke", "field": "f", "args": []},
             "expected": []}
        ]}"#,
    )
    .unwrap();

    let err = process_file(&input, &dest).unwrap_err();
    assert!(matches!(err, GenError::Wast(WastError::Ordering { .. })));
    assert!(!dest.join("SpecV1BadOrderTest.rs").exists());

    fs::remove_dir_all(&dest).unwrap();
}

#[test]
fn generated_units_are_reproducible() {
    let dest = out_dir("repro");
    let first = process_file(Path::new("tests/fixtures/i32.json"), &dest).unwrap();
    let first_source = fs::read_to_string(&first).unwrap();
    let second = process_file(Path::new("tests/fixtures/i32.json"), &dest).unwrap();
    let second_source = fs::read_to_string(&second).unwrap();
    assert_eq!(first, second);
    assert_eq!(first_source, second_source);

    fs::remove_dir_all(&dest).unwrap();
}
