//! Whole-file pipeline: descriptor in, one generated source unit out.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::emitter;
use super::GenError;
use crate::wast::{grouper, loader};

/// Crate the generated tests import their runtime from.
const RUNTIME_CRATE: &str = "wasm_rt";

/// Translate one descriptor into one generated test unit in `dest_dir`,
/// returning the path written. The write is atomic: on any failure no
/// partial unit is left behind.
pub fn process_file(input: &Path, dest_dir: &Path) -> Result<PathBuf, GenError> {
    let file = input.display().to_string();
    let wast = loader::load(input)?;
    let modules = grouper::group(&file, wast.commands)?;

    // wast2json writes the compiled modules next to the descriptor, so
    // resource paths are siblings of the input.
    let wasm_dir = input.parent().unwrap_or_else(|| Path::new(""));

    let mut out = String::new();
    out.push_str(&format!(
        "//! Generated from `{}`. Do not edit.\n\n",
        input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or(file)
    ));
    out.push_str(&format!("use {}::{{Instance, Value}};\n", RUNTIME_CRATE));

    let mut test_index = 0usize;
    for module in &modules {
        // Skip metadata-only entries (e.g. .wat text modules): only
        // compiled modules become test cases.
        if !module.filename.ends_with(".wasm") {
            continue;
        }
        let resource = resource_path(wasm_dir, &module.filename);
        let stmts = emitter::emit(module, &resource)?;

        out.push_str(&format!("\n#[test]\nfn test_{}() {{\n", test_index));
        for stmt in &stmts {
            out.push_str("    ");
            out.push_str(stmt);
            out.push('\n');
        }
        out.push_str("}\n");
        test_index += 1;
    }

    let path = dest_dir.join(format!("{}.rs", unit_name(input)));
    write_atomic(&path, out.as_bytes())?;
    Ok(path)
}

/// Derive the unit name from the input's base filename: split on `_`,
/// `-` and `.`, capitalize each segment, concatenate, and wrap in the
/// fixed `SpecV1...Test` template. `i32.json` becomes `SpecV1I32Test`.
pub fn unit_name(input: &Path) -> String {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let camel: String = stem
        .split(|c| c == '_' || c == '-' || c == '.')
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect();
    format!("SpecV1{}Test", camel)
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Resource path for a module file, with forward slashes so the generated
/// source is stable across platforms.
fn resource_path(dir: &Path, filename: &str) -> String {
    dir.join(filename).to_string_lossy().replace('\\', "/")
}

/// Write via a temporary sibling and rename into place; either the whole
/// unit lands or none of it does.
fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let tmp = path.with_extension("rs.tmp");
    let result = fs::write(&tmp, bytes).and_then(|_| fs::rename(&tmp, path));
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}
