//! Descriptor loading: one JSON file in, an ordered command stream out.

use std::fs;
use std::path::Path;

use super::command::Wast;
use super::WastError;

/// Read and parse a descriptor file.
pub fn load(path: &Path) -> Result<Wast, WastError> {
    let file = path.display().to_string();
    let text = fs::read_to_string(path).map_err(|e| WastError::Parse {
        file: file.clone(),
        detail: e.to_string(),
    })?;
    parse_str(&file, &text)
}

/// Parse descriptor text. `file` is used only for error reporting.
pub fn parse_str(file: &str, text: &str) -> Result<Wast, WastError> {
    serde_json::from_str(text).map_err(|e| WastError::Parse {
        file: file.to_string(),
        detail: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wast::command::Command;

    #[test]
    fn parses_a_minimal_descriptor() {
        let wast = parse_str(
            "mini.json",
            r#"{"source_filename": "mini.wast", "commands": [
                {"type": "module", "line": 1, "filename": "mini.0.wasm"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(wast.commands.len(), 1);
        assert!(matches!(&wast.commands[0], Command::Module { filename } if filename == "mini.0.wasm"));
    }

    #[test]
    fn malformed_json_names_the_file() {
        let err = parse_str("broken.json", "{not json").unwrap_err();
        match err {
            WastError::Parse { file, .. } => assert_eq!(file, "broken.json"),
            other => panic!("expected Parse, got {:?}", other),
        }
    }

    #[test]
    fn missing_commands_list_is_a_parse_error() {
        let err = parse_str("empty.json", r#"{"source_filename": "x.wast"}"#).unwrap_err();
        assert!(matches!(err, WastError::Parse { .. }));
    }

    #[test]
    fn load_reports_missing_files() {
        let err = load(Path::new("/no/such/descriptor.json")).unwrap_err();
        match err {
            WastError::Parse { file, .. } => assert!(file.ends_with("descriptor.json")),
            other => panic!("expected Parse, got {:?}", other),
        }
    }
}
