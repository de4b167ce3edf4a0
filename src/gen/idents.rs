//! Identifier derivation for export bindings.
//!
//! Export names in the spec suite are untrusted strings: they carry `-`,
//! `_` and `.`, may start with a digit, and frequently collide with Rust
//! keywords (`loop`, `type`, `if`). The sanitizer maps them onto legal
//! identifiers; [`IdentTable`] memoizes the mapping per test module so
//! each field binds exactly once and distinct fields never share a name.

/// Reserved words that cannot be used as a `let` binding.
const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while",
];

/// Map an export name onto a legal identifier.
///
/// Strips `-`, `_` and `.`; prefixes `x` when the result is empty or
/// starts with a digit; suffixes `_` when the result is a keyword. Pure:
/// the output depends only on `field`.
pub fn sanitize(field: &str) -> String {
    let mut out: String = field
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | '.'))
        .collect();
    if out.chars().next().map_or(true, |c| c.is_ascii_digit()) {
        out.insert(0, 'x');
    }
    if KEYWORDS.contains(&out.as_str()) {
        out.push('_');
    }
    out
}

/// Per-module memo of field-to-identifier bindings, in first-occurrence
/// order. Never shared across modules or files.
#[derive(Debug, Default)]
pub struct IdentTable {
    bound: Vec<(String, String)>,
}

impl IdentTable {
    pub fn new() -> IdentTable {
        IdentTable::default()
    }

    /// Identifier for `field`, plus whether this is its first occurrence
    /// (i.e. whether the caller should emit a binding statement).
    ///
    /// Distinct fields whose sanitized forms collide (e.g. `"a-b"` and
    /// `"ab"`) get a numeric suffix, so identifiers are unique within the
    /// module.
    pub fn resolve(&mut self, field: &str) -> (String, bool) {
        if let Some((_, ident)) = self.bound.iter().find(|(f, _)| f == field) {
            return (ident.clone(), false);
        }
        let base = sanitize(field);
        let mut ident = base.clone();
        let mut suffix = 0u32;
        while self.bound.iter().any(|(_, taken)| *taken == ident) {
            suffix += 1;
            ident = format!("{}{}", base, suffix);
        }
        self.bound.push((field.to_string(), ident.clone()));
        (ident, true)
    }
}
