//! Program-safe identifier derivation.
//!
//! Turns relative paths and descriptor values into names usable as
//! TypeScript bindings: `hero/banner-wide_320_png` becomes
//! `heroBannerWide320Png`.

use std::collections::HashSet;

/// ECMAScript reserved words, plus the strict-mode restricted `arguments`
/// and `eval`, none of which can be used as binding names in a module.
const RESERVED_WORDS: &[&str] = &[
    "arguments", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "enum", "eval", "export", "extends", "false", "finally",
    "for", "function", "if", "implements", "import", "in", "instanceof", "interface", "let", "new",
    "null", "package", "private", "protected", "public", "return", "static", "super", "switch",
    "this", "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// Derive a program-safe identifier from an arbitrary path-like string.
///
/// Separators and hyphens become word breaks, the words are camel-cased,
/// and a leading digit gets an underscore prefix. Empty input yields `_`.
pub fn sanitize(raw: &str) -> String {
    let replaced: String = raw
        .chars()
        .map(|c| match c {
            '/' | '\\' | '-' => '_',
            other => other,
        })
        .collect();

    let camel = camel_case(&replaced);

    if camel.is_empty() {
        return "_".to_string();
    }

    if camel.starts_with(|c: char| c.is_ascii_digit()) || RESERVED_WORDS.contains(&camel.as_str()) {
        return format!("_{}", camel);
    }

    camel
}

/// Split on anything other than letters and ASCII digits, and on
/// lower-to-upper transitions, then join as camelCase. Non-ASCII letters
/// are kept and case-mapped with Unicode rules.
fn camel_case(input: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in input.chars() {
        if !(c.is_alphabetic() || c.is_ascii_digit()) {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }

    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        let lower = word.to_lowercase();
        if i == 0 {
            out.push_str(&lower);
        } else {
            let mut chars = lower.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
        }
    }
    out
}

/// Tracks the export names already used in one generated module.
#[derive(Debug, Default)]
pub struct IdentifierRegistry {
    used: HashSet<String>,
}

impl IdentifierRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve `name`, or the first free `name_N` (N starting at 2).
    pub fn claim(&mut self, name: &str) -> String {
        if self.used.insert(name.to_string()) {
            return name.to_string();
        }
        let mut n = 2;
        loop {
            let candidate = format!("{}_{}", name, n);
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}
