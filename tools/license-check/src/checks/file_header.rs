use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::checks::{Diagnostic, Message};
use crate::reference::ReferenceText;

/// Read `path` and check its header. A read failure aborts the run.
pub fn check_file(path: &Path, display: &str, reference: &ReferenceText) -> Result<Vec<Diagnostic>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(check_contents(display, &normalize_newlines(&content), reference))
}

/// Fold `\r\n` and lone `\r` into `\n`, as a text-mode read does.
pub fn normalize_newlines(content: &str) -> String {
    content.replace("\r\n", "\n").replace('\r', "\n")
}

/// Count and position checks are independent; a file can fail both.
pub fn check_contents(display: &str, content: &str, reference: &ReferenceText) -> Vec<Diagnostic> {
    let text = reference.as_str();
    let count = content.matches(text).count();

    if count == 0 {
        return vec![Diagnostic::error(display, Message::Missing)];
    }

    let mut diagnostics = Vec::new();
    if count > 1 {
        diagnostics.push(Diagnostic::error(display, Message::Duplicated));
    }
    if !content.starts_with(text) {
        diagnostics.push(Diagnostic::error(display, Message::NotAtTop));
    }
    diagnostics
}
