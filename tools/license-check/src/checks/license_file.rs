use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::checks::{Diagnostic, Message};
use crate::reference::{strip_whitespace, ReferenceText};

/// Characters of context shown on each side of a divergence.
const CONTEXT_CHARS: usize = 20;

pub struct LicenseFileOutcome {
    pub diagnostic: Option<Diagnostic>,
    pub divergence: Option<Divergence>,
}

/// Where the normalized LICENSE.txt first departs from the reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Divergence {
    pub offset: usize,
    pub found: String,
    pub expected: String,
}

/// Read the license file and compare it. A missing file aborts the run.
pub fn check_file(path: &Path, display: &str, reference: &ReferenceText) -> Result<LicenseFileOutcome> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read license file {}", path.display()))?;
    Ok(check_text(display, &content, reference))
}

/// Whitespace-insensitive equality. Only the reference has comment markers removed.
pub fn check_text(display: &str, content: &str, reference: &ReferenceText) -> LicenseFileOutcome {
    let found = strip_whitespace(content);
    let expected = reference.license_form();

    if found == expected {
        return LicenseFileOutcome { diagnostic: None, divergence: None };
    }

    LicenseFileOutcome {
        diagnostic: Some(Diagnostic::error(display, Message::LicenseFileMismatch)),
        divergence: first_divergence(&found, &expected),
    }
}

pub fn first_divergence(found: &str, expected: &str) -> Option<Divergence> {
    let found_chars: Vec<char> = found.chars().collect();
    let expected_chars: Vec<char> = expected.chars().collect();

    let offset = found_chars
        .iter()
        .zip(&expected_chars)
        .position(|(a, b)| a != b)
        .unwrap_or_else(|| found_chars.len().min(expected_chars.len()));

    if offset == found_chars.len() && offset == expected_chars.len() {
        return None;
    }

    Some(Divergence {
        offset,
        found: context_window(&found_chars, offset),
        expected: context_window(&expected_chars, offset),
    })
}

fn context_window(chars: &[char], offset: usize) -> String {
    let start = offset.saturating_sub(CONTEXT_CHARS);
    let end = (offset + CONTEXT_CHARS).min(chars.len());
    if start >= end {
        return String::new();
    }
    chars[start..end].iter().collect()
}
