pub mod file_header;
pub mod license_file;

use serde::Serialize;

/// Identifier stamped on every diagnostic.
pub const TOOL_NAME: &str = "license-check";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Message {
    #[serde(rename = "License text missing")]
    Missing,
    #[serde(rename = "Multiple instances of license text")]
    Duplicated,
    #[serde(rename = "License text is not at top of file")]
    NotAtTop,
    #[serde(rename = "LICENSE.txt does not match")]
    LicenseFileMismatch,
}

impl Message {
    pub fn as_str(&self) -> &'static str {
        match self {
            Message::Missing => "License text missing",
            Message::Duplicated => "Multiple instances of license text",
            Message::NotAtTop => "License text is not at top of file",
            Message::LicenseFileMismatch => "LICENSE.txt does not match",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
}

/// One compliance violation. Field order is the wire order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub tool: &'static str,
    pub file: String,
    pub line: u32,
    pub messagetype: Severity,
    pub message: Message,
}

impl Diagnostic {
    pub fn error(file: impl Into<String>, message: Message) -> Self {
        Self {
            tool: TOOL_NAME,
            file: file.into(),
            line: 1,
            messagetype: Severity::Error,
            message,
        }
    }
}
