use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;
use std::io::{self, Write};

use crate::checks::license_file::Divergence;
use crate::checks::Diagnostic;
use crate::RunReport;

/// One JSON object per line, in collection order.
pub fn write_diagnostics<W: Write>(out: &mut W, diagnostics: &[Diagnostic]) -> io::Result<()> {
    for diagnostic in diagnostics {
        serde_json::to_writer(&mut *out, diagnostic)?;
        writeln!(out)?;
    }
    out.flush()
}

pub fn print_diagnostics(diagnostics: &[Diagnostic]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_diagnostics(&mut out, diagnostics)
}

/// Human summary on stderr; stdout stays machine-readable.
pub fn print_summary(report: &RunReport) {
    if report.diagnostics.is_empty() {
        eprintln!(
            "{} license-check: {} file(s) checked, {}",
            "\u{2713}".if_supports_color(Stderr, |s| s.green()),
            report.files_checked,
            "clean".if_supports_color(Stderr, |s| s.green()),
        );
    } else {
        eprintln!(
            "{} license-check: {} file(s) checked, {}",
            "\u{2717}".if_supports_color(Stderr, |s| s.red()),
            report.files_checked,
            format!("{} diagnostic(s)", report.diagnostics.len())
                .if_supports_color(Stderr, |s| s.red()),
        );
    }
}

pub fn print_divergence(license_display: &str, divergence: &Divergence) {
    eprintln!(
        "{} {} differs at normalized offset {}",
        "\u{26a0}".if_supports_color(Stderr, |s| s.yellow()),
        license_display,
        divergence.offset,
    );
    eprintln!(
        "  found:    {}",
        divergence.found.if_supports_color(Stderr, |s| s.dimmed())
    );
    eprintln!(
        "  expected: {}",
        divergence.expected.if_supports_color(Stderr, |s| s.dimmed())
    );
}

pub fn print_error(err: &anyhow::Error) {
    eprintln!(
        "{} {:#}",
        "Error:".if_supports_color(Stderr, |s| s.red()),
        err
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::Message;

    fn render(diagnostics: &[Diagnostic]) -> String {
        let mut buf = Vec::new();
        write_diagnostics(&mut buf, diagnostics).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn writes_compact_records_in_field_order() {
        let out = render(&[Diagnostic::error("src/EnergyPlus/b.hh", Message::Missing)]);
        assert_eq!(
            out,
            "{\"tool\":\"license-check\",\"file\":\"src/EnergyPlus/b.hh\",\"line\":1,\"messagetype\":\"error\",\"message\":\"License text missing\"}\n"
        );
    }

    #[test]
    fn keeps_order_and_duplicates() {
        let diags = vec![
            Diagnostic::error("LICENSE.txt", Message::LicenseFileMismatch),
            Diagnostic::error("x.h", Message::Duplicated),
            Diagnostic::error("x.h", Message::NotAtTop),
            Diagnostic::error("x.h", Message::NotAtTop),
        ];
        let out = render(&diags);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("LICENSE.txt does not match"));
        assert_eq!(lines[2], lines[3]);
    }

    #[test]
    fn serialized_message_matches_its_text() {
        for message in [
            Message::Missing,
            Message::Duplicated,
            Message::NotAtTop,
            Message::LicenseFileMismatch,
        ] {
            let json = serde_json::to_string(&message).unwrap();
            assert_eq!(json, format!("\"{}\"", message.as_str()));
        }
    }

    #[test]
    fn empty_report_writes_nothing() {
        assert_eq!(render(&[]), "");
    }
}
