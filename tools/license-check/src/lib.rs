pub mod checks;
pub mod config;
pub mod reference;
pub mod reporter;
pub mod walker;

use anyhow::Result;
use std::time::Instant;

use checks::license_file::{self, Divergence};
use checks::{file_header, Diagnostic};
use config::CheckerConfig;
use reference::ReferenceText;

pub struct RunReport {
    /// LICENSE.txt first, then files in scan order.
    pub diagnostics: Vec<Diagnostic>,
    pub files_checked: usize,
    pub license_divergence: Option<Divergence>,
}

/// Check the license file, then every candidate file under each configured directory.
/// Any read or listing failure aborts before diagnostics are returned.
pub fn run(config: &CheckerConfig) -> Result<RunReport> {
    let verbose = std::env::var("LICENSE_CHECK_VERBOSE").is_ok();
    let reference = ReferenceText::for_year(config.year);
    let mut diagnostics = Vec::new();

    let license_display = config.display_path(&config.license_file);
    let outcome = license_file::check_file(&config.license_file, &license_display, &reference)?;
    diagnostics.extend(outcome.diagnostic);

    let mut files_checked = 0;
    for root in &config.source_dirs {
        let listings = walker::collect_candidate_files(root, &config.extensions)?;
        for listing in &listings {
            let start = Instant::now();
            for file in &listing.files {
                let display = config.display_path(file);
                diagnostics.extend(file_header::check_file(file, &display, &reference)?);
            }
            files_checked += listing.files.len();
            if verbose {
                eprintln!(
                    "  [{:>6.0?}] {} ({} file(s))",
                    start.elapsed(),
                    config.display_path(&listing.dir),
                    listing.files.len()
                );
            }
        }
    }

    Ok(RunReport {
        diagnostics,
        files_checked,
        license_divergence: outcome.divergence,
    })
}
