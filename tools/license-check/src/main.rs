use clap::Parser;
use std::path::PathBuf;
use std::process;

use license_check::config::CheckerConfig;
use license_check::reporter;

/// Verify the license header on C++ sources and headers, and that LICENSE.txt matches it.
#[derive(Parser)]
#[command(name = "license-check", version)]
struct Cli {
    /// Repository root; scanned paths are resolved against it
    #[arg(long)]
    root_dir: Option<PathBuf>,

    /// Directory to scan (repeatable); replaces the default set
    #[arg(long = "dir", value_name = "DIR")]
    dirs: Vec<PathBuf>,

    /// License file to compare against the header
    #[arg(long, value_name = "PATH")]
    license_file: Option<PathBuf>,

    /// Year substituted into the header instead of the current one
    #[arg(long)]
    year: Option<i32>,

    /// Exit 1 when any diagnostic is reported
    #[arg(long)]
    strict: bool,

    /// Show where LICENSE.txt first differs from the header
    #[arg(long)]
    explain: bool,
}

fn main() {
    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(c) => c,
        Err(err) => {
            reporter::print_error(&err);
            process::exit(1);
        }
    };

    let report = match license_check::run(&config) {
        Ok(r) => r,
        Err(err) => {
            reporter::print_error(&err);
            process::exit(1);
        }
    };

    if let Err(err) = reporter::print_diagnostics(&report.diagnostics) {
        reporter::print_error(&anyhow::Error::from(err));
        process::exit(1);
    }

    if cli.explain {
        if let Some(divergence) = &report.license_divergence {
            reporter::print_divergence(&config.display_path(&config.license_file), divergence);
        }
    }
    reporter::print_summary(&report);

    let failed = cli.strict && !report.diagnostics.is_empty();
    process::exit(if failed { 1 } else { 0 });
}

fn build_config(cli: &Cli) -> anyhow::Result<CheckerConfig> {
    let mut config = match &cli.root_dir {
        Some(dir) => CheckerConfig::from_root(dir),
        None => CheckerConfig::from_current_dir()?,
    };
    if !cli.dirs.is_empty() {
        config = config.with_source_dirs(&cli.dirs);
    }
    if let Some(path) = &cli.license_file {
        config = config.with_license_file(path);
    }
    if let Some(year) = cli.year {
        config = config.with_year(year);
    }
    Ok(config)
}
