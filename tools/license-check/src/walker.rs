use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Files directly in one directory, grouped by extension in the order given.
pub struct DirListing {
    pub dir: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Collect candidate files under `root` and each of its immediate subdirectories.
/// Deeper levels are not visited. A missing root yields nothing.
pub fn collect_candidate_files(root: &Path, extensions: &[String]) -> Result<Vec<DirListing>> {
    let mut listings = Vec::new();
    let Some(root_entries) = read_visible_entries(root)? else {
        return Ok(listings);
    };

    listings.push(DirListing {
        dir: root.to_path_buf(),
        files: matching_files(&root_entries, extensions),
    });

    for sub in root_entries.iter().filter(|p| p.is_dir()) {
        if let Some(entries) = read_visible_entries(sub)? {
            listings.push(DirListing {
                dir: sub.clone(),
                files: matching_files(&entries, extensions),
            });
        }
    }

    Ok(listings)
}

fn matching_files(entries: &[PathBuf], extensions: &[String]) -> Vec<PathBuf> {
    let mut results = Vec::new();
    for ext in extensions {
        let suffix = format!(".{}", ext);
        for path in entries {
            if !path.is_file() {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if name.ends_with(&suffix) {
                    results.push(path.clone());
                }
            }
        }
    }
    results
}

/// Sorted, non-hidden entries of `dir`, or `None` when it does not exist.
fn read_visible_entries(dir: &Path) -> Result<Option<Vec<PathBuf>>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(e).with_context(|| format!("failed to list directory {}", dir.display()))
        }
    };

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to list directory {}", dir.display()))?;
        let hidden = entry.file_name().to_string_lossy().starts_with('.');
        if !hidden {
            paths.push(entry.path());
        }
    }
    paths.sort();
    Ok(Some(paths))
}
