//! Firmware tree scan and unused-file classification.

use anyhow::{Context, Result};
use colored::Colorize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::ui;

/// Compression suffixes stripped before matching a file against module
/// declarations. Exactly one suffix is removed, nothing else.
const COMPRESSION_SUFFIXES: &[&str] = &[".xz", ".zstd"];

/// Totals for one scan pass.
#[derive(Debug, Default)]
pub struct ScanSummary {
    pub unused_files: usize,
    pub unused_bytes: u64,
}

impl ScanSummary {
    /// Whole mebibytes, floor division.
    pub fn mib(&self) -> u64 {
        self.unused_bytes / 1024 / 1024
    }
}

/// Firmware name as a module would declare it: the path relative to the
/// firmware root, with a trailing compression suffix removed.
pub fn normalized_name(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let name = rel.to_str()?;

    for suffix in COMPRESSION_SUFFIXES {
        if let Some(stripped) = name.strip_suffix(suffix) {
            return Some(stripped.to_string());
        }
    }
    Some(name.to_string())
}

/// Walk the firmware tree and classify every regular file against the
/// referenced-name set.
///
/// Unreferenced files are reported one per line and, when `delete` is set,
/// removed. A deletion failure aborts the scan; everything already deleted
/// stays deleted. Referenced files produce no output.
pub fn scan(root: &Path, referenced: &HashSet<String>, delete: bool) -> Result<ScanSummary> {
    let mut summary = ScanSummary::default();

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::warn!("Skipping unreadable path: {e}");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(name) = normalized_name(root, entry.path()) else {
            log::warn!("Skipping non-UTF-8 firmware path: {}", entry.path().display());
            continue;
        };

        if referenced.contains(&name) {
            continue;
        }

        let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
        summary.unused_files += 1;
        summary.unused_bytes += size;

        if delete {
            fs::remove_file(entry.path())
                .with_context(|| format!("Failed to delete {}", entry.path().display()))?;
            println!("  {} {} ({})", "✗".red(), name, ui::format_size(size));
        } else {
            println!(
                "  {} {}",
                format!("{:>8}", ui::format_size(size)).yellow().bold(),
                name
            );
        }
    }

    Ok(summary)
}

// ============================================================================
// Tests
// ============================================================================
