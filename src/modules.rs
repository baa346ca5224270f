//! Kernel module discovery and firmware reference collection.
//!
//! Modules declare the firmware blobs they load at runtime; `modinfo -F
//! firmware` prints those names one per line. Every name collected here is a
//! reason to keep the matching file under the firmware root.

use anyhow::{Context, Result, bail};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::runner;

/// Recognized kernel module suffixes, plain or compressed.
const MODULE_SUFFIXES: &[&str] = &[".ko", ".ko.gz", ".ko.xz", ".ko.zst", ".ko.zstd"];

/// Pick the active kernel directory: the first subdirectory under the modules
/// root, in directory-listing order.
///
/// With several installed kernels the pick is whatever the listing returns
/// first. Known limitation, not a contract.
pub fn resolve_kernel_dir(root: &Path) -> Result<PathBuf> {
    let entries = fs::read_dir(root)
        .with_context(|| format!("Cannot read modules root {}", root.display()))?;

    for entry in entries {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            return Ok(entry.path());
        }
    }

    bail!("No kernel directories found under {}", root.display());
}

/// Whether a file name looks like a loadable kernel module.
pub fn is_kernel_module(name: &str) -> bool {
    MODULE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

/// Collect every firmware name declared by modules under `dir`.
///
/// The metadata tool is invoked once per module file. A failed invocation is
/// not fatal; it simply contributes no names for that module.
pub fn collect_referenced(dir: &Path, tool: &str) -> HashSet<String> {
    let mut referenced = HashSet::new();

    for entry in WalkDir::new(dir) {
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

        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if !is_kernel_module(name) {
            continue;
        }

        let Some(path) = entry.path().to_str() else {
            log::warn!("Skipping non-UTF-8 module path: {}", entry.path().display());
            continue;
        };

        log::debug!("querying firmware for {path}");
        for line in runner::run_capture_lines(tool, &["-F", "firmware", path]) {
            referenced.insert(line);
        }
    }

    referenced
}

// ============================================================================
// Tests
// ============================================================================
