//! The single scan pass: resolve the kernel directory, collect referenced
//! firmware names, classify the firmware tree, print the summary.

use anyhow::Result;
use std::path::PathBuf;

use crate::cli::Cli;
use crate::{firmware, modules, runner, ui};

/// Expand ~ in paths
fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

pub fn run(cli: &Cli) -> Result<()> {
    let module_root = expand_path(&cli.module_root);
    let firmware_root = expand_path(&cli.firmware_root);

    if cli.delete {
        ui::header("Firmware Prune");
    } else {
        ui::header("Firmware Scan");
    }

    if !runner::command_exists(&cli.modinfo) {
        ui::warn(&format!(
            "'{}' not found in PATH; modules will report no firmware",
            cli.modinfo
        ));
    }

    let kernel_dir = modules::resolve_kernel_dir(&module_root)?;
    println!("  Scanning modules in {}", kernel_dir.display());
    println!();

    let referenced = modules::collect_referenced(&kernel_dir, &cli.modinfo);
    log::info!(
        "{} firmware names referenced by modules under {}",
        referenced.len(),
        kernel_dir.display()
    );

    let summary = firmware::scan(&firmware_root, &referenced, cli.delete)?;

    println!();
    ui::kv(
        if cli.delete { "Deleted files" } else { "Unused files" },
        &summary.unused_files.to_string(),
    );
    ui::kv(
        if cli.delete { "Reclaimed" } else { "Reclaimable" },
        &format!("{} bytes ({} MiB)", summary.unused_bytes, summary.mib()),
    );

    if summary.unused_files == 0 {
        println!();
        ui::success("All firmware on disk is referenced by a module");
    } else if !cli.delete {
        println!();
        ui::info("Run with --delete to remove these files");
    }

    Ok(())
}
