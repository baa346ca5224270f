use std::process::{Command, Stdio};

/// Run a command and capture stdout as trimmed, non-empty lines.
///
/// Best effort: a binary that cannot be started or exits non-zero still
/// yields whatever it wrote to stdout, which may be nothing. The path
/// argument goes through argv, never a shell.
pub fn run_capture_lines(cmd: &str, args: &[&str]) -> Vec<String> {
    let output = match Command::new(cmd).args(args).stderr(Stdio::null()).output() {
        Ok(output) => output,
        Err(e) => {
            log::debug!("failed to start {cmd}: {e}");
            return Vec::new();
        }
    };

    if !output.status.success() {
        log::debug!("{cmd} {} exited with {}", args.join(" "), output.status);
    }

    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Check if a command exists
pub fn command_exists(cmd: &str) -> bool {
    Command::new("which")
        .arg(cmd)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

// ============================================================================
// Tests
// ============================================================================
