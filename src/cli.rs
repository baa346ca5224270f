use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "fwprune")]
#[command(version)]
#[command(about = "Find and prune firmware files no kernel module references", long_about = None)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Delete unreferenced firmware files instead of listing them
    #[arg(long)]
    pub delete: bool,

    /// Kernel modules root, one subdirectory per installed kernel
    #[arg(long, value_name = "PATH", default_value = "/lib/modules")]
    pub module_root: String,

    /// Firmware tree to scan
    #[arg(long, value_name = "PATH", default_value = "/lib/firmware")]
    pub firmware_root: String,

    /// Tool used to query firmware names a module declares
    #[arg(long, value_name = "TOOL", default_value = "modinfo")]
    pub modinfo: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_list_mode() {
        let cli = Cli::parse_from(["fwprune"]);
        assert!(!cli.delete);
        assert_eq!(cli.module_root, "/lib/modules");
        assert_eq!(cli.firmware_root, "/lib/firmware");
        assert_eq!(cli.modinfo, "modinfo");
    }

    #[test]
    fn delete_flag_enables_delete_mode() {
        let cli = Cli::parse_from(["fwprune", "--delete"]);
        assert!(cli.delete);
    }

    #[test]
    fn roots_can_be_overridden() {
        let cli = Cli::parse_from([
            "fwprune",
            "--module-root",
            "/tmp/mods",
            "--firmware-root",
            "/tmp/fw",
        ]);
        assert_eq!(cli.module_root, "/tmp/mods");
        assert_eq!(cli.firmware_root, "/tmp/fw");
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["fwprune", "--frobnicate"]).is_err());
    }
}
