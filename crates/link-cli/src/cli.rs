//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use link_scanner::ExtensionType;

/// linkmap - Compute where an extension's files would be linked into a site
#[derive(Parser, Debug)]
#[command(name = "linkmap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose (debug) logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the extension type declared by the installer manifest
    Detect {
        /// Extension source tree containing the installer manifest
        extension_root: PathBuf,
    },

    /// Scan the installer manifest and print what was discovered
    Scan {
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Print the source to destination link map
    ///
    /// Examples:
    ///   linkmap map ./mod_example --site-root /var/www/site
    ///   linkmap map ./plg_foo --config linkmap.toml --json
    Map {
        #[command(flatten)]
        target: TargetArgs,

        /// Root of the target installation
        #[arg(short, long)]
        site_root: Option<PathBuf>,

        /// Scanner config file (.toml, .json, .yaml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Arguments selecting and configuring the scanner
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct TargetArgs {
    /// Extension source tree containing the installer manifest
    pub extension_root: PathBuf,

    /// Extension type (module, plugin); detected from the manifest when omitted
    #[arg(short = 't', long = "type")]
    pub kind: Option<ExtensionType>,

    /// Language folder replacing the one declared in the manifest
    #[arg(short, long)]
    pub language_root: Option<PathBuf>,

    /// Output as JSON for the linker
    #[arg(long)]
    pub json: bool,
}
