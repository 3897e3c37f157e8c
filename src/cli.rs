use clap::Parser;
use std::path::PathBuf;

/// Go Model Doc-Comment Annotator
///
/// Scan a directory of Go model files and insert missing doc comments above
/// exported type declarations and exported methods on the designated receiver
#[derive(Parser, Debug)]
#[command(name = "goanno")]
#[command(long_about = None, version)]
pub struct Cli {
    /// Directory of files to annotate (default: from config)
    pub root: Option<PathBuf>,

    /// Receiver type whose exported methods get doc comments
    #[arg(long, value_name = "TYPE")]
    pub receiver: Option<String>,

    /// Filename suffix selecting candidate files
    #[arg(long, value_name = "SUFFIX")]
    pub suffix: Option<String>,

    /// Use specific config file
    #[arg(long, value_name = "PATH", conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Ignore all config files
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Preview changes without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
