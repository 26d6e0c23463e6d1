//! CLI argument definitions

use clap::Parser;
use rotalog_core::constants::{MAX_FILE_SIZE, MAX_LOG_ROTATE};
use rotalog_logs::RotationConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rotalog")]
#[command(
    version,
    about = "Append stdin to a log file, rotating it by size and by day",
    after_help = "Example: my-service 2>&1 | rotalog ~/service.log"
)]
pub struct Cli {
    /// Live log file; backups are kept next to it as <PATH>.1, <PATH>.2, ...
    pub path: PathBuf,

    /// Rotate once the live file grows past this many bytes
    #[arg(long, value_name = "BYTES", default_value_t = MAX_FILE_SIZE)]
    pub max_size: u64,

    /// Number of numbered backups to keep
    #[arg(long, value_name = "N", default_value_t = MAX_LOG_ROTATE)]
    pub max_backups: u32,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn rotation_config(&self) -> RotationConfig {
        RotationConfig::new(self.max_size, self.max_backups)
    }
}
