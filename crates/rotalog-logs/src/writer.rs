//! Log writer with rotation support

use rotalog_core::{Error, Result};
use std::fs::OpenOptions;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use crate::rotation::RotationConfig;

/// Counters for one pass over an input stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipeStats {
    pub lines_written: u64,
    pub lines_failed: u64,
    pub rotations: u64,
}

/// Appends lines to a live file, rotating it before any write that is due.
///
/// No handle is kept between lines: every append opens, writes and closes the
/// file, so a rotation is always picked up by the next write.
pub struct LogWriter {
    path: PathBuf,
    config: RotationConfig,
    rotations: u64,
}

impl LogWriter {
    /// Create a new log writer, rotating a stale live file straight away
    pub fn open(path: PathBuf, config: RotationConfig) -> Result<Self> {
        config.validate()?;

        let mut writer = Self {
            path,
            config,
            rotations: 0,
        };
        writer.rotate_if_due()?;

        Ok(writer)
    }

    /// Append one line, rotating first if the policy asks for it.
    ///
    /// The bytes are written as given; the caller keeps the terminator.
    pub fn append_line(&mut self, line: &[u8]) -> Result<()> {
        self.rotate_if_due()?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| self.write_error(source))?;

        file.write_all(line)
            .map_err(|source| self.write_error(source))?;

        Ok(())
    }

    /// Copy every line of `input` into the log until end of stream.
    ///
    /// A line that cannot be written is reported and skipped. Rotation and
    /// read failures stop the pass.
    pub fn pipe<R: BufRead>(&mut self, mut input: R) -> Result<PipeStats> {
        let rotations_before = self.rotations;
        let mut stats = PipeStats::default();
        let mut line = Vec::new();

        loop {
            line.clear();
            if input.read_until(b'\n', &mut line)? == 0 {
                break;
            }

            match self.append_line(&line) {
                Ok(()) => stats.lines_written += 1,
                Err(e) if !e.is_fatal() => {
                    error!("Dropped line: {}", e);
                    stats.lines_failed += 1;
                }
                Err(e) => return Err(e),
            }
        }

        stats.rotations = self.rotations - rotations_before;
        info!(
            "End of input: {} line(s) written, {} failed, {} rotation(s)",
            stats.lines_written, stats.lines_failed, stats.rotations
        );

        Ok(stats)
    }

    fn rotate_if_due(&mut self) -> Result<bool> {
        if !self.config.should_rotate(&self.path)? {
            return Ok(false);
        }

        debug!("Rotating log file: {}", self.path.display());
        self.config.rotate(&self.path)?;
        self.rotations += 1;
        Ok(true)
    }

    fn write_error(&self, source: std::io::Error) -> Error {
        Error::Write {
            path: self.path.clone(),
            source,
        }
    }

    /// Get the live file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &RotationConfig {
        &self.config
    }

    /// Number of rotations performed since the writer was opened
    pub fn rotations(&self) -> u64 {
        self.rotations
    }
}
