//! Rotation policy and backup cascading
//!
//! A live file is rotated when it grows past `max_size_bytes` or when it was
//! created on an earlier local calendar day. Rotation shifts the numbered
//! backups (`app.log.1`, `app.log.2`, ...) one slot up and moves the live file
//! into slot 1.

use chrono::{DateTime, Local};
use rotalog_core::constants::{BACKUP_SEPARATOR, MAX_FILE_SIZE, MAX_LOG_ROTATE};
use rotalog_core::{Error, Result};
use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, info};

/// Log rotation configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationConfig {
    /// Live file size in bytes above which it is rotated
    pub max_size_bytes: u64,
    /// Highest backup slot number kept
    pub max_backups: u32,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            max_size_bytes: MAX_FILE_SIZE,
            max_backups: MAX_LOG_ROTATE,
        }
    }
}

impl RotationConfig {
    pub fn new(max_size_bytes: u64, max_backups: u32) -> Self {
        Self {
            max_size_bytes,
            max_backups,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_backups == 0 {
            return Err(Error::config("max_backups must be at least 1"));
        }
        Ok(())
    }

    /// Check whether the live file at `path` is due for rotation
    pub fn should_rotate(&self, path: &Path) -> Result<bool> {
        self.should_rotate_at(path, Local::now())
    }

    /// Same as [`should_rotate`](Self::should_rotate), against an explicit clock
    pub fn should_rotate_at(&self, path: &Path, now: DateTime<Local>) -> Result<bool> {
        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
            Err(source) => {
                return Err(Error::Metadata {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        if !metadata.is_file() {
            return Ok(false);
        }

        if metadata.len() > self.max_size_bytes {
            debug!(
                "{} is {} bytes, over the {} byte limit",
                path.display(),
                metadata.len(),
                self.max_size_bytes
            );
            return Ok(true);
        }

        let created = creation_time(&metadata).map_err(|source| Error::Metadata {
            path: path.to_path_buf(),
            source,
        })?;

        if day_changed(created, now) {
            debug!(
                "{} was created on {}, today is {}",
                path.display(),
                created.date_naive(),
                now.date_naive()
            );
            return Ok(true);
        }

        Ok(false)
    }

    /// Move the live file into slot 1, shifting occupied slots up first.
    ///
    /// The shift stops at the first empty slot. Once every slot up to
    /// `max_backups` is taken, the file in the last slot is overwritten by
    /// its neighbour and lost. The live file must exist.
    pub fn rotate(&self, path: &Path) -> Result<()> {
        let mut top = 1;
        while top < self.max_backups && backup_path(path, top).is_file() {
            top += 1;
        }

        for slot in (1..top).rev() {
            rename(&backup_path(path, slot), &backup_path(path, slot + 1))?;
        }

        rename(path, &backup_path(path, 1))?;

        info!("Rotated {} ({} backup slot(s) shifted)", path.display(), top - 1);
        Ok(())
    }
}

/// Get the path of backup slot `slot` for a live file
pub fn backup_path(path: &Path, slot: u32) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(format!("{}{}", BACKUP_SEPARATOR, slot));
    PathBuf::from(name)
}

/// Whether `created` falls on a different local calendar day than `now`
pub fn day_changed(created: DateTime<Local>, now: DateTime<Local>) -> bool {
    created.date_naive() != now.date_naive()
}

fn rename(from: &Path, to: &Path) -> Result<()> {
    debug!("Renaming {} -> {}", from.display(), to.display());
    fs::rename(from, to).map_err(|source| Error::Rename {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })
}

/// Birth time where the filesystem records one, otherwise the inode change time
fn creation_time(metadata: &Metadata) -> io::Result<DateTime<Local>> {
    let created = match metadata.created() {
        Ok(created) => created,
        Err(_) => changed_time(metadata)?,
    };
    Ok(DateTime::<Local>::from(created))
}

#[cfg(unix)]
fn changed_time(metadata: &Metadata) -> io::Result<SystemTime> {
    use std::os::unix::fs::MetadataExt;
    use std::time::{Duration, UNIX_EPOCH};

    let secs = u64::try_from(metadata.ctime()).unwrap_or(0);
    let nanos = u32::try_from(metadata.ctime_nsec()).unwrap_or(0);
    Ok(UNIX_EPOCH + Duration::new(secs, nanos))
}

#[cfg(not(unix))]
fn changed_time(metadata: &Metadata) -> io::Result<SystemTime> {
    metadata.modified()
}
