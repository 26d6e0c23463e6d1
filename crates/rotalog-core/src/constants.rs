//! Constants and default values for rotalog

/// Live file size above which it is rotated (20MB)
pub const MAX_FILE_SIZE: u64 = 20 * 1024 * 1024;

/// Deepest backup slot kept; the file in it is overwritten once the chain is full
pub const MAX_LOG_ROTATE: u32 = 200;

/// Separator between the live path and the backup slot number
pub const BACKUP_SEPARATOR: char = '.';
