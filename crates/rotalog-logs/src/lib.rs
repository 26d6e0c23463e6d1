//! rotalog logs - Appending, rotation policy, and backup cascading

mod rotation;
mod writer;

pub use rotation::{backup_path, day_changed, RotationConfig};
pub use writer::{LogWriter, PipeStats};
