//! Command implementations for templink
//!
//! Each command is implemented in its own module.

pub mod config;
pub mod def;
pub mod symbol;
pub mod templates;

use std::path::Path;

use crate::infra::text;

/// Line and column of `offset` in a file on disk, if readable
pub(crate) fn position_in_file(path: &Path, offset: usize) -> Option<(u32, u32)> {
    match std::fs::read_to_string(path) {
        Ok(content) => text::line_column_at(&content, offset),
        Err(e) => {
            tracing::debug!("Cannot read {}: {}", path.display(), e);
            None
        }
    }
}
