//! Filesystem helpers for materializing workspaces.
//!
//! Directories are created with owner rwx, group/other rx permissions on Unix.

use std::fs::{self, DirBuilder, File};
use std::io::{self, Write};
use std::path::Path;

/// Permission bits for every directory the workspace creates.
pub const DEFAULT_DIR_MODE: u32 = 0o755;

fn dir_builder(recursive: bool) -> DirBuilder {
    let mut builder = DirBuilder::new();
    builder.recursive(recursive);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DEFAULT_DIR_MODE);
    }
    builder
}

/// Create `path` and any missing parents.
pub fn create_dir_all(path: &Path) -> io::Result<()> {
    dir_builder(true).create(path)
}

/// Create `path`; its parent must already exist.
pub fn create_dir(path: &Path) -> io::Result<()> {
    dir_builder(false).create(path)
}

/// Write `content` to `path`, replacing any previous file, and flush it to disk.
pub fn write_synced(path: &Path, content: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()
}

pub fn read_to_string(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
}
