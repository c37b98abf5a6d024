//! Append-only line writer with size-based rotation.
//!
//! Trace exports are written one JSON document per line. When the active file
//! grows past the size limit it is renamed to `<name>.<n>` style backups and a
//! fresh file is started, keeping disk usage bounded.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Rotate once the active file is larger than this (10 MB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Rotated files to keep.
pub const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating line writer.
///
/// The file is opened lazily on first write. Backups are numbered
/// `<file>.1` (newest) through `<file>.<max_backups>` (oldest).
pub struct FileWriter {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    file: Mutex<Option<File>>,
}

impl FileWriter {
    /// Creates a writer with the default rotation limits.
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            file: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if the file is full.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if rotating, opening, or writing fails, or if the
    /// lock was poisoned by a panicking writer.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::other(format!("trace writer lock poisoned: {e}")))?;

        if self.needs_rotation() {
            *guard = None;
            self.rotate()?;
        }

        if guard.is_none() {
            *guard = Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.file_path)?,
            );
        }
        let file = guard
            .as_mut()
            .ok_or_else(|| io::Error::other("trace file unavailable"))?;

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.file_path).is_ok_and(|metadata| metadata.len() > self.max_bytes)
    }

    /// Shifts `<file>.n` to `<file>.n+1`, dropping the oldest, then moves the
    /// active file to `<file>.1`.
    fn rotate(&self) -> io::Result<()> {
        if self.max_backups == 0 {
            return fs::remove_file(&self.file_path);
        }

        let oldest = backup_path(&self.file_path, self.max_backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }

        for index in (1..self.max_backups).rev() {
            let from = backup_path(&self.file_path, index);
            if from.exists() {
                fs::rename(&from, backup_path(&self.file_path, index + 1))?;
            }
        }

        fs::rename(&self.file_path, backup_path(&self.file_path, 1))
    }
}

fn backup_path(path: &Path, index: usize) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(format!(".{index}"));
    PathBuf::from(name)
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}
