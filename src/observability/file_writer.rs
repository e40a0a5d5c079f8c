//! Append-only trace file with size-based rotation.

use chrono::Local;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Rotation threshold for the live trace file (10 MB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Rotated files kept next to the live one.
pub const MAX_BACKUP_FILES: usize = 3;

/// Line-oriented writer that rolls `<name>.json` over to
/// `<name>.json.<timestamp>` once it outgrows its limit.
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    handle: Mutex<Option<File>>,
}

impl RotatingFile {
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limits(path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    pub const fn with_limits(path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            max_backups,
            handle: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first when the file is over the limit.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if rotation, open, or write fails.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::other(format!("trace file lock poisoned: {e}")))?;

        if self.needs_rotation() {
            *handle = None;
            self.rotate()?;
        }

        let file = match handle.as_mut() {
            Some(file) => file,
            None => handle.insert(OpenOptions::new().create(true).append(true).open(&self.path)?),
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|meta| meta.len() > self.max_bytes)
    }

    fn rotate(&self) -> io::Result<()> {
        let stamp = Local::now().format("%Y%m%dT%H%M%S%.3f");
        let Some(name) = self.path.file_name().and_then(|n| n.to_str()) else {
            return Err(io::Error::other("trace file has no name"));
        };
        let backup = self.path.with_file_name(format!("{name}.{stamp}"));
        fs::rename(&self.path, backup)?;
        self.prune_backups(name)
    }

    /// Deletes the oldest rotated files beyond the retention count.
    fn prune_backups(&self, name: &str) -> io::Result<()> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let prefix = format!("{name}.");

        let mut backups: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with(&prefix))
            })
            .collect();

        // timestamps sort lexically
        backups.sort();
        let excess = backups.len().saturating_sub(self.max_backups);
        for stale in backups.iter().take(excess) {
            let _ = fs::remove_file(stale);
        }
        Ok(())
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn rotated(dir: &Path) -> usize {
        fs::read_dir(dir)
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().starts_with("trace.json."))
            .count()
    }

    #[test]
    fn appends_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("trace.json");
        let file = RotatingFile::new(path.clone());

        file.write_line("{\"a\":1}").unwrap();
        file.write_line("{\"b\":2}").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{\"a\":1}\n{\"b\":2}\n");
        assert_eq!(rotated(dir.path()), 0);
    }

    #[test]
    fn rotates_once_over_limit() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("trace.json");
        let file = RotatingFile::with_limits(path.clone(), 8, 3);

        file.write_line("0123456789").unwrap();
        file.write_line("next").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "next\n");
        assert_eq!(rotated(dir.path()), 1);
    }

    #[test]
    fn keeps_bounded_backups() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("trace.json");
        for i in 0..5 {
            fs::write(dir.path().join(format!("trace.json.2026010{i}T000000.000")), "old").unwrap();
        }
        let file = RotatingFile::with_limits(path, 0, 2);

        file.write_line("first").unwrap();
        file.write_line("second").unwrap();

        assert_eq!(rotated(dir.path()), 2);
    }
}
