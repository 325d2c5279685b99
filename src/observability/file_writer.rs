//! Rotating file writer with size-based rotation and backup retention.
//!
//! [`FileWriter`] is the sink behind the fmt layer. It appends to a single log
//! file and, once that file grows past its size limit, moves it aside under a
//! timestamped name and starts a fresh one. Only the newest backups are kept.

use chrono::Utc;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing_subscriber::fmt::MakeWriter;

/// Maximum file size before rotation (10 MB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
pub const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating file writer.
///
/// The file is opened lazily on the first write. Before each write the current
/// size is checked; past the limit the file is renamed to
/// `<name>.<timestamp>` and backups beyond the retention count are removed.
///
/// # Example
///
/// ```rust
/// use cinesearch::observability::FileWriter;
/// use std::io::Write;
///
/// let dir = std::env::temp_dir().join("cinesearch-doc");
/// std::fs::create_dir_all(&dir)?;
/// let writer = FileWriter::new(dir.join("cinesearch.log"));
/// (&writer).write_all(b"started\n")?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct FileWriter {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    file: Mutex<Option<File>>,
}

impl FileWriter {
    /// Creates a writer with the default limits.
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    #[must_use]
    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            file: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn append(&self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);

        if self.needs_rotation() {
            *file = None;
            self.rotate()?;
        }

        if file.is_none() {
            *file = Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.file_path)?,
            );
        }

        let handle = file
            .as_mut()
            .ok_or_else(|| io::Error::other("log file unavailable"))?;
        handle.write_all(buf)?;
        handle.flush()?;
        Ok(buf.len())
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.file_path).is_ok_and(|metadata| metadata.len() > self.max_bytes)
    }

    fn rotate(&self) -> io::Result<()> {
        let suffix = Utc::now().format("%Y%m%dT%H%M%S%.9f");
        let mut backup = self.file_path.clone().into_os_string();
        backup.push(format!(".{suffix}"));

        fs::rename(&self.file_path, PathBuf::from(backup))?;
        self.prune_backups()
    }

    fn prune_backups(&self) -> io::Result<()> {
        let backups = self.backups()?;
        // Timestamp suffixes sort chronologically, newest last.
        let excess = backups.len().saturating_sub(self.max_backups);
        for old in backups.iter().take(excess) {
            let _ = fs::remove_file(old);
        }
        Ok(())
    }

    /// Backup files of this log, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error when the parent directory cannot be read.
    pub fn backups(&self) -> io::Result<Vec<PathBuf>> {
        let parent = self
            .file_path
            .parent()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "log path has no parent"))?;
        let prefix = self
            .file_path
            .file_name()
            .and_then(|name| name.to_str())
            .map(|name| format!("{name}."))
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "invalid log file name"))?;

        let mut backups: Vec<PathBuf> = fs::read_dir(parent)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect();
        backups.sort();
        Ok(backups)
    }
}

impl Write for &FileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.append(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for FileWriter {
    type Writer = &'a FileWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self
    }
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
