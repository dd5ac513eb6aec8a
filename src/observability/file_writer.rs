//! Size-rotated append-only file writer for exported spans.
//!
//! Backups are numbered like logrotate: `traces.json` rotates to
//! `traces.json.1`, the previous `.1` becomes `.2`, and anything past the
//! retention limit is deleted.

use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::PathBuf;
use std::sync::Mutex;

/// When to rotate and how many rotated files to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    /// Rotate before a write once the file has reached this size.
    pub max_bytes: u64,

    /// Rotated files to keep; 0 truncates instead of keeping history.
    pub max_backups: usize,
}

/// Thread-safe line writer with size-based rotation.
///
/// The file is opened lazily on the first write and reopened after each
/// rotation.
#[derive(Debug)]
pub struct RotatingWriter {
    path: PathBuf,
    policy: RotationPolicy,
    file: Mutex<Option<File>>,
}

impl RotatingWriter {
    pub const fn new(path: PathBuf, policy: RotationPolicy) -> Self {
        Self {
            path,
            policy,
            file: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if the file is full.
    ///
    /// # Errors
    ///
    /// Fails if rotation, opening, writing or flushing fails, or if the lock
    /// was poisoned by a panicking writer.
    pub fn append_line(&self, line: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::new(ErrorKind::Other, "trace writer lock poisoned"))?;

        if self.is_full() {
            *guard = None;
            self.rotate()?;
        }

        if guard.is_none() {
            *guard = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }
        let Some(file) = guard.as_mut() else {
            return Err(io::Error::new(ErrorKind::Other, "trace file unavailable"));
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn is_full(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|meta| meta.len() >= self.policy.max_bytes)
    }

    fn rotate(&self) -> io::Result<()> {
        if self.policy.max_backups == 0 {
            return ignore_missing(fs::remove_file(&self.path));
        }

        ignore_missing(fs::remove_file(self.backup_path(self.policy.max_backups)))?;
        for n in (1..self.policy.max_backups).rev() {
            ignore_missing(fs::rename(self.backup_path(n), self.backup_path(n + 1)))?;
        }
        ignore_missing(fs::rename(&self.path, self.backup_path(1)))
    }

    /// Path of the `n`th backup, e.g. `traces.json.2`.
    #[must_use]
    pub fn backup_path(&self, n: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }
}

fn ignore_missing(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        other => other,
    }
}
