//! Append-only response log backed by a single flat text file.
//!
//! The file itself is the durable record: one CSV line per submission,
//! append order = chronological order. There is no index and no parsed
//! on-disk structure; readers get the raw lines.

use crate::errors::AppResult;
use crate::models::response::Response;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ResponseLog {
    path: PathBuf,
}

impl ResponseLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Append one response as a new line, creating the file (and its
    /// parent directory) if absent. A failed append leaves prior content
    /// untouched.
    pub fn append(&self, response: &Response) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", response.to_line())?;
        Ok(())
    }

    /// All lines, newest first. A missing file is the normal empty state.
    pub fn read_all(&self) -> AppResult<Vec<String>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let mut lines: Vec<String> = content
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(str::to_string)
            .collect();
        lines.reverse();
        Ok(lines)
    }

    /// All lines in append (chronological) order, for exports.
    pub fn read_chronological(&self) -> AppResult<Vec<String>> {
        let mut lines = self.read_all()?;
        lines.reverse();
        Ok(lines)
    }

    /// Delete the log file. Returns whether there was a file to delete,
    /// so callers can tell "deleted" apart from "nothing to delete".
    pub fn clear(&self) -> AppResult<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.path)?;
        Ok(true)
    }
}
