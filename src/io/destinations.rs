//! Output destination abstractions for report writers.
//!
//! Renderers produce a `String`; an [`OutputDestination`] decides where it
//! goes. `MemoryDestination` lets tests inspect output without touching
//! stdout or the file system.

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use crate::core::{Error, Result};

pub trait OutputDestination: Send + Sync {
    fn write_str(&self, content: &str) -> Result<()>;

    /// Description of the destination for log and error messages.
    fn description(&self) -> String;
}

/// Writes to a file, creating missing parent directories first.
#[derive(Debug, Clone)]
pub struct FileDestination {
    path: PathBuf,
}

impl FileDestination {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl OutputDestination for FileDestination {
    fn write_str(&self, content: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            super::ensure_dir(parent)?;
        }
        std::fs::write(&self.path, content).map_err(|e| {
            Error::file_system(
                format!("Failed to write to {}", self.path.display()),
                &self.path,
            )
            .with_io_source(e)
        })
    }

    fn description(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

/// Thread-safe in-memory buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryDestination {
    buffer: Arc<Mutex<String>>,
}

impl MemoryDestination {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_content(&self) -> String {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl OutputDestination for MemoryDestination {
    fn write_str(&self, content: &str) -> Result<()> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_str(content);
        Ok(())
    }

    fn description(&self) -> String {
        "memory".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutDestination;

impl OutputDestination for StdoutDestination {
    fn write_str(&self, content: &str) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(content.as_bytes())?;
        if !content.ends_with('\n') {
            handle.write_all(b"\n")?;
        }
        handle.flush()?;
        Ok(())
    }

    fn description(&self) -> String {
        "stdout".to_string()
    }
}

/// Destination for an optional `--output` path: the file if given, else stdout.
pub fn destination_for(output: Option<PathBuf>) -> Box<dyn OutputDestination> {
    match output {
        Some(path) => Box::new(FileDestination::new(path)),
        None => Box::new(StdoutDestination),
    }
}
