pub mod destinations;

pub use destinations::{
    destination_for, FileDestination, MemoryDestination, OutputDestination, StdoutDestination,
};

use std::fs;
use std::path::Path;

use crate::core::{Error, Result};

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| {
        Error::file_system(format!("Failed to write {}", path.display()), path).with_io_source(e)
    })
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.as_os_str().is_empty() && !path.exists() {
        fs::create_dir_all(path).map_err(|e| {
            Error::file_system(format!("Failed to create {}", path.display()), path)
                .with_io_source(e)
        })?;
    }
    Ok(())
}
