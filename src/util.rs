// src/util.rs
use anyhow::{Context, Result};
use std::{fs, io, path::Path};

/// Read a whole file. A missing file is `Ok(None)`; any other I/O error propagates.
pub fn read_optional(path: &Path) -> Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("reading {}", path.display())),
    }
}

pub fn missing_message(path: &Path, hint: &str) -> String {
    format!("Error: '{}' not found. {}", path.display(), hint)
}
