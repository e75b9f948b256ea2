//! # File Utilities
//!
//! Thin wrappers over `std::fs` plus JSON save/load helpers. Everything
//! returns [`LoamResult`] so callers can propagate with `?`.

use crate::LoamResult;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Reads an entire file into a string.
pub fn read_to_string<P: AsRef<Path>>(path: P) -> LoamResult<String> {
    Ok(std::fs::read_to_string(path)?)
}

/// Reads an entire file into a byte vector.
pub fn read_to_bytes<P: AsRef<Path>>(path: P) -> LoamResult<Vec<u8>> {
    Ok(std::fs::read(path)?)
}

/// Reads a file into a vector of lines.
pub fn read_lines<P: AsRef<Path>>(path: P) -> LoamResult<Vec<String>> {
    Ok(read_to_string(path)?.lines().map(str::to_owned).collect())
}

/// Writes a string to a file, creating or truncating it.
pub fn write_string<P: AsRef<Path>>(path: P, contents: &str) -> LoamResult<()> {
    Ok(std::fs::write(path, contents)?)
}

/// Writes raw bytes to a file, creating or truncating it.
pub fn write_bytes<P: AsRef<Path>>(path: P, contents: &[u8]) -> LoamResult<()> {
    Ok(std::fs::write(path, contents)?)
}

/// Appends a string to a file, creating it if missing.
pub fn append_string<P: AsRef<Path>>(path: P, contents: &str) -> LoamResult<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(contents.as_bytes())?;
    Ok(())
}

/// Serializes a value to pretty-printed JSON on disk.
pub fn save_json<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> LoamResult<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, value)?;
    Ok(())
}

/// Deserializes a value from a JSON file.
pub fn load_json<P: AsRef<Path>, T: DeserializeOwned>(path: P) -> LoamResult<T> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(file)?)
}
