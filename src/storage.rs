// File: ./src/storage.rs
// Reading short-hand input files and writing the finished calendar.
use crate::model::EventBook;
use anyhow::{Context, Result};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct LocalStorage;

impl LocalStorage {
    /// Opens an input file for line-by-line reading. The handle closes when
    /// the returned reader is dropped.
    pub fn open_input(path: &Path) -> Result<BufReader<File>> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open input file '{}'", path.display()))?;
        Ok(BufReader::new(file))
    }

    /// Writes to a sibling temp file, then renames it over `path`, so a failed
    /// run never leaves a half-written calendar behind.
    pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
        let path = path.as_ref();
        let tmp_path = Self::temp_path(path);
        fs::write(&tmp_path, contents)
            .with_context(|| format!("Failed to write '{}'", tmp_path.display()))?;
        if let Err(e) = fs::rename(&tmp_path, path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e)
                .with_context(|| format!("Failed to move calendar into '{}'", path.display()));
        }
        Ok(())
    }

    /// `my.ics` -> `my.ics.<uuid>.tmp`, which cannot collide with a user's own
    /// files next to the output.
    fn temp_path(path: &Path) -> PathBuf {
        let mut name = path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("calendar"));
        name.push(format!(".{}.tmp", Uuid::new_v4()));
        path.with_file_name(name)
    }

    pub fn write_calendar(path: &Path, book: &EventBook, name: Option<&str>) -> Result<()> {
        let ics = book.to_ics_string(name);
        Self::atomic_write(path, ics)?;
        log::info!("Wrote {} event(s) to {}", book.len(), path.display());
        Ok(())
    }
}
