//! Scan history persistence.
//!
//! The whole history lives in one JSON document on disk, the file analog of
//! the single key-value slot the app format prescribes:
//! - current shape: `{"schemaVersion": 1, "scans": [...]}`
//! - the legacy unversioned bare-array shape stays readable
//! - append/remove rewrite the whole document; last writer wins, no
//!   partial-write recovery
//!
//! Unreadable history degrades to an empty list with a soft warning instead
//! of failing the caller. Append and remove are non-atomic read-modify-write
//! sequences, so they take `&mut self`: writers must be serialized through
//! one owning instance.

use std::cmp::Reverse;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::analyzer::ScanResult;
use crate::error::{AutodiagError, Result};

const SCHEMA_VERSION: u32 = 1;
const HISTORY_FILE_NAME: &str = "scan_history.json";

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HistoryFile {
    schema_version: u32,
    scans: Vec<ScanResult>,
}

/// Outcome of reading the history: the scans, newest first, plus an
/// optional soft warning when the persisted data could not be used.
pub struct HistoryList {
    pub scans: Vec<ScanResult>,
    pub warning: Option<AutodiagError>,
}

pub struct HistoryStore {
    path: PathBuf,
}

/// Default history location under the platform data directory
/// (~/.local/share/autodiag/scan_history.json or the platform equivalent).
pub fn default_history_path() -> Result<PathBuf> {
    let data_dir = directories::ProjectDirs::from("", "", "autodiag")
        .ok_or_else(|| AutodiagError::Config("could not determine data directory".to_string()))?
        .data_dir()
        .to_path_buf();

    Ok(data_dir.join(HISTORY_FILE_NAME))
}

impl HistoryStore {
    /// A store backed by the given file. No disk access happens here; every
    /// operation reads the file fresh.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        HistoryStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Add a scan to the history. Missing or corrupt existing data counts
    /// as an empty history and gets overwritten.
    pub fn append(&mut self, scan: &ScanResult) -> Result<()> {
        let (mut scans, _) = self.read();
        scans.push(scan.clone());
        self.write(&scans)
    }

    /// All scans, sorted newest-first by timestamp regardless of the order
    /// they were written in.
    pub fn list(&self) -> HistoryList {
        let (mut scans, warning) = self.read();
        scans.sort_by_key(|scan| Reverse(timestamp_millis(scan)));
        HistoryList { scans, warning }
    }

    /// Look a scan up by id.
    pub fn find_by_id(&self, scan_id: &str) -> Option<ScanResult> {
        let (scans, _) = self.read();
        scans.into_iter().find(|scan| scan.scan_id == scan_id)
    }

    /// Drop a scan from the history. Removing an id that is not present is
    /// a no-op success.
    pub fn remove(&mut self, scan_id: &str) -> Result<()> {
        let (mut scans, _) = self.read();
        scans.retain(|scan| scan.scan_id != scan_id);
        self.write(&scans)
    }

    fn read(&self) -> (Vec<ScanResult>, Option<AutodiagError>) {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return (Vec::new(), None),
            Err(e) => return (Vec::new(), Some(self.read_error(e.to_string()))),
        };

        match serde_json::from_str::<HistoryFile>(&raw) {
            Ok(file) if file.schema_version <= SCHEMA_VERSION => (file.scans, None),
            Ok(file) => (
                Vec::new(),
                Some(self.read_error(format!(
                    "unsupported schema version {}",
                    file.schema_version
                ))),
            ),
            // histories written before the schema version field were a bare
            // array of scans
            Err(_) => match serde_json::from_str::<Vec<ScanResult>>(&raw) {
                Ok(scans) => (scans, None),
                Err(e) => (Vec::new(), Some(self.read_error(e.to_string()))),
            },
        }
    }

    fn write(&self, scans: &[ScanResult]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.write_error(e.to_string()))?;
        }

        let file = HistoryFile {
            schema_version: SCHEMA_VERSION,
            scans: scans.to_vec(),
        };
        let json =
            serde_json::to_string_pretty(&file).map_err(|e| self.write_error(e.to_string()))?;

        fs::write(&self.path, json).map_err(|e| self.write_error(e.to_string()))
    }

    fn read_error(&self, reason: String) -> AutodiagError {
        AutodiagError::StorageRead {
            path: self.path.clone(),
            reason,
        }
    }

    fn write_error(&self, reason: String) -> AutodiagError {
        AutodiagError::StorageWrite {
            path: self.path.clone(),
            reason,
        }
    }
}

fn timestamp_millis(scan: &ScanResult) -> i64 {
    chrono::DateTime::parse_from_rfc3339(&scan.timestamp)
        .map(|dt| dt.timestamp_millis())
        .unwrap_or(i64::MIN)
}
