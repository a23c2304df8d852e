//! Lesson progress persisted as a JSON file.
//!
//! The whole store is small, so every mutation rewrites the file. Writes go
//! through a temporary file and an atomic rename; the progress file is never
//! left half-written.
//!
//! # File format
//!
//! ```json
//! {
//!   "lessons": [
//!     { "title": "lesson1", "best_speed": 6.0, "current_speed": 6.0, "completed": true }
//!   ]
//! }
//! ```

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use atomic_write_file::AtomicWriteFile;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use tui_typist_core::{LessonStore, StoreError};
use tui_typist_types::LessonRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct RecordRow {
    title: String,
    best_speed: f64,
    current_speed: f64,
    completed: bool,
}

impl From<&LessonRecord> for RecordRow {
    fn from(r: &LessonRecord) -> Self {
        Self {
            title: r.title.clone(),
            best_speed: r.best_speed,
            current_speed: r.current_speed,
            completed: r.completed,
        }
    }
}

impl From<RecordRow> for LessonRecord {
    fn from(r: RecordRow) -> Self {
        Self {
            title: r.title,
            best_speed: r.best_speed,
            current_speed: r.current_speed,
            completed: r.completed,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ProgressFile {
    #[serde(default)]
    lessons: Vec<RecordRow>,
}

/// Progress store backed by a JSON file.
///
/// The file is read once on open; the in-memory copy is authoritative for
/// the rest of the process.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    records: BTreeMap<String, LessonRecord>,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let records = match fs::read_to_string(&path) {
            Ok(text) => parse(&path, &text)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!(path = %path.display(), "no progress file yet; starting fresh");
                BTreeMap::new()
            }
            Err(err) => return Err(StoreError::Io(err)),
        };
        debug!(path = %path.display(), records = records.len(), "progress loaded");
        Ok(Self { path, records })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let doc = ProgressFile {
            lessons: self.records.values().map(RecordRow::from).collect(),
        };
        let mut json = serde_json::to_vec_pretty(&doc).map_err(io::Error::from)?;
        json.push(b'\n');

        let mut file = AtomicWriteFile::options().open(&self.path)?;
        file.write_all(&json)?;
        file.commit()?;
        debug!(path = %self.path.display(), records = self.records.len(), "progress saved");
        Ok(())
    }
}

fn parse(path: &Path, text: &str) -> Result<BTreeMap<String, LessonRecord>, StoreError> {
    if text.trim().is_empty() {
        return Ok(BTreeMap::new());
    }
    let doc: ProgressFile = serde_json::from_str(text).map_err(|e| StoreError::Corrupt {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(doc
        .lessons
        .into_iter()
        .map(|row| (row.title.clone(), LessonRecord::from(row)))
        .collect())
}

impl LessonStore for JsonFileStore {
    fn read_completed(&self) -> Result<HashSet<String>, StoreError> {
        Ok(self
            .records
            .values()
            .filter(|r| r.completed)
            .map(|r| r.title.clone())
            .collect())
    }

    fn read_all(&self) -> Result<Vec<LessonRecord>, StoreError> {
        Ok(self.records.values().cloned().collect())
    }

    fn record(&self, title: &str) -> Result<Option<LessonRecord>, StoreError> {
        Ok(self.records.get(title).cloned())
    }

    fn complete(
        &mut self,
        title: &str,
        current_speed: f64,
        best_speed: f64,
    ) -> Result<(), StoreError> {
        self.records.insert(
            title.to_string(),
            LessonRecord::completed(title, current_speed, best_speed),
        );
        self.save()
    }

    fn reset_all(&mut self) -> Result<(), StoreError> {
        for record in self.records.values_mut() {
            record.completed = false;
        }
        info!(records = self.records.len(), "progress reset");
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty_store() {
        let tmp = TempDir::new().unwrap();
        let store = JsonFileStore::open(tmp.path().join("progress.json")).unwrap();
        assert!(store.read_all().unwrap().is_empty());
        assert!(store.read_completed().unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_complete_persists_across_reopen() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("progress.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.complete("lesson2", 30.0, 35.0).unwrap();
        store.complete("lesson1", 6.0, 6.0).unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        let all = reopened.read_all().unwrap();
        assert_eq!(
            all,
            vec![
                LessonRecord::completed("lesson1", 6.0, 6.0),
                LessonRecord::completed("lesson2", 30.0, 35.0),
            ]
        );
        assert_eq!(reopened.read_completed().unwrap().len(), 2);
    }

    #[test]
    fn test_complete_overwrites_existing_record() {
        let tmp = TempDir::new().unwrap();
        let mut store = JsonFileStore::open(tmp.path().join("p.json")).unwrap();
        store.complete("lesson1", 6.0, 6.0).unwrap();
        store.complete("lesson1", 12.0, 12.0).unwrap();

        assert_eq!(
            store.record("lesson1").unwrap(),
            Some(LessonRecord::completed("lesson1", 12.0, 12.0))
        );
        assert_eq!(store.read_all().unwrap().len(), 1);
    }

    #[test]
    fn test_reset_clears_completion_but_keeps_speeds() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("progress.json");
        let mut store = JsonFileStore::open(&path).unwrap();
        store.complete("lesson1", 6.0, 8.0).unwrap();
        store.reset_all().unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        assert!(reopened.read_completed().unwrap().is_empty());
        let record = reopened.record("lesson1").unwrap().unwrap();
        assert!(!record.completed);
        assert_eq!(record.best_speed, 8.0);
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("progress.json");
        fs::write(&path, "{ not json").unwrap();

        let err = JsonFileStore::open(&path).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[test]
    fn test_empty_file_is_empty_store() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("progress.json");
        fs::write(&path, "\n").unwrap();
        assert!(JsonFileStore::open(&path).unwrap().read_all().unwrap().is_empty());
    }

    #[test]
    fn test_file_format() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested/dir/progress.json");
        let mut store = JsonFileStore::open(&path).unwrap();
        store.complete("lesson1", 6.0, 6.0).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["lessons"][0]["title"], "lesson1");
        assert_eq!(value["lessons"][0]["best_speed"], 6.0);
        assert_eq!(value["lessons"][0]["completed"], true);
    }
}
