//! Progress store seam.

use std::collections::{BTreeMap, HashSet};

use crate::error::StoreError;
use crate::types::LessonRecord;

/// Key-value store of lesson progress, keyed by lesson title.
pub trait LessonStore {
    /// Titles of all lessons currently marked complete.
    fn read_completed(&self) -> Result<HashSet<String>, StoreError>;

    /// Every stored record, ordered by title.
    fn read_all(&self) -> Result<Vec<LessonRecord>, StoreError>;

    fn record(&self, title: &str) -> Result<Option<LessonRecord>, StoreError> {
        Ok(self.read_all()?.into_iter().find(|r| r.title == title))
    }

    /// Upsert a completed record for `title`.
    fn complete(
        &mut self,
        title: &str,
        current_speed: f64,
        best_speed: f64,
    ) -> Result<(), StoreError>;

    /// Clear the completed flag of every lesson. Speeds are kept.
    fn reset_all(&mut self) -> Result<(), StoreError>;
}

/// In-memory progress store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: BTreeMap<String, LessonRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: impl IntoIterator<Item = LessonRecord>) -> Self {
        Self {
            records: records
                .into_iter()
                .map(|r| (r.title.clone(), r))
                .collect(),
        }
    }
}

impl LessonStore for MemoryStore {
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
        Ok(())
    }

    fn reset_all(&mut self) -> Result<(), StoreError> {
        for record in self.records.values_mut() {
            record.completed = false;
        }
        Ok(())
    }
}
