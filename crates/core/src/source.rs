//! Lesson source seam.

use std::cell::RefCell;

use crate::error::SourceError;
use crate::types::Lesson;

/// Ordered collection of lessons.
///
/// `list` must return titles in a stable order across runs; the progression
/// controller presents lessons in exactly that order. `load` is called only
/// for lessons that are actually presented.
pub trait LessonSource {
    fn list(&self) -> Result<Vec<String>, SourceError>;
    fn load(&self, title: &str) -> Result<Lesson, SourceError>;
}

/// In-memory lesson source.
///
/// Remembers which lessons were loaded so callers can check that skipped
/// lessons were never touched.
#[derive(Debug, Default)]
pub struct MemoryLessonSource {
    lessons: Vec<Lesson>,
    loaded: RefCell<Vec<String>>,
}

impl MemoryLessonSource {
    pub fn new(lessons: Vec<Lesson>) -> Self {
        Self {
            lessons,
            loaded: RefCell::new(Vec::new()),
        }
    }

    /// Titles passed to `load`, in call order.
    pub fn loaded(&self) -> Vec<String> {
        self.loaded.borrow().clone()
    }
}

impl LessonSource for MemoryLessonSource {
    fn list(&self) -> Result<Vec<String>, SourceError> {
        Ok(self.lessons.iter().map(|l| l.title.clone()).collect())
    }

    fn load(&self, title: &str) -> Result<Lesson, SourceError> {
        let lesson = self
            .lessons
            .iter()
            .find(|l| l.title == title)
            .cloned()
            .ok_or_else(|| SourceError::UnknownLesson(title.to_string()))?;
        self.loaded.borrow_mut().push(title.to_string());
        Ok(lesson)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_source_keeps_order_and_tracks_loads() {
        let source = MemoryLessonSource::new(vec![
            Lesson::new("b", vec!["x".into()]),
            Lesson::new("a", vec!["y".into()]),
        ]);

        assert_eq!(source.list().unwrap(), vec!["b", "a"]);
        assert_eq!(source.load("a").unwrap().sentences, vec!["y"]);
        assert_eq!(source.loaded(), vec!["a"]);
        assert!(matches!(
            source.load("zzz"),
            Err(SourceError::UnknownLesson(t)) if t == "zzz"
        ));
    }
}
