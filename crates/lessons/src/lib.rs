//! Lesson files on disk.
//!
//! A lessons directory is walked recursively; every regular file is one
//! lesson, titled by its file name without extension. Entries of each
//! directory are visited in lexicographic order, so the lesson order is the
//! same on every run. Each line of a file is one sentence.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::debug;

use tui_typist_core::{LessonSource, SourceError};
use tui_typist_types::Lesson;

/// Lessons read from a directory tree.
#[derive(Debug, Clone)]
pub struct DirLessonSource {
    root: PathBuf,
}

/// A lesson file found by the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonFile {
    pub title: String,
    pub path: PathBuf,
}

impl DirLessonSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All lesson files in walk order.
    ///
    /// Fails if the root cannot be read or two files share a title.
    pub fn files(&self) -> Result<Vec<LessonFile>, SourceError> {
        let mut files = Vec::new();
        walk(&self.root, &mut files)?;

        let mut seen: BTreeMap<&str, &Path> = BTreeMap::new();
        for file in &files {
            if let Some(first) = seen.insert(file.title.as_str(), file.path.as_path()) {
                return Err(SourceError::DuplicateTitle {
                    title: file.title.clone(),
                    first: first.to_path_buf(),
                    second: file.path.clone(),
                });
            }
        }

        debug!(root = %self.root.display(), count = files.len(), "lessons discovered");
        Ok(files)
    }
}

impl LessonSource for DirLessonSource {
    fn list(&self) -> Result<Vec<String>, SourceError> {
        Ok(self.files()?.into_iter().map(|f| f.title).collect())
    }

    fn load(&self, title: &str) -> Result<Lesson, SourceError> {
        let file = self
            .files()?
            .into_iter()
            .find(|f| f.title == title)
            .ok_or_else(|| SourceError::UnknownLesson(title.to_string()))?;

        let sentences = read_lines(&file.path).map_err(|source| SourceError::Io {
            path: file.path.clone(),
            source,
        })?;
        debug!(lesson = %title, lines = sentences.len(), "lesson loaded");
        Ok(Lesson::new(file.title, sentences))
    }
}

fn walk(dir: &Path, out: &mut Vec<LessonFile>) -> Result<(), SourceError> {
    let io_err = |source: io::Error| SourceError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(dir)
        .map_err(io_err)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(io_err)?;
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let path = entry.path();
        let file_type = entry.file_type().map_err(io_err)?;
        if file_type.is_dir() {
            walk(&path, out)?;
        } else if let Some(title) = lesson_title(&path) {
            out.push(LessonFile { title, path });
        }
    }
    Ok(())
}

/// File name without its (last) extension.
pub fn lesson_title(path: &Path) -> Option<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
}

/// Lines of a file without terminators (`\n` or `\r\n`).
pub fn read_lines(path: &Path) -> io::Result<Vec<String>> {
    let reader = BufReader::new(fs::File::open(path)?);
    reader.lines().collect()
}
