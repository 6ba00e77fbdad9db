use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::catalog::index::SortedIndex;
use crate::core::course::{Course, CourseSummary};
use crate::core::types::CourseId;
use crate::parsing::csv::{classify_line, LineOutcome};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Unable to open course data: {}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Counts gathered while loading a catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Unique courses in the catalog after the load
    pub records: usize,

    /// Lines read from the source, blank ones included
    pub lines_read: usize,

    /// Non-blank lines that did not produce a course
    pub skipped: usize,

    /// Courses replaced by a later line with the same id
    pub overwritten: usize,
}

/// Result of listing the catalog
#[derive(Debug, PartialEq, Eq)]
pub enum Listing {
    /// Nothing has been loaded, or the last load produced no courses
    NoData,
    /// `(id, title)` pairs in ascending id order
    Courses(Vec<CourseSummary>),
}

/// Result of looking up a single course
#[derive(Debug, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// The catalog is empty
    NoData,
    /// The catalog has courses but not this one (normalized id attached)
    NotFound(CourseId),
    Found(&'a Course),
}

/// In-memory course catalog with a sorted index for enumeration
#[derive(Debug, Default)]
pub struct CourseCatalog {
    /// Index: normalized id -> course
    by_id: HashMap<CourseId, Course>,

    /// All keys of `by_id`, ascending
    sorted_ids: SortedIndex,
}

impl CourseCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents of this catalog with the courses in `path`.
    ///
    /// The new catalog is built separately and swapped in only after the
    /// whole source has been read, so on error `self` is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::SourceUnavailable` if the file cannot be opened
    /// or read.
    pub fn load(&mut self, path: &Path) -> Result<LoadSummary, CatalogError> {
        let (catalog, summary) = Self::read_file(path)?;
        *self = catalog;
        Ok(summary)
    }

    /// Load a catalog from a course data file
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::SourceUnavailable` if the file cannot be opened
    /// or read.
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        Self::read_file(path).map(|(catalog, _)| catalog)
    }

    fn read_file(path: &Path) -> Result<(Self, LoadSummary), CatalogError> {
        let file = File::open(path).map_err(|source| CatalogError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file), path)
    }

    /// Build a catalog from any buffered reader. `origin` names the source in
    /// errors and log messages.
    ///
    /// Lines are decoded lossily, so bytes that are not valid UTF-8 end up as
    /// replacement characters in that line instead of failing the load.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::SourceUnavailable` if reading fails part way.
    pub fn from_reader<R: BufRead>(
        mut reader: R,
        origin: &Path,
    ) -> Result<(Self, LoadSummary), CatalogError> {
        let mut catalog = Self::new();
        let mut summary = LoadSummary::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let read = reader.read_until(b'\n', &mut buf).map_err(|source| {
                CatalogError::SourceUnavailable {
                    path: origin.to_path_buf(),
                    source,
                }
            })?;
            if read == 0 {
                break;
            }

            summary.lines_read += 1;
            let line = String::from_utf8_lossy(&buf);
            catalog.ingest(&line, summary.lines_read, &mut summary);
        }

        catalog.finish(origin, &mut summary);
        Ok((catalog, summary))
    }

    /// Build a catalog from in-memory text
    pub fn from_text(text: &str) -> (Self, LoadSummary) {
        let mut catalog = Self::new();
        let mut summary = LoadSummary::default();

        for (i, line) in text.lines().enumerate() {
            summary.lines_read += 1;
            catalog.ingest(line, i + 1, &mut summary);
        }

        catalog.finish(Path::new("<memory>"), &mut summary);
        (catalog, summary)
    }

    fn ingest(&mut self, line: &str, line_num: usize, summary: &mut LoadSummary) {
        match classify_line(line, line_num) {
            LineOutcome::Blank => {}
            LineOutcome::Record(course) => self.insert(course, summary),
            LineOutcome::Skipped => summary.skipped += 1,
        }
    }

    fn insert(&mut self, course: Course, summary: &mut LoadSummary) {
        if let Some(previous) = self.by_id.insert(course.id.clone(), course) {
            debug!("Replacing earlier definition of {}", previous.id);
            summary.overwritten += 1;
        }
    }

    fn finish(&mut self, origin: &Path, summary: &mut LoadSummary) {
        self.sorted_ids = SortedIndex::build(&self.by_id);
        summary.records = self.by_id.len();

        if self.is_empty() {
            warn!("No courses found in {}", origin.display());
        } else {
            info!(
                "Loaded {} courses from {} ({} lines, {} skipped, {} overwritten)",
                summary.records,
                origin.display(),
                summary.lines_read,
                summary.skipped,
                summary.overwritten
            );
        }
    }

    /// Number of courses in catalog
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// All courses as `(id, title)` pairs in ascending id order
    pub fn list_all(&self) -> Listing {
        if self.is_empty() {
            return Listing::NoData;
        }
        Listing::Courses(self.iter_sorted().map(Course::summary).collect())
    }

    /// Look up a course by id. The id is normalized the same way ids are at
    /// load time.
    pub fn get(&self, raw_id: &str) -> Lookup<'_> {
        if self.is_empty() {
            return Lookup::NoData;
        }

        let id = CourseId::new(raw_id);
        match self.by_id.get(&id) {
            Some(course) => Lookup::Found(course),
            None => Lookup::NotFound(id),
        }
    }

    /// Iterate courses in ascending id order
    pub fn iter_sorted(&self) -> impl Iterator<Item = &Course> + '_ {
        self.sorted_ids
            .iter()
            .filter_map(move |id| self.by_id.get(id))
    }
}
