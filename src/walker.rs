//! Flat directory enumeration and in-place rewriting
//!
//! The model files live directly under one directory, so enumeration
//! is flat (no recursion) and sorted lexicographically for
//! deterministic output. Each file is read whole, transformed in
//! memory, and written back only when its content changed.

use std::fs;
use std::path::{Path, PathBuf};

use crate::annotator::Annotator;
use crate::error::WalkError;

/// Outcome of one annotation run
#[derive(Debug, Default)]
pub struct RunReport {
    /// Files whose content changed, in enumeration order
    pub changed: Vec<PathBuf>,
    /// Per-file failures; these did not abort the run
    pub errors: Vec<WalkError>,
    /// Number of candidate files enumerated
    pub scanned: usize,
}

/// Enumerates candidate files and applies the annotator to each
pub struct Walker {
    annotator: Annotator,
    suffix: String,
    dry_run: bool,
}

impl Walker {
    /// Create a walker selecting files by filename suffix
    #[must_use]
    pub fn new(annotator: Annotator, suffix: &str, dry_run: bool) -> Self {
        Self {
            annotator,
            suffix: suffix.to_string(),
            dry_run,
        }
    }

    /// Annotate every candidate file directly under `root`
    ///
    /// Failures reading or writing an individual file are recorded in
    /// the report and do not stop the enumeration.
    ///
    /// # Errors
    ///
    /// Returns [`WalkError::DirectoryNotFound`] if `root` is not a
    /// directory; no file is touched in that case.
    pub fn run(&self, root: &Path) -> Result<RunReport, WalkError> {
        if !root.is_dir() {
            return Err(WalkError::DirectoryNotFound(root.to_path_buf()));
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(root).map_err(|source| WalkError::FileProcessing {
            path: root.to_path_buf(),
            source,
        })? {
            let entry = entry.map_err(|source| WalkError::FileProcessing {
                path: root.to_path_buf(),
                source,
            })?;
            let path = entry.path();

            // Files only; subdirectories are not traversed
            if path.is_file()
                && path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.ends_with(&self.suffix))
            {
                files.push(path);
            }
        }
        files.sort();

        let mut report = RunReport {
            scanned: files.len(),
            ..RunReport::default()
        };

        for path in files {
            match self.process(&path) {
                Ok(true) => report.changed.push(path),
                Ok(false) => {}
                Err(error) => report.errors.push(error),
            }
        }

        Ok(report)
    }

    /// Read, annotate, and conditionally rewrite one file
    fn process(&self, path: &Path) -> Result<bool, WalkError> {
        let text = fs::read_to_string(path).map_err(|source| WalkError::FileProcessing {
            path: path.to_path_buf(),
            source,
        })?;

        let (output, changed) = self.annotator.annotate_text(&text);

        if changed && !self.dry_run {
            fs::write(path, output).map_err(|source| WalkError::FileProcessing {
                path: path.to_path_buf(),
                source,
            })?;
        }

        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::Matcher;
    use tempfile::TempDir;

    fn walker(dry_run: bool) -> Walker {
        let annotator = Annotator::new(Matcher::new("ModelCore").unwrap());
        Walker::new(annotator, ".go", dry_run)
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let absent = tmp.path().join("nope");

        let result = walker(false).run(&absent);
        assert!(matches!(result, Err(WalkError::DirectoryNotFound(_))));
    }

    #[test]
    fn test_annotates_and_reports_changed_files() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("foo.go"), "type Foo struct {\n}\n").unwrap();
        fs::write(tmp.path().join("bar.go"), "// Bar represents the Bar model.\ntype Bar struct {\n}\n").unwrap();
        fs::write(tmp.path().join("notes.txt"), "type Baz struct {\n}\n").unwrap();

        let report = walker(false).run(tmp.path()).unwrap();
        assert_eq!(report.scanned, 2);
        assert_eq!(report.changed, vec![tmp.path().join("foo.go")]);
        assert!(report.errors.is_empty());

        let foo = fs::read_to_string(tmp.path().join("foo.go")).unwrap();
        assert_eq!(foo, "// Foo represents the Foo model.\ntype Foo struct {\n}\n");
        // Non-matching suffix untouched
        let notes = fs::read_to_string(tmp.path().join("notes.txt")).unwrap();
        assert_eq!(notes, "type Baz struct {\n}\n");
    }

    #[test]
    fn test_second_run_reports_no_changes() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("foo.go"), "type Foo struct {\n}\n").unwrap();

        let w = walker(false);
        let first = w.run(tmp.path()).unwrap();
        assert_eq!(first.changed.len(), 1);

        let second = w.run(tmp.path()).unwrap();
        assert!(second.changed.is_empty());
        assert_eq!(second.scanned, 1);
    }

    #[test]
    fn test_changed_files_sorted() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("b.go"), "type B struct {\n}\n").unwrap();
        fs::write(tmp.path().join("a.go"), "type A struct {\n}\n").unwrap();

        let report = walker(false).run(tmp.path()).unwrap();
        assert_eq!(
            report.changed,
            vec![tmp.path().join("a.go"), tmp.path().join("b.go")]
        );
    }

    #[test]
    fn test_dry_run_leaves_files_alone() {
        let tmp = TempDir::new().unwrap();
        let input = "type Foo struct {\n}\n";
        fs::write(tmp.path().join("foo.go"), input).unwrap();

        let report = walker(true).run(tmp.path()).unwrap();
        assert_eq!(report.changed.len(), 1);

        let untouched = fs::read_to_string(tmp.path().join("foo.go")).unwrap();
        assert_eq!(untouched, input);
    }

    #[test]
    fn test_unreadable_file_does_not_abort_run() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("bad.go"), [0xFF, 0xFE, 0x80]).unwrap();
        fs::write(tmp.path().join("good.go"), "type Good struct {\n}\n").unwrap();

        let report = walker(false).run(tmp.path()).unwrap();
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.changed, vec![tmp.path().join("good.go")]);
    }

    #[test]
    fn test_subdirectories_not_traversed() {
        let tmp = TempDir::new().unwrap();
        let sub = tmp.path().join("nested");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("deep.go"), "type Deep struct {\n}\n").unwrap();

        let report = walker(false).run(tmp.path()).unwrap();
        assert_eq!(report.scanned, 0);
        assert!(report.changed.is_empty());
    }
}
