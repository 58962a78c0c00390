//! High-level counting API.
//!
//! This module ties the pieces together: discover files, classify them,
//! drop duplicates, scan every file and aggregate the counts.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rayon::prelude::*;

use crate::aggregate::{CountResult, ResultAggregator};
use crate::classifier::{classify_file, LineObserver};
use crate::dedup::Deduplicator;
use crate::error::PolylocError;
use crate::filetype::FileTypeClassifier;
use crate::language::{LanguageRegistry, LanguageRule};
use crate::source::{discover_files_in_paths, FilterConfig};
use crate::stats::FileRecord;
use crate::Result;

/// Options for counting.
#[derive(Clone)]
pub struct CountOptions {
    /// Path and language filters
    pub file_filter: FilterConfig,
    /// Count byte-identical files only once
    pub skip_duplicates: bool,
    /// Called for every classified line of every file
    pub observer: Option<Arc<dyn LineObserver>>,
    /// Worker threads (None = rayon's global pool)
    pub jobs: Option<usize>,
}

impl Default for CountOptions {
    fn default() -> Self {
        Self {
            file_filter: FilterConfig::default(),
            skip_duplicates: true,
            observer: None,
            jobs: None,
        }
    }
}

impl fmt::Debug for CountOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountOptions")
            .field("file_filter", &self.file_filter)
            .field("skip_duplicates", &self.skip_duplicates)
            .field("observer", &self.observer.is_some())
            .field("jobs", &self.jobs)
            .finish()
    }
}

impl CountOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set file filter.
    pub fn filter(mut self, filter: FilterConfig) -> Self {
        self.file_filter = filter;
        self
    }

    /// Enable or disable content deduplication (on by default).
    pub fn skip_duplicates(mut self, skip: bool) -> Self {
        self.skip_duplicates = skip;
        self
    }

    /// Install a per-line observer.
    pub fn observer(mut self, observer: impl LineObserver + 'static) -> Self {
        self.observer = Some(Arc::new(observer));
        self
    }

    /// Scan with a dedicated pool of `n` threads.
    pub fn jobs(mut self, n: usize) -> Self {
        self.jobs = Some(n.max(1));
        self
    }
}

/// Count lines in every recognized file under `paths`.
///
/// Steps:
/// 1. Discover files passing the path filters
/// 2. Classify each file and apply the language filters
/// 3. Drop files whose content was already seen (in sorted path order)
/// 4. Scan the remaining files in parallel and aggregate
///
/// Files that cannot be read are logged and left out; they never fail the
/// run.
///
/// # Example
///
/// ```rust
/// use polyloclib::{count_paths, CountOptions, FilterConfig, LanguageRegistry};
///
/// let registry = LanguageRegistry::builtin();
/// let filter = FilterConfig::new().exclude("**/tests/**")?;
/// let result = count_paths(&["src"], &registry, CountOptions::new().filter(filter))?;
/// assert_eq!(result.languages[0].name, "Rust");
/// # Ok::<(), polyloclib::PolylocError>(())
/// ```
pub fn count_paths<P: AsRef<Path>>(
    paths: &[P],
    registry: &LanguageRegistry,
    options: CountOptions,
) -> Result<CountResult> {
    for path in paths {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PolylocError::PathNotFound(path.to_path_buf()));
        }
    }

    let files = discover_files_in_paths(paths, &options.file_filter)?;

    match options.jobs {
        Some(n) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| PolylocError::ThreadPool(e.to_string()))?;
            Ok(pool.install(|| count_discovered(files, registry, &options)))
        }
        None => Ok(count_discovered(files, registry, &options)),
    }
}

/// Count lines in a single directory (or file).
pub fn count_directory(
    path: impl AsRef<Path>,
    registry: &LanguageRegistry,
    options: CountOptions,
) -> Result<CountResult> {
    count_paths(&[path.as_ref()], registry, options)
}

/// Classify and count a single file.
///
/// Fails with `UnrecognizedFile` when no language matches the path.
pub fn count_file(path: impl AsRef<Path>, registry: &LanguageRegistry) -> Result<FileRecord> {
    let path = path.as_ref();

    let file_type = FileTypeClassifier::new(registry)
        .classify(path)
        .ok_or_else(|| PolylocError::UnrecognizedFile(path.to_path_buf()))?;
    let rule = registry.lookup(&file_type.key)?;
    let counts = classify_file(path, rule, None)?;

    Ok(FileRecord::new(path.to_path_buf(), rule.name.clone(), counts))
}

fn count_discovered(
    files: Vec<PathBuf>,
    registry: &LanguageRegistry,
    options: &CountOptions,
) -> CountResult {
    let classifier = FileTypeClassifier::new(registry);
    let filter = &options.file_filter;

    let mut selected: Vec<(PathBuf, &LanguageRule)> = files
        .into_par_iter()
        .filter_map(|path| {
            let file_type = classifier.classify(&path)?;
            let rule = match registry.lookup(&file_type.key) {
                Ok(rule) => rule,
                Err(e) => {
                    tracing::error!(path = %path.display(), "{e}");
                    return None;
                }
            };
            if !filter.matches_language(&path, &file_type.key, &rule.name, registry) {
                tracing::trace!(path = %path.display(), language = %rule.name, "filtered out");
                return None;
            }
            tracing::trace!(
                path = %path.display(),
                language = %rule.name,
                detection = ?file_type.detection,
                "classified"
            );
            Some((path, rule))
        })
        .collect();

    if options.skip_duplicates {
        let dedup = Deduplicator::new();
        selected.retain(|(path, _)| {
            let duplicate = dedup.seen(path);
            if duplicate {
                tracing::debug!(path = %path.display(), "ignoring duplicate content");
            }
            !duplicate
        });
    }

    let observer = options.observer.as_deref();
    let records: Vec<FileRecord> = selected
        .into_par_iter()
        .filter_map(|(path, rule)| match classify_file(&path, rule, observer) {
            Ok(counts) => Some(FileRecord::new(path, rule.name.clone(), counts)),
            Err(e) => {
                tracing::warn!("{e}");
                None
            }
        })
        .collect();

    let mut aggregator = ResultAggregator::new();
    for record in records {
        aggregator.add(record);
    }
    let result = aggregator.finalize();

    tracing::debug!(
        files = result.total.file_count,
        languages = result.languages.len(),
        "counting finished"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::LineEvent;
    use std::fs;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::tempdir;

    fn create_file(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn create_project(root: &Path) {
        create_file(
            &root.join("main.go"),
            "package main\n\nfunc main() {\n\tvar n string /*\n\t\tcomment\n\t\tcomment\n\t*/\n}\n",
        );
        create_file(
            &root.join("tools/run.py"),
            "#!/usr/bin/env python3\n# comment\nprint(1)\n",
        );
        create_file(&root.join("tools/bootstrap"), "#!/bin/sh\necho hi\n");
        create_file(&root.join("Makefile"), "# build\nall:\n\tgo build\n");
        create_file(&root.join("notes.unknownext"), "text\n");
        create_file(&root.join(".git/config"), "[core]\n");
    }

    #[test]
    fn test_count_paths() {
        let temp = tempdir().unwrap();
        create_project(temp.path());
        let registry = LanguageRegistry::builtin();

        let result = count_paths(&[temp.path()], &registry, CountOptions::new()).unwrap();

        let names: Vec<&str> = result.languages.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Go", "Bourne Shell", "Makefile", "Python"]);
        assert_eq!(result.total.file_count, 4);

        let go = &result.languages[0];
        assert_eq!(go.counts.code, 4);
        assert_eq!(go.counts.comment, 3);
        assert_eq!(go.counts.blank, 1);
    }

    #[test]
    fn test_duplicates_skipped_by_default() {
        let temp = tempdir().unwrap();
        create_file(&temp.path().join("a/x.py"), "x = 1\n");
        create_file(&temp.path().join("b/x.py"), "x = 1\n");
        let registry = LanguageRegistry::builtin();

        let deduped = count_paths(&[temp.path()], &registry, CountOptions::new()).unwrap();
        assert_eq!(deduped.total.file_count, 1);
        assert!(deduped.files()[0].path.ends_with("a/x.py"));

        let all = count_paths(
            &[temp.path()],
            &registry,
            CountOptions::new().skip_duplicates(false),
        )
        .unwrap();
        assert_eq!(all.total.file_count, 2);
        assert_eq!(all.total.counts.code, 2);
    }

    #[test]
    fn test_language_filters() {
        let temp = tempdir().unwrap();
        create_project(temp.path());
        let registry = LanguageRegistry::builtin();

        let filter = FilterConfig::new().exclude_ext(["py", "makefile"]);
        let result = count_paths(&[temp.path()], &registry, CountOptions::new().filter(filter)).unwrap();
        let names: Vec<&str> = result.languages.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Go", "Bourne Shell"]);

        let filter = FilterConfig::new().include_lang(["Python"]);
        let result = count_paths(&[temp.path()], &registry, CountOptions::new().filter(filter)).unwrap();
        assert_eq!(result.languages.len(), 1);
        assert_eq!(result.languages[0].name, "Python");
    }

    #[test]
    fn test_exclude_ext_covers_content_detected_files() {
        let temp = tempdir().unwrap();
        create_file(&temp.path().join("a.m"), "function y = f(x)\n  y = x;\nend\n");
        create_file(
            &temp.path().join("b.m"),
            "#import <Foundation/Foundation.h>\n@interface A\n@end\n",
        );
        create_file(&temp.path().join("c.go"), "package c\n");
        let registry = LanguageRegistry::builtin();

        let result = count_paths(&[temp.path()], &registry, CountOptions::new()).unwrap();
        let mut names: Vec<&str> = result.languages.iter().map(|l| l.name.as_str()).collect();
        names.sort();
        assert_eq!(names, vec!["Go", "MATLAB", "Objective-C"]);

        let filter = FilterConfig::new().exclude_ext(["m"]);
        let result = count_paths(&[temp.path()], &registry, CountOptions::new().filter(filter)).unwrap();
        let names: Vec<&str> = result.languages.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Go"]);
    }

    #[test]
    fn test_path_filters() {
        let temp = tempdir().unwrap();
        create_project(temp.path());
        let registry = LanguageRegistry::builtin();

        let filter = FilterConfig::new().not_match_dir("tools").unwrap();
        let result = count_paths(&[temp.path()], &registry, CountOptions::new().filter(filter)).unwrap();

        assert_eq!(result.total.file_count, 2);
    }

    #[test]
    fn test_dedicated_pool_matches_global() {
        let temp = tempdir().unwrap();
        create_project(temp.path());
        let registry = LanguageRegistry::builtin();

        let global = count_paths(&[temp.path()], &registry, CountOptions::new()).unwrap();
        let single = count_paths(&[temp.path()], &registry, CountOptions::new().jobs(1)).unwrap();

        assert_eq!(global, single);
    }

    #[test]
    fn test_observer_called_per_line() {
        let temp = tempdir().unwrap();
        create_file(&temp.path().join("a.go"), "package a\n\n// c\n");
        let registry = LanguageRegistry::builtin();

        let lines = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&lines);
        let options = CountOptions::new().observer(move |_: &LineEvent<'_>| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        count_paths(&[temp.path()], &registry, options).unwrap();

        assert_eq!(lines.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_count_paths_missing_root() {
        let registry = LanguageRegistry::builtin();
        let result = count_paths(&["/nonexistent/path"], &registry, CountOptions::new());

        assert!(matches!(result, Err(PolylocError::PathNotFound(_))));
    }

    #[test]
    fn test_count_directory() {
        let temp = tempdir().unwrap();
        create_project(temp.path());
        let registry = LanguageRegistry::builtin();

        let result =
            count_directory(temp.path().join("tools"), &registry, CountOptions::new()).unwrap();

        assert_eq!(result.total.file_count, 2);
    }

    #[test]
    fn test_count_file() {
        let temp = tempdir().unwrap();
        create_project(temp.path());
        let registry = LanguageRegistry::builtin();

        let record = count_file(temp.path().join("tools/run.py"), &registry).unwrap();
        assert_eq!(record.language, "Python");
        assert_eq!(record.counts.code, 2);
        assert_eq!(record.counts.comment, 1);

        let unknown = count_file(temp.path().join("notes.unknownext"), &registry);
        assert!(matches!(unknown, Err(PolylocError::UnrecognizedFile(_))));
    }
}
