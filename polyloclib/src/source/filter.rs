//! File filtering and discovery.
//!
//! Path filters (globs and regular expressions) are applied while walking;
//! language filters need the classified language and are applied by the
//! counter afterwards.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use glob::Pattern;
use regex::Regex;
use walkdir::WalkDir;

use crate::error::PolylocError;
use crate::language::LanguageRegistry;
use crate::Result;

/// Version-control metadata directories never descended into.
const VCS_DIRS: &[&str] = &[".bzr", ".cvs", ".git", ".hg", ".svn"];

/// Configuration for file filtering.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Glob patterns on the full path to include (if empty, include all)
    pub include: Vec<Pattern>,
    /// Glob patterns on the full path to exclude
    pub exclude: Vec<Pattern>,
    /// File basename must match
    pub match_file: Option<Regex>,
    /// File basename must not match
    pub not_match_file: Option<Regex>,
    /// Parent directory must match
    pub match_dir: Option<Regex>,
    /// Parent directory must not match
    pub not_match_dir: Option<Regex>,
    /// Extension keys (or languages they resolve to) to skip
    pub exclude_ext: BTreeSet<String>,
    /// Language names to keep (if empty, keep all)
    pub include_lang: BTreeSet<String>,
}

impl FilterConfig {
    /// Create a new empty filter config (includes everything).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an include pattern.
    pub fn include(mut self, pattern: &str) -> Result<Self> {
        self.include.push(compile_glob(pattern)?);
        Ok(self)
    }

    /// Add an exclude pattern.
    pub fn exclude(mut self, pattern: &str) -> Result<Self> {
        self.exclude.push(compile_glob(pattern)?);
        Ok(self)
    }

    /// Add multiple include patterns.
    pub fn include_many(mut self, patterns: &[&str]) -> Result<Self> {
        for pattern in patterns {
            self = self.include(pattern)?;
        }
        Ok(self)
    }

    /// Add multiple exclude patterns.
    pub fn exclude_many(mut self, patterns: &[&str]) -> Result<Self> {
        for pattern in patterns {
            self = self.exclude(pattern)?;
        }
        Ok(self)
    }

    pub fn match_file(mut self, pattern: &str) -> Result<Self> {
        self.match_file = Some(compile_regex(pattern)?);
        Ok(self)
    }

    pub fn not_match_file(mut self, pattern: &str) -> Result<Self> {
        self.not_match_file = Some(compile_regex(pattern)?);
        Ok(self)
    }

    pub fn match_dir(mut self, pattern: &str) -> Result<Self> {
        self.match_dir = Some(compile_regex(pattern)?);
        Ok(self)
    }

    pub fn not_match_dir(mut self, pattern: &str) -> Result<Self> {
        self.not_match_dir = Some(compile_regex(pattern)?);
        Ok(self)
    }

    /// Skip files with these extension keys. A leading dot is ignored.
    pub fn exclude_ext<I, S>(mut self, exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.exclude_ext.extend(
            exts.into_iter()
                .map(|e| e.as_ref().trim().trim_start_matches('.').to_lowercase())
                .filter(|e| !e.is_empty()),
        );
        self
    }

    /// Only keep files of these languages.
    pub fn include_lang<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.include_lang.extend(
            languages
                .into_iter()
                .map(|l| l.as_ref().trim().to_string())
                .filter(|l| !l.is_empty()),
        );
        self
    }

    /// Check the path filters.
    ///
    /// A path matches if:
    /// 1. It matches at least one include glob (or include is empty)
    /// 2. It doesn't match any exclude glob
    /// 3. Its basename passes `match_file` / `not_match_file`
    /// 4. Its parent directory passes `match_dir` / `not_match_dir`
    pub fn matches_path(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        if self.exclude.iter().any(|p| p.matches(&path_str)) {
            return false;
        }
        if !self.include.is_empty() && !self.include.iter().any(|p| p.matches(&path_str)) {
            return false;
        }

        let basename = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
        if !regex_allows(&self.match_file, &self.not_match_file, &basename) {
            return false;
        }

        let dir = path.parent().map(|d| d.to_string_lossy()).unwrap_or_default();
        regex_allows(&self.match_dir, &self.not_match_dir, &dir)
    }

    /// Check the language filters for a classified file.
    ///
    /// `key` is the classifier key and `language` the name it resolves to.
    /// An excluded extension excludes files carrying it even when content
    /// detection picked another language, and also excludes every file of
    /// the language that extension maps to.
    pub fn matches_language(
        &self,
        path: &Path,
        key: &str,
        language: &str,
        registry: &LanguageRegistry,
    ) -> bool {
        if !self.exclude_ext.is_empty() {
            let ext = path
                .extension()
                .and_then(|e| e.to_str())
                .map(str::to_lowercase);
            if ext.is_some_and(|ext| self.exclude_ext.contains(&ext)) {
                return false;
            }
            if self.exclude_ext.contains(&key.to_lowercase()) {
                return false;
            }
            if self
                .exclude_ext
                .iter()
                .any(|ext| registry.resolve(ext) == Some(language))
            {
                return false;
            }
        }

        self.include_lang.is_empty() || self.include_lang.contains(language)
    }
}

fn compile_glob(pattern: &str) -> Result<Pattern> {
    Pattern::new(pattern).map_err(|e| PolylocError::InvalidGlob {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}

fn compile_regex(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| PolylocError::invalid_regex(pattern, e))
}

fn regex_allows(keep: &Option<Regex>, drop: &Option<Regex>, text: &str) -> bool {
    if drop.as_ref().is_some_and(|re| re.is_match(text)) {
        return false;
    }
    keep.as_ref().is_none_or(|re| re.is_match(text))
}

/// Check if a directory should be skipped during traversal.
fn is_vcs_dir(name: &str) -> bool {
    VCS_DIRS.contains(&name)
}

/// Discover candidate files under `root`.
///
/// Walks the directory tree (following symlinks) and returns every file
/// that passes the path filters, sorted. A `root` that is itself a file is
/// returned when it passes the filters.
pub fn discover_files(root: impl AsRef<Path>, filter: &FilterConfig) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(PolylocError::PathNotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();

    if root.is_file() {
        if filter.matches_path(root) {
            files.push(root.to_path_buf());
        }
        return Ok(files);
    }

    let walker = WalkDir::new(root).follow_links(true).into_iter();

    for entry in walker.filter_entry(|e| {
        // Always include the root directory
        if e.depth() == 0 {
            return true;
        }
        if e.file_type().is_dir() {
            let name = e.file_name().to_str().unwrap_or("");
            return !is_vcs_dir(name);
        }
        true
    }) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!("skipping unreadable entry: {e}");
                continue;
            }
        };

        let path = entry.path();

        if path.is_file() && filter.matches_path(path) {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    tracing::debug!(root = %root.display(), count = files.len(), "discovered files");

    Ok(files)
}

/// Discover files under several roots, sorted and without repeats.
pub fn discover_files_in_paths<P: AsRef<Path>>(
    paths: &[P],
    filter: &FilterConfig,
) -> Result<Vec<PathBuf>> {
    let mut all_files = Vec::new();

    for path in paths {
        all_files.extend(discover_files(path, filter)?);
    }

    all_files.sort();
    all_files.dedup();

    Ok(all_files)
}
