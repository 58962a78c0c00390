//! Rolls per-file counts up into per-language totals.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use crate::stats::{FileRecord, GrandTotal, LanguageAggregate};

/// Key for reordering languages in a finished [`CountResult`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortBy {
    Name,
    Files,
    Blank,
    Comment,
    #[default]
    Code,
}

impl std::str::FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(SortBy::Name),
            "files" => Ok(SortBy::Files),
            "blank" => Ok(SortBy::Blank),
            "comment" => Ok(SortBy::Comment),
            "code" => Ok(SortBy::Code),
            other => Err(format!("unknown sort key: {other}")),
        }
    }
}

/// Accumulates [`FileRecord`]s. Insertion order does not affect the result.
#[derive(Debug, Default)]
pub struct ResultAggregator {
    languages: HashMap<String, LanguageAggregate>,
}

impl ResultAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route a record into its language, creating the language on first use.
    pub fn add(&mut self, record: FileRecord) {
        self.languages
            .entry(record.language.clone())
            .or_insert_with(|| LanguageAggregate::new(record.language.clone()))
            .add_file(record);
    }

    /// Sort everything and compute the grand total.
    ///
    /// Languages and the files inside each language are ordered by code
    /// lines descending, ties broken by name (or path) ascending.
    pub fn finalize(self) -> CountResult {
        let mut languages: Vec<LanguageAggregate> = self.languages.into_values().collect();

        let mut total = GrandTotal::default();
        let mut max_path_len = 0;
        for language in &mut languages {
            language.files.sort_by(compare_files);
            total += &*language;
            max_path_len = language
                .files
                .iter()
                .map(|f| f.path.to_string_lossy().chars().count())
                .fold(max_path_len, usize::max);
        }
        languages.sort_by(|a, b| compare_languages(a, b, SortBy::Code));

        CountResult {
            languages,
            total,
            max_path_len,
        }
    }
}

/// Final counts of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CountResult {
    /// Per-language totals, code lines descending
    pub languages: Vec<LanguageAggregate>,
    /// Sum over all languages
    pub total: GrandTotal,
    /// Longest file path, in characters
    pub max_path_len: usize,
}

impl CountResult {
    /// Every file record, code lines descending then path ascending.
    pub fn files(&self) -> Vec<&FileRecord> {
        let mut files: Vec<&FileRecord> = self.languages.iter().flat_map(|l| &l.files).collect();
        files.sort_by(|a, b| compare_files(a, b));
        files
    }

    /// Languages reordered by `key`. Numeric keys sort descending, `Name`
    /// ascending; ties fall back to name.
    pub fn sorted_by(&self, key: SortBy) -> Vec<&LanguageAggregate> {
        let mut languages: Vec<&LanguageAggregate> = self.languages.iter().collect();
        languages.sort_by(|a, b| compare_languages(a, b, key));
        languages
    }

    /// File records reordered by `key`. `Files` has no per-file meaning and
    /// sorts like `Name`.
    pub fn files_sorted_by(&self, key: SortBy) -> Vec<&FileRecord> {
        let mut files = self.files();
        let primary = |f: &FileRecord| match key {
            SortBy::Name | SortBy::Files => 0,
            SortBy::Blank => f.counts.blank,
            SortBy::Comment => f.counts.comment,
            SortBy::Code => f.counts.code,
        };
        files.sort_by(|a, b| primary(*b).cmp(&primary(*a)).then_with(|| a.path.cmp(&b.path)));
        files
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

fn compare_files(a: &FileRecord, b: &FileRecord) -> Ordering {
    b.counts
        .code
        .cmp(&a.counts.code)
        .then_with(|| a.path.cmp(&b.path))
}

fn compare_languages(a: &LanguageAggregate, b: &LanguageAggregate, key: SortBy) -> Ordering {
    let primary = match key {
        SortBy::Name => Ordering::Equal,
        SortBy::Files => b.file_count().cmp(&a.file_count()),
        SortBy::Blank => b.counts.blank.cmp(&a.counts.blank),
        SortBy::Comment => b.counts.comment.cmp(&a.counts.comment),
        SortBy::Code => b.counts.code.cmp(&a.counts.code),
    };
    primary.then_with(|| a.name.cmp(&b.name))
}
