//! Core data structures for line statistics

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};
use std::path::PathBuf;

/// Blank, comment and code line counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineCounts {
    /// Lines containing code (including a leading shebang)
    pub code: u64,
    /// Single-line comments and lines inside block comments
    pub comment: u64,
    /// Whitespace-only lines
    pub blank: u64,
}

impl LineCounts {
    /// Create a new LineCounts with all zeros
    pub fn new() -> Self {
        Self::default()
    }

    /// Total physical lines
    pub fn total(&self) -> u64 {
        self.code + self.comment + self.blank
    }
}

impl Add for LineCounts {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            code: self.code + other.code,
            comment: self.comment + other.comment,
            blank: self.blank + other.blank,
        }
    }
}

impl AddAssign for LineCounts {
    fn add_assign(&mut self, other: Self) {
        self.code += other.code;
        self.comment += other.comment;
        self.blank += other.blank;
    }
}

/// One analyzed file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Path to the file
    pub path: PathBuf,
    /// Resolved language name
    pub language: String,
    /// Line counts for this file
    #[serde(flatten)]
    pub counts: LineCounts,
}

impl FileRecord {
    /// Create a new file record
    pub fn new(path: PathBuf, language: impl Into<String>, counts: LineCounts) -> Self {
        Self {
            path,
            language: language.into(),
            counts,
        }
    }
}

/// Per-language rollup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageAggregate {
    /// Language name
    pub name: String,
    /// Files of this language
    pub files: Vec<FileRecord>,
    /// Summed counts over `files`
    #[serde(flatten)]
    pub counts: LineCounts,
}

impl LanguageAggregate {
    /// Create an empty aggregate
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            files: Vec::new(),
            counts: LineCounts::new(),
        }
    }

    /// Add a file to this language
    pub fn add_file(&mut self, record: FileRecord) {
        self.counts += record.counts;
        self.files.push(record);
    }

    /// Number of files
    pub fn file_count(&self) -> u64 {
        self.files.len() as u64
    }
}

/// Sum over every language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrandTotal {
    /// Number of files counted
    pub file_count: u64,
    /// Summed counts
    #[serde(flatten)]
    pub counts: LineCounts,
}

impl AddAssign<&LanguageAggregate> for GrandTotal {
    fn add_assign(&mut self, language: &LanguageAggregate) {
        self.file_count += language.file_count();
        self.counts += language.counts;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_counts_default() {
        let counts = LineCounts::new();
        assert_eq!(counts.code, 0);
        assert_eq!(counts.comment, 0);
        assert_eq!(counts.blank, 0);
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn test_line_counts_add() {
        let a = LineCounts {
            code: 100,
            comment: 20,
            blank: 10,
        };
        let b = LineCounts {
            code: 50,
            comment: 2,
            blank: 5,
        };
        let sum = a + b;
        assert_eq!(sum.code, 150);
        assert_eq!(sum.comment, 22);
        assert_eq!(sum.blank, 15);
        assert_eq!(sum.total(), 187);
    }

    #[test]
    fn test_language_aggregate_add_file() {
        let mut go = LanguageAggregate::new("Go");
        go.add_file(FileRecord::new(
            PathBuf::from("a.go"),
            "Go",
            LineCounts {
                code: 4,
                comment: 3,
                blank: 1,
            },
        ));
        go.add_file(FileRecord::new(
            PathBuf::from("b.go"),
            "Go",
            LineCounts {
                code: 1,
                comment: 0,
                blank: 0,
            },
        ));

        assert_eq!(go.file_count(), 2);
        assert_eq!(go.counts.code, 5);
        assert_eq!(go.counts.total(), 9);

        let mut total = GrandTotal::default();
        total += &go;
        assert_eq!(total.file_count, 2);
        assert_eq!(total.counts, go.counts);
    }
}
