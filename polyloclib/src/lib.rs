//! # polyloclib
//!
//! A multi-language lines of code counter library that sorts every line
//! into code, comments and blanks.
//!
//! ## Overview
//!
//! Counting is driven by a table of comment syntaxes, one
//! [`LanguageRule`] per language, held in a [`LanguageRegistry`]. For every
//! file:
//!
//! - **File type**: build-file names, conventional names, content
//!   heuristics for shared extensions, the `#!` interpreter or the
//!   extension pick the language
//! - **Lines**: a small state machine tracks block comments (including
//!   `"""`-style blocks that open and close with the same token) and
//!   classifies each line
//! - **Totals**: per-file counts are rolled up per language
//!
//! The scanner is line based and does not parse string literals, so a
//! comment marker inside a string is taken at face value.
//!
//! ## Features
//!
//! - **~200 languages** with line comments, regex line comments and
//!   several block-comment dialects per language
//! - **Duplicate detection**: byte-identical files are counted once
//! - **Filtering**: globs, path regexes, excluded extensions, included
//!   languages
//! - **Parallel**: files are classified and scanned on a rayon pool
//!
//! ## Example
//!
//! ```rust
//! use polyloclib::{count_file, count_paths, CountOptions, FilterConfig, LanguageRegistry};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! let file_path = dir.path().join("main.py");
//! fs::write(&file_path, "#!/usr/bin/env python3\n\n# greet\nprint('hi')\n").unwrap();
//!
//! let registry = LanguageRegistry::builtin();
//!
//! // Count a single file
//! let record = count_file(&file_path, &registry).unwrap();
//! assert_eq!(record.language, "Python");
//! assert_eq!(record.counts.code, 2);
//! assert_eq!(record.counts.comment, 1);
//! assert_eq!(record.counts.blank, 1);
//!
//! // Count a whole tree
//! let result = count_paths(&[dir.path()], &registry, CountOptions::new()).unwrap();
//! assert_eq!(result.total.file_count, 1);
//!
//! // Count with filtering
//! let filter = FilterConfig::new().exclude("**/vendor/**").unwrap();
//! let result = count_paths(&[dir.path()], &registry, CountOptions::new().filter(filter)).unwrap();
//! assert_eq!(result.languages[0].name, "Python");
//! ```

pub mod aggregate;
pub mod classifier;
pub mod counter;
pub mod dedup;
pub mod error;
pub mod filetype;
pub mod language;
pub mod source;
pub mod stats;

pub use aggregate::{CountResult, ResultAggregator, SortBy};
pub use classifier::{
    classify_file, classify_lines, classify_reader, BlockState, LineClassifier, LineEvent,
    LineKind, LineObserver,
};
pub use counter::{count_directory, count_file, count_paths, CountOptions};
pub use dedup::Deduplicator;
pub use error::PolylocError;
pub use filetype::{parse_shebang, ContentDetector, Detection, FileType, FileTypeClassifier, HeuristicDetector};
pub use language::{BlockComment, LanguageRegistry, LanguageRule, LineComments};
pub use source::{discover_files, discover_files_in_paths, FilterConfig};
pub use stats::{FileRecord, GrandTotal, LanguageAggregate, LineCounts};

/// Result type for polyloclib operations
pub type Result<T> = std::result::Result<T, PolylocError>;
