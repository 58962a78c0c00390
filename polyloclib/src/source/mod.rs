//! Source discovery: find files to analyze.
//!
//! Walks the requested roots and applies the path filters. Language
//! filters live on the same [`FilterConfig`] but are checked after
//! classification.
//!
//! ## Example
//!
//! ```rust,ignore
//! use polyloclib::source::{discover_files, FilterConfig};
//!
//! let filter = FilterConfig::new()
//!     .exclude("**/vendor/**")?
//!     .not_match_file(r"_test\.go$")?;
//! let files = discover_files(".", &filter)?;
//! ```

pub mod filter;

pub use filter::{discover_files, discover_files_in_paths, FilterConfig};
