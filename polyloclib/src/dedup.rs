//! Content-digest deduplication of byte-identical files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Mutex;

use xxhash_rust::xxh3::xxh3_128;

/// Remembers the digest of every file content it has been shown.
///
/// One instance covers one counting run; it is safe to share between
/// threads.
#[derive(Debug, Default)]
pub struct Deduplicator {
    digests: Mutex<HashSet<u128>>,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when a file with the same content was already seen.
    ///
    /// A file that cannot be read is reported as seen so that it is
    /// ignored.
    pub fn seen(&self, path: &Path) -> bool {
        match fs::read(path) {
            Ok(content) => self.seen_bytes(&content),
            Err(e) => {
                tracing::warn!(path = %path.display(), "cannot read file for dedup: {e}");
                true
            }
        }
    }

    /// Same as [`Deduplicator::seen`] for in-memory content.
    pub fn seen_bytes(&self, content: &[u8]) -> bool {
        let digest = xxh3_128(content);
        let mut digests = match self.digests.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        !digests.insert(digest)
    }

    /// Number of distinct contents recorded.
    pub fn len(&self) -> usize {
        match self.digests.lock() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_same_content_seen_twice() {
        let temp = tempdir().unwrap();
        let a = temp.path().join("a.go");
        let b = temp.path().join("b.go");
        fs::write(&a, "package main\n").unwrap();
        fs::write(&b, "package main\n").unwrap();

        let dedup = Deduplicator::new();
        assert!(!dedup.seen(&a));
        assert!(dedup.seen(&b));
        assert!(dedup.seen(&a));
        assert_eq!(dedup.len(), 1);
    }

    #[test]
    fn test_different_content() {
        let dedup = Deduplicator::new();

        assert!(!dedup.seen_bytes(b"one"));
        assert!(!dedup.seen_bytes(b"two"));
        assert!(!dedup.seen_bytes(b""));
        assert!(dedup.seen_bytes(b""));
        assert_eq!(dedup.len(), 3);
    }

    #[test]
    fn test_unreadable_file_is_ignored() {
        let dedup = Deduplicator::new();

        assert!(dedup.seen(Path::new("/nonexistent/file.rs")));
        assert!(dedup.is_empty());
    }
}
