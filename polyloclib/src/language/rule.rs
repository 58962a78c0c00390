//! Comment syntax of a single language.

use regex::Regex;

use crate::error::PolylocError;
use crate::Result;

/// A multi-line comment delimiter pair, e.g. `/*` .. `*/` or `"""` .. `"""`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockComment {
    pub start: String,
    pub end: String,
}

impl BlockComment {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// True when the same token opens and closes the block (`"""`, `###`).
    pub fn is_symmetric(&self) -> bool {
        self.start == self.end
    }

    /// Scan `line` left to right and report whether it leaves a block open.
    ///
    /// Distinct markers nest: every start pushes, every end pops (never
    /// below zero). Symmetric markers alternate between open and closed.
    pub fn opens_unclosed(&self, line: &str) -> bool {
        let bytes = line.as_bytes();
        let start = self.start.as_bytes();
        let end = self.end.as_bytes();
        let symmetric = self.is_symmetric();

        let mut depth = 0usize;
        let mut pos = 0;
        while pos < bytes.len() {
            let rest = &bytes[pos..];
            if rest.starts_with(start) {
                depth = match (symmetric, depth) {
                    (true, 0) => 1,
                    (true, _) => 0,
                    (false, d) => d + 1,
                };
                pos += start.len();
            } else if !symmetric && !end.is_empty() && rest.starts_with(end) {
                depth = depth.saturating_sub(1);
                pos += end.len();
            } else {
                pos += 1;
            }
        }
        depth > 0
    }
}

/// How a language recognizes single-line comments.
#[derive(Debug, Clone)]
pub enum LineComments {
    /// Literal prefixes, tested in declared order.
    Markers(Vec<String>),
    /// Patterns that must match the whole trimmed line.
    Patterns(Vec<Regex>),
}

impl LineComments {
    fn matches(&self, trimmed: &str) -> bool {
        match self {
            LineComments::Markers(markers) => markers.iter().any(|m| trimmed.starts_with(m.as_str())),
            LineComments::Patterns(patterns) => patterns.iter().any(|re| re.is_match(trimmed)),
        }
    }
}

/// Comment syntax for one language.
///
/// Markers are compared literally against a line that has already had its
/// leading and trailing whitespace removed.
#[derive(Debug, Clone)]
pub struct LanguageRule {
    pub name: String,
    pub line_comments: LineComments,
    pub block_comments: Vec<BlockComment>,
}

impl LanguageRule {
    /// Build a rule from literal line markers and block pairs.
    ///
    /// Pairs with an empty start or end marker are dropped: they mean the
    /// language has no multi-line comments.
    pub fn new(name: impl Into<String>, line: &[&str], blocks: &[(&str, &str)]) -> Self {
        Self {
            name: name.into(),
            line_comments: LineComments::Markers(
                line.iter().filter(|m| !m.is_empty()).map(|m| m.to_string()).collect(),
            ),
            block_comments: blocks
                .iter()
                .filter(|(start, end)| !start.is_empty() && !end.is_empty())
                .map(|(start, end)| BlockComment::new(*start, *end))
                .collect(),
        }
    }

    /// Replace literal line markers with regular expressions.
    ///
    /// Each pattern is anchored so it has to match the full trimmed line.
    pub fn with_line_patterns(mut self, patterns: &[&str]) -> Result<Self> {
        let compiled = patterns
            .iter()
            .map(|p| {
                Regex::new(&format!("^(?:{p})$")).map_err(|e| PolylocError::invalid_regex(p, e))
            })
            .collect::<Result<Vec<_>>>()?;
        self.line_comments = LineComments::Patterns(compiled);
        Ok(self)
    }

    /// Whether a trimmed line is a single-line comment in this language.
    pub fn is_line_comment(&self, trimmed: &str) -> bool {
        self.line_comments.matches(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_block_start_means_no_blocks() {
        let rule = LanguageRule::new("Makefile", &["#"], &[("", "")]);
        assert!(rule.block_comments.is_empty());
    }

    #[test]
    fn test_empty_block_end_means_no_blocks() {
        let rule = LanguageRule::new("X", &["//"], &[("/*", ""), ("{-", "-}")]);
        assert_eq!(rule.block_comments, vec![BlockComment::new("{-", "-}")]);

        let counts = crate::classifier::classify_lines(&rule, ["a = 1 /* b", "c"]);
        assert_eq!(counts.code, 2);
    }

    #[test]
    fn test_opens_unclosed_with_empty_end_terminates() {
        let block = BlockComment::new("/*", "");
        assert!(block.opens_unclosed("a = 1 /* b"));
        assert!(!block.opens_unclosed("a = 1"));
    }

    #[test]
    fn test_markers_in_order() {
        let rule = LanguageRule::new("PHP", &["#", "//"], &[("/*", "*/")]);
        assert!(rule.is_line_comment("# hash"));
        assert!(rule.is_line_comment("// slashes"));
        assert!(!rule.is_line_comment("echo 1; // trailing"));
    }

    #[test]
    fn test_patterns_match_whole_line() {
        let rule = LanguageRule::new("Just", &["#"], &[])
            .with_line_patterns(&["#[^!].*"])
            .unwrap();
        assert!(rule.is_line_comment("# comment"));
        assert!(!rule.is_line_comment("#!/usr/bin/env python3"));
        assert!(!rule.is_line_comment("echo # not a comment line"));
    }

    #[test]
    fn test_invalid_pattern() {
        let result = LanguageRule::new("Broken", &[], &[]).with_line_patterns(&["(unclosed"]);
        if let Err(PolylocError::InvalidRegex { pattern, .. }) = result {
            assert_eq!(pattern, "(unclosed");
        } else {
            panic!("Expected InvalidRegex error");
        }
    }

    #[test]
    fn test_opens_unclosed_distinct() {
        let block = BlockComment::new("/*", "*/");
        assert!(block.opens_unclosed("var n string /*"));
        assert!(!block.opens_unclosed("int a; /* counts */"));
        assert!(block.opens_unclosed("/* a /* b */"));
        assert!(!block.opens_unclosed("x */ y"));
        assert!(!block.opens_unclosed("plain code"));
    }

    #[test]
    fn test_opens_unclosed_symmetric() {
        let block = BlockComment::new("\"\"\"", "\"\"\"");
        assert!(block.opens_unclosed("x = \"\"\"doc"));
        assert!(!block.opens_unclosed("x = \"\"\"doc\"\"\""));
        assert!(block.opens_unclosed("a \"\"\" b \"\"\" c \"\"\""));
    }
}
