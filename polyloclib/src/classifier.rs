//! Line classification: the per-file state machine that sorts every
//! physical line into blank, comment or code.
//!
//! The scanner is line oriented and only knows a language's comment
//! markers. It does not understand string literals, so a comment marker
//! inside a string can be mistaken for a real comment.
//!
//! Per line, in order:
//!
//! 1. Whitespace-only lines are blank, whatever the block state.
//! 2. Outside a block, a line starting with a block start marker enters the
//!    block. A line that is not a single-line comment but leaves a block
//!    open somewhere after its code counts as code and enters the block.
//! 3. Inside a block the line is a comment. Distinct markers close on any
//!    occurrence of the end marker. Same-token markers (`"""`) close when the
//!    line holds the token twice, or on the second single occurrence.
//! 4. A `#!` first non-blank line is code.
//! 5. Single-line comment markers (or patterns) make a comment.
//! 6. Anything else is code.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Serialize;

use crate::error::PolylocError;
use crate::language::LanguageRule;
use crate::stats::LineCounts;
use crate::Result;

const BOM: char = '\u{feff}';

/// What a single line was counted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LineKind {
    Blank,
    Comment,
    Code,
}

impl LineKind {
    /// Short tag used in debug traces.
    pub fn tag(&self) -> &'static str {
        match self {
            LineKind::Blank => "BLNK",
            LineKind::Comment => "COMM",
            LineKind::Code => "CODE",
        }
    }
}

/// Block-comment state between lines. `pair` indexes the rule's
/// `block_comments`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BlockState {
    Normal,
    /// Inside a block whose opening token has not been matched yet.
    InBlockComment { pair: usize },
    /// Same-token block whose opening occurrence is consumed; the next
    /// single occurrence closes it.
    InBlockCommentTogglePending { pair: usize },
}

impl BlockState {
    pub fn in_block(&self) -> bool {
        !matches!(self, BlockState::Normal)
    }
}

/// Passed to a [`LineObserver`] after each line is classified.
#[derive(Debug, Clone, Copy)]
pub struct LineEvent<'a> {
    /// 1-based physical line number
    pub line_no: usize,
    /// The raw line, without its line terminator
    pub line: &'a str,
    pub kind: LineKind,
    /// Counts including this line
    pub counts: LineCounts,
    /// Block state after this line
    pub state: BlockState,
}

/// Diagnostics hook invoked for every classified line.
pub trait LineObserver: Send + Sync {
    fn on_line(&self, event: &LineEvent<'_>);
}

impl<F> LineObserver for F
where
    F: Fn(&LineEvent<'_>) + Send + Sync,
{
    fn on_line(&self, event: &LineEvent<'_>) {
        self(event)
    }
}

/// Stateful scanner for one file.
#[derive(Debug)]
pub struct LineClassifier<'r> {
    rule: &'r LanguageRule,
    state: BlockState,
    line_no: usize,
    seen_content: bool,
    counts: LineCounts,
}

impl<'r> LineClassifier<'r> {
    pub fn new(rule: &'r LanguageRule) -> Self {
        Self {
            rule,
            state: BlockState::Normal,
            line_no: 0,
            seen_content: false,
            counts: LineCounts::new(),
        }
    }

    pub fn state(&self) -> BlockState {
        self.state
    }

    pub fn counts(&self) -> LineCounts {
        self.counts
    }

    /// Classify the next physical line and update the running counts.
    pub fn classify_line(&mut self, raw: &str) -> LineKind {
        let kind = self.next_kind(raw);
        match kind {
            LineKind::Blank => self.counts.blank += 1,
            LineKind::Comment => self.counts.comment += 1,
            LineKind::Code => self.counts.code += 1,
        }
        kind
    }

    /// Counts for everything classified so far.
    pub fn finish(self) -> LineCounts {
        self.counts
    }

    fn next_kind(&mut self, raw: &str) -> LineKind {
        self.line_no += 1;

        let line = if self.line_no == 1 {
            raw.strip_prefix(BOM).unwrap_or(raw)
        } else {
            raw
        };
        let trimmed = line.trim();

        if trimmed.is_empty() {
            return LineKind::Blank;
        }

        let first_content = !self.seen_content;
        self.seen_content = true;

        // Set when the block was opened by this line's leading marker.
        let mut opened_at_start = false;
        if self.state == BlockState::Normal {
            let blocks = &self.rule.block_comments;
            if let Some(pair) = blocks.iter().position(|b| trimmed.starts_with(&b.start)) {
                self.state = BlockState::InBlockComment { pair };
                opened_at_start = true;
            } else if !self.rule.is_line_comment(trimmed) {
                if let Some(pair) = blocks.iter().position(|b| b.opens_unclosed(trimmed)) {
                    self.state = if blocks[pair].is_symmetric() {
                        BlockState::InBlockCommentTogglePending { pair }
                    } else {
                        BlockState::InBlockComment { pair }
                    };
                    return LineKind::Code;
                }
            }
        }

        match self.state {
            BlockState::InBlockComment { pair } | BlockState::InBlockCommentTogglePending { pair } => {
                self.advance_block(pair, trimmed, opened_at_start);
                return LineKind::Comment;
            }
            BlockState::Normal => {}
        }

        if first_content && trimmed.starts_with("#!") {
            return LineKind::Code;
        }

        if self.rule.is_line_comment(trimmed) {
            LineKind::Comment
        } else {
            LineKind::Code
        }
    }

    fn advance_block(&mut self, pair: usize, trimmed: &str, opened_at_start: bool) {
        let block = &self.rule.block_comments[pair];

        if block.is_symmetric() {
            match trimmed.matches(block.end.as_str()).count() {
                2 => self.state = BlockState::Normal,
                1 => {
                    self.state = match self.state {
                        BlockState::InBlockComment { pair } => {
                            BlockState::InBlockCommentTogglePending { pair }
                        }
                        _ => BlockState::Normal,
                    }
                }
                _ => {}
            }
            return;
        }

        // The opening marker itself must not count as the close (`/*/`).
        let haystack = if opened_at_start {
            &trimmed[block.start.len()..]
        } else {
            trimmed
        };
        if haystack.contains(block.end.as_str()) {
            self.state = BlockState::Normal;
        }
    }
}

/// Classify an in-memory sequence of lines.
pub fn classify_lines<I, S>(rule: &LanguageRule, lines: I) -> LineCounts
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut classifier = LineClassifier::new(rule);
    for line in lines {
        classifier.classify_line(line.as_ref());
    }
    classifier.finish()
}

/// Classify every line of a reader.
///
/// Lines are split on `\n` and decoded lossily, so invalid UTF-8 never
/// aborts a scan. The observer (and a `trace` event) sees every line.
pub fn classify_reader<R: BufRead>(
    rule: &LanguageRule,
    mut reader: R,
    observer: Option<&dyn LineObserver>,
) -> std::io::Result<LineCounts> {
    let mut classifier = LineClassifier::new(rule);
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }

        let line = String::from_utf8_lossy(&buf);
        let kind = classifier.classify_line(&line);
        let counts = classifier.counts();

        tracing::trace!(
            language = %rule.name,
            line_no = classifier.line_no,
            kind = kind.tag(),
            code = counts.code,
            comment = counts.comment,
            blank = counts.blank,
            in_block = classifier.state().in_block(),
            "{line}"
        );

        if let Some(observer) = observer {
            observer.on_line(&LineEvent {
                line_no: classifier.line_no,
                line: &line,
                kind,
                counts,
                state: classifier.state(),
            });
        }
    }

    Ok(classifier.finish())
}

/// Open `path` and classify its lines.
pub fn classify_file(
    path: impl AsRef<Path>,
    rule: &LanguageRule,
    observer: Option<&dyn LineObserver>,
) -> Result<LineCounts> {
    let path = path.as_ref();
    let file_read = |source| PolylocError::FileRead {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(file_read)?;
    classify_reader(rule, BufReader::new(file), observer).map_err(file_read)
}
