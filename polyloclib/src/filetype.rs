//! File-type detection: which language a path belongs to.
//!
//! Detection runs in a fixed order and the first hit wins:
//!
//! 1. exact build-file names (`CMakeLists.txt`, `pom.xml`, ...)
//! 2. conventional extensionless names, case-insensitive (`Makefile`)
//! 3. content detection for extensions shared by unrelated languages
//! 4. the `#!` interpreter on the first line
//! 5. the lowercased extension
//!
//! Only keys the registry can resolve are returned, so
//! [`LanguageRegistry::lookup`] never fails for a classified file.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::language::LanguageRegistry;

/// Longest first line read when sniffing for a shebang.
const SHEBANG_SNIFF_LIMIT: u64 = 4096;

static SHEBANG_ENV: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#!\s*\S+/env\s+(?:-\S+\s+)*([a-zA-Z]+)").expect("valid shebang pattern")
});

static SHEBANG_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#!\s*[.a-zA-Z0-9_/-]+/([a-zA-Z]+)").expect("valid shebang pattern")
});

/// Which rule recognized a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Detection {
    BuildFile,
    FileName,
    Content,
    Shebang,
    Extension,
}

/// A recognized file: a registry key plus how it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileType {
    /// Extension key or language name; resolvable by the registry.
    pub key: String,
    pub detection: Detection,
}

impl FileType {
    fn new(key: impl Into<String>, detection: Detection) -> Self {
        Self {
            key: key.into(),
            detection,
        }
    }
}

/// Picks a language from file content for extensions that several
/// languages share.
pub trait ContentDetector: Send + Sync {
    /// Return a language name, or `None` when the content is inconclusive.
    fn detect(&self, path: &Path, content: &[u8]) -> Option<String>;
}

/// Keyword heuristics for the built-in ambiguous extensions.
///
/// Each candidate language has a list of patterns; the first candidate with
/// a matching pattern wins.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicDetector;

struct Heuristic {
    extension: &'static str,
    language: &'static str,
    patterns: &'static [&'static str],
}

const HEURISTICS: &[Heuristic] = &[
    Heuristic {
        extension: "m",
        language: "Objective-C",
        patterns: &[
            r"(?m)^\s*@(?:interface|implementation|protocol|end)\b",
            r#"(?m)^\s*#\s*(?:import|include)\s*[<"]"#,
        ],
    },
    Heuristic {
        extension: "m",
        language: "Mercury",
        patterns: &[r"(?m)^\s*:-\s*(?:module|interface|implementation|import_module)\b"],
    },
    Heuristic {
        extension: "m",
        language: "MATLAB",
        patterns: &[
            r"(?m)^\s*function\b.*=",
            r"(?m)^\s*%",
            r"(?m)^\s*end\s*$",
        ],
    },
    Heuristic {
        extension: "v",
        language: "Coq",
        patterns: &[r"(?m)^\s*(?:Require|Theorem|Lemma|Proof|Qed|Definition|Inductive|Fixpoint)\b"],
    },
    Heuristic {
        extension: "v",
        language: "Verilog",
        patterns: &[r"(?m)^\s*(?:module|endmodule|always|assign|wire|reg)\b"],
    },
    Heuristic {
        extension: "fs",
        language: "GLSL",
        patterns: &[
            r"(?m)^\s*#version\b",
            r"\bgl_Frag(?:Color|Coord|Data)\b",
            r"(?m)^\s*(?:uniform|varying|precision)\s",
        ],
    },
    Heuristic {
        extension: "fs",
        language: "F#",
        patterns: &[r"(?m)^\s*(?:let|open|module|namespace|type)\s"],
    },
    Heuristic {
        extension: "r",
        language: "Rebol",
        patterns: &[r"(?i)\bREBOL\s*\["],
    },
    Heuristic {
        extension: "r",
        language: "R",
        patterns: &[r"<-", r"\blibrary\s*\(", r"\bfunction\s*\("],
    },
];

static COMPILED_HEURISTICS: LazyLock<Vec<(&'static Heuristic, Vec<Regex>)>> = LazyLock::new(|| {
    HEURISTICS
        .iter()
        .map(|h| {
            let patterns = h
                .patterns
                .iter()
                .filter_map(|p| match Regex::new(p) {
                    Ok(re) => Some(re),
                    Err(e) => {
                        tracing::error!(language = h.language, pattern = *p, "invalid heuristic: {e}");
                        None
                    }
                })
                .collect();
            (h, patterns)
        })
        .collect()
});

impl ContentDetector for HeuristicDetector {
    fn detect(&self, path: &Path, content: &[u8]) -> Option<String> {
        let ext = lowercase_extension(path)?;
        let text = String::from_utf8_lossy(content);

        COMPILED_HEURISTICS
            .iter()
            .filter(|(h, _)| h.extension == ext)
            .find(|(_, patterns)| patterns.iter().any(|re| re.is_match(&text)))
            .map(|(h, _)| h.language.to_string())
    }
}

/// Resolves paths to registry keys.
pub struct FileTypeClassifier<'r> {
    registry: &'r LanguageRegistry,
    detector: Box<dyn ContentDetector>,
}

impl<'r> FileTypeClassifier<'r> {
    /// Classifier using the built-in [`HeuristicDetector`].
    pub fn new(registry: &'r LanguageRegistry) -> Self {
        Self {
            registry,
            detector: Box::new(HeuristicDetector),
        }
    }

    /// Replace the content detector used for ambiguous extensions.
    pub fn with_detector(mut self, detector: impl ContentDetector + 'static) -> Self {
        self.detector = Box::new(detector);
        self
    }

    /// Classify `path`, or `None` when the file is not recognized.
    ///
    /// Read failures while sniffing are not errors; detection falls through
    /// to the next rule.
    pub fn classify(&self, path: &Path) -> Option<FileType> {
        let basename = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();

        if let Some(key) = self.registry.build_file_key(basename) {
            return self.known(key, Detection::BuildFile);
        }

        match self.registry.conventional_name_key(basename) {
            Some(Some(key)) => return self.known(key, Detection::FileName),
            Some(None) => {
                tracing::debug!(path = %path.display(), "skipping explicitly unrecognized file name");
                return None;
            }
            None => {}
        }

        let ext = lowercase_extension(path);

        if let Some(ext) = ext.as_deref() {
            if self.registry.ambiguous_candidates(ext).is_some() {
                if let Some(found) = self.detect_content(path) {
                    return Some(found);
                }
                return self.known(ext, Detection::Extension);
            }
        }

        if let Some(interpreter) = read_shebang_interpreter(path) {
            let key = self.registry.interpreter_key(&interpreter);
            if let Some(found) = self.known(key, Detection::Shebang) {
                return Some(found);
            }
            tracing::debug!(path = %path.display(), interpreter, "unknown shebang interpreter");
        }

        ext.and_then(|ext| self.known(&ext, Detection::Extension))
    }

    fn detect_content(&self, path: &Path) -> Option<FileType> {
        let content = match fs::read(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!(path = %path.display(), "content detection skipped: {e}");
                return None;
            }
        };

        let language = self.detector.detect(path, &content)?;
        tracing::debug!(path = %path.display(), language, "content detection");
        self.known(&language, Detection::Content)
    }

    fn known(&self, key: &str, detection: Detection) -> Option<FileType> {
        self.registry
            .resolve(key)
            .map(|_| FileType::new(key, detection))
    }
}

impl std::fmt::Debug for FileTypeClassifier<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileTypeClassifier")
            .field("languages", &self.registry.len())
            .finish_non_exhaustive()
    }
}

fn lowercase_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty())
        .map(str::to_lowercase)
}

fn read_shebang_interpreter(path: &Path) -> Option<String> {
    let file = File::open(path).ok()?;
    let mut reader = BufReader::new(file).take(SHEBANG_SNIFF_LIMIT);
    let mut first = Vec::new();
    reader.read_until(b'\n', &mut first).ok()?;

    let line = String::from_utf8_lossy(&first);
    parse_shebang(line.trim_start()).map(str::to_string)
}

/// Interpreter named by a `#!` line, e.g. `python` for
/// `#!/usr/bin/env python3` or `perl` for `#!/usr/bin/perl -w`.
pub fn parse_shebang(line: &str) -> Option<&str> {
    if !line.starts_with("#!") {
        return None;
    }
    SHEBANG_ENV
        .captures(line)
        .or_else(|| SHEBANG_PATH.captures(line))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::{tempdir, TempDir};

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn classify(path: &Path) -> Option<FileType> {
        let registry = LanguageRegistry::builtin();
        FileTypeClassifier::new(&registry).classify(path)
    }

    #[test]
    fn test_parse_shebang() {
        assert_eq!(parse_shebang("#!/usr/bin/env python3"), Some("python"));
        assert_eq!(parse_shebang("#! /usr/bin/env -S node --flag"), Some("node"));
        assert_eq!(parse_shebang("#!/usr/bin/perl -w"), Some("perl"));
        assert_eq!(parse_shebang("#!/bin/sh"), Some("sh"));
        assert_eq!(parse_shebang("# just a comment"), None);
        assert_eq!(parse_shebang("print('#!/bin/sh')"), None);
    }

    #[test]
    fn test_extension_is_lowercased() {
        let temp = tempdir().unwrap();
        let path = write(&temp, "Main.GO", "package main\n");

        assert_eq!(
            classify(&path),
            Some(FileType::new("go", Detection::Extension))
        );
    }

    #[test]
    fn test_build_file_beats_extension() {
        let temp = tempdir().unwrap();
        let cmake = write(&temp, "CMakeLists.txt", "project(x)\n");
        let pom = write(&temp, "pom.xml", "<project/>\n");

        assert_eq!(classify(&cmake).unwrap().key, "cmake");
        assert_eq!(classify(&cmake).unwrap().detection, Detection::BuildFile);
        assert_eq!(classify(&pom).unwrap().key, "maven");
    }

    #[test]
    fn test_conventional_names() {
        let temp = tempdir().unwrap();
        let makefile = write(&temp, "Makefile", "all:\n");
        let gnu = write(&temp, "GNUmakefile", "all:\n");
        let rebar = write(&temp, "rebar", "whatever\n");

        assert_eq!(
            classify(&makefile),
            Some(FileType::new("makefile", Detection::FileName))
        );
        assert_eq!(classify(&gnu).unwrap().key, "makefile");
        assert_eq!(classify(&rebar), None);
    }

    #[test]
    fn test_shebang_without_extension() {
        let temp = tempdir().unwrap();
        let script = write(&temp, "tool", "#!/usr/bin/env python3\nprint(1)\n");
        let indented = write(&temp, "run", "  #!/bin/bash\necho hi\n");

        assert_eq!(
            classify(&script),
            Some(FileType::new("py", Detection::Shebang))
        );
        assert_eq!(classify(&indented).unwrap().key, "bash");
    }

    #[test]
    fn test_shebang_beats_extension() {
        let temp = tempdir().unwrap();
        let path = write(&temp, "script.txt", "#!/usr/bin/ruby\nputs 1\n");

        assert_eq!(classify(&path).unwrap().key, "rb");
    }

    #[test]
    fn test_unknown_shebang_falls_through() {
        let temp = tempdir().unwrap();
        let with_ext = write(&temp, "x.go", "#!/usr/bin/env frobnicate\n");
        let without_ext = write(&temp, "x", "#!/usr/bin/env frobnicate\n");

        assert_eq!(classify(&with_ext).unwrap().key, "go");
        assert_eq!(classify(&without_ext), None);
    }

    #[test]
    fn test_unrecognized() {
        let temp = tempdir().unwrap();
        let plain = write(&temp, "README", "hello\n");
        let unknown = write(&temp, "data.qqq", "hello\n");

        assert_eq!(classify(&plain), None);
        assert_eq!(classify(&unknown), None);
    }

    #[test]
    fn test_heuristic_patterns_compile() {
        for (heuristic, patterns) in COMPILED_HEURISTICS.iter() {
            assert_eq!(patterns.len(), heuristic.patterns.len(), "{}", heuristic.language);
        }
    }

    #[test]
    fn test_ambiguous_extension_by_content() {
        let temp = tempdir().unwrap();
        let objc = write(&temp, "a.m", "#import <Foundation/Foundation.h>\n@interface A\n@end\n");
        let mercury = write(&temp, "b.m", ":- module b.\n:- interface.\n");
        let matlab = write(&temp, "c.m", "function y = f(x)\n  y = x;\nend\n");
        let coq = write(&temp, "d.v", "Theorem t : True.\nProof. trivial. Qed.\n");
        let glsl = write(&temp, "e.fs", "#version 330\nvoid main() { gl_FragColor = vec4(1); }\n");

        assert_eq!(
            classify(&objc),
            Some(FileType::new("Objective-C", Detection::Content))
        );
        assert_eq!(classify(&mercury).unwrap().key, "Mercury");
        assert_eq!(classify(&matlab).unwrap().key, "MATLAB");
        assert_eq!(classify(&coq).unwrap().key, "Coq");
        assert_eq!(classify(&glsl).unwrap().key, "GLSL");
    }

    #[test]
    fn test_ambiguous_extension_inconclusive_falls_back() {
        let temp = tempdir().unwrap();
        let path = write(&temp, "x.v", "\n\n");
        let registry = LanguageRegistry::builtin();

        let found = FileTypeClassifier::new(&registry).classify(&path).unwrap();
        assert_eq!(found, FileType::new("v", Detection::Extension));
        assert_eq!(registry.lookup(&found.key).unwrap().name, "Verilog");
    }

    struct Always(&'static str);

    impl ContentDetector for Always {
        fn detect(&self, _path: &Path, _content: &[u8]) -> Option<String> {
            Some(self.0.to_string())
        }
    }

    #[test]
    fn test_custom_detector() {
        let temp = tempdir().unwrap();
        let path = write(&temp, "x.r", "print(1)\n");
        let registry = LanguageRegistry::builtin();

        let rebol = FileTypeClassifier::new(&registry).with_detector(Always("Rebol"));
        assert_eq!(rebol.classify(&path).unwrap().key, "Rebol");

        // Unknown detector output falls back to the extension default.
        let bogus = FileTypeClassifier::new(&registry).with_detector(Always("Klingon"));
        assert_eq!(bogus.classify(&path), Some(FileType::new("r", Detection::Extension)));
    }

    #[test]
    fn test_classified_keys_always_resolve() {
        let temp = tempdir().unwrap();
        let registry = LanguageRegistry::builtin();
        let classifier = FileTypeClassifier::new(&registry);
        let names = ["a.rs", "b.PY", "meson.build", "Dockerfile", "justfile", "c.fs", "d.r"];

        for name in names {
            let path = write(&temp, name, "x\n");
            let found = classifier.classify(&path).unwrap();
            assert!(registry.lookup(&found.key).is_ok(), "{name} -> {}", found.key);
        }
    }
}
