//! Read-only table of language rules and the lookups built on it.

use std::collections::{BTreeSet, HashMap};

use crate::error::PolylocError;
use crate::language::rule::LanguageRule;
use crate::language::table::{
    LanguageDef, AMBIGUOUS_EXTENSIONS, BUILD_FILES, CONVENTIONAL_NAMES, EXTENSIONS, LANGUAGES,
    SHEBANG_INTERPRETERS,
};
use crate::Result;

/// Language rules plus the extension, file-name and interpreter tables used
/// to find them.
///
/// Built once (usually with [`LanguageRegistry::builtin`]) and then only
/// read; it is shared by reference across worker threads.
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    languages: HashMap<String, LanguageRule>,
    extensions: HashMap<String, String>,
    ambiguous: HashMap<String, Vec<String>>,
    build_files: HashMap<String, String>,
    conventional_names: HashMap<String, Option<String>>,
    interpreters: HashMap<String, String>,
}

impl LanguageRegistry {
    /// A registry with no languages at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in table of languages.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();

        for def in LANGUAGES {
            match rule_from_def(def) {
                Ok(rule) => {
                    registry.languages.insert(rule.name.clone(), rule);
                }
                Err(e) => tracing::error!("skipping built-in language {}: {e}", def.name),
            }
        }

        registry.extensions = to_owned_map(EXTENSIONS);
        registry.build_files = to_owned_map(BUILD_FILES);
        registry.interpreters = to_owned_map(SHEBANG_INTERPRETERS);
        registry.conventional_names = CONVENTIONAL_NAMES
            .iter()
            .map(|(name, key)| (name.to_string(), key.map(str::to_string)))
            .collect();
        registry.ambiguous = AMBIGUOUS_EXTENSIONS
            .iter()
            .map(|(ext, names)| (ext.to_string(), names.iter().map(|n| n.to_string()).collect()))
            .collect();

        registry
    }

    /// Add (or replace) a language rule.
    pub fn with_language(mut self, rule: LanguageRule) -> Self {
        self.languages.insert(rule.name.clone(), rule);
        self
    }

    /// Map an extension key to a language name.
    pub fn with_extension(mut self, ext: &str, language: &str) -> Self {
        self.extensions
            .insert(ext.to_lowercase(), language.to_string());
        self
    }

    /// Resolve a key produced by the file-type classifier to a language
    /// name. Keys are extension keys or exact language names.
    pub fn resolve(&self, key: &str) -> Option<&str> {
        if let Some(name) = self.extensions.get(key) {
            return Some(name.as_str());
        }
        self.languages.get_key_value(key).map(|(name, _)| name.as_str())
    }

    /// Rule for a classifier key.
    ///
    /// Fails with `UnknownLanguage` for keys the classifier would never
    /// produce.
    pub fn lookup(&self, key: &str) -> Result<&LanguageRule> {
        self.resolve(key)
            .and_then(|name| self.languages.get(name))
            .ok_or_else(|| PolylocError::UnknownLanguage(key.to_string()))
    }

    /// Rule by exact language name.
    pub fn rule(&self, name: &str) -> Option<&LanguageRule> {
        self.languages.get(name)
    }

    /// Extensions mapped to `language`, derived by scanning the tables.
    pub fn extensions_for(&self, language: &str) -> BTreeSet<String> {
        let mut exts: BTreeSet<String> = self
            .extensions
            .iter()
            .filter(|(_, name)| name.as_str() == language)
            .map(|(ext, _)| ext.clone())
            .collect();
        exts.extend(
            self.ambiguous
                .iter()
                .filter(|(_, names)| names.iter().any(|n| n == language))
                .map(|(ext, _)| ext.clone()),
        );
        exts
    }

    /// All rules, sorted by name.
    pub fn languages(&self) -> Vec<&LanguageRule> {
        let mut rules: Vec<&LanguageRule> = self.languages.values().collect();
        rules.sort_by(|a, b| a.name.cmp(&b.name));
        rules
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Candidate languages when `ext` is shared by unrelated languages.
    pub fn ambiguous_candidates(&self, ext: &str) -> Option<&[String]> {
        self.ambiguous.get(ext).map(Vec::as_slice)
    }

    pub(crate) fn build_file_key(&self, basename: &str) -> Option<&str> {
        self.build_files.get(basename).map(String::as_str)
    }

    /// `Some(None)` means the name is known and must be skipped.
    pub(crate) fn conventional_name_key(&self, basename: &str) -> Option<Option<&str>> {
        self.conventional_names
            .get(&basename.to_lowercase())
            .map(|key| key.as_deref())
    }

    /// Extension key for a shebang interpreter.
    pub(crate) fn interpreter_key<'a>(&'a self, interpreter: &'a str) -> &'a str {
        self.interpreters
            .get(interpreter)
            .map(String::as_str)
            .unwrap_or(interpreter)
    }
}

fn rule_from_def(def: &LanguageDef) -> Result<LanguageRule> {
    let rule = LanguageRule::new(def.name, def.line, def.block);
    if def.patterns.is_empty() {
        Ok(rule)
    } else {
        rule.with_line_patterns(def.patterns)
    }
}

fn to_owned_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_is_complete() {
        let registry = LanguageRegistry::builtin();

        assert_eq!(registry.len(), LANGUAGES.len());
        for (ext, name) in EXTENSIONS {
            assert!(registry.rule(name).is_some(), "{ext} maps to missing {name}");
        }
        for (ext, names) in AMBIGUOUS_EXTENSIONS {
            assert!(registry.resolve(ext).is_some(), "{ext} has no default");
            for name in *names {
                assert!(registry.rule(name).is_some(), "missing candidate {name}");
            }
        }
        for (_, key) in BUILD_FILES {
            assert!(registry.resolve(key).is_some(), "build key {key}");
        }
    }

    #[test]
    fn test_lookup_by_extension_and_name() {
        let registry = LanguageRegistry::builtin();

        assert_eq!(registry.lookup("py").unwrap().name, "Python");
        assert_eq!(registry.lookup("Mercury").unwrap().name, "Mercury");
        assert_eq!(registry.lookup("makefile").unwrap().name, "Makefile");
    }

    #[test]
    fn test_lookup_unknown() {
        let registry = LanguageRegistry::builtin();
        let result = registry.lookup("nope");

        if let Err(PolylocError::UnknownLanguage(key)) = result {
            assert_eq!(key, "nope");
        } else {
            panic!("Expected UnknownLanguage error");
        }
    }

    #[test]
    fn test_extensions_for() {
        let registry = LanguageRegistry::builtin();

        let exts = registry.extensions_for("Python");
        assert!(exts.contains("py"));
        assert!(exts.contains("pyi"));

        assert!(registry.extensions_for("MATLAB").contains("m"));
        assert!(registry.extensions_for("Objective-C").contains("m"));
        assert!(registry.extensions_for("Nonexistent").is_empty());
    }

    #[test]
    fn test_regex_language_compiles() {
        let registry = LanguageRegistry::builtin();
        let just = registry.rule("Just").unwrap();

        assert!(just.is_line_comment("# comment"));
        assert!(!just.is_line_comment("#!/usr/bin/env node"));
    }

    #[test]
    fn test_custom_registry() {
        let registry = LanguageRegistry::empty()
            .with_language(LanguageRule::new("Imba", &["#"], &[("###", "###")]))
            .with_extension("IMBA", "Imba");

        assert_eq!(registry.resolve("imba"), Some("Imba"));
        assert!(registry.lookup("py").is_err());
    }

    #[test]
    fn test_interpreter_key() {
        let registry = LanguageRegistry::builtin();

        assert_eq!(registry.interpreter_key("python"), "py");
        assert_eq!(registry.interpreter_key("bash"), "bash");
    }
}
