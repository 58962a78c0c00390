//! Output formats: the default table, JSON, cloc-compatible XML and
//! sloccount's tab-separated format.

use std::fmt::Write as _;
use std::path::{Component, Path};

use console::Style;
use polyloclib::{CountResult, LanguageRegistry, SortBy};
use serde::Serialize;

const LANGUAGE_HEADER: &str = "Language";
const FILE_HEADER: &str = "File";
const LANGUAGE_COLUMNS: &str = "files          blank        comment           code";
const FILE_COLUMNS: &str = "blank        comment           code";
const LANGUAGE_NAME_WIDTH: usize = 27;
const LANGUAGE_ROW_LEN: usize = 79;

/// Output type selected with `--output-type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputType {
    Default,
    ClocXml,
    Sloccount,
    Json,
}

impl OutputType {
    pub const NAMES: [&'static str; 4] = ["default", "cloc-xml", "sloccount", "json"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "default" => Some(OutputType::Default),
            "cloc-xml" => Some(OutputType::ClocXml),
            "sloccount" => Some(OutputType::Sloccount),
            "json" => Some(OutputType::Json),
            _ => None,
        }
    }
}

/// What to render and how to order it.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub output: OutputType,
    pub by_file: bool,
    pub sort: SortBy,
}

/// Render `result` in the requested format.
pub fn render(result: &CountResult, opts: RenderOptions) -> Result<String, serde_json::Error> {
    let out = match (opts.output, opts.by_file) {
        (OutputType::Default, false) => languages_table(result, opts.sort),
        (OutputType::Default, true) => files_table(result, opts.sort),
        (OutputType::Json, false) => languages_json(result, opts.sort)?,
        (OutputType::Json, true) => files_json(result, opts.sort)?,
        (OutputType::ClocXml, false) => languages_xml(result, opts.sort),
        (OutputType::ClocXml, true) => files_xml(result, opts.sort),
        // sloccount is always per file
        (OutputType::Sloccount, _) => sloccount(result, opts.sort),
    };
    Ok(out)
}

fn separator(len: usize) -> String {
    "-".repeat(len)
}

fn header_style() -> Style {
    Style::new().bold()
}

fn languages_table(result: &CountResult, sort: SortBy) -> String {
    let mut out = String::new();
    let sep = separator(LANGUAGE_ROW_LEN);
    let header = format!(
        "{:<width$} {}",
        LANGUAGE_HEADER,
        LANGUAGE_COLUMNS,
        width = LANGUAGE_NAME_WIDTH + 1
    );

    let _ = writeln!(out, "{sep}");
    let _ = writeln!(out, "{}", header_style().apply_to(header));
    let _ = writeln!(out, "{sep}");
    for language in result.sorted_by(sort) {
        let _ = writeln!(
            out,
            "{:<27} {:>6} {:>14} {:>14} {:>14}",
            language.name,
            language.file_count(),
            language.counts.blank,
            language.counts.comment,
            language.counts.code
        );
    }
    let _ = writeln!(out, "{sep}");
    let _ = writeln!(
        out,
        "{:<27} {:>6} {:>14} {:>14} {:>14}",
        "TOTAL",
        result.total.file_count,
        result.total.counts.blank,
        result.total.counts.comment,
        result.total.counts.code
    );
    let _ = writeln!(out, "{sep}");
    out
}

fn files_table(result: &CountResult, sort: SortBy) -> String {
    let name_width = result.max_path_len.max(FILE_HEADER.len()).max("TOTAL".len());
    let mut out = String::new();
    let sep = separator(name_width + FILE_COLUMNS.len() + 16);
    let header = format!(
        "{:<width$} {:>columns$}",
        FILE_HEADER,
        FILE_COLUMNS,
        width = name_width,
        columns = FILE_COLUMNS.len() + 15
    );

    let _ = writeln!(out, "{sep}");
    let _ = writeln!(out, "{}", header_style().apply_to(header));
    let _ = writeln!(out, "{sep}");
    for file in result.files_sorted_by(sort) {
        let _ = writeln!(
            out,
            "{:<width$} {:>20} {:>14} {:>14}",
            file.path.display(),
            file.counts.blank,
            file.counts.comment,
            file.counts.code,
            width = name_width
        );
    }
    let _ = writeln!(out, "{sep}");
    let _ = writeln!(
        out,
        "{:<width$} {:>20} {:>14} {:>14}",
        "TOTAL",
        result.total.counts.blank,
        result.total.counts.comment,
        result.total.counts.code,
        width = name_width
    );
    let _ = writeln!(out, "{sep}");
    out
}

#[derive(Debug, Serialize)]
struct JsonLanguage<'a> {
    name: &'a str,
    files: u64,
    code: u64,
    comment: u64,
    blank: u64,
}

#[derive(Debug, Serialize)]
struct JsonFile<'a> {
    name: String,
    language: &'a str,
    code: u64,
    comment: u64,
    blank: u64,
}

#[derive(Debug, Serialize)]
struct JsonTotal {
    files: u64,
    code: u64,
    comment: u64,
    blank: u64,
}

#[derive(Debug, Serialize)]
struct JsonLanguagesReport<'a> {
    languages: Vec<JsonLanguage<'a>>,
    total: JsonTotal,
}

#[derive(Debug, Serialize)]
struct JsonFilesReport<'a> {
    files: Vec<JsonFile<'a>>,
    total: JsonTotal,
}

fn json_total(result: &CountResult) -> JsonTotal {
    JsonTotal {
        files: result.total.file_count,
        code: result.total.counts.code,
        comment: result.total.counts.comment,
        blank: result.total.counts.blank,
    }
}

fn languages_json(result: &CountResult, sort: SortBy) -> Result<String, serde_json::Error> {
    let report = JsonLanguagesReport {
        languages: result
            .sorted_by(sort)
            .into_iter()
            .map(|l| JsonLanguage {
                name: &l.name,
                files: l.file_count(),
                code: l.counts.code,
                comment: l.counts.comment,
                blank: l.counts.blank,
            })
            .collect(),
        total: json_total(result),
    };
    serde_json::to_string(&report)
}

fn files_json(result: &CountResult, sort: SortBy) -> Result<String, serde_json::Error> {
    let report = JsonFilesReport {
        files: result
            .files_sorted_by(sort)
            .into_iter()
            .map(|f| JsonFile {
                name: f.path.display().to_string(),
                language: &f.language,
                code: f.counts.code,
                comment: f.counts.comment,
                blank: f.counts.blank,
            })
            .collect(),
        total: json_total(result),
    };
    serde_json::to_string(&report)
}

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

/// Escape text for use inside a double-quoted XML attribute.
fn xml_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn languages_xml(result: &CountResult, sort: SortBy) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{XML_DECLARATION}");
    let _ = writeln!(out, "<results>");
    let _ = writeln!(out, "  <header></header>");
    let _ = writeln!(out, "  <languages>");
    for language in result.sorted_by(sort) {
        let _ = writeln!(
            out,
            "    <language name=\"{}\" files_count=\"{}\" blank=\"{}\" comment=\"{}\" code=\"{}\"></language>",
            xml_escape(&language.name),
            language.file_count(),
            language.counts.blank,
            language.counts.comment,
            language.counts.code
        );
    }
    let _ = writeln!(
        out,
        "    <total sum_files=\"{}\" blank=\"{}\" comment=\"{}\" code=\"{}\"></total>",
        result.total.file_count,
        result.total.counts.blank,
        result.total.counts.comment,
        result.total.counts.code
    );
    let _ = writeln!(out, "  </languages>");
    let _ = writeln!(out, "</results>");
    out
}

fn files_xml(result: &CountResult, sort: SortBy) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{XML_DECLARATION}");
    let _ = writeln!(out, "<results>");
    let _ = writeln!(out, "  <header></header>");
    let _ = writeln!(out, "  <files>");
    for file in result.files_sorted_by(sort) {
        let _ = writeln!(
            out,
            "    <file name=\"{}\" language=\"{}\" blank=\"{}\" comment=\"{}\" code=\"{}\"></file>",
            xml_escape(&file.path.display().to_string()),
            xml_escape(&file.language),
            file.counts.blank,
            file.counts.comment,
            file.counts.code
        );
    }
    let _ = writeln!(
        out,
        "    <total blank=\"{}\" comment=\"{}\" code=\"{}\"></total>",
        result.total.counts.blank,
        result.total.counts.comment,
        result.total.counts.code
    );
    let _ = writeln!(out, "  </files>");
    let _ = writeln!(out, "</results>");
    out
}

/// First directory below the scanned root, e.g. `src` for `./src/lib/a.c`.
fn top_dir(path: &Path) -> String {
    let parts: Vec<&std::ffi::OsStr> = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part),
            _ => None,
        })
        .collect();
    if parts.len() >= 2 {
        parts[0].to_string_lossy().into_owned()
    } else {
        String::new()
    }
}

fn sloccount(result: &CountResult, sort: SortBy) -> String {
    let mut out = String::new();
    for file in result.files_sorted_by(sort) {
        let _ = writeln!(
            out,
            "{}\t{}\t{}\t{}",
            file.counts.code,
            file.language,
            top_dir(&file.path),
            file.path.display()
        );
    }
    out
}

/// Every known language with its extensions, for `--show-lang`.
pub fn languages_list(registry: &LanguageRegistry) -> String {
    let mut out = String::new();
    for rule in registry.languages() {
        let exts: Vec<String> = registry.extensions_for(&rule.name).into_iter().collect();
        let _ = writeln!(out, "{:<30} ({})", rule.name, exts.join(","));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyloclib::{FileRecord, LineCounts, ResultAggregator};
    use std::path::PathBuf;

    fn sample() -> CountResult {
        let mut aggregator = ResultAggregator::new();
        aggregator.add(FileRecord::new(
            PathBuf::from("./src/main.go"),
            "Go",
            LineCounts {
                code: 4,
                comment: 3,
                blank: 1,
            },
        ));
        aggregator.add(FileRecord::new(
            PathBuf::from("./a&b.c"),
            "C",
            LineCounts {
                code: 2,
                comment: 0,
                blank: 0,
            },
        ));
        aggregator.finalize()
    }

    fn opts(output: OutputType, by_file: bool) -> RenderOptions {
        RenderOptions {
            output,
            by_file,
            sort: SortBy::Code,
        }
    }

    #[test]
    fn test_languages_table() {
        let out = render(&sample(), opts(OutputType::Default, false)).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0].len(), LANGUAGE_ROW_LEN);
        assert!(lines[1].contains("Language"));
        assert!(lines[3].starts_with("Go "));
        assert!(lines[3].ends_with(" 4"));
        assert!(lines[4].starts_with("C "));
        assert!(lines[6].starts_with("TOTAL"));
        assert!(lines[6].ends_with(" 6"));
    }

    #[test]
    fn test_files_table() {
        let out = render(&sample(), opts(OutputType::Default, true)).unwrap();

        assert!(out.contains("./src/main.go"));
        assert!(out.lines().nth(1).unwrap().contains("File"));
        assert!(!out.contains("Language"));
    }

    #[test]
    fn test_json_by_language() {
        let out = render(&sample(), opts(OutputType::Json, false)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["languages"][0]["name"], "Go");
        assert_eq!(value["languages"][0]["files"], 1);
        assert_eq!(value["languages"][0]["comment"], 3);
        assert_eq!(value["total"]["files"], 2);
        assert_eq!(value["total"]["code"], 6);
    }

    #[test]
    fn test_json_by_file() {
        let out = render(&sample(), opts(OutputType::Json, true)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["files"][0]["name"], "./src/main.go");
        assert_eq!(value["files"][0]["language"], "Go");
        assert_eq!(value["files"][1]["code"], 2);
    }

    #[test]
    fn test_cloc_xml_escapes_attributes() {
        let out = render(&sample(), opts(OutputType::ClocXml, true)).unwrap();

        assert!(out.starts_with(XML_DECLARATION));
        assert!(out.contains("name=\"./a&amp;b.c\""));
        assert!(out.contains("<total blank=\"1\" comment=\"3\" code=\"6\"></total>"));

        let out = render(&sample(), opts(OutputType::ClocXml, false)).unwrap();
        assert!(out.contains("<language name=\"Go\" files_count=\"1\""));
        assert!(out.contains("sum_files=\"2\""));
    }

    #[test]
    fn test_sloccount() {
        let out = render(&sample(), opts(OutputType::Sloccount, false)).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines, vec!["4\tGo\tsrc\t./src/main.go", "2\tC\t\t./a&b.c"]);
    }

    #[test]
    fn test_output_type_names() {
        for name in OutputType::NAMES {
            assert!(OutputType::from_name(name).is_some());
        }
        assert_eq!(OutputType::from_name("yaml"), None);
    }

    #[test]
    fn test_languages_list() {
        let out = languages_list(&LanguageRegistry::builtin());

        let python = out.lines().find(|l| l.starts_with("Python ")).unwrap();
        assert!(python.contains("py"));
        assert!(out.lines().any(|l| l.starts_with("MATLAB") && l.contains("(m)")));
    }
}
