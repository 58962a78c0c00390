//! # polyloc
//!
//! A CLI tool for counting blank, comment and code lines across a source
//! tree, grouped by language.
//!
//! ## Overview
//!
//! polyloc is built on top of polyloclib and provides a command-line
//! interface in the spirit of cloc: it walks the given paths, recognizes
//! each file's language and reports per-language (or per-file) totals.
//!
//! ## Features
//!
//! - **Many languages**: comment syntax for about two hundred languages
//! - **Filtering**: globs, file and directory regexes, excluded
//!   extensions, included languages
//! - **Multiple output formats**: table (default), JSON, cloc XML,
//!   sloccount
//! - **Duplicate detection**: identical files are counted once
//!
//! ## Usage
//!
//! ```bash
//! # Count lines in the current directory
//! polyloc .
//!
//! # Per-file report sorted by comment lines
//! polyloc src --by-file --sort comment
//!
//! # Output as JSON, skipping vendored code
//! polyloc . --output-type json --not-match-d vendor
//!
//! # Only Go and Python
//! polyloc . --include-lang Go,Python
//! ```

mod render;

use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use polyloclib::{
    count_paths, CountOptions, FilterConfig, LanguageRegistry, LineEvent, LineObserver, SortBy,
};
use tracing_subscriber::EnvFilter;

use crate::render::{OutputType, RenderOptions};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("polyloc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Count blank, comment and code lines by language")
        .arg(
            Arg::new("paths")
                .help("Files or directories to analyze")
                .num_args(1..)
                .required_unless_present("show-lang"),
        )
        .arg(
            Arg::new("by-file")
                .short('f')
                .long("by-file")
                .action(ArgAction::SetTrue)
                .help("Report results for every encountered source file"),
        )
        .arg(
            Arg::new("sort")
                .long("sort")
                .value_parser(["name", "files", "blank", "comment", "code"])
                .default_value("code")
                .help("Sort based on a certain column"),
        )
        .arg(
            Arg::new("output-type")
                .long("output-type")
                .value_parser(OutputType::NAMES)
                .default_value("default")
                .help("Output type"),
        )
        .arg(
            Arg::new("exclude-ext")
                .long("exclude-ext")
                .value_delimiter(',')
                .action(ArgAction::Append)
                .help("Exclude file name extensions (comma-separated)"),
        )
        .arg(
            Arg::new("include-lang")
                .long("include-lang")
                .value_delimiter(',')
                .action(ArgAction::Append)
                .help("Include only these language names (comma-separated)"),
        )
        .arg(
            Arg::new("match")
                .long("match")
                .help("Include file names matching regex"),
        )
        .arg(
            Arg::new("not-match")
                .long("not-match")
                .help("Exclude file names matching regex"),
        )
        .arg(
            Arg::new("match-d")
                .long("match-d")
                .help("Include directories matching regex"),
        )
        .arg(
            Arg::new("not-match-d")
                .long("not-match-d")
                .help("Exclude directories matching regex"),
        )
        .arg(
            Arg::new("include")
                .short('i')
                .long("include")
                .action(ArgAction::Append)
                .help("Include files matching glob pattern"),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .action(ArgAction::Append)
                .help("Exclude files matching glob pattern"),
        )
        .arg(
            Arg::new("no-dedup")
                .long("no-dedup")
                .action(ArgAction::SetTrue)
                .help("Count files with identical content more than once"),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .action(ArgAction::SetTrue)
                .help("Print how every line was classified (to stderr)"),
        )
        .arg(
            Arg::new("show-lang")
                .long("show-lang")
                .action(ArgAction::SetTrue)
                .help("Print all languages and their extensions"),
        )
        .arg(
            Arg::new("jobs")
                .short('j')
                .long("jobs")
                .value_parser(clap::value_parser!(usize))
                .help("Number of worker threads"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Increase log verbosity (-v info, -vv debug, -vvv trace)"),
        )
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Prints one trace line per classified line.
struct DebugPrinter;

impl LineObserver for DebugPrinter {
    fn on_line(&self, event: &LineEvent<'_>) {
        eprintln!(
            "[{},cd:{},cm:{},bk:{},block:{:?}] {}",
            event.kind.tag(),
            event.counts.code,
            event.counts.comment,
            event.counts.blank,
            event.state,
            event.line
        );
    }
}

/// Build filter config from matches
fn build_filter(matches: &ArgMatches) -> anyhow::Result<FilterConfig> {
    let mut filter = FilterConfig::new();

    if let Some(includes) = matches.get_many::<String>("include") {
        for pattern in includes {
            filter = filter.include(pattern)?;
        }
    }
    if let Some(excludes) = matches.get_many::<String>("exclude") {
        for pattern in excludes {
            filter = filter.exclude(pattern)?;
        }
    }
    if let Some(pattern) = matches.get_one::<String>("match") {
        filter = filter.match_file(pattern)?;
    }
    if let Some(pattern) = matches.get_one::<String>("not-match") {
        filter = filter.not_match_file(pattern)?;
    }
    if let Some(pattern) = matches.get_one::<String>("match-d") {
        filter = filter.match_dir(pattern)?;
    }
    if let Some(pattern) = matches.get_one::<String>("not-match-d") {
        filter = filter.not_match_dir(pattern)?;
    }
    if let Some(exts) = matches.get_many::<String>("exclude-ext") {
        filter = filter.exclude_ext(exts);
    }
    if let Some(langs) = matches.get_many::<String>("include-lang") {
        filter = filter.include_lang(langs);
    }

    Ok(filter)
}

/// Handler for the count run
fn count_handler(matches: &ArgMatches, registry: &LanguageRegistry) -> anyhow::Result<String> {
    let paths: Vec<&String> = matches
        .get_many::<String>("paths")
        .map(|v| v.collect())
        .unwrap_or_default();

    let filter = build_filter(matches)?;
    let mut options = CountOptions::new()
        .filter(filter)
        .skip_duplicates(!matches.get_flag("no-dedup"));

    if matches.get_flag("debug") {
        // One worker keeps each file's lines together.
        options = options.observer(DebugPrinter).jobs(1);
    } else if let Some(&jobs) = matches.get_one::<usize>("jobs") {
        options = options.jobs(jobs);
    }

    let result = count_paths(&paths, registry, options)?;

    let sort: SortBy = matches
        .get_one::<String>("sort")
        .map(|s| s.parse::<SortBy>())
        .transpose()
        .map_err(anyhow::Error::msg)?
        .unwrap_or_default();
    let output = matches
        .get_one::<String>("output-type")
        .and_then(|name| OutputType::from_name(name))
        .unwrap_or(OutputType::Default);

    let rendered = render::render(
        &result,
        RenderOptions {
            output,
            by_file: matches.get_flag("by-file"),
            sort,
        },
    )
    .context("failed to serialize report")?;

    Ok(rendered)
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    init_tracing(matches.get_count("verbose"));

    let registry = LanguageRegistry::builtin();

    if matches.get_flag("show-lang") {
        print!("{}", render::languages_list(&registry));
        return ExitCode::SUCCESS;
    }

    match count_handler(&matches, &registry) {
        Ok(output) => {
            print!("{output}");
            if !output.ends_with('\n') {
                println!();
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
