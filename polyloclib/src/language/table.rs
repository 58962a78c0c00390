//! Built-in language data: comment syntax, extensions, special file names
//! and shebang interpreters.
//!
//! Extension keys are lowercase. Language names double as keys when the
//! content detector resolves an ambiguous extension.

/// Static description of a language, turned into a `LanguageRule` at
/// registry construction.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LanguageDef {
    pub name: &'static str,
    pub line: &'static [&'static str],
    pub block: &'static [(&'static str, &'static str)],
    /// Regex line comments; when non-empty they replace `line`.
    pub patterns: &'static [&'static str],
}

const fn lang(
    name: &'static str,
    line: &'static [&'static str],
    block: &'static [(&'static str, &'static str)],
) -> LanguageDef {
    LanguageDef {
        name,
        line,
        block,
        patterns: &[],
    }
}

const NONE: &[(&str, &str)] = &[];
const C_BLOCK: &[(&str, &str)] = &[("/*", "*/")];
const ML_BLOCK: &[(&str, &str)] = &[("(*", "*)")];
const HS_BLOCK: &[(&str, &str)] = &[("{-", "-}")];
const XML_BLOCK: &[(&str, &str)] = &[("<!--", "-->")];
const LUA_BLOCK: &[(&str, &str)] = &[("--[[", "]]")];
const LISP_BLOCK: &[(&str, &str)] = &[("#|", "|#")];
const PY_BLOCK: &[(&str, &str)] = &[("\"\"\"", "\"\"\"")];

const SLASH: &[&str] = &["//"];
const HASH: &[&str] = &["#"];
const DASH: &[&str] = &["--"];
const SEMI: &[&str] = &[";"];
const PERCENT: &[&str] = &["%"];
const XML_LINE: &[&str] = &["<!--"];
const NO_LINE: &[&str] = &[];

pub(crate) const LANGUAGES: &[LanguageDef] = &[
    lang("ABAP", &["*", "\""], NONE),
    lang("ActionScript", SLASH, C_BLOCK),
    lang("Ada", DASH, NONE),
    lang("Agda", DASH, HS_BLOCK),
    lang("ANTLR", SLASH, C_BLOCK),
    lang("Ant", XML_LINE, XML_BLOCK),
    lang("APL", &["⍝"], NONE),
    lang("AppleScript", DASH, ML_BLOCK),
    lang("Arduino Sketch", SLASH, C_BLOCK),
    lang("AsciiDoc", NO_LINE, NONE),
    lang("Assembly", &["//", ";", "#", "@", "|", "!"], C_BLOCK),
    lang("ATS", SLASH, &[("(*", "*)"), ("/*", "*/")]),
    lang("AutoHotkey", SEMI, C_BLOCK),
    lang("Awk", HASH, NONE),
    lang("Ballerina", SLASH, NONE),
    lang("BASH", HASH, NONE),
    lang("Batch", &["REM", "rem"], NONE),
    lang("Bicep", SLASH, C_BLOCK),
    lang("BitBake", HASH, NONE),
    lang("Bourne Shell", HASH, NONE),
    lang("BQN", HASH, NONE),
    lang("Brainfuck", NO_LINE, NONE),
    lang("C", SLASH, C_BLOCK),
    lang("C Header", SLASH, C_BLOCK),
    lang("C Shell", HASH, NONE),
    lang("C#", SLASH, C_BLOCK),
    lang("C++", SLASH, C_BLOCK),
    lang("C++ Header", SLASH, C_BLOCK),
    lang("Cairo", SLASH, NONE),
    lang("Cap'n Proto", HASH, NONE),
    lang("Carp", SEMI, NONE),
    lang("Chapel", SLASH, C_BLOCK),
    lang("Clojure", &[";", "#_"], NONE),
    lang("CMake", HASH, &[("#[[", "]]")]),
    lang("COBOL", &["*", "/"], NONE),
    lang("CoffeeScript", HASH, &[("###", "###")]),
    lang("ColdFusion", NO_LINE, &[("<!---", "--->")]),
    lang("ColdFusion CFScript", SLASH, C_BLOCK),
    lang("Coq", NO_LINE, ML_BLOCK),
    lang("Crystal", HASH, NONE),
    lang("CSS", NO_LINE, C_BLOCK),
    lang("CUDA", SLASH, C_BLOCK),
    lang("CUE", SLASH, NONE),
    lang("Cython", HASH, PY_BLOCK),
    lang("D", SLASH, &[("/*", "*/"), ("/+", "+/")]),
    lang("Dart", SLASH, C_BLOCK),
    lang("Device Tree", SLASH, C_BLOCK),
    lang("Dhall", DASH, HS_BLOCK),
    lang("Dockerfile", HASH, NONE),
    lang("Eiffel", DASH, NONE),
    lang("Elixir", HASH, NONE),
    lang("Elm", DASH, HS_BLOCK),
    lang("Erlang", PERCENT, NONE),
    lang("Expect", HASH, NONE),
    lang("F#", SLASH, ML_BLOCK),
    lang("F*", &["(*", "//"], ML_BLOCK),
    lang("Fennel", SEMI, NONE),
    lang("Fish", HASH, NONE),
    lang("FORTRAN Legacy", &["c", "C", "!", "*"], NONE),
    lang("FORTRAN Modern", &["!"], NONE),
    lang("Frege", DASH, HS_BLOCK),
    lang("Futhark", DASH, NONE),
    lang("GDScript", HASH, NONE),
    lang("Gherkin", HASH, NONE),
    lang("Gleam", SLASH, NONE),
    lang("GLSL", SLASH, C_BLOCK),
    lang("Gnuplot", HASH, NONE),
    lang("Go", SLASH, C_BLOCK),
    lang("GraphQL", HASH, NONE),
    lang("Groovy", SLASH, C_BLOCK),
    lang("Handlebars", NO_LINE, &[("{{!--", "--}}"), ("{{!", "}}")]),
    lang("Hare", SLASH, NONE),
    lang("Haskell", DASH, HS_BLOCK),
    lang("Haxe", SLASH, C_BLOCK),
    lang("HCL", &["#", "//"], C_BLOCK),
    lang("HLSL", SLASH, C_BLOCK),
    lang("HTML", &["//", "<!--"], XML_BLOCK),
    lang("Hy", SEMI, NONE),
    lang("Idris", DASH, HS_BLOCK),
    lang("Imba", HASH, &[("###", "###")]),
    lang("INI", &[";", "#"], NONE),
    lang("Io", &["//", "#"], C_BLOCK),
    lang("Isabelle", NO_LINE, ML_BLOCK),
    lang("JAI", SLASH, C_BLOCK),
    lang("Janet", HASH, NONE),
    lang("Java", SLASH, C_BLOCK),
    lang("JavaScript", SLASH, C_BLOCK),
    lang("Jinja", NO_LINE, &[("{#", "#}")]),
    lang("JSON", NO_LINE, NONE),
    lang("Jsonnet", &["//", "#"], C_BLOCK),
    lang("JSX", SLASH, C_BLOCK),
    lang("Julia", HASH, &[("#=", "=#")]),
    lang("Jupyter Notebook", HASH, NONE),
    LanguageDef {
        name: "Just",
        line: HASH,
        block: NONE,
        patterns: &["#[^!].*"],
    },
    lang("KDL", SLASH, C_BLOCK),
    lang("Kotlin", SLASH, C_BLOCK),
    lang("LD Script", SLASH, C_BLOCK),
    lang("Lean", DASH, &[("/-", "-/")]),
    lang("LESS", SLASH, C_BLOCK),
    lang("lex", NO_LINE, C_BLOCK),
    lang("LISP", &[";;"], LISP_BLOCK),
    lang("LiveScript", HASH, C_BLOCK),
    lang("Logtalk", PERCENT, C_BLOCK),
    lang("Lua", DASH, LUA_BLOCK),
    lang("M4", HASH, NONE),
    lang("Makefile", HASH, NONE),
    lang("Markdown", NO_LINE, NONE),
    lang("MATLAB", PERCENT, &[("%{", "}%")]),
    lang("Maven", XML_LINE, XML_BLOCK),
    lang("Mercury", PERCENT, C_BLOCK),
    lang("Meson", HASH, NONE),
    lang("Mojo", HASH, PY_BLOCK),
    lang("Move", SLASH, C_BLOCK),
    lang("MSBuild script", XML_LINE, XML_BLOCK),
    lang("Mustache", NO_LINE, &[("{{!", "}}")]),
    lang("Nickel", HASH, NONE),
    lang("Nim", HASH, &[("#[", "]#")]),
    lang("Nix", HASH, C_BLOCK),
    lang("NSIS", &["#", ";"], C_BLOCK),
    lang("Nu", &[";", "#"], NONE),
    lang("Objective-C", SLASH, C_BLOCK),
    lang("Objective-C++", SLASH, C_BLOCK),
    lang("OCaml", NO_LINE, ML_BLOCK),
    lang("Odin", SLASH, C_BLOCK),
    lang("OpenSCAD", SLASH, C_BLOCK),
    lang("Pascal", SLASH, &[("{", "}"), ("(*", "*)")]),
    lang("Perl", HASH, &[("=pod", "=cut")]),
    lang("Pest", SLASH, NONE),
    lang("PHP", &["#", "//"], C_BLOCK),
    lang("Pkl", SLASH, C_BLOCK),
    lang("Plain Text", NO_LINE, NONE),
    lang("Plan9 Shell", HASH, NONE),
    lang("Polly", XML_LINE, XML_BLOCK),
    lang("Pony", SLASH, C_BLOCK),
    lang("PowerShell", HASH, &[("<#", "#>")]),
    lang("Prisma", SLASH, NONE),
    lang("Prolog", PERCENT, C_BLOCK),
    lang("Protocol Buffers", SLASH, C_BLOCK),
    lang("PRQL", HASH, NONE),
    lang("Puppet", HASH, C_BLOCK),
    lang("PureScript", DASH, HS_BLOCK),
    lang("Python", HASH, PY_BLOCK),
    lang("Q#", SLASH, NONE),
    lang("QML", SLASH, C_BLOCK),
    lang("R", HASH, NONE),
    lang("Racket", SEMI, LISP_BLOCK),
    lang("RAML", HASH, NONE),
    lang("ReasonML", SLASH, C_BLOCK),
    lang("Rebol", SEMI, NONE),
    lang("Red", SEMI, NONE),
    lang("ReScript", SLASH, C_BLOCK),
    lang("ReStructuredText", NO_LINE, NONE),
    lang("RMarkdown", NO_LINE, NONE),
    lang("Roc", HASH, NONE),
    lang("Ruby", HASH, &[("=begin", "=end")]),
    lang("Ruby HTML", XML_LINE, XML_BLOCK),
    lang("Rust", &["//", "///", "//!"], C_BLOCK),
    lang("Sass", SLASH, C_BLOCK),
    lang("Scala", SLASH, C_BLOCK),
    lang("Scheme", SEMI, LISP_BLOCK),
    lang("sed", HASH, NONE),
    lang("SKILL", SEMI, C_BLOCK),
    lang("Slint", SLASH, C_BLOCK),
    lang("Smarty", NO_LINE, &[("{*", "*}")]),
    lang("Solidity", SLASH, C_BLOCK),
    lang("SPARQL", HASH, NONE),
    lang("SQL", DASH, C_BLOCK),
    lang("Stan", SLASH, C_BLOCK),
    lang("Standard ML", NO_LINE, ML_BLOCK),
    lang("Starlark", HASH, NONE),
    lang("Stylus", SLASH, C_BLOCK),
    lang("Svelte", XML_LINE, XML_BLOCK),
    lang("SVG", XML_LINE, XML_BLOCK),
    lang("Swift", SLASH, C_BLOCK),
    lang("SystemVerilog", SLASH, C_BLOCK),
    lang("Tcl/Tk", HASH, NONE),
    lang("Terra", DASH, LUA_BLOCK),
    lang("TeX", PERCENT, NONE),
    lang("Thrift", &["//", "#"], C_BLOCK),
    lang("TLA", &["\\*"], ML_BLOCK),
    lang("TOML", HASH, NONE),
    lang("TSX", SLASH, C_BLOCK),
    lang("Twig", NO_LINE, &[("{#", "#}")]),
    lang("TypeScript", SLASH, C_BLOCK),
    lang("Typst", SLASH, C_BLOCK),
    lang("Unity-Prefab", NO_LINE, NONE),
    lang("Vala", SLASH, C_BLOCK),
    lang("VB.NET", &["'"], NONE),
    lang("VBScript", &["'", "REM", "rem"], NONE),
    lang("Verilog", SLASH, C_BLOCK),
    lang("VHDL", DASH, NONE),
    lang("VimL", &["\""], NONE),
    lang("Vue", XML_LINE, XML_BLOCK),
    lang("Vyper", HASH, NONE),
    lang("WebAssembly", &[";;"], &[("(;", ";)")]),
    lang("WGSL", SLASH, C_BLOCK),
    lang("WiX", XML_LINE, XML_BLOCK),
    lang("XAML", XML_LINE, XML_BLOCK),
    lang("XML", XML_LINE, XML_BLOCK),
    lang("XQuery", NO_LINE, &[("(:", ":)")]),
    lang("XSD", XML_LINE, XML_BLOCK),
    lang("XSLT", XML_LINE, XML_BLOCK),
    lang("YAML", HASH, NONE),
    lang("Yacc", SLASH, C_BLOCK),
    lang("Zephir", SLASH, C_BLOCK),
    lang("Zig", SLASH, NONE),
    lang("Zsh", HASH, NONE),
];

/// Extension (or special key) to language name.
pub(crate) const EXTENSIONS: &[(&str, &str)] = &[
    ("abap", "ABAP"),
    ("as", "ActionScript"),
    ("ada", "Ada"),
    ("adb", "Ada"),
    ("ads", "Ada"),
    ("agda", "Agda"),
    ("g4", "ANTLR"),
    ("ant", "Ant"),
    ("apl", "APL"),
    ("applescript", "AppleScript"),
    ("ino", "Arduino Sketch"),
    ("adoc", "AsciiDoc"),
    ("asciidoc", "AsciiDoc"),
    ("asm", "Assembly"),
    ("s", "Assembly"),
    ("ats", "ATS"),
    ("dats", "ATS"),
    ("sats", "ATS"),
    ("ahk", "AutoHotkey"),
    ("awk", "Awk"),
    ("bal", "Ballerina"),
    ("bash", "BASH"),
    ("bat", "Batch"),
    ("btm", "Batch"),
    ("cmd", "Batch"),
    ("bicep", "Bicep"),
    ("bb", "BitBake"),
    ("sh", "Bourne Shell"),
    ("bqn", "BQN"),
    ("bf", "Brainfuck"),
    ("c", "C"),
    ("ec", "C"),
    ("pgc", "C"),
    ("h", "C Header"),
    ("csh", "C Shell"),
    ("cs", "C#"),
    ("cc", "C++"),
    ("cpp", "C++"),
    ("cxx", "C++"),
    ("pcc", "C++"),
    ("c++", "C++"),
    ("hh", "C++ Header"),
    ("hpp", "C++ Header"),
    ("hxx", "C++ Header"),
    ("cairo", "Cairo"),
    ("capnp", "Cap'n Proto"),
    ("carp", "Carp"),
    ("chpl", "Chapel"),
    ("clj", "Clojure"),
    ("cljs", "Clojure"),
    ("cljc", "Clojure"),
    ("cmake", "CMake"),
    ("cbl", "COBOL"),
    ("cob", "COBOL"),
    ("coffee", "CoffeeScript"),
    ("cfm", "ColdFusion"),
    ("cfc", "ColdFusion CFScript"),
    ("cr", "Crystal"),
    ("css", "CSS"),
    ("cu", "CUDA"),
    ("cuh", "CUDA"),
    ("cue", "CUE"),
    ("pxd", "Cython"),
    ("pyx", "Cython"),
    ("d", "D"),
    ("dart", "Dart"),
    ("dts", "Device Tree"),
    ("dtsi", "Device Tree"),
    ("dhall", "Dhall"),
    ("docker", "Dockerfile"),
    ("dockerfile", "Dockerfile"),
    ("e", "Eiffel"),
    ("ex", "Elixir"),
    ("exs", "Elixir"),
    ("elm", "Elm"),
    ("erl", "Erlang"),
    ("hrl", "Erlang"),
    ("exp", "Expect"),
    ("fs", "F#"),
    ("fsi", "F#"),
    ("fsx", "F#"),
    ("fst", "F*"),
    ("fsti", "F*"),
    ("fnl", "Fennel"),
    ("fish", "Fish"),
    ("f", "FORTRAN Legacy"),
    ("f77", "FORTRAN Legacy"),
    ("for", "FORTRAN Legacy"),
    ("ftn", "FORTRAN Legacy"),
    ("pfo", "FORTRAN Legacy"),
    ("f90", "FORTRAN Modern"),
    ("f95", "FORTRAN Modern"),
    ("f03", "FORTRAN Modern"),
    ("f08", "FORTRAN Modern"),
    ("fr", "Frege"),
    ("fut", "Futhark"),
    ("gd", "GDScript"),
    ("feature", "Gherkin"),
    ("gleam", "Gleam"),
    ("glsl", "GLSL"),
    ("vert", "GLSL"),
    ("frag", "GLSL"),
    ("vs", "GLSL"),
    ("gp", "Gnuplot"),
    ("gnuplot", "Gnuplot"),
    ("go", "Go"),
    ("graphql", "GraphQL"),
    ("gql", "GraphQL"),
    ("groovy", "Groovy"),
    ("gradle", "Groovy"),
    ("hbs", "Handlebars"),
    ("handlebars", "Handlebars"),
    ("ha", "Hare"),
    ("hs", "Haskell"),
    ("hx", "Haxe"),
    ("hcl", "HCL"),
    ("tf", "HCL"),
    ("tfvars", "HCL"),
    ("hlsl", "HLSL"),
    ("shader", "HLSL"),
    ("cg", "HLSL"),
    ("cginc", "HLSL"),
    ("html", "HTML"),
    ("htm", "HTML"),
    ("hy", "Hy"),
    ("idr", "Idris"),
    ("imba", "Imba"),
    ("ini", "INI"),
    ("io", "Io"),
    ("thy", "Isabelle"),
    ("jai", "JAI"),
    ("janet", "Janet"),
    ("java", "Java"),
    ("js", "JavaScript"),
    ("mjs", "JavaScript"),
    ("cjs", "JavaScript"),
    ("jinja", "Jinja"),
    ("j2", "Jinja"),
    ("json", "JSON"),
    ("jsonnet", "Jsonnet"),
    ("libsonnet", "Jsonnet"),
    ("jsx", "JSX"),
    ("jl", "Julia"),
    ("ipynb", "Jupyter Notebook"),
    ("just", "Just"),
    ("kdl", "KDL"),
    ("kt", "Kotlin"),
    ("kts", "Kotlin"),
    ("lds", "LD Script"),
    ("lean", "Lean"),
    ("hlean", "Lean"),
    ("less", "LESS"),
    ("l", "lex"),
    ("lisp", "LISP"),
    ("lsp", "LISP"),
    ("el", "LISP"),
    ("sc", "LISP"),
    ("ls", "LiveScript"),
    ("lgt", "Logtalk"),
    ("lua", "Lua"),
    ("m4", "M4"),
    ("makefile", "Makefile"),
    ("mk", "Makefile"),
    ("mak", "Makefile"),
    ("md", "Markdown"),
    ("markdown", "Markdown"),
    ("maven", "Maven"),
    ("meson", "Meson"),
    ("mojo", "Mojo"),
    ("move", "Move"),
    ("csproj", "MSBuild script"),
    ("vcproj", "MSBuild script"),
    ("vbproj", "MSBuild script"),
    ("mustache", "Mustache"),
    ("ncl", "Nickel"),
    ("nim", "Nim"),
    ("nix", "Nix"),
    ("nsi", "NSIS"),
    ("nsh", "NSIS"),
    ("nu", "Nu"),
    ("m", "Objective-C"),
    ("mm", "Objective-C++"),
    ("ml", "OCaml"),
    ("mli", "OCaml"),
    ("mll", "OCaml"),
    ("mly", "OCaml"),
    ("odin", "Odin"),
    ("scad", "OpenSCAD"),
    ("pas", "Pascal"),
    ("pl", "Perl"),
    ("pm", "Perl"),
    ("pest", "Pest"),
    ("php", "PHP"),
    ("pkl", "Pkl"),
    ("text", "Plain Text"),
    ("txt", "Plain Text"),
    ("plan9sh", "Plan9 Shell"),
    ("polly", "Polly"),
    ("pony", "Pony"),
    ("ps1", "PowerShell"),
    ("psm1", "PowerShell"),
    ("psd1", "PowerShell"),
    ("prisma", "Prisma"),
    ("pro", "Prolog"),
    ("prolog", "Prolog"),
    ("proto", "Protocol Buffers"),
    ("prql", "PRQL"),
    ("pp", "Puppet"),
    ("purs", "PureScript"),
    ("py", "Python"),
    ("pyw", "Python"),
    ("pyi", "Python"),
    ("qs", "Q#"),
    ("qml", "QML"),
    ("r", "R"),
    ("rkt", "Racket"),
    ("raml", "RAML"),
    ("re", "ReasonML"),
    ("rei", "ReasonML"),
    ("red", "Red"),
    ("res", "ReScript"),
    ("resi", "ReScript"),
    ("rst", "ReStructuredText"),
    ("rmd", "RMarkdown"),
    ("roc", "Roc"),
    ("rb", "Ruby"),
    ("rake", "Ruby"),
    ("rhtml", "Ruby HTML"),
    ("rs", "Rust"),
    ("sass", "Sass"),
    ("scss", "Sass"),
    ("scala", "Scala"),
    ("scm", "Scheme"),
    ("ss", "Scheme"),
    ("sed", "sed"),
    ("il", "SKILL"),
    ("slint", "Slint"),
    ("tpl", "Smarty"),
    ("sol", "Solidity"),
    ("rq", "SPARQL"),
    ("sparql", "SPARQL"),
    ("sql", "SQL"),
    ("stan", "Stan"),
    ("sml", "Standard ML"),
    ("bzl", "Starlark"),
    ("star", "Starlark"),
    ("styl", "Stylus"),
    ("svelte", "Svelte"),
    ("svg", "SVG"),
    ("swift", "Swift"),
    ("sv", "SystemVerilog"),
    ("svh", "SystemVerilog"),
    ("tcl", "Tcl/Tk"),
    ("t", "Terra"),
    ("tex", "TeX"),
    ("sty", "TeX"),
    ("thrift", "Thrift"),
    ("tla", "TLA"),
    ("toml", "TOML"),
    ("tsx", "TSX"),
    ("twig", "Twig"),
    ("ts", "TypeScript"),
    ("mts", "TypeScript"),
    ("cts", "TypeScript"),
    ("typ", "Typst"),
    ("mat", "Unity-Prefab"),
    ("prefab", "Unity-Prefab"),
    ("vala", "Vala"),
    ("vb", "VB.NET"),
    ("vbs", "VBScript"),
    ("v", "Verilog"),
    ("vhd", "VHDL"),
    ("vhdl", "VHDL"),
    ("vim", "VimL"),
    ("vue", "Vue"),
    ("vy", "Vyper"),
    ("wat", "WebAssembly"),
    ("wast", "WebAssembly"),
    ("wgsl", "WGSL"),
    ("wxs", "WiX"),
    ("xaml", "XAML"),
    ("xml", "XML"),
    ("xq", "XQuery"),
    ("xquery", "XQuery"),
    ("xsd", "XSD"),
    ("xsl", "XSLT"),
    ("xslt", "XSLT"),
    ("yaml", "YAML"),
    ("yml", "YAML"),
    ("y", "Yacc"),
    ("zep", "Zephir"),
    ("zig", "Zig"),
    ("zsh", "Zsh"),
];

/// Extensions shared by unrelated languages, with the candidates the
/// content detector chooses between (in priority order).
pub(crate) const AMBIGUOUS_EXTENSIONS: &[(&str, &[&str])] = &[
    ("m", &["Objective-C", "Mercury", "MATLAB"]),
    ("v", &["Coq", "Verilog"]),
    ("fs", &["GLSL", "F#"]),
    ("r", &["Rebol", "R"]),
];

/// Exact (case-sensitive) build-file names. Checked before the extension.
pub(crate) const BUILD_FILES: &[(&str, &str)] = &[
    ("CMakeLists.txt", "cmake"),
    ("Makefile.am", "makefile"),
    ("meson.build", "meson"),
    ("meson_options.txt", "meson"),
    ("configure.ac", "m4"),
    ("build.xml", "ant"),
    ("pom.xml", "maven"),
];

/// Conventional file names compared case-insensitively. `None` marks a
/// name that must never be counted.
pub(crate) const CONVENTIONAL_NAMES: &[(&str, Option<&str>)] = &[
    ("makefile", Some("makefile")),
    ("gnumakefile", Some("makefile")),
    ("nukefile", Some("nu")),
    ("justfile", Some("just")),
    ("dockerfile", Some("docker")),
    ("rebar", None),
];

/// Shebang interpreter to extension key. Interpreters missing here are
/// tried as keys directly (`bash`, `zsh`, `lua`, ...).
pub(crate) const SHEBANG_INTERPRETERS: &[(&str, &str)] = &[
    ("crystal", "cr"),
    ("dash", "sh"),
    ("deno", "ts"),
    ("elixir", "ex"),
    ("escript", "erl"),
    ("gosh", "scm"),
    ("guile", "scm"),
    ("julia", "jl"),
    ("ksh", "sh"),
    ("make", "makefile"),
    ("node", "js"),
    ("nodejs", "js"),
    ("ocaml", "ml"),
    ("perl", "pl"),
    ("pwsh", "ps1"),
    ("python", "py"),
    ("racket", "rkt"),
    ("rc", "plan9sh"),
    ("Rscript", "r"),
    ("ruby", "rb"),
    ("runghc", "hs"),
    ("runhaskell", "hs"),
    ("sbcl", "lisp"),
    ("tclsh", "tcl"),
    ("tcsh", "csh"),
    ("wish", "tcl"),
];
