//! Language recognition: comment syntax per language and the registry that
//! maps extensions, build-file names and shebang interpreters to it.

pub mod registry;
pub mod rule;
mod table;

pub use registry::LanguageRegistry;
pub use rule::{BlockComment, LanguageRule, LineComments};
