use std::sync::LazyLock;

use crate::languages::{LanguageConfig, pattern};

pub(crate) const EXTENSIONS: &[&str] = &["py"];

// Python has no block comment syntax; docstrings count as code.
pub(crate) static CONFIG: LazyLock<LanguageConfig> = LazyLock::new(|| LanguageConfig {
    name: "py",
    single_line_comment: "#",
    multi_line_comment: None,
    import: Some(pattern(r"^\s*(import|from)\s+[\w.]+\s*(import\s+\w+)?")),
    variable_declaration: Some(pattern(r"^\s*\w+\s*=\s*.+")),
    function_definition: Some(pattern(r"^\s*def\s+\w+\s*\([^)]*\)\s*:")),
    class_definition: Some(pattern(r"^\s*class\s+\w+\s*\(?.*\)?:")),
});
