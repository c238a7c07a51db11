use std::sync::LazyLock;

use crate::languages::{LanguageConfig, pattern};

pub(crate) const EXTENSIONS: &[&str] = &["js"];
pub(crate) const TYPESCRIPT_EXTENSIONS: &[&str] = &["ts"];

pub(crate) static CONFIG: LazyLock<LanguageConfig> = LazyLock::new(|| LanguageConfig {
    name: "js",
    single_line_comment: "//",
    multi_line_comment: Some(("/*", "*/")),
    import: Some(pattern(
        r#"^\s*(import|require)\s+['"\w{}*]+\s*from?\s*['"\w./\-]+"#,
    )),
    variable_declaration: Some(pattern(r"^\s*(let|const|var)\s+[\w\s{},=\[\]]+")),
    function_definition: Some(pattern(r"^\s*(async\s*)?(function\s+)?\w+\s*\([^)]*\)\s*\{")),
    class_definition: Some(pattern(r"^\s*(export\s+)?class\s+\w+")),
});

pub(crate) static TYPESCRIPT_CONFIG: LazyLock<LanguageConfig> = LazyLock::new(|| LanguageConfig {
    name: "ts",
    single_line_comment: "//",
    multi_line_comment: Some(("/*", "*/")),
    import: Some(pattern(r"^(import|require)\s+")),
    variable_declaration: Some(pattern(r"^(let|const|var|public|private|protected)\s+\w+")),
    function_definition: Some(pattern(
        r"^\s*(public|private|protected|static)?\s*(async\s*)?[\w]+\s*\([^)]*\)\s*(\{|=>)",
    )),
    class_definition: Some(pattern(r"^\s*(export\s+)?(abstract\s+)?class\s+\w+")),
});
