use std::sync::LazyLock;

use crate::languages::{LanguageConfig, pattern};

pub(crate) const EXTENSIONS: &[&str] = &["java"];

pub(crate) static CONFIG: LazyLock<LanguageConfig> = LazyLock::new(|| LanguageConfig {
    name: "java",
    single_line_comment: "//",
    multi_line_comment: Some(("/*", "*/")),
    import: Some(pattern(r"^\s*import\s+[\w.*]+;")),
    variable_declaration: Some(pattern(
        r"^\s*(int|float|double|char|String|boolean|List<\w+>|Map<[\w,]+>)\s+\w+",
    )),
    function_definition: Some(pattern(
        r"^\s*(public|private|protected|static|final)?\s*[\w<>]+\s+\w+\s*\([^)]*\)\s*\{",
    )),
    class_definition: Some(pattern(
        r"^\s*(public\s+)?(abstract\s+)?(class|interface|enum)\s+\w+",
    )),
});

#[cfg(test)]
mod tests {
    use super::CONFIG;

    fn matches(regex: &Option<regex::Regex>, line: &str) -> bool {
        regex.as_ref().is_some_and(|regex| regex.is_match(line))
    }

    #[test]
    fn java_patterns() {
        assert!(matches(&CONFIG.import, "import java.util.List;"));
        assert!(matches(&CONFIG.variable_declaration, "int count = 0;"));
        assert!(matches(&CONFIG.function_definition, "public void increment() {"));
        assert!(matches(&CONFIG.class_definition, "public class Example {"));
        assert!(matches(&CONFIG.class_definition, "interface Shape {"));
        assert!(!matches(&CONFIG.import, "import java.util.List"));
    }
}
