use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::languages::LanguageConfig;
use crate::tally::Counter;

/// Per-category line counts of one file, or the sum over several files.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCounts {
    pub blank_lines: usize,
    pub comment_lines: usize,
    pub code_lines: usize,
    pub total_lines: usize,
    pub import_lines: usize,
    pub variable_declarations: usize,
    pub function_definitions: usize,
    pub class_definitions: usize,
}

impl Add for LineCounts {
    type Output = LineCounts;

    fn add(self, other: LineCounts) -> LineCounts {
        LineCounts {
            blank_lines: self.blank_lines + other.blank_lines,
            comment_lines: self.comment_lines + other.comment_lines,
            code_lines: self.code_lines + other.code_lines,
            total_lines: self.total_lines + other.total_lines,
            import_lines: self.import_lines + other.import_lines,
            variable_declarations: self.variable_declarations + other.variable_declarations,
            function_definitions: self.function_definitions + other.function_definitions,
            class_definitions: self.class_definitions + other.class_definitions,
        }
    }
}

/// Classifies lines one at a time, keeping the multi-line comment state
/// between calls.
pub struct CodeCounter<'a> {
    config: &'a LanguageConfig,
    inside_multi_line_comment: bool,
    blank: Counter,
    comment: Counter,
    code: Counter,
    total: Counter,
    import: Counter,
    variable: Counter,
    function: Counter,
    class: Counter,
}

impl<'a> CodeCounter<'a> {
    pub fn new(config: &'a LanguageConfig) -> Self {
        Self {
            config,
            inside_multi_line_comment: false,
            blank: Counter::new(),
            comment: Counter::new(),
            code: Counter::new(),
            total: Counter::new(),
            import: Counter::new(),
            variable: Counter::new(),
            function: Counter::new(),
            class: Counter::new(),
        }
    }

    /// Lines are split with [`str::lines`]: a trailing newline ends the last
    /// line rather than adding an empty one, and `\r\n` endings are accepted.
    pub fn count_source(&mut self, source: &str) {
        for line in source.lines() {
            self.count_line(line);
        }
    }

    pub fn count_line(&mut self, line: &str) {
        self.total.increment();
        let trimmed = line.trim();
        let config = self.config;
        let (block_start, block_end) = match config.multi_line_comment {
            Some((start, end)) => (Some(start), Some(end)),
            None => (None, None),
        };

        if trimmed.is_empty() {
            self.blank.increment();
        } else if let Some(start) = block_start
            && trimmed.starts_with(start)
        {
            self.comment.increment();
            // A comment opened and closed on the same line leaves no state.
            self.inside_multi_line_comment = !block_end.is_some_and(|end| trimmed.ends_with(end));
        } else if self.inside_multi_line_comment
            && block_end.is_some_and(|end| trimmed.ends_with(end))
        {
            self.comment.increment();
            self.inside_multi_line_comment = false;
        } else if self.inside_multi_line_comment {
            self.comment.increment();
        } else if trimmed.starts_with(config.single_line_comment) {
            self.comment.increment();
        } else if is_match(&config.import, trimmed) {
            self.import.increment();
        } else if is_match(&config.variable_declaration, trimmed) {
            self.variable.increment();
        } else if is_match(&config.function_definition, trimmed) {
            self.function.increment();
        } else if is_match(&config.class_definition, trimmed) {
            self.class.increment();
        } else {
            self.code.increment();
        }
    }

    pub fn counts(&self) -> LineCounts {
        LineCounts {
            blank_lines: self.blank.value(),
            comment_lines: self.comment.value(),
            code_lines: self.code.value(),
            total_lines: self.total.value(),
            import_lines: self.import.value(),
            variable_declarations: self.variable.value(),
            function_definitions: self.function.value(),
            class_definitions: self.class.value(),
        }
    }
}

/// Counts every line of `source` with a fresh counter.
pub fn count_lines(source: &str, config: &LanguageConfig) -> LineCounts {
    let mut counter = CodeCounter::new(config);
    counter.count_source(source);
    counter.counts()
}

fn is_match(pattern: &Option<regex::Regex>, line: &str) -> bool {
    pattern.as_ref().is_some_and(|pattern| pattern.is_match(line))
}

#[cfg(test)]
mod tests {
    use super::{CodeCounter, LineCounts, count_lines};
    use crate::languages::Language;
    use crate::tally::add;

    fn js(lines: &[&str]) -> LineCounts {
        count_lines(&lines.join("\n"), Language::JavaScript.config())
    }

    #[test]
    fn counts_multi_line_comment_closed_on_next_line() {
        let counts = js(&[
            "/* this is a multi-line comment",
            "   it continues here */",
            "console.log(x);",
        ]);
        assert_eq!(counts.comment_lines, 2);
        assert_eq!(counts.code_lines, 1);
        assert_eq!(counts.total_lines, 3);
    }

    #[test]
    fn counts_file_made_only_of_comments() {
        let counts = js(&[
            "/* this is a multi-line comment",
            "   it spans multiple lines */",
        ]);
        assert_eq!(
            counts,
            LineCounts {
                comment_lines: 2,
                total_lines: 2,
                ..LineCounts::default()
            }
        );
    }

    #[test]
    fn counts_multi_line_comment_closed_on_its_own_line() {
        let counts = js(&[
            "/* this is a multi-line comment",
            "   it continues here",
            "*/",
            "const x = 10;",
        ]);
        assert_eq!(counts.comment_lines, 3);
        assert_eq!(counts.variable_declarations, 1);
        assert_eq!(counts.total_lines, 4);
    }

    #[test]
    fn nested_comment_start_is_closed_by_first_end() {
        let counts = js(&[
            "/* start",
            "   /* nested comment",
            "   end */",
            "const y = 20;",
            "y();",
        ]);
        assert_eq!(counts.comment_lines, 3);
        assert_eq!(counts.variable_declarations, 1);
        assert_eq!(counts.code_lines, 1);
    }

    #[test]
    fn single_line_block_comment_does_not_swallow_following_lines() {
        let counts = js(&["/* inline */", "y();"]);
        assert_eq!(counts.comment_lines, 1);
        assert_eq!(counts.code_lines, 1);
    }

    #[test]
    fn classifies_every_category() {
        let counts = js(&[
            "// comment",
            "import React from 'react';",
            "const x = 10;",
            "",
            "function add(a, b) {",
            "class Widget {",
            "    return a + b;",
        ]);
        assert_eq!(
            counts,
            LineCounts {
                blank_lines: 1,
                comment_lines: 1,
                code_lines: 1,
                total_lines: 7,
                import_lines: 1,
                variable_declarations: 1,
                function_definitions: 1,
                class_definitions: 1,
            }
        );
    }

    #[test]
    fn python_hash_comments_and_docstrings() {
        let source = "# comment\n\"\"\"\ndocstring\n\"\"\"\nvalue = 1\n";
        let counts = count_lines(source, Language::Python.config());
        assert_eq!(counts.comment_lines, 1);
        assert_eq!(counts.code_lines, 3);
        assert_eq!(counts.variable_declarations, 1);
        assert_eq!(counts.total_lines, 5);
    }

    #[test]
    fn trailing_newline_does_not_add_a_line_and_crlf_is_trimmed() {
        let counts = count_lines("x = 1\r\n\r\ny = 2\r\n", Language::Python.config());
        assert_eq!(counts.total_lines, 3);
        assert_eq!(counts.blank_lines, 1);
        assert_eq!(counts.variable_declarations, 2);
    }

    #[test]
    fn empty_source_has_no_lines() {
        assert_eq!(
            count_lines("", Language::Java.config()),
            LineCounts::default()
        );
    }

    #[test]
    fn counter_keeps_state_across_calls() {
        let mut counter = CodeCounter::new(Language::Java.config());
        counter.count_line("/*");
        counter.count_line("int x = 1;");
        counter.count_line("*/");
        counter.count_line("int y = 2;");
        let counts = counter.counts();
        assert_eq!(counts.comment_lines, 3);
        assert_eq!(counts.variable_declarations, 1);
    }

    #[test]
    fn line_counts_sum_field_wise() {
        let a = js(&["// a", "x();"]);
        let b = js(&["", "let y = 1;"]);
        let sum = add(a, b);
        assert_eq!(sum.comment_lines, 1);
        assert_eq!(sum.code_lines, 1);
        assert_eq!(sum.blank_lines, 1);
        assert_eq!(sum.variable_declarations, 1);
        assert_eq!(sum.total_lines, 4);
    }
}
