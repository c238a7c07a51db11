use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::io::CodetallyError;

pub(crate) mod java;
pub(crate) mod javascript;
pub(crate) mod python;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    JavaScript,
    TypeScript,
    Python,
    Java,
}

pub const ALL_LANGUAGES: &[Language] = &[
    Language::JavaScript,
    Language::Python,
    Language::Java,
    Language::TypeScript,
];

/// Line patterns used to classify the lines of one language.
///
/// Only the single-line comment marker is mandatory. A missing pattern never
/// matches, so lines fall through to the next rule.
#[derive(Debug)]
pub struct LanguageConfig {
    pub name: &'static str,
    pub single_line_comment: &'static str,
    pub multi_line_comment: Option<(&'static str, &'static str)>,
    pub import: Option<Regex>,
    pub variable_declaration: Option<Regex>,
    pub function_definition: Option<Regex>,
    pub class_definition: Option<Regex>,
}

impl LanguageConfig {
    pub fn validate(&self) -> Result<(), CodetallyError> {
        if self.single_line_comment.trim().is_empty() {
            return Err(self.invalid("single-line comment marker is required"));
        }
        if let Some((start, end)) = self.multi_line_comment {
            if start.trim().is_empty() {
                return Err(self.invalid("multi-line comment start must not be empty"));
            }
            if end.trim().is_empty() {
                return Err(self.invalid("multi-line comment end must not be empty"));
            }
        }
        Ok(())
    }

    fn invalid(&self, reason: &str) -> CodetallyError {
        CodetallyError::InvalidConfig {
            language: self.name,
            reason: reason.to_string(),
        }
    }
}

impl Language {
    /// Short name accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Language::JavaScript => "js",
            Language::TypeScript => "ts",
            Language::Python => "py",
            Language::Java => "java",
        }
    }

    pub fn from_name(name: &str) -> Option<Language> {
        ALL_LANGUAGES
            .iter()
            .copied()
            .find(|language| language.name() == name)
    }

    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Language::JavaScript => javascript::EXTENSIONS,
            Language::TypeScript => javascript::TYPESCRIPT_EXTENSIONS,
            Language::Python => python::EXTENSIONS,
            Language::Java => java::EXTENSIONS,
        }
    }

    pub fn config(self) -> &'static LanguageConfig {
        match self {
            Language::JavaScript => &javascript::CONFIG,
            Language::TypeScript => &javascript::TYPESCRIPT_CONFIG,
            Language::Python => &python::CONFIG,
            Language::Java => &java::CONFIG,
        }
    }
}

/// Comma-separated list of the names accepted by [`Language::from_name`].
pub fn supported_names() -> String {
    ALL_LANGUAGES
        .iter()
        .map(|language| language.name())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn language_for_path(path: &Path) -> Option<Language> {
    let ext = path.extension().and_then(|ext| ext.to_str())?;
    ALL_LANGUAGES
        .iter()
        .copied()
        .find(|language| language.extensions().contains(&ext))
}

pub(crate) fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("built-in line pattern is valid")
}
