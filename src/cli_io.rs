use std::path::{Path, PathBuf};

use thiserror::Error;

use codetally::{CodetallyError, Language};

#[derive(Debug, Error)]
pub enum CliIoError {
    #[error("cannot determine current directory: {0}")]
    CurrentDir(#[source] std::io::Error),
    #[error("You must provide either a file or a directory to process.")]
    MissingInput,
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),
    #[error("Invalid or missing language option. Supported languages: {0}.")]
    MissingLanguage(String),
    #[error("No valid source files found in directory: {}", .0.display())]
    NoSourceFiles(PathBuf),
    #[error(transparent)]
    Count(#[from] CodetallyError),
    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Makes `path` absolute against the current directory.
pub fn resolve_path(path: &Path) -> Result<PathBuf, CliIoError> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(CliIoError::CurrentDir)?;
    Ok(cwd.join(path))
}

/// Picks the language for a single file, preferring the explicit option
/// over the file extension.
pub fn resolve_file(
    path: &Path,
    language: Option<&str>,
) -> Result<(PathBuf, Language), CliIoError> {
    let language = match language {
        Some(name) => parse_language(name)?,
        None => codetally::language_for_path(path)
            .ok_or_else(|| CliIoError::MissingLanguage(codetally::supported_names()))?,
    };

    let resolved = resolve_path(path)?;
    if !resolved.is_file() {
        return Err(CliIoError::FileNotFound(resolved));
    }
    Ok((resolved, language))
}

/// Collects the files to count below `root`, optionally narrowed to one
/// language.
pub fn gather_directory(
    root: &Path,
    extensions: &[String],
    language: Option<&str>,
) -> Result<Vec<PathBuf>, CliIoError> {
    let language = language.map(parse_language).transpose()?;
    if !root.is_dir() {
        return Err(CliIoError::DirectoryNotFound(root.to_path_buf()));
    }

    let mut paths = codetally::gather_paths(root, extensions);
    if let Some(language) = language {
        paths.retain(|path| codetally::language_for_path(path) == Some(language));
    }
    if paths.is_empty() {
        return Err(CliIoError::NoSourceFiles(root.to_path_buf()));
    }
    Ok(paths)
}

fn parse_language(name: &str) -> Result<Language, CliIoError> {
    Language::from_name(name).ok_or_else(|| {
        CliIoError::Count(CodetallyError::UnknownLanguage {
            name: name.to_string(),
            supported: codetally::supported_names(),
        })
    })
}
