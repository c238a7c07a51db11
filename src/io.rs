use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodetallyError {
    #[error("failed to read file {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unsupported language or file extension: {}", .0.display())]
    UnsupportedFile(PathBuf),
    #[error("language config [{language}] validation error: {reason}")]
    InvalidConfig {
        language: &'static str,
        reason: String,
    },
    #[error("unknown language `{name}`, supported languages: {supported}")]
    UnknownLanguage { name: String, supported: String },
}

/// Reads a file as text, replacing invalid UTF-8 sequences.
pub fn read_source(path: &Path) -> Result<String, CodetallyError> {
    let bytes = std::fs::read(path).map_err(|source| CodetallyError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(match String::from_utf8(bytes) {
        Ok(contents) => contents,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    })
}

/// Walks `root` the way ripgrep does and keeps files whose extension, with
/// its leading dot, is listed in `extensions`.
pub fn gather_paths(root: &Path, extensions: &[String]) -> Vec<PathBuf> {
    let builder = WalkBuilder::new(root);

    let mut paths = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable entry");
                continue;
            }
        };
        if !entry
            .file_type()
            .map(|file_type| file_type.is_file())
            .unwrap_or(false)
        {
            continue;
        }
        let path = entry.path();
        if !has_listed_extension(path, extensions) {
            continue;
        }
        paths.push(path.to_path_buf());
    }

    paths.sort();
    paths
}

/// Splits a comma-separated extension list, adding missing leading dots.
pub fn parse_extensions(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|ext| !ext.is_empty())
        .map(|ext| {
            if ext.starts_with('.') {
                ext.to_string()
            } else {
                format!(".{ext}")
            }
        })
        .collect()
}

fn has_listed_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return false;
    };
    extensions
        .iter()
        .any(|listed| listed.strip_prefix('.') == Some(ext))
}
