use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;

use crate::cache::FileCache;
use crate::code_counter::{LineCounts, count_lines};
use crate::io::{CodetallyError, read_source};
use crate::languages::{Language, language_for_path};
use crate::tally::add;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub language: Language,
    pub counts: LineCounts,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub files_processed: usize,
    pub successes: usize,
    pub failures: usize,
    pub counts: LineCounts,
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct Outcome {
    pub reports: Vec<FileReport>,
    pub failures: Vec<FileFailure>,
}

impl Totals {
    pub fn from_outcome(outcome: &Outcome) -> Self {
        let counts = outcome
            .reports
            .iter()
            .fold(LineCounts::default(), |acc, report| add(acc, report.counts));
        Totals {
            files_processed: outcome.reports.len() + outcome.failures.len(),
            successes: outcome.reports.len(),
            failures: outcome.failures.len(),
            counts,
        }
    }
}

/// Counts one file with an explicitly chosen language.
pub fn count_file(
    path: &Path,
    language: Language,
    cache: Option<&FileCache>,
) -> Result<FileReport, CodetallyError> {
    let config = language.config();
    config.validate()?;

    if let Some(counts) = cache.and_then(|cache| cache.get(path, language)) {
        tracing::debug!(path = %path.display(), "cache hit");
        return Ok(FileReport {
            path: path.to_path_buf(),
            language,
            counts,
        });
    }

    let source = read_source(path)?;
    let counts = count_lines(&source, config);

    if let Some(cache) = cache
        && let Err(err) = cache.set(path, language, &counts)
    {
        tracing::debug!(path = %path.display(), error = %err, "failed to write cache entry");
    }

    Ok(FileReport {
        path: path.to_path_buf(),
        language,
        counts,
    })
}

/// Counts every path in parallel, detecting each language from its extension.
///
/// Failures are collected per file and never abort the batch. Both lists
/// come back sorted by path.
pub fn count_paths<I>(paths: I, cache: Option<&FileCache>) -> Outcome
where
    I: IntoIterator<Item = PathBuf>,
{
    let paths: Vec<PathBuf> = paths.into_iter().collect();
    let results: Vec<Result<FileReport, FileFailure>> = paths
        .into_par_iter()
        .map(|path| {
            let language = language_for_path(&path);
            tracing::info!(
                path = %path.display(),
                language = language.map(Language::name).unwrap_or("unknown"),
                "processing file"
            );
            let result = match language {
                Some(language) => count_file(&path, language, cache),
                None => Err(CodetallyError::UnsupportedFile(path.clone())),
            };
            result.map_err(|err| {
                tracing::error!(path = %path.display(), error = %err, "failed to count file");
                FileFailure {
                    path,
                    message: err.to_string(),
                }
            })
        })
        .collect();

    let mut outcome = Outcome::default();
    for result in results {
        match result {
            Ok(report) => outcome.reports.push(report),
            Err(failure) => outcome.failures.push(failure),
        }
    }
    outcome.reports.sort_by(|a, b| a.path.cmp(&b.path));
    outcome.failures.sort_by(|a, b| a.path.cmp(&b.path));
    outcome
}
