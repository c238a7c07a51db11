mod analysis;
mod cache;
mod code_counter;
mod io;
mod languages;
mod report;
pub mod tally;
pub mod timing;

pub use analysis::{FileFailure, FileReport, Outcome, Totals, count_file, count_paths};
pub use cache::FileCache;
pub use code_counter::{CodeCounter, LineCounts, count_lines};
pub use io::{CodetallyError, gather_paths, parse_extensions, read_source};
pub use languages::{ALL_LANGUAGES, Language, LanguageConfig, language_for_path, supported_names};
pub use report::{render_file_report, render_json, render_outcome};

/// Extensions scanned in directory mode when none are configured.
pub const DEFAULT_EXTENSIONS: &str = ".js,.py,.java,.ts";
