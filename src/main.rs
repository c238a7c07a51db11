use std::fs::{File, OpenOptions};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;

use clap::builder::BoolishValueParser;
use clap::{ArgGroup, Parser};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use codetally::{FileCache, Outcome, Totals};

mod cli_io;

use cli_io::CliIoError;

#[derive(Parser, Debug)]
#[command(
    name = "codetally",
    version,
    about = "Counts lines of code, comments, and blank lines in a file or directory"
)]
#[command(group(ArgGroup::new("input").required(true).args(["file", "directory"])))]
struct Cli {
    /// Path to the source file
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    file: Option<PathBuf>,

    /// Path to the directory
    #[arg(short = 'd', long = "directory", value_name = "PATH")]
    directory: Option<PathBuf>,

    /// Language of the source file (js, py, java, ts); filters files in directory mode
    #[arg(short = 'l', long = "language", value_name = "LANG")]
    language: Option<String>,

    /// Comma-separated extensions scanned in directory mode
    #[arg(
        short = 'e',
        long = "extensions",
        env = "FILE_EXTENSIONS",
        default_value = codetally::DEFAULT_EXTENSIONS
    )]
    extensions: String,

    /// Print the results as JSON
    #[arg(long)]
    json: bool,

    /// Reuse counts cached for unchanged files
    #[arg(long, env = "CODETALLY_CACHE", value_parser = BoolishValueParser::new())]
    cache: bool,

    /// Print timings to stderr
    #[arg(long, env = "CODETALLY_TIMING", value_parser = BoolishValueParser::new())]
    timing: bool,
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_logging();

    let cli = Cli::parse();
    if cli.timing {
        codetally::timing::enable();
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("CODETALLY_LOG")
        .or_else(|_| EnvFilter::try_from_env("LOG_LEVEL"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let json = std::env::var("CODETALLY_LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let mut file_error = None;
    let log_file = std::env::var_os("CODETALLY_LOG_FILE").map(PathBuf::from);
    let (writer, ansi) = match log_file.as_deref().map(open_log_file) {
        Some(Ok(file)) => (BoxMakeWriter::new(Mutex::new(file)), false),
        other => {
            file_error = other.and_then(Result::err);
            (
                BoxMakeWriter::new(std::io::stderr),
                std::io::stderr().is_terminal(),
            )
        }
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer);
    if json {
        builder.json().init();
    } else {
        builder.with_ansi(ansi).init();
    }

    if let Some(err) = file_error {
        tracing::warn!(error = %err, "cannot open log file, logging to stderr");
    }
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

fn run(cli: &Cli) -> Result<(), CliIoError> {
    match (&cli.file, &cli.directory) {
        (Some(file), _) => process_file(cli, file),
        (None, Some(directory)) => process_directory(cli, directory),
        (None, None) => Err(CliIoError::MissingInput),
    }
}

fn process_file(cli: &Cli, file: &Path) -> Result<(), CliIoError> {
    let (path, language) = cli_io::resolve_file(file, cli.language.as_deref())?;
    let cache = cli
        .cache
        .then(|| FileCache::new(path.parent().unwrap_or(path.as_path())));

    let label = format!("Counting lines in {}", path.display());
    let report = codetally::time_block!(
        &label,
        codetally::count_file(&path, language, cache.as_ref())
    )?;

    if cli.json {
        let outcome = Outcome {
            reports: vec![report],
            failures: Vec::new(),
        };
        let totals = Totals::from_outcome(&outcome);
        println!("{}", codetally::render_json(&outcome, &totals)?);
    } else {
        println!("{}", codetally::render_file_report(&report));
    }
    Ok(())
}

fn process_directory(cli: &Cli, directory: &Path) -> Result<(), CliIoError> {
    let root = cli_io::resolve_path(directory)?;
    let extensions = codetally::parse_extensions(&cli.extensions);
    let paths = cli_io::gather_directory(&root, &extensions, cli.language.as_deref())?;
    let cache = cli.cache.then(|| FileCache::new(&root));

    let label = format!("Counting lines in directory {}", root.display());
    let outcome = codetally::time_block_with_count!(
        &label,
        |outcome: &Outcome| outcome.reports.len() + outcome.failures.len(),
        codetally::count_paths(paths, cache.as_ref())
    );
    let totals = Totals::from_outcome(&outcome);

    if cli.json {
        println!("{}", codetally::render_json(&outcome, &totals)?);
    } else {
        print!("{}", codetally::render_outcome(&outcome, &totals));
    }
    Ok(())
}
