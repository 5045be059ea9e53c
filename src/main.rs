// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{error, info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::file_utils::FileManager;
use crate::parsers::parse_subtitles;
use crate::timed_text::TimedText;

mod compress;
mod errors;
mod file_utils;
mod line_reader;
mod parsers;
mod timecode;
mod timed_text;

/// CLI wrapper for log levels to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LevelFilter {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LevelFilter::Error,
            CliLogLevel::Warn => LevelFilter::Warn,
            CliLogLevel::Info => LevelFilter::Info,
            CliLogLevel::Debug => LevelFilter::Debug,
            CliLogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Output representation for parsed entries
#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable listing
    Text,
    /// JSON array of entries
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for timedtext
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// timedtext - subtitle parsing and timeline compression
///
/// Reads ASS, SRT and WebVTT subtitle files, normalizes them into
/// timed-text entries and optionally merges overlapping entries into a
/// non-overlapping timeline.
#[derive(Parser, Debug)]
#[command(name = "timedtext")]
#[command(version = "1.0.0")]
#[command(about = "Subtitle parsing and timeline compression tool")]
#[command(long_about = "timedtext parses subtitle files (.ass, .srt, .vtt) into a common \
timed-text model and can compress overlapping entries into a non-overlapping timeline.

EXAMPLES:
    timedtext episode.srt                   # Print parsed entries
    timedtext -c episode.ass                # Merge overlapping entries
    timedtext -f json episode.vtt           # Emit entries as JSON
    timedtext --log-level debug /subs/      # Process a directory of subtitle files
    timedtext completions bash              # Generate bash completions")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Subtitle file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Merge overlapping entries into a non-overlapping timeline
    #[arg(short, long)]
    compress: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> ExitCode {
    // Initialize the logger once with info level by default; the CLI
    // flag may raise or lower it afterwards
    if CustomLogger::init(LevelFilter::Info).is_err() {
        eprintln!("Failed to initialize logger");
        return ExitCode::FAILURE;
    }

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "timedtext", &mut std::io::stdout());
        return ExitCode::SUCCESS;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(options: CommandLineOptions) -> Result<()> {
    if let Some(level) = options.log_level {
        log::set_max_level(level.into());
    }

    let input_path = options
        .input_path
        .ok_or_else(|| anyhow!("INPUT_PATH is required when no subcommand is specified"))?;

    if FileManager::dir_exists(&input_path) {
        process_directory(&input_path, options.compress, &options.format)
    } else if FileManager::file_exists(&input_path) {
        process_file(&input_path, options.compress, &options.format)
    } else {
        Err(anyhow!("Input path does not exist: {:?}", input_path))
    }
}

/// Parse a single subtitle file and print its entries to stdout
fn process_file(path: &Path, compress: bool, format: &OutputFormat) -> Result<()> {
    let entries = parse_subtitles(path, compress)
        .with_context(|| format!("Failed to parse subtitle file: {:?}", path))?;

    info!("{}: {} entries", path.display(), entries.len());
    print_entries(&entries, format)
}

/// Parse every subtitle file under a directory, reporting a summary.
/// Fails if any file fails, after attempting all of them.
fn process_directory(dir: &Path, compress: bool, format: &OutputFormat) -> Result<()> {
    let files = FileManager::find_subtitle_files(dir)?;
    if files.is_empty() {
        return Err(anyhow!("No subtitle files found under {:?}", dir));
    }

    let mut failures = 0_usize;
    for file in &files {
        match parse_subtitles(file, compress) {
            Ok(entries) => {
                info!("{}: {} entries", file.display(), entries.len());
                print_entries(&entries, format)?;
            }
            Err(e) => {
                error!("{}: {}", file.display(), e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        return Err(anyhow!(
            "{} of {} subtitle files failed to parse",
            failures,
            files.len()
        ));
    }
    Ok(())
}

fn print_entries(entries: &[TimedText], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            let mut stdout = std::io::stdout();
            for entry in entries {
                writeln!(stdout, "{}", entry)?;
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(entries)
                .context("Failed to serialize entries to JSON")?;
            println!("{}", json);
        }
    }
    Ok(())
}
