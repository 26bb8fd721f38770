// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use app_controller::Controller;

mod alignment;
mod app_config;
mod app_controller;
mod edl_processor;
mod errors;
mod file_utils;
mod subtitle_processor;

/// CLI Wrapper for AlignmentMode to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliAlignmentMode {
    Strict,
    Minimal,
}

impl From<CliAlignmentMode> for app_config::AlignmentMode {
    fn from(cli_mode: CliAlignmentMode) -> Self {
        match cli_mode {
            CliAlignmentMode::Strict => app_config::AlignmentMode::Strict,
            CliAlignmentMode::Minimal => app_config::AlignmentMode::Minimal,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Realign subtitle timing to EDL cut points (default command)
    Align(AlignArgs),

    /// Generate shell completions for cutalign
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct AlignArgs {
    /// Edit decision list file
    #[arg(value_name = "EDL_PATH")]
    edl_path: PathBuf,

    /// Subtitle file or directory of subtitle files to align
    #[arg(value_name = "SRT_PATH")]
    input_path: PathBuf,

    /// Output file path (single-file input only; defaults to <name>.aligned.srt)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Frame rate of the EDL timecodes
    #[arg(short = 'r', long)]
    fps: Option<f64>,

    /// Alignment mode to use
    #[arg(short, long, value_enum)]
    mode: Option<CliAlignmentMode>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// cutalign - Subtitle realignment against EDL cut points
///
/// Realigns the timing of SRT subtitle files so that cue boundaries snap to
/// the scene cuts of an edit decision list.
#[derive(Parser, Debug)]
#[command(name = "cutalign")]
#[command(author = "cutalign contributors")]
#[command(version = "1.0.0")]
#[command(about = "Realign SRT subtitle timing to EDL cut points")]
#[command(long_about = "cutalign rebuilds the timing of an SRT subtitle track so that cue
boundaries land on the scene cuts of an edit decision list (EDL).

EXAMPLES:
    cutalign cuts.edl movie.srt                 # Strict alignment at 60 fps
    cutalign -r 23.976 cuts.edl movie.srt       # EDL timecodes at 23.976 fps
    cutalign -m minimal cuts.edl movie.srt      # Only move 1:1 matched cues
    cutalign -o fixed.srt cuts.edl movie.srt    # Explicit output path
    cutalign -f cuts.edl subs/                  # Realign a whole directory
    cutalign completions bash > cutalign.bash   # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config. If the config file doesn't exist, a
    default one will be created automatically.

MODES:
    strict  - every cue boundary snaps to its nearest cut point
    minimal - boundaries move only where a one-to-one cue-to-cut match
              exists; unmatched cues keep their original duration")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Edit decision list file
    #[arg(value_name = "EDL_PATH")]
    edl_path: Option<PathBuf>,

    /// Subtitle file or directory of subtitle files to align
    #[arg(value_name = "SRT_PATH")]
    input_path: Option<PathBuf>,

    /// Output file path (single-file input only; defaults to <name>.aligned.srt)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Frame rate of the EDL timecodes
    #[arg(short = 'r', long)]
    fps: Option<f64>,

    /// Alignment mode to use
    #[arg(short, long, value_enum)]
    mode: Option<CliAlignmentMode>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

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

    // @returns: ANSI color code for log level
    fn get_color_for_level(level: Level) -> &'static str {
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
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "cutalign", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Align(args)) => run_align(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let edl_path = cli
                .edl_path
                .ok_or_else(|| anyhow!("EDL_PATH is required when no subcommand is specified"))?;
            let input_path = cli
                .input_path
                .ok_or_else(|| anyhow!("SRT_PATH is required when no subcommand is specified"))?;

            let align_args = AlignArgs {
                edl_path,
                input_path,
                output: cli.output,
                fps: cli.fps,
                mode: cli.mode,
                force_overwrite: cli.force_overwrite,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_align(align_args).await
        }
    }
}

async fn run_align(options: AlignArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let mut config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;

        // Override config with CLI options if provided
        if let Some(fps) = options.fps {
            config.frame_rate = edl_processor::resolve_frame_rate(Some(fps));
        }

        if let Some(mode) = &options.mode {
            config.mode = mode.clone().into();
        }

        if let Some(log_level) = &options.log_level {
            config.log_level = log_level.clone().into();
        }

        config
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let mut config = Config::default();

        if let Some(fps) = options.fps {
            config.frame_rate = edl_processor::resolve_frame_rate(Some(fps));
        }

        if let Some(mode) = &options.mode {
            config.mode = mode.clone().into();
        }

        if let Some(log_level) = &options.log_level {
            config.log_level = log_level.clone().into();
        }

        // Save default config
        let config_json = serde_json::to_string_pretty(&Config::default())
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    // Create controller
    let controller = Controller::with_config(config)?;

    // Run the controller against a single file or a whole directory
    if options.input_path.is_file() {
        controller
            .run(
                options.edl_path,
                options.input_path,
                options.output,
                options.force_overwrite,
            )
            .await
    } else if options.input_path.is_dir() {
        if options.output.is_some() {
            return Err(anyhow!("--output can only be used with a single subtitle file"));
        }
        controller
            .run_folder(options.edl_path, options.input_path, options.force_overwrite)
            .await
    } else {
        Err(anyhow!("Input path does not exist: {:?}", options.input_path))
    }
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}
