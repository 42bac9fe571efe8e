//! mvc-observer CLI
//!
//! Edit a title, version and credits from the console and watch every
//! view re-render on each change.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use crossterm::tty::IsTty;

use mvc_observer::app::Application;
use mvc_observer::log;
use mvc_observer::output::Output;
use mvc_observer::types::{ColorMode, Config, OutputFormat};

#[derive(Parser)]
#[command(name = "mvc-observer")]
#[command(about = "Console Model-View-Controller with observer notifications")]
#[command(version)]
#[command(after_help = "COMMANDS (read from stdin):\n    t  edit title     v  edit version\n    c  edit credits   q  quit")]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    format: OutputFormatArg,

    /// When to use terminal colors
    #[arg(long, value_enum, default_value = "auto")]
    color: ColorModeArg,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ColorModeArg {
    Auto,
    Always,
    Never,
}

impl From<ColorModeArg> for ColorMode {
    fn from(arg: ColorModeArg) -> Self {
        match arg {
            ColorModeArg::Auto => ColorMode::Auto,
            ColorModeArg::Always => ColorMode::Always,
            ColorModeArg::Never => ColorMode::Never,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = Config {
        format: cli.format.into(),
        color: cli.color.into(),
    };

    log::init(cli.verbose, config.color.enabled(io::stderr().is_tty()));

    let output = Output::stdout(config.color);
    let mut app = Application::new(&config, io::stdin().lock(), output);

    match app.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
