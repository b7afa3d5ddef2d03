mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;
use msgframe_frame::{FrameConfig, MAX_FRAME_SIZE};

use crate::cmd::Command;
use crate::logging::{LogFormat, LogLevel, LoggingConfig};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "msgframe", version, about = "Length-prefixed message frame tool")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(
        long,
        value_name = "LEVEL",
        env = "MSGFRAME_LOG_LEVEL",
        default_value = "warn",
        global = true
    )]
    log_level: LogLevel,

    /// Largest declared payload length accepted when decoding.
    #[arg(
        long,
        value_name = "BYTES",
        env = "MSGFRAME_MAX_FRAME_SIZE",
        default_value_t = MAX_FRAME_SIZE,
        global = true
    )]
    max_frame_size: usize,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    LoggingConfig {
        format: cli.log_format,
        level: cli.log_level,
    }
    .init();

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let config = FrameConfig::with_max_frame_size(cli.max_frame_size);
    let result = cmd::run(cli.command, format, &config);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}
