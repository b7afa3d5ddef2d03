use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use msgframe_frame::FrameConfig;

use crate::exit::{io_error, CliError, CliResult, USAGE};
use crate::output::OutputFormat;

pub mod decode;
pub mod encode;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a frame from an id and payload.
    Encode(EncodeArgs),
    /// Decode a frame header and its payload.
    Decode(DecodeArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat, config: &FrameConfig) -> CliResult<i32> {
    match command {
        Command::Encode(args) => encode::run(args, format, config),
        Command::Decode(args) => decode::run(args, format, config),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Message id.
    #[arg(long)]
    pub id: u32,
    /// Declared payload length written to the header. Default: payload size.
    #[arg(long)]
    pub length: Option<u32>,
    /// Raw string payload.
    #[arg(long, conflicts_with_all = ["hex", "file"])]
    pub data: Option<String>,
    /// Hex-encoded payload.
    #[arg(long, conflicts_with_all = ["data", "file"])]
    pub hex: Option<String>,
    /// Read payload from file.
    #[arg(long, conflicts_with_all = ["data", "hex"])]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Hex-encoded frame. Reads raw bytes from stdin when neither --hex nor --file is given.
    #[arg(long, conflicts_with = "file")]
    pub hex: Option<String>,
    /// Read the frame from file.
    #[arg(long, conflicts_with = "hex")]
    pub file: Option<PathBuf>,
    /// Fail if fewer payload bytes than the declared length are present.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

pub(crate) fn parse_hex(input: &str) -> CliResult<Vec<u8>> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(&compact).map_err(|err| CliError::new(USAGE, format!("invalid hex input: {err}")))
}

pub(crate) fn read_file(path: &Path) -> CliResult<Vec<u8>> {
    std::fs::read(path)
        .map_err(|err| io_error(&format!("failed reading {}", path.display()), err))
}

pub(crate) fn read_stdin() -> CliResult<Vec<u8>> {
    let mut buf = Vec::new();
    std::io::stdin()
        .lock()
        .read_to_end(&mut buf)
        .map_err(|err| io_error("failed reading stdin", err))?;
    Ok(buf)
}
