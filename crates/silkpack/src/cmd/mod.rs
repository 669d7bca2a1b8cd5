use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::exit::CliResult;
use crate::output::OutputFormat;

#[cfg(feature = "silk")]
pub mod decode;
#[cfg(feature = "silk")]
pub mod encode;
pub mod pack;
pub mod probe;
pub mod unpack;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Inspect a SILK container without decoding it.
    Probe(ProbeArgs),
    /// Encode raw PCM into a SILK container.
    #[cfg(feature = "silk")]
    Encode(EncodeArgs),
    /// Decode a SILK container into raw PCM.
    #[cfg(feature = "silk")]
    Decode(DecodeArgs),
    /// Bundle SILK containers into a voice-pack JSON file.
    Pack(PackArgs),
    /// Extract entries from a voice-pack JSON file.
    Unpack(UnpackArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Probe(args) => probe::run(args, format),
        #[cfg(feature = "silk")]
        Command::Encode(args) => encode::run(args),
        #[cfg(feature = "silk")]
        Command::Decode(args) => decode::run(args),
        Command::Pack(args) => pack::run(args),
        Command::Unpack(args) => unpack::run(args),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct ProbeArgs {
    /// Container file to inspect.
    pub file: PathBuf,
    /// Sample rate used for the duration estimate.
    #[arg(long, default_value = "24000")]
    pub rate: u32,
}

#[cfg(feature = "silk")]
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Raw PCM input (16-bit LE mono).
    pub input: PathBuf,
    /// Container file to write.
    #[arg(long, short = 'o')]
    pub out: PathBuf,
    /// PCM sample rate.
    #[arg(long, default_value = "24000")]
    pub rate: u32,
}

#[cfg(feature = "silk")]
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Container file to read.
    pub input: PathBuf,
    /// Raw PCM output (16-bit LE mono).
    #[arg(long, short = 'o')]
    pub out: PathBuf,
    /// Output sample rate.
    #[arg(long, default_value = "24000")]
    pub rate: u32,
}

#[derive(Args, Debug)]
pub struct PackArgs {
    /// Entries as name=file pairs.
    #[arg(required = true, value_name = "NAME=FILE")]
    pub entries: Vec<String>,
    /// Voice-pack JSON file to write.
    #[arg(long, short = 'o')]
    pub out: PathBuf,
}

#[derive(Args, Debug)]
pub struct UnpackArgs {
    /// Voice-pack JSON file to read.
    pub pack: PathBuf,
    /// Extract only this entry.
    #[arg(long)]
    pub name: Option<String>,
    /// Directory to write extracted containers into.
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
