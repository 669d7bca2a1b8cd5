mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "silkpack", version, about = "SILK voice container CLI")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "info", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let result = cmd::run(cli.command, format);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_probe_subcommand() {
        let cli = Cli::try_parse_from(["silkpack", "probe", "voice.silk", "--rate", "16000"])
            .expect("probe args should parse");
        assert!(matches!(cli.command, Command::Probe(_)));
    }

    #[test]
    fn parses_pack_subcommand() {
        let cli = Cli::try_parse_from([
            "silkpack",
            "pack",
            "greeting=voice.silk",
            "farewell=bye.silk",
            "--out",
            "pack.json",
        ])
        .expect("pack args should parse");
        assert!(matches!(cli.command, Command::Pack(_)));
    }

    #[test]
    fn rejects_invalid_rate_value() {
        let err = Cli::try_parse_from(["silkpack", "probe", "voice.silk", "--rate", "fast"])
            .expect_err("non-numeric rate should fail");
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[cfg(feature = "silk")]
    #[test]
    fn parses_encode_subcommand() {
        let cli = Cli::try_parse_from([
            "silkpack",
            "encode",
            "input.pcm",
            "--out",
            "voice.silk",
            "--rate",
            "24000",
        ])
        .expect("encode args should parse");
        assert!(matches!(cli.command, Command::Encode(_)));
    }
}
