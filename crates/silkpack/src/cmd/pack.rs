use std::fs;

use tracing::info;

use silkpack::pack::VoicePack;

use crate::cmd::PackArgs;
use crate::exit::{io_error, pack_error, CliError, CliResult, SUCCESS, USAGE};

pub fn run(args: PackArgs) -> CliResult<i32> {
    let mut pack = VoicePack::new();

    for entry in &args.entries {
        let (name, path) = split_entry(entry)?;
        let container = fs::read(path)
            .map_err(|err| io_error(&format!("failed reading {path}"), err))?;
        pack.insert(name, &container)
            .map_err(|err| pack_error("pack failed", err))?;
    }

    let json = pack.to_json().map_err(|err| pack_error("pack failed", err))?;
    fs::write(&args.out, json)
        .map_err(|err| io_error(&format!("failed writing {}", args.out.display()), err))?;

    info!(entries = pack.len(), "wrote {}", args.out.display());
    Ok(SUCCESS)
}

fn split_entry(entry: &str) -> CliResult<(&str, &str)> {
    match entry.split_once('=') {
        Some((name, path)) if !name.is_empty() && !path.is_empty() => Ok((name, path)),
        _ => Err(CliError::new(
            USAGE,
            format!("expected NAME=FILE, got {entry:?}"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_entry_accepts_name_file_pairs() {
        assert_eq!(
            split_entry("greeting=voices/hi.silk").unwrap(),
            ("greeting", "voices/hi.silk")
        );
    }

    #[test]
    fn split_entry_keeps_later_equals_in_path() {
        assert_eq!(split_entry("a=b=c").unwrap(), ("a", "b=c"));
    }

    #[test]
    fn split_entry_rejects_malformed() {
        assert!(split_entry("no-separator").is_err());
        assert!(split_entry("=path").is_err());
        assert!(split_entry("name=").is_err());
    }
}
