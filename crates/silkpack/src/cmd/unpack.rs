use std::fs;

use tracing::info;

use silkpack::pack::VoicePack;

use crate::cmd::UnpackArgs;
use crate::exit::{io_error, pack_error, CliResult, SUCCESS};

pub fn run(args: UnpackArgs) -> CliResult<i32> {
    let text = fs::read_to_string(&args.pack)
        .map_err(|err| io_error(&format!("failed reading {}", args.pack.display()), err))?;
    let pack =
        VoicePack::from_json(&text).map_err(|err| pack_error("unpack failed", err))?;

    fs::create_dir_all(&args.out_dir)
        .map_err(|err| io_error(&format!("failed creating {}", args.out_dir.display()), err))?;

    let selected: Vec<&str> = match &args.name {
        Some(name) => vec![name.as_str()],
        None => pack.names().collect(),
    };

    for &name in &selected {
        let container = pack
            .get(name)
            .map_err(|err| pack_error("unpack failed", err))?;
        let out = args.out_dir.join(format!("{name}.silk"));
        fs::write(&out, container)
            .map_err(|err| io_error(&format!("failed writing {}", out.display()), err))?;
    }

    info!(entries = selected.len(), "extracted into {}", args.out_dir.display());
    Ok(SUCCESS)
}
