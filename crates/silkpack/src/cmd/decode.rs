use std::fs;

use tracing::info;

use crate::cmd::DecodeArgs;
use crate::exit::{codec_error, io_error, CliResult, SUCCESS};

pub fn run(args: DecodeArgs) -> CliResult<i32> {
    let container = fs::read(&args.input)
        .map_err(|err| io_error(&format!("failed reading {}", args.input.display()), err))?;

    let pcm = silkpack::codec::decode(&container, args.rate)
        .map_err(|err| codec_error("decode failed", err))?;

    fs::write(&args.out, &pcm)
        .map_err(|err| io_error(&format!("failed writing {}", args.out.display()), err))?;

    info!(
        container_bytes = container.len(),
        pcm_bytes = pcm.len(),
        rate = args.rate,
        "decoded {}",
        args.out.display()
    );
    Ok(SUCCESS)
}
