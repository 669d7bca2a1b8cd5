use std::fs;

use tracing::info;

use crate::cmd::EncodeArgs;
use crate::exit::{codec_error, io_error, CliResult, SUCCESS};

pub fn run(args: EncodeArgs) -> CliResult<i32> {
    let pcm = fs::read(&args.input)
        .map_err(|err| io_error(&format!("failed reading {}", args.input.display()), err))?;

    let container = silkpack::codec::encode(&pcm, args.rate)
        .map_err(|err| codec_error("encode failed", err))?;

    fs::write(&args.out, &container)
        .map_err(|err| io_error(&format!("failed writing {}", args.out.display()), err))?;

    info!(
        pcm_bytes = pcm.len(),
        container_bytes = container.len(),
        rate = args.rate,
        "encoded {}",
        args.out.display()
    );
    Ok(SUCCESS)
}
