//! Build a small SILK container in memory and walk its frame records.
//!
//! Run with:
//!   cargo run --example inspect-container

use silkpack::container::{parse_header, ContainerWriter, FrameIter, VENDOR_PREFIX};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Three fake compressed frames; real payloads come from a SILK encoder.
    let mut writer = ContainerWriter::new(Vec::new());
    writer.write_frame(&[0x11; 38])?;
    writer.write_frame(&[0x22; 41])?;
    writer.write_frame(&[0x33; 36])?;
    let wire = writer.finish()?;

    eprintln!("container is {} bytes on the wire", wire.len());

    let body = parse_header(&wire)?;
    let form = if wire[0] == VENDOR_PREFIX {
        "vendor-prefixed"
    } else {
        "bare"
    };
    eprintln!("header: {form}, body starts at offset {body}");

    let mut iter = FrameIter::new(&wire[body..]);
    for (index, payload) in iter.by_ref().enumerate() {
        eprintln!("frame {index}: {} payload bytes", payload.len());
    }
    eprintln!("truncated: {}", iter.truncated());

    Ok(())
}
