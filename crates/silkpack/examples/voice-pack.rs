//! Bundle containers into a voice pack and pull one back out.
//!
//! Run with:
//!   cargo run --example voice-pack

use silkpack::container::ContainerWriter;
use silkpack::pack::VoicePack;

fn sample_container(seed: u8) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let mut writer = ContainerWriter::new(Vec::new());
    writer.write_frame(&[seed; 40])?;
    writer.write_frame(&[seed.wrapping_add(1); 40])?;
    Ok(writer.finish()?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut pack = VoicePack::new();
    pack.insert("greeting", &sample_container(0x10)?)?;
    pack.insert("farewell", &sample_container(0x20)?)?;

    let json = pack.to_json()?;
    eprintln!("voice pack JSON:\n{json}");

    let restored = VoicePack::from_json(&json)?;
    let greeting = restored.get("greeting")?;
    eprintln!(
        "restored {} entries; greeting container is {} bytes",
        restored.len(),
        greeting.len()
    );

    Ok(())
}
