#![cfg(feature = "cli")]

use std::path::PathBuf;
use std::process::Command;

fn unique_temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "silkpack-cli-{tag}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir
}

fn sample_container(frames: &[&[u8]]) -> Vec<u8> {
    let mut data = b"\x02#!SILK_V3".to_vec();
    for frame in frames {
        data.extend_from_slice(&(frame.len() as u16).to_le_bytes());
        data.extend_from_slice(frame);
    }
    data.extend_from_slice(&[0x00, 0x00]);
    data
}

#[test]
fn probe_reports_frame_count_as_json() {
    let dir = unique_temp_dir("probe-json");
    let file = dir.join("voice.silk");
    std::fs::write(&file, sample_container(&[b"abc", b"defg", b"hi"])).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_silkpack"))
        .arg("--format")
        .arg("json")
        .arg("probe")
        .arg(&file)
        .arg("--rate")
        .arg("24000")
        .output()
        .expect("probe should run");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("probe output should be JSON");
    assert_eq!(report["valid"], true);
    assert_eq!(report["vendor_prefix"], true);
    assert_eq!(report["frames"], 3);
    assert_eq!(report["payload_bytes"], 9);
    assert_eq!(report["end_marker"], true);
    assert_eq!(report["truncated"], false);
    assert_eq!(report["duration_ms"], 60);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn probe_flags_invalid_container() {
    let dir = unique_temp_dir("probe-invalid");
    let file = dir.join("not-silk.bin");
    std::fs::write(&file, b"these are not the frames you are looking for").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_silkpack"))
        .arg("--format")
        .arg("json")
        .arg("probe")
        .arg(&file)
        .output()
        .expect("probe should run");

    assert_eq!(output.status.code(), Some(60));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["valid"], false);
    assert_eq!(report["frames"], 0);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn probe_missing_file_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_silkpack"))
        .arg("probe")
        .arg("/definitely/not/here.silk")
        .output()
        .expect("probe should run");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed reading"));
}

#[test]
fn pack_then_unpack_roundtrips_containers() {
    let dir = unique_temp_dir("pack-roundtrip");
    let first = sample_container(&[b"one"]);
    let second = sample_container(&[b"two", b"three"]);
    std::fs::write(dir.join("first.silk"), &first).unwrap();
    std::fs::write(dir.join("second.silk"), &second).unwrap();

    let pack_file = dir.join("voices.json");
    let status = Command::new(env!("CARGO_BIN_EXE_silkpack"))
        .arg("pack")
        .arg(format!("first={}", dir.join("first.silk").display()))
        .arg(format!("second={}", dir.join("second.silk").display()))
        .arg("--out")
        .arg(&pack_file)
        .status()
        .expect("pack should run");
    assert!(status.success());

    let out_dir = dir.join("extracted");
    let status = Command::new(env!("CARGO_BIN_EXE_silkpack"))
        .arg("unpack")
        .arg(&pack_file)
        .arg("--out-dir")
        .arg(&out_dir)
        .status()
        .expect("unpack should run");
    assert!(status.success());

    assert_eq!(std::fs::read(out_dir.join("first.silk")).unwrap(), first);
    assert_eq!(std::fs::read(out_dir.join("second.silk")).unwrap(), second);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn pack_rejects_non_container_input() {
    let dir = unique_temp_dir("pack-reject");
    std::fs::write(dir.join("noise.bin"), b"noise").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_silkpack"))
        .arg("pack")
        .arg(format!("noise={}", dir.join("noise.bin").display()))
        .arg("--out")
        .arg(dir.join("pack.json"))
        .output()
        .expect("pack should run");

    assert_eq!(output.status.code(), Some(60));
    assert!(String::from_utf8_lossy(&output.stderr).contains("not a SILK container"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn version_prints_package_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_silkpack"))
        .arg("version")
        .output()
        .expect("version should run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}
