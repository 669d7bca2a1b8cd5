use std::fs;

use silkpack::codec::FRAME_MS;
use silkpack::container::{parse_header, FrameIter, VENDOR_PREFIX};

use crate::cmd::ProbeArgs;
use crate::exit::{io_error, CliResult, DATA_INVALID, SUCCESS};
use crate::output::{print_probe, OutputFormat, ProbeReport};

pub fn run(args: ProbeArgs, format: OutputFormat) -> CliResult<i32> {
    let data = fs::read(&args.file)
        .map_err(|err| io_error(&format!("failed reading {}", args.file.display()), err))?;

    let report = inspect(&args.file.display().to_string(), &data, args.rate);
    let code = if report.valid { SUCCESS } else { DATA_INVALID };
    print_probe(&report, format);
    Ok(code)
}

fn inspect(path: &str, data: &[u8], rate: u32) -> ProbeReport {
    let Ok(body) = parse_header(data) else {
        return ProbeReport {
            path: path.to_string(),
            valid: false,
            vendor_prefix: false,
            frames: 0,
            payload_bytes: 0,
            truncated: false,
            end_marker: false,
            sample_rate: rate,
            duration_ms: 0,
        };
    };
    let vendor_prefix = data[0] == VENDOR_PREFIX;

    let mut frames = 0usize;
    let mut payload_bytes = 0usize;
    let mut iter = FrameIter::new(&data[body..]);
    let mut consumed = 0usize;
    for payload in iter.by_ref() {
        frames += 1;
        payload_bytes += payload.len();
        consumed += 2 + payload.len();
    }
    let truncated = iter.truncated();
    // The iterator stops silently at a ragged end; only a literal zero
    // length record counts as a proper end marker.
    let end_marker = !truncated && data[body..].len() >= consumed + 2
        && data[body + consumed..body + consumed + 2] == [0x00, 0x00];

    ProbeReport {
        path: path.to_string(),
        valid: true,
        vendor_prefix,
        frames,
        payload_bytes,
        truncated,
        end_marker,
        sample_rate: rate,
        duration_ms: frames as u64 * u64::from(FRAME_MS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container(frames: &[&[u8]], end_marker: bool) -> Vec<u8> {
        let mut data = b"\x02#!SILK_V3".to_vec();
        for frame in frames {
            data.extend_from_slice(&(frame.len() as u16).to_le_bytes());
            data.extend_from_slice(frame);
        }
        if end_marker {
            data.extend_from_slice(&[0x00, 0x00]);
        }
        data
    }

    #[test]
    fn reports_frames_and_duration() {
        let data = container(&[b"abc", b"defg"], true);
        let report = inspect("x.silk", &data, 24000);
        assert!(report.valid);
        assert!(report.vendor_prefix);
        assert_eq!(report.frames, 2);
        assert_eq!(report.payload_bytes, 7);
        assert_eq!(report.duration_ms, 40);
        assert!(report.end_marker);
        assert!(!report.truncated);
    }

    #[test]
    fn reports_missing_end_marker() {
        let data = container(&[b"abc"], false);
        let report = inspect("x.silk", &data, 24000);
        assert!(report.valid);
        assert!(!report.end_marker);
        assert!(!report.truncated);
    }

    #[test]
    fn reports_truncation() {
        let mut data = container(&[b"abc"], false);
        data.extend_from_slice(&[0x40, 0x00, b'x']);
        let report = inspect("x.silk", &data, 24000);
        assert_eq!(report.frames, 1);
        assert!(report.truncated);
        assert!(!report.end_marker);
    }

    #[test]
    fn reports_invalid_header() {
        let report = inspect("x.silk", b"MThd not silk at all", 24000);
        assert!(!report.valid);
        assert_eq!(report.frames, 0);
    }
}
