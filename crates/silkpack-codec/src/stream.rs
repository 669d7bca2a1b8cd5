//! Drives a per-frame codec primitive across whole PCM buffers and
//! containers.
//!
//! Encode is all-or-nothing: one bad frame fails the call and discards any
//! partial container. Decode is best-effort per frame: corrupt records are
//! skipped, truncation ends the stream, and the caller gets whatever audio
//! survived. The asymmetry is intentional and tests assert both directions.

use bytes::BytesMut;

use silkpack_container::{
    parse_header, write_end_marker, write_frame, write_header, FrameIter,
};

use crate::error::{CodecError, Result};
use crate::pcm::{bytes_to_samples, ensure_supported_rate, samples_per_frame, samples_to_bytes};
use crate::primitive::{FrameDecoder, FrameEncoder, MAX_FRAMES_PER_PACKET};

/// Encode a PCM buffer into a SILK container using the given encoder.
///
/// The encoder is taken by value and dropped before returning, so codec
/// state never outlives the call. `sample_rate` determines the 20 ms frame
/// size; the final partial frame is zero-padded so the encoder always sees
/// exactly one full frame per call.
///
/// An empty `pcm` returns an empty buffer with no header and no end marker,
/// not a header-only container; callers treat absent output as "nothing to
/// store".
pub fn encode_stream<E: FrameEncoder>(
    mut encoder: E,
    pcm: &[u8],
    sample_rate: u32,
) -> Result<Vec<u8>> {
    ensure_supported_rate(sample_rate)?;
    let samples = bytes_to_samples(pcm)?;
    if samples.is_empty() {
        return Ok(Vec::new());
    }

    let frame_samples = samples_per_frame(sample_rate);
    let mut out = BytesMut::new();
    write_header(&mut out, true);

    let mut frame = vec![0i16; frame_samples];
    for (index, chunk) in samples.chunks(frame_samples).enumerate() {
        frame[..chunk.len()].copy_from_slice(chunk);
        frame[chunk.len()..].fill(0);

        let payload = encoder
            .encode_frame(&frame)
            .map_err(|source| CodecError::EncodeFailed {
                frame: index,
                source,
            })?;

        // DTX and other zero-byte outputs get no record; a zero-length
        // record is the end marker.
        if payload.is_empty() {
            continue;
        }
        write_frame(&mut out, &payload)?;
    }

    write_end_marker(&mut out);
    Ok(out.to_vec())
}

/// Decode a SILK container into a PCM buffer using the given decoder.
///
/// The decoder is taken by value, must already be initialized at the
/// container's sample rate, and is dropped before returning. Frame records
/// that fail to decode are skipped; a truncated final record ends the
/// stream. Either way the PCM accumulated so far is returned, so an
/// all-corrupt container decodes to an empty buffer rather than an error.
pub fn decode_stream<D: FrameDecoder>(mut decoder: D, container: &[u8]) -> Result<Vec<u8>> {
    let body = parse_header(container)?;
    if body >= container.len() {
        return Err(silkpack_container::ContainerError::InvalidHeader.into());
    }

    let mut samples = Vec::new();
    for (index, payload) in FrameIter::new(&container[body..]).enumerate() {
        let decoded = match decoder.decode_frame(payload) {
            Ok(decoded) => decoded,
            Err(err) => {
                tracing::warn!(frame = index, error = %err, "skipping undecodable frame");
                continue;
            }
        };
        samples.extend_from_slice(&decoded.samples);

        // Drain frames the decoder still holds from this payload.
        let mut pending = decoded.more_pending;
        let mut drained = 0;
        while pending && drained < MAX_FRAMES_PER_PACKET {
            match decoder.decode_frame(&[]) {
                Ok(next) => {
                    samples.extend_from_slice(&next.samples);
                    pending = next.more_pending;
                    drained += 1;
                }
                Err(err) => {
                    tracing::warn!(frame = index, error = %err, "pending frame drain failed");
                    break;
                }
            }
        }
    }

    Ok(samples_to_bytes(&samples))
}
