//! Safe RAII wrappers over the SILK SDK.
//!
//! Each wrapper owns one opaque SDK state blob, allocated at construction
//! and released on `Drop`, so a state object can never outlive its
//! encode/decode call or leak on an early return.

use libc::c_void;

use crate::primitive::{
    DecodedFrame, EncoderConfig, FrameDecoder, FrameEncoder, PrimitiveError,
};
use crate::sys;

/// Upper bound on one compressed frame's size. The SDK caps payloads well
/// below the container's 16-bit length field.
const MAX_ENCODED_BYTES: usize = 2048;

/// Output buffer for one decode call: 20 ms at the highest API rate, times
/// the packet's frame bound.
const MAX_DECODED_SAMPLES: usize = 960 * crate::primitive::MAX_FRAMES_PER_PACKET;

fn check(op: &'static str, code: sys::SKP_int) -> Result<(), PrimitiveError> {
    if code == 0 {
        Ok(())
    } else {
        Err(PrimitiveError::Codec { op, code })
    }
}

/// A SILK encoder state scoped to one encode call.
pub struct SilkEncoder {
    state: Vec<u8>,
    control: sys::SKP_SILK_SDK_EncControlStruct,
}

impl SilkEncoder {
    /// Allocate and initialize an encoder for the given configuration.
    pub fn new(config: &EncoderConfig) -> Result<Self, PrimitiveError> {
        let mut size: sys::SKP_int32 = 0;
        // SAFETY: `size` is a valid out-pointer for the duration of the call.
        check("get encoder size", unsafe {
            sys::SKP_Silk_SDK_Get_Encoder_Size(&mut size)
        })?;
        if size <= 0 {
            return Err(PrimitiveError::Config(format!(
                "encoder state size {size} reported by SDK"
            )));
        }

        let mut state = vec![0u8; size as usize];
        let mut control = sys::SKP_SILK_SDK_EncControlStruct {
            API_sampleRate: config.sample_rate as sys::SKP_int32,
            maxInternalSampleRate: config.max_internal_sample_rate as sys::SKP_int32,
            packetSize: config.frame_samples as sys::SKP_int,
            bitRate: config.bit_rate as sys::SKP_int32,
            packetLossPercentage: 0,
            complexity: config.complexity as sys::SKP_int,
            useInBandFEC: config.use_in_band_fec.into(),
            useDTX: config.use_dtx.into(),
        };

        // SAFETY: `state` is a zeroed blob of the size the SDK asked for and
        // outlives every SDK call through `self`.
        check("init encoder", unsafe {
            sys::SKP_Silk_SDK_InitEncoder(state.as_mut_ptr() as *mut c_void, &mut control)
        })?;

        Ok(Self { state, control })
    }
}

impl FrameEncoder for SilkEncoder {
    fn encode_frame(&mut self, frame: &[i16]) -> Result<Vec<u8>, PrimitiveError> {
        let mut out = vec![0u8; MAX_ENCODED_BYTES];
        let mut n_bytes: sys::SKP_int16 = MAX_ENCODED_BYTES as sys::SKP_int16;

        // SAFETY: in/out buffers are live for the call; `n_bytes` carries
        // the output capacity in and the produced size out.
        check("encode frame", unsafe {
            sys::SKP_Silk_SDK_Encode(
                self.state.as_mut_ptr() as *mut c_void,
                &self.control,
                frame.as_ptr(),
                frame.len() as sys::SKP_int,
                out.as_mut_ptr(),
                &mut n_bytes,
            )
        })?;

        out.truncate(n_bytes.max(0) as usize);
        Ok(out)
    }
}

/// A SILK decoder state scoped to one decode call.
pub struct SilkDecoder {
    state: Vec<u8>,
    control: sys::SKP_SILK_SDK_DecControlStruct,
}

impl SilkDecoder {
    /// Allocate and initialize a decoder producing PCM at `sample_rate`.
    pub fn new(sample_rate: u32) -> Result<Self, PrimitiveError> {
        let mut size: sys::SKP_int32 = 0;
        // SAFETY: `size` is a valid out-pointer for the duration of the call.
        check("get decoder size", unsafe {
            sys::SKP_Silk_SDK_Get_Decoder_Size(&mut size)
        })?;
        if size <= 0 {
            return Err(PrimitiveError::Config(format!(
                "decoder state size {size} reported by SDK"
            )));
        }

        let mut state = vec![0u8; size as usize];
        // SAFETY: `state` is a zeroed blob of the size the SDK asked for.
        check("init decoder", unsafe {
            sys::SKP_Silk_SDK_InitDecoder(state.as_mut_ptr() as *mut c_void)
        })?;

        Ok(Self {
            state,
            control: sys::SKP_SILK_SDK_DecControlStruct {
                API_sampleRate: sample_rate as sys::SKP_int32,
                frameSize: 0,
                framesPerPacket: 1,
                moreInternalDecoderFrames: 0,
                inBandFECOffset: 0,
            },
        })
    }
}

impl FrameDecoder for SilkDecoder {
    fn decode_frame(&mut self, payload: &[u8]) -> Result<DecodedFrame, PrimitiveError> {
        let mut out = vec![0i16; MAX_DECODED_SAMPLES];
        let mut n_samples: sys::SKP_int16 = 0;

        // SAFETY: buffers are live for the call; a null/0 input is how the
        // SDK is told to emit its next internally buffered frame.
        check("decode frame", unsafe {
            sys::SKP_Silk_SDK_Decode(
                self.state.as_mut_ptr() as *mut c_void,
                &mut self.control,
                0,
                if payload.is_empty() {
                    std::ptr::null()
                } else {
                    payload.as_ptr()
                },
                payload.len() as sys::SKP_int,
                out.as_mut_ptr(),
                &mut n_samples,
            )
        })?;

        out.truncate(n_samples.max(0) as usize);
        Ok(DecodedFrame {
            samples: out,
            more_pending: self.control.moreInternalDecoderFrames != 0,
        })
    }
}
