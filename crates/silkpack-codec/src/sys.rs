//! Raw bindings to the reference SILK SDK (libSKP_SILK_SDK).
//!
//! The SDK hands out opaque state blobs sized by `*_Get_*_Size` and driven
//! through init/process calls; [`crate::silk`] owns the allocation and
//! lifetime. Field layout follows `SKP_Silk_SDK_API.h` exactly.

#![allow(non_camel_case_types, non_snake_case)]

use libc::{c_int, c_uchar, c_void};

pub type SKP_int = c_int;
pub type SKP_int16 = i16;
pub type SKP_int32 = i32;
pub type SKP_uint8 = c_uchar;

/// Encoder control structure (`SKP_SILK_SDK_EncControlStruct`).
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SKP_SILK_SDK_EncControlStruct {
    pub API_sampleRate: SKP_int32,
    pub maxInternalSampleRate: SKP_int32,
    pub packetSize: SKP_int,
    pub bitRate: SKP_int32,
    pub packetLossPercentage: SKP_int,
    pub complexity: SKP_int,
    pub useInBandFEC: SKP_int,
    pub useDTX: SKP_int,
}

/// Decoder control structure (`SKP_SILK_SDK_DecControlStruct`).
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SKP_SILK_SDK_DecControlStruct {
    pub API_sampleRate: SKP_int32,
    pub frameSize: SKP_int,
    pub framesPerPacket: SKP_int,
    pub moreInternalDecoderFrames: SKP_int,
    pub inBandFECOffset: SKP_int,
}

#[link(name = "SKP_SILK_SDK")]
extern "C" {
    pub fn SKP_Silk_SDK_Get_Encoder_Size(encSizeBytes: *mut SKP_int32) -> SKP_int;

    pub fn SKP_Silk_SDK_InitEncoder(
        encState: *mut c_void,
        encStatus: *mut SKP_SILK_SDK_EncControlStruct,
    ) -> SKP_int;

    pub fn SKP_Silk_SDK_Encode(
        encState: *mut c_void,
        encControl: *const SKP_SILK_SDK_EncControlStruct,
        samplesIn: *const SKP_int16,
        nSamplesIn: SKP_int,
        outData: *mut SKP_uint8,
        nBytesOut: *mut SKP_int16,
    ) -> SKP_int;

    pub fn SKP_Silk_SDK_Get_Decoder_Size(decSizeBytes: *mut SKP_int32) -> SKP_int;

    pub fn SKP_Silk_SDK_InitDecoder(decState: *mut c_void) -> SKP_int;

    pub fn SKP_Silk_SDK_Decode(
        decState: *mut c_void,
        decControl: *mut SKP_SILK_SDK_DecControlStruct,
        lostFlag: SKP_int,
        inData: *const SKP_uint8,
        nBytesIn: SKP_int,
        samplesOut: *mut SKP_int16,
        nSamplesOut: *mut SKP_int16,
    ) -> SKP_int;
}
