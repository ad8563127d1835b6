/*
    asdapar

    Copyright 2024 Daniel Balsom

    Permission is hereby granted, free of charge, to any person obtaining a
    copy of this software and associated documentation files (the “Software”),
    to deal in the Software without restriction, including without limitation
    the rights to use, copy, modify, merge, publish, distribute, sublicense,
    and/or sell copies of the Software, and to permit persons to whom the
    Software is furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in
    all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
    FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
    DEALINGS IN THE SOFTWARE.

    --------------------------------------------------------------------------
*/

//! asdapar decodes the binary parameter files (`.par`) written by the ASDA-Soft servo drive
//! configuration tool into a structured [`ParamFile`], and encodes a [`ParamFile`] back into a
//! byte-for-byte identical file.
//!
//! Every byte of a parameter file is either decoded into a field or validated against a known
//! constant. Any deviation from the known layout is reported as an error carrying the offending
//! file offset, so that decoding then re-encoding a supported file always reproduces the original.

pub mod codec;
pub mod constants;
pub mod cursor;
#[cfg(feature = "serde")]
pub mod json;
pub mod param_file;
pub mod params;
pub mod section;
mod sections;
pub mod swap;
pub mod validate;

use thiserror::Error;

use crate::params::ParamKey;

/// Length of the fixed, NUL-padded ASDA-Soft version string field.
pub const VERSION_STRING_LEN: usize = 0x70;
/// Storage mode values observed in parameter files.
pub const STORAGE_MODES: [u32; 2] = [0x01, 0x03];

/// Errors raised while interpreting the bytes of a parameter file.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Unexpected end of input at offset 0x{offset:04X}: needed {needed} bytes, {remaining} remaining")]
    TruncatedInput {
        offset: usize,
        needed: usize,
        remaining: usize,
    },
    #[error("Wrong byte at offset 0x{offset:04X}: expected byte 0x{expected:02X}, got 0x{actual:02X}")]
    ConstantMismatch { offset: usize, expected: u8, actual: u8 },
    #[error("Reserved byte at offset 0x{offset:04X} is not zero: got 0x{actual:02X}")]
    ReservedBytesNonZero { offset: usize, actual: u8 },
    #[error("Unknown storage mode at offset 0x{offset:04X}: got 0x{value:04X}")]
    InvalidStorageMode { offset: usize, value: u32 },
    #[error("Version string at offset 0x{offset:04X} is not valid UTF-8")]
    InvalidVersionString { offset: usize },
    #[error(
        "Section #{section_index} (type 0x{section_type:04X}) should start at offset 0x{expected:04X} according to the section table, but decoding is at 0x{actual:04X}"
    )]
    SectionOffsetMismatch {
        section_index: usize,
        section_type: u16,
        expected: usize,
        actual: usize,
    },
    #[error(
        "Header of section #{section_index} at offset 0x{offset:04X}: expected type 0x{expected:04X} according to the section table, found 0x{actual:04X}"
    )]
    SectionTypeMismatch {
        section_index: usize,
        offset: usize,
        expected: u16,
        actual: u16,
    },
    #[error(
        "Section #{section_index} (type 0x{section_type:04X}): expected end = 0x{expected_end:04X}, but decoding finished at 0x{actual_end:04X}"
    )]
    SectionLengthMismatch {
        section_index: usize,
        section_type: u16,
        expected_end: usize,
        actual_end: usize,
    },
    #[error("Section #{section_index} at offset 0x{offset:04X} has unknown section type 0x{section_type:04X}")]
    UnknownSectionType {
        section_index: usize,
        section_type: u16,
        offset: usize,
    },
    #[error("Two copies of {field} at offset 0x{offset:04X} differ: 0x{first:04X} != 0x{second:04X}")]
    FirmwareVersionMismatch {
        offset: usize,
        field: &'static str,
        first: u32,
        second: u32,
    },
    #[error("Unexpected null block count at offset 0x{offset:04X}: expected 0x{expected:02X}, got 0x{actual:02X}")]
    BlockCountMismatch { offset: usize, expected: u16, actual: u16 },
    #[error("Unexpected null block index at offset 0x{offset:04X}: expected {expected}, got {actual}")]
    BlockIndexMismatch { offset: usize, expected: u16, actual: u16 },
    #[error("Parameter {key} at offset 0x{offset:04X} has no current value")]
    UnknownParamKey { offset: usize, key: ParamKey },
    #[error("File has length 0x{length:04X}, but decoding finished at 0x{offset:04X}")]
    TrailingBytes { offset: usize, length: usize },
    #[error("Failed to read record at offset 0x{offset:04X}: {source}")]
    Record { offset: usize, source: binrw::Error },
}

/// Errors raised while serializing a [`ParamFile`] back into bytes.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("Unknown storage mode: 0x{value:04X}")]
    InvalidStorageMode { value: u32 },
    #[error("Version string is {length} bytes long, maximum is {max}")]
    VersionStringTooLong { length: usize, max: usize },
    #[error("Version string contains a NUL byte at position {position}")]
    VersionStringContainsNul { position: usize },
    #[error(
        "Offset error: section #{section_index} (type 0x{section_type:04X}) would be written at offset 0x{actual:04X}, but offset 0x{expected:04X} is specified in the section table"
    )]
    OffsetMismatch {
        section_index: usize,
        section_type: u16,
        expected: u32,
        actual: usize,
    },
    #[error(
        "Length error: section #{section_index} (type 0x{section_type:04X}) would be written with length 0x{actual:04X}, but length 0x{expected:04X} is specified in the section table"
    )]
    LengthMismatch {
        section_index: usize,
        section_type: u16,
        expected: u32,
        actual: u32,
    },
    #[error("Section table is empty, a parameter file needs at least one section")]
    EmptySectionTable,
    #[error("Parameter {key} in section 0x{section_type:04X} would be written as an all-zero row, which ends the row list")]
    SentinelCollision { section_type: u16, key: ParamKey },
    #[error("Cannot encode section #{section_index} of unknown type 0x{section_type:04X}")]
    UnknownSectionType { section_index: usize, section_type: u16 },
    #[error("Section type 0x{section_type:04X} requires field '{field}', which is not set")]
    MissingField { section_type: u16, field: &'static str },
    #[error("Parameter {key} is missing field '{field}'")]
    MissingParamField { key: ParamKey, field: &'static str },
    #[error("Failed to write record: {0}")]
    Record(#[from] binrw::Error),
}

/// Errors raised when a reconstructed file differs from its source.
#[derive(Debug, Error)]
pub enum RoundTripError {
    #[error("Reconstruction is different: wrong length: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error(
        "Reconstruction is different at position 0x{offset:04X}: expected byte 0x{expected:02X}, recreated 0x{actual:02X}"
    )]
    ByteMismatch { offset: usize, expected: u8, actual: u8 },
}

/// Top-level error type for operations that combine decoding, encoding, verification and I/O.
#[derive(Debug, Error)]
pub enum ParamFileError {
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),
    #[error("Encode error: {0}")]
    Encode(#[from] EncodeError),
    #[error("Round trip error: {0}")]
    RoundTrip(#[from] RoundTripError),
    #[error("An IO error occurred reading or writing the parameter file: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "serde")]
    #[error("Invalid structured representation: {0}")]
    Json(#[from] serde_json::Error),
}

/// Options controlling how a parameter file is decoded.
#[derive(Copy, Clone, Debug)]
pub struct DecodeOptions {
    /// Re-encode the decoded file and compare it against the input.
    pub verify_round_trip: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            verify_round_trip: true,
        }
    }
}

pub use crate::codec::ParamFileCodec;
pub use crate::param_file::ParamFile;
pub use crate::params::{ParamEntry, ParamLimits};
pub use crate::section::{SectionTableEntry, SectionType};
pub use crate::validate::{round_trip, RoundTripValidator};
