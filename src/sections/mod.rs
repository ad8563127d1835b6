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

    src/sections/mod.rs

    Per-section-type payload codecs.

    Each codec handles only the payload that follows the section header. The
    file codec checks that decoding stopped exactly at the end declared in the
    header.
*/

mod firmware;
mod null;
mod params;
mod unknown;

use crate::{
    cursor::{ByteCursor, ByteWriter},
    param_file::ParamFile,
    section::SectionType,
    DecodeError,
    EncodeError,
};

pub(crate) use firmware::FirmwareVersionSection;
pub(crate) use null::{NullBlockSection, NumberedNullBlocksSection};
pub(crate) use params::{CurrentParamsSection, MaxMinDefaultUnitSection};
pub(crate) use unknown::Unknown2Section;

/// A codec for the payload of one section type.
pub(crate) trait SectionCodec {
    const SECTION_TYPE: SectionType;

    /// Decode the payload at the cursor into `file`.
    fn decode(cursor: &mut ByteCursor, file: &mut ParamFile) -> Result<(), DecodeError>;

    /// Encode the payload for this section type from `file`.
    fn encode(file: &ParamFile, out: &mut ByteWriter) -> Result<(), EncodeError>;
}

pub(crate) fn decode_payload(
    section_type: SectionType,
    cursor: &mut ByteCursor,
    file: &mut ParamFile,
) -> Result<(), DecodeError> {
    match section_type {
        SectionType::FirmwareVersion => FirmwareVersionSection::decode(cursor, file),
        SectionType::Unknown2 => Unknown2Section::decode(cursor, file),
        SectionType::MaxMinDefaultUnit => MaxMinDefaultUnitSection::decode(cursor, file),
        SectionType::NullBlock => NullBlockSection::decode(cursor, file),
        SectionType::NumberedNullBlocks => NumberedNullBlocksSection::decode(cursor, file),
        SectionType::CurrentParams => CurrentParamsSection::decode(cursor, file),
    }
}

pub(crate) fn encode_payload(
    section_type: SectionType,
    file: &ParamFile,
    out: &mut ByteWriter,
) -> Result<(), EncodeError> {
    match section_type {
        SectionType::FirmwareVersion => FirmwareVersionSection::encode(file, out),
        SectionType::Unknown2 => Unknown2Section::encode(file, out),
        SectionType::MaxMinDefaultUnit => MaxMinDefaultUnitSection::encode(file, out),
        SectionType::NullBlock => NullBlockSection::encode(file, out),
        SectionType::NumberedNullBlocks => NumberedNullBlocksSection::encode(file, out),
        SectionType::CurrentParams => CurrentParamsSection::encode(file, out),
    }
}
