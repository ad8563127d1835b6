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

    src/sections/firmware.rs

    Section 0x0001: firmware version.

    The version and the subversion are each stored twice and must agree.
*/

use crate::{
    constants::Constant,
    cursor::{ByteCursor, ByteWriter},
    param_file::ParamFile,
    section::SectionType,
    sections::SectionCodec,
    DecodeError,
    EncodeError,
};

const TRAILING_ZEROS: usize = 100;

pub(crate) struct FirmwareVersionSection;

impl FirmwareVersionSection {
    fn read_pair(cursor: &mut ByteCursor, field: &'static str) -> Result<u32, DecodeError> {
        let offset = cursor.position();
        let first = cursor.read_u32()?;
        let second = cursor.read_u32()?;
        if first != second {
            return Err(DecodeError::FirmwareVersionMismatch {
                offset,
                field,
                first,
                second,
            });
        }
        Ok(first)
    }

    fn require(value: Option<u32>, field: &'static str) -> Result<u32, EncodeError> {
        value.ok_or(EncodeError::MissingField {
            section_type: Self::SECTION_TYPE.tag(),
            field,
        })
    }
}

impl SectionCodec for FirmwareVersionSection {
    const SECTION_TYPE: SectionType = SectionType::FirmwareVersion;

    fn decode(cursor: &mut ByteCursor, file: &mut ParamFile) -> Result<(), DecodeError> {
        Constant::FirmwareVersionPrefix.expect(cursor)?;
        let version = Self::read_pair(cursor, "firmware_version")?;
        Constant::FirmwareSubversionPrefix.expect(cursor)?;
        let subversion = Self::read_pair(cursor, "firmware_subversion")?;
        cursor.expect_zeros(TRAILING_ZEROS)?;

        log::debug!("Firmware version: {} subversion: {}", version, subversion);
        file.firmware_version = Some(version);
        file.firmware_subversion = Some(subversion);
        Ok(())
    }

    fn encode(file: &ParamFile, out: &mut ByteWriter) -> Result<(), EncodeError> {
        let version = Self::require(file.firmware_version, "firmware_version")?;
        let subversion = Self::require(file.firmware_subversion, "firmware_subversion")?;

        Constant::FirmwareVersionPrefix.emit(out);
        out.write_u32(version);
        out.write_u32(version);
        Constant::FirmwareSubversionPrefix.emit(out);
        out.write_u32(subversion);
        out.write_u32(subversion);
        out.write_zeros(TRAILING_ZEROS);
        Ok(())
    }
}
