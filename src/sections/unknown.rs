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

    src/sections/unknown.rs

    Section 0x0002: a single u16 of unknown meaning between two constant blocks.
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

pub(crate) struct Unknown2Section;

impl SectionCodec for Unknown2Section {
    const SECTION_TYPE: SectionType = SectionType::Unknown2;

    fn decode(cursor: &mut ByteCursor, file: &mut ParamFile) -> Result<(), DecodeError> {
        Constant::Section2Leading.expect(cursor)?;
        let value = cursor.read_u16()?;
        Constant::Section2Trailing.expect(cursor)?;

        log::debug!("Section 0x0002 value: 0x{:04X}", value);
        file.section2_value = Some(value);
        Ok(())
    }

    fn encode(file: &ParamFile, out: &mut ByteWriter) -> Result<(), EncodeError> {
        let value = file.section2_value.ok_or(EncodeError::MissingField {
            section_type: Self::SECTION_TYPE.tag(),
            field: "section2_value",
        })?;

        Constant::Section2Leading.emit(out);
        out.write_u16(value);
        Constant::Section2Trailing.emit(out);
        Ok(())
    }
}
