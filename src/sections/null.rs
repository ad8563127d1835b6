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

    src/sections/null.rs

    Sections 0x0007 and 0x0008: zero-filled blocks.

    Section 0x0008 holds 0x40 numbered blocks, each a u16 index followed by
    zero padding.
*/

use crate::{
    cursor::{ByteCursor, ByteWriter},
    param_file::ParamFile,
    section::SectionType,
    sections::SectionCodec,
    DecodeError,
    EncodeError,
};

const NULL_BLOCK_LEN: usize = 0x30;
const NUMBERED_BLOCK_COUNT: u16 = 0x40;
const NUMBERED_HEADER_PADDING: usize = 14;
const NUMBERED_BLOCK_PADDING: usize = 14 + 0x80;

pub(crate) struct NullBlockSection;

impl SectionCodec for NullBlockSection {
    const SECTION_TYPE: SectionType = SectionType::NullBlock;

    fn decode(cursor: &mut ByteCursor, _file: &mut ParamFile) -> Result<(), DecodeError> {
        cursor.expect_zeros(NULL_BLOCK_LEN)
    }

    fn encode(_file: &ParamFile, out: &mut ByteWriter) -> Result<(), EncodeError> {
        out.write_zeros(NULL_BLOCK_LEN);
        Ok(())
    }
}

pub(crate) struct NumberedNullBlocksSection;

impl SectionCodec for NumberedNullBlocksSection {
    const SECTION_TYPE: SectionType = SectionType::NumberedNullBlocks;

    fn decode(cursor: &mut ByteCursor, _file: &mut ParamFile) -> Result<(), DecodeError> {
        let count_offset = cursor.position();
        let count = cursor.read_u16()?;
        if count != NUMBERED_BLOCK_COUNT {
            return Err(DecodeError::BlockCountMismatch {
                offset: count_offset,
                expected: NUMBERED_BLOCK_COUNT,
                actual: count,
            });
        }
        cursor.expect_zeros(NUMBERED_HEADER_PADDING)?;

        for expected in 0..NUMBERED_BLOCK_COUNT {
            let offset = cursor.position();
            let index = cursor.read_u16()?;
            if index != expected {
                return Err(DecodeError::BlockIndexMismatch {
                    offset,
                    expected,
                    actual: index,
                });
            }
            cursor.expect_zeros(NUMBERED_BLOCK_PADDING)?;
        }
        Ok(())
    }

    fn encode(_file: &ParamFile, out: &mut ByteWriter) -> Result<(), EncodeError> {
        out.write_u16(NUMBERED_BLOCK_COUNT);
        out.write_zeros(NUMBERED_HEADER_PADDING);
        for index in 0..NUMBERED_BLOCK_COUNT {
            out.write_u16(index);
            out.write_zeros(NUMBERED_BLOCK_PADDING);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_blocks() -> Vec<u8> {
        let mut out = ByteWriter::new();
        NumberedNullBlocksSection::encode(&ParamFile::default(), &mut out).unwrap();
        out.into_inner()
    }

    #[test]
    fn null_block_is_zeros() {
        let mut out = ByteWriter::new();
        NullBlockSection::encode(&ParamFile::default(), &mut out).unwrap();
        let bytes = out.into_inner();
        assert_eq!(bytes, vec![0u8; NULL_BLOCK_LEN]);

        let mut cursor = ByteCursor::new(&bytes);
        NullBlockSection::decode(&mut cursor, &mut ParamFile::default()).unwrap();
        assert!(cursor.at_end());
    }

    #[test]
    fn numbered_blocks_layout() {
        let bytes = numbered_blocks();
        assert_eq!(bytes.len(), 16 + 0x40 * (2 + NUMBERED_BLOCK_PADDING));
        assert_eq!(&bytes[0..2], &[0x40, 0x00]);
        // Block 5 index
        let block5 = 16 + 5 * (2 + NUMBERED_BLOCK_PADDING);
        assert_eq!(&bytes[block5..block5 + 2], &[0x05, 0x00]);

        let mut cursor = ByteCursor::new(&bytes);
        NumberedNullBlocksSection::decode(&mut cursor, &mut ParamFile::default()).unwrap();
        assert!(cursor.at_end());
    }

    #[test]
    fn numbered_blocks_count_checked() {
        let mut bytes = numbered_blocks();
        bytes[0] = 0x3F;
        let mut cursor = ByteCursor::new(&bytes);
        assert!(matches!(
            NumberedNullBlocksSection::decode(&mut cursor, &mut ParamFile::default()),
            Err(DecodeError::BlockCountMismatch {
                offset: 0,
                expected: 0x40,
                actual: 0x3F
            })
        ));
    }

    #[test]
    fn numbered_blocks_index_checked() {
        let mut bytes = numbered_blocks();
        let block7 = 16 + 7 * (2 + NUMBERED_BLOCK_PADDING);
        bytes[block7] = 0x08;
        let mut cursor = ByteCursor::new(&bytes);
        match NumberedNullBlocksSection::decode(&mut cursor, &mut ParamFile::default()) {
            Err(DecodeError::BlockIndexMismatch {
                offset,
                expected,
                actual,
            }) => {
                assert_eq!(offset, block7);
                assert_eq!(expected, 7);
                assert_eq!(actual, 8);
            }
            other => panic!("expected BlockIndexMismatch, got {:?}", other),
        }
    }
}
