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

    src/codec.rs

    Whole-file decode and encode.

    Layout, little-endian throughout:
      0x00  magic
      0x0C  storage mode (u32)
      0x10  version string, 0x70 bytes, NUL padded
      0x80  constant block preceding the section table
      ....  section table rows
      ....  sections, in table order, each framed by a section header
    The last section must end at the end of the file.
*/

use crate::{
    constants::Constant,
    cursor::{compare_bytes, ByteCursor, ByteWriter},
    param_file::ParamFile,
    section::{SectionFramer, SectionTable, SectionType, SECTION_HEADER_LEN},
    sections,
    DecodeError,
    EncodeError,
    STORAGE_MODES,
    VERSION_STRING_LEN,
};

/// Offset of the constant block that precedes the section table.
pub const BEFORE_TABLE_OFFSET: usize = 0x80;

pub struct ParamFileCodec;

impl ParamFileCodec {
    /// Offset of the first section for a table of `row_ct` rows.
    pub fn sections_start(row_ct: usize) -> usize {
        BEFORE_TABLE_OFFSET + Constant::BeforeTable.size() + row_ct * SECTION_HEADER_LEN
    }

    /// Decode a complete parameter file. Every byte of `bytes` must be accounted for.
    pub fn decode(bytes: &[u8]) -> Result<ParamFile, DecodeError> {
        let mut cursor = ByteCursor::new(bytes);
        let mut file = ParamFile::default();

        Constant::Magic.expect(&mut cursor)?;
        file.storage_mode = Self::decode_storage_mode(&mut cursor)?;
        file.asdasoft_version_string = Self::decode_version_string(&mut cursor)?;
        log::debug!(
            "Storage mode: {} ASDA-Soft version: '{}'",
            file.storage_mode,
            file.asdasoft_version_string
        );

        Constant::BeforeTable.expect(&mut cursor)?;
        file.section_table = SectionTable::decode(&mut cursor)?;
        Self::decode_sections(&mut cursor, &mut file)?;

        if !cursor.at_end() {
            return Err(DecodeError::TrailingBytes {
                offset: cursor.position(),
                length: bytes.len(),
            });
        }
        Ok(file)
    }

    fn decode_storage_mode(cursor: &mut ByteCursor) -> Result<u32, DecodeError> {
        let offset = cursor.position();
        let value = cursor.read_u32()?;
        if !STORAGE_MODES.contains(&value) {
            return Err(DecodeError::InvalidStorageMode { offset, value });
        }
        Ok(value)
    }

    /// The version string is the text up to the first NUL. The rest of the field must be exactly
    /// the padding that encoding the text would produce.
    fn decode_version_string(cursor: &mut ByteCursor) -> Result<String, DecodeError> {
        let start = cursor.position();
        let field = cursor.read_bytes(VERSION_STRING_LEN)?;
        let text_len = field.iter().position(|&b| b == 0).unwrap_or(field.len());

        let text = std::str::from_utf8(&field[..text_len])
            .map_err(|_| DecodeError::InvalidVersionString { offset: start })?;

        compare_bytes(start, &pad_version_string(text.as_bytes()), field)?;
        Ok(text.to_string())
    }

    fn decode_sections(cursor: &mut ByteCursor, file: &mut ParamFile) -> Result<(), DecodeError> {
        // The table is detached while sections populate the rest of the file.
        let mut table = std::mem::take(&mut file.section_table);

        for (index, entry) in table.iter_mut().enumerate() {
            let (length, expected_end) = SectionFramer::decode_header(cursor, index, entry)?;
            entry.length = length;

            let section_type = SectionType::from_tag(entry.section_type).ok_or(DecodeError::UnknownSectionType {
                section_index: index,
                section_type: entry.section_type,
                offset: entry.offset as usize,
            })?;

            log::debug!(
                "Decoding section #{}: {} @ 0x{:04X} length: 0x{:04X}",
                index,
                section_type,
                entry.offset,
                length
            );
            sections::decode_payload(section_type, cursor, file)?;

            if cursor.position() != expected_end {
                return Err(DecodeError::SectionLengthMismatch {
                    section_index: index,
                    section_type: entry.section_type,
                    expected_end,
                    actual_end: cursor.position(),
                });
            }
        }

        file.section_table = table;
        Ok(())
    }

    /// Encode a parameter file. Every section must be produced at the offset and with the length
    /// recorded in the file's section table.
    pub fn encode(file: &ParamFile) -> Result<Vec<u8>, EncodeError> {
        // A decoder always reads at least one table row.
        if file.section_table.is_empty() {
            return Err(EncodeError::EmptySectionTable);
        }
        let mut out = ByteWriter::new();

        Constant::Magic.emit(&mut out);
        if !STORAGE_MODES.contains(&file.storage_mode) {
            return Err(EncodeError::InvalidStorageMode {
                value: file.storage_mode,
            });
        }
        out.write_u32(file.storage_mode);
        out.write_bytes(&Self::encode_version_string(&file.asdasoft_version_string)?);
        Constant::BeforeTable.emit(&mut out);
        SectionTable::encode(&mut out, &file.section_table)?;

        for (index, entry) in file.section_table.iter().enumerate() {
            if entry.offset as usize != out.position() {
                return Err(EncodeError::OffsetMismatch {
                    section_index: index,
                    section_type: entry.section_type,
                    expected: entry.offset,
                    actual: out.position(),
                });
            }

            let section = Self::encode_section(file, index, entry.section_type)?;
            let length = section.len() as u32;
            if entry.length != length {
                return Err(EncodeError::LengthMismatch {
                    section_index: index,
                    section_type: entry.section_type,
                    expected: entry.length,
                    actual: length,
                });
            }
            out.write_bytes(&section);
        }

        log::debug!("Encoded {} sections, {} bytes", file.section_table.len(), out.position());
        Ok(out.into_inner())
    }

    fn encode_version_string(text: &str) -> Result<[u8; VERSION_STRING_LEN], EncodeError> {
        let bytes = text.as_bytes();
        if bytes.len() > VERSION_STRING_LEN {
            return Err(EncodeError::VersionStringTooLong {
                length: bytes.len(),
                max: VERSION_STRING_LEN,
            });
        }
        if let Some(position) = bytes.iter().position(|&b| b == 0) {
            return Err(EncodeError::VersionStringContainsNul { position });
        }
        Ok(pad_version_string(bytes))
    }

    /// Encode one complete section, header included.
    fn encode_section(file: &ParamFile, index: usize, tag: u16) -> Result<Vec<u8>, EncodeError> {
        let section_type = SectionType::from_tag(tag).ok_or(EncodeError::UnknownSectionType {
            section_index: index,
            section_type: tag,
        })?;

        let mut payload = ByteWriter::new();
        sections::encode_payload(section_type, file, &mut payload)?;

        let mut section = ByteWriter::new();
        let length = SectionFramer::encode_header(&mut section, tag, payload.position())?;
        section.write_bytes(payload.as_slice());

        log::debug!("Encoded section #{}: {} length: 0x{:04X}", index, section_type, length);
        Ok(section.into_inner())
    }

    pub(crate) fn section_length(file: &ParamFile, index: usize, tag: u16) -> Result<u32, EncodeError> {
        Ok(Self::encode_section(file, index, tag)?.len() as u32)
    }
}

/// Place `text` at the start of a zero-filled version string field. `text` must fit.
fn pad_version_string(text: &[u8]) -> [u8; VERSION_STRING_LEN] {
    let mut field = [0u8; VERSION_STRING_LEN];
    field[..text.len()].copy_from_slice(text);
    field
}
