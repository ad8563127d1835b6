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

    src/section.rs

    Section framing and the section table.

    Every section starts with a 16 byte header: a u16 type tag, a u32 length
    that includes the header, and 10 reserved zero bytes. The section table
    that precedes the sections uses the same row shape with an offset in
    place of the length, and does not store its own row count.
*/

use crate::{
    cursor::{check_reserved, ByteCursor, ByteWriter, Record},
    DecodeError,
    EncodeError,
};
use binrw::binrw;
use std::{
    fmt,
    fmt::{Display, Formatter},
};
use strum::FromRepr;

/// Size of a section header, which is also the size of a section table row.
pub const SECTION_HEADER_LEN: usize = 16;
const RESERVED_LEN: usize = 10;

/// The closed set of known section types.
#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromRepr)]
pub enum SectionType {
    FirmwareVersion = 0x0001,
    Unknown2 = 0x0002,
    MaxMinDefaultUnit = 0x0006,
    NullBlock = 0x0007,
    NumberedNullBlocks = 0x0008,
    CurrentParams = 0x0018,
}

impl SectionType {
    pub fn tag(self) -> u16 {
        self as u16
    }

    pub fn from_tag(tag: u16) -> Option<SectionType> {
        SectionType::from_repr(tag)
    }
}

impl Display for SectionType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let name = match self {
            SectionType::FirmwareVersion => "Firmware version",
            SectionType::Unknown2 => "Unknown (0x0002)",
            SectionType::MaxMinDefaultUnit => "Max/min/default/unit",
            SectionType::NullBlock => "Null block",
            SectionType::NumberedNullBlocks => "Numbered null blocks",
            SectionType::CurrentParams => "Current values",
        };
        write!(f, "{} (0x{:04X})", name, self.tag())
    }
}

#[derive(Debug, Default)]
#[binrw]
#[brw(little)]
pub(crate) struct SectionHeader {
    pub section_type: u16,
    pub length: u32,
    pub reserved: [u8; RESERVED_LEN],
}

impl Record for SectionHeader {
    const SIZE: usize = SECTION_HEADER_LEN;
}

#[derive(Debug, Default)]
#[binrw]
#[brw(little)]
pub(crate) struct SectionTableRow {
    pub section_type: u16,
    pub offset: u32,
    pub reserved: [u8; RESERVED_LEN],
}

impl Record for SectionTableRow {
    const SIZE: usize = SECTION_HEADER_LEN;
}

/// One row of the section table. The length is not stored in the table itself; it is taken from
/// the section's own header when the section is decoded.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionTableEntry {
    #[cfg_attr(feature = "serde", serde(rename = "type", alias = "section_type"))]
    pub section_type: u16,
    #[cfg_attr(feature = "serde", serde(rename = "offset", alias = "section_offset"))]
    pub offset: u32,
    #[cfg_attr(feature = "serde", serde(rename = "length", alias = "section_length", default))]
    pub length: u32,
}

impl SectionTableEntry {
    pub fn new(section_type: u16, offset: u32) -> Self {
        SectionTableEntry {
            section_type,
            offset,
            length: 0,
        }
    }

    pub fn end(&self) -> usize {
        self.offset as usize + self.length as usize
    }
}

/// Reads and writes section headers.
pub struct SectionFramer;

impl SectionFramer {
    /// Decode the header of the section at `index` of the table, checking it against the table's
    /// entry for that slot. Returns the section's declared length and end offset.
    pub fn decode_header(
        cursor: &mut ByteCursor,
        index: usize,
        entry: &SectionTableEntry,
    ) -> Result<(u32, usize), DecodeError> {
        let start = cursor.position();
        if start != entry.offset as usize {
            return Err(DecodeError::SectionOffsetMismatch {
                section_index: index,
                section_type: entry.section_type,
                expected: entry.offset as usize,
                actual: start,
            });
        }

        let header = cursor.read_record::<SectionHeader>()?;
        check_reserved(start + 6, &header.reserved)?;

        if header.section_type != entry.section_type {
            return Err(DecodeError::SectionTypeMismatch {
                section_index: index,
                offset: start,
                expected: entry.section_type,
                actual: header.section_type,
            });
        }

        log::trace!(
            "Section #{} header @ 0x{:04X}: type 0x{:04X} length 0x{:04X}",
            index,
            start,
            header.section_type,
            header.length
        );
        Ok((header.length, start + header.length as usize))
    }

    /// Write a section header for a payload of `content_length` bytes. Returns the total section
    /// length written into the header.
    pub fn encode_header(
        out: &mut ByteWriter,
        section_type: u16,
        content_length: usize,
    ) -> Result<u32, EncodeError> {
        let length = (content_length + SECTION_HEADER_LEN) as u32;
        out.write_record(&SectionHeader {
            section_type,
            length,
            ..Default::default()
        })?;
        Ok(length)
    }
}

/// Reads and writes the section table.
pub struct SectionTable;

impl SectionTable {
    /// Decode a single table row.
    pub fn decode_row(cursor: &mut ByteCursor) -> Result<SectionTableEntry, DecodeError> {
        let start = cursor.position();
        let row = cursor.read_record::<SectionTableRow>()?;
        check_reserved(start + 6, &row.reserved)?;
        log::trace!(
            "Section table row @ 0x{:04X}: type 0x{:04X} offset 0x{:04X}",
            start,
            row.section_type,
            row.offset
        );
        Ok(SectionTableEntry::new(row.section_type, row.offset))
    }

    /// Decode the section table. The table has no row count; it occupies the bytes up to the first
    /// section, so rows are read until the lowest section offset seen so far is no greater than
    /// the cursor position.
    pub fn decode(cursor: &mut ByteCursor) -> Result<Vec<SectionTableEntry>, DecodeError> {
        let mut entries = Vec::new();
        let mut min_offset = usize::MAX;

        loop {
            let entry = SectionTable::decode_row(cursor)?;
            min_offset = min_offset.min(entry.offset as usize);
            entries.push(entry);

            if cursor.position() >= min_offset {
                break;
            }
        }

        log::debug!(
            "Section table: {} rows, sections begin at 0x{:04X}",
            entries.len(),
            min_offset
        );
        Ok(entries)
    }

    /// Encode one row per entry, in order. There is no terminator row.
    pub fn encode(out: &mut ByteWriter, entries: &[SectionTableEntry]) -> Result<(), EncodeError> {
        for entry in entries {
            out.write_record(&SectionTableRow {
                section_type: entry.section_type,
                offset: entry.offset,
                ..Default::default()
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_bytes(rows: &[(u16, u32)]) -> Vec<u8> {
        let mut out = ByteWriter::new();
        let entries: Vec<_> = rows.iter().map(|&(t, o)| SectionTableEntry::new(t, o)).collect();
        SectionTable::encode(&mut out, &entries).unwrap();
        out.into_inner()
    }

    #[test]
    fn section_type_tags() {
        assert_eq!(SectionType::from_tag(0x0018), Some(SectionType::CurrentParams));
        assert_eq!(SectionType::from_tag(0x0006), Some(SectionType::MaxMinDefaultUnit));
        assert_eq!(SectionType::from_tag(0x00FF), None);
        assert_eq!(SectionType::NumberedNullBlocks.tag(), 0x0008);
    }

    #[test]
    fn table_row_layout() {
        let bytes = table_bytes(&[(0x0018, 0x1F0)]);
        assert_eq!(bytes.len(), SECTION_HEADER_LEN);
        assert_eq!(&bytes[0..6], &[0x18, 0x00, 0xF0, 0x01, 0x00, 0x00]);
        assert!(bytes[6..].iter().all(|&b| b == 0));
    }

    #[test]
    fn table_stops_at_lowest_offset() {
        // Five rows are present, but the third row points at 0x30, which the cursor has reached
        // once three rows are read.
        let bytes = table_bytes(&[(0x0001, 0x40), (0x0002, 0x60), (0x0007, 0x30), (0x0007, 0x70), (0x0008, 0x80)]);
        let mut cursor = ByteCursor::new(&bytes);
        let entries = SectionTable::decode(&mut cursor).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(cursor.position(), 0x30);
        assert_eq!(entries[2], SectionTableEntry::new(0x0007, 0x30));
    }

    #[test]
    fn table_grows_until_first_section() {
        let bytes = table_bytes(&[(0x0001, 0x30), (0x0018, 0x50), (0x0006, 0x40)]);
        let mut cursor = ByteCursor::new(&bytes);
        let entries = SectionTable::decode(&mut cursor).unwrap();
        assert_eq!(entries.len(), 3);
        assert!(cursor.at_end());
    }

    #[test]
    fn table_with_single_row() {
        let bytes = table_bytes(&[(0x0007, 0x10), (0x0008, 0x20)]);
        let mut cursor = ByteCursor::new(&bytes);
        let entries = SectionTable::decode(&mut cursor).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(cursor.position(), 0x10);
    }

    #[test]
    fn table_row_reserved_bytes_checked() {
        let mut bytes = table_bytes(&[(0x0007, 0x10)]);
        bytes[9] = 0x01;
        let mut cursor = ByteCursor::new(&bytes);
        match SectionTable::decode(&mut cursor) {
            Err(DecodeError::ReservedBytesNonZero { offset, actual }) => {
                assert_eq!(offset, 9);
                assert_eq!(actual, 0x01);
            }
            other => panic!("expected ReservedBytesNonZero, got {:?}", other),
        }
    }

    #[test]
    fn table_running_out_of_bytes_is_truncation() {
        let bytes = table_bytes(&[(0x0007, 0x40)]);
        let mut cursor = ByteCursor::new(&bytes);
        assert!(matches!(
            SectionTable::decode(&mut cursor),
            Err(DecodeError::TruncatedInput { offset: 0x10, .. })
        ));
    }

    #[test]
    fn header_round_trip() {
        let mut out = ByteWriter::new();
        let length = SectionFramer::encode_header(&mut out, 0x0007, 0x30).unwrap();
        assert_eq!(length, 0x40);
        out.write_zeros(0x30);
        let bytes = out.into_inner();

        let entry = SectionTableEntry::new(0x0007, 0);
        let mut cursor = ByteCursor::new(&bytes);
        let (length, end) = SectionFramer::decode_header(&mut cursor, 0, &entry).unwrap();
        assert_eq!(length, 0x40);
        assert_eq!(end, bytes.len());
        assert_eq!(cursor.position(), SECTION_HEADER_LEN);
    }

    #[test]
    fn header_type_must_match_table() {
        let mut out = ByteWriter::new();
        SectionFramer::encode_header(&mut out, 0x0008, 0).unwrap();
        let bytes = out.into_inner();

        let entry = SectionTableEntry::new(0x0007, 0);
        let mut cursor = ByteCursor::new(&bytes);
        match SectionFramer::decode_header(&mut cursor, 3, &entry) {
            Err(DecodeError::SectionTypeMismatch {
                section_index,
                expected,
                actual,
                ..
            }) => {
                assert_eq!(section_index, 3);
                assert_eq!(expected, 0x0007);
                assert_eq!(actual, 0x0008);
            }
            other => panic!("expected SectionTypeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn header_must_start_at_table_offset() {
        let bytes = [0u8; 32];
        let entry = SectionTableEntry::new(0x0007, 4);
        let mut cursor = ByteCursor::new(&bytes);
        assert!(matches!(
            SectionFramer::decode_header(&mut cursor, 0, &entry),
            Err(DecodeError::SectionOffsetMismatch {
                expected: 4,
                actual: 0,
                ..
            })
        ));
    }
}
