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

    src/cursor.rs

    Forward-only byte reader and writer used by every decode and encode pass.

    Fixed-size records (section headers, table rows, parameter rows) are
    described with binrw. A record is always sliced out of the input first,
    so running out of bytes is reported as a truncation at the record's
    offset rather than as a binrw error.
*/

use crate::{DecodeError, EncodeError};
use binrw::{
    meta::{ReadEndian, WriteEndian},
    BinRead,
    BinWrite,
};
use std::io::Cursor;

/// A fixed-size binrw record with a known on-disk size.
pub trait Record {
    const SIZE: usize;
}

/// A position-tracking view over an immutable byte buffer. The position only ever increases.
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        ByteCursor { buf, pos: 0 }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    #[inline]
    pub fn at_end(&self) -> bool {
        self.pos == self.buf.len()
    }

    /// Return the next `n` bytes and advance past them.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        if self.remaining() < n {
            return Err(DecodeError::TruncatedInput {
                offset: self.pos,
                needed: n,
                remaining: self.remaining(),
            });
        }
        let bytes = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let mut array = [0u8; N];
        array.copy_from_slice(self.read_bytes(N)?);
        Ok(array)
    }

    pub fn read_u16(&mut self) -> Result<u16, DecodeError> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    pub fn read_u32(&mut self) -> Result<u32, DecodeError> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    /// Read `expected.len()` bytes and fail at the first byte that differs.
    pub fn expect(&mut self, expected: &[u8]) -> Result<(), DecodeError> {
        let start = self.pos;
        let actual = self.read_bytes(expected.len())?;
        compare_bytes(start, expected, actual)
    }

    /// Read `n` bytes that must all be zero.
    pub fn expect_zeros(&mut self, n: usize) -> Result<(), DecodeError> {
        let start = self.pos;
        let actual = self.read_bytes(n)?;
        match actual.iter().position(|&b| b != 0) {
            Some(i) => Err(DecodeError::ConstantMismatch {
                offset: start + i,
                expected: 0,
                actual: actual[i],
            }),
            None => Ok(()),
        }
    }

    /// Read a little-endian binrw record.
    pub fn read_record<R>(&mut self) -> Result<R, DecodeError>
    where
        R: Record + BinRead + ReadEndian,
        for<'b> <R as BinRead>::Args<'b>: Default,
    {
        let offset = self.pos;
        let bytes = self.read_bytes(R::SIZE)?;
        R::read(&mut Cursor::new(bytes)).map_err(|source| DecodeError::Record { offset, source })
    }
}

/// Compare a decoded byte run against its expected value, reporting the first difference at its
/// absolute offset.
pub(crate) fn compare_bytes(start: usize, expected: &[u8], actual: &[u8]) -> Result<(), DecodeError> {
    match expected.iter().zip(actual).position(|(e, a)| e != a) {
        Some(i) => Err(DecodeError::ConstantMismatch {
            offset: start + i,
            expected: expected[i],
            actual: actual[i],
        }),
        None => Ok(()),
    }
}

/// Check that a run of reserved bytes is zero.
pub(crate) fn check_reserved(start: usize, reserved: &[u8]) -> Result<(), DecodeError> {
    match reserved.iter().position(|&b| b != 0) {
        Some(i) => Err(DecodeError::ReservedBytesNonZero {
            offset: start + i,
            actual: reserved[i],
        }),
        None => Ok(()),
    }
}

/// An append-only output buffer, the encoding counterpart of [`ByteCursor`].
#[derive(Default)]
pub struct ByteWriter {
    buf: Vec<u8>,
}

impl ByteWriter {
    pub fn new() -> Self {
        ByteWriter { buf: Vec::new() }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.buf.len()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    pub fn write_zeros(&mut self, n: usize) {
        self.buf.resize(self.buf.len() + n, 0);
    }

    pub fn write_u16(&mut self, value: u16) {
        self.write_bytes(&value.to_le_bytes());
    }

    pub fn write_u32(&mut self, value: u32) {
        self.write_bytes(&value.to_le_bytes());
    }

    /// Write a little-endian binrw record.
    pub fn write_record<R>(&mut self, record: &R) -> Result<(), EncodeError>
    where
        R: Record + BinWrite + WriteEndian,
        for<'b> <R as BinWrite>::Args<'b>: Default,
    {
        // Serialize the record to a buffer first, so a failed write leaves no partial record.
        let mut record_buf = Cursor::new(Vec::with_capacity(R::SIZE));
        record.write(&mut record_buf)?;
        self.buf.extend_from_slice(record_buf.get_ref());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_bytes_advances_position() {
        let data = [1u8, 2, 3, 4, 5];
        let mut cursor = ByteCursor::new(&data);
        assert_eq!(cursor.read_bytes(2).unwrap(), &[1, 2]);
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.read_bytes(3).unwrap(), &[3, 4, 5]);
        assert!(cursor.at_end());
    }

    #[test]
    fn read_past_end_is_truncation() {
        let data = [1u8, 2, 3];
        let mut cursor = ByteCursor::new(&data);
        cursor.read_bytes(2).unwrap();
        match cursor.read_u32() {
            Err(DecodeError::TruncatedInput {
                offset,
                needed,
                remaining,
            }) => {
                assert_eq!(offset, 2);
                assert_eq!(needed, 4);
                assert_eq!(remaining, 1);
            }
            other => panic!("expected TruncatedInput, got {:?}", other),
        }
    }

    #[test]
    fn integers_are_little_endian() {
        let data = [0x34u8, 0x12, 0x78, 0x56, 0x34, 0x12];
        let mut cursor = ByteCursor::new(&data);
        assert_eq!(cursor.read_u16().unwrap(), 0x1234);
        assert_eq!(cursor.read_u32().unwrap(), 0x1234_5678);
    }

    #[test]
    fn expect_reports_first_differing_byte() {
        let data = [0xAAu8, 0xBB, 0xCC, 0xDD];
        let mut cursor = ByteCursor::new(&data);
        cursor.read_bytes(1).unwrap();
        match cursor.expect(&[0xBB, 0xCD, 0xDD]) {
            Err(DecodeError::ConstantMismatch {
                offset,
                expected,
                actual,
            }) => {
                assert_eq!(offset, 2);
                assert_eq!(expected, 0xCD);
                assert_eq!(actual, 0xCC);
            }
            other => panic!("expected ConstantMismatch, got {:?}", other),
        }
    }

    #[test]
    fn expect_zeros_accepts_zero_run() {
        let data = [0u8; 8];
        let mut cursor = ByteCursor::new(&data);
        cursor.expect_zeros(8).unwrap();
        assert!(cursor.at_end());
    }

    #[test]
    fn writer_appends_little_endian() {
        let mut out = ByteWriter::new();
        out.write_u16(0x0102);
        out.write_u32(0x0304_0506);
        out.write_zeros(2);
        assert_eq!(out.position(), 8);
        assert_eq!(out.into_inner(), vec![0x02, 0x01, 0x06, 0x05, 0x04, 0x03, 0, 0]);
    }
}
