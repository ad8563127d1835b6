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

    tests/common/mod.rs

    Common support routines for tests.

    Builds parameter files byte by byte, independently of the library's
    encoder, so that decoding is checked against a known layout.
*/
#![allow(dead_code)]

use hex::encode;
use sha1::{Digest, Sha1};

pub const MAGIC: [u8; 12] = [0x30, 0x67, 0x05, 0x10, 0x00, 0x00, 0x04, 0x00, 0x03, 0x00, 0x00, 0x00];
pub const VERSION_FIELD_OFFSET: usize = 0x10;
pub const BEFORE_TABLE_OFFSET: usize = 0x80;
pub const TABLE_OFFSET: usize = 0xA0;
pub const ROW_LEN: usize = 16;

pub const FIRMWARE_PREFIX_1: [u8; 8] = [0x01, 0x00, 0x00, 0x00, 0xF4, 0x01, 0x00, 0x00];
pub const FIRMWARE_PREFIX_2: [u8; 4] = [0x01, 0x00, 0x00, 0x00];

pub fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn compute_slice_hash(slice: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(slice);
    let result = hasher.finalize();

    encode(result)
}

pub fn before_table() -> Vec<u8> {
    let mut block = vec![0u8; 32];
    block[2] = 0x80;
    block[6] = 0x07;
    block[18] = 0x80;
    block
}

pub fn section2_leading() -> Vec<u8> {
    let mut block = vec![0u8; 16];
    block[0] = 0x08;
    block.extend_from_slice(&[0x00, 0x00, 0x40, 0x00, 0x01, 0x00, 0x63, 0x00, 0x02, 0x00]);
    block
}

pub fn section2_trailing() -> Vec<u8> {
    let mut block = vec![0x03, 0x00, 0x0E, 0x00];
    block.extend_from_slice(&[
        0x04, 0x00, 0x19, 0x00, 0x05, 0x00, 0x64, 0x00, 0x06, 0x00, 0x64, 0x00, 0x07, 0x00, 0x1C, 0x00,
    ]);
    block.extend_from_slice(&[0u8; 16]);
    block
}

pub fn unit_filler() -> Vec<u8> {
    let mut block = vec![0u8; 30];
    block[3] = 0x20;
    block[9] = 0x20;
    block
}

fn swap(value: u32) -> u32 {
    (value << 16) | (value >> 16)
}

#[derive(Copy, Clone, Debug)]
pub struct TestParam {
    pub block: u16,
    pub param: u16,
    pub current: u32,
    pub max: u32,
    pub min: u32,
    pub default: u32,
    pub unit: u16,
}

#[derive(Clone, Debug)]
pub enum TestSection {
    Firmware { version: u32, subversion: u32 },
    Unknown2(u16),
    Current,
    Limits,
    Null,
    NumberedNull,
    Raw { section_type: u16, payload: Vec<u8> },
}

impl TestSection {
    pub fn section_type(&self) -> u16 {
        match self {
            TestSection::Firmware { .. } => 0x0001,
            TestSection::Unknown2(_) => 0x0002,
            TestSection::Current => 0x0018,
            TestSection::Limits => 0x0006,
            TestSection::Null => 0x0007,
            TestSection::NumberedNull => 0x0008,
            TestSection::Raw { section_type, .. } => *section_type,
        }
    }

    pub fn payload(&self, params: &[TestParam]) -> Vec<u8> {
        let mut p = Vec::new();
        match self {
            TestSection::Firmware { version, subversion } => {
                p.extend_from_slice(&FIRMWARE_PREFIX_1);
                p.extend_from_slice(&version.to_le_bytes());
                p.extend_from_slice(&version.to_le_bytes());
                p.extend_from_slice(&FIRMWARE_PREFIX_2);
                p.extend_from_slice(&subversion.to_le_bytes());
                p.extend_from_slice(&subversion.to_le_bytes());
                p.extend_from_slice(&[0u8; 100]);
            }
            TestSection::Unknown2(value) => {
                p.extend(section2_leading());
                p.extend_from_slice(&value.to_le_bytes());
                p.extend(section2_trailing());
            }
            TestSection::Current => {
                for param in params {
                    p.extend_from_slice(&param.block.to_le_bytes());
                    p.extend_from_slice(&param.param.to_le_bytes());
                    p.extend_from_slice(&param.current.to_le_bytes());
                }
                p.extend_from_slice(&[0u8; 8]);
            }
            TestSection::Limits => {
                for param in params {
                    p.extend_from_slice(&param.block.to_le_bytes());
                    p.extend_from_slice(&param.param.to_le_bytes());
                    p.extend_from_slice(&swap(param.max).to_le_bytes());
                    p.extend_from_slice(&swap(param.min).to_le_bytes());
                    p.extend_from_slice(&swap(param.default).to_le_bytes());
                    p.extend_from_slice(&param.unit.to_le_bytes());
                    p.extend(unit_filler());
                }
                p.extend_from_slice(&[0u8; 16]);
            }
            TestSection::Null => p.extend_from_slice(&[0u8; 0x30]),
            TestSection::NumberedNull => {
                p.extend_from_slice(&0x40u16.to_le_bytes());
                p.extend_from_slice(&[0u8; 14]);
                for i in 0..0x40u16 {
                    p.extend_from_slice(&i.to_le_bytes());
                    p.extend_from_slice(&[0u8; 14 + 0x80]);
                }
            }
            TestSection::Raw { payload, .. } => p.extend_from_slice(payload),
        }
        p
    }
}

/// Build a complete parameter file. Parameters are written in ascending key order.
pub fn build_file(storage_mode: u32, version: &str, sections: &[TestSection], params: &[TestParam]) -> Vec<u8> {
    let mut params = params.to_vec();
    params.sort_by_key(|p| (p.block, p.param));

    let mut file = Vec::new();
    file.extend_from_slice(&MAGIC);
    file.extend_from_slice(&storage_mode.to_le_bytes());
    let mut version_field = vec![0u8; 0x70];
    version_field[..version.len()].copy_from_slice(version.as_bytes());
    file.extend(version_field);
    file.extend(before_table());
    assert_eq!(file.len(), TABLE_OFFSET);

    let payloads: Vec<Vec<u8>> = sections.iter().map(|s| s.payload(&params)).collect();

    let mut offset = TABLE_OFFSET + sections.len() * ROW_LEN;
    for (section, payload) in sections.iter().zip(&payloads) {
        file.extend_from_slice(&section.section_type().to_le_bytes());
        file.extend_from_slice(&(offset as u32).to_le_bytes());
        file.extend_from_slice(&[0u8; 10]);
        offset += ROW_LEN + payload.len();
    }

    for (section, payload) in sections.iter().zip(&payloads) {
        file.extend_from_slice(&section.section_type().to_le_bytes());
        file.extend_from_slice(&((ROW_LEN + payload.len()) as u32).to_le_bytes());
        file.extend_from_slice(&[0u8; 10]);
        file.extend_from_slice(payload);
    }
    assert_eq!(file.len(), offset);
    file
}

pub fn sample_params() -> Vec<TestParam> {
    vec![
        TestParam {
            block: 1,
            param: 1,
            current: 0x0000_0102,
            max: 0x0000_1127,
            min: 0,
            default: 0x0000_0002,
            unit: 0,
        },
        TestParam {
            block: 0,
            param: 0,
            current: 0x0000_3D0A,
            max: 0xFFFF_FFFF,
            min: 0,
            default: 0,
            unit: 0,
        },
        TestParam {
            block: 0,
            param: 1,
            current: 0,
            max: 0x0001_0000,
            min: 0xFFFF_0001,
            default: 0x0000_0001,
            unit: 0x000A,
        },
        TestParam {
            block: 6,
            param: 27,
            current: 0x8000_0000,
            max: 0x7FFF_FFFF,
            min: 0x8000_0000,
            default: 0x0001_86A0,
            unit: 0x0104,
        },
        TestParam {
            block: 1,
            param: 44,
            current: 0x0000_2710,
            max: 0x0098_967F,
            min: 0x0000_0001,
            default: 0x0000_2710,
            unit: 0x0021,
        },
    ]
}

pub fn sample_sections() -> Vec<TestSection> {
    vec![
        TestSection::Firmware {
            version: 0x0000_019A,
            subversion: 0x0000_0003,
        },
        TestSection::Unknown2(0x0001),
        TestSection::Current,
        TestSection::Limits,
        TestSection::Null,
        TestSection::NumberedNull,
        TestSection::Null,
    ]
}

pub const SAMPLE_VERSION: &str = "ASDA-Soft V5.4.6.0";

/// A parameter file with every section type.
pub fn sample_file() -> Vec<u8> {
    build_file(1, SAMPLE_VERSION, &sample_sections(), &sample_params())
}

/// The smallest supported file: no parameters, a single null block section.
pub fn minimal_file() -> Vec<u8> {
    build_file(1, "", &[TestSection::Null], &[])
}

/// Offset of section `index` in a file built from `sections`.
pub fn section_offset(sections: &[TestSection], params: &[TestParam], index: usize) -> usize {
    let mut params = params.to_vec();
    params.sort_by_key(|p| (p.block, p.param));
    let mut offset = TABLE_OFFSET + sections.len() * ROW_LEN;
    for section in &sections[..index] {
        offset += ROW_LEN + section.payload(&params).len();
    }
    offset
}
