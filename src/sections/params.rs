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

    src/sections/params.rs

    Sections 0x0018 (current values) and 0x0006 (max/min/default/unit).

    Both are lists of rows terminated by an all-zero sentinel row. Rows are
    written in ascending key order. The limits of section 0x0006 are stored
    word swapped.
*/

use crate::{
    constants::Constant,
    cursor::{ByteCursor, ByteWriter, Record},
    param_file::ParamFile,
    params::{ParamKey, ParamLimits},
    section::SectionType,
    sections::SectionCodec,
    swap::swap_words,
    DecodeError,
    EncodeError,
};
use binrw::binrw;

#[derive(Debug, Default)]
#[binrw]
#[brw(little)]
struct CurrentParamRow {
    block_id: u16,
    param_id: u16,
    value: u32,
}

impl Record for CurrentParamRow {
    const SIZE: usize = 8;
}

impl CurrentParamRow {
    fn is_sentinel(&self) -> bool {
        self.block_id == 0 && self.param_id == 0 && self.value == 0
    }
}

#[derive(Debug, Default)]
#[binrw]
#[brw(little)]
struct LimitsRow {
    block_id: u16,
    param_id: u16,
    #[br(map = |v: u32| swap_words(v))]
    #[bw(map = |v: &u32| swap_words(*v))]
    max: u32,
    #[br(map = |v: u32| swap_words(v))]
    #[bw(map = |v: &u32| swap_words(*v))]
    min: u32,
    #[br(map = |v: u32| swap_words(v))]
    #[bw(map = |v: &u32| swap_words(*v))]
    default: u32,
}

impl Record for LimitsRow {
    const SIZE: usize = 16;
}

impl LimitsRow {
    fn is_sentinel(&self) -> bool {
        self.block_id == 0 && self.param_id == 0 && self.max == 0 && self.min == 0 && self.default == 0
    }
}

pub(crate) struct CurrentParamsSection;

impl SectionCodec for CurrentParamsSection {
    const SECTION_TYPE: SectionType = SectionType::CurrentParams;

    fn decode(cursor: &mut ByteCursor, file: &mut ParamFile) -> Result<(), DecodeError> {
        let mut row_ct = 0;
        loop {
            let row = cursor.read_record::<CurrentParamRow>()?;
            if row.is_sentinel() {
                break;
            }
            let key = ParamKey::new(row.block_id, row.param_id);
            log::trace!("Current value: {} = {}", key, row.value);
            file.params.entry(key).or_default().current = Some(row.value);
            row_ct += 1;
        }
        log::debug!("Read {} current parameter values", row_ct);
        Ok(())
    }

    fn encode(file: &ParamFile, out: &mut ByteWriter) -> Result<(), EncodeError> {
        for (key, entry) in &file.params {
            let value = entry.current.ok_or(EncodeError::MissingParamField {
                key: *key,
                field: "current",
            })?;
            let row = CurrentParamRow {
                block_id: key.block_id,
                param_id: key.param_id,
                value,
            };
            if row.is_sentinel() {
                return Err(EncodeError::SentinelCollision {
                    section_type: Self::SECTION_TYPE.tag(),
                    key: *key,
                });
            }
            out.write_record(&row)?;
        }
        out.write_record(&CurrentParamRow::default())
    }
}

pub(crate) struct MaxMinDefaultUnitSection;

impl SectionCodec for MaxMinDefaultUnitSection {
    const SECTION_TYPE: SectionType = SectionType::MaxMinDefaultUnit;

    fn decode(cursor: &mut ByteCursor, file: &mut ParamFile) -> Result<(), DecodeError> {
        let mut row_ct = 0;
        loop {
            let offset = cursor.position();
            let row = cursor.read_record::<LimitsRow>()?;
            if row.is_sentinel() {
                break;
            }
            let unit = cursor.read_u16()?;
            Constant::UnitFiller.expect(cursor)?;

            let key = ParamKey::new(row.block_id, row.param_id);
            let entry = file
                .params
                .get_mut(&key)
                .ok_or(DecodeError::UnknownParamKey { offset, key })?;

            log::trace!(
                "Limits: {} max: {} min: {} default: {} unit: {}",
                key,
                row.max,
                row.min,
                row.default,
                unit
            );
            entry.set_limits(ParamLimits {
                max: row.max,
                min: row.min,
                default: row.default,
                unit,
            });
            row_ct += 1;
        }
        log::debug!("Read {} parameter limits", row_ct);
        Ok(())
    }

    fn encode(file: &ParamFile, out: &mut ByteWriter) -> Result<(), EncodeError> {
        for (key, entry) in &file.params {
            let limits = entry
                .limits()
                .map_err(|field| EncodeError::MissingParamField { key: *key, field })?;
            let row = LimitsRow {
                block_id: key.block_id,
                param_id: key.param_id,
                max: limits.max,
                min: limits.min,
                default: limits.default,
            };
            if row.is_sentinel() {
                return Err(EncodeError::SentinelCollision {
                    section_type: Self::SECTION_TYPE.tag(),
                    key: *key,
                });
            }
            out.write_record(&row)?;
            out.write_u16(limits.unit);
            Constant::UnitFiller.emit(out);
        }
        out.write_record(&LimitsRow::default())
    }
}
