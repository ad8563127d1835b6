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

    src/param_file.rs

    The decoded parameter file.
*/

use crate::{
    codec::ParamFileCodec,
    params::{ParamEntry, ParamKey},
    section::SectionTableEntry,
    validate::RoundTripValidator,
    DecodeOptions,
    EncodeError,
    ParamFileError,
};
use std::{collections::BTreeMap, path::Path};

/// A fully decoded parameter file.
///
/// A `ParamFile` is populated by a single decode pass, in section table order. Fields that come
/// from an optional section (0x0001, 0x0002) are `None` if the file has no such section. The
/// section table is kept as read, so that encoding reproduces the same layout.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParamFile {
    pub storage_mode: u32,
    pub asdasoft_version_string: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub firmware_version: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub firmware_subversion: Option<u32>,
    #[cfg_attr(
        feature = "serde",
        serde(default, alias = "0002_unknown_x", skip_serializing_if = "Option::is_none")
    )]
    pub section2_value: Option<u16>,
    pub section_table: Vec<SectionTableEntry>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub params: BTreeMap<ParamKey, ParamEntry>,
}

impl ParamFile {
    /// Decode a parameter file from a byte slice, optionally verifying that it re-encodes to the
    /// same bytes.
    pub fn from_bytes(bytes: &[u8], opts: &DecodeOptions) -> Result<ParamFile, ParamFileError> {
        let file = ParamFileCodec::decode(bytes)?;

        if opts.verify_round_trip {
            let reconstructed = ParamFileCodec::encode(&file)?;
            RoundTripValidator::assert_equal(bytes, &reconstructed)?;
            log::debug!("Reconstruction of {} bytes verified", bytes.len());
        }
        Ok(file)
    }

    /// Encode this parameter file into bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EncodeError> {
        ParamFileCodec::encode(self)
    }

    pub fn load(path: impl AsRef<Path>, opts: &DecodeOptions) -> Result<ParamFile, ParamFileError> {
        let path = path.as_ref();
        log::debug!("Loading parameter file: {}", path.display());
        let buffer = std::fs::read(path)?;
        ParamFile::from_bytes(&buffer, opts)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ParamFileError> {
        let path = path.as_ref();
        let buffer = self.to_bytes()?;
        log::debug!("Saving {} bytes to: {}", buffer.len(), path.display());
        std::fs::write(path, buffer)?;
        Ok(())
    }

    pub fn param(&self, block_id: u16, param_id: u16) -> Option<&ParamEntry> {
        self.params.get(&ParamKey::new(block_id, param_id))
    }

    pub fn param_mut(&mut self, block_id: u16, param_id: u16) -> Option<&mut ParamEntry> {
        self.params.get_mut(&ParamKey::new(block_id, param_id))
    }

    /// Recompute the offset and length of every section table entry from the current contents of
    /// the file. The number of table rows and their types are kept.
    pub fn rebuild_section_table(&mut self) -> Result<(), EncodeError> {
        let mut offset = ParamFileCodec::sections_start(self.section_table.len());

        for index in 0..self.section_table.len() {
            let section_type = self.section_table[index].section_type;
            let length = ParamFileCodec::section_length(self, index, section_type)?;
            let entry = &mut self.section_table[index];
            entry.offset = offset as u32;
            entry.length = length;
            offset += length as usize;
        }
        Ok(())
    }
}
