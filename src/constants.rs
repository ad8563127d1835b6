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

    src/constants.rs

    Fixed byte blocks of the parameter file format.

    The meaning of most of these blocks is not known. They are validated on
    decode and emitted verbatim on encode, so a file that differs in any of
    them is rejected rather than silently normalized.
*/

use crate::{
    cursor::{ByteCursor, ByteWriter},
    DecodeError,
};
use strum::{EnumIter, IntoStaticStr};

const MAGIC: [u8; 12] = [0x30, 0x67, 0x05, 0x10, 0x00, 0x00, 0x04, 0x00, 0x03, 0x00, 0x00, 0x00];

#[rustfmt::skip]
const BEFORE_TABLE: [u8; 32] = [
    0x00, 0x00, 0x80, 0x00, 0x00, 0x00, 0x07, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

const FIRMWARE_VERSION_PREFIX: [u8; 8] = [0x01, 0x00, 0x00, 0x00, 0xF4, 0x01, 0x00, 0x00];
const FIRMWARE_SUBVERSION_PREFIX: [u8; 4] = [0x01, 0x00, 0x00, 0x00];

#[rustfmt::skip]
const SECTION2_LEADING: [u8; 26] = [
    0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x40, 0x00, 0x01, 0x00, 0x63, 0x00, 0x02, 0x00,
];

#[rustfmt::skip]
const SECTION2_TRAILING: [u8; 36] = [
    0x03, 0x00, 0x0E, 0x00,
    0x04, 0x00, 0x19, 0x00, 0x05, 0x00, 0x64, 0x00, 0x06, 0x00, 0x64, 0x00, 0x07, 0x00, 0x1C, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

#[rustfmt::skip]
const UNIT_FILLER: [u8; 30] = [
    0x00, 0x00, 0x00, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x20, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// The registry of named constant blocks.
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, IntoStaticStr)]
pub enum Constant {
    /// File header. Possibly a file code, file version and device id.
    #[strum(serialize = "magic")]
    Magic,
    /// Filler between the version string and the section table.
    #[strum(serialize = "before_table")]
    BeforeTable,
    /// Precedes the two copies of the firmware version in section 0x0001.
    #[strum(serialize = "0001_firmware_version_1")]
    FirmwareVersionPrefix,
    /// Precedes the two copies of the firmware subversion in section 0x0001.
    #[strum(serialize = "0001_firmware_version_2")]
    FirmwareSubversionPrefix,
    #[strum(serialize = "0002_unknown_1")]
    Section2Leading,
    #[strum(serialize = "0002_unknown_2")]
    Section2Trailing,
    /// Follows the unit of every row in section 0x0006.
    #[strum(serialize = "0006_unit_param_unknown")]
    UnitFiller,
}

impl Constant {
    pub fn bytes(self) -> &'static [u8] {
        match self {
            Constant::Magic => &MAGIC,
            Constant::BeforeTable => &BEFORE_TABLE,
            Constant::FirmwareVersionPrefix => &FIRMWARE_VERSION_PREFIX,
            Constant::FirmwareSubversionPrefix => &FIRMWARE_SUBVERSION_PREFIX,
            Constant::Section2Leading => &SECTION2_LEADING,
            Constant::Section2Trailing => &SECTION2_TRAILING,
            Constant::UnitFiller => &UNIT_FILLER,
        }
    }

    pub fn name(self) -> &'static str {
        self.into()
    }

    #[inline]
    pub fn size(self) -> usize {
        self.bytes().len()
    }

    /// Validate the constant at the cursor's position.
    pub fn expect(self, cursor: &mut ByteCursor) -> Result<(), DecodeError> {
        log::trace!("Checking constant '{}' at 0x{:04X}", self.name(), cursor.position());
        cursor.expect(self.bytes())
    }

    /// Emit the constant unchanged.
    pub fn emit(self, out: &mut ByteWriter) {
        out.write_bytes(self.bytes());
    }
}
