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

    src/validate.rs

    Byte comparison of a reconstructed file against its source.
*/

use crate::{codec::ParamFileCodec, param_file::ParamFile, ParamFileError, RoundTripError};

pub struct RoundTripValidator;

impl RoundTripValidator {
    /// Fail if `reconstructed` is not byte-for-byte identical to `original`. A length difference
    /// is reported before any byte difference.
    pub fn assert_equal(original: &[u8], reconstructed: &[u8]) -> Result<(), RoundTripError> {
        if original.len() != reconstructed.len() {
            return Err(RoundTripError::LengthMismatch {
                expected: original.len(),
                actual: reconstructed.len(),
            });
        }

        match original.iter().zip(reconstructed).position(|(a, b)| a != b) {
            Some(offset) => Err(RoundTripError::ByteMismatch {
                offset,
                expected: original[offset],
                actual: reconstructed[offset],
            }),
            None => Ok(()),
        }
    }
}

/// Decode `bytes`, encode the result and check that it reproduces `bytes` exactly.
pub fn round_trip(bytes: &[u8]) -> Result<ParamFile, ParamFileError> {
    let file = ParamFileCodec::decode(bytes)?;
    let reconstructed = ParamFileCodec::encode(&file)?;
    RoundTripValidator::assert_equal(bytes, &reconstructed)?;
    Ok(file)
}
