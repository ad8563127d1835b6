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

    src/json.rs

    Structured (JSON) representation of a parameter file.

    Parameters are keyed by their display name, ie. "P1-01", and hold the
    fields current, max, min, default and unit. Section table rows hold type,
    offset and length.
*/

use crate::{param_file::ParamFile, DecodeOptions, ParamFileError};

impl ParamFile {
    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ParamFileError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<ParamFile, ParamFileError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Decode a binary parameter file and render it as JSON.
pub fn par_to_json(bytes: &[u8], opts: &DecodeOptions) -> Result<String, ParamFileError> {
    ParamFile::from_bytes(bytes, opts)?.to_json()
}

/// Parse a JSON representation and encode it as a binary parameter file.
pub fn json_to_par(json: &str) -> Result<Vec<u8>, ParamFileError> {
    Ok(ParamFile::from_json(json)?.to_bytes()?)
}
