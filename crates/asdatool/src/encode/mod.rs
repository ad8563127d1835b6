/*
    asdatool

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
*/
pub mod args;

use crate::{args::GlobalOptions, read_file};
use anyhow::{bail, Error};
use asdapar::ParamFile;

pub(crate) fn run(global: &GlobalOptions, params: &args::EncodeParams) -> Result<(), Error> {
    let buffer = read_file(&params.in_file)?;
    let json = String::from_utf8(buffer)?;

    let mut file = match ParamFile::from_json(&json) {
        Ok(file) => file,
        Err(e) => {
            bail!("Error reading JSON: {}", e);
        }
    };

    if params.rebuild_table {
        file.rebuild_section_table()?;
        log::debug!("Rebuilt section table with {} rows", file.section_table.len());
    }

    match file.save(&params.out_file) {
        Ok(_) => {
            if !global.silent {
                println!("Parameter file saved to {}", params.out_file.display());
            }
            Ok(())
        }
        Err(e) => {
            bail!("Error encoding parameter file: {}", e);
        }
    }
}
