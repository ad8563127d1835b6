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
use asdapar::{DecodeOptions, ParamFile};

pub(crate) fn run(global: &GlobalOptions, params: &args::DecodeParams) -> Result<(), Error> {
    let buffer = read_file(&params.in_file)?;

    let opts = DecodeOptions {
        verify_round_trip: !params.no_verify,
    };
    let file = match ParamFile::from_bytes(&buffer, &opts) {
        Ok(file) => file,
        Err(e) => {
            bail!("Error decoding parameter file: {}", e);
        }
    };

    let json = file.to_json()?;
    match &params.out_file {
        Some(out_file) => {
            std::fs::write(out_file, json)?;
            if !global.silent {
                println!(
                    "Decoded {} parameters from {} into {}",
                    file.params.len(),
                    params.in_file.display(),
                    out_file.display()
                );
            }
        }
        None => println!("{}", json),
    }
    Ok(())
}
