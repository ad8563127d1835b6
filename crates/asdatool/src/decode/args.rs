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
use crate::args::*;
use bpaf::{construct, long, Parser};
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct DecodeParams {
    pub(crate) in_file: PathBuf,
    pub(crate) out_file: Option<PathBuf>,
    pub(crate) no_verify: bool,
}

fn no_verify_parser() -> impl Parser<bool> {
    long("no-verify")
        .switch()
        .help("Skip re-encoding the decoded file and comparing it against the input")
}

pub(crate) fn decode_parser() -> impl Parser<DecodeParams> {
    let in_file = in_file_parser();
    // Without an output file, JSON is written to stdout.
    let out_file = out_file_parser().optional();
    let no_verify = no_verify_parser();

    construct!(DecodeParams {
        in_file,
        out_file,
        no_verify,
    })
}
