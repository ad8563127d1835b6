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
use asdapar::{DecodeOptions, ParamFile, SectionType};

pub(crate) fn run(_global: &GlobalOptions, params: &args::InfoParams) -> Result<(), Error> {
    let buffer = read_file(&params.in_file)?;

    let file = match ParamFile::from_bytes(&buffer, &DecodeOptions::default()) {
        Ok(file) => file,
        Err(e) => {
            bail!("Error decoding parameter file: {}", e);
        }
    };

    println!("Parameter file info:");
    println!("{}", "-".repeat(79));
    println!("Size: {} bytes", buffer.len());
    println!("Storage mode: {}", file.storage_mode);
    println!("ASDA-Soft version: {}", file.asdasoft_version_string);
    if let (Some(version), Some(subversion)) = (file.firmware_version, file.firmware_subversion) {
        println!("Firmware version: {} subversion: {}", version, subversion);
    }
    println!();

    println!("Sections:");
    println!("{}", "-".repeat(79));
    for (index, entry) in file.section_table.iter().enumerate() {
        let name = match SectionType::from_tag(entry.section_type) {
            Some(section_type) => section_type.to_string(),
            None => format!("Unknown (0x{:04X})", entry.section_type),
        };
        println!(
            "{:>2}: {:<32} offset: 0x{:04X} length: 0x{:04X}",
            index, name, entry.offset, entry.length
        );
    }
    println!();
    println!("{} parameters", file.params.len());

    if params.params {
        println!("{}", "-".repeat(79));
        for (key, entry) in &file.params {
            let field = |v: Option<u32>| v.map_or("-".to_string(), |v| format!("0x{:08X}", v));
            println!(
                "{:<6} current: {} max: {} min: {} default: {} unit: {}",
                key.to_string(),
                field(entry.current),
                field(entry.max),
                field(entry.min),
                field(entry.default),
                entry.unit.map_or("-".to_string(), |u| format!("0x{:04X}", u)),
            );
        }
    }
    Ok(())
}
