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

    src/params.rs

    Parameter keys and entries.

    A parameter is identified by its block and parameter number. The current
    value comes from section 0x0018, the limits and unit from section 0x0006,
    so an entry is only complete once both sections have been decoded.
*/

use std::{
    fmt,
    fmt::{Display, Formatter},
    str::FromStr,
};

/// Composite key of a parameter. Ordering is by block, then parameter number, which is the
/// order parameter rows are written in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParamKey {
    pub block_id: u16,
    pub param_id: u16,
}

impl ParamKey {
    pub fn new(block_id: u16, param_id: u16) -> Self {
        ParamKey { block_id, param_id }
    }
}

/// Keys are displayed the way the drive documentation names parameters, ie. `P1-01`.
impl Display for ParamKey {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "P{}-{:02}", self.block_id, self.param_id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseParamKeyError(String);

impl Display for ParseParamKeyError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "invalid parameter key '{}', expected P<block>-<param>", self.0)
    }
}

impl std::error::Error for ParseParamKeyError {}

fn parse_id(digits: &str) -> Option<u16> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<u16>().ok()
}

impl FromStr for ParamKey {
    type Err = ParseParamKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseParamKeyError(s.to_string());
        let (block, param) = s.strip_prefix('P').and_then(|rest| rest.split_once('-')).ok_or_else(err)?;

        let key = ParamKey {
            block_id: parse_id(block).ok_or_else(err)?,
            param_id: parse_id(param).ok_or_else(err)?,
        };
        // Only the displayed spelling is accepted, so every key has exactly one text form.
        if key.to_string() != s {
            return Err(err());
        }
        Ok(key)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ParamKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ParamKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// The limits and unit of a parameter, as stored in section 0x0006.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ParamLimits {
    pub max: u32,
    pub min: u32,
    pub default: u32,
    pub unit: u16,
}

/// One parameter. Fields are `None` until the section that carries them has been decoded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParamEntry {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub current: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub max: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub min: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub default: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub unit: Option<u16>,
}

impl ParamEntry {
    pub fn with_current(current: u32) -> Self {
        ParamEntry {
            current: Some(current),
            ..Default::default()
        }
    }

    pub fn set_limits(&mut self, limits: ParamLimits) {
        self.max = Some(limits.max);
        self.min = Some(limits.min);
        self.default = Some(limits.default);
        self.unit = Some(limits.unit);
    }

    /// Return the limits of this parameter, or the name of the first missing field.
    pub fn limits(&self) -> Result<ParamLimits, &'static str> {
        Ok(ParamLimits {
            max: self.max.ok_or("max")?,
            min: self.min.ok_or("min")?,
            default: self.default.ok_or("default")?,
            unit: self.unit.ok_or("unit")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_display_pads_param_id() {
        assert_eq!(ParamKey::new(1, 1).to_string(), "P1-01");
        assert_eq!(ParamKey::new(0, 0).to_string(), "P0-00");
        assert_eq!(ParamKey::new(5, 99).to_string(), "P5-99");
        assert_eq!(ParamKey::new(2, 100).to_string(), "P2-100");
    }

    #[test]
    fn key_parses_back() {
        for key in [ParamKey::new(0, 0), ParamKey::new(1, 1), ParamKey::new(7, 27), ParamKey::new(12, 345)] {
            assert_eq!(key.to_string().parse::<ParamKey>().unwrap(), key);
        }
        assert_eq!("P3-07".parse::<ParamKey>().unwrap(), ParamKey::new(3, 7));
    }

    #[test]
    fn key_rejects_malformed_text() {
        for bad in ["", "P", "P1", "P1-", "P-1", "1-01", "p1-01", "P1-01x", "P1--01", "P+1-01", "P1-0 1", "P70000-1"] {
            assert!(bad.parse::<ParamKey>().is_err(), "accepted '{}'", bad);
        }
    }

    #[test]
    fn key_rejects_other_spellings() {
        for bad in ["P3-7", "P01-01", "P1-001", "P00-00", "P2-0100"] {
            assert!(bad.parse::<ParamKey>().is_err(), "accepted '{}'", bad);
        }
    }

    #[test]
    fn keys_order_by_block_then_param() {
        let mut keys = vec![
            ParamKey::new(1, 0),
            ParamKey::new(0, 99),
            ParamKey::new(0, 2),
            ParamKey::new(10, 1),
            ParamKey::new(2, 0),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![
                ParamKey::new(0, 2),
                ParamKey::new(0, 99),
                ParamKey::new(1, 0),
                ParamKey::new(2, 0),
                ParamKey::new(10, 1),
            ]
        );
    }

    #[test]
    fn limits_report_missing_field() {
        let mut entry = ParamEntry::with_current(5);
        assert_eq!(entry.limits(), Err("max"));
        entry.set_limits(ParamLimits {
            max: 10,
            min: 0,
            default: 5,
            unit: 1,
        });
        assert!(entry.limits().is_ok());
        entry.unit = None;
        assert_eq!(entry.limits(), Err("unit"));
    }
}
