//! Form decoding
//!
//! Turns an `application/x-www-form-urlencoded` body into one or two
//! distribution slots. Fields are suffixed with the slot number (`dist1`,
//! `size1`, `low1`, ... and `dist2`, ...). Missing or blank fields fall back
//! to the form defaults.

use crate::distribution::{DistributionKind, DistributionSpec};
use crate::error::SimError;
use std::collections::HashMap;
use std::str::FromStr;

/// Sample size used when the form leaves it out
pub const DEFAULT_FORM_SIZE: usize = 500;

/// Decode `+` and `%XX` escapes
///
/// Malformed escapes are kept literally.
pub fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' if i + 2 < bytes.len() => {
                match (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi << 4 | lo);
                        i += 2;
                    }
                    _ => out.push(b'%'),
                }
            }
            b => out.push(b),
        }
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Split a urlencoded body into decoded key/value pairs
///
/// Later duplicates win.
pub fn parse_urlencoded(body: &str) -> HashMap<String, String> {
    body.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (percent_decode(key), percent_decode(value))
        })
        .collect()
}

/// One distribution configured on the form
#[derive(Debug, Clone, PartialEq)]
pub struct FormSlot {
    /// 1 or 2
    pub slot: u8,
    pub spec: DistributionSpec,
    pub size: usize,
}

/// A decoded form submission
#[derive(Debug, Clone, PartialEq)]
pub struct FormRequest {
    pub compare: bool,
    pub slots: Vec<FormSlot>,
}

impl FormRequest {
    /// Decode a submission, rejecting sizes above `max_size`
    pub fn from_fields(fields: &HashMap<String, String>, max_size: usize) -> Result<Self, SimError> {
        let compare = fields.get("mode").map(|m| m.trim()) == Some("compare");

        let mut slots = vec![parse_slot(fields, 1, max_size)?];
        if compare {
            slots.push(parse_slot(fields, 2, max_size)?);
        }

        Ok(Self { compare, slots })
    }

    pub fn from_body(body: &[u8], max_size: usize) -> Result<Self, SimError> {
        let body = String::from_utf8_lossy(body);
        Self::from_fields(&parse_urlencoded(&body), max_size)
    }
}

fn parse_slot(fields: &HashMap<String, String>, slot: u8, max_size: usize) -> Result<FormSlot, SimError> {
    let lookup = |name: &str| {
        fields
            .get(&format!("{}{}", name, slot))
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    };

    let default_kind = if slot == 1 { "normal" } else { "uniform" };
    let kind: DistributionKind = lookup("dist").unwrap_or(default_kind).parse()?;
    let tag = kind.tag();

    let size: usize = field(tag, lookup("size"), "size", DEFAULT_FORM_SIZE)?;
    if size > max_size {
        return Err(SimError::invalid(
            tag,
            format!("size {} exceeds the limit of {}", size, max_size),
        ));
    }

    let spec = match kind {
        DistributionKind::Uniform => DistributionSpec::Uniform {
            low: field(tag, lookup("low"), "low", 0.0)?,
            high: field(tag, lookup("high"), "high", 1.0)?,
        },
        DistributionKind::Normal => DistributionSpec::Normal {
            mean: field(tag, lookup("mean"), "mean", 0.0)?,
            std_dev: field(tag, lookup("std"), "std", 1.0)?,
        },
        DistributionKind::Binomial => DistributionSpec::Binomial {
            trials: field(tag, lookup("n"), "n", 10)?,
            success_probability: field(tag, lookup("p"), "p", 0.5)?,
        },
        DistributionKind::Poisson => DistributionSpec::Poisson {
            rate: field(tag, lookup("lam"), "lam", 4.0)?,
        },
    };
    spec.validate()?;

    Ok(FormSlot { slot, spec, size })
}

fn field<T: FromStr>(tag: &'static str, raw: Option<&str>, name: &str, default: T) -> Result<T, SimError> {
    match raw {
        None => Ok(default),
        Some(raw) => raw
            .parse()
            .map_err(|_| SimError::invalid(tag, format!("{} is not a valid number: {}", name, raw))),
    }
}
