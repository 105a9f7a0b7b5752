// src/name.rs

//! Assembly of the encoded proof into publishable DNS names.
//!
//! DNS caps a label at 63 octets and a full name at 253. The tag label with
//! part 0 behind it is 54 octets at worst, so labels are never the problem;
//! the whole-name limit is. Short domains leave room for all four parts in
//! a single name; past the threshold the proof is split across two sibling
//! names (`n0pe...` and `n1pe...`) that the verifier queries and rejoins.

use crate::encode::EncodedParts;
use crate::error::{Error, Result};

/// Tag opening the first (or only) name; the circuit type follows in hex.
const PRIMARY_TAG: &str = "n0pe";

/// Tag opening the spillover name when the domain is long.
const SECONDARY_TAG: &str = "n1pe";

/// Longest normalized domain that still gets a single name.
const SINGLE_NAME_DOMAIN_MAX: usize = 29;

/// Validated 3-bit circuit tag.
///
/// Names the signature-algorithm combination the proof was produced for.
/// The caller supplies it and the verifier interprets it; here it is an
/// opaque value with only the 0-7 range enforced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CircuitType(u8);

impl CircuitType {
    pub fn new(value: u8) -> Result<Self> {
        if value > 7 {
            return Err(Error::CircuitTypeRange(value));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for CircuitType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

/// Prepend the label separator unless the domain already carries one.
pub fn normalize_domain(domain: &str) -> Result<String> {
    if domain.is_empty() {
        return Err(Error::EmptyDomain);
    }
    if domain.starts_with('.') {
        Ok(domain.to_owned())
    } else {
        Ok(format!(".{domain}"))
    }
}

/// Build the DNS name(s) publishing an encoded proof under `domain`.
///
/// The first label fuses the tag, the zero-padded hex circuit type, and
/// part 0; the leading hex digit is always `0` and doubles as the wire
/// version. One name when the normalized domain is at most 29 octets,
/// otherwise two names of two parts each.
pub fn assemble_names(
    circuit_type: CircuitType,
    domain: &str,
    parts: &EncodedParts,
) -> Result<Vec<String>> {
    let domain = normalize_domain(domain)?;
    let [p0, p1, p2, p3] = &parts.0;
    let tag = format!("{PRIMARY_TAG}{:02x}", circuit_type.value());
    if domain.len() <= SINGLE_NAME_DOMAIN_MAX {
        Ok(vec![format!("{tag}{p0}.{p1}.{p2}.{p3}{domain}")])
    } else {
        Ok(vec![
            format!("{tag}{p0}.{p1}{domain}"),
            format!("{SECONDARY_TAG}{p2}.{p3}{domain}"),
        ])
    }
}
