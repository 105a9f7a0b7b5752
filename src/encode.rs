// src/encode.rs

//! Fixed-radix serialization of the packed proof into DNS-safe strings.
//!
//! The 1024-bit compressed proof travels inside DNS labels, so it is
//! rewritten in base 37 over the symbols a label may contain. Digits are
//! extracted least-significant first and dealt out to four label-sized
//! parts by a fixed formula; the consuming verifier reassembles the value
//! from the concatenation, so both the digit order and the part boundaries
//! are wire format and must never change.

use ruint::aliases::U1024;

/// The 37 symbols legal in a DNS label, indexed 0-36.
pub const ALPHABET: &[u8; 37] = b"0123456789abcdefghijklmnopqrstuvwxyz-";

/// Digits per encoded proof. 37^197 > 2^1024 > 37^196, so 197 digits cover
/// every packed value and the width never varies.
pub const DIGITS: usize = 197;

/// The four pieces of an encoded proof, in wire order.
///
/// Parts 0-2 carry 48/50/50 value digits, part 3 carries the remaining 49
/// plus one trailing checksum symbol, so every part is at most 50 symbols
/// and fits a label with room for a tag in front.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedParts(pub [String; 4]);

/// Serialize a packed proof into its four parts.
///
/// Digit `i` of the base-37 expansion goes to part `(i + 2) / 50`; the
/// checksum symbol, the running sum of all digit values mod 37, is appended
/// to part 3 once the value is exhausted.
pub fn encode_proof(value: U1024) -> EncodedParts {
    let radix = U1024::from(ALPHABET.len() as u64);
    let mut parts = [String::new(), String::new(), String::new(), String::new()];
    let mut checksum = 0usize;
    let mut v = value;
    for i in 0..DIGITS {
        let (q, r) = v.div_rem(radix);
        let digit = r.as_limbs()[0] as usize;
        parts[(i + 2) / 50].push(ALPHABET[digit] as char);
        checksum = (checksum + digit) % ALPHABET.len();
        v = q;
    }
    parts[3].push(ALPHABET[checksum] as char);
    EncodedParts(parts)
}
