/*
 * encode.rs
 * Copyright (c) 2026 the uritemplate contributors
 */

//! Percent-encoding policies.
//!
//! Two policies exist, selected per operator: [`Encoding::Unreserved`]
//! escapes everything outside the URI unreserved set, while
//! [`Encoding::Reserved`] additionally lets URI-reserved characters (and
//! existing `%` escapes) pass through unchanged.

/// A percent-encoding policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Escape everything except unreserved characters
    /// (`A-Z a-z 0-9 - . _ ~`).
    Unreserved,

    /// Preserve URI-reserved characters (`:/?#[]@!$&'()*+,;=`) and `%` in
    /// addition to the unreserved set.
    Reserved,
}

/// Characters kept verbatim by the reserved-preserving policy, beyond the
/// unreserved set.
const RESERVED: &[u8] = b":/?#[]@!$&'()*+,;=%";

impl Encoding {
    /// Percent-encode `raw` under this policy.
    pub fn encode(self, raw: &str) -> String {
        match self {
            Encoding::Unreserved => urlencoding::encode(raw).into_owned(),
            Encoding::Reserved => encode_preserving_reserved(raw),
        }
    }
}

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~')
}

fn encode_preserving_reserved(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut buf = [0u8; 4];
    for ch in raw.chars() {
        let passthrough = ch.is_ascii() && {
            let byte = ch as u8;
            is_unreserved(byte) || RESERVED.contains(&byte)
        };
        if passthrough {
            out.push(ch);
        } else {
            for byte in ch.encode_utf8(&mut buf).bytes() {
                out.push_str(&format!("%{:02X}", byte));
            }
        }
    }
    out
}
