use std::net::Ipv4Addr;

use thiserror::Error;

pub const INVALID_IPV4_MESSAGE: &str = "Invalid IPv4 address (e.g. 10.0.0.1)";

const OCTETS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Ipv4FormatError {
    #[error("expected 4 octets, found {0}")]
    PartCount(usize),
    #[error("empty octet")]
    EmptyOctet,
    #[error("octet contains a non digit character")]
    NonDigit,
    #[error("octet has a leading zero")]
    LeadingZero,
    #[error("octet is greater than 255")]
    OutOfRange,
}

/// Parses a dotted-quad IPv4 address.
///
/// Only the whole input is trimmed. Octets are checked as-is, so `"10. 0.0.1"`
/// is rejected. Multi-digit octets starting with `0` are rejected.
pub fn parse_ipv4_format(input: &str) -> Result<Ipv4Addr, Ipv4FormatError> {
    let parts: Vec<&str> = input.trim().split('.').collect();

    if parts.len() != OCTETS {
        return Err(Ipv4FormatError::PartCount(parts.len()));
    }

    let mut octets = [0u8; OCTETS];
    for (octet, part) in octets.iter_mut().zip(parts) {
        *octet = parse_octet(part)?;
    }

    Ok(Ipv4Addr::from(octets))
}

fn parse_octet(part: &str) -> Result<u8, Ipv4FormatError> {
    if part.is_empty() {
        return Err(Ipv4FormatError::EmptyOctet);
    }

    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Ipv4FormatError::NonDigit);
    }

    if part.len() > 1 && part.starts_with('0') {
        return Err(Ipv4FormatError::LeadingZero);
    }

    // at most "255" once leading zeros are gone
    if part.len() > 3 {
        return Err(Ipv4FormatError::OutOfRange);
    }

    part.parse::<u16>()
        .ok()
        .and_then(|n| u8::try_from(n).ok())
        .ok_or(Ipv4FormatError::OutOfRange)
}

pub fn is_ipv4_format(input: &str) -> bool {
    parse_ipv4_format(input).is_ok()
}

/// Inline message for an IP field. Blank fields are not flagged.
pub fn ip_field_error(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() || is_ipv4_format(value) {
        None
    } else {
        Some(INVALID_IPV4_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_boundaries() {
        assert!(is_ipv4_format("0.0.0.0"));
        assert!(is_ipv4_format("255.255.255.255"));
        assert!(is_ipv4_format("10.0.0.12"));
        assert!(!is_ipv4_format("256.0.0.1"));
        assert!(!is_ipv4_format("256.1.1.1"));
        assert!(!is_ipv4_format("10.0.0.256"));
        assert!(!is_ipv4_format("-1.0.0.1"));
    }

    #[test]
    fn test_part_count() {
        assert_eq!(
            parse_ipv4_format("1.1.1"),
            Err(Ipv4FormatError::PartCount(3))
        );
        assert_eq!(
            parse_ipv4_format("1.1.1.1.1"),
            Err(Ipv4FormatError::PartCount(5))
        );
        assert_eq!(parse_ipv4_format(""), Err(Ipv4FormatError::PartCount(1)));
    }

    #[test]
    fn test_leading_zero() {
        assert_eq!(
            parse_ipv4_format("01.1.1.1"),
            Err(Ipv4FormatError::LeadingZero)
        );
        assert_eq!(
            parse_ipv4_format("1.2.3.04"),
            Err(Ipv4FormatError::LeadingZero)
        );
        assert!(is_ipv4_format("0.1.1.1"));
        assert!(is_ipv4_format("10.1.1.1"));
    }

    #[test]
    fn test_whitespace() {
        assert_eq!(
            parse_ipv4_format(" 10.0.0.1 "),
            Ok(Ipv4Addr::new(10, 0, 0, 1))
        );
        assert_eq!(
            parse_ipv4_format("10. 0.0.1"),
            Err(Ipv4FormatError::NonDigit)
        );
        assert!(!is_ipv4_format("10.0 .0.1"));
    }

    #[test]
    fn test_unicode_whitespace_edges() {
        assert!(is_ipv4_format("\t10.0.0.1\n"));
        assert!(is_ipv4_format("\u{85}10.0.0.1\u{a0}"));
        assert!(!is_ipv4_format("\u{feff}10.0.0.1"));
    }

    #[test]
    fn test_empty_and_garbage() {
        assert_eq!(
            parse_ipv4_format("1..1.1"),
            Err(Ipv4FormatError::EmptyOctet)
        );
        assert_eq!(
            parse_ipv4_format("a.b.c.d"),
            Err(Ipv4FormatError::NonDigit)
        );
        assert_eq!(
            parse_ipv4_format("1.1.1.99999999999999999999"),
            Err(Ipv4FormatError::OutOfRange)
        );
        assert!(!is_ipv4_format("1.1.1.١"));
    }

    #[test]
    fn test_field_error() {
        assert_eq!(ip_field_error(""), None);
        assert_eq!(ip_field_error("   "), None);
        assert_eq!(ip_field_error("10.0.0.1"), None);
        assert_eq!(ip_field_error("10.0.0"), Some(INVALID_IPV4_MESSAGE));
    }

    proptest! {
        #[test]
        fn prop_never_panics(s in "\\PC*") {
            let _ = is_ipv4_format(&s);
        }

        #[test]
        fn prop_accepts_every_canonical_address(a: u8, b: u8, c: u8, d: u8) {
            let addr = Ipv4Addr::new(a, b, c, d);
            prop_assert_eq!(parse_ipv4_format(&addr.to_string()), Ok(addr));
        }

        #[test]
        fn prop_rejects_padded_octets(a in 0u8..=25) {
            let input = format!("0{a}.1.1.1");
            prop_assert!(!is_ipv4_format(&input));
        }
    }
}
