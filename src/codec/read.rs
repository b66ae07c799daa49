//! Text to value parsers.
//!
//! Every reader takes a byte slice and returns the value together with the
//! number of bytes consumed, or `None` when the input does not match. The
//! `*_strict` variants additionally require the whole slice to be consumed.
//! Readers never index past the end of the slice, so arbitrary bytes
//! (NUL, non-ASCII, truncated input) are simply rejected.

use crate::error::{ParseError, Target};
use crate::models::{Ip4, Ip6, Net4, Net6, MAX_PREFIXLEN4, MAX_PREFIXLEN6};
use std::str::FromStr;

/// Read up to `max_digits` decimal digits, rejecting leading zeros unless
/// the number is a lone `0`.
fn read_decimal(s: &[u8], max_digits: usize) -> Option<(u32, usize)> {
    let n = s
        .iter()
        .take(max_digits)
        .take_while(|b| b.is_ascii_digit())
        .count();
    if n == 0 || (n > 1 && s[0] == b'0') {
        return None;
    }
    let v = s[..n]
        .iter()
        .fold(0u32, |v, b| v * 10 + u32::from(b - b'0'));
    Some((v, n))
}

/// Read 1-4 hex digits, rejecting leading zeros unless the hextet is a lone `0`.
fn read_hextet(s: &[u8]) -> Option<(u16, usize)> {
    let n = s
        .iter()
        .take(4)
        .take_while(|b| b.is_ascii_hexdigit())
        .count();
    if n == 0 || (n > 1 && s[0] == b'0') {
        return None;
    }
    let v = s[..n].iter().fold(0u16, |v, &b| (v << 4) | hex_value(b));
    Some((v, n))
}

fn hex_value(b: u8) -> u16 {
    match b {
        b'0'..=b'9' => u16::from(b - b'0'),
        b'a'..=b'f' => u16::from(b - b'a' + 10),
        b'A'..=b'F' => u16::from(b - b'A' + 10),
        _ => 0,
    }
}

/// Read a dotted-decimal IPv4 address: exactly four octets in `[0,255]`.
pub fn read_ip4(s: &[u8]) -> Option<(Ip4, usize)> {
    let mut pos = 0;
    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        if i > 0 {
            if s.get(pos) != Some(&b'.') {
                return None;
            }
            pos += 1;
        }
        let (v, n) = read_decimal(&s[pos..], 3)?;
        *octet = u8::try_from(v).ok()?;
        pos += n;
    }
    Some((Ip4::from(octets), pos))
}

/// Read an IPv6 address.
///
/// Up to eight colon-separated hextets with at most one `::`. The last two
/// hextets may be written as a dotted IPv4 address, either in position 7/8
/// of an uncompressed address or after a `::` that still leaves room for it.
/// Without `::` all eight hextets are required; with `::` at least one
/// hextet must have been elided.
pub fn read_ip6(s: &[u8]) -> Option<(Ip6, usize)> {
    let mut hextets = [0u16; 8];
    let mut i = 0;
    let mut pos = 0;
    let mut brk: Option<usize> = None;

    if let Some((h, n)) = read_hextet(s) {
        hextets[0] = h;
        pos = n;
        i = 1;
    }

    while i < 8 {
        if s.get(pos) != Some(&b':') {
            break;
        }
        pos += 1;

        if brk.is_none() && s.get(pos) == Some(&b':') {
            pos += 1;
            brk = Some(i);
            if !s.get(pos).is_some_and(u8::is_ascii_hexdigit) {
                break;
            }
        } else if i == 0 {
            // a lone leading colon
            return None;
        }

        if i == 6 || (brk.is_some() && i < 6) {
            if let Some((ip4, n)) = read_ip4(&s[pos..]) {
                let bits = u32::from(ip4);
                hextets[i] = (bits >> 16) as u16;
                hextets[i + 1] = bits as u16;
                pos += n;
                i += 2;
                break;
            }
        }

        let (h, n) = read_hextet(&s[pos..])?;
        hextets[i] = h;
        pos += n;
        i += 1;
    }

    let brk = match brk {
        None if i < 8 => return None,
        Some(_) if i == 8 => return None,
        None => 8,
        Some(brk) => brk,
    };

    // hextets after the break fill the address from the back
    let mut address = [0u16; 8];
    let tail = i - brk;
    address[..brk].copy_from_slice(&hextets[..brk]);
    address[8 - tail..].copy_from_slice(&hextets[brk..i]);
    Some((Ip6::new(address), pos))
}

/// Read `/prefixlen` with at most `max_digits` digits and a value of at most `max`.
fn read_prefixlen(s: &[u8], max_digits: usize, max: u8) -> Option<(u8, usize)> {
    if s.first() != Some(&b'/') {
        return None;
    }
    let (v, n) = read_decimal(&s[1..], max_digits)?;
    let v = u8::try_from(v).ok().filter(|&v| v <= max)?;
    Some((v, n + 1))
}

/// Read an IPv4 network in CIDR notation.
pub fn read_net4(s: &[u8]) -> Option<(Net4, usize)> {
    let (address, pos) = read_ip4(s)?;
    let (prefixlen, n) = read_prefixlen(&s[pos..], 2, MAX_PREFIXLEN4)?;
    Some((Net4::from_parts(address, prefixlen), pos + n))
}

/// Read an IPv6 network in CIDR notation.
pub fn read_net6(s: &[u8]) -> Option<(Net6, usize)> {
    let (address, pos) = read_ip6(s)?;
    let (prefixlen, n) = read_prefixlen(&s[pos..], 3, MAX_PREFIXLEN6)?;
    Some((Net6::from_parts(address, prefixlen), pos + n))
}

fn whole<T>(s: &[u8], read: impl Fn(&[u8]) -> Option<(T, usize)>) -> Option<T> {
    read(s).and_then(|(v, n)| (n == s.len()).then_some(v))
}

pub fn read_ip4_strict(s: &[u8]) -> Option<Ip4> {
    whole(s, read_ip4)
}

pub fn read_ip6_strict(s: &[u8]) -> Option<Ip6> {
    whole(s, read_ip6)
}

pub fn read_net4_strict(s: &[u8]) -> Option<Net4> {
    whole(s, read_net4)
}

pub fn read_net6_strict(s: &[u8]) -> Option<Net6> {
    whole(s, read_net6)
}

/// Strictly parse an IPv4 address.
///
/// # Errors
/// [`ParseError`] unless the whole input is a valid address.
pub fn parse_ip4(s: impl AsRef<[u8]>) -> Result<Ip4, ParseError> {
    let s = s.as_ref();
    read_ip4_strict(s).ok_or_else(|| ParseError::new(Target::Ip4, s))
}

/// Strictly parse an IPv6 address.
pub fn parse_ip6(s: impl AsRef<[u8]>) -> Result<Ip6, ParseError> {
    let s = s.as_ref();
    read_ip6_strict(s).ok_or_else(|| ParseError::new(Target::Ip6, s))
}

/// Strictly parse an IPv4 network.
pub fn parse_net4(s: impl AsRef<[u8]>) -> Result<Net4, ParseError> {
    let s = s.as_ref();
    read_net4_strict(s).ok_or_else(|| ParseError::new(Target::Net4, s))
}

/// Strictly parse an IPv6 network.
pub fn parse_net6(s: impl AsRef<[u8]>) -> Result<Net6, ParseError> {
    let s = s.as_ref();
    read_net6_strict(s).ok_or_else(|| ParseError::new(Target::Net6, s))
}

impl FromStr for Ip4 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Ip4, ParseError> {
        parse_ip4(s)
    }
}

impl FromStr for Ip6 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Ip6, ParseError> {
        parse_ip6(s)
    }
}

impl FromStr for Net4 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Net4, ParseError> {
        parse_net4(s)
    }
}

impl FromStr for Net6 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Net6, ParseError> {
        parse_net6(s)
    }
}
