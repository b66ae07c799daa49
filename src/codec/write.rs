//! Value to text formatting.
//!
//! The output is the canonical form: dotted decimal for IPv4, lowercase hex
//! for IPv6 with the first longest run of two or more zero hextets replaced
//! by `::`.

use crate::models::{Ip4, Ip6, Net4, Net6};
use std::fmt;

/// Start and length of the first longest run of zero hextets.
///
/// A later run of equal length never replaces an earlier one.
fn longest_zero_run(hextets: &[u16; 8]) -> (usize, usize) {
    let (mut best_start, mut best_len) = (0, 0);
    let mut run_start: Option<usize> = None;
    for (i, &h) in hextets.iter().enumerate() {
        if h == 0 {
            let start = *run_start.get_or_insert(i);
            if i + 1 - start > best_len {
                best_start = start;
                best_len = i + 1 - start;
            }
        } else {
            run_start = None;
        }
    }
    (best_start, best_len)
}

fn write_hextets(f: &mut fmt::Formatter, hextets: &[u16]) -> fmt::Result {
    for (i, h) in hextets.iter().enumerate() {
        if i > 0 {
            f.write_str(":")?;
        }
        write!(f, "{h:x}")?;
    }
    Ok(())
}

pub fn format_ip4(ip: Ip4) -> String {
    ip.to_string()
}

pub fn format_ip6(ip: Ip6) -> String {
    ip.to_string()
}

pub fn format_net4(net: Net4) -> String {
    net.to_string()
}

pub fn format_net6(net: Net6) -> String {
    net.to_string()
}

impl fmt::Display for Ip4 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [a, b, c, d] = self.octets();
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

impl fmt::Display for Ip6 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let hextets = self.hextets();
        let (start, len) = longest_zero_run(&hextets);
        if len <= 1 {
            return write_hextets(f, &hextets);
        }
        write_hextets(f, &hextets[..start])?;
        f.write_str("::")?;
        write_hextets(f, &hextets[start + len..])
    }
}

impl fmt::Display for Net4 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.address(), self.prefixlen())
    }
}

impl fmt::Display for Net6 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.address(), self.prefixlen())
    }
}

impl fmt::Debug for Ip4 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Ip4({self})")
    }
}

impl fmt::Debug for Ip6 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Ip6({self})")
    }
}

impl fmt::Debug for Net4 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Net4")
            .field("address", &format_args!("{}", self.address()))
            .field("prefixlen", &self.prefixlen())
            .field("mask", &format_args!("{}", self.mask()))
            .finish()
    }
}

impl fmt::Debug for Net6 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Net6")
            .field("address", &format_args!("{}", self.address()))
            .field("prefixlen", &self.prefixlen())
            .field("mask", &format_args!("{}", self.mask()))
            .finish()
    }
}
