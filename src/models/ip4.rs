//! IPv4 host address.

use rand::Rng;
use std::net::Ipv4Addr;
use std::ops::{BitAnd, BitOr, BitXor, Not};

/// An IPv4 address: 32 bits, most significant octet first.
///
/// Equality and hashing are structural, two separately built values holding
/// the same address are equal.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ip4(u32);

impl Ip4 {
    /// Build from the four octets, most significant first.
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Ip4 {
        Ip4(u32::from_be_bytes([a, b, c, d]))
    }

    pub const fn octets(&self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// A uniformly random address.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Ip4 {
        Ip4(rng.gen())
    }
}

impl From<u32> for Ip4 {
    fn from(bits: u32) -> Ip4 {
        Ip4(bits)
    }
}

impl From<Ip4> for u32 {
    fn from(ip: Ip4) -> u32 {
        ip.0
    }
}

impl From<Ipv4Addr> for Ip4 {
    fn from(addr: Ipv4Addr) -> Ip4 {
        Ip4(u32::from(addr))
    }
}

impl From<Ip4> for Ipv4Addr {
    fn from(ip: Ip4) -> Ipv4Addr {
        Ipv4Addr::from(ip.0)
    }
}

impl From<[u8; 4]> for Ip4 {
    fn from(octets: [u8; 4]) -> Ip4 {
        Ip4(u32::from_be_bytes(octets))
    }
}

impl Not for Ip4 {
    type Output = Ip4;

    fn not(self) -> Ip4 {
        Ip4(!self.0)
    }
}

impl BitAnd for Ip4 {
    type Output = Ip4;

    fn bitand(self, rhs: Ip4) -> Ip4 {
        Ip4(self.0 & rhs.0)
    }
}

impl BitOr for Ip4 {
    type Output = Ip4;

    fn bitor(self, rhs: Ip4) -> Ip4 {
        Ip4(self.0 | rhs.0)
    }
}

impl BitXor for Ip4 {
    type Output = Ip4;

    fn bitxor(self, rhs: Ip4) -> Ip4 {
        Ip4(self.0 ^ rhs.0)
    }
}
