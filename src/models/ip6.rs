//! IPv6 host address.

use crate::error::RangeError;
use rand::Rng;
use std::net::Ipv6Addr;
use std::ops::{BitAnd, BitOr, BitXor, Not};

/// An IPv6 address: eight 16-bit hextets, most significant first.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ip6([u16; 8]);

impl Ip6 {
    pub const fn new(hextets: [u16; 8]) -> Ip6 {
        Ip6(hextets)
    }

    pub const fn hextets(&self) -> [u16; 8] {
        self.0
    }

    /// A random address.
    ///
    /// With `zeros` set, a run of zero hextets of random length is placed at
    /// a random position so the canonical form usually contains `::`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, zeros: bool) -> Ip6 {
        let (pre, run) = if zeros {
            let pre = rng.gen_range(0..=8);
            (pre, rng.gen_range(0..=8 - pre))
        } else {
            (8, 0)
        };

        let mut hextets = [0u16; 8];
        for (i, h) in hextets.iter_mut().enumerate() {
            if i < pre || i >= pre + run {
                *h = rng.gen();
            }
        }
        Ip6(hextets)
    }

    fn zip_with(self, rhs: Ip6, op: impl Fn(u16, u16) -> u16) -> Ip6 {
        Ip6(std::array::from_fn(|i| op(self.0[i], rhs.0[i])))
    }
}

impl From<[u16; 8]> for Ip6 {
    fn from(hextets: [u16; 8]) -> Ip6 {
        Ip6(hextets)
    }
}

impl TryFrom<&[u16]> for Ip6 {
    type Error = RangeError;

    fn try_from(hextets: &[u16]) -> Result<Ip6, RangeError> {
        <[u16; 8]>::try_from(hextets)
            .map(Ip6)
            .map_err(|_| RangeError::HextetCount(hextets.len()))
    }
}

impl From<u128> for Ip6 {
    fn from(bits: u128) -> Ip6 {
        Ip6(std::array::from_fn(|i| (bits >> (16 * (7 - i))) as u16))
    }
}

impl From<Ip6> for u128 {
    fn from(ip: Ip6) -> u128 {
        ip.0.iter().fold(0, |acc, &h| (acc << 16) | u128::from(h))
    }
}

impl From<Ipv6Addr> for Ip6 {
    fn from(addr: Ipv6Addr) -> Ip6 {
        Ip6(addr.segments())
    }
}

impl From<Ip6> for Ipv6Addr {
    fn from(ip: Ip6) -> Ipv6Addr {
        Ipv6Addr::from(ip.0)
    }
}

impl Not for Ip6 {
    type Output = Ip6;

    fn not(self) -> Ip6 {
        Ip6(self.0.map(|h| !h))
    }
}

impl BitAnd for Ip6 {
    type Output = Ip6;

    fn bitand(self, rhs: Ip6) -> Ip6 {
        self.zip_with(rhs, |a, b| a & b)
    }
}

impl BitOr for Ip6 {
    type Output = Ip6;

    fn bitor(self, rhs: Ip6) -> Ip6 {
        self.zip_with(rhs, |a, b| a | b)
    }
}

impl BitXor for Ip6 {
    type Output = Ip6;

    fn bitxor(self, rhs: Ip6) -> Ip6 {
        self.zip_with(rhs, |a, b| a ^ b)
    }
}
