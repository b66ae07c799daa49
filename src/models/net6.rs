//! IPv6 network in CIDR notation.

use super::mask::{mask6_prefixlen, mk_mask6, MAX_PREFIXLEN6};
use super::Ip6;
use crate::error::RangeError;
use rand::Rng;

/// An IPv6 network: an address, a prefix length and the mask derived from it.
///
/// Same rules as [`Net4`](super::Net4): the address keeps its host bits.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Net6 {
    address: Ip6,
    prefixlen: u8,
    mask: Ip6,
}

impl Net6 {
    /// Create a network from an address and prefix length.
    ///
    /// # Errors
    /// [`RangeError::PrefixLen`] if `prefixlen` is above 128.
    pub fn new(address: impl Into<Ip6>, prefixlen: u8) -> Result<Net6, RangeError> {
        if prefixlen > MAX_PREFIXLEN6 {
            return Err(RangeError::PrefixLen {
                max: MAX_PREFIXLEN6,
                found: prefixlen,
            });
        }
        Ok(Net6::from_parts(address.into(), prefixlen))
    }

    /// Create a network from a hextet slice, which must hold exactly eight values.
    ///
    /// # Examples
    /// ```
    /// use subnets::Net6;
    /// let net = Net6::from_hextets(&[0x1, 0x2, 0x44, 0x55, 0xef, 0, 0, 0], 128).unwrap();
    /// assert_eq!(net.to_string(), "1:2:44:55:ef::/128");
    /// assert!(Net6::from_hextets(&[0; 7], 128).is_err());
    /// ```
    pub fn from_hextets(hextets: &[u16], prefixlen: u8) -> Result<Net6, RangeError> {
        Net6::new(Ip6::try_from(hextets)?, prefixlen)
    }

    /// Create a network from an address and a contiguous netmask.
    pub fn with_netmask(address: impl Into<Ip6>, mask: Ip6) -> Result<Net6, RangeError> {
        let prefixlen = mask6_prefixlen(mask)?;
        Ok(Net6::from_parts(address.into(), prefixlen))
    }

    /// Callers guarantee `prefixlen <= 128`.
    pub(crate) fn from_parts(address: Ip6, prefixlen: u8) -> Net6 {
        debug_assert!(prefixlen <= MAX_PREFIXLEN6);
        Net6 {
            address,
            prefixlen,
            mask: mk_mask6(prefixlen),
        }
    }

    pub fn address(&self) -> Ip6 {
        self.address
    }

    pub fn prefixlen(&self) -> u8 {
        self.prefixlen
    }

    pub fn mask(&self) -> Ip6 {
        self.mask
    }

    /// Hextets of the stored address.
    pub fn hextets(&self) -> [u16; 8] {
        self.address.hextets()
    }

    /// The same network with host bits cleared.
    pub fn network(&self) -> Net6 {
        Net6 {
            address: self.address & self.mask,
            ..*self
        }
    }

    /// A random network with a prefix length uniform in `[0,128]`.
    ///
    /// `zeros` is passed on to [`Ip6::random`].
    pub fn random<R: Rng + ?Sized>(rng: &mut R, zeros: bool) -> Net6 {
        let address = Ip6::random(rng, zeros);
        Net6::from_parts(address, rng.gen_range(0..=MAX_PREFIXLEN6))
    }
}
