//! IPv4 network in CIDR notation.

use super::mask::{mask4_prefixlen, mk_mask4, MAX_PREFIXLEN4};
use super::Ip4;
use crate::error::RangeError;
use rand::Rng;

/// An IPv4 network: an address, a prefix length and the mask derived from it.
///
/// The address is kept verbatim, host bits included; use [`Net4::network`]
/// to clear them. The mask is never chosen independently of the prefix length.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Net4 {
    address: Ip4,
    prefixlen: u8,
    mask: Ip4,
}

impl Net4 {
    /// Create a network from an address and prefix length.
    ///
    /// # Errors
    /// [`RangeError::PrefixLen`] if `prefixlen` is above 32.
    ///
    /// # Examples
    /// ```
    /// use subnets::{Ip4, Net4};
    /// let net = Net4::new(Ip4::new(192, 168, 1, 0), 24).unwrap();
    /// assert_eq!(net.to_string(), "192.168.1.0/24");
    /// assert!(Net4::new(Ip4::new(1, 2, 3, 4), 33).is_err());
    /// ```
    pub fn new(address: impl Into<Ip4>, prefixlen: u8) -> Result<Net4, RangeError> {
        if prefixlen > MAX_PREFIXLEN4 {
            return Err(RangeError::PrefixLen {
                max: MAX_PREFIXLEN4,
                found: prefixlen,
            });
        }
        Ok(Net4::from_parts(address.into(), prefixlen))
    }

    /// Create a network from an address and a contiguous netmask.
    pub fn with_netmask(address: impl Into<Ip4>, mask: Ip4) -> Result<Net4, RangeError> {
        let prefixlen = mask4_prefixlen(mask)?;
        Ok(Net4::from_parts(address.into(), prefixlen))
    }

    /// Callers guarantee `prefixlen <= 32`.
    pub(crate) fn from_parts(address: Ip4, prefixlen: u8) -> Net4 {
        debug_assert!(prefixlen <= MAX_PREFIXLEN4);
        Net4 {
            address,
            prefixlen,
            mask: mk_mask4(prefixlen),
        }
    }

    pub fn address(&self) -> Ip4 {
        self.address
    }

    pub fn prefixlen(&self) -> u8 {
        self.prefixlen
    }

    pub fn mask(&self) -> Ip4 {
        self.mask
    }

    /// The same network with host bits cleared.
    pub fn network(&self) -> Net4 {
        Net4 {
            address: self.address & self.mask,
            ..*self
        }
    }

    /// A random address with a prefix length uniform in `[0,32]`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Net4 {
        let address = Ip4::random(rng);
        Net4::from_parts(address, rng.gen_range(0..=MAX_PREFIXLEN4))
    }
}
