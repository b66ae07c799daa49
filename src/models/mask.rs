//! Netmask arithmetic.
//!
//! There is exactly one mask per prefix length per family: the top
//! `prefixlen` bits set, the rest clear.

use super::{Ip4, Ip6};
use crate::error::RangeError;
use std::cmp::Ordering;

/// Number of bits in an IPv4 address.
pub const MAX_PREFIXLEN4: u8 = 32;
/// Number of bits in an IPv6 address.
pub const MAX_PREFIXLEN6: u8 = 128;

/// Build the IPv4 netmask for `prefixlen`.
///
/// Lengths above 32 saturate to the all-ones mask.
///
/// # Examples
/// ```
/// use subnets::models::mk_mask4;
/// assert_eq!(u32::from(mk_mask4(24)), 0xFFFFFF00);
/// assert_eq!(u32::from(mk_mask4(0)), 0);
/// ```
pub fn mk_mask4(prefixlen: u8) -> Ip4 {
    let right_len = u32::from(MAX_PREFIXLEN4 - prefixlen.min(MAX_PREFIXLEN4));
    Ip4::from(u32::MAX.checked_shl(right_len).unwrap_or(0))
}

/// Build the IPv6 netmask for `prefixlen`.
///
/// Hextets before `prefixlen / 16` are all ones, the hextet at that index
/// keeps its top `prefixlen % 16` bits, everything after is zero.
/// Lengths above 128 saturate to the all-ones mask.
pub fn mk_mask6(prefixlen: u8) -> Ip6 {
    let prefixlen = usize::from(prefixlen.min(MAX_PREFIXLEN6));
    let pivot = prefixlen / 16;
    let shift = (16 - prefixlen % 16) as u32;
    let mut hextets = [0u16; 8];
    for (i, h) in hextets.iter_mut().enumerate() {
        *h = match i.cmp(&pivot) {
            Ordering::Less => u16::MAX,
            Ordering::Equal => u16::MAX.checked_shl(shift).unwrap_or(0),
            Ordering::Greater => 0,
        };
    }
    Ip6::new(hextets)
}

/// Prefix length of a contiguous IPv4 netmask.
///
/// # Errors
/// [`RangeError::Netmask`] if the set bits are not a leading run.
pub fn mask4_prefixlen(mask: Ip4) -> Result<u8, RangeError> {
    let mask = u32::from(mask);
    let prefix = mask.leading_ones();
    if mask.checked_shl(prefix).unwrap_or(0) == 0 {
        Ok(prefix as u8)
    } else {
        Err(RangeError::Netmask)
    }
}

/// Prefix length of a contiguous IPv6 netmask.
///
/// # Errors
/// [`RangeError::Netmask`] if the set bits are not a leading run.
pub fn mask6_prefixlen(mask: Ip6) -> Result<u8, RangeError> {
    let mask = u128::from(mask);
    let prefix = mask.leading_ones();
    if mask.checked_shl(prefix).unwrap_or(0) == 0 {
        Ok(prefix as u8)
    } else {
        Err(RangeError::Netmask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mk_mask4() {
        assert_eq!(u32::from(mk_mask4(0)), 0x00000000);
        assert_eq!(u32::from(mk_mask4(1)), 0x80000000);
        assert_eq!(u32::from(mk_mask4(8)), 0xFF000000);
        assert_eq!(u32::from(mk_mask4(16)), 0xFFFF0000);
        assert_eq!(u32::from(mk_mask4(24)), 0xFFFFFF00);
        assert_eq!(u32::from(mk_mask4(31)), 0xFFFFFFFE);
        assert_eq!(u32::from(mk_mask4(32)), 0xFFFFFFFF);
    }

    #[test]
    fn test_mk_mask6() {
        assert_eq!(mk_mask6(0).hextets(), [0; 8]);
        assert_eq!(mk_mask6(128).hextets(), [0xffff; 8]);
        assert_eq!(
            mk_mask6(20).hextets(),
            [0xffff, 0xf000, 0, 0, 0, 0, 0, 0]
        );
        assert_eq!(
            mk_mask6(64).hextets(),
            [0xffff, 0xffff, 0xffff, 0xffff, 0, 0, 0, 0]
        );
        assert_eq!(
            mk_mask6(127).hextets(),
            [0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xfffe]
        );
    }

    #[test]
    fn test_mk_mask6_matches_u128_shift() {
        for p in 0..=128u8 {
            let expected = u128::MAX.checked_shl(128 - u32::from(p)).unwrap_or(0);
            assert_eq!(u128::from(mk_mask6(p)), expected, "prefixlen {p}");
        }
    }

    #[test]
    fn test_mask_prefixlen_inverse() {
        for p in 0..=MAX_PREFIXLEN4 {
            assert_eq!(mask4_prefixlen(mk_mask4(p)), Ok(p));
        }
        for p in 0..=MAX_PREFIXLEN6 {
            assert_eq!(mask6_prefixlen(mk_mask6(p)), Ok(p));
        }
        assert_eq!(
            mask4_prefixlen(Ip4::from(0xFF00FF00)),
            Err(RangeError::Netmask)
        );
        assert_eq!(
            mask6_prefixlen(Ip6::new([0, 0xffff, 0, 0, 0, 0, 0, 0])),
            Err(RangeError::Netmask)
        );
    }
}
