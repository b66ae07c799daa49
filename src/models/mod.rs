//! Address and network value types.
//!
//! - [`Ip4`] / [`Ip6`] - host addresses with bitwise algebra
//! - [`Net4`] / [`Net6`] - CIDR networks (address, prefix length, derived mask)
//! - [`mask`] - netmask construction and its inverse

pub mod mask;

mod ip4;
mod ip6;
mod net4;
mod net6;

// Re-export public types
pub use ip4::Ip4;
pub use ip6::Ip6;
pub use mask::{mask4_prefixlen, mask6_prefixlen, mk_mask4, mk_mask6, MAX_PREFIXLEN4, MAX_PREFIXLEN6};
pub use net4::Net4;
pub use net6::Net6;
