//! Text codec for addresses and networks.
//!
//! - [`read`] - byte-slice parsers, lenient and strict
//! - [`write`] - canonical `Display`/`Debug` formatting
//! - `serial` - string based serde support

pub mod read;
mod serial;
pub mod write;

pub use read::{parse_ip4, parse_ip6, parse_net4, parse_net6};
pub use write::{format_ip4, format_ip6, format_net4, format_net6};
