//! IPv4/IPv6 addresses and CIDR networks.
//!
//! - [`models`] - the value types and mask arithmetic
//! - [`codec`] - parsing and canonical formatting
//! - [`processing`] - inclusion, summarization and the family-agnostic dispatcher
//! - [`output`] - command line rendering
//! - [`config`] - environment and logging setup for the binary
//!
//! ```
//! use subnets::{includes_any, parse, Member, Value};
//!
//! let members: Vec<Member> = ["10.0.0.0/8", "2001:db8::/32"]
//!     .iter()
//!     .map(|s| parse(s).map(Member::from))
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert!(includes_any(&members, "10.20.30.40"));
//! assert!(includes_any(&members, "2001:db8::1/64"));
//! assert!(!includes_any(&members, "192.168.0.1"));
//! assert!(matches!(parse("::1").unwrap(), Value::Ip6(_)));
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

// Re-export public types
pub use codec::{format_ip4, format_ip6, format_net4, format_net6};
pub use codec::{parse_ip4, parse_ip6, parse_net4, parse_net6};
pub use error::{Error, ParseError, RangeError, Result, SummarizeError, Target, TypeMismatchError};
pub use models::{mk_mask4, mk_mask6, Ip4, Ip6, Net4, Net6};
pub use processing::{includes_any, parse, summarize, Family, Includes, Matcher, Member, Query, Value};
