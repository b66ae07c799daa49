//! Description of a parsed value.

use crate::processing::Value;
use serde::Serialize;

/// One parsed command line argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub input: String,
    pub kind: &'static str,
    pub value: Value,
    /// Host bits cleared; networks only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefixlen: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask: Option<Value>,
}

impl Report {
    pub fn new(input: &str, value: Value) -> Report {
        let (network, prefixlen, mask) = match value {
            Value::Net4(net) => (
                Some(Value::Net4(net.network())),
                Some(net.prefixlen()),
                Some(Value::Ip4(net.mask())),
            ),
            Value::Net6(net) => (
                Some(Value::Net6(net.network())),
                Some(net.prefixlen()),
                Some(Value::Ip6(net.mask())),
            ),
            Value::Ip4(_) | Value::Ip6(_) => (None, None, None),
        };
        Report {
            input: input.to_string(),
            kind: value.kind(),
            value,
            network,
            prefixlen,
            mask,
        }
    }
}
