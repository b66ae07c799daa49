//! Network inclusion tests.
//!
//! A network includes an address when both agree on the masked bits, and
//! includes another network when it is at least as wide and includes that
//! network's address. Operands from the other family, and text that does
//! not parse as this family, are never included.

use super::dispatch::Value;
use crate::codec::read::{read_ip4_strict, read_ip6_strict, read_net4_strict, read_net6_strict};
use crate::models::{Ip4, Ip6, Net4, Net6};

/// Set membership between a network and some operand.
pub trait Includes<T> {
    fn includes(&self, other: T) -> bool;
}

impl Includes<Ip4> for Net4 {
    fn includes(&self, ip: Ip4) -> bool {
        (self.address() & self.mask()) == (ip & self.mask())
    }
}

impl Includes<&Ip4> for Net4 {
    fn includes(&self, ip: &Ip4) -> bool {
        self.includes(*ip)
    }
}

impl Includes<Net4> for Net4 {
    fn includes(&self, other: Net4) -> bool {
        self.prefixlen() <= other.prefixlen() && self.includes(other.address())
    }
}

impl Includes<&Net4> for Net4 {
    fn includes(&self, other: &Net4) -> bool {
        self.includes(*other)
    }
}

impl Includes<Ip6> for Net4 {
    fn includes(&self, _: Ip6) -> bool {
        false
    }
}

impl Includes<Net6> for Net4 {
    fn includes(&self, _: Net6) -> bool {
        false
    }
}

impl Includes<&Value> for Net4 {
    fn includes(&self, v: &Value) -> bool {
        match v {
            Value::Ip4(ip) => self.includes(*ip),
            Value::Net4(net) => self.includes(*net),
            Value::Ip6(_) | Value::Net6(_) => false,
        }
    }
}

impl<'a> Includes<&'a str> for Net4 {
    /// Strict network parse first, then strict address parse.
    fn includes(&self, text: &'a str) -> bool {
        let s = text.as_bytes();
        if let Some(net) = read_net4_strict(s) {
            return self.includes(net);
        }
        read_ip4_strict(s).is_some_and(|ip| self.includes(ip))
    }
}

impl Includes<Ip6> for Net6 {
    fn includes(&self, ip: Ip6) -> bool {
        (self.address() & self.mask()) == (ip & self.mask())
    }
}

impl Includes<&Ip6> for Net6 {
    fn includes(&self, ip: &Ip6) -> bool {
        self.includes(*ip)
    }
}

impl Includes<Net6> for Net6 {
    fn includes(&self, other: Net6) -> bool {
        self.prefixlen() <= other.prefixlen() && self.includes(other.address())
    }
}

impl Includes<&Net6> for Net6 {
    fn includes(&self, other: &Net6) -> bool {
        self.includes(*other)
    }
}

impl Includes<Ip4> for Net6 {
    fn includes(&self, _: Ip4) -> bool {
        false
    }
}

impl Includes<Net4> for Net6 {
    fn includes(&self, _: Net4) -> bool {
        false
    }
}

impl Includes<&Value> for Net6 {
    fn includes(&self, v: &Value) -> bool {
        match v {
            Value::Ip6(ip) => self.includes(*ip),
            Value::Net6(net) => self.includes(*net),
            Value::Ip4(_) | Value::Net4(_) => false,
        }
    }
}

impl<'a> Includes<&'a str> for Net6 {
    /// Strict network parse first, then strict address parse.
    fn includes(&self, text: &'a str) -> bool {
        let s = text.as_bytes();
        if let Some(net) = read_net6_strict(s) {
            return self.includes(net);
        }
        read_ip6_strict(s).is_some_and(|ip| self.includes(ip))
    }
}
