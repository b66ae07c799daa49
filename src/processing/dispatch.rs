//! Family-agnostic entry points.
//!
//! [`parse`] tries the strict grammars in a fixed priority order (Net4,
//! Net6, Ip4, Ip6) and returns a [`Value`]. [`includes_any`] resolves a
//! query once and scans a heterogeneous list of [`Member`]s for a match.

use super::include::Includes;
use crate::codec::read::{read_ip4_strict, read_ip6_strict, read_net4_strict, read_net6_strict};
use crate::error::{ParseError, SummarizeError, Target, TypeMismatchError};
use crate::models::{Ip4, Ip6, Net4, Net6};
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Address family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    V4,
    V6,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Family::V4 => f.write_str("v4"),
            Family::V6 => f.write_str("v6"),
        }
    }
}

/// Any address or network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Value {
    Net4(Net4),
    Net6(Net6),
    Ip4(Ip4),
    Ip6(Ip6),
}

impl Value {
    /// Type name, as used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Net4(_) => "Net4",
            Value::Net6(_) => "Net6",
            Value::Ip4(_) => "Ip4",
            Value::Ip6(_) => "Ip6",
        }
    }

    pub fn family(&self) -> Family {
        match self {
            Value::Net4(_) | Value::Ip4(_) => Family::V4,
            Value::Net6(_) | Value::Ip6(_) => Family::V6,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Value::Net4(_) | Value::Net6(_))
    }

    /// Bitwise not of an address.
    ///
    /// # Errors
    /// [`TypeMismatchError`] for networks.
    pub fn try_not(&self) -> Result<Value, TypeMismatchError> {
        match self {
            Value::Ip4(ip) => Ok(Value::Ip4(!*ip)),
            Value::Ip6(ip) => Ok(Value::Ip6(!*ip)),
            other => Err(TypeMismatchError {
                expected: "Ip4 or Ip6",
                found: other.kind(),
            }),
        }
    }

    /// Bitwise and of two addresses of the same family.
    ///
    /// # Errors
    /// [`TypeMismatchError`] for networks or mixed families.
    pub fn try_and(&self, other: &Value) -> Result<Value, TypeMismatchError> {
        self.bitwise(other, |a, b| a & b, |a, b| a & b)
    }

    pub fn try_or(&self, other: &Value) -> Result<Value, TypeMismatchError> {
        self.bitwise(other, |a, b| a | b, |a, b| a | b)
    }

    pub fn try_xor(&self, other: &Value) -> Result<Value, TypeMismatchError> {
        self.bitwise(other, |a, b| a ^ b, |a, b| a ^ b)
    }

    fn bitwise(
        &self,
        other: &Value,
        op4: fn(Ip4, Ip4) -> Ip4,
        op6: fn(Ip6, Ip6) -> Ip6,
    ) -> Result<Value, TypeMismatchError> {
        match (self, other) {
            (Value::Ip4(a), Value::Ip4(b)) => Ok(Value::Ip4(op4(*a, *b))),
            (Value::Ip6(a), Value::Ip6(b)) => Ok(Value::Ip6(op6(*a, *b))),
            (Value::Ip4(_), found) | (Value::Ip6(_), found) => Err(TypeMismatchError {
                expected: self.kind(),
                found: found.kind(),
            }),
            (found, _) => Err(TypeMismatchError {
                expected: "Ip4 or Ip6",
                found: found.kind(),
            }),
        }
    }
}

impl From<Net4> for Value {
    fn from(net: Net4) -> Value {
        Value::Net4(net)
    }
}

impl From<Net6> for Value {
    fn from(net: Net6) -> Value {
        Value::Net6(net)
    }
}

impl From<Ip4> for Value {
    fn from(ip: Ip4) -> Value {
        Value::Ip4(ip)
    }
}

impl From<Ip6> for Value {
    fn from(ip: Ip6) -> Value {
        Value::Ip6(ip)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Net4(net) => fmt::Display::fmt(net, f),
            Value::Net6(net) => fmt::Display::fmt(net, f),
            Value::Ip4(ip) => fmt::Display::fmt(ip, f),
            Value::Ip6(ip) => fmt::Display::fmt(ip, f),
        }
    }
}

impl FromStr for Value {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Value, ParseError> {
        parse(s)
    }
}

fn resolve(s: &[u8]) -> Option<Value> {
    let value = read_net4_strict(s)
        .map(Value::Net4)
        .or_else(|| read_net6_strict(s).map(Value::Net6))
        .or_else(|| read_ip4_strict(s).map(Value::Ip4))
        .or_else(|| read_ip6_strict(s).map(Value::Ip6));
    log::trace!(
        "resolve({}) -> {}",
        String::from_utf8_lossy(s),
        value.as_ref().map_or("none", Value::kind)
    );
    value
}

/// Parse `text` as Net4, Net6, Ip4 or Ip6, first match wins.
///
/// # Errors
/// [`ParseError`] if no grammar accepts the whole input.
///
/// # Examples
/// ```
/// use subnets::{parse, Value};
/// assert!(matches!(parse("192.168.1.0/24"), Ok(Value::Net4(_))));
/// assert!(matches!(parse("::"), Ok(Value::Ip6(_))));
/// assert!(parse("1.2.3.256").is_err());
/// ```
pub fn parse(text: impl AsRef<[u8]>) -> Result<Value, ParseError> {
    let s = text.as_ref();
    resolve(s).ok_or_else(|| ParseError::new(Target::Any, s))
}

/// Smallest network covering every network in `values`.
///
/// # Errors
/// [`SummarizeError::Empty`] for an empty list, [`SummarizeError::TypeMismatch`]
/// when the list holds addresses or mixes families.
pub fn summarize(values: &[Value]) -> Result<Value, SummarizeError> {
    let first = values.first().ok_or(SummarizeError::Empty)?;
    let mismatch = |expected, found: &Value| TypeMismatchError {
        expected,
        found: found.kind(),
    };
    match first {
        Value::Net4(_) => {
            let nets = values
                .iter()
                .map(|v| match v {
                    Value::Net4(net) => Ok(*net),
                    other => Err(mismatch("Net4", other)),
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Value::Net4(Net4::summarize(&nets)?))
        }
        Value::Net6(_) => {
            let nets = values
                .iter()
                .map(|v| match v {
                    Value::Net6(net) => Ok(*net),
                    other => Err(mismatch("Net6", other)),
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Value::Net6(Net6::summarize(&nets)?))
        }
        other => Err(mismatch("Net4 or Net6", other).into()),
    }
}

/// The operand of a membership test: raw text or an already typed value.
///
/// Text is parsed once, when the query is built, and the result is kept
/// next to the text for every member that needs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query<'a> {
    Text { text: &'a str, value: Option<Value> },
    Value(Value),
}

impl<'a> Query<'a> {
    pub fn text(text: &'a str) -> Query<'a> {
        Query::Text {
            text,
            value: resolve(text.as_bytes()),
        }
    }

    /// The typed value this query stands for, if any.
    pub fn resolve(&self) -> Option<Value> {
        match self {
            Query::Text { value, .. } => *value,
            Query::Value(v) => Some(*v),
        }
    }
}

impl<'a> From<&'a str> for Query<'a> {
    fn from(text: &'a str) -> Query<'a> {
        Query::text(text)
    }
}

impl<'a> From<&'a String> for Query<'a> {
    fn from(text: &'a String) -> Query<'a> {
        Query::text(text)
    }
}

impl From<Value> for Query<'_> {
    fn from(v: Value) -> Self {
        Query::Value(v)
    }
}

impl From<Net4> for Query<'_> {
    fn from(net: Net4) -> Self {
        Query::Value(Value::Net4(net))
    }
}

impl From<Net6> for Query<'_> {
    fn from(net: Net6) -> Self {
        Query::Value(Value::Net6(net))
    }
}

impl From<Ip4> for Query<'_> {
    fn from(ip: Ip4) -> Self {
        Query::Value(Value::Ip4(ip))
    }
}

impl From<Ip6> for Query<'_> {
    fn from(ip: Ip6) -> Self {
        Query::Value(Value::Ip6(ip))
    }
}

/// Anything besides a network that can sit in an [`includes_any`] list.
pub trait Matcher {
    /// Whether this element accepts `query`.
    fn matches(&self, query: &Query<'_>) -> bool;
}

/// Matches query text, or the canonical text of a typed query.
impl Matcher for Regex {
    fn matches(&self, query: &Query<'_>) -> bool {
        match query {
            Query::Text { text, .. } => self.is_match(text),
            Query::Value(v) => self.is_match(&v.to_string()),
        }
    }
}

/// Plain text equality.
impl Matcher for String {
    fn matches(&self, query: &Query<'_>) -> bool {
        matches!(query, Query::Text { text, .. } if *text == self.as_str())
    }
}

/// Structural equality with the resolved query.
impl Matcher for Value {
    fn matches(&self, query: &Query<'_>) -> bool {
        query.resolve() == Some(*self)
    }
}

impl Matcher for Ip4 {
    fn matches(&self, query: &Query<'_>) -> bool {
        Value::Ip4(*self).matches(query)
    }
}

impl Matcher for Ip6 {
    fn matches(&self, query: &Query<'_>) -> bool {
        Value::Ip6(*self).matches(query)
    }
}

impl Matcher for Net4 {
    fn matches(&self, query: &Query<'_>) -> bool {
        Value::Net4(*self).matches(query)
    }
}

impl Matcher for Net6 {
    fn matches(&self, query: &Query<'_>) -> bool {
        Value::Net6(*self).matches(query)
    }
}

/// One element of an [`includes_any`] list.
pub enum Member {
    Net4(Net4),
    Net6(Net6),
    Other(Box<dyn Matcher + Send + Sync>),
}

impl Member {
    pub fn matcher(m: impl Matcher + Send + Sync + 'static) -> Member {
        Member::Other(Box::new(m))
    }
}

impl From<Net4> for Member {
    fn from(net: Net4) -> Member {
        Member::Net4(net)
    }
}

impl From<Net6> for Member {
    fn from(net: Net6) -> Member {
        Member::Net6(net)
    }
}

impl From<Value> for Member {
    fn from(v: Value) -> Member {
        match v {
            Value::Net4(net) => Member::Net4(net),
            Value::Net6(net) => Member::Net6(net),
            other => Member::matcher(other),
        }
    }
}

impl From<Regex> for Member {
    fn from(re: Regex) -> Member {
        Member::matcher(re)
    }
}

impl fmt::Debug for Member {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Member::Net4(net) => f.debug_tuple("Net4").field(net).finish(),
            Member::Net6(net) => f.debug_tuple("Net6").field(net).finish(),
            Member::Other(_) => f.write_str("Other(..)"),
        }
    }
}

/// Whether any member includes `query`.
///
/// Networks test inclusion against the query's typed form (text is parsed
/// once, in the same priority order as [`parse`]); a network never includes
/// a value of the other family. Every other member is asked through
/// [`Matcher::matches`] with the query as given.
///
/// # Examples
/// ```
/// use subnets::{includes_any, parse, Member};
/// let members: Vec<Member> = vec![parse("10.0.0.0/8").unwrap().into()];
/// assert!(includes_any(&members, "10.1.2.3"));
/// assert!(!includes_any(&members, "11.1.2.3"));
/// ```
pub fn includes_any<'a>(members: &[Member], query: impl Into<Query<'a>>) -> bool {
    let query = query.into();
    let resolved = query.resolve();
    let found = members.iter().any(|member| match member {
        Member::Net4(net) => resolved.is_some_and(|v| net.includes(&v)),
        Member::Net6(net) => resolved.is_some_and(|v| net.includes(&v)),
        Member::Other(m) => m.matches(&query),
    });
    log::debug!(
        "includes_any({query:?}) over {} member(s) -> {found}",
        members.len()
    );
    found
}
