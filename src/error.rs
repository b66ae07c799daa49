//! Error types.
//!
//! Parse failures, out of range constructor arguments and operand type
//! mismatches are kept apart so callers can tell malformed input from misuse.

use std::fmt;

/// Longest input kept verbatim in a [`ParseError`] message.
pub const MAX_ERROR_TEXT: usize = 45;

/// The grammar(s) a failed parse was attempted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Ip4,
    Ip6,
    Net4,
    Net6,
    /// Dispatcher parse: every grammar in priority order.
    Any,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Target::Ip4 => "ip4",
            Target::Ip6 => "ip6",
            Target::Net4 => "net4",
            Target::Net6 => "net6",
            Target::Any => "{v4,v6}{net,ip}",
        };
        f.write_str(s)
    }
}

/// Input could not be parsed as the requested type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to parse as {target}: '{text}'")]
pub struct ParseError {
    target: Target,
    text: String,
}

impl ParseError {
    /// Build an error for `input`, keeping at most [`MAX_ERROR_TEXT`] characters of it.
    pub fn new(target: Target, input: &[u8]) -> ParseError {
        let lossy = String::from_utf8_lossy(input);
        let text = if lossy.chars().count() > MAX_ERROR_TEXT {
            let mut short: String = lossy.chars().take(MAX_ERROR_TEXT).collect();
            short.push_str("...");
            short
        } else {
            lossy.into_owned()
        };
        ParseError { target, text }
    }

    pub fn target(&self) -> Target {
        self.target
    }

    /// The offending input, possibly truncated.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A numeric constructor was handed a value outside its family's range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("prefixlen must be in range [0,{max}], was {found}")]
    PrefixLen { max: u8, found: u8 },
    #[error("hextets must be size=8, was {0}")]
    HextetCount(usize),
    #[error("netmask is not a contiguous run of leading ones")]
    Netmask,
}

/// An operand of the wrong family or kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("wrong argument type {found} (expected {expected})")]
pub struct TypeMismatchError {
    pub expected: &'static str,
    pub found: &'static str,
}

/// Summarization was called with unusable input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SummarizeError {
    #[error("cannot summarize an empty list of networks")]
    Empty,
    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatchError),
}

/// Any error raised by this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Range(#[from] RangeError),
    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatchError),
    #[error(transparent)]
    Summarize(#[from] SummarizeError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
