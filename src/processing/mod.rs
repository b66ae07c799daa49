//! Operations over parsed values.
//!
//! This module contains the logic that consumes addresses and networks:
//! - [`include`] - inclusion tests between a network and an operand
//! - `summarize` - smallest covering network of a list
//! - [`dispatch`] - family-agnostic parsing and membership tests

pub mod dispatch;
pub mod include;
mod summarize;

// Re-export public types and functions
pub use dispatch::{includes_any, parse, summarize, Family, Matcher, Member, Query, Value};
pub use include::Includes;
