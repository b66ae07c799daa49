//! Serde support: every value serializes as its canonical string.

use crate::models::{Ip4, Ip6, Net4, Net6};
use crate::processing::Value;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Display;
use std::str::FromStr;

fn serialize_display<T: Display, S: Serializer>(v: &T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(v)
}

fn deserialize_parsed<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: FromStr,
    T::Err: Display,
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.parse().map_err(de::Error::custom)
}

impl Serialize for Ip4 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_display(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Ip4 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Ip4, D::Error> {
        deserialize_parsed(deserializer)
    }
}

impl Serialize for Ip6 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_display(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Ip6 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Ip6, D::Error> {
        deserialize_parsed(deserializer)
    }
}

impl Serialize for Net4 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_display(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Net4 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Net4, D::Error> {
        deserialize_parsed(deserializer)
    }
}

impl Serialize for Net6 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_display(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Net6 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Net6, D::Error> {
        deserialize_parsed(deserializer)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_display(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Value, D::Error> {
        deserialize_parsed(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Route {
        prefix: Net4,
        next_hop: Ip4,
        v6: Option<Net6>,
    }

    #[test]
    fn test_serialize_as_string() {
        let route = Route {
            prefix: "10.0.0.0/8".parse().unwrap(),
            next_hop: Ip4::new(10, 0, 0, 1),
            v6: Some("2001:db8::/32".parse().unwrap()),
        };
        let json = serde_json::to_string(&route).unwrap();
        assert_eq!(
            json,
            r#"{"prefix":"10.0.0.0/8","next_hop":"10.0.0.1","v6":"2001:db8::/32"}"#
        );
        let back: Route = serde_json::from_str(&json).unwrap();
        assert_eq!(back, route);
    }

    #[test]
    fn test_deserialize_rejects_invalid() {
        let err = serde_json::from_str::<Ip6>(r#""2001::db8::1""#).unwrap_err();
        assert!(err.to_string().contains("failed to parse as ip6"));
        assert!(serde_json::from_str::<Net4>(r#""1.2.3.4/33""#).is_err());
    }

    #[test]
    fn test_value_list() {
        let values: Vec<Value> =
            serde_json::from_str(r#"["10.0.0.0/8", "::1", "1.2.3.4", "fe80::/10"]"#).unwrap();
        let kinds: Vec<&str> = values.iter().map(Value::kind).collect();
        assert_eq!(kinds, ["Net4", "Ip6", "Ip4", "Net6"]);
        assert_eq!(
            serde_json::to_string(&values).unwrap(),
            r#"["10.0.0.0/8","::1","1.2.3.4","fe80::/10"]"#
        );
    }
}
