//! Integration tests for subnets
//!
//! These tests go through the public API the way a caller would: parse text,
//! inspect and format the values, test membership and summarize.

use regex::Regex;
use subnets::{
    includes_any, mk_mask6, parse, parse_ip6, parse_net4, summarize, Includes, Ip4, Ip6, Member,
    Net4, Net6, ParseError, SummarizeError, Target, Value,
};

fn members(nets: &[&str]) -> Vec<Member> {
    nets.iter()
        .map(|n| parse(n).map(Member::from))
        .collect::<Result<_, _>>()
        .expect("member list should parse")
}

#[test]
fn test_parse_net4_scenario() {
    let value = parse("192.168.1.0/24").unwrap();
    let Value::Net4(net) = value else {
        panic!("expected Net4, got {value:?}");
    };
    assert_eq!(net.address(), Ip4::new(192, 168, 1, 0));
    assert_eq!(net.prefixlen(), 24);
    assert_eq!(net.mask(), Ip4::new(255, 255, 255, 0));
    assert_eq!(value.to_string(), "192.168.1.0/24");
}

#[test]
fn test_parse_ip6_scenarios() {
    assert_eq!(parse("::").unwrap(), Value::Ip6(Ip6::default()));
    assert_eq!(parse("::").unwrap().to_string(), "::");

    let ip = parse_ip6("2001:db8::1").unwrap();
    assert_eq!(ip.hextets(), [0x2001, 0x0db8, 0, 0, 0, 0, 0, 1]);
    assert_eq!(ip.to_string(), "2001:db8::1");

    let mapped = parse_ip6("::ffff:192.0.2.1").unwrap();
    assert_eq!(mapped.hextets()[5..], [0xffff, 0xc000, 0x0201]);
}

#[test]
fn test_zero_run_tie_break() {
    let ip = Ip6::new([1, 0, 0, 1, 0, 0, 1, 1]);
    assert_eq!(ip.to_string(), "1::1:0:0:1:1");
    assert_eq!(ip.to_string().parse::<Ip6>().unwrap(), ip);
}

#[test]
fn test_parse_dispatch_kinds() {
    assert!(matches!(parse("192.168.1.1/24"), Ok(Value::Net4(_))));
    assert!(matches!(parse("1::1/2"), Ok(Value::Net6(_))));
    assert!(matches!(parse("192.168.1.1"), Ok(Value::Ip4(_))));
    assert!(matches!(parse("1::1"), Ok(Value::Ip6(_))));
}

#[test]
fn test_invalid_inputs_rejected() {
    for s in [
        "1.2.3.256",
        "1.2.3",
        "01.2.3.4",
        "2001::db8::1",
        ":1::",
        "2001:db8::1/200",
        "192.168.1.256/24",
        "",
    ] {
        let err: ParseError = parse(s).unwrap_err();
        assert_eq!(err.target(), Target::Any, "{s}");
        assert_eq!(err.text(), s);
    }
}

#[test]
fn test_parse_error_message_truncated() {
    let long = "x".repeat(60);
    let err = parse(&long).unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("failed to parse as {{v4,v6}}{{net,ip}}: '{}...'", "x".repeat(45))
    );
}

#[test]
fn test_includes_any_scenario() {
    let list = members(&["10.0.0.0/8"]);
    assert!(includes_any(&list, "10.1.2.3"));
    assert!(!includes_any(&list, "11.1.2.3"));
}

#[test]
fn test_includes_any_mixed_members() {
    let mut list = members(&["192.168.5.0/24", "10.1.0.0/16", "11:22::/16"]);
    list.push(Member::from(Regex::new(r"^192\.").unwrap()));
    list.push(Member::from(Regex::new("someregex").unwrap()));

    for q in ["192.168.5.4", "10.1.1.1", "11:22::33", "11:22:33::", "someregex"] {
        assert!(includes_any(&list, q), "{q}");
    }
    for q in ["1.2.3.4", "::1", "33::"] {
        assert!(!includes_any(&list, q), "{q}");
    }
    // typed queries skip the text parse
    assert!(includes_any(&list, Ip4::new(10, 1, 200, 3)));
    assert!(!includes_any(&list, Ip4::new(10, 2, 0, 0)));
}

#[test]
fn test_includes_any_empty_list() {
    assert!(!includes_any(&[], "10.0.0.1"));
}

#[test]
fn test_summarize_scenario() {
    let a = parse_net4("10.0.0.0/24").unwrap();
    let b = parse_net4("10.0.1.0/24").unwrap();
    assert_eq!(Net4::summarize(&[a, b]).unwrap(), parse_net4("10.0.0.0/23").unwrap());

    let values = [Value::from(a), Value::from(b)];
    assert_eq!(summarize(&values).unwrap().to_string(), "10.0.0.0/23");
}

#[test]
fn test_summarize_rejects_mixed() {
    let values = [parse("10.0.0.0/8").unwrap(), parse("::/0").unwrap()];
    assert!(matches!(
        summarize(&values),
        Err(SummarizeError::TypeMismatch(_))
    ));
    assert_eq!(summarize(&[]), Err(SummarizeError::Empty));
}

#[test]
fn test_network_and_inclusion() {
    let net: Net6 = "2001:db8:1:2::5/64".parse().unwrap();
    assert_eq!(net.network().to_string(), "2001:db8:1:2::/64");
    assert_eq!(net.mask(), mk_mask6(64));
    assert!(net.includes(&net));
    assert!(net.includes(net.network()));
    assert!(net.network().includes(&net));
    assert!(!net.includes("2001:db8:1:3::1"));
    assert!(!net.includes(Ip4::new(1, 2, 3, 4)));
}

#[test]
fn test_value_bitwise() {
    let a = parse("255.255.0.0").unwrap();
    let b = parse("10.20.30.40").unwrap();
    assert_eq!(a.try_and(&b).unwrap().to_string(), "10.20.0.0");
    assert_eq!(a.try_not().unwrap().to_string(), "0.0.255.255");
    assert!(a.try_or(&parse("::1").unwrap()).is_err());
    assert!(parse("10.0.0.0/8").unwrap().try_not().is_err());
}

#[test]
fn test_serde_value() {
    let values: Vec<Value> = serde_json::from_str(r#"["10.0.0.0/8", "2001:DB8::0:1"]"#).unwrap();
    assert_eq!(
        serde_json::to_string(&values).unwrap(),
        r#"["10.0.0.0/8","2001:db8::1"]"#
    );
}
