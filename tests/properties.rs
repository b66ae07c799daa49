//! Property tests over the public API.

use proptest::{
    collection::vec,
    prelude::{any, prop, Just, ProptestConfig, Strategy},
    prop_assert, prop_assert_eq, prop_oneof, proptest,
};
use subnets::{
    mk_mask4, mk_mask6, parse, summarize, Includes, Ip4, Ip6, Net4, Net6, Value,
};

fn ip4() -> impl Strategy<Value = Ip4> {
    any::<u32>().prop_map(Ip4::from)
}

/// Hextets biased towards zero so `::` compression is exercised.
fn ip6() -> impl Strategy<Value = Ip6> {
    prop::array::uniform8(prop_oneof![Just(0u16), Just(1u16), any::<u16>()]).prop_map(Ip6::new)
}

fn net4() -> impl Strategy<Value = Net4> {
    (ip4(), 0..=32u8).prop_map(|(ip, p)| Net4::new(ip, p).unwrap())
}

fn net6() -> impl Strategy<Value = Net6> {
    (ip6(), 0..=128u8).prop_map(|(ip, p)| Net6::new(ip, p).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2_000))]

    #[test]
    fn ip4_round_trip(ip in ip4()) {
        let text = ip.to_string();
        prop_assert_eq!(text.parse::<Ip4>().unwrap(), ip);
        prop_assert_eq!(text, std::net::Ipv4Addr::from(ip).to_string());
    }

    #[test]
    fn ip6_round_trip(ip in ip6()) {
        let text = ip.to_string();
        let back: Ip6 = text.parse().unwrap();
        prop_assert_eq!(back, ip);
        prop_assert_eq!(back.to_string(), text.clone());
        prop_assert!(text.matches("::").count() <= 1, "{}", text);
    }

    #[test]
    fn net_round_trip(n4 in net4(), n6 in net6()) {
        prop_assert_eq!(n4.to_string().parse::<Net4>().unwrap(), n4);
        prop_assert_eq!(n6.to_string().parse::<Net6>().unwrap(), n6);
        prop_assert_eq!(parse(n4.to_string()).unwrap(), Value::Net4(n4));
        prop_assert_eq!(parse(n6.to_string()).unwrap(), Value::Net6(n6));
    }

    #[test]
    fn network_is_idempotent(n4 in net4(), n6 in net6()) {
        prop_assert_eq!(n4.network().network(), n4.network());
        prop_assert_eq!(n6.network().network(), n6.network());
        prop_assert_eq!(n4.network().prefixlen(), n4.prefixlen());
    }

    #[test]
    fn masks_are_monotonic(a in 0..=128u8, b in 0..=128u8) {
        let (lo, hi) = (a.min(b), a.max(b));
        let (m_lo, m_hi) = (mk_mask6(lo), mk_mask6(hi));
        prop_assert_eq!(m_lo & m_hi, m_lo);
        prop_assert_eq!(lo == hi, m_lo == m_hi);

        let (lo4, hi4) = (lo.min(32), hi.min(32));
        prop_assert_eq!(mk_mask4(lo4) & mk_mask4(hi4), mk_mask4(lo4));
        prop_assert_eq!(u32::from(mk_mask4(lo4)).count_ones(), u32::from(lo4));
    }

    #[test]
    fn inclusion_is_reflexive(n4 in net4(), n6 in net6()) {
        prop_assert!(n4.includes(&n4));
        prop_assert!(n4.includes(n4.network()));
        prop_assert!(n4.includes(n4.address()));
        prop_assert!(n6.includes(&n6));
        prop_assert!(n6.includes(n6.network()));
        prop_assert!(!n4.includes(n6));
        prop_assert!(!n6.includes(n4));
    }

    #[test]
    fn inclusion_matches_integer_arithmetic(n in net4(), ip in ip4()) {
        let shift = 32 - u32::from(n.prefixlen());
        let same = (u32::from(n.address()) ^ u32::from(ip)).checked_shr(shift).unwrap_or(0) == 0;
        prop_assert_eq!(n.includes(ip), same);
    }

    #[test]
    fn summarize_is_commutative(
        (nets, shuffled) in vec(net4(), 1..6).prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        prop_assert_eq!(Net4::summarize(&nets).unwrap(), Net4::summarize(&shuffled).unwrap());
    }

    #[test]
    fn summary_covers_inputs(nets in vec(net6(), 1..6)) {
        let summary = Net6::summarize(&nets).unwrap();
        for n in &nets {
            prop_assert!(summary.includes(n), "{} does not include {}", summary, n);
        }
        let values: Vec<Value> = nets.iter().copied().map(Value::from).collect();
        prop_assert_eq!(summarize(&values).unwrap(), Value::Net6(summary));
    }

    #[test]
    fn parse_is_total_on_bytes(bytes in vec(any::<u8>(), 0..48)) {
        if let Ok(value) = parse(&bytes) {
            prop_assert_eq!(parse(value.to_string()).unwrap(), value);
        }
    }

    #[test]
    fn parse_is_total_on_address_alphabet(text in "[0-9a-f:./]{0,45}") {
        if let Ok(value) = parse(&text) {
            prop_assert_eq!(parse(value.to_string()).unwrap(), value);
        }
    }
}
