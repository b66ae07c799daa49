//! Network summarization.
//!
//! The summary of a list of networks is the smallest network covering all
//! of them. It is computed as a left fold of the pairwise smallest common
//! supernet, which is commutative and associative, so input order does not
//! change the result.

use crate::error::SummarizeError;
use crate::models::{mk_mask4, mk_mask6, Net4, Net6};

impl Net4 {
    /// Smallest network covering both `self` and `other`.
    ///
    /// The result always has its host bits cleared.
    pub fn supernet(&self, other: &Net4) -> Net4 {
        let mut prefixlen = self.prefixlen().min(other.prefixlen());
        let mut address = self.address() & mk_mask4(prefixlen);
        // converges: at prefixlen 0 both sides mask to zero
        while address != other.address() & mk_mask4(prefixlen) {
            prefixlen -= 1;
            address = address & mk_mask4(prefixlen);
        }
        Net4::from_parts(address, prefixlen)
    }

    /// Smallest network covering every network in `nets`.
    ///
    /// # Errors
    /// [`SummarizeError::Empty`] if `nets` is empty.
    ///
    /// # Examples
    /// ```
    /// use subnets::Net4;
    /// let nets: Vec<Net4> = ["10.0.0.0/24", "10.0.1.0/24"]
    ///     .iter()
    ///     .map(|s| s.parse().unwrap())
    ///     .collect();
    /// assert_eq!(Net4::summarize(&nets).unwrap().to_string(), "10.0.0.0/23");
    /// ```
    pub fn summarize(nets: &[Net4]) -> Result<Net4, SummarizeError> {
        let (first, rest) = nets.split_first().ok_or(SummarizeError::Empty)?;
        let summary = rest
            .iter()
            .fold(first.network(), |acc, net| {
                let next = acc.supernet(net);
                if next != acc {
                    log::debug!("widened {acc} to {next} for {net}");
                }
                next
            });
        log::debug!("summarized {} net4(s) to {summary}", nets.len());
        Ok(summary)
    }
}

impl Net6 {
    /// Smallest network covering both `self` and `other`.
    ///
    /// The result always has its host bits cleared.
    pub fn supernet(&self, other: &Net6) -> Net6 {
        let mut prefixlen = self.prefixlen().min(other.prefixlen());
        let mut address = self.address() & mk_mask6(prefixlen);
        while address != other.address() & mk_mask6(prefixlen) {
            prefixlen -= 1;
            address = address & mk_mask6(prefixlen);
        }
        Net6::from_parts(address, prefixlen)
    }

    /// Smallest network covering every network in `nets`.
    ///
    /// # Errors
    /// [`SummarizeError::Empty`] if `nets` is empty.
    pub fn summarize(nets: &[Net6]) -> Result<Net6, SummarizeError> {
        let (first, rest) = nets.split_first().ok_or(SummarizeError::Empty)?;
        let summary = rest
            .iter()
            .fold(first.network(), |acc, net| {
                let next = acc.supernet(net);
                if next != acc {
                    log::debug!("widened {acc} to {next} for {net}");
                }
                next
            });
        log::debug!("summarized {} net6(s) to {summary}", nets.len());
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::Includes;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn nets4(list: &[&str]) -> Vec<Net4> {
        list.iter().map(|s| s.parse().unwrap()).collect()
    }

    fn nets6(list: &[&str]) -> Vec<Net6> {
        list.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_summarize_net4() {
        let data = [
            ("192.168.0.0/24", vec!["192.168.0.0/25", "192.168.0.128/25"]),
            ("10.0.0.0/8", vec!["10.0.0.0/24", "10.250.2.3/19"]),
            ("10.0.0.0/23", vec!["10.0.0.0/24", "10.0.1.0/24"]),
            ("10.0.0.0/22", vec!["10.0.0.0/24", "10.0.3.0/24"]),
            ("0.0.0.0/0", vec!["0.0.0.0/1", "128.0.0.0/1"]),
            ("1.2.3.0/24", vec!["1.2.3.4/24"]),
        ];
        for (summ, nets) in data {
            let summary = Net4::summarize(&nets4(&nets)).unwrap();
            assert_eq!(summary, summ.parse().unwrap(), "{nets:?}");
        }
    }

    #[test]
    fn test_summarize_net6() {
        let data = [
            ("2001:db8::/32", vec!["2001:db8::/48", "2001:db8:ffff::/48"]),
            ("::/0", vec!["::/1", "8000::/1"]),
            ("1:2:3:4::/64", vec!["1:2:3:4::1/128", "1:2:3:4:8000::/65"]),
            ("fe80::/10", vec!["fe80::1/10"]),
        ];
        for (summ, nets) in data {
            let summary = Net6::summarize(&nets6(&nets)).unwrap();
            assert_eq!(summary, summ.parse().unwrap(), "{nets:?}");
        }
    }

    #[test]
    fn test_summarize_empty() {
        assert_eq!(Net4::summarize(&[]), Err(SummarizeError::Empty));
        assert_eq!(Net6::summarize(&[]), Err(SummarizeError::Empty));
    }

    #[test]
    fn test_summarize_order_independent() {
        let nets = nets4(&["10.9.0.0/16", "10.1.2.0/24", "10.3.0.0/20", "10.8.7.6/32"]);
        let expected = Net4::summarize(&nets).unwrap();
        assert_eq!(expected.to_string(), "10.0.0.0/12");
        for perm in nets.iter().copied().permutations(nets.len()) {
            assert_eq!(Net4::summarize(&perm).unwrap(), expected);
        }
    }

    #[test]
    fn test_summary_includes_inputs() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..500 {
            let nets: Vec<Net4> = (0..3).map(|_| Net4::random(&mut rng)).collect();
            let summ = Net4::summarize(&nets).unwrap();
            assert!(nets.iter().all(|n| summ.includes(n)), "{summ} {nets:?}");

            let nets: Vec<Net6> = (0..3).map(|_| Net6::random(&mut rng, true)).collect();
            let summ = Net6::summarize(&nets).unwrap();
            assert!(nets.iter().all(|n| summ.includes(n)), "{summ} {nets:?}");
        }
    }
}
