// ── Candidate picker ──

use rand::Rng;

use crate::model::Connection;

/// Pick one candidate uniformly over the list's current order.
///
/// The random source comes from the caller — never a process-global
/// generator — so a fixed seed and a fixed candidate order reproduce the
/// same choice bit-exactly. Candidate order is whatever the selector
/// produced (server order × IP order), itself deterministic for a
/// deterministic catalog.
///
/// Callers guarantee `candidates` is non-empty; the empty case has
/// already been reported as
/// [`SelectError::NoCandidates`](super::SelectError::NoCandidates).
pub fn pick(candidates: &[Connection], rng: &mut impl Rng) -> Connection {
    let index = rng.random_range(0..candidates.len());
    candidates[index].clone()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::net::{IpAddr, Ipv4Addr};

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::model::{TransportProtocol, VpnType};

    fn candidate(last: u8) -> Connection {
        Connection {
            vpn: VpnType::OpenVpn,
            ip: IpAddr::V4(Ipv4Addr::new(10, 0, 0, last)),
            port: 1194,
            protocol: TransportProtocol::Udp,
            hostname: format!("srv{last}.example.com"),
            server_name: format!("srv{last}"),
            pub_key: None,
        }
    }

    #[test]
    fn single_candidate_is_always_picked() {
        let candidates = vec![candidate(1)];
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pick(&candidates, &mut rng), candidates[0]);
    }

    #[test]
    fn same_seed_same_pick() {
        let candidates: Vec<Connection> = (1..=20).map(candidate).collect();

        let first = pick(&candidates, &mut StdRng::seed_from_u64(42));
        let second = pick(&candidates, &mut StdRng::seed_from_u64(42));

        assert_eq!(first, second);
    }

    #[test]
    fn covers_the_whole_range_eventually() {
        let candidates: Vec<Connection> = (1..=3).map(candidate).collect();
        let mut rng = StdRng::seed_from_u64(0);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(pick(&candidates, &mut rng).ip);
        }
        assert_eq!(seen.len(), 3);
    }
}
