// ── Catalog builder ──
//
// Flattens raw listing groups into canonical servers: skips disabled
// endpoints, resolves country codes, applies the free-tier heuristic,
// dedups by IP address and sorts deterministically. Two count floors are
// enforced: one on enabled raw endpoints and one on unique servers, since
// dedup can silently collapse enough entries to breach the floor even
// when the raw input looked sufficient.

use std::collections::HashMap;
use std::net::IpAddr;

use thiserror::Error;

use crate::model::Server;
use crate::warn::Warner;

use super::countries::{COUNTRY_CODES, code_to_country};
use super::raw::RawGroup;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Raw or deduplicated server count below the required floor.
    /// Recoverable: callers typically keep the previous catalog.
    #[error("not enough servers: {count} and expected at least {min}")]
    NotEnoughServers { count: usize, min: usize },
}

/// Build the canonical server catalog from raw provider groups.
///
/// Deterministic: the same input always yields a catalog equal in content
/// and order. Output is sorted by (country, region, city, server name) in
/// ascending byte order so snapshots stay diff-stable across refreshes.
///
/// Non-fatal conditions — disabled endpoints and unknown country codes —
/// are reported through `warner` and processing continues.
pub fn build_catalog(
    groups: &[RawGroup],
    min_servers: usize,
    warner: &dyn Warner,
) -> Result<Vec<Server>, CatalogError> {
    let enabled_count: usize = groups
        .iter()
        .map(|group| group.endpoints.iter().filter(|e| e.enabled).count())
        .sum();
    if enabled_count < min_servers {
        return Err(CatalogError::NotEnoughServers {
            count: enabled_count,
            min: min_servers,
        });
    }

    // Index keyed by address over a flat backing vec: merge logic stays
    // independent of any provider's raw grouping hierarchy.
    let mut claimed: HashMap<IpAddr, usize> = HashMap::with_capacity(enabled_count);
    let mut servers: Vec<Server> = Vec::with_capacity(enabled_count);

    for group in groups {
        let (country, warning) = code_to_country(&group.country_code, COUNTRY_CODES);
        if let Some(warning) = &warning {
            warner.warn(warning);
        }
        let region = group.region.clone().unwrap_or_default();
        let city = group.city.clone().unwrap_or_default();
        let name_is_free = group.name.to_lowercase().contains("free");

        for endpoint in &group.endpoints {
            if !endpoint.enabled {
                warner.warn(&format!(
                    "ignoring disabled server {}",
                    endpoint.hostname
                ));
                continue;
            }

            // Sole free-tier heuristic: case-insensitive "free" substring
            // on the hostname or the group display name.
            let free = name_is_free || endpoint.hostname.to_lowercase().contains("free");

            // First write wins: addresses already claimed by an earlier
            // entry contribute nothing, additively or otherwise.
            let fresh_ips: Vec<IpAddr> = endpoint
                .ips
                .iter()
                .copied()
                .filter(|ip| !claimed.contains_key(ip))
                .collect();
            if fresh_ips.is_empty() {
                continue;
            }

            let slot = servers.len();
            for ip in &fresh_ips {
                claimed.insert(*ip, slot);
            }
            servers.push(Server {
                country: country.clone(),
                region: region.clone(),
                city: city.clone(),
                server_name: group.name.clone(),
                hostname: endpoint.hostname.clone(),
                ovpn_x509: endpoint.ovpn_x509.clone(),
                wg_public_key: endpoint.wg_public_key.clone(),
                free,
                ips: fresh_ips,
            });
        }
    }

    if servers.len() < min_servers {
        return Err(CatalogError::NotEnoughServers {
            count: servers.len(),
            min: min_servers,
        });
    }

    servers.sort_by(|a, b| {
        (&a.country, &a.region, &a.city, &a.server_name).cmp(&(
            &b.country,
            &b.region,
            &b.city,
            &b.server_name,
        ))
    });

    Ok(servers)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::RefCell;
    use std::net::{IpAddr, Ipv4Addr};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog::raw::RawEndpoint;

    #[derive(Default)]
    struct RecordingWarner(RefCell<Vec<String>>);

    impl Warner for RecordingWarner {
        fn warn(&self, message: &str) {
            self.0.borrow_mut().push(message.to_owned());
        }
    }

    fn ip(last: u8) -> IpAddr {
        IpAddr::V4(Ipv4Addr::new(10, 0, 0, last))
    }

    fn group(name: &str, code: &str, endpoints: Vec<RawEndpoint>) -> RawGroup {
        RawGroup {
            name: name.to_owned(),
            region: None,
            city: None,
            country_code: code.to_owned(),
            endpoints,
        }
    }

    fn endpoint(hostname: &str, last: u8) -> RawEndpoint {
        RawEndpoint {
            hostname: hostname.to_owned(),
            enabled: true,
            ips: vec![ip(last)],
            wg_public_key: None,
            ovpn_x509: None,
        }
    }

    #[test]
    fn fails_below_raw_floor() {
        let groups = vec![group("a", "nl", vec![endpoint("a1.example.com", 1)])];
        let err = build_catalog(&groups, 2, &RecordingWarner::default()).unwrap_err();
        assert_eq!(err, CatalogError::NotEnoughServers { count: 1, min: 2 });
    }

    #[test]
    fn fails_below_dedup_floor() {
        // Two raw endpoints sharing one address collapse to one server.
        let groups = vec![group(
            "a",
            "nl",
            vec![endpoint("a1.example.com", 1), endpoint("a2.example.com", 1)],
        )];
        let err = build_catalog(&groups, 2, &RecordingWarner::default()).unwrap_err();
        assert_eq!(err, CatalogError::NotEnoughServers { count: 1, min: 2 });
    }

    #[test]
    fn succeeds_at_exact_floor() {
        let groups = vec![group(
            "a",
            "nl",
            vec![endpoint("a1.example.com", 1), endpoint("a2.example.com", 2)],
        )];
        let servers = build_catalog(&groups, 2, &RecordingWarner::default()).unwrap();
        assert_eq!(servers.len(), 2);
    }

    #[test]
    fn skips_disabled_endpoints_with_warning() {
        let mut disabled = endpoint("down.example.com", 1);
        disabled.enabled = false;
        let groups = vec![group(
            "a",
            "nl",
            vec![disabled, endpoint("up.example.com", 2)],
        )];

        let warner = RecordingWarner::default();
        let servers = build_catalog(&groups, 1, &warner).unwrap();

        assert_eq!(servers.len(), 1);
        assert_eq!(servers[0].hostname, "up.example.com");
        assert_eq!(
            warner.0.borrow().as_slice(),
            ["ignoring disabled server down.example.com"]
        );
    }

    #[test]
    fn duplicate_ip_keeps_first_write() {
        let first = RawEndpoint {
            wg_public_key: Some("key-a".to_owned()),
            ..endpoint("first.example.com", 1)
        };
        let second = RawEndpoint {
            wg_public_key: Some("key-b".to_owned()),
            ..endpoint("second.example.com", 1)
        };
        let groups = vec![group("a", "nl", vec![first, second])];

        let servers = build_catalog(&groups, 1, &RecordingWarner::default()).unwrap();

        assert_eq!(servers.len(), 1);
        assert_eq!(servers[0].hostname, "first.example.com");
        assert_eq!(servers[0].wg_public_key.as_deref(), Some("key-a"));
    }

    #[test]
    fn free_heuristic_matches_hostname_and_name_case_insensitively() {
        let groups = vec![
            group("NL-FREE#1", "nl", vec![endpoint("a1.example.com", 1)]),
            group("NL#2", "nl", vec![endpoint("nl-Free-2.example.com", 2)]),
            group("NL#3", "nl", vec![endpoint("nl3.example.com", 3)]),
        ];
        let servers = build_catalog(&groups, 3, &RecordingWarner::default()).unwrap();

        let by_name = |name: &str| servers.iter().find(|s| s.server_name == name).unwrap();
        assert!(by_name("NL-FREE#1").free);
        assert!(by_name("NL#2").free);
        assert!(!by_name("NL#3").free);
    }

    #[test]
    fn unknown_country_code_degrades_with_warning() {
        let groups = vec![group("a", "zz", vec![endpoint("a1.example.com", 1)])];

        let warner = RecordingWarner::default();
        let servers = build_catalog(&groups, 1, &warner).unwrap();

        assert_eq!(servers[0].country, "zz");
        assert_eq!(
            warner.0.borrow().as_slice(),
            ["country code zz not found in the country table"]
        );
    }

    #[test]
    fn output_is_sorted_and_idempotent() {
        let groups = vec![
            group("b", "us", vec![endpoint("us1.example.com", 1)]),
            group("a", "nl", vec![endpoint("nl2.example.com", 2)]),
            group("a", "nl", vec![endpoint("nl1.example.com", 3)]),
        ];

        let first = build_catalog(&groups, 3, &RecordingWarner::default()).unwrap();
        let second = build_catalog(&groups, 3, &RecordingWarner::default()).unwrap();

        assert_eq!(first, second);
        assert_eq!(first[0].country, "Netherlands");
        assert_eq!(first[2].country, "United States");
    }

    #[test]
    fn multiple_addresses_stay_on_one_server() {
        let multi = RawEndpoint {
            ips: vec![ip(1), ip(2)],
            ..endpoint("multi.example.com", 1)
        };
        let groups = vec![group("a", "nl", vec![multi])];

        let servers = build_catalog(&groups, 1, &RecordingWarner::default()).unwrap();

        assert_eq!(servers.len(), 1);
        assert_eq!(servers[0].ips, vec![ip(1), ip(2)]);
    }
}
