// ── Canonical server record ──

use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// A canonical exit node, produced by the catalog builder.
///
/// Identity is the IP address: two raw listing entries sharing an address
/// are merged into one record (first write wins for every descriptive
/// field). Built once per refresh cycle and immutable afterward — the next
/// refresh supersedes the whole catalog rather than mutating records in
/// place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    pub country: String,
    pub region: String,
    pub city: String,
    /// Provider display name for the logical server group.
    pub server_name: String,
    pub hostname: String,
    /// OpenVPN certificate common name, for providers whose TLS
    /// certificate diverges from the DNS hostname.
    pub ovpn_x509: Option<String>,
    /// Wireguard peer public key; absent on OpenVPN-only servers.
    pub wg_public_key: Option<String>,
    /// Belongs to the provider's free tier (hostname/name heuristic).
    pub free: bool,
    /// All addresses this server is reachable at (e.g. separate entry and
    /// exit IPs). Never empty; every address is claimed by exactly one
    /// server in a catalog.
    pub ips: Vec<IpAddr>,
}
