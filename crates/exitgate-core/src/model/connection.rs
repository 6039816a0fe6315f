// ── Dialable connection target ──

use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use super::vpn::{TransportProtocol, VpnType};

/// A single fully-specified tunnel target.
///
/// Produced fresh for each selection call and consumed verbatim by the
/// tunnel launcher; never persisted. The address is always IPv4 — the
/// selector excludes IPv6 candidates categorically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub vpn: VpnType,
    pub ip: IpAddr,
    pub port: u16,
    pub protocol: TransportProtocol,
    /// DNS hostname, or the certificate common-name override for OpenVPN
    /// servers that carry one.
    pub hostname: String,
    pub server_name: String,
    /// Wireguard peer public key; `None` when not applicable.
    pub pub_key: Option<String>,
}
