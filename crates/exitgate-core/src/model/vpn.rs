// ── VPN type and transport enums ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Tunnel technology. A closed set: selection logic matches on it
/// exhaustively, and a [`ServerSelection`](super::ServerSelection) always
/// carries one of these by the time it reaches the selector.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VpnType {
    #[default]
    #[strum(serialize = "openvpn")]
    OpenVpn,
    Wireguard,
}

/// Transport protocol carrying the tunnel.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TransportProtocol {
    Tcp,
    Udp,
}
