// ── Server selection filter ──

use serde::{Deserialize, Serialize};

use crate::provider::Provider;

use super::vpn::VpnType;

/// User/policy filter describing the desired server and VPN attributes.
///
/// Every criteria field may be left empty, meaning "no constraint". The
/// storage collaborator interprets the criteria; the selector only reads
/// `vpn` and `openvpn`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSelection {
    pub vpn: VpnType,
    pub countries: Vec<String>,
    pub regions: Vec<String>,
    pub cities: Vec<String>,
    pub hostnames: Vec<String>,
    pub names: Vec<String>,
    /// Restrict to free-tier servers when set.
    pub free_only: Option<bool>,
    pub openvpn: OpenVpnSelection,
}

/// OpenVPN-specific selection knobs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenVpnSelection {
    /// `Some(true)` forces TCP, `Some(false)` forces UDP. `None` is an
    /// unresolved selection — call
    /// [`ServerSelection::with_defaults`] before selecting.
    pub tcp: Option<bool>,
}

impl ServerSelection {
    /// Complete an unresolved selection with per-provider defaults.
    ///
    /// By the time a selection reaches the selector its protocol fields
    /// are either explicitly set or resolved here: OpenVPN transport
    /// defaults to UDP. The provider argument keeps the defaulting step
    /// provider-scoped for adapters that need it.
    pub fn with_defaults(mut self, _provider: Provider) -> Self {
        if self.vpn == VpnType::OpenVpn && self.openvpn.tcp.is_none() {
            self.openvpn.tcp = Some(false);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_defaults_resolves_openvpn_transport_to_udp() {
        let selection = ServerSelection::default().with_defaults(Provider::Ivpn);
        assert_eq!(selection.openvpn.tcp, Some(false));
    }

    #[test]
    fn with_defaults_keeps_explicit_tcp() {
        let selection = ServerSelection {
            openvpn: OpenVpnSelection { tcp: Some(true) },
            ..Default::default()
        }
        .with_defaults(Provider::Ivpn);
        assert_eq!(selection.openvpn.tcp, Some(true));
    }

    #[test]
    fn with_defaults_leaves_wireguard_untouched() {
        let selection = ServerSelection {
            vpn: VpnType::Wireguard,
            ..Default::default()
        }
        .with_defaults(Provider::Ivpn);
        assert_eq!(selection.openvpn.tcp, None);
    }
}
