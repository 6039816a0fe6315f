// ── Per-provider connection policy ──
//
// Static default-port tables plus an optional candidate customization
// hook. Resolution is a pure lookup: no I/O, no mutable state.

use crate::model::{Connection, Server, ServerSelection, TransportProtocol, VpnType};

use super::Provider;

/// Default ports for each (VPN type, protocol) slot a provider supports.
///
/// `None` is a legitimate table entry — some providers have no default
/// for a slot at all (e.g. no Wireguard support). Resolving a `None` slot
/// is a configuration-invariant violation, not a runtime error: see
/// [`ProviderAdapter::resolve_endpoint`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConnectionDefaults {
    pub openvpn_tcp: Option<u16>,
    pub openvpn_udp: Option<u16>,
    pub wireguard: Option<u16>,
}

impl ConnectionDefaults {
    pub const fn new(
        openvpn_tcp: Option<u16>,
        openvpn_udp: Option<u16>,
        wireguard: Option<u16>,
    ) -> Self {
        Self {
            openvpn_tcp,
            openvpn_udp,
            wireguard,
        }
    }
}

/// Provider-specific override applied to every expanded candidate.
pub type CustomizeFn = fn(Connection, &Server) -> Connection;

/// Per-provider behavior bundle: identity, default ports and the optional
/// customization hook. One `Selector` parameterized by an adapter value
/// replaces per-provider selector implementations.
#[derive(Debug, Clone, Copy)]
pub struct ProviderAdapter {
    pub provider: Provider,
    pub defaults: ConnectionDefaults,
    pub customize: Option<CustomizeFn>,
}

impl ProviderAdapter {
    /// Look up the static adapter for a provider.
    pub const fn for_provider(provider: Provider) -> Self {
        let defaults = match provider {
            Provider::Expressvpn => ConnectionDefaults::new(None, Some(1195), None),
            Provider::Ivpn => ConnectionDefaults::new(Some(443), Some(1194), Some(58237)),
            Provider::Mullvad => ConnectionDefaults::new(Some(443), Some(1194), Some(51820)),
            Provider::Protonvpn => ConnectionDefaults::new(Some(443), Some(1194), Some(51820)),
            Provider::Surfshark => ConnectionDefaults::new(Some(1443), Some(1194), None),
            Provider::Windscribe => ConnectionDefaults::new(Some(1194), Some(443), Some(1194)),
        };
        Self {
            provider,
            defaults,
            customize: None,
        }
    }

    /// Resolve the transport protocol and port for a selection.
    ///
    /// # Panics
    ///
    /// When a reachable selection state needs a slot the provider table
    /// leaves empty. The table was built wrong for that state; silently
    /// substituting a port would dial the wrong service, so this aborts
    /// the process instead of returning a catchable error.
    pub fn resolve_endpoint(&self, selection: &ServerSelection) -> (TransportProtocol, u16) {
        match selection.vpn {
            VpnType::OpenVpn => {
                if selection.openvpn.tcp == Some(true) {
                    let port = self.require(self.defaults.openvpn_tcp, "OpenVPN TCP");
                    (TransportProtocol::Tcp, port)
                } else {
                    let port = self.require(self.defaults.openvpn_udp, "OpenVPN UDP");
                    (TransportProtocol::Udp, port)
                }
            }
            VpnType::Wireguard => {
                let port = self.require(self.defaults.wireguard, "Wireguard");
                (TransportProtocol::Udp, port)
            }
        }
    }

    fn require(&self, slot: Option<u16>, what: &str) -> u16 {
        match slot {
            Some(port) => port,
            None => panic!(
                "no default {what} port is defined for provider {}",
                self.provider
            ),
        }
    }
}
