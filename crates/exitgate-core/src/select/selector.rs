// ── Connection selector ──
//
// The sole selection entry point. Storage filtering is an external,
// possibly slow and fallible call: its errors are wrapped with context
// and returned, never retried here — retry/backoff policy belongs to the
// caller.

use std::net::IpAddr;

use rand::Rng;
use thiserror::Error;

use crate::model::{Connection, Server, ServerSelection, VpnType};
use crate::provider::{Provider, ProviderAdapter};

use super::picker::pick;

/// Boxed error from an external collaborator.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// External catalog store and query engine.
///
/// Only the filter contract is depended on here; indexing, persistence
/// and criteria matching are the store's business.
pub trait Storage {
    fn filter_servers(
        &self,
        provider: Provider,
        selection: &ServerSelection,
    ) -> Result<Vec<Server>, BoxError>;
}

/// Selection failures, distinguishable by variant so callers can branch
/// (e.g. refresh the catalog vs. abort).
#[derive(Debug, Error)]
pub enum SelectError {
    /// Storage failure, passed through with context and not retried.
    #[error("cannot filter servers: {0}")]
    Filter(#[source] BoxError),

    /// A filtered server is missing the mandatory Wireguard credential.
    /// This aborts the whole selection, not just the candidate: a catalog
    /// entry without its key is an ingestion defect that must surface.
    #[error("wireguard public key is missing: for server hostname {hostname} and ip {ip}")]
    WireguardPublicKeyMissing { hostname: String, ip: IpAddr },

    /// The filter and expansion produced nothing dialable — an overly
    /// narrow selection or an empty catalog.
    #[error("no connection candidates matched the selection")]
    NoCandidates,
}

/// Connection selector for one provider.
///
/// Holds the provider adapter and a storage handle; each
/// [`get_connection`](Selector::get_connection) call is an independent
/// pure invocation, so selectors can be shared across concurrent
/// evaluations as long as each call brings its own random source.
#[derive(Debug, Clone)]
pub struct Selector<S> {
    adapter: ProviderAdapter,
    storage: S,
}

impl<S: Storage> Selector<S> {
    pub fn new(adapter: ProviderAdapter, storage: S) -> Self {
        Self { adapter, storage }
    }

    /// Pick exactly one dialable connection satisfying `selection`.
    ///
    /// Deterministic: a fixed catalog, a fixed selection and a fixed
    /// random-source state always produce the same connection.
    ///
    /// # Panics
    ///
    /// When the selection reaches a (VPN type, protocol) slot absent from
    /// the provider's default table — a static configuration defect, see
    /// [`ProviderAdapter::resolve_endpoint`].
    pub fn get_connection(
        &self,
        selection: &ServerSelection,
        rng: &mut impl Rng,
    ) -> Result<Connection, SelectError> {
        let servers = self
            .storage
            .filter_servers(self.adapter.provider, selection)
            .map_err(SelectError::Filter)?;

        let (protocol, port) = self.adapter.resolve_endpoint(selection);

        let mut candidates = Vec::with_capacity(servers.len());
        for server in &servers {
            for &ip in &server.ips {
                // IPv6 exits are categorically excluded for now.
                // IPv4-mapped IPv6 addresses count as IPv4.
                let ip = ip.to_canonical();
                if !ip.is_ipv4() {
                    continue;
                }

                let has_key = server
                    .wg_public_key
                    .as_deref()
                    .is_some_and(|key| !key.is_empty());
                if selection.vpn == VpnType::Wireguard && !has_key {
                    return Err(SelectError::WireguardPublicKeyMissing {
                        hostname: server.hostname.clone(),
                        ip,
                    });
                }

                // Certificate common-name override, for providers whose
                // OpenVPN x509 diverges from the DNS hostname.
                let hostname = match &server.ovpn_x509 {
                    Some(x509) if selection.vpn == VpnType::OpenVpn => x509.clone(),
                    _ => server.hostname.clone(),
                };

                let mut connection = Connection {
                    vpn: selection.vpn,
                    ip,
                    port,
                    protocol,
                    hostname,
                    server_name: server.server_name.clone(),
                    pub_key: server.wg_public_key.clone(),
                };
                if let Some(customize) = self.adapter.customize {
                    connection = customize(connection, server);
                }
                candidates.push(connection);
            }
        }

        if candidates.is_empty() {
            return Err(SelectError::NoCandidates);
        }

        Ok(pick(&candidates, rng))
    }
}
