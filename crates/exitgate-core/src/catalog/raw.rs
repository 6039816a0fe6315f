// ── Raw listing input ──

use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// A logical grouping from a provider listing: one display entry covering
/// one or more physical endpoints. Optional metadata that a provider
/// omits arrives as `None` and degrades to an empty field on the built
/// server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawGroup {
    /// Provider display name for the group.
    pub name: String,
    pub region: Option<String>,
    pub city: Option<String>,
    /// Provider-supplied ISO 3166-1 alpha-2 code for the exit country.
    pub country_code: String,
    pub endpoints: Vec<RawEndpoint>,
}

/// A physical endpoint inside a [`RawGroup`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEndpoint {
    pub hostname: String,
    /// Endpoints flagged disabled provider-side are skipped with a
    /// warning, not an error.
    pub enabled: bool,
    pub ips: Vec<IpAddr>,
    pub wg_public_key: Option<String>,
    pub ovpn_x509: Option<String>,
}
