// ── ProtonVPN logicals listing ──
//
// Fetches `/vpn/logicals` and maps the payload into raw catalog groups.
// The listing nests physical endpoints under logical servers, with
// nullable region/city and a numeric status flag (0 = disabled).

use std::net::IpAddr;

use serde::Deserialize;
use tracing::debug;
use url::Url;

use exitgate_core::{RawEndpoint, RawGroup};

use crate::error::Error;

#[derive(Debug, Deserialize)]
pub struct LogicalsResponse {
    #[serde(rename = "LogicalServers")]
    pub logical_servers: Vec<LogicalServer>,
}

/// One logical server: a display entry grouping physical endpoints.
#[derive(Debug, Deserialize)]
pub struct LogicalServer {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Region")]
    pub region: Option<String>,
    #[serde(rename = "City")]
    pub city: Option<String>,
    #[serde(rename = "ExitCountry")]
    pub exit_country: String,
    #[serde(rename = "Servers")]
    pub servers: Vec<PhysicalServer>,
}

#[derive(Debug, Deserialize)]
pub struct PhysicalServer {
    #[serde(rename = "Domain")]
    pub domain: String,
    /// 0 means the endpoint is disabled provider-side.
    #[serde(rename = "Status")]
    pub status: u8,
    #[serde(rename = "EntryIP")]
    pub entry_ip: IpAddr,
    #[serde(rename = "ExitIP")]
    pub exit_ip: Option<IpAddr>,
    #[serde(rename = "X25519PublicKey")]
    pub x25519_public_key: Option<String>,
}

/// Fetch the full logicals listing from the provider API.
pub async fn fetch_server_list(
    client: &reqwest::Client,
    base_url: &Url,
) -> Result<LogicalsResponse, Error> {
    let url = base_url.join("vpn/logicals")?;
    debug!(%url, "fetching server listing");

    let response = client.get(url).send().await?;
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(Error::Status {
            status: status.as_u16(),
            body,
        });
    }

    serde_json::from_str(&body).map_err(|e| Error::Deserialization {
        message: e.to_string(),
        body,
    })
}

impl LogicalsResponse {
    /// Map the listing into catalog builder input.
    ///
    /// Disabled endpoints are carried through — skipping (and warning)
    /// is the builder's job. The exit IP joins the entry IP on the same
    /// endpoint when the provider reports both.
    pub fn into_raw_groups(self) -> Vec<RawGroup> {
        self.logical_servers
            .into_iter()
            .map(|logical| RawGroup {
                name: logical.name,
                region: logical.region,
                city: logical.city,
                country_code: logical.exit_country,
                endpoints: logical
                    .servers
                    .into_iter()
                    .map(|physical| {
                        let mut ips = vec![physical.entry_ip];
                        if let Some(exit_ip) = physical.exit_ip {
                            if exit_ip != physical.entry_ip {
                                ips.push(exit_ip);
                            }
                        }
                        RawEndpoint {
                            hostname: physical.domain,
                            enabled: physical.status != 0,
                            ips,
                            wg_public_key: physical.x25519_public_key,
                            ovpn_x509: None,
                        }
                    })
                    .collect(),
            })
            .collect()
    }
}
