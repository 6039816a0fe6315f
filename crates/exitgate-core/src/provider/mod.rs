// ── Provider identities and adapters ──

pub mod adapter;

pub use adapter::{ConnectionDefaults, CustomizeFn, ProviderAdapter};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Supported VPN providers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Expressvpn,
    Ivpn,
    Mullvad,
    Protonvpn,
    Surfshark,
    Windscribe,
}
