// ── Domain model ──
//
// Canonical types shared by the catalog builder and the selector.
// Raw provider listing shapes live in `catalog::raw`; these are the
// normalized forms everything downstream consumes.

pub mod connection;
pub mod selection;
pub mod server;
pub mod vpn;

pub use connection::Connection;
pub use selection::{OpenVpnSelection, ServerSelection};
pub use server::Server;
pub use vpn::{TransportProtocol, VpnType};
