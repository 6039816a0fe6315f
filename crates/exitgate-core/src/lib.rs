//! Connection-selection core for a multi-provider VPN client gateway.
//!
//! This crate owns the two subsystems between raw provider listings and a
//! dialable tunnel target:
//!
//! - **Catalog building** ([`catalog`]) — merges inconsistent per-provider
//!   listing entries into a deduplicated, deterministically sorted set of
//!   canonical [`Server`] records. One catalog is built per refresh cycle
//!   and handed off as an immutable value.
//!
//! - **Connection selection** ([`select`]) — filters the catalog through an
//!   external [`Storage`](select::Storage) collaborator, resolves
//!   protocol/port from the per-provider [`ProviderAdapter`](provider::ProviderAdapter)
//!   table, expands per-IP candidates, enforces validity invariants and
//!   picks exactly one [`Connection`] with a caller-supplied random source.
//!
//! Everything here is a synchronous pure transformation: no I/O, no locks,
//! no retries. Fetching, persistence and tunnel establishment live in the
//! surrounding layers.

pub mod catalog;
pub mod model;
pub mod provider;
pub mod select;
pub mod warn;

pub use catalog::{CatalogError, RawEndpoint, RawGroup, build_catalog};
pub use model::{
    Connection, OpenVpnSelection, Server, ServerSelection, TransportProtocol, VpnType,
};
pub use provider::{ConnectionDefaults, Provider, ProviderAdapter};
pub use select::{SelectError, Selector, Storage};
pub use warn::{TracingWarner, Warner};
