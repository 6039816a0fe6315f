//! Typed provider listing clients for the exitgate gateway.
//!
//! Each provider module fetches that provider's server listing over HTTP
//! and maps the payload into the provider-agnostic
//! [`RawGroup`](exitgate_core::RawGroup) shape the catalog builder
//! consumes. The mapping is lossless for the fields the catalog cares
//! about; provider-specific oddities (nullable metadata, numeric status
//! flags, split entry/exit addresses) are absorbed here.

pub mod error;
pub mod proton;

pub use error::Error;
