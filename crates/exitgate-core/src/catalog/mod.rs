// ── Catalog construction ──
//
// Turns raw per-provider listing entries into the deduplicated, sorted
// catalog of canonical `Server` records. Provider API crates map their
// payloads into `RawGroup`s; everything after that point is uniform.

pub mod builder;
pub mod countries;
pub mod raw;

pub use builder::{CatalogError, build_catalog};
pub use countries::code_to_country;
pub use raw::{RawEndpoint, RawGroup};
