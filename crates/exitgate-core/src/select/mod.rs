// ── Connection selection ──
//
// Filter the catalog, resolve provider policy, expand per-IP candidates,
// validate, pick one. Pure per-call: the caller supplies the random
// source, so concurrent selections need no synchronization.

pub mod picker;
pub mod selector;

pub use picker::pick;
pub use selector::{BoxError, SelectError, Selector, Storage};
