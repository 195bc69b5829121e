//! Caching modules for per-frame recomputation.

pub mod menu_cache;

pub use menu_cache::{options_fingerprint, MenuCache};
