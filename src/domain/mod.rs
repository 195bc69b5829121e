//! Domain logic for the select menu.
//!
//! Pure computations with no UI dependency:
//! - Flattening (option hierarchy and rendered nodes into one row sequence)
//! - Dimension estimation (viewport size from labels and row count)
//! - Focus tracking (focused row lookup and scroll-into-view requests)
//! - Windowing (visible row range and per-row offsets)

pub mod flatten;
pub mod dimensions;
pub mod focus;
pub mod windowing;
