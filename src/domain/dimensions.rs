//! Viewport size estimation for the virtualized menu.
//!
//! Rows in a virtualized list are absolutely positioned, so the container
//! cannot size itself from its children. Width and height are instead
//! estimated up front from label lengths and row count.
//!
//! Label length is counted in UTF-16 code units, the unit browsers report for
//! string length. Characters outside the Basic Multilingual Plane count twice
//! and emoji sequences count every joined part, so the width overestimates
//! for them.

use crate::option::SelectableValue;

/// Row height in pixels
pub const ITEM_HEIGHT: f32 = 37.0;

/// Estimated pixels per label character
pub const WIDTH_ESTIMATE_MULTIPLIER: f32 = 8.0;

/// Horizontal padding on each side of a row
pub const PADDING: f32 = 8.0;

/// Room for icons and checkboxes drawn beside the label
pub const WIDTH_EXTRA: f32 = 36.0;

/// Calibrated constants driving the estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatorParams {
    pub item_height: f32,
    pub width_multiplier: f32,
    pub padding: f32,
    pub width_extra: f32,
}

impl Default for EstimatorParams {
    fn default() -> Self {
        Self {
            item_height: ITEM_HEIGHT,
            width_multiplier: WIDTH_ESTIMATE_MULTIPLIER,
            padding: PADDING,
            width_extra: WIDTH_EXTRA,
        }
    }
}

/// Estimated outer size of the virtualized viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportDimensions {
    pub width: f32,
    pub height: f32,
}

/// Length of a label in UTF-16 code units; missing labels count as zero.
pub fn label_length(label: Option<&str>) -> usize {
    label.map(|l| l.encode_utf16().count()).unwrap_or(0)
}

/// Longest label length across a set of labels (0 for an empty set).
pub fn longest_label<'a, I>(labels: I) -> usize
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    labels.into_iter().map(label_length).max().unwrap_or(0)
}

/// `longest * multiplier + 2 * padding + extra`.
pub fn estimate_width(longest_label: usize, params: &EstimatorParams) -> f32 {
    let width = longest_label as f32 * params.width_multiplier + params.padding * 2.0 + params.width_extra;
    width.max(0.0)
}

/// `min(item_count * item_height, max_height)`, never negative.
pub fn estimate_height(item_count: usize, max_height: f32, params: &EstimatorParams) -> f32 {
    (item_count as f32 * params.item_height).min(max_height).max(0.0)
}

/// Estimates both dimensions from the flattened option values.
///
/// # Arguments
/// * `values` - Flattened options (used for the width)
/// * `item_count` - Number of rows to render (used for the height)
/// * `max_height` - Caller-supplied height cap
/// * `params` - Estimation constants
pub fn estimate_dimensions<T>(
    values: &[&SelectableValue<T>],
    item_count: usize,
    max_height: f32,
    params: &EstimatorParams,
) -> ViewportDimensions {
    let longest = longest_label(values.iter().map(|v| v.label.as_deref()));
    ViewportDimensions {
        width: estimate_width(longest, params),
        height: estimate_height(item_count, max_height, params),
    }
}
