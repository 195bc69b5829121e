//! Fixed-size list windowing.
//!
//! Pure functions mapping (scroll offset, viewport height, item size, item
//! count) to the range of rows to render, plus [`ListViewport`], the owned
//! scroll state those functions are evaluated against.

use std::ops::Range;

use crate::domain::focus::ScrollHandle;

/// Rows rendered above and below the viewport by default
pub const DEFAULT_OVERSCAN_ROWS: usize = 2;

/// Where a scrolled-to row should land in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Move as little as possible; no movement if already fully visible
    #[default]
    Auto,
    Start,
    Center,
    End,
}

/// Absolute placement of a row inside the scrollable content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemStyle {
    /// Offset from the top of the content, in pixels
    pub top: f32,
    pub height: f32,
}

/// Total content height of a list.
pub fn content_height(item_count: usize, item_size: f32) -> f32 {
    item_count as f32 * item_size
}

/// Largest valid scroll offset.
pub fn max_scroll_offset(item_count: usize, item_size: f32, viewport_height: f32) -> f32 {
    (content_height(item_count, item_size) - viewport_height.max(0.0)).max(0.0)
}

/// Placement of row `index`.
pub fn item_style(index: usize, item_size: f32) -> ItemStyle {
    ItemStyle {
        top: index as f32 * item_size,
        height: item_size,
    }
}

/// Rows intersecting the viewport, widened by `overscan` rows on each side.
///
/// Returns an empty range when there is nothing to show.
pub fn visible_range(
    scroll_offset: f32,
    viewport_height: f32,
    item_size: f32,
    item_count: usize,
    overscan: usize,
) -> Range<usize> {
    if item_count == 0 || viewport_height <= 0.0 || item_size <= 0.0 {
        return 0..0;
    }

    let offset = scroll_offset.max(0.0);
    let first = ((offset / item_size).floor() as usize).min(item_count - 1);
    let last = (((offset + viewport_height) / item_size).ceil() as usize).clamp(first + 1, item_count);

    first.saturating_sub(overscan)..(last + overscan).min(item_count)
}

/// Scroll offset that brings row `index` into view.
///
/// # Arguments
/// * `index` - Row to reveal (clamped to the last row)
/// * `align` - Target placement
/// * `current_offset` - Current scroll offset (used by [`Align::Auto`])
/// * `viewport_height` - Visible height
/// * `item_size` - Row height
/// * `item_count` - Total rows
pub fn offset_for_index(
    index: usize,
    align: Align,
    current_offset: f32,
    viewport_height: f32,
    item_size: f32,
    item_count: usize,
) -> f32 {
    if item_count == 0 {
        return 0.0;
    }

    let index = index.min(item_count - 1);
    let height = viewport_height.max(0.0);
    let limit = max_scroll_offset(item_count, item_size, height);

    let top = index as f32 * item_size;
    // Row at the top edge / row at the bottom edge
    let start = top.min(limit);
    let end = (top + item_size - height).clamp(0.0, limit);

    let target = match align {
        Align::Start => start,
        Align::End => end,
        Align::Center => ((start + end) / 2.0).round(),
        Align::Auto if height <= 0.0 => start,
        Align::Auto => {
            if current_offset >= end && current_offset <= start {
                current_offset
            } else if current_offset < end {
                end
            } else {
                start
            }
        }
    };

    target.clamp(0.0, limit)
}

/// Scroll state of a fixed-row-height viewport.
///
/// The scroll offset is owned here; scroll requests are recorded as a pending
/// offset that the renderer applies to the scroll container before painting.
#[derive(Debug, Clone)]
pub struct ListViewport {
    item_size: f32,
    overscan: usize,
    item_count: usize,
    height: f32,
    scroll_offset: f32,
    pending_scroll: Option<f32>,
}

impl ListViewport {
    /// Creates an empty viewport.
    pub fn new(item_size: f32, overscan: usize) -> Self {
        Self {
            item_size,
            overscan,
            item_count: 0,
            height: 0.0,
            scroll_offset: 0.0,
            pending_scroll: None,
        }
    }

    // ===== Queries =====

    pub fn item_size(&self) -> f32 {
        self.item_size
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn overscan(&self) -> usize {
        self.overscan
    }

    /// Current scroll offset in pixels.
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Height of the whole scrollable content.
    pub fn content_height(&self) -> f32 {
        content_height(self.item_count, self.item_size)
    }

    /// Rows to render for the current offset.
    pub fn visible_range(&self) -> Range<usize> {
        visible_range(self.scroll_offset, self.height, self.item_size, self.item_count, self.overscan)
    }

    /// Absolute placement of row `index`.
    pub fn item_style(&self, index: usize) -> ItemStyle {
        item_style(index, self.item_size)
    }

    // ===== Mutations =====

    /// Updates row count and visible height, clamping the offset to the new content.
    pub fn set_layout(&mut self, item_count: usize, height: f32) {
        self.item_count = item_count;
        self.height = height.max(0.0);

        let limit = max_scroll_offset(self.item_count, self.item_size, self.height);
        if self.scroll_offset > limit {
            self.scroll_offset = limit;
            self.pending_scroll = Some(limit);
        }
    }

    /// Changes the row height (offsets are not rescaled).
    pub fn set_item_size(&mut self, item_size: f32) {
        self.item_size = item_size;
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        self.overscan = overscan;
    }

    /// Records the offset observed on the scroll container (user scrolling).
    ///
    /// Does not schedule a scroll.
    pub fn sync_scroll_offset(&mut self, offset: f32) {
        self.scroll_offset = offset.clamp(0.0, max_scroll_offset(self.item_count, self.item_size, self.height));
    }

    /// Scrolls to an absolute offset.
    ///
    /// # Returns
    /// `true` if the offset changed.
    pub fn scroll_to(&mut self, offset: f32) -> bool {
        let offset = offset.clamp(0.0, max_scroll_offset(self.item_count, self.item_size, self.height));
        if offset == self.scroll_offset {
            return false;
        }
        self.scroll_offset = offset;
        self.pending_scroll = Some(offset);
        true
    }

    /// Scrolls so that row `index` is visible with the given alignment.
    ///
    /// # Returns
    /// `true` if the offset changed. Repeating a request is a no-op.
    pub fn scroll_to_item(&mut self, index: usize, align: Align) -> bool {
        let target = offset_for_index(
            index,
            align,
            self.scroll_offset,
            self.height,
            self.item_size,
            self.item_count,
        );
        self.scroll_to(target)
    }

    /// Takes the offset the scroll container must be moved to, if any.
    pub fn take_pending_scroll(&mut self) -> Option<f32> {
        self.pending_scroll.take()
    }
}

impl Default for ListViewport {
    fn default() -> Self {
        Self::new(crate::domain::dimensions::ITEM_HEIGHT, DEFAULT_OVERSCAN_ROWS)
    }
}

impl ScrollHandle for ListViewport {
    fn scroll_to_index(&mut self, index: usize) {
        if self.scroll_to_item(index, Align::Auto) {
            log::trace!("viewport scrolled to row {index} (offset {})", self.scroll_offset);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_range_top() {
        // 300 / 37 = 8.1 -> rows 0..9, plus 2 overscan
        assert_eq!(visible_range(0.0, 300.0, 37.0, 100, 2), 0..11);
        assert_eq!(visible_range(0.0, 300.0, 37.0, 100, 0), 0..9);
    }

    #[test]
    fn test_visible_range_scrolled() {
        // offset 370 -> first row 10, bottom edge 670 -> 18.1 -> 19
        assert_eq!(visible_range(370.0, 300.0, 37.0, 100, 0), 10..19);
        assert_eq!(visible_range(370.0, 300.0, 37.0, 100, 3), 7..22);
    }

    #[test]
    fn test_visible_range_clamped_to_count() {
        assert_eq!(visible_range(0.0, 300.0, 37.0, 3, 2), 0..3);
        assert_eq!(visible_range(10_000.0, 300.0, 37.0, 5, 0), 4..5);
    }

    #[test]
    fn test_visible_range_degenerate() {
        assert_eq!(visible_range(0.0, 300.0, 37.0, 0, 2), 0..0);
        assert_eq!(visible_range(0.0, 0.0, 37.0, 10, 2), 0..0);
        assert_eq!(visible_range(0.0, -5.0, 37.0, 10, 2), 0..0);
    }

    #[test]
    fn test_item_style_offsets() {
        let style = item_style(4, 37.0);
        assert_eq!(style.top, 148.0);
        assert_eq!(style.height, 37.0);
    }

    #[test]
    fn test_offset_auto_visible_row_no_move() {
        assert_eq!(offset_for_index(3, Align::Auto, 0.0, 300.0, 37.0, 100), 0.0);
    }

    #[test]
    fn test_offset_auto_below_and_above() {
        // Row 20 bottom = 777, viewport 300 -> offset 477
        assert_eq!(offset_for_index(20, Align::Auto, 0.0, 300.0, 37.0, 100), 477.0);
        // Row 2 top = 74 when scrolled past it
        assert_eq!(offset_for_index(2, Align::Auto, 500.0, 300.0, 37.0, 100), 74.0);
    }

    #[test]
    fn test_offset_alignments() {
        assert_eq!(offset_for_index(20, Align::Start, 0.0, 300.0, 37.0, 100), 740.0);
        assert_eq!(offset_for_index(20, Align::End, 0.0, 300.0, 37.0, 100), 477.0);
        assert_eq!(offset_for_index(20, Align::Center, 0.0, 300.0, 37.0, 100), 609.0);
        // Last row cannot scroll past the end of content
        assert_eq!(offset_for_index(99, Align::Start, 0.0, 300.0, 37.0, 100), 3400.0);
    }

    #[test]
    fn test_scroll_to_item_idempotent() {
        let mut viewport = ListViewport::new(37.0, 2);
        viewport.set_layout(100, 300.0);

        assert!(viewport.scroll_to_item(20, Align::Auto));
        let first = viewport.scroll_offset();
        assert_eq!(viewport.take_pending_scroll(), Some(first));

        assert!(!viewport.scroll_to_item(20, Align::Auto));
        assert_eq!(viewport.scroll_offset(), first);
        assert_eq!(viewport.take_pending_scroll(), None);
    }

    #[test]
    fn test_scroll_converges_with_manual_scroll() {
        let mut by_index = ListViewport::new(37.0, 2);
        by_index.set_layout(100, 300.0);
        by_index.scroll_to_item(20, Align::Auto);

        let mut by_offset = ListViewport::new(37.0, 2);
        by_offset.set_layout(100, 300.0);
        by_offset.sync_scroll_offset(477.0);

        assert_eq!(by_index.visible_range(), by_offset.visible_range());
        assert!(by_index.visible_range().contains(&20));
    }

    #[test]
    fn test_set_layout_clamps_offset() {
        let mut viewport = ListViewport::new(37.0, 0);
        viewport.set_layout(100, 300.0);
        viewport.sync_scroll_offset(2000.0);
        viewport.set_layout(10, 300.0);
        assert_eq!(viewport.scroll_offset(), 70.0);
        assert_eq!(viewport.take_pending_scroll(), Some(70.0));
    }

    #[test]
    fn test_empty_viewport() {
        let mut viewport = ListViewport::default();
        viewport.set_layout(0, 0.0);
        assert!(viewport.visible_range().is_empty());
        assert!(!viewport.scroll_to_item(5, Align::Auto));
    }
}
