//! Focus tracking for keyboard navigation.
//!
//! Maps the focused option to its row in the flattened sequence and keeps
//! that row visible by asking the viewport to scroll whenever the row changes.

use crate::domain::flatten::FlatEntry;
use crate::option::{SelectOption, SelectableValue};

/// Something that can scroll a row into view.
pub trait ScrollHandle {
    fn scroll_to_index(&mut self, index: usize);
}

/// Row of the first option whose value equals `focused`.
///
/// `None` means no focus: either nothing is focused or the value is absent.
pub fn focused_index<T: PartialEq>(values: &[&SelectableValue<T>], focused: Option<&T>) -> Option<usize> {
    let focused = focused?;
    values.iter().position(|v| &v.value == focused)
}

/// Same as [`focused_index`], resolving flattened entries against their options.
pub fn focused_entry_index<T: PartialEq>(
    options: &[SelectOption<T>],
    entries: &[FlatEntry],
    focused: Option<&T>,
) -> Option<usize> {
    let focused = focused?;
    entries
        .iter()
        .position(|entry| entry.resolve(options).is_some_and(|v| &v.value == focused))
}

/// Issues a scroll request each time the focused row changes.
///
/// Re-running [`FocusTracker::sync`] with an unchanged index does nothing,
/// so it can be called every frame.
#[derive(Debug, Clone, Default)]
pub struct FocusTracker {
    last_index: Option<usize>,
}

impl FocusTracker {
    pub fn new() -> Self {
        Self { last_index: None }
    }

    /// Last observed focused row.
    pub fn current(&self) -> Option<usize> {
        self.last_index
    }

    /// Records the focused row and scrolls to it if it changed.
    ///
    /// # Returns
    /// `true` if a scroll request was issued.
    pub fn sync<H: ScrollHandle + ?Sized>(&mut self, index: Option<usize>, handle: &mut H) -> bool {
        if index == self.last_index {
            return false;
        }
        self.last_index = index;

        match index {
            Some(index) => {
                log::debug!("focus moved to row {index}, scrolling into view");
                handle.scroll_to_index(index);
                true
            }
            None => false,
        }
    }

    /// Forgets the last row so the next sync scrolls again.
    pub fn reset(&mut self) {
        self.last_index = None;
    }
}

/// Moves focus by `delta` rows, skipping group headers and disabled options.
///
/// Wraps around at either end. With no current focus, moving forward lands on
/// the first pickable row and moving backward on the last.
///
/// # Returns
/// The newly focused row, or `None` if no row is pickable.
pub fn step_focus<T>(
    options: &[SelectOption<T>],
    entries: &[FlatEntry],
    current: Option<usize>,
    delta: isize,
) -> Option<usize> {
    let len = entries.len();
    let pickable = |i: usize| {
        let entry = &entries[i];
        !entry.is_header() && entry.resolve(options).is_some_and(|v| !v.is_disabled)
    };

    if len == 0 || delta == 0 {
        return current.filter(|&i| i < len);
    }

    let forward = delta > 0;
    let mut steps = delta.unsigned_abs();
    let mut index = match current {
        Some(i) if i < len => i,
        _ if forward => len - 1,
        _ => 0,
    };
    let mut result = None;

    // One full lap without a pickable row means there is none
    let mut visited = 0;
    while steps > 0 && visited < len {
        index = if forward { (index + 1) % len } else { (index + len - 1) % len };
        visited += 1;
        if pickable(index) {
            result = Some(index);
            steps -= 1;
            visited = 0;
        }
    }

    result.or(current.filter(|&i| i < len && pickable(i)))
}
