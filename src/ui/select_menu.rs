//! Non-virtualized select menu.
//!
//! Lays out every row in a scroll area capped at `max_height`. Suitable for
//! short option lists and for rows of varying height (descriptions).

use eframe::egui;
use egui::scroll_area::ScrollAreaOutput;
use egui::{Id, ScrollArea, WidgetInfo, WidgetType};

use crate::domain::flatten::{flatten_children, MenuChildren};
use crate::theme::MenuColors;
use crate::ui::menu_option::MenuNode;

/// Accessibility label of the menu region
pub const MENU_ARIA_LABEL: &str = "Select options menu";

/// A scrollable menu region.
pub struct SelectMenu<'a> {
    id_salt: Id,
    max_height: f32,
    scroll_offset: Option<f32>,
    colors: &'a MenuColors,
}

impl<'a> SelectMenu<'a> {
    pub fn new(id_salt: impl std::hash::Hash, colors: &'a MenuColors) -> Self {
        Self {
            id_salt: Id::new(id_salt),
            max_height: crate::config::DEFAULT_MAX_HEIGHT,
            scroll_offset: None,
            colors,
        }
    }

    pub fn max_height(mut self, max_height: f32) -> Self {
        self.max_height = max_height.max(0.0);
        self
    }

    /// Forces the vertical scroll offset for this frame.
    pub fn scroll_offset(mut self, offset: Option<f32>) -> Self {
        self.scroll_offset = offset;
        self
    }

    /// Shows arbitrary contents inside the menu frame.
    ///
    /// The returned output carries the scroll state, so callers can read and
    /// later restore the offset.
    pub fn show<R>(self, ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> ScrollAreaOutput<R> {
        let mut scroll = ScrollArea::vertical()
            .id_salt(self.id_salt)
            .max_height(self.max_height)
            .auto_shrink([false, true]);
        if let Some(offset) = self.scroll_offset {
            scroll = scroll.vertical_scroll_offset(offset);
        }

        let frame = egui::Frame::new()
            .fill(self.colors.menu_background)
            .stroke(egui::Stroke::new(1.0, self.colors.border));

        let output = frame.show(ui, |ui| scroll.show(ui, add_contents));
        output
            .response
            .widget_info(|| WidgetInfo::labeled(WidgetType::Other, true, MENU_ARIA_LABEL));
        output.inner
    }

    /// Shows every rendered node in flattened order.
    ///
    /// # Returns
    /// `None` when `children` is not a sequence; otherwise the scroll output
    /// with the flattened index of the clicked row, if any.
    pub fn show_children<N: MenuNode>(
        self,
        ui: &mut egui::Ui,
        children: &MenuChildren<N>,
    ) -> Option<ScrollAreaOutput<Option<usize>>> {
        let Some(rows) = flatten_children(children) else {
            log::trace!("select menu children not ready");
            return None;
        };

        Some(self.show(ui, |ui| {
            ui.spacing_mut().item_spacing.y = 0.0;
            let mut clicked = None;
            for (index, row) in rows.iter().enumerate() {
                if row.ui(ui).clicked() {
                    clicked = Some(index);
                }
            }
            clicked
        }))
    }
}
