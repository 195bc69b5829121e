//! Virtualized select menu.
//!
//! Only rows intersecting the viewport (plus an overscan margin) are laid
//! out, each at an absolute offset inside the scroll content. Because rows
//! are positioned absolutely the menu cannot measure itself, so its size is
//! estimated from the longest label and the row count.
//!
//! Rows must have a uniform height; option descriptions are not shown.

use std::ops::Range;

use eframe::egui;
use egui::{Id, Rect, ScrollArea, UiBuilder, WidgetInfo, WidgetType};

use crate::cache::MenuCache;
use crate::config::MenuConfig;
use crate::domain::dimensions::{EstimatorParams, ViewportDimensions};
use crate::domain::flatten::{flatten_children, FlatEntry, MenuChildren};
use crate::domain::focus::{focused_entry_index, FocusTracker};
use crate::domain::windowing::{ListViewport, DEFAULT_OVERSCAN_ROWS};
use crate::option::SelectOption;
use crate::ui::menu_option::MenuNode;
use crate::ui::select_menu::MENU_ARIA_LABEL;

/// Result of showing the menu for one frame.
pub struct MenuOutput {
    /// Response of the whole menu region
    pub response: egui::Response,
    /// Flattened index of the row clicked this frame
    pub clicked: Option<usize>,
    /// Flattened index of the row under the pointer
    pub hovered: Option<usize>,
    /// Rows laid out this frame
    pub rendered: Range<usize>,
    pub dimensions: ViewportDimensions,
}

/// Persistent state of a virtualized menu.
///
/// Keep one instance per menu across frames; it owns the scroll offset, the
/// focus tracker and the memoized flattening.
pub struct VirtualizedSelectMenu {
    id_salt: Id,
    params: EstimatorParams,
    cache: MenuCache,
    viewport: ListViewport,
    focus: FocusTracker,
}

impl VirtualizedSelectMenu {
    pub fn new(id_salt: impl std::hash::Hash) -> Self {
        let params = EstimatorParams::default();
        Self {
            id_salt: Id::new(id_salt),
            params,
            cache: MenuCache::new(),
            viewport: ListViewport::new(params.item_height, DEFAULT_OVERSCAN_ROWS),
            focus: FocusTracker::new(),
        }
    }

    /// Creates a menu using the estimation constants and overscan from `config`.
    pub fn with_config(id_salt: impl std::hash::Hash, config: &MenuConfig) -> Self {
        let mut menu = Self::new(id_salt);
        menu.apply_config(config);
        menu
    }

    /// Updates estimation constants and overscan.
    pub fn apply_config(&mut self, config: &MenuConfig) {
        self.params = config.estimator_params();
        self.viewport.set_item_size(self.params.item_height);
        self.viewport.set_overscan(config.overscan_rows);
    }

    /// Scroll state of the list; callers may scroll it imperatively.
    pub fn viewport(&self) -> &ListViewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut ListViewport {
        &mut self.viewport
    }

    /// Flattened rows of the last shown option set.
    pub fn entries(&self) -> &[FlatEntry] {
        self.cache.entries()
    }

    /// Focused row as of the last frame.
    pub fn focused_row(&self) -> Option<usize> {
        self.focus.current()
    }

    /// Forces recomputation on the next frame.
    pub fn invalidate(&mut self) {
        self.cache.invalidate();
        self.focus.reset();
    }

    /// Lays out the menu.
    ///
    /// # Arguments
    /// * `options` - Option hierarchy
    /// * `children` - Rendered rows mirroring `options`
    /// * `focused` - Value of the focused option, if any
    /// * `max_height` - Height cap in pixels
    ///
    /// # Returns
    /// `None` when `children` is not a sequence (nothing is drawn).
    pub fn show<T: PartialEq, N: MenuNode>(
        &mut self,
        ui: &mut egui::Ui,
        options: &[SelectOption<T>],
        children: &MenuChildren<N>,
        focused: Option<&T>,
        max_height: f32,
    ) -> Option<MenuOutput> {
        self.cache.refresh(options);

        let Some(rows) = flatten_children(children) else {
            log::trace!("virtualized menu children not ready");
            return None;
        };
        if rows.len() != self.cache.entries().len() {
            log::warn!(
                "rendered rows ({}) do not match flattened options ({})",
                rows.len(),
                self.cache.entries().len()
            );
        }

        let item_count = rows.len();
        let dimensions = self.cache.dimensions(item_count, max_height, &self.params);
        self.viewport.set_layout(item_count, dimensions.height);

        let index = focused_entry_index(options, self.cache.entries(), focused);
        self.focus.sync(index, &mut self.viewport);

        let size = egui::vec2(dimensions.width, dimensions.height);
        if dimensions.height <= 0.0 {
            let (_, response) = ui.allocate_exact_size(egui::vec2(dimensions.width, 0.0), egui::Sense::hover());
            response.widget_info(|| WidgetInfo::labeled(WidgetType::Other, true, MENU_ARIA_LABEL));
            return Some(MenuOutput {
                response,
                clicked: None,
                hovered: None,
                rendered: 0..0,
                dimensions,
            });
        }

        let mut scroll = ScrollArea::vertical()
            .id_salt(self.id_salt)
            .max_height(dimensions.height)
            .min_scrolled_height(dimensions.height)
            .auto_shrink([false, false]);
        if let Some(offset) = self.viewport.take_pending_scroll() {
            scroll = scroll.vertical_scroll_offset(offset);
        }

        let viewport = &mut self.viewport;
        let mut clicked = None;
        let mut hovered = None;
        let mut rendered = 0..0;

        let response = ui
            .allocate_ui(size, |ui| {
                ui.set_width(dimensions.width);
                scroll.show_viewport(ui, |ui, visible| {
                    viewport.sync_scroll_offset(visible.min.y);
                    ui.set_height(viewport.content_height());

                    let top = ui.min_rect().top();
                    let x_range = ui.max_rect().x_range();
                    rendered = viewport.visible_range();

                    for index in rendered.clone() {
                        let style = viewport.item_style(index);
                        let rect = Rect::from_x_y_ranges(x_range, top + style.top..=top + style.top + style.height);

                        let row_response = ui
                            .scope_builder(UiBuilder::new().max_rect(rect), |ui| {
                                ui.set_clip_rect(rect.intersect(ui.clip_rect()));
                                rows[index].ui(ui)
                            })
                            .inner;

                        if row_response.clicked() {
                            clicked = Some(index);
                        }
                        if row_response.hovered() {
                            hovered = Some(index);
                        }
                    }
                });
            })
            .response;
        response.widget_info(|| WidgetInfo::labeled(WidgetType::Other, true, MENU_ARIA_LABEL));

        Some(MenuOutput {
            response,
            clicked,
            hovered,
            rendered,
            dimensions,
        })
    }
}
