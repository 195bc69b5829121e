//! Option and group heading rows.
//!
//! These are the rendered nodes the menus lay out. Each row paints itself
//! into whatever rect the menu hands it.

use eframe::egui;
use egui::{Align2, FontId, Response, Sense, Stroke, WidgetInfo, WidgetType};

use crate::domain::dimensions::{ITEM_HEIGHT, PADDING};
use crate::domain::flatten::{MenuChildren, RenderedNode};
use crate::option::{SelectOption, SelectableValue};
use crate::theme::MenuColors;
use crate::ui::text_utils::truncate_text_to_fit;

/// Accessibility label of every option row
pub const OPTION_ARIA_LABEL: &str = "Select option";

/// Extra height of a row that shows a description
const DESCRIPTION_HEIGHT: f32 = 16.0;

/// Width reserved for the icon glyph
const ICON_WIDTH: f32 = 20.0;

/// Width of the selected-row accent bar
const SELECTED_BAR_WIDTH: f32 = 2.0;

/// A rendered node a menu can lay out.
pub trait MenuNode {
    fn ui(&self, ui: &mut egui::Ui) -> Response;
}

/// Custom label renderer for option rows
pub type LabelRenderer<'a, T> = &'a dyn Fn(&SelectableValue<T>) -> String;

/// One selectable row.
pub struct SelectMenuOption<'a, T> {
    data: &'a SelectableValue<T>,
    colors: &'a MenuColors,
    is_focused: bool,
    is_selected: bool,
    show_description: bool,
    height: f32,
    render_label: Option<LabelRenderer<'a, T>>,
}

impl<'a, T> SelectMenuOption<'a, T> {
    pub fn new(data: &'a SelectableValue<T>, colors: &'a MenuColors) -> Self {
        Self {
            data,
            colors,
            is_focused: false,
            is_selected: false,
            show_description: false,
            height: ITEM_HEIGHT,
            render_label: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.is_focused = focused;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.is_selected = selected;
        self
    }

    /// Shows the description line. Rows grow taller, so only use this
    /// outside virtualized menus.
    pub fn show_description(mut self, show: bool) -> Self {
        self.show_description = show;
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn render_label(mut self, render: LabelRenderer<'a, T>) -> Self {
        self.render_label = Some(render);
        self
    }

    /// Text drawn for the label, from the custom renderer when one is set.
    fn label_text(&self) -> String {
        match self.render_label {
            Some(render) => render(self.data),
            None => self.data.label_str().to_string(),
        }
    }

    fn row_height(&self) -> f32 {
        match &self.data.description {
            Some(_) if self.show_description => self.height + DESCRIPTION_HEIGHT,
            _ => self.height,
        }
    }
}

impl<T> MenuNode for SelectMenuOption<'_, T> {
    fn ui(&self, ui: &mut egui::Ui) -> Response {
        let data = self.data;
        let enabled = !data.is_disabled;
        let sense = if enabled { Sense::click() } else { Sense::hover() };

        let (rect, response) = ui.allocate_exact_size(egui::vec2(ui.available_width(), self.row_height()), sense);

        let label = self.label_text();
        response.widget_info(|| WidgetInfo::labeled(WidgetType::SelectableLabel, enabled, OPTION_ARIA_LABEL));

        if ui.is_rect_visible(rect) {
            let painter = ui.painter_at(rect);
            let colors = self.colors;

            if enabled && (self.is_focused || response.hovered()) {
                painter.rect_filled(rect, 2.0, colors.option_focused);
            }
            if self.is_selected {
                let bar = egui::Rect::from_min_size(rect.min, egui::vec2(SELECTED_BAR_WIDTH, rect.height()));
                painter.rect_filled(bar, 0.0, colors.option_selected);
            }

            let text_color = if enabled { colors.text } else { colors.option_disabled };
            let mut x = rect.left() + PADDING;
            let label_y = rect.top() + self.height / 2.0;

            if let Some(icon) = &data.icon {
                painter.text(
                    egui::pos2(x, label_y),
                    Align2::LEFT_CENTER,
                    icon,
                    FontId::proportional(14.0),
                    text_color,
                );
                x += ICON_WIDTH;
            }

            let font = FontId::proportional(14.0);
            let label = truncate_text_to_fit(&label, rect.right() - PADDING - x, &font, &painter);
            painter.text(egui::pos2(x, label_y), Align2::LEFT_CENTER, label, font, text_color);

            if self.show_description {
                if let Some(description) = &data.description {
                    let font = FontId::proportional(12.0);
                    let description = truncate_text_to_fit(description, rect.right() - PADDING - x, &font, &painter);
                    painter.text(
                        egui::pos2(x, rect.top() + self.height),
                        Align2::LEFT_CENTER,
                        description,
                        font,
                        colors.text_dim,
                    );
                }
            }
        }

        match &data.title {
            Some(title) => response.on_hover_text(title.as_str()),
            None => response,
        }
    }
}

/// Header row of an option group.
pub struct GroupHeading<'a, T> {
    data: &'a SelectableValue<T>,
    colors: &'a MenuColors,
    height: f32,
}

impl<'a, T> GroupHeading<'a, T> {
    pub fn new(data: &'a SelectableValue<T>, colors: &'a MenuColors) -> Self {
        Self {
            data,
            colors,
            height: ITEM_HEIGHT,
        }
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }
}

impl<T> MenuNode for GroupHeading<'_, T> {
    fn ui(&self, ui: &mut egui::Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(egui::vec2(ui.available_width(), self.height), Sense::hover());
        let label = self.data.label_str().to_string();
        response.widget_info(|| WidgetInfo::labeled(WidgetType::Label, true, &label));

        if ui.is_rect_visible(rect) {
            let painter = ui.painter_at(rect);
            let font = FontId::proportional(12.0);
            let label = truncate_text_to_fit(&label, rect.width() - PADDING * 2.0, &font, &painter);
            painter.text(
                egui::pos2(rect.left() + PADDING, rect.center().y),
                Align2::LEFT_CENTER,
                label,
                font,
                self.colors.group_heading,
            );
            painter.hline(
                rect.x_range(),
                rect.bottom() - 0.5,
                Stroke::new(1.0, self.colors.border),
            );
        }

        response
    }
}

/// A row of either kind.
pub enum MenuRow<'a, T> {
    Option(SelectMenuOption<'a, T>),
    Heading(GroupHeading<'a, T>),
}

impl<T> MenuNode for MenuRow<'_, T> {
    fn ui(&self, ui: &mut egui::Ui) -> Response {
        match self {
            MenuRow::Option(option) => option.ui(ui),
            MenuRow::Heading(heading) => heading.ui(ui),
        }
    }
}

/// Row state shared by every row built by [`build_rows`].
pub struct RowParams<'a, T> {
    pub colors: &'a MenuColors,
    pub focused: Option<&'a T>,
    pub selected: Option<&'a T>,
    pub item_height: f32,
    pub show_description: bool,
    /// Overrides the label text of option rows
    pub render_label: Option<LabelRenderer<'a, T>>,
}

/// Builds rendered rows mirroring the option hierarchy.
pub fn build_rows<'a, T: PartialEq>(options: &'a [SelectOption<T>], params: &RowParams<'a, T>) -> MenuChildren<MenuRow<'a, T>> {
    let option_row = |data: &'a SelectableValue<T>| {
        let mut row = SelectMenuOption::new(data, params.colors)
            .focused(params.focused == Some(&data.value))
            .selected(params.selected == Some(&data.value))
            .show_description(params.show_description)
            .height(params.item_height);
        if let Some(render) = params.render_label {
            row = row.render_label(render);
        }
        MenuRow::Option(row)
    };

    let nodes = options
        .iter()
        .map(|option| match option {
            SelectOption::Leaf(data) => RenderedNode::Node(option_row(data)),
            SelectOption::Group { header, children } => RenderedNode::Group {
                heading: MenuRow::Heading(GroupHeading::new(header, params.colors).height(params.item_height)),
                children: children.iter().map(&option_row).collect(),
            },
        })
        .collect();

    MenuChildren::Many(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::flatten::flatten_children;
    use crate::theme::ThemeManager;

    #[test]
    fn test_build_rows_mirrors_options() {
        let colors = ThemeManager::new().current_colors();
        let options = vec![
            SelectOption::leaf(1, "A"),
            SelectOption::group(2, "Group", vec![SelectableValue::new(3, "C1"), SelectableValue::new(4, "C2")]),
        ];
        let params = RowParams {
            colors: &colors,
            focused: Some(&3),
            selected: Some(&1),
            item_height: ITEM_HEIGHT,
            show_description: false,
            render_label: None,
        };

        let rows = build_rows(&options, &params);
        let flat = flatten_children(&rows).unwrap();
        assert_eq!(flat.len(), 4);
        assert!(matches!(flat[1], MenuRow::Heading(_)));
        match flat[2] {
            MenuRow::Option(option) => assert!(option.is_focused && !option.is_selected),
            MenuRow::Heading(_) => panic!("expected option row"),
        }
        match flat[0] {
            MenuRow::Option(option) => assert!(option.is_selected),
            MenuRow::Heading(_) => panic!("expected option row"),
        }
    }

    #[test]
    fn test_description_row_height() {
        let colors = ThemeManager::new().current_colors();
        let data = SelectableValue::new(1, "A").with_description("details");
        let plain = SelectMenuOption::new(&data, &colors);
        let described = SelectMenuOption::new(&data, &colors).show_description(true);
        assert_eq!(plain.row_height(), ITEM_HEIGHT);
        assert_eq!(described.row_height(), ITEM_HEIGHT + DESCRIPTION_HEIGHT);
    }

    #[test]
    fn test_custom_label_renderer() {
        let colors = ThemeManager::new().current_colors();
        let options = vec![
            SelectOption::leaf(1, "A"),
            SelectOption::group(2, "Group", vec![SelectableValue::new(3, "C1")]),
        ];
        let render = |data: &SelectableValue<i32>| format!("{} #{}", data.label_str(), data.value);
        let params = RowParams {
            colors: &colors,
            focused: None,
            selected: None,
            item_height: ITEM_HEIGHT,
            show_description: false,
            render_label: Some(&render),
        };

        let rows = build_rows(&options, &params);
        let labels: Vec<String> = flatten_children(&rows)
            .unwrap()
            .into_iter()
            .filter_map(|row| match row {
                MenuRow::Option(option) => Some(option.label_text()),
                MenuRow::Heading(_) => None,
            })
            .collect();
        assert_eq!(labels, vec!["A #1".to_string(), "C1 #3".to_string()]);

        let data = SelectableValue::new(5, "plain");
        assert_eq!(SelectMenuOption::new(&data, &colors).label_text(), "plain");
    }
}
