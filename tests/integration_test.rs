use anyhow::Result;
use eframe::egui;
use rselect::domain::dimensions::{ITEM_HEIGHT, WIDTH_ESTIMATE_MULTIPLIER};
use rselect::{
    build_rows, flatten_children, flatten_options, flatten_values, focused_entry_index, FocusTracker,
    ListViewport, MenuChildren, MenuConfig, MenuNode, RenderedNode, RowParams, ScrollHandle, SelectMenu,
    SelectOption, SelectableValue, ThemeManager, VirtualizedSelectMenu,
};
use std::cell::Cell;
use std::fs;
use std::env;

/// Scroll handle that records every request
#[derive(Default)]
struct RecordingHandle {
    requests: Vec<usize>,
}

impl ScrollHandle for RecordingHandle {
    fn scroll_to_index(&mut self, index: usize) {
        self.requests.push(index);
    }
}

/// Row that counts how often it was laid out
struct CountingNode<'a> {
    hits: &'a Cell<usize>,
}

impl MenuNode for CountingNode<'_> {
    fn ui(&self, ui: &mut egui::Ui) -> egui::Response {
        self.hits.set(self.hits.get() + 1);
        ui.allocate_exact_size(egui::vec2(ui.available_width(), ITEM_HEIGHT), egui::Sense::click())
            .1
    }
}

fn scenario_options() -> Vec<SelectOption<u32>> {
    vec![
        SelectOption::leaf(1, "A"),
        SelectOption::group(
            2,
            "Group",
            vec![SelectableValue::new(3, "C1"), SelectableValue::new(4, "C2")],
        ),
    ]
}

fn leaves(count: u32) -> Vec<SelectOption<u32>> {
    (1..=count).map(|v| SelectOption::leaf(v, format!("option {v}"))).collect()
}

fn counting_children(count: usize, hits: &Cell<usize>) -> MenuChildren<CountingNode<'_>> {
    MenuChildren::Many((0..count).map(|_| RenderedNode::Node(CountingNode { hits })).collect())
}

/// Runs one headless egui frame.
fn run_frame(ctx: &egui::Context, mut add_contents: impl FnMut(&mut egui::Ui)) {
    let _ = ctx.run(egui::RawInput::default(), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| add_contents(ui));
    });
}

#[test]
fn test_end_to_end_focus_scenario() {
    let options = scenario_options();

    let values: Vec<u32> = flatten_values(&options).iter().map(|v| v.value).collect();
    assert_eq!(values, vec![1, 2, 3, 4]);

    let entries = flatten_options(&options);
    let index = focused_entry_index(&options, &entries, Some(&3));
    assert_eq!(index, Some(2));

    // Several render passes with unchanged focus scroll exactly once
    let mut tracker = FocusTracker::new();
    let mut handle = RecordingHandle::default();
    for _ in 0..3 {
        let index = focused_entry_index(&options, &entries, Some(&3));
        tracker.sync(index, &mut handle);
    }
    assert_eq!(handle.requests, vec![2]);
}

#[test]
fn test_unmatched_focus_never_scrolls() {
    let options = scenario_options();
    let entries = flatten_options(&options);
    let mut tracker = FocusTracker::new();
    let mut handle = RecordingHandle::default();

    tracker.sync(focused_entry_index(&options, &entries, Some(&42)), &mut handle);
    tracker.sync(focused_entry_index(&options, &entries, None), &mut handle);
    assert!(handle.requests.is_empty());
}

#[test]
fn test_viewport_as_scroll_handle_is_idempotent() {
    let mut viewport = ListViewport::new(ITEM_HEIGHT, 2);
    viewport.set_layout(100, 300.0);

    viewport.scroll_to_index(60);
    let offset = viewport.scroll_offset();
    assert!(viewport.visible_range().contains(&60));

    viewport.scroll_to_index(60);
    assert_eq!(viewport.scroll_offset(), offset);
}

#[test]
fn test_parallel_flatten_with_built_rows() {
    let colors = ThemeManager::new().current_colors();
    let options = vec![
        SelectOption::group(10u32, "Empty", vec![]),
        SelectOption::leaf(11, "x"),
        SelectOption::group(
            12,
            "Two",
            vec![SelectableValue::new(13, "a"), SelectableValue::unlabeled(14)],
        ),
    ];
    let params = RowParams {
        colors: &colors,
        focused: None,
        selected: None,
        item_height: ITEM_HEIGHT,
        show_description: false,
        render_label: None,
    };

    let rows = build_rows(&options, &params);
    let flat_rows = flatten_children(&rows).map(|r| r.len());
    assert_eq!(flat_rows, Some(flatten_options(&options).len()));
    assert_eq!(flat_rows, Some(5));
}

#[test]
fn test_virtualized_menu_renders_window_only() {
    let ctx = egui::Context::default();
    let options = leaves(100);
    let hits = Cell::new(0);
    let children = counting_children(100, &hits);
    let mut menu = VirtualizedSelectMenu::new("window_test");
    let mut output = None;

    run_frame(&ctx, |ui| {
        output = menu.show(ui, &options, &children, None, 300.0);
    });

    let output = output.expect("menu should render");
    assert_eq!(output.rendered, 0..11);
    assert_eq!(hits.get(), output.rendered.len());
    assert_eq!(output.dimensions.height, 300.0);
    // "option 100" is the longest label
    assert_eq!(output.dimensions.width, 10.0 * WIDTH_ESTIMATE_MULTIPLIER + 16.0 + 36.0);
}

#[test]
fn test_virtualized_menu_scrolls_to_focus() {
    let ctx = egui::Context::default();
    let options = leaves(100);
    let hits = Cell::new(0);
    let children = counting_children(100, &hits);
    let mut menu = VirtualizedSelectMenu::new("focus_test");
    let mut output = None;

    run_frame(&ctx, |ui| {
        output = menu.show(ui, &options, &children, Some(&50), 300.0);
    });

    let output = output.expect("menu should render");
    assert_eq!(menu.focused_row(), Some(49));
    assert!(output.rendered.contains(&49));
    assert!(!output.rendered.contains(&0));
    assert_eq!(hits.get(), output.rendered.len());

    // Same focus next frame leaves the viewport where it is
    let offset = menu.viewport().scroll_offset();
    run_frame(&ctx, |ui| {
        menu.show(ui, &options, &children, Some(&50), 300.0);
    });
    assert_eq!(menu.viewport().scroll_offset(), offset);
}

#[test]
fn test_virtualized_menu_not_ready_children() {
    let ctx = egui::Context::default();
    let options = scenario_options();
    let hits = Cell::new(0);
    let children = MenuChildren::Single(CountingNode { hits: &hits });
    let mut menu = VirtualizedSelectMenu::new("not_ready_test");
    let mut rendered = true;

    run_frame(&ctx, |ui| {
        rendered = menu.show(ui, &options, &children, Some(&3), 300.0).is_some();
    });

    assert!(!rendered);
    assert_eq!(hits.get(), 0);
}

#[test]
fn test_virtualized_menu_empty_input() {
    let ctx = egui::Context::default();
    let options: Vec<SelectOption<u32>> = Vec::new();
    let children: MenuChildren<CountingNode> = MenuChildren::Many(Vec::new());
    let mut menu = VirtualizedSelectMenu::new("empty_test");
    let mut output = None;

    run_frame(&ctx, |ui| {
        output = menu.show(ui, &options, &children, None, 300.0);
    });

    let output = output.expect("empty menu still renders a region");
    assert!(output.rendered.is_empty());
    assert_eq!(output.dimensions.width, 52.0);
    assert_eq!(output.dimensions.height, 0.0);
}

#[test]
fn test_virtualized_menu_zero_max_height() {
    let ctx = egui::Context::default();
    let options = leaves(5);
    let hits = Cell::new(0);
    let children = counting_children(5, &hits);
    let mut menu = VirtualizedSelectMenu::new("zero_height_test");
    let mut output = None;

    run_frame(&ctx, |ui| {
        output = menu.show(ui, &options, &children, Some(&2), 0.0);
    });

    let output = output.expect("menu should render");
    assert_eq!(output.dimensions.height, 0.0);
    assert!(output.rendered.is_empty());
    assert_eq!(hits.get(), 0);
}

#[test]
fn test_virtualized_menu_children_drive_item_count() {
    let ctx = egui::Context::default();
    let options = leaves(3);
    let hits = Cell::new(0);
    let children = counting_children(5, &hits);
    let mut menu = VirtualizedSelectMenu::new("mismatch_test");
    let mut output = None;

    run_frame(&ctx, |ui| {
        output = menu.show(ui, &options, &children, None, 300.0);
    });

    let output = output.expect("menu should render");
    assert_eq!(output.dimensions.height, 5.0 * ITEM_HEIGHT);
    assert_eq!(output.rendered, 0..5);
    assert_eq!(menu.viewport().item_count(), 5);
    assert_eq!(hits.get(), 5);
}

#[test]
fn test_plain_menu_renders_everything() {
    let ctx = egui::Context::default();
    let colors = ThemeManager::new().current_colors();
    let hits = Cell::new(0);
    let children = MenuChildren::Many(vec![
        RenderedNode::Node(CountingNode { hits: &hits }),
        RenderedNode::Group {
            heading: CountingNode { hits: &hits },
            children: vec![CountingNode { hits: &hits }, CountingNode { hits: &hits }],
        },
    ]);
    let mut shown = false;

    run_frame(&ctx, |ui| {
        shown = SelectMenu::new("plain_test", &colors)
            .max_height(300.0)
            .show_children(ui, &children)
            .is_some();
    });

    assert!(shown);
    assert_eq!(hits.get(), 4);
}

#[test]
fn test_config_file_drives_menu() -> Result<()> {
    let path = env::temp_dir().join("rselect_integration_config.json");
    fs::write(&path, r#"{"item_height": 20, "overscan_rows": 0}"#)?;

    let config = MenuConfig::load(&path)?;
    let mut menu = VirtualizedSelectMenu::with_config("config_test", &config);
    menu.viewport_mut().set_layout(50, 100.0);

    // 100 / 20 = 5 rows, no overscan
    assert_eq!(menu.viewport().visible_range(), 0..5);

    fs::remove_file(&path)?;
    Ok(())
}
