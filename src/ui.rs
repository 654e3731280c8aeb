// src/ui.rs

use star_generator::point_list::point_list;
use star_generator::settings::{MAX_POINTS_RANGE, MAX_RADIUS_RANGE, RADIUS_TICKS};
use star_generator::{DisplayOptions, SliderConfig, Star, StarCommand};

/// What the host has to do after a UI pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiAction {
    Star(StarCommand),
    ResetCamera,
    ApplyLimits { max_points: u32, max_radius: u32 },
}

/// Widget state mirrored from the star; the star itself stays with the app.
#[derive(Debug)]
pub struct UiState {
    pub options: DisplayOptions,
    point_count: u32,
    outer_tick: u32,
    inner_tick: u32,
    rows: Vec<String>,
    settings_open: bool,
    max_points_edit: u32,
    max_radius_edit: u32,
}

impl UiState {
    pub fn new(star: &Star, config: &SliderConfig) -> Self {
        let mut state = Self {
            options: DisplayOptions::default(),
            point_count: star.point_count(),
            outer_tick: config.nearest_tick_for_radius(star.outer_radius()),
            inner_tick: config.tick_for_radius(star.inner_radius()),
            rows: Vec::new(),
            settings_open: false,
            max_points_edit: config.max_points(),
            max_radius_edit: config.max_radius(),
        };
        state.refresh_points(star);
        state
    }

    /// Moves every slider to the star's current values, including the
    /// derived inner radius.
    pub fn sync_sliders(&mut self, star: &Star, config: &SliderConfig) {
        self.point_count = star.point_count();
        self.outer_tick = config.nearest_tick_for_radius(star.outer_radius());
        self.inner_tick = config.tick_for_radius(star.inner_radius());
    }

    pub fn refresh_points(&mut self, star: &Star) {
        self.rows = point_list(star);
    }
}

pub fn build_ui(ctx: &egui::Context, state: &mut UiState, star: &Star, config: &SliderConfig) -> Vec<UiAction> {
    let mut actions = Vec::new();

    egui::Window::new("Star Generator")
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(10.0, 10.0))
        .resizable(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.checkbox(&mut state.options.grid, "Grid");
                ui.checkbox(&mut state.options.fill, "Fill");
                ui.checkbox(&mut state.options.edge, "Edge");
                ui.checkbox(&mut state.options.point, "Point");
            });
            ui.separator();

            let points = ui.add(egui::Slider::new(&mut state.point_count, config.point_range()).text("Points"));
            if points.changed() {
                actions.push(UiAction::Star(StarCommand::SetPointCount(state.point_count)));
            }

            let outer_label = format!("Outer radius {:.1}", config.radius_for_tick(state.outer_tick));
            let outer = ui.add(egui::Slider::new(&mut state.outer_tick, RADIUS_TICKS).show_value(false).text(outer_label));
            if outer.changed() {
                actions.push(UiAction::Star(StarCommand::SetOuterRadius(config.radius_for_tick(state.outer_tick))));
            }

            let inner_label = format!("Inner radius {:.1}", config.radius_for_tick(state.inner_tick));
            let inner = ui.add(egui::Slider::new(&mut state.inner_tick, RADIUS_TICKS).show_value(false).text(inner_label));
            if inner.changed() {
                actions.push(UiAction::Star(StarCommand::SetInnerRadius(config.radius_for_tick(state.inner_tick))));
            }

            ui.label(format!("Area: {:.2}", star.area()));
            ui.horizontal(|ui| {
                if ui.button("Reset Camera").clicked() {
                    actions.push(UiAction::ResetCamera);
                }
                if ui.button("Round").on_hover_text("Snap every point to integers").clicked() {
                    actions.push(UiAction::Star(StarCommand::RoundToInteger));
                }
                if ui.button("Settings").clicked() {
                    state.max_points_edit = config.max_points();
                    state.max_radius_edit = config.max_radius();
                    state.settings_open = true;
                }
            });
            ui.separator();

            egui::ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
                for (i, row) in state.rows.iter().enumerate() {
                    let selected = star.selected_index() == Some(i);
                    if ui.selectable_label(selected, row.as_str()).clicked() {
                        let command = if selected { StarCommand::ClearSelection } else { StarCommand::Select(i) };
                        actions.push(UiAction::Star(command));
                    }
                }
            });

            ui.separator();
            ui.label("Left drag: rotate, right drag / wheel: zoom");
        });

    let mut open = state.settings_open;
    let mut applied = false;
    egui::Window::new("Settings")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Max points");
                ui.add(egui::DragValue::new(&mut state.max_points_edit).clamp_range(MAX_POINTS_RANGE));
            });
            ui.horizontal(|ui| {
                ui.label("Max radius");
                ui.add(egui::DragValue::new(&mut state.max_radius_edit).clamp_range(MAX_RADIUS_RANGE));
            });
            if ui.button("OK").clicked() {
                applied = true;
            }
        });
    // closing the window keeps the edited values too
    if applied || (state.settings_open && !open) {
        actions.push(UiAction::ApplyLimits {
            max_points: state.max_points_edit,
            max_radius: state.max_radius_edit,
        });
        open = false;
    }
    state.settings_open = open;

    actions
}
