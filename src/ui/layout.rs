use crate::model::AppState;
use egui::{Button, CentralPanel, Context, Frame, ScrollArea, Ui, Visuals};

/// Page switcher; the current page is drawn selected.
pub fn top_panel(ctx: &Context, current: AppState, pages: &[AppState]) -> Option<AppState> {
    let mut picked = None;
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            for &page in pages {
                if ui.selectable_label(page == current, page.title()).clicked() && page != current {
                    picked = Some(page);
                }
            }
        });
    });
    picked
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- THEME BUTTONS -----------
        ui.with_layout(
            egui::Layout::right_to_left(egui::Align::Center),
            |ui| {
                if ui.button("🌙 Dark mode").clicked() {
                    ctx.set_visuals(Visuals::dark());
                }
                if ui.button("☀ Light mode").clicked() {
                    ctx.set_visuals(Visuals::light());
                }
            }
        );
    });
}

/// Panel centred both ways, with a maximum content width.
pub fn centered_panel<R>(
    ctx: &Context,
    est_height: f32,
    max_width: f32,
    inner: impl FnOnce(&mut Ui) -> R,
) -> R {
    CentralPanel::default()
        .show(ctx, |ui| {
            let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
            ui.add_space(extra);
            let out = ui
                .vertical_centered(|ui| {
                    Frame::default()
                        .fill(ui.visuals().window_fill())
                        .inner_margin(egui::Margin::symmetric(16, 16))
                        .show(ui, |ui| {
                            let w = ui.available_width().min(max_width);
                            ui.set_width(w);
                            inner(ui)
                        })
                        .inner
                })
                .inner;
            ui.add_space(extra);
            out
        })
        .inner
}

/// Full-height scrolling panel with a capped content width.
pub fn scroll_panel<R>(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui) -> R) -> R {
    CentralPanel::default()
        .show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        let w = ui.available_width().min(max_width);
                        ui.set_max_width(w);
                        ui.with_layout(egui::Layout::top_down(egui::Align::Min), inner)
                            .inner
                    })
                    .inner
                })
                .inner
        })
        .inner
}

/// Two equal buttons in a row, centred in `panel_width`.
/// Returns (left clicked, right clicked).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left_label: &str,
    right_label: &str,
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        clicked_left = ui
            .add_sized([btn_w, 36.0], Button::new(left_label))
            .clicked();
        clicked_right = ui
            .add_sized([btn_w, 36.0], Button::new(right_label))
            .clicked();
    });
    (clicked_left, clicked_right)
}
