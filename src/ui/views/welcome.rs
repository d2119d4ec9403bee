use crate::model::AppState;
use crate::ui::helpers::big_list_button;
use crate::ui::layout::centered_panel;
use egui::{Context, RichText};

pub fn ui_welcome(ctx: &Context, pages: &[AppState]) -> Option<AppState> {
    let mut go = None;
    centered_panel(ctx, 260.0, 540.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("Learn to diversify").size(28.0));
            ui.add_space(8.0);
            ui.label("Drag asset blocks into a portfolio to see how risk changes, then test yourself with a short quiz.");
            ui.add_space(18.0);

            let btn_w = (ui.available_width() * 0.9).clamp(120.0, 400.0);
            let btn_h = 40.0;
            for &page in pages.iter().filter(|p| **p != AppState::Welcome) {
                if big_list_button(ui, page.title(), btn_w, btn_h, true) {
                    go = Some(page);
                }
                ui.add_space(5.0);
            }
        });
    });
    go
}
