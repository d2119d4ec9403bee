// src/ui/helpers.rs
use crate::model::AssetType;
use crate::view_models::{Block, Severity};
use egui::{Button, Color32, CornerRadius, Frame, Margin, RichText, Stroke, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: &str, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// `#rrggbb` to a colour; unknown strings paint grey.
pub fn hex_color(hex: &str) -> Color32 {
    Color32::from_hex(hex).unwrap_or(Color32::GRAY)
}

pub fn severity_color(severity: Severity) -> Color32 {
    match severity {
        Severity::Success => Color32::from_rgb(0x28, 0xa7, 0x45),
        Severity::Info => Color32::from_rgb(0x17, 0xa2, 0xb8),
        Severity::Warning => Color32::from_rgb(0xff, 0xc1, 0x07),
        Severity::Danger => Color32::from_rgb(0xdc, 0x35, 0x45),
    }
}

/// Tinted box in the colour of `severity`, like a page alert.
pub fn alert<R>(ui: &mut Ui, severity: Severity, inner: impl FnOnce(&mut Ui) -> R) -> R {
    let color = severity_color(severity);
    Frame::default()
        .fill(color.gamma_multiply(0.15))
        .stroke(Stroke::new(1.0, color))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            inner(ui)
        })
        .inner
}

/// Palette tile for one asset type.
pub fn asset_tile(ui: &mut Ui, asset: AssetType) {
    Frame::default()
        .fill(ui.visuals().faint_bg_color)
        .stroke(Stroke::new(2.0, hex_color(asset.color())))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.set_min_width(110.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(asset.icon()).size(26.0));
                ui.strong(asset.label());
                ui.small(format!("Risk: {}/5", asset.risk()));
            });
        });
}

/// One block on the board. Returns true when its Remove button was clicked.
pub fn block_row(ui: &mut Ui, block: &Block) -> bool {
    let mut remove = false;
    Frame::default()
        .fill(ui.visuals().extreme_bg_color)
        .stroke(Stroke::new(1.0, hex_color(block.asset.color())))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(Margin::symmetric(10, 4))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(block.asset.icon()).size(20.0));
                ui.vertical(|ui| {
                    ui.strong(block.asset.label());
                    ui.small(block.risk_label());
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    remove = ui.small_button("Remove").clicked();
                });
            });
        });
    remove
}
