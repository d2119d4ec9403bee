// src/ui/chart.rs
use crate::ui::helpers::hex_color;
use crate::view_models::{ChartSlice, one_decimal};
use egui::{CornerRadius, Pos2, Sense, Shape, Stroke, Ui, Vec2, vec2};
use std::f32::consts::{FRAC_PI_2, TAU};

/// Segments per full turn; each arc is cut into convex quads.
const SEGMENTS: f32 = 96.0;

/// Doughnut chart, clockwise from twelve o'clock, with a hover tooltip.
pub fn doughnut(ui: &mut Ui, slices: &[ChartSlice], diameter: f32) {
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(diameter), Sense::hover());
    let total: u32 = slices.iter().map(|s| s.value).sum();
    if total == 0 {
        return;
    }

    let painter = ui.painter_at(rect);
    let center = rect.center();
    let outer = diameter / 2.0 - 2.0;
    let inner = outer * 0.55;
    let separator = Stroke::new(2.0, ui.visuals().panel_fill);

    let mut start = -FRAC_PI_2;
    for slice in slices {
        let sweep = TAU * slice.value as f32 / total as f32;
        let color = hex_color(slice.color);
        let steps = (sweep / TAU * SEGMENTS).ceil().max(1.0) as usize;
        for k in 0..steps {
            let a0 = start + sweep * k as f32 / steps as f32;
            let a1 = start + sweep * (k + 1) as f32 / steps as f32;
            let quad = vec![
                polar(center, outer, a0),
                polar(center, outer, a1),
                polar(center, inner, a1),
                polar(center, inner, a0),
            ];
            painter.add(Shape::convex_polygon(quad, color, Stroke::NONE));
        }
        if slices.len() > 1 {
            painter.line_segment(
                [polar(center, inner, start), polar(center, outer, start)],
                separator,
            );
        }
        start += sweep;
    }

    let Some(pointer) = response.hover_pos() else {
        return;
    };
    let d = pointer - center;
    let r = d.length();
    if r < inner || r > outer {
        return;
    }
    let turn = (d.y.atan2(d.x) + FRAC_PI_2).rem_euclid(TAU) / TAU;
    if let Some(idx) = slice_at(slices, turn) {
        response.on_hover_text_at_pointer(slice_tooltip(slices, idx));
    }
}

/// Colour swatch + label per slice.
pub fn legend(ui: &mut Ui, slices: &[ChartSlice]) {
    ui.horizontal_wrapped(|ui| {
        for slice in slices {
            let (rect, _) = ui.allocate_exact_size(vec2(12.0, 12.0), Sense::hover());
            ui.painter()
                .rect_filled(rect, CornerRadius::same(2), hex_color(slice.color));
            ui.label(slice.label);
            ui.add_space(8.0);
        }
    });
}

fn polar(center: Pos2, radius: f32, angle: f32) -> Pos2 {
    center + vec2(angle.cos(), angle.sin()) * radius
}

/// Slice under `turn` (0..1 of a full circle from the top, clockwise).
pub fn slice_at(slices: &[ChartSlice], turn: f32) -> Option<usize> {
    let total: u32 = slices.iter().map(|s| s.value).sum();
    if total == 0 {
        return None;
    }
    let mut acc = 0.0;
    for (i, slice) in slices.iter().enumerate() {
        acc += slice.value as f32 / total as f32;
        if turn < acc {
            return Some(i);
        }
    }
    slices.len().checked_sub(1)
}

pub fn slice_tooltip(slices: &[ChartSlice], idx: usize) -> String {
    let total: u32 = slices.iter().map(|s| s.value).sum();
    let slice = &slices[idx];
    let pct = slice.value as f64 / total as f64 * 100.0;
    format!("{}: {} blocks ({}%)", slice.label, slice.value, one_decimal(pct))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slices() -> Vec<ChartSlice> {
        vec![
            ChartSlice {
                label: "Bonds",
                value: 1,
                color: "#20c997",
            },
            ChartSlice {
                label: "Stocks",
                value: 3,
                color: "#ff9800",
            },
        ]
    }

    #[test]
    fn hover_position_maps_to_slice() {
        let s = slices();
        assert_eq!(slice_at(&s, 0.0), Some(0));
        assert_eq!(slice_at(&s, 0.2), Some(0));
        assert_eq!(slice_at(&s, 0.3), Some(1));
        assert_eq!(slice_at(&s, 0.999), Some(1));
        assert_eq!(slice_at(&[], 0.5), None);
    }

    #[test]
    fn tooltip_shows_share() {
        assert_eq!(slice_tooltip(&slices(), 1), "Stocks: 3 blocks (75.0%)");
    }

    #[test]
    fn tooltip_rounds_half_shares_up() {
        let s = vec![
            ChartSlice {
                label: "Cash",
                value: 1,
                color: "#6c757d",
            },
            ChartSlice {
                label: "Bonds",
                value: 15,
                color: "#20c997",
            },
        ];
        assert_eq!(slice_tooltip(&s, 0), "Cash: 1 blocks (6.3%)");
    }
}
