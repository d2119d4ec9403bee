use crate::model::AssetType;
use crate::surface::PortfolioEvent;
use crate::ui::chart::{doughnut, legend};
use crate::ui::helpers::{alert, asset_tile, block_row, severity_color};
use crate::ui::layout::scroll_panel;
use crate::view_models::{InsightView, PortfolioView, RiskView};
use egui::{
    Button, Color32, Context, CornerRadius, Frame, Id, Margin, ProgressBar, Rect, RichText, Stroke,
    StrokeKind, Ui,
};
use std::time::Duration;

fn tile_id(asset: AssetType) -> Id {
    Id::new(("asset_tile", asset.id()))
}

fn pulse_id() -> Id {
    Id::new("drop_pulse_started")
}

pub fn ui_builder(
    ctx: &Context,
    view: &PortfolioView,
    dragging: Option<AssetType>,
    pulse: Duration,
) -> Vec<PortfolioEvent> {
    let mut events = Vec::new();
    scroll_panel(ctx, 1100.0, |ui| {
        ui.heading("🧱 Build your portfolio");
        ui.label("Drag blocks from the palette into your portfolio. Each block is one unit of that asset.");
        ui.add_space(10.0);

        ui.columns(2, |cols| {
            palette(&mut cols[0], dragging, &mut events);
            cols[0].add_space(12.0);
            drop_zone(&mut cols[0], view, dragging, pulse, &mut events);

            overview(&mut cols[1], view);
        });
    });
    events
}

fn palette(ui: &mut Ui, dragging: Option<AssetType>, events: &mut Vec<PortfolioEvent>) {
    ui.strong("Assets");
    ui.horizontal_wrapped(|ui| {
        for asset in AssetType::ALL {
            let response = ui
                .dnd_drag_source(tile_id(asset), asset.id().to_owned(), |ui| {
                    if dragging == Some(asset) {
                        ui.set_opacity(0.5);
                    }
                    asset_tile(ui, asset);
                })
                .response;
            if response.drag_started() {
                events.push(PortfolioEvent::DragStarted(asset));
            }
        }
    });

    let still_dragging = AssetType::ALL
        .into_iter()
        .any(|a| ui.ctx().is_being_dragged(tile_id(a)));
    if dragging.is_some() && !still_dragging {
        events.push(PortfolioEvent::DragEnded);
    }
}

fn drop_zone(
    ui: &mut Ui,
    view: &PortfolioView,
    dragging: Option<AssetType>,
    pulse: Duration,
    events: &mut Vec<PortfolioEvent>,
) {
    ui.horizontal(|ui| {
        ui.strong("Your portfolio");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let reset = ui.add_enabled(!view.blocks.is_empty(), Button::new("⟲ Reset"));
            if reset.clicked() {
                events.push(PortfolioEvent::Reset);
            }
        });
    });

    let now = ui.ctx().input(|i| i.time);
    let started: Option<f64> = ui.ctx().data(|d| d.get_temp(pulse_id()));
    let frame = Frame::default()
        .inner_margin(Margin::same(12))
        .corner_radius(CornerRadius::same(10));

    let (zone, dropped) = ui.dnd_drop_zone::<String, ()>(frame, |ui| {
        ui.set_min_size(egui::vec2(ui.available_width(), 180.0));
        if view.blocks.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(50.0);
                let hint = match dragging {
                    Some(asset) => format!("Drop {} {} here", asset.icon(), asset.label()),
                    None => "Drag assets here to build your portfolio".to_owned(),
                };
                ui.weak(RichText::new(hint).size(16.0));
            });
            return;
        }
        for block in &view.blocks {
            if block_row(ui, block) {
                events.push(PortfolioEvent::Remove(block.asset));
            }
        }
    });

    // dnd_drop_zone paints its own stroke, so the pulse goes on top.
    if let Some(outline) = pulse_outline(zone.response.rect, started, now, pulse) {
        ui.painter().rect_stroke(
            outline,
            CornerRadius::same(14),
            Stroke::new(3.0, ui.visuals().selection.bg_fill),
            StrokeKind::Outside,
        );
        ui.ctx().request_repaint_after(pulse);
    }

    if let Some(payload) = dropped {
        if payload.parse::<AssetType>().is_ok() {
            ui.ctx().data_mut(|d| d.insert_temp(pulse_id(), now));
            ui.ctx().request_repaint();
        }
        events.push(PortfolioEvent::Dropped((*payload).clone()));
    }
}

/// Grow applied to the drop zone outline while a pulse runs.
const PULSE_GROW: f32 = 4.0;

/// Outline of a running drop pulse, slightly larger than the zone itself.
fn pulse_outline(zone: Rect, started: Option<f64>, now: f64, pulse: Duration) -> Option<Rect> {
    let elapsed = now - started?;
    (elapsed >= 0.0 && elapsed < pulse.as_secs_f64()).then(|| zone.expand(PULSE_GROW))
}

fn overview(ui: &mut Ui, view: &PortfolioView) {
    ui.strong("Allocation");
    ui.add_space(4.0);
    if view.chart.is_empty() {
        ui.weak("Add some assets to see your allocation chart.");
    } else {
        ui.vertical_centered(|ui| {
            doughnut(ui, &view.chart, 220.0);
        });
        legend(ui, &view.chart);
    }

    ui.add_space(6.0);
    for (i, line) in view.summary.lines().into_iter().enumerate() {
        if i == 0 && !view.chart.is_empty() {
            ui.strong(line);
        } else if view.chart.is_empty() {
            ui.weak(line);
        } else {
            ui.label(line);
        }
    }

    ui.add_space(12.0);
    risk_meter(ui, &view.risk);

    ui.add_space(12.0);
    insights(ui, &view.insights);
}

fn risk_meter(ui: &mut Ui, risk: &RiskView) {
    ui.strong("Risk meter");
    let fill = (risk.fill_percent() / 100.0) as f32;
    ui.add(
        ProgressBar::new(fill)
            .fill(severity_color(risk.severity()))
            .desired_width(ui.available_width()),
    );
    ui.add_space(4.0);
    alert(ui, risk.severity(), |ui| {
        ui.strong(risk.heading());
        ui.label(risk.message());
    });
}

fn insights(ui: &mut Ui, insights: &InsightView) {
    ui.strong("What this means");
    match insights {
        InsightView::Prompt => {
            ui.weak(InsightView::PROMPT);
        }
        InsightView::Encourage => {
            ui.label(InsightView::ENCOURAGE);
        }
        InsightView::Notes(notes) => {
            for note in notes {
                ui.add_space(4.0);
                ui.label(RichText::new(note.title()).strong().color(Color32::from_rgb(0x17, 0xa2, 0xb8)));
                ui.label(note.body());
            }
        }
    }
}
