mod chart;
mod helpers;
pub mod layout;
pub mod views;

use crate::app::LessonApp;
use crate::model::{AppState, AssetType};
use crate::surface::{PortfolioEvent, QuizEvent, Surface};
use crate::view_models::{PortfolioView, QuizView};
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};
use std::time::Duration;

impl App for LessonApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Bottom panel: light/dark theme
        bottom_panel(ctx);

        let mut surface = EguiSurface::new(ctx, self.config.drop_pulse);
        self.frame(&mut surface);
    }
}

/// `Surface` drawn with egui panels for the current frame.
pub struct EguiSurface<'a> {
    ctx: &'a Context,
    drop_pulse: Duration,
}

impl<'a> EguiSurface<'a> {
    pub fn new(ctx: &'a Context, drop_pulse: Duration) -> Self {
        Self { ctx, drop_pulse }
    }
}

impl Surface for EguiSurface<'_> {
    fn navigation(&mut self, current: AppState, pages: &[AppState]) -> Option<AppState> {
        top_panel(self.ctx, current, pages)
    }

    fn welcome(&mut self, pages: &[AppState]) -> Option<AppState> {
        views::welcome::ui_welcome(self.ctx, pages)
    }

    fn portfolio(
        &mut self,
        view: &PortfolioView,
        dragging: Option<AssetType>,
    ) -> Vec<PortfolioEvent> {
        views::builder::ui_builder(self.ctx, view, dragging, self.drop_pulse)
    }

    fn quiz(&mut self, view: &QuizView) -> Vec<QuizEvent> {
        match view {
            QuizView::Answering { questions } => views::quiz::ui_quiz_form(self.ctx, questions),
            QuizView::Graded(result) => views::review::ui_results(self.ctx, result),
        }
    }
}
