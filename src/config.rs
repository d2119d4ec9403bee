// src/config.rs

use crate::model::AppState;
use std::time::Duration;

/// Knobs for the lesson; everything is compiled in, nothing is read from disk.
#[derive(Clone, Debug)]
pub struct LessonConfig {
    /// How many questions a quiz draws from the bank.
    pub quiz_size: usize,
    /// Length of the drop-zone pulse after a successful drop.
    pub drop_pulse: Duration,
    pub start_page: AppState,
    pub window_title: String,
    pub window_size: [f32; 2],
}

impl Default for LessonConfig {
    fn default() -> Self {
        Self {
            quiz_size: 10,
            drop_pulse: Duration::from_millis(200),
            start_page: AppState::Welcome,
            window_title: "Build Your Portfolio".to_owned(),
            window_size: [1100.0, 780.0],
        }
    }
}

impl LessonConfig {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(self.window_title.clone())
                .with_inner_size(self.window_size),
            ..Default::default()
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn web_options(&self) -> eframe::WebOptions {
        eframe::WebOptions::default()
    }
}
