// src/web.rs: browser entry point.
use crate::{LessonApp, LessonConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::wasm_bindgen;

/// Id of the `<canvas>` the page provides for the lesson.
const CANVAS_ID: &str = "lesson_canvas";

#[wasm_bindgen(start)]
pub fn start() {
    let _ = eframe::WebLogger::init(log::LevelFilter::Debug);

    wasm_bindgen_futures::spawn_local(async {
        // Without a canvas this page simply has no lesson.
        let Some(canvas) = find_canvas() else {
            log::info!("no #{CANVAS_ID} on this page, lesson not started");
            return;
        };

        let config = LessonConfig::default();
        let options = config.web_options();
        let result = eframe::WebRunner::new()
            .start(
                canvas,
                options,
                Box::new(|_cc| Ok(Box::new(LessonApp::with_config(config)))),
            )
            .await;

        if let Err(e) = result {
            log::error!("failed to start lesson: {e:?}");
        }
    });
}

fn find_canvas() -> Option<web_sys::HtmlCanvasElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CANVAS_ID)?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .ok()
}
