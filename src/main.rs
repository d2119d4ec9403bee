#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use portfolio_quiz::{LessonApp, LessonConfig};

    pretty_env_logger::init();

    let config = LessonConfig::default();
    let options = config.native_options();
    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(LessonApp::with_config(config)))),
    )
}

// The web build starts from `web::start` in the library.
#[cfg(target_arch = "wasm32")]
fn main() {}
