// src/surface.rs

use crate::model::{AppState, AssetType};
use crate::view_models::{PortfolioView, QuizView};

/// Input coming back from the portfolio board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PortfolioEvent {
    DragStarted(AssetType),
    DragEnded,
    /// Raw payload carried by whatever was dropped on the board.
    Dropped(String),
    Remove(AssetType),
    Reset,
}

/// Input coming back from the quiz form and results panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizEvent {
    Select { question: usize, option: usize },
    Submit,
    Retake,
    Regenerate,
}

/// Whatever draws the lesson. It receives finished view models, draws them
/// and hands back the input events of this frame; it never touches state.
pub trait Surface {
    /// Page switcher. `pages` only lists pages whose feature is active.
    fn navigation(&mut self, current: AppState, pages: &[AppState]) -> Option<AppState>;

    fn welcome(&mut self, pages: &[AppState]) -> Option<AppState>;

    fn portfolio(
        &mut self,
        view: &PortfolioView,
        dragging: Option<AssetType>,
    ) -> Vec<PortfolioEvent>;

    fn quiz(&mut self, view: &QuizView) -> Vec<QuizEvent>;
}
