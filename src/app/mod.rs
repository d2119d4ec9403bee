use crate::config::LessonConfig;
use crate::data::read_questions_embedded;
use crate::model::{AppState, AssetType, QuizQuestion};
use crate::portfolio::Portfolio;
use crate::quiz::{Grade, QuizSession};
use crate::view_models::{PortfolioView, QuizView};
use rand::SeedableRng;
use rand::rngs::StdRng;

// Submodules
pub mod actions;
pub mod dispatch;
pub mod navigation;
pub mod view_models;

pub use view_models::{portfolio_view, quiz_view};

/// The drag-and-drop board: counts plus the views derived from them.
#[derive(Clone, Debug)]
pub struct Board {
    pub portfolio: Portfolio,
    pub view: PortfolioView,
    /// Asset currently being dragged from the palette, if any.
    pub dragging: Option<AssetType>,
}

impl Default for Board {
    fn default() -> Self {
        let portfolio = Portfolio::new();
        let view = portfolio_view(&portfolio);
        Self {
            portfolio,
            view,
            dragging: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum QuizPhase {
    Answering,
    Graded(Grade),
}

/// Quiz state: the fixed bank, the current run and its rendered view.
#[derive(Clone, Debug)]
pub struct QuizDesk {
    pub bank: Vec<QuizQuestion>,
    pub size: usize,
    pub session: QuizSession,
    pub phase: QuizPhase,
    pub view: QuizView,
}

pub struct LessonApp {
    pub config: LessonConfig,
    pub state: AppState,
    pub board: Board,
    /// `None` when no usable question bank was found; the quiz page is
    /// hidden in that case.
    pub quiz: Option<QuizDesk>,
    rng: StdRng,
}

impl LessonApp {
    pub fn new() -> Self {
        Self::with_config(LessonConfig::default())
    }

    pub fn with_config(config: LessonConfig) -> Self {
        let bank = match read_questions_embedded() {
            Ok(bank) => Some(bank),
            Err(e) => {
                log::warn!("quiz disabled: {e}");
                None
            }
        };
        Self::with_parts(config, bank, StdRng::from_entropy())
    }

    /// Builds the app from explicit parts; tests pass a seeded rng.
    pub fn with_parts(config: LessonConfig, bank: Option<Vec<QuizQuestion>>, rng: StdRng) -> Self {
        let mut rng = rng;
        let quiz = match bank {
            Some(bank) if !bank.is_empty() => {
                Some(QuizDesk::new(bank, config.quiz_size, &mut rng))
            }
            _ => {
                log::info!("no question bank, quiz not active");
                None
            }
        };

        let mut app = Self {
            state: AppState::Welcome,
            board: Board::default(),
            quiz,
            rng,
            config,
        };
        app.go_to(app.config.start_page);
        app
    }
}

impl Default for LessonApp {
    fn default() -> Self {
        Self::new()
    }
}
