use super::*;
use crate::surface::{PortfolioEvent, QuizEvent, Surface};

impl LessonApp {
    /// One UI frame: draw the current page through `surface`, then apply the
    /// events it reported, in order, each followed by a full view refresh.
    pub fn frame(&mut self, surface: &mut dyn Surface) {
        let pages = self.pages();
        if let Some(page) = surface.navigation(self.state, &pages) {
            self.go_to(page);
        }

        match self.state {
            AppState::Welcome => {
                if let Some(page) = surface.welcome(&pages) {
                    self.go_to(page);
                }
            }
            AppState::Builder => {
                let events = surface.portfolio(&self.board.view, self.board.dragging);
                for event in events {
                    self.handle_portfolio_event(event);
                }
            }
            AppState::Quiz => {
                let Some(desk) = &self.quiz else {
                    self.go_to(AppState::Welcome);
                    return;
                };
                let events = surface.quiz(&desk.view);
                for event in events {
                    self.handle_quiz_event(event);
                }
            }
        }
    }

    pub fn handle_portfolio_event(&mut self, event: PortfolioEvent) {
        match event {
            PortfolioEvent::DragStarted(asset) => self.begin_drag(asset),
            PortfolioEvent::DragEnded => self.end_drag(),
            PortfolioEvent::Dropped(payload) => {
                self.drop_asset(&payload);
            }
            PortfolioEvent::Remove(asset) => self.remove_asset(asset),
            PortfolioEvent::Reset => self.reset_portfolio(),
        }
    }

    pub fn handle_quiz_event(&mut self, event: QuizEvent) {
        match event {
            QuizEvent::Select { question, option } => self.select_answer(question, option),
            QuizEvent::Submit => self.submit_quiz(),
            QuizEvent::Retake => self.retake_quiz(),
            QuizEvent::Regenerate => self.generate_new_quiz(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_models::{PortfolioView, RiskTier, RiskView};
    use std::collections::VecDeque;

    /// Replays queued input and remembers the last views it was shown.
    #[derive(Default)]
    struct ScriptedSurface {
        nav: VecDeque<Option<AppState>>,
        portfolio_input: VecDeque<Vec<PortfolioEvent>>,
        quiz_input: VecDeque<Vec<QuizEvent>>,
        seen_portfolio: Option<PortfolioView>,
        seen_quiz: Option<QuizView>,
        seen_pages: Vec<AppState>,
    }

    impl Surface for ScriptedSurface {
        fn navigation(&mut self, _current: AppState, pages: &[AppState]) -> Option<AppState> {
            self.seen_pages = pages.to_vec();
            self.nav.pop_front().flatten()
        }

        fn welcome(&mut self, _pages: &[AppState]) -> Option<AppState> {
            None
        }

        fn portfolio(
            &mut self,
            view: &PortfolioView,
            _dragging: Option<AssetType>,
        ) -> Vec<PortfolioEvent> {
            self.seen_portfolio = Some(view.clone());
            self.portfolio_input.pop_front().unwrap_or_default()
        }

        fn quiz(&mut self, view: &QuizView) -> Vec<QuizEvent> {
            self.seen_quiz = Some(view.clone());
            self.quiz_input.pop_front().unwrap_or_default()
        }
    }

    fn app() -> LessonApp {
        let bank = read_questions_embedded().expect("bank");
        LessonApp::with_parts(LessonConfig::default(), Some(bank), StdRng::seed_from_u64(3))
    }

    #[test]
    fn drag_and_drop_events_reach_the_board() {
        let mut app = app();
        let mut surface = ScriptedSurface::default();
        surface.nav.push_back(Some(AppState::Builder));
        surface.portfolio_input.push_back(vec![
            PortfolioEvent::DragStarted(AssetType::Stocks),
            PortfolioEvent::Dropped("stocks".into()),
            PortfolioEvent::DragEnded,
            PortfolioEvent::Dropped("gold".into()),
            PortfolioEvent::Dropped("index".into()),
        ]);

        app.frame(&mut surface);
        assert!(app.is_current(AppState::Builder));
        assert_eq!(app.board.portfolio.total(), 2);

        // next frame shows the refreshed view
        app.frame(&mut surface);
        let view = surface.seen_portfolio.expect("portfolio drawn");
        assert_eq!(view.blocks.len(), 2);
        assert!(matches!(
            view.risk,
            RiskView::Rated {
                tier: RiskTier::Medium,
                ..
            }
        ));
    }

    #[test]
    fn remove_and_reset_events() {
        let mut app = app();
        app.go_to(AppState::Builder);
        let mut surface = ScriptedSurface::default();
        surface.portfolio_input.push_back(vec![
            PortfolioEvent::Dropped("cash".into()),
            PortfolioEvent::Dropped("cash".into()),
            PortfolioEvent::Remove(AssetType::Cash),
            PortfolioEvent::Remove(AssetType::Bonds),
        ]);
        surface.portfolio_input.push_back(vec![PortfolioEvent::Reset]);

        app.frame(&mut surface);
        assert_eq!(app.board.portfolio.count(AssetType::Cash), 1);
        app.frame(&mut surface);
        assert!(app.board.portfolio.is_empty());
    }

    #[test]
    fn quiz_round_trip_through_events() {
        let mut app = app();
        app.go_to(AppState::Quiz);
        let keys: Vec<usize> = app
            .quiz
            .as_ref()
            .expect("quiz")
            .session
            .questions()
            .iter()
            .map(|q| q.correct)
            .collect();

        let mut surface = ScriptedSurface::default();
        let mut picks: Vec<QuizEvent> = keys
            .iter()
            .enumerate()
            .map(|(question, &option)| QuizEvent::Select { question, option })
            .collect();
        picks.push(QuizEvent::Submit);
        surface.quiz_input.push_back(picks);
        surface.quiz_input.push_back(vec![QuizEvent::Retake]);

        app.frame(&mut surface);
        app.frame(&mut surface);
        let Some(QuizView::Graded(result)) = surface.seen_quiz.clone() else {
            panic!("expected graded view on the second frame");
        };
        assert_eq!(result.score, 10);
        assert_eq!(result.tier, crate::quiz::FeedbackTier::Excellent);

        // the retake queued above was applied on that same frame
        app.frame(&mut surface);
        let Some(QuizView::Answering { questions }) = surface.seen_quiz else {
            panic!("expected the form again after retake");
        };
        assert!(questions.iter().all(|q| q.selected.is_none()));
    }

    #[test]
    fn navigation_only_offers_active_pages() {
        let mut app = LessonApp::with_parts(
            LessonConfig::default(),
            None,
            StdRng::seed_from_u64(3),
        );
        let mut surface = ScriptedSurface::default();
        surface.nav.push_back(Some(AppState::Quiz));
        app.frame(&mut surface);
        assert_eq!(surface.seen_pages, vec![AppState::Welcome, AppState::Builder]);
        assert!(app.is_current(AppState::Welcome));
        assert!(surface.seen_quiz.is_none());
    }
}
