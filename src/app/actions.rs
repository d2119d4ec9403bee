use super::*;
use rand::Rng;

impl Board {
    pub fn add(&mut self, asset: AssetType) {
        log::debug!("adding {} to portfolio", asset.id());
        self.portfolio.add(asset);
        self.refresh();
    }

    pub fn remove(&mut self, asset: AssetType) {
        if self.portfolio.remove(asset) {
            log::debug!("removed {} from portfolio", asset.id());
        } else {
            log::trace!("nothing to remove for {}", asset.id());
        }
        self.refresh();
    }

    pub fn reset(&mut self) {
        log::debug!("resetting portfolio");
        self.portfolio.reset();
        self.refresh();
    }

    /// Adds the asset named by `payload`; anything else is dropped silently.
    /// Returns whether the drop landed.
    pub fn drop_payload(&mut self, payload: &str) -> bool {
        self.dragging = None;
        match payload.parse::<AssetType>() {
            Ok(asset) => {
                self.add(asset);
                true
            }
            Err(e) => {
                log::trace!("ignoring drop: {e}");
                false
            }
        }
    }
}

impl QuizDesk {
    pub fn new<R: Rng + ?Sized>(bank: Vec<QuizQuestion>, size: usize, rng: &mut R) -> Self {
        let session = QuizSession::generate(&bank, size, rng);
        let mut desk = Self {
            bank,
            size,
            session,
            phase: QuizPhase::Answering,
            view: QuizView::Answering {
                questions: Vec::new(),
            },
        };
        desk.refresh();
        desk
    }

    /// Throws the current run away and draws a fresh one.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.session = QuizSession::generate(&self.bank, self.size, rng);
        self.phase = QuizPhase::Answering;
        log::debug!(
            "new quiz: {:?}",
            self.session.questions().iter().map(|q| q.id).collect::<Vec<_>>()
        );
        self.refresh();
    }

    /// Ignored once graded; inputs stay locked until a retake.
    pub fn select(&mut self, question: usize, option: usize) -> bool {
        if self.is_graded() {
            log::trace!("quiz is graded, ignoring selection");
            return false;
        }
        let recorded = self.session.select(question, option);
        if recorded {
            self.refresh();
        }
        recorded
    }

    pub fn submit(&mut self) {
        let grade = self.session.grade();
        log::debug!(
            "quiz graded: {}/{} ({:?})",
            grade.correct,
            grade.total,
            grade.tier()
        );
        self.phase = QuizPhase::Graded(grade);
        self.refresh();
    }

    pub fn retake(&mut self) {
        self.session.clear_answers();
        self.phase = QuizPhase::Answering;
        self.refresh();
    }

    pub fn is_graded(&self) -> bool {
        matches!(self.phase, QuizPhase::Graded(_))
    }

    pub fn grade(&self) -> Option<&Grade> {
        match &self.phase {
            QuizPhase::Graded(grade) => Some(grade),
            QuizPhase::Answering => None,
        }
    }
}

// One public operation per input event.
impl LessonApp {
    pub fn add_asset(&mut self, asset: AssetType) {
        self.board.add(asset);
    }

    pub fn remove_asset(&mut self, asset: AssetType) {
        self.board.remove(asset);
    }

    pub fn reset_portfolio(&mut self) {
        self.board.reset();
    }

    pub fn drop_asset(&mut self, payload: &str) -> bool {
        self.board.drop_payload(payload)
    }

    pub fn begin_drag(&mut self, asset: AssetType) {
        log::trace!("drag started: {}", asset.id());
        self.board.dragging = Some(asset);
    }

    pub fn end_drag(&mut self) {
        self.board.dragging = None;
    }

    pub fn generate_new_quiz(&mut self) {
        if let Some(desk) = self.quiz.as_mut() {
            desk.regenerate(&mut self.rng);
        }
    }

    pub fn select_answer(&mut self, question: usize, option: usize) {
        if let Some(desk) = self.quiz.as_mut() {
            desk.select(question, option);
        }
    }

    pub fn submit_quiz(&mut self) {
        if let Some(desk) = self.quiz.as_mut() {
            desk.submit();
        }
    }

    pub fn retake_quiz(&mut self) {
        if let Some(desk) = self.quiz.as_mut() {
            desk.retake();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_models::{InsightView, SummaryView};

    fn app() -> LessonApp {
        let bank = read_questions_embedded().expect("bank");
        LessonApp::with_parts(LessonConfig::default(), Some(bank), StdRng::seed_from_u64(99))
    }

    fn desk(app: &LessonApp) -> &QuizDesk {
        app.quiz.as_ref().expect("quiz active")
    }

    #[test]
    fn every_mutation_republishes_the_view() {
        let mut app = app();
        app.add_asset(AssetType::Index);
        assert_eq!(app.board.view.blocks.len(), 1);
        assert_eq!(app.board.view.chart.len(), 1);

        app.remove_asset(AssetType::Index);
        assert!(app.board.view.blocks.is_empty());
        assert_eq!(app.board.view.summary, SummaryView::Empty);
        assert_eq!(app.board.view.insights, InsightView::Prompt);
    }

    #[test]
    fn unknown_drop_changes_nothing() {
        let mut app = app();
        app.add_asset(AssetType::Bonds);
        let before = app.board.portfolio.clone();
        let view_before = app.board.view.clone();

        assert!(!app.drop_asset("nonexistent-type"));
        assert!(!app.drop_asset(""));
        assert_eq!(app.board.portfolio, before);
        assert_eq!(app.board.view, view_before);
    }

    #[test]
    fn known_drop_adds_one_block() {
        let mut app = app();
        app.begin_drag(AssetType::Crypto);
        assert!(app.drop_asset("crypto"));
        assert_eq!(app.board.portfolio.count(AssetType::Crypto), 1);
        assert_eq!(app.board.dragging, None);
    }

    #[test]
    fn reset_clears_chart_from_any_state() {
        let mut app = app();
        for asset in AssetType::ALL {
            app.add_asset(asset);
            app.add_asset(asset);
        }
        app.reset_portfolio();
        assert_eq!(app.board.portfolio.total(), 0);
        assert!(app.board.view.chart.is_empty());
    }

    #[test]
    fn retake_keeps_questions_and_clears_answers() {
        let mut app = app();
        for i in 0..10 {
            app.select_answer(i, 0);
        }
        let questions = desk(&app).session.questions().to_vec();
        app.submit_quiz();
        assert!(desk(&app).is_graded());

        app.retake_quiz();
        let desk = desk(&app);
        assert!(!desk.is_graded());
        assert_eq!(desk.session.questions(), questions.as_slice());
        assert_eq!(desk.session.answered(), 0);
        assert!(matches!(desk.view, QuizView::Answering { .. }));
    }

    #[test]
    fn selections_are_locked_after_submit() {
        let mut app = app();
        app.select_answer(0, 1);
        app.submit_quiz();
        app.select_answer(0, 0);
        assert_eq!(desk(&app).session.answer(0), Some(1));
    }

    #[test]
    fn regenerate_replaces_the_set_and_answers() {
        let mut app = app();
        app.select_answer(0, 1);
        app.submit_quiz();
        let old = desk(&app).session.questions().to_vec();

        app.generate_new_quiz();
        let desk = desk(&app);
        assert_eq!(desk.session.len(), 10);
        assert_eq!(desk.session.answered(), 0);
        assert!(!desk.is_graded());
        // 20-question bank, seeded: the new draw differs from the old one
        assert_ne!(desk.session.questions(), old.as_slice());
    }

    #[test]
    fn perfect_run_is_excellent() {
        let mut app = app();
        let keys: Vec<usize> = desk(&app)
            .session
            .questions()
            .iter()
            .map(|q| q.correct)
            .collect();
        for (i, k) in keys.into_iter().enumerate() {
            app.select_answer(i, k);
        }
        app.submit_quiz();
        let grade = desk(&app).grade().expect("graded");
        assert_eq!(grade.correct, 10);
        assert_eq!(grade.tier(), crate::quiz::FeedbackTier::Excellent);
    }

    #[test]
    fn quiz_operations_are_noops_without_a_bank() {
        let mut app = LessonApp::with_parts(
            LessonConfig::default(),
            None,
            StdRng::seed_from_u64(1),
        );
        app.generate_new_quiz();
        app.select_answer(0, 0);
        app.submit_quiz();
        app.retake_quiz();
        assert!(app.quiz.is_none());
    }
}
