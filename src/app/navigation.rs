use super::*;

impl LessonApp {
    /// Pages whose feature is active, in menu order.
    pub fn pages(&self) -> Vec<AppState> {
        let mut pages = vec![AppState::Welcome, AppState::Builder];
        if self.quiz.is_some() {
            pages.push(AppState::Quiz);
        }
        pages
    }

    /// Switches page; a page whose feature is inactive falls back to Welcome.
    pub fn go_to(&mut self, page: AppState) {
        if self.pages().contains(&page) {
            self.state = page;
        } else {
            log::info!("{page:?} is not active, staying on welcome");
            self.state = AppState::Welcome;
        }
        self.board.dragging = None;
    }

    pub fn is_current(&self, page: AppState) -> bool {
        self.state == page
    }
}
