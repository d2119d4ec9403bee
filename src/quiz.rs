use crate::model::QuizQuestion;
use rand::Rng;

/// Draws `amount` distinct questions from `bank` in random order with a
/// partial Fisher-Yates shuffle over the bank positions. Asking for more
/// than the bank holds returns the whole bank, shuffled.
pub fn sample_questions<R: Rng + ?Sized>(
    bank: &[QuizQuestion],
    amount: usize,
    rng: &mut R,
) -> Vec<QuizQuestion> {
    let amount = amount.min(bank.len());
    let mut order: Vec<usize> = (0..bank.len()).collect();
    for i in 0..amount {
        let j = rng.gen_range(i..order.len());
        order.swap(i, j);
    }
    order
        .into_iter()
        .take(amount)
        .map(|idx| bank[idx].clone())
        .collect()
}

/// The questions of one quiz run and what the learner picked so far.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    answers: Vec<Option<usize>>,
}

impl QuizSession {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        let answers = vec![None; questions.len()];
        Self { questions, answers }
    }

    pub fn generate<R: Rng + ?Sized>(bank: &[QuizQuestion], size: usize, rng: &mut R) -> Self {
        Self::new(sample_questions(bank, size, rng))
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn answer(&self, question: usize) -> Option<usize> {
        self.answers.get(question).copied().flatten()
    }

    /// Records (or overwrites) a choice. Out-of-range indices are ignored
    /// and reported with `false`.
    pub fn select(&mut self, question: usize, option: usize) -> bool {
        let Some(q) = self.questions.get(question) else {
            return false;
        };
        if option >= q.options.len() {
            return false;
        }
        self.answers[question] = Some(option);
        true
    }

    pub fn clear_answers(&mut self) {
        self.answers.iter_mut().for_each(|a| *a = None);
    }

    pub fn answered(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    /// Compares every selection with the answer key. The session itself is
    /// left untouched.
    pub fn grade(&self) -> Grade {
        let items: Vec<GradedAnswer> = self
            .questions
            .iter()
            .zip(&self.answers)
            .map(|(q, chosen)| GradedAnswer {
                question: q.clone(),
                chosen: *chosen,
                correct: *chosen == Some(q.correct),
            })
            .collect();
        let correct = items.iter().filter(|i| i.correct).count();
        Grade {
            correct,
            total: items.len(),
            items,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GradedAnswer {
    pub question: QuizQuestion,
    pub chosen: Option<usize>,
    pub correct: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Grade {
    pub correct: usize,
    pub total: usize,
    pub items: Vec<GradedAnswer>,
}

impl Grade {
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64 * 100.0
    }

    pub fn tier(&self) -> FeedbackTier {
        FeedbackTier::for_percentage(self.percentage())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackTier {
    Excellent,
    Good,
    KeepLearning,
}

impl FeedbackTier {
    pub fn for_percentage(pct: f64) -> Self {
        if pct >= 80.0 {
            FeedbackTier::Excellent
        } else if pct >= 60.0 {
            FeedbackTier::Good
        } else {
            FeedbackTier::KeepLearning
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            FeedbackTier::Excellent => "Excellent! You really understand investing basics!",
            FeedbackTier::Good => "Good job! Review the explanations to strengthen your knowledge.",
            FeedbackTier::KeepLearning => "Keep learning! Review the stories and explanations above.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::read_questions_embedded;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn bank() -> Vec<QuizQuestion> {
        read_questions_embedded().expect("bank")
    }

    fn wrong_option(q: &QuizQuestion) -> usize {
        (q.correct + 1) % q.options.len()
    }

    #[test]
    fn sample_draws_ten_distinct_questions() {
        let bank = bank();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let picked = sample_questions(&bank, 10, &mut rng);
            assert_eq!(picked.len(), 10);
            let ids: HashSet<usize> = picked.iter().map(|q| q.id).collect();
            assert_eq!(ids.len(), 10);
        }
    }

    #[test]
    fn small_bank_is_taken_whole() {
        let bank: Vec<QuizQuestion> = bank().into_iter().take(3).collect();
        let mut rng = StdRng::seed_from_u64(42);
        let session = QuizSession::generate(&bank, 10, &mut rng);
        assert_eq!(session.len(), 3);
        let mut ids: Vec<usize> = session.questions().iter().map(|q| q.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn same_seed_gives_same_order() {
        let bank = bank();
        let a = sample_questions(&bank, 10, &mut StdRng::seed_from_u64(7));
        let b = sample_questions(&bank, 10, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn select_overwrites_and_ignores_bad_indices() {
        let mut session = QuizSession::new(bank().into_iter().take(2).collect());
        assert!(session.select(0, 0));
        assert!(session.select(0, 1));
        assert_eq!(session.answer(0), Some(1));
        assert!(!session.select(0, 2));
        assert!(!session.select(5, 0));
        assert_eq!(session.answer(0), Some(1));
        assert_eq!(session.answer(1), None);
        assert_eq!(session.answered(), 1);
    }

    #[test]
    fn all_wrong_scores_zero() {
        let mut session = QuizSession::generate(&bank(), 10, &mut StdRng::seed_from_u64(1));
        let picks: Vec<usize> = session.questions().iter().map(wrong_option).collect();
        for (i, o) in picks.into_iter().enumerate() {
            session.select(i, o);
        }
        let grade = session.grade();
        assert_eq!(grade.correct, 0);
        assert_eq!(grade.tier(), FeedbackTier::KeepLearning);
    }

    #[test]
    fn all_right_scores_full_marks() {
        let mut session = QuizSession::generate(&bank(), 10, &mut StdRng::seed_from_u64(2));
        let picks: Vec<usize> = session.questions().iter().map(|q| q.correct).collect();
        for (i, o) in picks.into_iter().enumerate() {
            session.select(i, o);
        }
        let grade = session.grade();
        assert_eq!(grade.correct, grade.total);
        assert_eq!(grade.percentage(), 100.0);
        assert_eq!(grade.tier(), FeedbackTier::Excellent);
    }

    #[test]
    fn unanswered_questions_count_as_wrong() {
        let session = QuizSession::generate(&bank(), 10, &mut StdRng::seed_from_u64(3));
        let grade = session.grade();
        assert_eq!(grade.correct, 0);
        assert!(grade.items.iter().all(|i| i.chosen.is_none() && !i.correct));
    }

    #[test]
    fn grading_does_not_touch_answers() {
        let mut session = QuizSession::generate(&bank(), 10, &mut StdRng::seed_from_u64(4));
        session.select(3, 0);
        let before = session.clone();
        let _ = session.grade();
        assert_eq!(session, before);
    }

    #[test]
    fn tier_thresholds() {
        assert_eq!(FeedbackTier::for_percentage(80.0), FeedbackTier::Excellent);
        assert_eq!(FeedbackTier::for_percentage(79.9), FeedbackTier::Good);
        assert_eq!(FeedbackTier::for_percentage(60.0), FeedbackTier::Good);
        assert_eq!(FeedbackTier::for_percentage(59.9), FeedbackTier::KeepLearning);
        assert_eq!(FeedbackTier::for_percentage(0.0), FeedbackTier::KeepLearning);
    }

    #[test]
    fn empty_session_grades_to_zero_percent() {
        let grade = QuizSession::new(Vec::new()).grade();
        assert_eq!(grade.total, 0);
        assert_eq!(grade.percentage(), 0.0);
    }
}
