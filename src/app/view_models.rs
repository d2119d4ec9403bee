use super::*;
use crate::model::AssetType;
use crate::view_models::{
    Block, ChartSlice, Insight, InsightView, QuestionForm, ResultView, ReviewItem, RiskTier,
    RiskView, SummaryRow, SummaryView,
};

/// Full recompute of everything the board shows. Pure: same counts, same view.
pub fn portfolio_view(portfolio: &Portfolio) -> PortfolioView {
    PortfolioView {
        blocks: blocks(portfolio),
        chart: chart_series(portfolio),
        summary: summary(portfolio),
        risk: risk(portfolio),
        insights: insights(portfolio),
    }
}

pub fn blocks(portfolio: &Portfolio) -> Vec<Block> {
    portfolio
        .holdings()
        .flat_map(|(asset, n)| std::iter::repeat_n(Block { asset }, n as usize))
        .collect()
}

pub fn chart_series(portfolio: &Portfolio) -> Vec<ChartSlice> {
    portfolio
        .holdings()
        .map(|(asset, n)| ChartSlice {
            label: asset.label(),
            value: n,
            color: asset.color(),
        })
        .collect()
}

pub fn summary(portfolio: &Portfolio) -> SummaryView {
    if portfolio.is_empty() {
        return SummaryView::Empty;
    }
    SummaryView::Filled {
        total: portfolio.total(),
        rows: portfolio
            .holdings()
            .map(|(asset, count)| SummaryRow {
                label: asset.label(),
                count,
                percent: portfolio.percent(asset),
            })
            .collect(),
    }
}

pub fn risk(portfolio: &Portfolio) -> RiskView {
    match portfolio.weighted_risk() {
        None => RiskView::Empty,
        Some(average) => RiskView::Rated {
            average,
            fill_percent: average / 5.0 * 100.0,
            tier: RiskTier::for_average(average),
        },
    }
}

/// Every rule is checked on its own; all that hold are reported in order.
pub fn insights(portfolio: &Portfolio) -> InsightView {
    if portfolio.is_empty() {
        return InsightView::Prompt;
    }

    let cash = portfolio.percent(AssetType::Cash);
    let bonds = portfolio.percent(AssetType::Bonds);
    let index = portfolio.percent(AssetType::Index);
    let stocks = portfolio.percent(AssetType::Stocks);
    let crypto = portfolio.percent(AssetType::Crypto);
    let largest = [cash, bonds, index, stocks, crypto]
        .into_iter()
        .fold(0.0, f64::max);

    let rules = [
        (cash > 50.0, Insight::TooMuchCash),
        (crypto > 30.0, Insight::HighCrypto),
        (stocks + crypto > 70.0, Insight::VeryAggressive),
        (bonds > 60.0, Insight::VeryConservative),
        (
            index > 50.0 && crypto < 10.0 && stocks < 20.0,
            Insight::WellBalanced,
        ),
        (
            portfolio.total() >= 5 && largest < 40.0,
            Insight::WellDiversified,
        ),
    ];

    let notes: Vec<Insight> = rules
        .into_iter()
        .filter_map(|(fired, insight)| fired.then_some(insight))
        .collect();

    if notes.is_empty() {
        InsightView::Encourage
    } else {
        InsightView::Notes(notes)
    }
}

pub fn quiz_view(session: &QuizSession, phase: &QuizPhase) -> QuizView {
    match phase {
        QuizPhase::Answering => QuizView::Answering {
            questions: session
                .questions()
                .iter()
                .enumerate()
                .map(|(index, q)| QuestionForm {
                    index,
                    prompt: q.question.clone(),
                    options: q.options.clone(),
                    selected: session.answer(index),
                })
                .collect(),
        },
        QuizPhase::Graded(grade) => QuizView::Graded(result_view(grade)),
    }
}

pub fn result_view(grade: &Grade) -> ResultView {
    let review = grade
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let q = &item.question;
            ReviewItem {
                number: i + 1,
                question: q.question.clone(),
                correct: item.correct,
                your_answer: item
                    .chosen
                    .and_then(|c| q.option(c))
                    .map(str::to_owned),
                correct_answer: (!item.correct).then(|| q.correct_option().to_owned()),
                explanation: q.explanation.clone(),
            }
        })
        .collect();

    ResultView {
        score: grade.correct,
        total: grade.total,
        tier: grade.tier(),
        review,
    }
}

impl Board {
    /// Republishes every derived view after a mutation.
    pub fn refresh(&mut self) {
        self.view = portfolio_view(&self.portfolio);
    }
}

impl QuizDesk {
    pub fn refresh(&mut self) {
        self.view = quiz_view(&self.session, &self.phase);
    }
}
