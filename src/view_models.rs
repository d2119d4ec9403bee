// src/view_models.rs

use crate::model::AssetType;
use crate::quiz::FeedbackTier;

/// Visual weight of a message, mapped to a tint by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Danger,
}

/// One decimal place, halves rounded up: 2.25 reads "2.3", 6.25 reads "6.3".
/// An exact half at one decimal is always an odd number of quarters.
pub fn one_decimal(value: f64) -> String {
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        return format!("{:.1}", (value * 10.0).ceil() / 10.0);
    }
    format!("{value:.1}")
}

// ---------- Portfolio ----------

#[derive(Clone, Debug, PartialEq)]
pub struct PortfolioView {
    pub blocks: Vec<Block>,
    pub chart: Vec<ChartSlice>,
    pub summary: SummaryView,
    pub risk: RiskView,
    pub insights: InsightView,
}

/// One unit of one asset on the board; removing it removes one `asset`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Block {
    pub asset: AssetType,
}

impl Block {
    pub fn risk_label(&self) -> String {
        format!("Risk: {}/5", self.asset.risk())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartSlice {
    pub label: &'static str,
    pub value: u32,
    pub color: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SummaryView {
    Empty,
    Filled { total: u32, rows: Vec<SummaryRow> },
}

#[derive(Clone, Debug, PartialEq)]
pub struct SummaryRow {
    pub label: &'static str,
    pub count: u32,
    pub percent: f64,
}

impl SummaryView {
    pub const EMPTY_MESSAGE: &'static str = "No assets in portfolio yet";

    pub fn lines(&self) -> Vec<String> {
        match self {
            SummaryView::Empty => vec![Self::EMPTY_MESSAGE.to_owned()],
            SummaryView::Filled { total, rows } => {
                let mut out = vec![format!("Total Assets: {total} blocks")];
                out.extend(rows.iter().map(SummaryRow::line));
                out
            }
        }
    }
}

impl SummaryRow {
    pub fn percent_text(&self) -> String {
        format!("{}%", one_decimal(self.percent))
    }

    pub fn line(&self) -> String {
        format!("{}: {} blocks ({})", self.label, self.count, self.percent_text())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Both bounds are inclusive on the lower tier: 2.0 is Low, 3.5 is Medium.
    pub fn for_average(avg: f64) -> Self {
        if avg <= 2.0 {
            RiskTier::Low
        } else if avg <= 3.5 {
            RiskTier::Medium
        } else {
            RiskTier::High
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            RiskTier::Low => {
                "Your portfolio is conservative with lower risk assets. Good for stability but may have slower growth."
            }
            RiskTier::Medium => {
                "Your portfolio has a balanced mix of risk. This could provide moderate growth with manageable volatility."
            }
            RiskTier::High => {
                "Your portfolio is aggressive with higher risk assets. Potential for high returns but also significant losses."
            }
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            RiskTier::Low => Severity::Success,
            RiskTier::Medium => Severity::Warning,
            RiskTier::High => Severity::Danger,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RiskView {
    Empty,
    Rated {
        average: f64,
        /// Meter fill, 0..=100.
        fill_percent: f64,
        tier: RiskTier,
    },
}

impl RiskView {
    pub fn fill_percent(&self) -> f64 {
        match self {
            RiskView::Empty => 0.0,
            RiskView::Rated { fill_percent, .. } => *fill_percent,
        }
    }

    pub fn heading(&self) -> String {
        match self {
            RiskView::Empty => "No assets yet".to_owned(),
            RiskView::Rated { average, tier, .. } => {
                format!("Risk Level: {} ({}/5)", tier.label(), one_decimal(*average))
            }
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            RiskView::Empty => {
                "Start by dragging some assets into your portfolio to see your risk level."
            }
            RiskView::Rated { tier, .. } => tier.message(),
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            RiskView::Empty => Severity::Info,
            RiskView::Rated { tier, .. } => tier.severity(),
        }
    }
}

/// Educational notes triggered by the portfolio mix, in evaluation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Insight {
    TooMuchCash,
    HighCrypto,
    VeryAggressive,
    VeryConservative,
    WellBalanced,
    WellDiversified,
}

impl Insight {
    pub fn title(self) -> &'static str {
        match self {
            Insight::TooMuchCash => "Too Much Cash?",
            Insight::HighCrypto => "High Crypto Exposure",
            Insight::VeryAggressive => "Very Aggressive Portfolio",
            Insight::VeryConservative => "Very Conservative",
            Insight::WellBalanced => "Well-Balanced Approach",
            Insight::WellDiversified => "Great Diversification!",
        }
    }

    pub fn body(self) -> &'static str {
        match self {
            Insight::TooMuchCash => {
                "You have over 50% in cash. While safe, this might not grow much. Consider adding some bonds or index funds for better returns."
            }
            Insight::HighCrypto => {
                "Over 30% in crypto is very risky. Consider reducing this and adding more stable assets like bonds or index funds."
            }
            Insight::VeryAggressive => {
                "Your portfolio is heavily weighted toward high-risk assets. This could lead to big gains or big losses. Consider adding some bonds for stability."
            }
            Insight::VeryConservative => {
                "Your portfolio is mostly bonds. Very safe, but growth might be slow. Consider adding some index funds for better long-term returns."
            }
            Insight::WellBalanced => {
                "Your portfolio is well-diversified with index funds as the core. This is a solid strategy for long-term growth with manageable risk."
            }
            Insight::WellDiversified => {
                "Your portfolio is well-diversified across multiple asset types. This helps manage risk while maintaining growth potential."
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum InsightView {
    /// Nothing on the board yet.
    Prompt,
    /// Assets present but no rule fired.
    Encourage,
    Notes(Vec<Insight>),
}

impl InsightView {
    pub const PROMPT: &'static str =
        "Build your portfolio to see personalized insights and suggestions.";
    pub const ENCOURAGE: &'static str = "Keep building your portfolio! Try different combinations to see how the risk and potential returns change.";
}

// ---------- Quiz ----------

#[derive(Clone, Debug, PartialEq)]
pub enum QuizView {
    Answering { questions: Vec<QuestionForm> },
    Graded(ResultView),
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuestionForm {
    pub index: usize,
    pub prompt: String,
    pub options: Vec<String>,
    pub selected: Option<usize>,
}

impl QuestionForm {
    pub fn heading(&self) -> String {
        format!("{}. {}", self.index + 1, self.prompt)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultView {
    pub score: usize,
    pub total: usize,
    pub tier: FeedbackTier,
    pub review: Vec<ReviewItem>,
}

impl ResultView {
    pub fn score_line(&self) -> String {
        format!("You scored {} / {}", self.score, self.total)
    }

    pub fn severity(&self) -> Severity {
        self.tier.severity()
    }
}

impl FeedbackTier {
    pub fn severity(self) -> Severity {
        match self {
            FeedbackTier::Excellent => Severity::Success,
            FeedbackTier::Good => Severity::Info,
            FeedbackTier::KeepLearning => Severity::Warning,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReviewItem {
    pub number: usize,
    pub question: String,
    pub correct: bool,
    /// Literal text of the chosen option; `None` when unanswered.
    pub your_answer: Option<String>,
    /// Only filled in when the learner got it wrong.
    pub correct_answer: Option<String>,
    pub explanation: String,
}

impl ReviewItem {
    pub const NO_ANSWER: &'static str = "No answer selected";

    pub fn badge(&self) -> &'static str {
        if self.correct { "✓" } else { "✗" }
    }

    pub fn status(&self) -> &'static str {
        if self.correct { "Correct!" } else { "Incorrect!" }
    }

    pub fn severity(&self) -> Severity {
        if self.correct {
            Severity::Success
        } else {
            Severity::Danger
        }
    }

    pub fn heading(&self) -> String {
        format!("Question {}: {}", self.number, self.question)
    }
}
