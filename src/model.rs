use crate::error::UnknownAsset;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// The five building blocks a portfolio can be made of, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum AssetType {
    Cash,
    Bonds,
    Index,
    Stocks,
    Crypto,
}

impl AssetType {
    pub const ALL: [AssetType; 5] = [
        AssetType::Cash,
        AssetType::Bonds,
        AssetType::Index,
        AssetType::Stocks,
        AssetType::Crypto,
    ];

    /// Identifier carried by drag payloads.
    pub fn id(self) -> &'static str {
        match self {
            AssetType::Cash => "cash",
            AssetType::Bonds => "bonds",
            AssetType::Index => "index",
            AssetType::Stocks => "stocks",
            AssetType::Crypto => "crypto",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AssetType::Cash => "Cash",
            AssetType::Bonds => "Bonds",
            AssetType::Index => "Index Funds",
            AssetType::Stocks => "Stocks",
            AssetType::Crypto => "Crypto",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            AssetType::Cash => "💵",
            AssetType::Bonds => "🟩",
            AssetType::Index => "📦",
            AssetType::Stocks => "📈",
            AssetType::Crypto => "🪙",
        }
    }

    /// Risk weight on a 1..=5 scale.
    pub fn risk(self) -> u32 {
        match self {
            AssetType::Cash => 1,
            AssetType::Bonds => 2,
            AssetType::Index => 3,
            AssetType::Stocks => 4,
            AssetType::Crypto => 5,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            AssetType::Cash => "#28a745",
            AssetType::Bonds => "#20c997",
            AssetType::Index => "#ffc107",
            AssetType::Stocks => "#ff9800",
            AssetType::Crypto => "#dc3545",
        }
    }

    /// Position in `ALL`, used as the slot in count arrays.
    pub fn slot(self) -> usize {
        self as usize
    }
}

impl FromStr for AssetType {
    type Err = UnknownAsset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AssetType::ALL
            .into_iter()
            .find(|a| a.id() == s)
            .ok_or_else(|| UnknownAsset(s.to_owned()))
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct QuizQuestion {
    /// Position in the bank; assigned on load, not read from YAML.
    #[serde(skip)]
    pub id: usize,
    pub question: String,
    pub options: Vec<String>,
    pub correct: usize,
    pub explanation: String,
}

impl QuizQuestion {
    pub fn option(&self, idx: usize) -> Option<&str> {
        self.options.get(idx).map(String::as_str)
    }

    pub fn correct_option(&self) -> &str {
        self.option(self.correct).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    Builder,
    Quiz,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Welcome
    }
}

impl AppState {
    pub fn title(self) -> &'static str {
        match self {
            AppState::Welcome => "🏠 Home",
            AppState::Builder => "🧱 Build Portfolio",
            AppState::Quiz => "❓ Quiz",
        }
    }
}
