use thiserror::Error;

/// A drag payload that does not name any asset type.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown asset type `{0}`")]
pub struct UnknownAsset(pub String);

#[derive(Debug, Error)]
pub enum BankError {
    #[error("could not parse question bank: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("question bank is empty")]
    Empty,
    #[error("question {index} needs at least two options, found {found}")]
    TooFewOptions { index: usize, found: usize },
    #[error("question {index} marks option {correct} as correct but only has {options}")]
    CorrectOutOfRange {
        index: usize,
        correct: usize,
        options: usize,
    },
}
