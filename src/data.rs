// src/data.rs

use crate::error::BankError;
use crate::model::QuizQuestion;

/// Loads the question bank embedded in the binary.
pub fn read_questions_embedded() -> Result<Vec<QuizQuestion>, BankError> {
    parse_questions(include_str!("data/quiz_questions.yaml"))
}

/// Parses a YAML question list, numbers each question by its position and
/// checks that every answer key points at an existing option.
pub fn parse_questions(yaml: &str) -> Result<Vec<QuizQuestion>, BankError> {
    let mut questions: Vec<QuizQuestion> = serde_yaml::from_str(yaml)?;
    if questions.is_empty() {
        return Err(BankError::Empty);
    }

    for (index, q) in questions.iter_mut().enumerate() {
        if q.options.len() < 2 {
            return Err(BankError::TooFewOptions {
                index,
                found: q.options.len(),
            });
        }
        if q.correct >= q.options.len() {
            return Err(BankError::CorrectOutOfRange {
                index,
                correct: q.correct,
                options: q.options.len(),
            });
        }
        q.id = index;
    }

    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_bank_loads_twenty_questions() {
        let bank = read_questions_embedded().expect("embedded bank parses");
        assert_eq!(bank.len(), 20);
        for (i, q) in bank.iter().enumerate() {
            assert_eq!(q.id, i);
            assert_eq!(q.options.len(), 2);
            assert!(q.correct < q.options.len());
        }
        assert_eq!(bank[0].correct_option(), "No");
    }

    #[test]
    fn correct_index_out_of_range_is_rejected() {
        let yaml = r#"
- question: "Q"
  options: ["a", "b"]
  correct: 2
  explanation: "E"
"#;
        let err = parse_questions(yaml).unwrap_err();
        assert!(matches!(
            err,
            BankError::CorrectOutOfRange {
                index: 0,
                correct: 2,
                options: 2
            }
        ));
    }

    #[test]
    fn single_option_question_is_rejected() {
        let yaml = r#"
- question: "Q"
  options: ["only"]
  correct: 0
  explanation: "E"
"#;
        assert!(matches!(
            parse_questions(yaml),
            Err(BankError::TooFewOptions { index: 0, found: 1 })
        ));
    }

    #[test]
    fn empty_and_malformed_banks_fail() {
        assert!(matches!(parse_questions("[]"), Err(BankError::Empty)));
        assert!(matches!(
            parse_questions("- question: 3\n  nope: true"),
            Err(BankError::Parse(_))
        ));
    }
}
