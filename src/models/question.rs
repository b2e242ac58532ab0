use serde::{Deserialize, Serialize};

pub const CHOICES_PER_QUESTION: usize = 4;

fn default_explanation() -> String {
    "No additional comments.".to_string()
}

/// A multiple-choice question as produced by the language model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub statement: String,
    pub choices: Vec<String>,
    #[serde(alias = "correct_choice")]
    pub correct_choice: String,
    #[serde(default = "default_explanation")]
    pub explanation: String,
}

impl Question {
    /// Checks the shape invariants: exactly four choices and a correct choice
    /// that matches one of them verbatim.
    pub fn check(&self) -> std::result::Result<(), String> {
        if self.statement.trim().is_empty() {
            return Err("statement is empty".to_string());
        }
        if self.choices.len() != CHOICES_PER_QUESTION {
            return Err(format!(
                "expected {} choices, got {}",
                CHOICES_PER_QUESTION,
                self.choices.len()
            ));
        }
        if !self.choices.iter().any(|c| c == &self.correct_choice) {
            return Err(format!(
                "correct choice {:?} is not among the choices",
                self.correct_choice
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Question {
        Question {
            statement: "Which attribute lets an administrative act be enforced without a court order?".into(),
            choices: vec![
                "Self-executability".into(),
                "Typicity".into(),
                "Imperativeness".into(),
                "Presumption of legitimacy".into(),
            ],
            correct_choice: "Self-executability".into(),
            explanation: "Self-executability allows direct enforcement.".into(),
        }
    }

    #[test]
    fn well_formed_question_passes() {
        assert!(sample().check().is_ok());
    }

    #[test]
    fn correct_choice_must_match_exactly() {
        let mut q = sample();
        q.correct_choice = "self-executability".into();
        assert!(q.check().is_err());
    }

    #[test]
    fn exactly_four_choices_required() {
        let mut q = sample();
        q.choices.pop();
        assert!(q.check().unwrap_err().contains("expected 4 choices"));
    }

    #[test]
    fn explanation_defaults_and_snake_case_alias_accepted() {
        let q: Question = serde_json::from_str(
            r#"{"statement":"s","choices":["a","b","c","d"],"correct_choice":"c"}"#,
        )
        .unwrap();
        assert_eq!(q.correct_choice, "c");
        assert_eq!(q.explanation, "No additional comments.");
    }

    #[test]
    fn serializes_camel_case() {
        let value = serde_json::to_value(sample()).unwrap();
        assert!(value.get("correctChoice").is_some());
        assert_eq!(value["choices"].as_array().map(Vec::len), Some(4));
    }
}
