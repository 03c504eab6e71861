//! Question and category records
//!
//! [`Question`] is what a store hands back, [`QuestionView`] is the public
//! shape clients see. New questions enter through [`QuestionDraft`], which
//! only becomes a [`NewQuestion`] after validation.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use super::ValidationError;

/// Question record as persisted by a store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}

impl Question {
    /// Public representation of this record.
    pub fn format(&self) -> QuestionView {
        QuestionView::from(self)
    }
}

/// Category record. Read-only from the service's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    pub label: String,
}

/// Formatted question as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionView {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}

impl From<&Question> for QuestionView {
    fn from(q: &Question) -> Self {
        Self {
            id: q.id,
            question: q.question.clone(),
            answer: q.answer.clone(),
            category: q.category,
            difficulty: q.difficulty,
        }
    }
}

/// Unvalidated creation request.
///
/// Every field is optional at this stage so that a missing field is a
/// validation error rather than a body decoding failure. Numeric fields accept
/// either JSON numbers or numeric strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionDraft {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub category: Option<i64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub difficulty: Option<i32>,
}

/// Validated question, ready for insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}

impl QuestionDraft {
    /// Validate the draft.
    ///
    /// # Rules
    /// - all four fields must be present
    /// - question and answer must not be blank
    pub fn validate(self) -> Result<NewQuestion, ValidationError> {
        let question = required_text(self.question, "question")?;
        let answer = required_text(self.answer, "answer")?;
        let category = self
            .category
            .ok_or(ValidationError::Missing { field: "category" })?;
        let difficulty = self
            .difficulty
            .ok_or(ValidationError::Missing { field: "difficulty" })?;

        Ok(NewQuestion {
            question,
            answer,
            category,
            difficulty,
        })
    }
}

fn required_text(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    let value = value.ok_or(ValidationError::Missing { field })?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(trimmed.to_owned())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString<T> {
    Number(T),
    Text(String),
}

/// Accept `3`, `"3"` or `null` for an optional integer field.
pub fn lenient_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Deserialize<'de>,
{
    match Option::<NumberOrString<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(n)) => Ok(Some(n)),
        Some(NumberOrString::Text(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("expected an integer, got '{s}'"))),
    }
}
