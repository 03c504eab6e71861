//! Quiz question selection
//!
//! Picks the next quiz question uniformly at random from the candidates the
//! client has not seen yet:
//!
//! ```text
//! candidates = all questions | questions in category
//! eligible   = candidates \ previously_seen
//! eligible empty  -> Exhausted
//! otherwise       -> uniform pick from eligible
//! ```

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Question, QuestionView};

/// Category filter for quiz selection. Id 0 means every category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategorySelector {
    Any,
    Category(i64),
}

impl CategorySelector {
    pub fn from_id(id: i64) -> Self {
        if id == 0 {
            Self::Any
        } else {
            Self::Category(id)
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            Self::Any => 0,
            Self::Category(id) => *id,
        }
    }
}

/// Result of asking for the next quiz question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizOutcome {
    /// A question the client has not seen, plus the seen list to send back
    /// on the next request
    Next {
        question: QuestionView,
        previous_questions: Vec<i64>,
    },
    /// Every candidate has been seen; the quiz is over
    Exhausted { previous_questions: Vec<i64> },
}

impl QuizOutcome {
    pub fn question(&self) -> Option<&QuestionView> {
        match self {
            Self::Next { question, .. } => Some(question),
            Self::Exhausted { .. } => None,
        }
    }

    pub fn previous_questions(&self) -> &[i64] {
        match self {
            Self::Next {
                previous_questions, ..
            }
            | Self::Exhausted { previous_questions } => previous_questions,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted { .. })
    }
}

/// Pick one question uniformly from `candidates` minus `previously_seen`.
///
/// Returns `None` when every candidate has been seen.
pub fn select_quiz_question<'a, R>(
    candidates: &'a [Question],
    previously_seen: &HashSet<i64>,
    rng: &mut R,
) -> Option<&'a Question>
where
    R: Rng + ?Sized,
{
    let eligible: Vec<&Question> = candidates
        .iter()
        .filter(|q| !previously_seen.contains(&q.id))
        .collect();

    eligible.choose(rng).copied()
}

/// Build the outcome for a pick, appending the chosen id to the seen list.
pub(crate) fn outcome_for(chosen: Option<&Question>, mut previous: Vec<i64>) -> QuizOutcome {
    match chosen {
        Some(q) => {
            previous.push(q.id);
            QuizOutcome::Next {
                question: q.format(),
                previous_questions: previous,
            }
        }
        None => QuizOutcome::Exhausted {
            previous_questions: previous,
        },
    }
}
