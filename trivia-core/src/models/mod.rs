//! Domain models
//!
//! Client input is validated when it is turned into these types.
//! Invalid input returns ValidationError, not panic.

pub mod pagination;
pub mod question;
pub mod validation;

pub use pagination::{paginate, Page, PageRequest, PaginationParams, QUESTIONS_PER_PAGE};
pub use question::{lenient_number, Category, NewQuestion, Question, QuestionDraft, QuestionView};
pub use validation::ValidationError;
