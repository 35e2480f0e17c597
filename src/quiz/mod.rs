pub mod panel;
pub mod question;

pub use panel::{AnswerOutcome, QuizPanel};
pub use question::{build_pool, load_questions};
