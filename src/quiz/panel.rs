use log::info;

use crate::constants::BONUS_THRESHOLD;
use crate::quiz::question::PoolQuestion;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Nothing selected; state untouched.
    Unanswered,
    /// The pool ran out before this submission.
    Exhausted,
    Correct { bonus: bool },
    Wrong,
}

pub struct QuizPanel {
    pool: Vec<PoolQuestion>,
    cursor: usize,
    pub tally: i32,
    pub selected: Option<usize>,
    pub correct_answers: u32,
    pub wrong_answers: u32,
}

impl QuizPanel {
    pub fn new(pool: Vec<PoolQuestion>) -> Self {
        Self {
            pool,
            cursor: 0,
            tally: 0,
            selected: None,
            correct_answers: 0,
            wrong_answers: 0,
        }
    }

    pub fn current(&self) -> Option<&PoolQuestion> {
        self.pool.get(self.cursor)
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.pool.len()
    }

    /// 1-based number of the question on screen.
    pub fn question_number(&self) -> usize {
        self.cursor + 1
    }

    pub fn select(&mut self, index: usize) {
        if let Some(question) = self.current() {
            if index < question.options.len() {
                self.selected = Some(index);
            }
        }
    }

    pub fn select_next(&mut self) {
        let Some(count) = self.current().map(|q| q.options.len()) else {
            return;
        };
        self.selected = Some(match self.selected {
            Some(i) => (i + 1) % count,
            None => 0,
        });
    }

    pub fn select_prev(&mut self) {
        let Some(count) = self.current().map(|q| q.options.len()) else {
            return;
        };
        self.selected = Some(match self.selected {
            Some(0) | None => count - 1,
            Some(i) => i - 1,
        });
    }

    /// Checks the selected option and moves on to the next question.
    ///
    /// Each time the tally reaches the bonus threshold it resets to zero and
    /// the outcome carries `bonus: true`.
    pub fn submit(&mut self) -> AnswerOutcome {
        let Some(question) = self.current() else {
            return AnswerOutcome::Exhausted;
        };
        let Some(selected) = self.selected else {
            return AnswerOutcome::Unanswered;
        };

        let outcome = if selected == question.answer {
            self.tally += 1;
            self.correct_answers += 1;
            let bonus = self.tally == BONUS_THRESHOLD;
            if bonus {
                info!("Quiz tally reached {}, bonus earned", BONUS_THRESHOLD);
                self.tally = 0;
            }
            AnswerOutcome::Correct { bonus }
        } else {
            self.tally -= 1;
            self.wrong_answers += 1;
            AnswerOutcome::Wrong
        };

        self.cursor += 1;
        self.selected = None;
        outcome
    }
}
