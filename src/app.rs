use std::collections::VecDeque;
use std::time::Instant;

use log::info;

use crate::game::Game;
use crate::input::{Command, Focus};
use crate::quiz::{AnswerOutcome, QuizPanel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
}

/// A modal message box. Any key dismisses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    fn info(message: &str) -> Self {
        Self { level: NotificationLevel::Info, message: message.to_string() }
    }

    fn warning(message: &str) -> Self {
        Self { level: NotificationLevel::Warning, message: message.to_string() }
    }
}

/// One play session: the board, the quiz and whatever modal is up.
pub struct App {
    pub game: Game,
    pub quiz: QuizPanel,
    pub focus: Focus,
    notifications: VecDeque<Notification>,
}

impl App {
    pub fn new(game: Game, quiz: QuizPanel) -> Self {
        let mut app = Self {
            game,
            quiz,
            focus: Focus::default(),
            notifications: VecDeque::new(),
        };
        if app.quiz.is_exhausted() {
            app.notify(Notification::info("No more questions!"));
        }
        app
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notifications.front()
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push_back(notification);
    }

    /// Applies one command. Returns `false` when the user asked to quit.
    pub fn handle(&mut self, command: Command, now: Instant) -> bool {
        if command == Command::Quit {
            return false;
        }

        // A modal swallows the key that closes it, like a message box.
        if !self.notifications.is_empty() {
            self.notifications.pop_front();
            if self.notifications.is_empty() {
                self.game.reset_drop_timer(now);
            }
            return true;
        }

        match command {
            Command::MoveLeft => {
                self.game.try_move(-1, 0);
            }
            Command::MoveRight => {
                self.game.try_move(1, 0);
            }
            Command::StepDown => {
                self.game.step_down();
            }
            Command::Rotate => {
                self.game.try_rotate();
            }
            Command::ToggleFocus => self.focus = self.focus.toggled(),
            Command::SelectOption(index) => self.quiz.select(index),
            Command::NextOption => self.quiz.select_next(),
            Command::PrevOption => self.quiz.select_prev(),
            Command::Submit => self.submit_answer(),
            Command::Restart => {
                if self.game.is_game_over() {
                    info!("Restarting after game over");
                    self.game.reset();
                }
            }
            Command::Dismiss | Command::Quit => {}
        }
        true
    }

    fn submit_answer(&mut self) {
        match self.quiz.submit() {
            AnswerOutcome::Unanswered => {
                self.notify(Notification::warning("Please select an answer!"));
                return;
            }
            AnswerOutcome::Exhausted => {
                self.notify(Notification::info("No more questions!"));
                return;
            }
            AnswerOutcome::Correct { bonus } => {
                self.notify(Notification::info("Correct!"));
                if bonus {
                    self.game.inject_bonus_piece();
                }
            }
            AnswerOutcome::Wrong => self.notify(Notification::info("Wrong!")),
        }

        if self.quiz.is_exhausted() {
            self.notify(Notification::info("No more questions!"));
        }
    }

    /// Runs gravity unless a modal is holding the loop.
    pub fn tick(&mut self, now: Instant) {
        if self.notifications.is_empty() {
            self.game.update(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::PieceType;
    use crate::quiz::question::PoolQuestion;
    use std::time::Duration;

    fn question() -> PoolQuestion {
        PoolQuestion {
            question: "Rust's package manager?".to_string(),
            options: vec!["pip".into(), "cargo".into(), "npm".into()],
            answer: 1,
        }
    }

    fn app(questions: usize) -> App {
        let game = Game::new(Duration::from_millis(1000), Some(3));
        App::new(game, QuizPanel::new(vec![question(); questions]))
    }

    fn answer(app: &mut App, index: usize, now: Instant) {
        app.handle(Command::SelectOption(index), now);
        app.handle(Command::Submit, now);
        app.handle(Command::Dismiss, now);
    }

    #[test]
    fn quit_leaves_the_loop() {
        let mut app = app(1);
        assert!(!app.handle(Command::Quit, Instant::now()));
    }

    #[test]
    fn unanswered_submit_warns() {
        let mut app = app(2);
        app.handle(Command::Submit, Instant::now());
        let note = app.notification().unwrap();
        assert_eq!(note.level, NotificationLevel::Warning);
        assert_eq!(note.message, "Please select an answer!");
        assert_eq!(app.quiz.question_number(), 1);
    }

    #[test]
    fn modal_swallows_the_next_key() {
        let mut app = app(2);
        let now = Instant::now();
        app.handle(Command::SelectOption(0), now);
        app.handle(Command::Submit, now);
        assert_eq!(app.notification().unwrap().message, "Wrong!");

        let x = app.game.current_piece.as_ref().unwrap().x;
        app.handle(Command::MoveLeft, now);
        assert!(app.notification().is_none());
        assert_eq!(app.game.current_piece.as_ref().unwrap().x, x);
    }

    #[test]
    fn modal_pauses_gravity() {
        let mut app = app(2);
        let start = app.game.drop_timer;
        let y = app.game.current_piece.as_ref().unwrap().y;
        app.handle(Command::Submit, start);
        app.tick(start + Duration::from_secs(3));
        assert_eq!(app.game.current_piece.as_ref().unwrap().y, y);

        let later = start + Duration::from_secs(3);
        app.handle(Command::Dismiss, later);
        app.tick(later + Duration::from_millis(500));
        assert_eq!(app.game.current_piece.as_ref().unwrap().y, y);
        app.tick(later + Duration::from_millis(1000));
        assert_eq!(app.game.current_piece.as_ref().unwrap().y, y + 1);
    }

    #[test]
    fn four_net_correct_answers_inject_an_i_piece() {
        let mut app = app(10);
        let now = Instant::now();
        for _ in 0..3 {
            answer(&mut app, 1, now);
        }
        app.game.step_down();
        assert_eq!(app.quiz.tally, 3);

        answer(&mut app, 1, now);
        assert_eq!(app.quiz.tally, 0);
        let piece = app.game.current_piece.as_ref().unwrap();
        assert_eq!(piece.piece_type, PieceType::I);
        assert_eq!((piece.x, piece.y), (4, 0));
    }

    #[test]
    fn last_answer_announces_the_end() {
        let mut app = app(1);
        let now = Instant::now();
        app.handle(Command::SelectOption(1), now);
        app.handle(Command::Submit, now);
        assert_eq!(app.notification().unwrap().message, "Correct!");
        app.handle(Command::Dismiss, now);
        assert_eq!(app.notification().unwrap().message, "No more questions!");
        app.handle(Command::Dismiss, now);
        assert!(app.notification().is_none());
    }

    #[test]
    fn restart_only_after_game_over() {
        let mut app = app(1);
        let now = Instant::now();
        app.game.score = 500;
        app.handle(Command::Restart, now);
        assert_eq!(app.game.score, 500);

        app.game.game_state = crate::game::state::GameState::GameOver;
        app.handle(Command::Restart, now);
        assert_eq!(app.game.score, 0);
        assert!(!app.game.is_game_over());
    }

    #[test]
    fn tab_switches_focus() {
        let mut app = app(1);
        app.handle(Command::ToggleFocus, Instant::now());
        assert_eq!(app.focus, Focus::Quiz);
    }
}
