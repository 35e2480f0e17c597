use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};

use crate::input::command::{Command, Focus};

/// Translates a key event into a command. Releases are ignored.
pub fn map_key(
    key_code: KeyCode,
    kind: KeyEventKind,
    modifiers: KeyModifiers,
    focus: Focus,
) -> Option<Command> {
    if kind == KeyEventKind::Release {
        return None;
    }
    if modifiers.contains(KeyModifiers::CONTROL) && key_code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    match key_code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),
        KeyCode::Tab | KeyCode::BackTab => Some(Command::ToggleFocus),
        KeyCode::Enter => Some(Command::Submit),
        KeyCode::Esc => Some(Command::Dismiss),
        // 1-9 pick the first nine options, 0 the tenth
        KeyCode::Char(c @ '1'..='9') => Some(Command::SelectOption(c as usize - '1' as usize)),
        KeyCode::Char('0') => Some(Command::SelectOption(9)),
        _ => match focus {
            Focus::Board => map_board_key(key_code),
            Focus::Quiz => map_quiz_key(key_code),
        },
    }
}

fn map_board_key(key_code: KeyCode) -> Option<Command> {
    match key_code {
        KeyCode::Left => Some(Command::MoveLeft),
        KeyCode::Right => Some(Command::MoveRight),
        KeyCode::Down => Some(Command::StepDown),
        KeyCode::Up => Some(Command::Rotate),
        _ => None,
    }
}

fn map_quiz_key(key_code: KeyCode) -> Option<Command> {
    match key_code {
        KeyCode::Up | KeyCode::Char('k') => Some(Command::PrevOption),
        KeyCode::Down | KeyCode::Char('j') => Some(Command::NextOption),
        _ => None,
    }
}
