use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, NotificationLevel};
use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::game::{Cell, Game, PieceType};
use crate::input::Focus;

const QUIZ_PANEL_WIDTH: u16 = 40;

pub fn ui(f: &mut Frame, app: &App) {
    let size = f.size();

    let board_height = BOARD_HEIGHT as u16 + 2; // rows + borders
    let board_width = BOARD_WIDTH as u16 * 2 + 2; // two chars per block + borders

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(board_height),
            Constraint::Min(1),
        ])
        .split(size);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(16),
            Constraint::Length(board_width),
            Constraint::Length(QUIZ_PANEL_WIDTH),
            Constraint::Min(1),
        ])
        .split(vertical_chunks[1]);

    let info_area = horizontal_chunks[1];
    let board_area = horizontal_chunks[2];
    let quiz_area = horizontal_chunks[3];

    render_board(f, app, board_area);
    render_info(f, app, info_area);
    render_quiz(f, app, quiz_area);

    if let Some(note) = app.notification() {
        render_notification(f, note.level, &note.message, size);
    } else if app.game.is_game_over() {
        render_game_over_overlay(f, &app.game, board_area);
    }
}

fn cell_color(id: u8) -> Color {
    PieceType::from_color_id(id).map_or(Color::White, PieceType::color)
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let game = &app.game;
    let mut cells: Vec<Vec<Option<Color>>> = game
        .board
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| match *cell {
                    Cell::Empty => None,
                    Cell::Filled(id) => Some(cell_color(id)),
                })
                .collect()
        })
        .collect();

    if let Some(piece) = &game.current_piece {
        for (x, y) in piece.get_blocks() {
            if x >= 0 && x < game.board.width as i32 && y >= 0 && y < game.board.height as i32 {
                cells[y as usize][x as usize] = Some(piece.color());
            }
        }
    }

    let board_lines: Vec<Line> = cells
        .iter()
        .enumerate()
        .map(|(y, row)| {
            let spans: Vec<Span> = row
                .iter()
                .enumerate()
                .map(|(x, cell)| match cell {
                    Some(color) => Span::styled("██", Style::default().fg(*color)),
                    None if (x + y) % 2 == 0 => {
                        Span::styled("░░", Style::default().fg(Color::DarkGray))
                    }
                    None => Span::raw("  "),
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let board_widget = Paragraph::new(board_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(focus_style(app.focus == Focus::Board))
            .title("quizris"),
    );

    f.render_widget(board_widget, area);
}

fn render_info(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9),
            Constraint::Min(1),
        ])
        .split(area);

    let stats_text = vec![
        Line::from(vec![Span::styled("Score", Style::default().fg(Color::Cyan))]),
        Line::from(vec![Span::raw(app.game.score.to_string())]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled("Lines", Style::default().fg(Color::Cyan))]),
        Line::from(vec![Span::raw(app.game.lines_cleared.to_string())]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw(format!("Pieces {}", app.game.pieces_placed))]),
    ];

    let stats_widget = Paragraph::new(stats_text)
        .block(Block::default().borders(Borders::ALL).title("Tetris"))
        .alignment(Alignment::Center);
    f.render_widget(stats_widget, chunks[0]);

    let keys = Paragraph::new(vec![
        Line::from("←/→ move"),
        Line::from("↓ down"),
        Line::from("↑ rotate"),
        Line::from("Tab panel"),
        Line::from("1-0 pick"),
        Line::from("Enter submit"),
        Line::from("q quit"),
    ])
    .block(Block::default().borders(Borders::ALL).title("Keys"));
    f.render_widget(keys, chunks[1]);
}

fn render_quiz(f: &mut Frame, app: &App, area: Rect) {
    let quiz = &app.quiz;
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Quiz Score: ", Style::default().fg(Color::Cyan)),
            Span::raw(quiz.tally.to_string()),
        ]),
        Line::from(Span::styled(
            format!("✓ {}  ✗ {}", quiz.correct_answers, quiz.wrong_answers),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    match quiz.current() {
        Some(question) => {
            lines.push(Line::from(Span::styled(
                format!("Q{}. {}", quiz.question_number(), question.question),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
            for (i, option) in question.options.iter().enumerate() {
                let selected = quiz.selected == Some(i);
                let marker = if selected { "(•)" } else { "( )" };
                let style = if selected {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default()
                };
                let key = (i + 1) % 10;
                lines.push(Line::from(Span::styled(
                    format!("{} {} {}", key, marker, option),
                    style,
                )));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Enter: Submit Answer",
                Style::default().fg(Color::DarkGray),
            )));
        }
        None => lines.push(Line::from("No more questions!")),
    }

    let quiz_widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(focus_style(app.focus == Focus::Quiz))
                .title("Quiz"),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(quiz_widget, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn render_notification(f: &mut Frame, level: NotificationLevel, message: &str, area: Rect) {
    let popup_area = centered_rect(30, 20, area);
    f.render_widget(Clear, popup_area);

    let (title, color) = match level {
        NotificationLevel::Info => ("Quiz", Color::Cyan),
        NotificationLevel::Warning => ("Warning", Color::Yellow),
    };

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(message.to_string(), Style::default().fg(color))),
        Line::from(""),
        Line::from(Span::styled("Any key to close", Style::default().fg(Color::DarkGray))),
    ];

    let widget = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title(title))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(widget, popup_area);
}

fn render_game_over_overlay(f: &mut Frame, game: &Game, area: Rect) {
    let popup_area = centered_rect(80, 40, area);
    f.render_widget(Clear, popup_area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled("GAME OVER", Style::default().fg(Color::Red))),
        Line::from(""),
        Line::from(format!("Score: {}", game.score)),
        Line::from(format!("Lines: {}", game.lines_cleared)),
        Line::from(""),
        Line::from("R restart"),
        Line::from("Q quit"),
    ];

    let widget = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    f.render_widget(widget, popup_area);
}
