use ratatui::style::Color;

use crate::game::board::ColorId;
use crate::game::shape::{PieceType, Shape};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub piece_type: PieceType,
    pub shape: Shape,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// A fresh piece horizontally centered on a board `board_width` wide, at row 0.
    pub fn spawn(piece_type: PieceType, board_width: usize) -> Self {
        let shape = piece_type.shape();
        let x = board_width as i32 / 2 - shape.width() as i32 / 2;
        Self {
            piece_type,
            shape,
            x,
            y: 0,
        }
    }

    /// The quiz reward: an I piece with its origin one left of the board's midline.
    pub fn bonus(board_width: usize) -> Self {
        Self {
            x: board_width as i32 / 2 - 1,
            ..Self::spawn(PieceType::ALL[0], board_width)
        }
    }

    pub fn color(&self) -> Color {
        self.piece_type.color()
    }

    pub fn color_id(&self) -> ColorId {
        self.piece_type.color_id()
    }

    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        let mut moved = self.clone();
        moved.x += dx;
        moved.y += dy;
        moved
    }

    pub fn rotate_clockwise(&self) -> Self {
        let mut rotated = self.clone();
        rotated.shape = self.shape.rotate_clockwise();
        rotated
    }

    /// Board coordinates `(x, y)` of every occupied cell.
    pub fn get_blocks(&self) -> Vec<(i32, i32)> {
        self.shape
            .occupied()
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }
}
