use ratatui::style::Color;

use crate::game::board::ColorId;

/// Rectangular occupancy matrix of a piece, indexed `[row][col]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shape {
    rows: Vec<Vec<bool>>,
}

impl Shape {
    fn from_rows(rows: Vec<Vec<bool>>) -> Self {
        Self { rows }
    }

    fn from_bits(bits: &[&[u8]]) -> Self {
        Self::from_rows(
            bits.iter()
                .map(|row| row.iter().map(|&b| b != 0).collect())
                .collect(),
        )
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Quarter turn clockwise: reverse the rows, then transpose.
    pub fn rotate_clockwise(&self) -> Self {
        let (h, w) = (self.height(), self.width());
        let mut rotated = vec![vec![false; h]; w];
        for (i, row) in self.rows.iter().rev().enumerate() {
            for (j, &cell) in row.iter().enumerate() {
                rotated[j][i] = cell;
            }
        }
        Self::from_rows(rotated)
    }

    /// Offsets `(col, row)` of every occupied cell.
    pub fn occupied(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.rows.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &cell)| cell)
                .map(move |(j, _)| (j as i32, i as i32))
        })
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PieceType {
    I, O, T, L, J, S, Z
}

impl PieceType {
    /// Catalog order; the first entry is the bonus piece.
    pub const ALL: [PieceType; 7] = [
        PieceType::I, PieceType::O, PieceType::T, PieceType::L,
        PieceType::J, PieceType::S, PieceType::Z,
    ];

    pub fn index(self) -> usize {
        match self {
            PieceType::I => 0,
            PieceType::O => 1,
            PieceType::T => 2,
            PieceType::L => 3,
            PieceType::J => 4,
            PieceType::S => 5,
            PieceType::Z => 6,
        }
    }

    pub fn color_id(self) -> ColorId {
        self.index() as ColorId + 1
    }

    pub fn from_color_id(id: ColorId) -> Option<Self> {
        Self::ALL.get((id as usize).checked_sub(1)?).copied()
    }

    pub fn color(self) -> Color {
        match self {
            PieceType::I => Color::Cyan,
            PieceType::O => Color::Yellow,
            PieceType::T => Color::Magenta,
            PieceType::L => Color::LightRed,
            PieceType::J => Color::Blue,
            PieceType::S => Color::Green,
            PieceType::Z => Color::Red,
        }
    }

    pub fn shape(self) -> Shape {
        match self {
            PieceType::I => Shape::from_bits(&[&[1, 1, 1, 1]]),
            PieceType::O => Shape::from_bits(&[&[1, 1], &[1, 1]]),
            PieceType::T => Shape::from_bits(&[&[1, 1, 1], &[0, 1, 0]]),
            PieceType::L => Shape::from_bits(&[&[1, 1, 1], &[1, 0, 0]]),
            PieceType::J => Shape::from_bits(&[&[1, 1, 1], &[0, 0, 1]]),
            PieceType::S => Shape::from_bits(&[&[1, 1, 0], &[0, 1, 1]]),
            PieceType::Z => Shape::from_bits(&[&[0, 1, 1], &[1, 1, 0]]),
        }
    }
}
