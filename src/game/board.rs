/// Color identifier stored in a filled cell: the catalog index plus one.
pub type ColorId = u8;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Empty,
    Filled(ColorId),
}

impl Cell {
    pub fn is_filled(self) -> bool {
        matches!(self, Cell::Filled(_))
    }
}

/// Settled cells of the playfield, row 0 at the top.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub width: usize,
    pub height: usize,
    rows: Vec<Vec<Cell>>,
}

impl Board {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            rows: vec![vec![Cell::Empty; width]; height],
        }
    }

    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        self.rows[y][x] = cell;
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// True when `(x, y)` is outside the well or already holds a block.
    /// Rows above the top edge are open.
    pub fn blocks(&self, x: i32, y: i32) -> bool {
        if x < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return true;
        }
        y >= 0 && self.rows[y as usize][x as usize].is_filled()
    }

    pub fn is_row_complete(&self, y: usize) -> bool {
        self.rows[y].iter().all(|cell| cell.is_filled())
    }

    fn remove_row(&mut self, y: usize) {
        self.rows.remove(y);
        self.rows.insert(0, vec![Cell::Empty; self.width]);
    }

    /// Removes every complete row and returns how many went.
    ///
    /// Scans bottom-up; after a removal the same index holds the row that
    /// used to sit above it, so it is checked again before moving on.
    pub fn clear_complete_rows(&mut self) -> u32 {
        let mut cleared = 0;
        let mut y = self.height;
        while y > 0 {
            if self.is_row_complete(y - 1) {
                self.remove_row(y - 1);
                cleared += 1;
            } else {
                y -= 1;
            }
        }
        cleared
    }
}

#[cfg(test)]
impl Board {
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.rows[y][x]
    }

    pub fn filled_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|cell| cell.is_filled())
            .count()
    }
}
