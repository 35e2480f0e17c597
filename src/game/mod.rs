pub mod board;
pub mod piece;
pub mod shape;
pub mod state;

pub use board::Cell;
pub use shape::PieceType;
pub use state::Game;
