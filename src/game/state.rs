use std::time::{Duration, Instant};

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH, POINTS_PER_LINE};
use crate::game::board::{Board, Cell};
use crate::game::piece::Piece;
use crate::game::shape::PieceType;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameState {
    Playing,
    GameOver,
}

pub struct Game {
    pub board: Board,
    pub current_piece: Option<Piece>,
    pub score: u32,
    pub lines_cleared: u32,
    pub pieces_placed: u32,
    pub game_state: GameState,
    pub drop_timer: Instant,
    tick: Duration,
    rng: StdRng,
}

impl Game {
    pub fn new(tick: Duration, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut game = Self {
            board: Board::new(BOARD_WIDTH, BOARD_HEIGHT),
            current_piece: None,
            score: 0,
            lines_cleared: 0,
            pieces_placed: 0,
            game_state: GameState::Playing,
            drop_timer: Instant::now(),
            tick,
            rng,
        };
        game.spawn_piece();
        game
    }

    pub fn is_game_over(&self) -> bool {
        self.game_state == GameState::GameOver
    }

    /// Picks a catalog shape uniformly at random and puts it at the top.
    ///
    /// A spawn that already overlaps the stack ends the game.
    pub fn spawn_piece(&mut self) {
        let piece_type = PieceType::ALL[self.rng.gen_range(0..PieceType::ALL.len())];
        let piece = Piece::spawn(piece_type, self.board.width);

        if !self.is_valid_position(&piece) {
            info!(
                "Game over: {:?} cannot enter at x={} (score {}, {} lines)",
                piece_type, piece.x, self.score, self.lines_cleared
            );
            self.game_state = GameState::GameOver;
        }
        self.current_piece = Some(piece);
    }

    pub fn is_valid_position(&self, piece: &Piece) -> bool {
        piece
            .get_blocks()
            .into_iter()
            .all(|(x, y)| !self.board.blocks(x, y))
    }

    pub fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        if self.game_state != GameState::Playing {
            return false;
        }

        if let Some(ref piece) = self.current_piece {
            let moved = piece.shifted(dx, dy);
            if self.is_valid_position(&moved) {
                self.current_piece = Some(moved);
                return true;
            }
        }
        false
    }

    pub fn try_rotate(&mut self) -> bool {
        if self.game_state != GameState::Playing {
            return false;
        }

        if let Some(ref piece) = self.current_piece {
            let rotated = piece.rotate_clockwise();
            if self.is_valid_position(&rotated) {
                self.current_piece = Some(rotated);
                return true;
            }
        }
        false
    }

    /// One row of gravity. Landing merges the piece, clears lines and
    /// spawns the next one. Returns whether the piece moved.
    pub fn step_down(&mut self) -> bool {
        if self.game_state != GameState::Playing {
            return false;
        }
        if self.try_move(0, 1) {
            return true;
        }

        self.merge_and_clear();
        self.spawn_piece();
        false
    }

    /// Writes the active piece into the board and clears complete rows.
    /// Returns the number of rows cleared.
    pub fn merge_and_clear(&mut self) -> u32 {
        if let Some(piece) = self.current_piece.take() {
            let color = piece.color_id();
            for (x, y) in piece.get_blocks() {
                // Cells still above the well have nowhere to go.
                if y >= 0 && y < self.board.height as i32 && x >= 0 && x < self.board.width as i32 {
                    self.board.set(x as usize, y as usize, Cell::Filled(color));
                }
            }
            self.pieces_placed += 1;
            debug!("Merged {:?} at ({}, {})", piece.piece_type, piece.x, piece.y);
        }

        let lines = self.board.clear_complete_rows();
        if lines > 0 {
            self.lines_cleared += lines;
            self.score += lines * POINTS_PER_LINE;
            debug!("Cleared {} line(s), score {}", lines, self.score);
        }
        lines
    }

    /// Swaps the active piece for the bonus I piece at the top, unchecked.
    pub fn inject_bonus_piece(&mut self) {
        if self.game_state != GameState::Playing {
            return;
        }
        info!("Bonus I piece injected");
        self.current_piece = Some(Piece::bonus(self.board.width));
    }

    /// Gravity tick: drops the piece once per interval.
    pub fn update(&mut self, now: Instant) {
        if self.game_state != GameState::Playing {
            return;
        }
        if now.duration_since(self.drop_timer) >= self.tick {
            self.drop_timer = now;
            self.step_down();
        }
    }

    /// Restarts the gravity interval, e.g. after the loop was paused.
    pub fn reset_drop_timer(&mut self, now: Instant) {
        self.drop_timer = now;
    }

    pub fn reset(&mut self) {
        self.board = Board::new(self.board.width, self.board.height);
        self.current_piece = None;
        self.score = 0;
        self.lines_cleared = 0;
        self.pieces_placed = 0;
        self.game_state = GameState::Playing;
        self.drop_timer = Instant::now();
        self.spawn_piece();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_TICK_MS;

    fn game() -> Game {
        Game::new(Duration::from_millis(DEFAULT_TICK_MS), Some(7))
    }

    fn with_piece(game: &mut Game, piece_type: PieceType) {
        game.current_piece = Some(Piece::spawn(piece_type, game.board.width));
    }

    fn fill_row_except(game: &mut Game, y: usize, holes: &[usize]) {
        for x in 0..game.board.width {
            if !holes.contains(&x) {
                game.board.set(x, y, Cell::Filled(2));
            }
        }
    }

    fn piece(game: &Game) -> &Piece {
        game.current_piece.as_ref().expect("active piece")
    }

    #[test]
    fn new_game_has_a_piece_at_the_top() {
        let game = game();
        assert_eq!(game.game_state, GameState::Playing);
        assert_eq!(piece(&game).y, 0);
        assert_eq!(game.score, 0);
    }

    #[test]
    fn same_seed_spawns_same_sequence() {
        let mut a = game();
        let mut b = game();
        for _ in 0..10 {
            assert_eq!(piece(&a).piece_type, piece(&b).piece_type);
            a.spawn_piece();
            b.spawn_piece();
        }
    }

    #[test]
    fn valid_placements_stay_in_bounds_and_off_the_stack() {
        let mut game = game();
        fill_row_except(&mut game, 19, &[0]);
        game.board.set(4, 10, Cell::Filled(1));
        game.board.set(7, 15, Cell::Filled(3));

        for kind in PieceType::ALL {
            let mut candidate = Piece::spawn(kind, game.board.width);
            for _ in 0..4 {
                for x in -4..14 {
                    for y in -4..24 {
                        let placed = Piece { x, y, ..candidate.clone() };
                        if !game.is_valid_position(&placed) {
                            continue;
                        }
                        for (bx, by) in placed.get_blocks() {
                            assert!(bx >= 0 && bx < game.board.width as i32);
                            assert!(by < game.board.height as i32);
                            if by >= 0 {
                                assert_eq!(game.board.get(bx as usize, by as usize), Cell::Empty);
                            }
                        }
                    }
                }
                candidate = candidate.rotate_clockwise();
            }
        }
    }

    #[test]
    fn invalid_moves_change_nothing() {
        let mut game = game();
        with_piece(&mut game, PieceType::O);
        game.current_piece.as_mut().unwrap().x = 0;
        let before = piece(&game).clone();

        assert!(!game.try_move(-1, 0));
        assert_eq!(piece(&game), &before);
        assert!(game.try_move(1, 0));
        assert_eq!(piece(&game).x, 1);
    }

    #[test]
    fn pieces_may_hang_above_the_top_edge() {
        let mut game = game();
        with_piece(&mut game, PieceType::T);
        assert!(game.try_move(0, -2));
        assert_eq!(piece(&game).y, -2);
    }

    #[test]
    fn rotation_is_rejected_against_the_wall() {
        let mut game = game();
        with_piece(&mut game, PieceType::I);
        // Vertical I in the right-most column cannot turn flat.
        assert!(game.try_rotate());
        while game.try_move(1, 0) {}
        assert_eq!(piece(&game).x, 9);
        let before = piece(&game).clone();
        assert!(!game.try_rotate());
        assert_eq!(piece(&game), &before);
    }

    #[test]
    fn two_valid_rotations_give_a_half_turn() {
        let mut game = game();
        with_piece(&mut game, PieceType::L);
        game.try_move(0, 5);
        let original = piece(&game).shape.clone();

        assert!(game.try_rotate());
        assert!(game.try_rotate());
        assert_eq!(
            piece(&game).shape,
            original.rotate_clockwise().rotate_clockwise()
        );
    }

    #[test]
    fn o_piece_lands_on_the_floor() {
        let mut game = game();
        with_piece(&mut game, PieceType::O);
        assert_eq!((piece(&game).x, piece(&game).y), (4, 0));

        while game.try_move(0, 1) {}
        assert_eq!(piece(&game).y, 18);

        assert!(!game.step_down());
        for (x, y) in [(4, 18), (5, 18), (4, 19), (5, 19)] {
            assert_eq!(game.board.get(x, y), Cell::Filled(PieceType::O.color_id()));
        }
        assert_eq!(game.board.filled_count(), 4);
        assert_eq!(game.pieces_placed, 1);
        assert_eq!(piece(&game).y, 0);
    }

    #[test]
    fn step_down_moves_while_there_is_room() {
        let mut game = game();
        with_piece(&mut game, PieceType::S);
        assert!(game.step_down());
        assert_eq!(piece(&game).y, 1);
        assert_eq!(game.board.filled_count(), 0);
    }

    #[test]
    fn single_line_clear_scores_one_hundred() {
        let mut game = game();
        fill_row_except(&mut game, 19, &[4, 5]);
        with_piece(&mut game, PieceType::O);
        while game.step_down() {}

        assert_eq!(game.score, 100);
        assert_eq!(game.lines_cleared, 1);
        // Top half of the O slid down into the bottom row.
        assert_eq!(game.board.get(4, 19), Cell::Filled(PieceType::O.color_id()));
        assert_eq!(game.board.get(5, 19), Cell::Filled(PieceType::O.color_id()));
        assert_eq!(game.board.filled_count(), 2);
    }

    #[test]
    fn multi_line_clear_scores_in_one_update() {
        let mut game = game();
        fill_row_except(&mut game, 19, &[4, 5]);
        fill_row_except(&mut game, 18, &[4, 5]);
        game.board.set(0, 17, Cell::Filled(6));
        with_piece(&mut game, PieceType::O);
        while game.try_move(0, 1) {}

        assert_eq!(game.merge_and_clear(), 2);
        assert_eq!(game.score, 200);
        assert_eq!(game.board.get(0, 19), Cell::Filled(6));
        assert_eq!(game.board.filled_count(), 1);
    }

    #[test]
    fn score_accumulates_over_separate_clears() {
        let mut game = game();
        for n in 1..=3 {
            fill_row_except(&mut game, 19, &[4, 5]);
            with_piece(&mut game, PieceType::O);
            while game.try_move(0, 1) {}
            game.merge_and_clear();
            // Leftover O half sits in row 19 cols 4-5; clear it for the next round.
            game.board.set(4, 19, Cell::Empty);
            game.board.set(5, 19, Cell::Empty);
            assert_eq!(game.score, 100 * n);
        }
    }

    #[test]
    fn bonus_piece_replaces_active_piece_without_checks() {
        let mut game = game();
        with_piece(&mut game, PieceType::Z);
        game.try_move(0, 6);
        game.board.set(7, 0, Cell::Filled(1));

        game.inject_bonus_piece();
        let bonus = piece(&game);
        assert_eq!(bonus.piece_type, PieceType::I);
        assert_eq!((bonus.x, bonus.y), (BOARD_WIDTH as i32 / 2 - 1, 0));
        assert!(!game.is_valid_position(bonus));
        assert_eq!(game.game_state, GameState::Playing);
    }

    #[test]
    fn spawning_into_the_stack_ends_the_game() {
        let mut game = game();
        for x in 3..=6 {
            game.board.set(x, 0, Cell::Filled(1));
        }
        game.spawn_piece();
        assert!(game.is_game_over());

        let before = piece(&game).clone();
        assert!(!game.try_move(1, 0));
        assert!(!game.try_rotate());
        assert!(!game.step_down());
        game.update(game.drop_timer + Duration::from_secs(5));
        assert_eq!(piece(&game), &before);
    }

    #[test]
    fn update_drops_once_per_tick() {
        let mut game = game();
        with_piece(&mut game, PieceType::T);
        let start = game.drop_timer;

        game.update(start + Duration::from_millis(999));
        assert_eq!(piece(&game).y, 0);
        game.update(start + Duration::from_millis(1000));
        assert_eq!(piece(&game).y, 1);
        game.update(start + Duration::from_millis(1500));
        assert_eq!(piece(&game).y, 1);
    }

    #[test]
    fn reset_starts_over() {
        let mut game = game();
        fill_row_except(&mut game, 19, &[0]);
        game.score = 300;
        game.game_state = GameState::GameOver;

        game.reset();
        assert_eq!(game.board.filled_count(), 0);
        assert_eq!(game.score, 0);
        assert_eq!(game.game_state, GameState::Playing);
        assert!(game.current_piece.is_some());
    }
}
