//! The in-process call surface consumed by display layers: owns the live
//! board, the search engine, and the running score tally.

use crate::ai::{Difficulty, SearchEngine};
use crate::config::AppConfig;
use crate::game::{Board, Cell, Player};

/// Running tally of finished games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    pub human: u32,
    pub computer: u32,
    pub draws: u32,
}

/// Read-only view of the game state for rendering.
#[derive(Debug, Clone)]
pub struct GameSnapshot {
    /// Grid contents, `grid[row][col]`, row 0 at the top.
    pub grid: Vec<Vec<Cell>>,
    pub current_player: Player,
    pub game_over: bool,
    pub winner: Option<Player>,
    pub winning_positions: Vec<(usize, usize)>,
}

/// A human-versus-computer game: the single live [`Board`], the
/// [`SearchEngine`] answering computer-move requests, and the score tally.
///
/// Turn ownership is the caller's responsibility: `submit_human_move` is
/// meant to be called only while the Human is to move, and
/// `request_computer_move` only while the Computer is.
pub struct GameSession {
    board: Board,
    engine: SearchEngine,
    scores: ScoreBoard,
    tallied: bool,
}

impl GameSession {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_engine(
            config.game.rows,
            config.game.cols,
            SearchEngine::from_config(&config.search),
        )
    }

    /// Fresh board and engine for the given dimensions and search depth.
    pub fn new_game(rows: usize, cols: usize, search_depth: usize) -> Self {
        Self::with_engine(rows, cols, SearchEngine::new(search_depth))
    }

    /// Build a session around a pre-configured engine (e.g. a seeded one).
    pub fn with_engine(rows: usize, cols: usize, engine: SearchEngine) -> Self {
        GameSession {
            board: Board::with_size(rows, cols),
            engine,
            scores: ScoreBoard::default(),
            tallied: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn scores(&self) -> ScoreBoard {
        self.scores
    }

    pub fn difficulty(&self) -> Difficulty {
        self.engine.difficulty()
    }

    pub fn search_depth(&self) -> usize {
        self.engine.depth()
    }

    /// Apply the human's move. False when the column is invalid or the game
    /// is already over.
    pub fn submit_human_move(&mut self, col: usize) -> bool {
        let applied = self.board.drop_piece(col);
        if applied {
            self.tally_if_finished();
        }
        applied
    }

    /// Ask the engine for a column and apply it. False when the board is
    /// already decided or full.
    pub fn request_computer_move(&mut self) -> bool {
        let Some(col) = self.engine.choose_move(&self.board) else {
            return false;
        };
        let applied = self.board.drop_piece(col);
        if applied {
            self.tally_if_finished();
        }
        applied
    }

    /// Read-only snapshot of the current position.
    pub fn snapshot(&self) -> GameSnapshot {
        let grid = (0..self.board.rows())
            .map(|row| {
                (0..self.board.cols())
                    .map(|col| self.board.get(row, col))
                    .collect()
            })
            .collect();
        GameSnapshot {
            grid,
            current_player: self.board.current_player(),
            game_over: self.board.game_over(),
            winner: self.board.winner(),
            winning_positions: self.board.winning_positions().to_vec(),
        }
    }

    /// Start a fresh round. Scores carry over.
    pub fn reset_game(&mut self) {
        self.board.reset();
        self.tallied = false;
    }

    /// Zero the score tally.
    pub fn reset_scores(&mut self) {
        self.scores = ScoreBoard::default();
    }

    /// Replace the search configuration for future move requests. The game
    /// in progress is otherwise untouched.
    pub fn set_difficulty(&mut self, depth: usize) {
        self.engine.set_depth(depth);
    }

    /// Select a difficulty tier by its canonical depth.
    pub fn set_difficulty_preset(&mut self, tier: Difficulty) {
        self.set_difficulty(tier.preset_depth());
    }

    /// Count a finished game exactly once, at the move that ended it.
    fn tally_if_finished(&mut self) {
        if self.board.game_over() && !self.tallied {
            self.tallied = true;
            match self.board.winner() {
                Some(Player::Human) => self.scores.human += 1,
                Some(Player::Computer) => self.scores.computer += 1,
                None => self.scores.draws += 1,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_session(depth: usize) -> GameSession {
        GameSession::with_engine(6, 7, SearchEngine::seeded(depth, 42))
    }

    /// Drive both sides through `submit_human_move` (turn ownership is the
    /// caller's): the drop lands for whichever player is up.
    fn script(session: &mut GameSession, cols: &[usize]) {
        for &col in cols {
            assert!(session.submit_human_move(col), "drop in {col} failed");
        }
    }

    #[test]
    fn test_new_session_is_fresh() {
        let session = GameSession::new(&AppConfig::default());
        let snap = session.snapshot();
        assert_eq!(snap.current_player, Player::Human);
        assert!(!snap.game_over);
        assert_eq!(snap.winner, None);
        assert!(snap.winning_positions.is_empty());
        assert_eq!(snap.grid.len(), 6);
        assert_eq!(snap.grid[0].len(), 7);
        assert_eq!(session.scores(), ScoreBoard::default());
    }

    #[test]
    fn test_new_game_custom_dimensions() {
        let session = GameSession::new_game(8, 9, 6);
        assert_eq!(session.board().rows(), 8);
        assert_eq!(session.board().cols(), 9);
        assert_eq!(session.search_depth(), 6);
        assert_eq!(session.difficulty(), Difficulty::Hard);
    }

    #[test]
    fn test_human_then_computer_move() {
        let mut session = seeded_session(4);
        assert!(session.submit_human_move(3));
        assert_eq!(session.board().current_player(), Player::Computer);

        assert!(session.request_computer_move());
        assert_eq!(session.board().current_player(), Player::Human);

        let snap = session.snapshot();
        assert_eq!(snap.grid[5][3], Cell::Human);
        let pieces: usize = snap
            .grid
            .iter()
            .flatten()
            .filter(|&&c| c != Cell::Empty)
            .count();
        assert_eq!(pieces, 2);
    }

    #[test]
    fn test_invalid_human_move_rejected() {
        let mut session = seeded_session(4);
        assert!(!session.submit_human_move(7));
        for _ in 0..6 {
            session.submit_human_move(0);
        }
        assert!(!session.submit_human_move(0));
    }

    #[test]
    fn test_score_tallied_once_per_game() {
        let mut session = seeded_session(4);
        // Human wins stacking column 3 while the Computer wastes column 0
        script(&mut session, &[3, 0, 3, 0, 3, 0, 3]);

        assert!(session.snapshot().game_over);
        assert_eq!(session.snapshot().winner, Some(Player::Human));
        assert_eq!(session.scores().human, 1);

        // Further submissions are no-ops and never re-count
        assert!(!session.submit_human_move(1));
        assert!(!session.request_computer_move());
        assert_eq!(session.scores().human, 1);

        // A new round can be won and counted again
        session.reset_game();
        script(&mut session, &[3, 0, 3, 0, 3, 0, 3]);
        assert_eq!(session.scores().human, 2);
        assert_eq!(session.scores().computer, 0);
        assert_eq!(session.scores().draws, 0);
    }

    #[test]
    fn test_draw_is_tallied() {
        let mut session = seeded_session(4);
        let mut seq = Vec::new();
        for (x, y) in [(0, 2), (1, 3), (4, 6)] {
            for _ in 0..3 {
                seq.extend_from_slice(&[x, y, y, x]);
            }
        }
        seq.extend_from_slice(&[5; 6]);
        script(&mut session, &seq);

        let snap = session.snapshot();
        assert!(snap.game_over);
        assert_eq!(snap.winner, None);
        assert_eq!(session.scores().draws, 1);
    }

    #[test]
    fn test_reset_game_keeps_scores() {
        let mut session = seeded_session(4);
        script(&mut session, &[3, 0, 3, 0, 3, 0, 3]);
        assert_eq!(session.scores().human, 1);

        session.reset_game();
        let snap = session.snapshot();
        assert!(!snap.game_over);
        assert_eq!(snap.current_player, Player::Human);
        assert!(snap.grid.iter().flatten().all(|&c| c == Cell::Empty));
        assert_eq!(session.scores().human, 1);

        session.reset_scores();
        assert_eq!(session.scores(), ScoreBoard::default());
    }

    #[test]
    fn test_set_difficulty_applies_to_future_requests() {
        let mut session = seeded_session(2);
        assert_eq!(session.difficulty(), Difficulty::Easy);

        session.set_difficulty(6);
        assert_eq!(session.difficulty(), Difficulty::Hard);
        assert_eq!(session.search_depth(), 6);

        session.set_difficulty_preset(Difficulty::Medium);
        assert_eq!(session.search_depth(), 4);
    }

    #[test]
    fn test_full_game_to_completion() {
        let mut session = seeded_session(4);
        // Human always piles on the first open column; the engine answers.
        while !session.snapshot().game_over {
            let col = (0..7)
                .find(|&c| session.board().is_valid_move(c))
                .expect("running game has an open column");
            assert!(session.submit_human_move(col));
            if !session.snapshot().game_over {
                assert!(session.request_computer_move());
            }
        }
        let scores = session.scores();
        assert_eq!(scores.human + scores.computer + scores.draws, 1);
    }
}
