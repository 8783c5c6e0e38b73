use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::config::SearchConfig;
use crate::game::{Board, Cell, Player};

use super::agent::Agent;
use super::difficulty::Difficulty;

/// Score of a decided game. Dominates any heuristic value so a real win or
/// loss is never out-ranked by positional scoring.
const WIN_SCORE: f64 = 10_000.0;

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, player: Player) -> f64;
}

/// Window directions from an origin cell: right, down, down-right, down-left.
const WINDOW_DIRS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Default heuristic: center-column control plus partial-line windows opening
/// at every occupied cell.
pub struct WindowHeuristic;

impl WindowHeuristic {
    const CENTER_WEIGHT: f64 = 3.0;
    const WINDOW_FOUR: f64 = 100.0;
    const WINDOW_THREE: f64 = 10.0;
    const WINDOW_TWO: f64 = 2.0;

    /// Score the four-cell windows opening at (row, col) for the owner of
    /// `cell`. A window scores only when the remaining cells are empty:
    /// 4 together > 3 with 1 gap > 2 with 2 gaps.
    fn window_score(board: &Board, row: usize, col: usize, cell: Cell) -> f64 {
        let mut score = 0.0;
        for (dr, dc) in WINDOW_DIRS {
            let mut count = 0;
            let mut empty = 0;
            for i in 0..4 {
                let r = row as i32 + dr * i;
                let c = col as i32 + dc * i;
                if r < 0 || r >= board.rows() as i32 || c < 0 || c >= board.cols() as i32 {
                    continue;
                }
                let occupant = board.get(r as usize, c as usize);
                if occupant == cell {
                    count += 1;
                } else if occupant == Cell::Empty {
                    empty += 1;
                }
            }
            if count == 4 {
                score += Self::WINDOW_FOUR;
            } else if count == 3 && empty == 1 {
                score += Self::WINDOW_THREE;
            } else if count == 2 && empty == 2 {
                score += Self::WINDOW_TWO;
            }
        }
        score
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> f64 {
        let own = Cell::from(player);
        let opp = Cell::from(player.other());
        let mut score = 0.0;

        // Center column preference
        let center = board.cols() / 2;
        for row in 0..board.rows() {
            let cell = board.get(row, center);
            if cell == own {
                score += Self::CENTER_WEIGHT;
            } else if cell == opp {
                score -= Self::CENTER_WEIGHT;
            }
        }

        // Threat windows from every occupied cell, signed by ownership
        for row in 0..board.rows() {
            for col in 0..board.cols() {
                if board.get(row, col) != Cell::Empty {
                    score += Self::window_score(board, row, col, own);
                    score -= Self::window_score(board, row, col, opp);
                }
            }
        }

        score
    }
}

/// Depth-limited minimax with alpha-beta pruning. The Computer maximizes,
/// the Human minimizes; the acting side is forced onto each hypothetical
/// clone so the two branches stay mechanically symmetric. Columns are
/// scanned in ascending order, which keeps the pruning sequence (and thus
/// explored nodes) reproducible.
fn minimax(
    board: &Board,
    depth: usize,
    maximizing: bool,
    mut alpha: f64,
    mut beta: f64,
    heuristic: &dyn Heuristic,
) -> f64 {
    if board.game_over() {
        return match board.winner() {
            Some(Player::Computer) => WIN_SCORE,
            Some(Player::Human) => -WIN_SCORE,
            None => 0.0,
        };
    }
    if depth == 0 {
        return heuristic.evaluate(board, Player::Computer);
    }

    let side = if maximizing {
        Player::Computer
    } else {
        Player::Human
    };
    let mut best = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };

    for col in board.get_valid_moves() {
        let mut child = board.clone();
        child.set_current_player(side);
        child.drop_piece(col);
        let score = minimax(&child, depth - 1, !maximizing, alpha, beta, heuristic);
        if maximizing {
            best = best.max(score);
            alpha = alpha.max(score);
        } else {
            best = best.min(score);
            beta = beta.min(score);
        }
        if beta <= alpha {
            break;
        }
    }

    best
}

/// Adversarial move selector for the Computer side.
///
/// Selection pipeline, first applicable rule wins:
/// 1. difficulty gate: weak tiers sometimes play a random valid column;
/// 2. immediate win: take a column that ends the game now;
/// 3. immediate block: deny the Human a column that would end it;
/// 4. depth-limited minimax over every valid column.
///
/// The engine only ever works on clones of the board it is given.
pub struct SearchEngine {
    depth: usize,
    easy_blunder_chance: f64,
    medium_blunder_chance: f64,
    heuristic: Box<dyn Heuristic>,
    rng: StdRng,
}

impl SearchEngine {
    pub fn new(depth: usize) -> Self {
        Self::build(
            depth,
            Difficulty::Easy.default_blunder_chance(),
            Difficulty::Medium.default_blunder_chance(),
            StdRng::from_os_rng(),
        )
    }

    /// Deterministic variant for reproducible tests.
    pub fn seeded(depth: usize, seed: u64) -> Self {
        Self::build(
            depth,
            Difficulty::Easy.default_blunder_chance(),
            Difficulty::Medium.default_blunder_chance(),
            StdRng::seed_from_u64(seed),
        )
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::build(
            config.depth,
            config.easy_blunder_chance,
            config.medium_blunder_chance,
            StdRng::from_os_rng(),
        )
    }

    pub fn from_config_seeded(config: &SearchConfig, seed: u64) -> Self {
        Self::build(
            config.depth,
            config.easy_blunder_chance,
            config.medium_blunder_chance,
            StdRng::seed_from_u64(seed),
        )
    }

    fn build(depth: usize, easy: f64, medium: f64, rng: StdRng) -> Self {
        SearchEngine {
            depth: depth.max(1),
            easy_blunder_chance: easy,
            medium_blunder_chance: medium,
            heuristic: Box::new(WindowHeuristic),
            rng,
        }
    }

    /// Swap in a different evaluator.
    pub fn with_heuristic(mut self, heuristic: Box<dyn Heuristic>) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Change the search horizon (and therefore the difficulty tier) for
    /// future move requests.
    pub fn set_depth(&mut self, depth: usize) {
        self.depth = depth.max(1);
    }

    pub fn difficulty(&self) -> Difficulty {
        Difficulty::from_depth(self.depth)
    }

    fn blunder_chance(&self) -> f64 {
        match self.difficulty() {
            Difficulty::Easy => self.easy_blunder_chance,
            Difficulty::Medium => self.medium_blunder_chance,
            Difficulty::Hard => 0.0,
        }
    }

    fn random_column(&mut self, moves: &[usize]) -> usize {
        moves[self.rng.random_range(0..moves.len())]
    }

    /// Would dropping in `col` as `side` end the game with `side` winning?
    fn wins_if_played(board: &Board, col: usize, side: Player) -> bool {
        let mut probe = board.clone();
        probe.set_current_player(side);
        probe.drop_piece(col);
        probe.winner() == Some(side)
    }

    /// Pick the Computer's column, or `None` when the board is already
    /// decided or full.
    pub fn choose_move(&mut self, board: &Board) -> Option<usize> {
        if board.game_over() {
            return None;
        }
        let moves = board.get_valid_moves();
        // A full board is always terminal, so a running game must offer a
        // column; an empty list here is a Board invariant violation.
        debug_assert!(!moves.is_empty(), "no valid moves on a running game");
        if moves.is_empty() {
            return None;
        }

        // Difficulty gate: weak tiers sometimes skip the search entirely.
        let chance = self.blunder_chance();
        if chance > 0.0 && self.rng.random_bool(chance) {
            return Some(self.random_column(&moves));
        }

        // Immediate win
        for &col in &moves {
            if Self::wins_if_played(board, col, Player::Computer) {
                return Some(col);
            }
        }

        // Block the Human's immediate win
        for &col in &moves {
            if Self::wins_if_played(board, col, Player::Human) {
                return Some(col);
            }
        }

        // Full search. The fallback is pre-seeded with a random valid column
        // and survives only if no branch outranks negative infinity.
        let mut best_score = f64::NEG_INFINITY;
        let mut best_col = self.random_column(&moves);
        for &col in &moves {
            let mut child = board.clone();
            child.set_current_player(Player::Computer);
            child.drop_piece(col);
            let score = minimax(
                &child,
                self.depth - 1,
                false,
                f64::NEG_INFINITY,
                f64::INFINITY,
                self.heuristic.as_ref(),
            );
            if score > best_score {
                best_score = score;
                best_col = col;
            }
        }
        Some(best_col)
    }
}

impl Agent for SearchEngine {
    fn select_move(&mut self, board: &Board) -> Option<usize> {
        self.choose_move(board)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
