use super::Player;

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

/// Number of aligned pieces needed to win.
const WIN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Human,
    Computer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    InvalidColumn,
    ColumnFull,
    GameOver,
}

/// The four line axes, each as a pair of opposite directions:
/// horizontal, vertical, "\" diagonal, "/" diagonal.
const AXES: [[(i32, i32); 2]; 4] = [
    [(0, 1), (0, -1)],
    [(1, 0), (-1, 0)],
    [(1, 1), (-1, -1)],
    [(1, -1), (-1, 1)],
];

/// Connect Four game state machine: the grid, whose turn it is, and the
/// terminal result. Row 0 is the top, row `rows - 1` is the bottom. The only
/// mutators are [`Board::drop_piece`] / [`Board::try_drop`] and
/// [`Board::reset`]; the search explores hypothetical futures on clones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    current_player: Player,
    game_over: bool,
    winner: Option<Player>,
    last_move: Option<(usize, usize)>,
    winning_positions: Vec<(usize, usize)>,
}

impl Board {
    /// Create a new empty board with the standard 6x7 grid. Human moves first.
    pub fn new() -> Self {
        Self::with_size(DEFAULT_ROWS, DEFAULT_COLS)
    }

    /// Create a new empty board with custom dimensions.
    pub fn with_size(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
            current_player: Player::Human,
            game_over: false,
            winner: None,
            last_move: None,
            winning_positions: Vec::new(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// Player whose turn is next. Frozen once the game is over.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// The winning player, if a line was completed. `None` while the game is
    /// running and on a drawn board.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// (row, col) of the most recently placed piece.
    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    /// The exact connected cells of the winning line, ordered along the line.
    /// Empty unless a win was detected.
    pub fn winning_positions(&self) -> &[(usize, usize)] {
        &self.winning_positions
    }

    /// True iff `col` is in range and has room for another piece.
    pub fn is_valid_move(&self, col: usize) -> bool {
        col < self.cols && self.get(0, col) == Cell::Empty
    }

    /// Columns accepting a piece, in ascending order. Empty means the board
    /// is full.
    pub fn get_valid_moves(&self) -> Vec<usize> {
        (0..self.cols).filter(|&col| self.is_valid_move(col)).collect()
    }

    /// Check if the board is completely full.
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| self.get(0, col) != Cell::Empty)
    }

    /// Drop the current player's piece into `col`, returning where it landed.
    /// Runs win detection rooted at the new piece, then either finishes the
    /// game or passes the turn.
    pub fn try_drop(&mut self, col: usize) -> Result<(usize, usize), MoveError> {
        if self.game_over {
            return Err(MoveError::GameOver);
        }
        if col >= self.cols {
            return Err(MoveError::InvalidColumn);
        }
        if self.get(0, col) != Cell::Empty {
            return Err(MoveError::ColumnFull);
        }

        // Lowest empty row in this column
        let row = (0..self.rows)
            .rev()
            .find(|&row| self.get(row, col) == Cell::Empty)
            .expect("column with an empty top cell has an empty row");

        self.cells[row * self.cols + col] = Cell::from(self.current_player);
        self.last_move = Some((row, col));

        // Win check precedes the full-board check: a line completed on the
        // filling move is a win, not a draw.
        if self.check_win(row, col) {
            self.winner = Some(self.current_player);
            self.game_over = true;
        } else if self.is_full() {
            self.game_over = true;
        } else {
            self.current_player = self.current_player.other();
        }

        Ok((row, col))
    }

    /// Boolean facade over [`Board::try_drop`]: false on any invalid move or
    /// once the game is over, with no state change.
    pub fn drop_piece(&mut self, col: usize) -> bool {
        self.try_drop(col).is_ok()
    }

    /// Return to the empty-board / Human-to-move state, keeping dimensions.
    pub fn reset(&mut self) {
        *self = Board::with_size(self.rows, self.cols);
    }

    /// Force whose turn it is. Used by the search to simulate either side's
    /// move on a hypothetical clone.
    pub(crate) fn set_current_player(&mut self, player: Player) {
        self.current_player = player;
    }

    /// Check whether the piece at (row, col) completes a line. Scans each of
    /// the four axes up to 3 steps outward in both directions from the piece;
    /// a run of at least 4 records the exact cells in `winning_positions`.
    /// Only the piece just placed needs checking: a new line must pass
    /// through the cell that changed.
    fn check_win(&mut self, row: usize, col: usize) -> bool {
        let piece = self.get(row, col);
        if piece == Cell::Empty {
            return false;
        }

        for axis in AXES {
            let mut positions = vec![(row, col)];
            for (dr, dc) in axis {
                let mut r = row as i32;
                let mut c = col as i32;
                for _ in 0..WIN_LENGTH - 1 {
                    r += dr;
                    c += dc;
                    if r < 0
                        || r >= self.rows as i32
                        || c < 0
                        || c >= self.cols as i32
                        || self.get(r as usize, c as usize) != piece
                    {
                        break;
                    }
                    positions.push((r as usize, c as usize));
                }
            }
            if positions.len() >= WIN_LENGTH {
                positions.sort_unstable();
                self.winning_positions = positions;
                return true;
            }
        }

        false
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
