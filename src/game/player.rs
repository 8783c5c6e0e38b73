use std::fmt;

use super::board::Cell;

/// The two sides of a round. Human always moves first; the search engine
/// plays Computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    /// The opponent of this player.
    pub fn other(self) -> Player {
        if self == Player::Human {
            Player::Computer
        } else {
            Player::Human
        }
    }
}

/// A player's piece as it sits in the grid.
impl From<Player> for Cell {
    fn from(player: Player) -> Cell {
        match player {
            Player::Human => Cell::Human,
            Player::Computer => Cell::Computer,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Player::Human => "Human",
            Player::Computer => "Computer",
        })
    }
}
