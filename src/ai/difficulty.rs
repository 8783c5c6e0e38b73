/// Difficulty tier derived from the configured search depth. The tier
/// controls how often the engine plays a random column instead of searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Map a search depth onto its tier: shallow searches make a weak
    /// opponent even before randomization.
    pub fn from_depth(depth: usize) -> Difficulty {
        match depth {
            0..=2 => Difficulty::Easy,
            3..=4 => Difficulty::Medium,
            _ => Difficulty::Hard,
        }
    }

    /// The canonical search depth for a tier, as offered by difficulty
    /// selection front-ends.
    pub fn preset_depth(self) -> usize {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 6,
        }
    }

    /// Default probability of replacing the searched move with a uniformly
    /// random valid column.
    pub fn default_blunder_chance(self) -> f64 {
        match self {
            Difficulty::Easy => 0.7,
            Difficulty::Medium => 0.3,
            Difficulty::Hard => 0.0,
        }
    }

    /// Get tier name for display
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}
