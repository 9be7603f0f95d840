//! Difficulty tiers: board size and the score goal.

/// Board dimensions and win goal for one difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyTier {
    /// Grid width in cells.
    pub width: u8,
    /// Grid height in cells.
    pub height: u8,
    /// Score at which the session is won.
    pub points_to_win: u32,
}

impl DifficultyTier {
    /// All tiers, in ascending order of difficulty.
    pub const ALL: [Self; 3] = [
        Self {
            width: 5,
            height: 5,
            points_to_win: 200,
        },
        Self {
            width: 6,
            height: 6,
            points_to_win: 280,
        },
        Self {
            width: 8,
            height: 8,
            points_to_win: 400,
        },
    ];

    /// Index of the hardest tier.
    pub const MAX_INDEX: usize = Self::ALL.len() - 1;

    /// Looks up a tier by index.
    #[must_use]
    pub fn get(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}
