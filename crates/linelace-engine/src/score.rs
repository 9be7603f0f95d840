//! Combo and score bookkeeping.

use crate::ClearPlan;

/// Scoring constants, configurable per session rather than hardcoded in the
/// engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreConfig {
    /// Score awarded per combo step on each successful placement.
    pub combo_base: u32,
    /// Score awarded per cleared cell when a cascade fires.
    pub clear_cell_bonus: u32,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            combo_base: 10,
            clear_cell_bonus: 10,
        }
    }
}

/// Tracks the consecutive-completion combo and the running session score.
///
/// The combo grows by the number of cells a move completes and resets to
/// zero on a move that completes none. A rejected placement changes
/// nothing; the session surfaces it as a wrong-move signal instead.
///
/// # Examples
///
/// ```
/// use linelace_engine::{ComboScorer, ScoreConfig};
///
/// let mut scorer = ComboScorer::new(ScoreConfig::default());
/// let delta = scorer.on_placement(2, 1);
/// assert_eq!(scorer.combo(), 1);
/// assert_eq!(delta, 2 + 10);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComboScorer {
    combo: u32,
    score: u32,
    config: ScoreConfig,
}

impl ComboScorer {
    /// Creates a scorer with zero score and combo.
    #[must_use]
    pub const fn new(config: ScoreConfig) -> Self {
        Self {
            combo: 0,
            score: 0,
            config,
        }
    }

    /// Current combo count.
    #[must_use]
    pub const fn combo(&self) -> u32 {
        self.combo
    }

    /// Running session score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Registers a successful placement and returns the score delta.
    ///
    /// `segments_placed` is the number of edges the placement filled;
    /// `completed_cells` how many cells it completed. The delta is the
    /// segment count plus the combo base times the updated combo.
    pub fn on_placement(&mut self, segments_placed: u32, completed_cells: u32) -> u32 {
        self.combo = if completed_cells > 0 {
            self.combo + completed_cells
        } else {
            0
        };
        let delta = segments_placed + self.config.combo_base * self.combo;
        self.score += delta;
        delta
    }

    /// Registers a fired cascade and returns the bonus, once per cascade
    /// regardless of the primary/orphan split. Zero for an empty plan.
    pub fn on_clear(&mut self, plan: &ClearPlan) -> u32 {
        let cells = u32::try_from(plan.cell_count()).unwrap_or(u32::MAX);
        let bonus = self.config.clear_cell_bonus * cells;
        self.score += bonus;
        bonus
    }

    /// Resets score and combo for a new session.
    pub fn reset(&mut self) {
        self.combo = 0;
        self.score = 0;
    }
}

#[cfg(test)]
mod tests {
    use linelace_core::{CellPos, GridModel, HighlightSet};

    use super::*;
    use crate::commit;

    #[test]
    fn test_combo_accumulates_and_resets() {
        let mut scorer = ComboScorer::new(ScoreConfig::default());

        assert_eq!(scorer.on_placement(4, 1), 4 + 10);
        assert_eq!(scorer.combo(), 1);

        assert_eq!(scorer.on_placement(4, 2), 4 + 30);
        assert_eq!(scorer.combo(), 3);

        // A move completing nothing resets the combo.
        assert_eq!(scorer.on_placement(1, 0), 1);
        assert_eq!(scorer.combo(), 0);

        assert_eq!(scorer.score(), 14 + 34 + 1);
    }

    #[test]
    fn test_combo_strictly_increases_while_completing() {
        let mut scorer = ComboScorer::new(ScoreConfig::default());
        let mut previous = 0;
        for completed in [1, 1, 3, 2] {
            scorer.on_placement(1, completed);
            assert_eq!(scorer.combo(), previous + completed);
            previous = scorer.combo();
        }
    }

    #[test]
    fn test_clear_bonus_counts_primary_and_orphans_once() {
        let mut grid = GridModel::new(4, 4);
        // Stray cell above the row, then the full bottom row.
        for pos in [
            CellPos::new(2, 1),
            CellPos::new(0, 0),
            CellPos::new(1, 0),
            CellPos::new(2, 0),
        ] {
            let mut set = HighlightSet::new();
            for edge in pos.bounding_edges() {
                set.insert(edge);
            }
            commit(&set, &mut grid);
        }
        let mut set = HighlightSet::new();
        for edge in CellPos::new(3, 0).bounding_edges() {
            set.insert(edge);
        }
        let outcome = commit(&set, &mut grid);
        assert_eq!(outcome.plan.cell_count(), 5);

        let mut scorer = ComboScorer::new(ScoreConfig::default());
        assert_eq!(scorer.on_clear(&outcome.plan), 50);
        assert_eq!(scorer.score(), 50);

        // An empty plan adds nothing.
        let empty = commit(&HighlightSet::new(), &mut GridModel::new(2, 2));
        assert_eq!(scorer.on_clear(&empty.plan), 0);
        assert_eq!(scorer.score(), 50);
    }

    #[test]
    fn test_reset() {
        let mut scorer = ComboScorer::new(ScoreConfig::default());
        scorer.on_placement(3, 2);
        scorer.reset();
        assert_eq!(scorer.combo(), 0);
        assert_eq!(scorer.score(), 0);
    }
}
