//! Session events for the presentation layer.

use linelace_core::CellPos;
use linelace_engine::ClearPlan;

/// A state change produced by a session operation.
///
/// Events accumulate inside the session in the order they occurred and are
/// drained with [`Session::take_events`](crate::Session::take_events). The
/// session never calls back into its consumer.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameEvent {
    /// The score changed by `delta`, reaching `score`.
    ScoreChanged {
        /// Running score after the change.
        score: u32,
        /// Amount added by this change.
        delta: u32,
    },
    /// The combo counter changed.
    ComboChanged {
        /// Combo count after the change.
        combo: u32,
    },
    /// A placement completed these cells, in row-major order.
    CellsCompleted {
        /// The newly completed cells.
        cells: Vec<CellPos>,
    },
    /// A cascade fired. The plan carries the cleared cells and per-cell
    /// stagger hints for animation.
    LinesCleared {
        /// The applied clear plan.
        plan: ClearPlan,
    },
    /// The attempted placement did not snap onto free edges.
    WrongMove,
    /// Neither the shapes in hand nor a fresh refill fit the grid.
    NoSpace,
    /// The session ended.
    Finished {
        /// Whether the score goal was reached.
        success: bool,
        /// Whether the final score beats the best score the session was
        /// created with.
        is_best_score: bool,
    },
}
