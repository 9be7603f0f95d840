//! The session coordinator.

use linelace_core::{GridModel, ShapeTemplate, Vec2};
use linelace_engine::{ComboScorer, ScoreConfig, apply, commit, validate};
use linelace_inventory::{
    InventorySelector, InventoryStatus, SLOT_COUNT, base_templates, expand_pool,
};
use log::{debug, info};
use rand::Rng;

use crate::{DifficultyTier, GameEvent};

/// Errors a session operation can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SessionError {
    /// No difficulty tier exists at the requested index.
    #[display("no difficulty tier at index {index}")]
    UnknownDifficulty {
        /// The rejected index.
        index: usize,
    },
    /// The addressed slot holds no shape.
    #[display("slot {index} holds no shape")]
    EmptySlot {
        /// The addressed slot.
        index: usize,
    },
    /// The session has already finished; restart it to keep playing.
    #[display("the session has already finished")]
    Finished,
}

/// One play session: a grid, a scorer, an inventory, and the rules wiring
/// them together.
///
/// The session owns no randomness; every operation that draws shapes takes
/// the caller's [`Rng`], so a seeded generator replays a session exactly.
/// State changes are reported through an internal event queue drained with
/// [`take_events`](Self::take_events).
///
/// # Examples
///
/// ```
/// use linelace_game::Session;
///
/// let mut rng = rand::rng();
/// let session = Session::new(0, 0, &mut rng).unwrap();
/// assert_eq!(session.score(), 0);
/// assert!(session.slots().iter().all(Option::is_some));
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    grid: GridModel,
    scorer: ComboScorer,
    selector: InventorySelector,
    slots: [Option<ShapeTemplate>; SLOT_COUNT],
    difficulty: usize,
    tier: DifficultyTier,
    moves: u32,
    best_score: u32,
    finished: bool,
    events: Vec<GameEvent>,
}

impl Session {
    /// Creates a session at the given difficulty with the standard shape
    /// catalog, dealing the initial slots.
    ///
    /// `best_score` is the score to beat; the final
    /// [`GameEvent::Finished`] reports whether this session topped it.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnknownDifficulty`] if no tier exists at
    /// `difficulty`.
    pub fn new<R: Rng + ?Sized>(
        difficulty: usize,
        best_score: u32,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        Self::with_pool(difficulty, best_score, expand_pool(&base_templates()), rng)
    }

    /// Creates a session drawing from a caller-provided template pool.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnknownDifficulty`] if no tier exists at
    /// `difficulty`.
    ///
    /// # Panics
    ///
    /// Panics if the pool is empty.
    pub fn with_pool<R: Rng + ?Sized>(
        difficulty: usize,
        best_score: u32,
        pool: Vec<ShapeTemplate>,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        let tier = DifficultyTier::get(difficulty)
            .ok_or(SessionError::UnknownDifficulty { index: difficulty })?;
        let mut session = Self {
            grid: GridModel::new(tier.width, tier.height),
            scorer: ComboScorer::new(ScoreConfig::default()),
            selector: InventorySelector::new(pool),
            slots: std::array::from_fn(|_| None),
            difficulty,
            tier,
            moves: 0,
            best_score,
            finished: false,
            events: Vec::new(),
        };
        session.deal(rng);
        Ok(session)
    }

    /// The play grid.
    #[must_use]
    pub fn grid(&self) -> &GridModel {
        &self.grid
    }

    /// The shape slots; `None` marks a consumed slot awaiting refill.
    #[must_use]
    pub fn slots(&self) -> &[Option<ShapeTemplate>] {
        &self.slots
    }

    /// Running session score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.scorer.score()
    }

    /// Current combo count.
    #[must_use]
    pub fn combo(&self) -> u32 {
        self.scorer.combo()
    }

    /// Number of successful placements so far.
    #[must_use]
    pub const fn moves(&self) -> u32 {
        self.moves
    }

    /// Current difficulty tier index.
    #[must_use]
    pub const fn difficulty(&self) -> usize {
        self.difficulty
    }

    /// Current difficulty tier.
    #[must_use]
    pub const fn tier(&self) -> DifficultyTier {
        self.tier
    }

    /// The score to beat, updated when a session finishes above it.
    #[must_use]
    pub const fn best_score(&self) -> u32 {
        self.best_score
    }

    /// Whether the session has ended, by winning or running out of space.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Drains the queued events, oldest first.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Highlights where the shape in `slot` would land if dropped at
    /// `pose`, replacing any previous highlight.
    ///
    /// Returns whether the pose snaps; an unsnappable pose leaves the grid
    /// without highlight.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Finished`] if the session has ended and
    /// [`SessionError::EmptySlot`] if the slot holds no shape.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is not below [`SLOT_COUNT`].
    pub fn preview(&mut self, slot: usize, pose: Vec2) -> Result<bool, SessionError> {
        if self.finished {
            return Err(SessionError::Finished);
        }
        self.grid.clear_highlight();
        let shape = self.slots[slot]
            .as_ref()
            .ok_or(SessionError::EmptySlot { index: slot })?;
        match validate(shape, pose, &self.grid) {
            Some(set) => {
                self.grid.set_highlight(&set);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Removes any placement highlight from the grid.
    pub fn clear_preview(&mut self) {
        self.grid.clear_highlight();
    }

    /// Drops the shape in `slot` at `pose`.
    ///
    /// On a snap the edges are committed, the score and combo update, any
    /// completed lines cascade away, and the inventory refills once all
    /// slots are consumed; the resulting events are queued in order. A pose
    /// that does not snap queues [`GameEvent::WrongMove`] and leaves the
    /// session unchanged. Returns whether the placement happened.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Finished`] if the session has ended and
    /// [`SessionError::EmptySlot`] if the slot holds no shape.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is not below [`SLOT_COUNT`].
    pub fn drop_shape<R: Rng + ?Sized>(
        &mut self,
        slot: usize,
        pose: Vec2,
        rng: &mut R,
    ) -> Result<bool, SessionError> {
        if self.finished {
            return Err(SessionError::Finished);
        }
        self.grid.clear_highlight();
        let shape = self.slots[slot]
            .as_ref()
            .ok_or(SessionError::EmptySlot { index: slot })?;
        let Some(set) = validate(shape, pose, &self.grid) else {
            self.events.push(GameEvent::WrongMove);
            return Ok(false);
        };

        debug!("dropping shape from slot {slot} at {pose}");
        self.slots[slot] = None;
        self.moves += 1;

        let previous_combo = self.scorer.combo();
        let outcome = commit(&set, &mut self.grid);
        let segments = u32::try_from(set.len()).unwrap_or(u32::MAX);
        let completed = u32::try_from(outcome.completed_cells.len()).unwrap_or(u32::MAX);

        let delta = self.scorer.on_placement(segments, completed);
        self.events.push(GameEvent::ScoreChanged {
            score: self.scorer.score(),
            delta,
        });
        if self.scorer.combo() != previous_combo {
            self.events.push(GameEvent::ComboChanged {
                combo: self.scorer.combo(),
            });
        }
        if !outcome.completed_cells.is_empty() {
            self.events.push(GameEvent::CellsCompleted {
                cells: outcome.completed_cells,
            });
        }

        if !outcome.plan.is_empty() {
            let bonus = self.scorer.on_clear(&outcome.plan);
            self.events.push(GameEvent::ScoreChanged {
                score: self.scorer.score(),
                delta: bonus,
            });
            apply(&outcome.plan, &mut self.grid);
            self.events.push(GameEvent::LinesCleared { plan: outcome.plan });
        }

        if self.scorer.score() >= self.tier.points_to_win {
            self.finish(true);
            return Ok(true);
        }

        let status = {
            let Self {
                selector,
                slots,
                grid,
                ..
            } = self;
            selector.update(slots, grid, rng)
        };
        if status == InventoryStatus::NoSpace {
            self.events.push(GameEvent::NoSpace);
            self.finish(false);
        }
        Ok(true)
    }

    /// Clears the board and score for another run at the current tier,
    /// dealing fresh slots. The best score carries over.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.grid = GridModel::new(self.tier.width, self.tier.height);
        self.scorer.reset();
        self.moves = 0;
        self.finished = false;
        self.events.clear();
        for slot in &mut self.slots {
            *slot = None;
        }
        self.deal(rng);
    }

    /// Moves to the next difficulty tier, clamped at the hardest one, and
    /// restarts.
    pub fn advance_difficulty<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let next = (self.difficulty + 1).min(DifficultyTier::MAX_INDEX);
        if let Some(tier) = DifficultyTier::get(next) {
            self.difficulty = next;
            self.tier = tier;
        }
        self.restart(rng);
    }

    fn finish(&mut self, success: bool) {
        self.finished = true;
        let score = self.scorer.score();
        let is_best_score = score > self.best_score;
        if is_best_score {
            self.best_score = score;
        }
        info!(
            "session finished: success={success}, score={score}, moves={}",
            self.moves
        );
        self.events.push(GameEvent::Finished {
            success,
            is_best_score,
        });
    }

    fn deal<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let Self {
            selector,
            slots,
            grid,
            ..
        } = self;
        selector.refill(slots, grid, rng);
    }
}

#[cfg(test)]
mod tests {
    use linelace_core::{CellPos, EdgeRef, FillState, Segment, ShapeId};
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    /// A pool of one shape: the four edges framing a single cell, centered
    /// on the pivot. Dropped at `(x + 0.5, y + 0.5)` it fills cell `(x, y)`.
    fn frame_pool() -> Vec<ShapeTemplate> {
        vec![ShapeTemplate::new(
            ShapeId(0),
            vec![
                Segment::horizontal(-0.5, -0.5),
                Segment::horizontal(-0.5, 0.5),
                Segment::vertical(-0.5, -0.5),
                Segment::vertical(0.5, -0.5),
            ],
            4,
            true,
        )]
    }

    fn frame_session(rng: &mut Pcg64Mcg) -> Session {
        Session::with_pool(0, 0, frame_pool(), rng).unwrap()
    }

    /// Index of the first slot still holding a shape.
    fn active_slot(session: &Session) -> usize {
        session
            .slots()
            .iter()
            .position(Option::is_some)
            .expect("a slot holds a shape")
    }

    fn drop_frame_at(session: &mut Session, cell: CellPos, rng: &mut Pcg64Mcg) {
        let slot = active_slot(session);
        let pose = Vec2::new(f32::from(cell.x) + 0.5, f32::from(cell.y) + 0.5);
        assert_eq!(session.drop_shape(slot, pose, rng), Ok(true));
    }

    #[test]
    fn test_unknown_difficulty_is_rejected() {
        let mut rng = Pcg64Mcg::seed_from_u64(1);
        assert_eq!(
            Session::new(DifficultyTier::MAX_INDEX + 1, 0, &mut rng).map(|_| ()),
            Err(SessionError::UnknownDifficulty {
                index: DifficultyTier::MAX_INDEX + 1
            })
        );
    }

    #[test]
    fn test_new_session_deals_full_slots() {
        let mut rng = Pcg64Mcg::seed_from_u64(2);
        let session = Session::new(0, 0, &mut rng).unwrap();
        assert!(session.slots().iter().all(Option::is_some));
        assert_eq!(session.score(), 0);
        assert_eq!(session.moves(), 0);
        assert!(!session.is_finished());
        assert_eq!(session.tier(), DifficultyTier::ALL[0]);
    }

    #[test]
    fn test_drop_commits_edges_and_scores() {
        let mut rng = Pcg64Mcg::seed_from_u64(3);
        let mut session = frame_session(&mut rng);

        assert_eq!(
            session.drop_shape(0, Vec2::new(0.5, 0.5), &mut rng),
            Ok(true)
        );
        assert!(session.grid().cell_filled(CellPos::new(0, 0)));
        assert_eq!(session.moves(), 1);
        // 4 segments plus the combo bonus for one completed cell.
        assert_eq!(session.score(), 14);
        assert!(session.slots()[0].is_none());

        let events = session.take_events();
        assert_eq!(
            events,
            vec![
                GameEvent::ScoreChanged {
                    score: 14,
                    delta: 14
                },
                GameEvent::ComboChanged { combo: 1 },
                GameEvent::CellsCompleted {
                    cells: vec![CellPos::new(0, 0)]
                },
            ]
        );
        assert!(session.take_events().is_empty());
    }

    #[test]
    fn test_wrong_move_keeps_slot_and_state() {
        let mut rng = Pcg64Mcg::seed_from_u64(4);
        let mut session = frame_session(&mut rng);

        assert_eq!(
            session.drop_shape(0, Vec2::new(50.0, 50.0), &mut rng),
            Ok(false)
        );
        assert_eq!(session.take_events(), vec![GameEvent::WrongMove]);
        assert_eq!(session.moves(), 0);
        assert_eq!(session.score(), 0);
        assert!(session.slots()[0].is_some());
    }

    #[test]
    fn test_empty_slot_is_an_error() {
        let mut rng = Pcg64Mcg::seed_from_u64(5);
        let mut session = frame_session(&mut rng);
        session.drop_shape(0, Vec2::new(0.5, 0.5), &mut rng).unwrap();
        assert_eq!(
            session.drop_shape(0, Vec2::new(1.5, 0.5), &mut rng),
            Err(SessionError::EmptySlot { index: 0 })
        );
    }

    #[test]
    fn test_preview_highlights_and_clears() {
        let mut rng = Pcg64Mcg::seed_from_u64(6);
        let mut session = frame_session(&mut rng);

        assert_eq!(session.preview(0, Vec2::new(0.5, 0.5)), Ok(true));
        assert_eq!(
            session.grid().edge(EdgeRef::horizontal(0, 0)),
            FillState::Highlight
        );

        session.clear_preview();
        assert_eq!(
            session.grid().edge(EdgeRef::horizontal(0, 0)),
            FillState::Empty
        );

        // An unsnappable pose reports false and leaves no highlight.
        assert_eq!(session.preview(0, Vec2::new(50.0, 50.0)), Ok(false));
        assert_eq!(
            session.grid().edge(EdgeRef::horizontal(0, 0)),
            FillState::Empty
        );
    }

    #[test]
    fn test_completing_a_row_clears_and_wins() {
        let mut rng = Pcg64Mcg::seed_from_u64(7);
        let mut session = frame_session(&mut rng);

        // Fill the bottom row cell by cell. Each frame completes a cell, so
        // the combo climbs 1..=5 and the fifth drop both clears the row and
        // pushes the score past the tier goal.
        for x in 0..4 {
            drop_frame_at(&mut session, CellPos::new(x, 0), &mut rng);
        }
        assert_eq!(session.combo(), 4);
        assert_eq!(session.score(), 14 + 24 + 34 + 44);
        assert!(!session.is_finished());
        session.take_events();

        drop_frame_at(&mut session, CellPos::new(4, 0), &mut rng);
        assert!(session.is_finished());
        assert_eq!(session.score(), 116 + 54 + 50);
        assert_eq!(session.best_score(), 220);

        let events = session.take_events();
        assert!(events.iter().any(|event| matches!(
            event,
            GameEvent::LinesCleared { plan } if plan.cell_count() == 5
        )));
        assert_eq!(
            events.last(),
            Some(&GameEvent::Finished {
                success: true,
                is_best_score: true
            })
        );

        // The cascade left the board empty again.
        for pos in session.grid().cell_positions() {
            assert!(!session.grid().cell_filled(pos));
        }
    }

    #[test]
    fn test_finished_session_rejects_moves() {
        let mut rng = Pcg64Mcg::seed_from_u64(8);
        let mut session = frame_session(&mut rng);
        for x in 0..5 {
            drop_frame_at(&mut session, CellPos::new(x, 0), &mut rng);
        }
        assert!(session.is_finished());
        assert_eq!(
            session.drop_shape(active_slot(&session), Vec2::new(0.5, 1.5), &mut rng),
            Err(SessionError::Finished)
        );
        assert_eq!(
            session.preview(active_slot(&session), Vec2::new(0.5, 1.5)),
            Err(SessionError::Finished)
        );
    }

    #[test]
    fn test_restart_preserves_best_score() {
        let mut rng = Pcg64Mcg::seed_from_u64(9);
        let mut session = frame_session(&mut rng);
        for x in 0..5 {
            drop_frame_at(&mut session, CellPos::new(x, 0), &mut rng);
        }
        let best = session.best_score();
        assert!(best > 0);

        session.restart(&mut rng);
        assert!(!session.is_finished());
        assert_eq!(session.score(), 0);
        assert_eq!(session.moves(), 0);
        assert_eq!(session.best_score(), best);
        assert!(session.slots().iter().all(Option::is_some));
        assert!(session.take_events().is_empty());
        for pos in session.grid().cell_positions() {
            assert!(!session.grid().cell_filled(pos));
        }
    }

    #[test]
    fn test_advance_difficulty_clamps_at_hardest_tier() {
        let mut rng = Pcg64Mcg::seed_from_u64(10);
        let mut session = frame_session(&mut rng);
        assert_eq!(session.difficulty(), 0);

        for _ in 0..DifficultyTier::ALL.len() + 2 {
            session.advance_difficulty(&mut rng);
        }
        assert_eq!(session.difficulty(), DifficultyTier::MAX_INDEX);
        let hardest = DifficultyTier::ALL[DifficultyTier::MAX_INDEX];
        assert_eq!(session.grid().width(), hardest.width);
        assert_eq!(session.grid().height(), hardest.height);
    }

    #[test]
    fn test_seeded_sessions_replay_identically() {
        let play = |seed| {
            let mut rng = Pcg64Mcg::seed_from_u64(seed);
            let mut session = Session::new(0, 0, &mut rng).unwrap();
            let ids: Vec<_> = session
                .slots()
                .iter()
                .flatten()
                .map(ShapeTemplate::id)
                .collect();
            session.drop_shape(0, Vec2::new(50.0, 50.0), &mut rng).unwrap();
            (ids, session.take_events())
        };
        assert_eq!(play(77), play(77));
    }
}
