//! The tri-state fill model shared by dots, edges, and cells.

/// Fill state of a single grid element (dot, edge, or cell).
///
/// `Highlight` marks an edge that a candidate placement would fill; it is a
/// presentation hint and is treated as unoccupied by placement validation.
///
/// # Examples
///
/// ```
/// use linelace_core::FillState;
///
/// assert!(FillState::Filled.is_filled());
/// assert!(!FillState::Highlight.is_filled());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::Display)]
pub enum FillState {
    /// Not occupied.
    #[default]
    Empty,
    /// Provisionally marked by a candidate placement.
    Highlight,
    /// Permanently occupied until cleared.
    Filled,
}

impl FillState {
    /// Returns `true` for [`FillState::Filled`] only.
    #[must_use]
    pub const fn is_filled(self) -> bool {
        matches!(self, Self::Filled)
    }

    /// Returns the filled state for `true`, empty for `false`.
    #[must_use]
    pub const fn from_filled(filled: bool) -> Self {
        if filled { Self::Filled } else { Self::Empty }
    }
}
