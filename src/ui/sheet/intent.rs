use crate::ui::mvi::Intent;
use crate::ui::sheet::state::SheetValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetIntent {
    /// Info button tapped.
    Open,
    /// Sheet asked to settle at a value (drag released, fling, animation step).
    Settle(SheetValue),
    /// Scrim tapped or back pressed.
    Dismiss,
}

impl Intent for SheetIntent {}
