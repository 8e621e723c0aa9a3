use crate::ui::mvi::UiState;

/// Settled position of the image info sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SheetValue {
    #[default]
    Hidden,
    PartiallyExpanded,
    Expanded,
}

/// Info sheet state. The current value is also the last accepted one,
/// which decides how a drag towards `PartiallyExpanded` resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InfoSheetState {
    pub value: SheetValue,
}

impl UiState for InfoSheetState {}

impl InfoSheetState {
    pub fn is_visible(&self) -> bool {
        self.value != SheetValue::Hidden
    }
}
