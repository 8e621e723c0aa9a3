use crate::ui::mvi::Reducer;
use crate::ui::sheet::intent::SheetIntent;
use crate::ui::sheet::state::{InfoSheetState, SheetValue};

pub struct SheetReducer;

impl Reducer for SheetReducer {
    type State = InfoSheetState;
    type Intent = SheetIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let value = match (state.value, intent) {
            (SheetValue::Hidden, SheetIntent::Open) => SheetValue::PartiallyExpanded,
            (current, SheetIntent::Open) => current,
            (_, SheetIntent::Dismiss) => SheetValue::Hidden,

            // Collapsing from fully open skips the middle stop and closes.
            (SheetValue::Expanded, SheetIntent::Settle(SheetValue::PartiallyExpanded)) => {
                SheetValue::Hidden
            }
            // Opening always stops at the middle first.
            (SheetValue::Hidden, SheetIntent::Settle(SheetValue::Expanded)) => {
                SheetValue::PartiallyExpanded
            }
            (_, SheetIntent::Settle(target)) => target,
        };
        InfoSheetState { value }
    }
}
