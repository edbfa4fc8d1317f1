use crate::ui::mvi::Reducer;
use crate::ui::status::intent::StatusIntent;
use crate::ui::status::state::StatusLineState;

pub struct StatusReducer;

impl Reducer for StatusReducer {
    type State = StatusLineState;
    type Intent = StatusIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            StatusIntent::Show {
                message,
                kind,
                now,
                ttl,
            } => StatusLineState::Visible {
                message,
                kind,
                expires_at: now + ttl,
            },
            StatusIntent::Tick { now } => match state {
                StatusLineState::Visible { expires_at, .. } if now >= expires_at => {
                    StatusLineState::Hidden
                }
                other => other,
            },
        }
    }
}
