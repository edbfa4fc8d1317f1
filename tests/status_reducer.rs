use bsd3gen::ui::mvi::Reducer;
use bsd3gen::ui::status::{StatusIntent, StatusKind, StatusLineState, StatusReducer};
use std::time::{Duration, Instant};

const TTL: Duration = Duration::from_secs(3);

fn show(state: StatusLineState, message: &str, now: Instant) -> StatusLineState {
    StatusReducer::reduce(
        state,
        StatusIntent::Show {
            message: message.to_string(),
            kind: StatusKind::Success,
            now,
            ttl: TTL,
        },
    )
}

#[test]
fn hidden_is_default() {
    assert_eq!(StatusLineState::default(), StatusLineState::Hidden);
    assert!(StatusLineState::default().message().is_none());
}

#[test]
fn show_makes_message_visible() {
    let state = show(StatusLineState::Hidden, "done", Instant::now());
    assert!(state.is_visible());
    assert_eq!(state.message(), Some(("done", StatusKind::Success)));
}

#[test]
fn tick_before_deadline_keeps_message() {
    let start = Instant::now();
    let state = show(StatusLineState::Hidden, "done", start);
    let state = StatusReducer::reduce(
        state,
        StatusIntent::Tick {
            now: start + Duration::from_millis(2999),
        },
    );
    assert!(state.is_visible());
}

#[test]
fn tick_at_deadline_clears_message() {
    let start = Instant::now();
    let state = show(StatusLineState::Hidden, "done", start);
    let state = StatusReducer::reduce(state, StatusIntent::Tick { now: start + TTL });
    assert_eq!(state, StatusLineState::Hidden);
}

#[test]
fn new_message_cancels_pending_clear() {
    let start = Instant::now();
    let state = show(StatusLineState::Hidden, "first", start);
    let state = show(state, "second", start + Duration::from_secs(2));

    // The first message's deadline passes without clearing the second
    let state = StatusReducer::reduce(state, StatusIntent::Tick { now: start + TTL });
    assert_eq!(state.message(), Some(("second", StatusKind::Success)));

    let state = StatusReducer::reduce(
        state,
        StatusIntent::Tick {
            now: start + Duration::from_secs(5),
        },
    );
    assert!(!state.is_visible());
}

#[test]
fn tick_on_hidden_is_a_no_op() {
    let state = StatusReducer::reduce(
        StatusLineState::Hidden,
        StatusIntent::Tick {
            now: Instant::now(),
        },
    );
    assert_eq!(state, StatusLineState::Hidden);
}
