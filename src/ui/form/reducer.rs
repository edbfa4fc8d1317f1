use crate::ui::form::intent::FormIntent;
use crate::ui::form::state::{FormField, FormScreenState};
use crate::ui::mvi::Reducer;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormScreenState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::Insert { ch } => {
                let accepted = accepts(state.focus, ch);
                edit(state, |text| {
                    if accepted {
                        text.push(ch);
                    }
                    accepted
                })
            }
            FormIntent::Paste { text: pasted } => {
                let focus = state.focus;
                edit(state, |text| {
                    let before = text.len();
                    text.extend(pasted.chars().filter(|ch| accepts(focus, *ch)));
                    text.len() != before
                })
            }
            FormIntent::Backspace => edit(state, |text| text.pop().is_some()),
            FormIntent::FocusNext => FormScreenState {
                focus: state.focus.next(),
                ..state
            },
            FormIntent::FocusPrev => FormScreenState {
                focus: state.focus.prev(),
                ..state
            },
            FormIntent::Focus(focus) => FormScreenState { focus, ..state },
            FormIntent::Generate => match state.form.render() {
                Some(text) => FormScreenState {
                    output: Some(text),
                    stale: false,
                    scroll: 0,
                    ..state
                },
                None => state,
            },
            FormIntent::ScrollUp { lines } => FormScreenState {
                scroll: state.scroll.saturating_sub(lines),
                ..state
            },
            FormIntent::ScrollDown { lines, max } => {
                let max = if state.output.is_some() { max } else { 0 };
                FormScreenState {
                    scroll: state.scroll.saturating_add(lines).min(max),
                    ..state
                }
            }
        }
    }
}

/// Keypress filter: the year field takes digits only, neither field
/// takes control characters.
fn accepts(field: FormField, ch: char) -> bool {
    match field {
        FormField::Year => ch.is_ascii_digit(),
        FormField::Author => !ch.is_control(),
        FormField::Generate | FormField::Copy => false,
    }
}

/// Apply `change` to the focused text field. When it reports a change,
/// mark the form edited and any existing output stale.
fn edit<F>(mut state: FormScreenState, change: F) -> FormScreenState
where
    F: FnOnce(&mut String) -> bool,
{
    let text = match state.focus {
        FormField::Year => &mut state.form.year,
        FormField::Author => &mut state.form.author,
        FormField::Generate | FormField::Copy => return state,
    };
    if change(text) {
        state.edited = true;
        if state.output.is_some() {
            state.stale = true;
        }
    }
    state
}
