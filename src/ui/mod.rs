//! Terminal form: two fields, two buttons, the license output and a
//! transient status line.

pub mod app;
pub mod events;
pub mod footer;
pub mod form;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod status;
pub mod terminal_guard;
pub mod theme;
