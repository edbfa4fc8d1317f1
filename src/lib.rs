//! Fill in the BSD 3-Clause license from a year and an author name.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod license;
pub mod logging;
pub mod ui;
