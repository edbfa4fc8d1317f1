use crate::ui::mvi::Intent;
use crate::ui::status::state::StatusKind;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusIntent {
    Show {
        message: String,
        kind: StatusKind,
        now: Instant,
        ttl: Duration,
    },
    /// Clock advanced; clears the message once its deadline has passed.
    Tick { now: Instant },
}

impl Intent for StatusIntent {}
