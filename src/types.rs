//! Common types and data structures

/// Background painted on the root surface and both time labels while an
/// alert has been shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertColor {
    Neutral,
    Red,
}

impl AlertColor {
    pub fn toggled(self) -> Self {
        match self {
            AlertColor::Neutral => AlertColor::Red,
            AlertColor::Red => AlertColor::Neutral,
        }
    }
}

/// Recurring tasks driven by the frame loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    DisplayRefresh,
    ClockTick,
    Blink,
}

/// Why an "H:M:S" duration string was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseDurationError {
    #[error("expected 3 ':'-separated fields, got {0}")]
    FieldCount(usize),

    #[error("field {0:?} is not a non-negative integer")]
    InvalidField(String),

    #[error("duration does not fit in u64 seconds")]
    Overflow,
}
