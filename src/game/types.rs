// Shared enums and helper structs used by the game loop

/// What the loop should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Quit,
}

/// In-memory statistics for the current session
///
/// Only reported in the log at shutdown; nothing is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub ticks: u64,
    pub food_eaten: u32,
    pub resets: u32,
    pub best_length: usize,
}

impl SessionStats {
    pub fn new() -> Self {
        SessionStats {
            best_length: 1,
            ..Default::default()
        }
    }

    pub fn record_length(&mut self, length: usize) {
        self.best_length = self.best_length.max(length);
    }
}
