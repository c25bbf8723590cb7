// src/progress.rs
/// Lightweight progress reporting for the long-running collect phases.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start of a phase with the number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one logical unit completes (a player or defense).
    fn item_done(&mut self, _name: &str) {}

    /// Called at the end of a phase.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Console sink; per-item lines only show up past the minimum verbosity.
pub struct ConsoleProgress {
    pub verbosity: u8,
}

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn item_done(&mut self, name: &str) {
        if self.verbosity >= 2 {
            println!("  --> {name}");
        }
    }
}
