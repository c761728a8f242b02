// src/progress.rs
/// Lightweight progress reporting used by the lookup sequence.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of calls to make.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one call of the sequence completes (e.g. "summoner").
    fn step_done(&mut self, _step: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
