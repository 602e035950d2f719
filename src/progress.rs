// src/progress.rs
/// Lightweight progress reporting used by long-running operations (fetch/export).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of people to fetch.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one person's records are in.
    fn item_done(&mut self, _name: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Console sink for the CLI: every status line goes to stderr.
pub struct ConsoleProgress {
    done: usize,
    total: usize,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self { done: 0, total: 0 }
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self { Self::new() }
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        eprintln!("Fetching {total} profile(s)");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("  {msg}");
    }
    fn item_done(&mut self, name: &str) {
        self.done += 1;
        eprintln!("Fetched {name} ({}/{})", self.done, self.total);
    }
    fn finish(&mut self) {
        eprintln!("Fetch complete ({}/{})", self.done, self.total);
    }
}
