use std::io::{self, Write};

/// Per-pass progress on stdout. Only prints when the whole percentage changes.
pub struct Progress {
    total_cells: usize,
    last_percent: Option<u32>,
    quiet: bool,
}

impl Progress {
    pub fn new(total_cells: usize, quiet: bool) -> Self {
        Self {
            total_cells,
            last_percent: None,
            quiet,
        }
    }

    pub fn start_pass(&mut self, pass: u32, passes: u32) {
        self.last_percent = None;
        if !self.quiet {
            println!();
            print!("\rBlur pass {}/{}", pass + 1, passes);
            flush();
        }
    }

    /// Returns the new percentage when it changed.
    pub fn cell_done(&mut self, done: usize) -> Option<u32> {
        let percent = percent(done, self.total_cells);
        if self.last_percent == Some(percent) {
            return None;
        }
        self.last_percent = Some(percent);
        if !self.quiet {
            print!("\rProgress = {}%", percent);
            flush();
        }
        Some(percent)
    }

    pub fn finish(&mut self) {
        if !self.quiet {
            println!();
            println!("Blurring complete");
        }
    }
}

fn percent(done: usize, total: usize) -> u32 {
    if total == 0 {
        return 100;
    }
    (done as u64 * 100 / total as u64) as u32
}

fn flush() {
    // progress output is best effort
    let _ = io::stdout().flush();
}
