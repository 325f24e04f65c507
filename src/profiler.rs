use std::time::{Duration, Instant};

/// Prints how long each step of a run takes, and the total when dropped.
pub struct Profiler {
    start_time: Instant,
    curr: Option<Step>,
    quiet: bool,
}

struct Step {
    start_time: Instant,
    name: &'static str,
}

fn seconds(elapsed: Duration) -> f64 {
    elapsed.as_secs() as f64 + elapsed.subsec_millis() as f64 / 1_000.0
}

impl Profiler {
    pub fn new(quiet: bool) -> Self {
        Self {
            start_time: Instant::now(),
            curr: None,
            quiet,
        }
    }

    pub fn step(&mut self, step_name: &'static str) {
        self.finish();
        if !self.quiet {
            println!("{} - START", step_name);
        }
        self.curr = Some(Step {
            start_time: Instant::now(),
            name: step_name,
        });
    }

    pub fn finish(&mut self) {
        if let Some(step) = self.curr.take() {
            if !self.quiet {
                println!("{} - STOP {:.3} s", step.name, seconds(step.start_time.elapsed()));
            }
        }
    }

    pub fn total(&mut self) {
        self.finish();
        if !self.quiet {
            println!("TOTAL - {:.3} s", seconds(self.start_time.elapsed()));
        }
    }
}

impl Drop for Profiler {
    fn drop(&mut self) {
        self.total()
    }
}
