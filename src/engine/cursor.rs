//! Forward/backward navigation over a trace.

use super::steps::{Step, Trace};

/// Position within a [`Trace`] for interactive stepping.
#[derive(Clone, Copy, Debug)]
pub struct TraceCursor<'a> {
    trace: &'a Trace,
    position: usize,
}

impl<'a> TraceCursor<'a> {
    /// Start at step 0.
    pub fn new(trace: &'a Trace) -> Self {
        Self { trace, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn current(&self) -> Option<&'a Step> {
        self.trace.get(self.position)
    }

    /// Advance one step. Stays on the last step once there.
    pub fn forward(&mut self) -> Option<&'a Step> {
        if self.position + 1 < self.trace.len() {
            self.position += 1;
        }
        self.current()
    }

    /// Go back one step. Stays on step 0 once there.
    pub fn back(&mut self) -> Option<&'a Step> {
        self.position = self.position.saturating_sub(1);
        self.current()
    }

    pub fn reset(&mut self) {
        self.position = 0;
    }

    pub fn is_at_end(&self) -> bool {
        self.position + 1 >= self.trace.len()
    }
}
